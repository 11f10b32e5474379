//! Key routing tables.
//!
//! [`Rules`] decides how each property key is treated during normalization:
//! which keys carry colors, which hold transform descriptors, which transform
//! arguments are unitless, and how border shorthands are completed. The
//! defaults reproduce the built-in behavior; rules can be extended in code or
//! loaded from YAML/JSON.
//!
//! # Builder API
//!
//! ```rust
//! use nice_styles::Rules;
//!
//! let rules = Rules::default()
//!     .with_color_key("fill")
//!     .with_alias("r", "rotate")
//!     .with_unitless_key("opacity");
//!
//! assert!(rules.is_color_key("fill"));
//! assert_eq!(rules.transform_function("r"), "rotate");
//! ```
//!
//! # From YAML
//!
//! Missing fields keep their defaults; unknown fields are rejected.
//!
//! ```rust
//! use nice_styles::Rules;
//!
//! let rules = Rules::from_yaml(r#"
//! color_keys: [background, fill, stroke]
//! length_unit: rem
//! "#).unwrap();
//!
//! assert!(rules.is_color_key("stroke"));
//! assert_eq!(rules.length_unit(), "rem");
//! assert_eq!(rules.transform_function("x"), "translateX");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::RulesError;

/// Immutable key routing configuration for a [`Normalizer`](crate::Normalizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Rules {
    /// Keys matched exactly as color-bearing.
    color_keys: Vec<String>,
    /// Substring that marks a key as color-bearing, matched case-insensitively.
    color_marker: String,
    /// Keys whose value is a transform/filter descriptor.
    transform_keys: Vec<String>,
    /// Shorthand name → CSS function name.
    transform_aliases: IndexMap<String, String>,
    /// Transform arguments that never get a length unit.
    unitless_keys: Vec<String>,
    /// Key prefix for two-element border shorthands.
    border_prefix: String,
    /// Style appended to two-element border shorthands.
    border_style: String,
    /// Unit appended to integral numbers inside arrays and transforms.
    length_unit: String,
}

impl Default for Rules {
    fn default() -> Self {
        let transform_aliases = [
            ("x", "translateX"),
            ("y", "translateY"),
            ("z", "translateZ"),
            ("dropShadow", "drop-shadow"),
        ]
        .into_iter()
        .map(|(name, func)| (name.to_string(), func.to_string()))
        .collect();

        Self {
            color_keys: vec!["background".to_string()],
            color_marker: "color".to_string(),
            transform_keys: vec!["transform".to_string(), "filter".to_string()],
            transform_aliases,
            unitless_keys: vec![
                "scale".to_string(),
                "grayscale".to_string(),
                "brightness".to_string(),
            ],
            border_prefix: "border".to_string(),
            border_style: "solid".to_string(),
            length_unit: "px".to_string(),
        }
    }
}

impl Rules {
    /// Loads rules from YAML. Omitted fields keep their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, RulesError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Loads rules from JSON. Omitted fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, RulesError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds an exact color-bearing key.
    pub fn with_color_key(mut self, key: impl Into<String>) -> Self {
        self.color_keys.push(key.into());
        self
    }

    /// Adds a key whose value is a transform descriptor.
    pub fn with_transform_key(mut self, key: impl Into<String>) -> Self {
        self.transform_keys.push(key.into());
        self
    }

    /// Maps a transform shorthand to a CSS function name.
    pub fn with_alias(mut self, name: impl Into<String>, func: impl Into<String>) -> Self {
        self.transform_aliases.insert(name.into(), func.into());
        self
    }

    /// Adds a transform argument that keeps bare numbers.
    pub fn with_unitless_key(mut self, key: impl Into<String>) -> Self {
        self.unitless_keys.push(key.into());
        self
    }

    /// Sets the unit appended to integral numbers.
    pub fn with_length_unit(mut self, unit: impl Into<String>) -> Self {
        self.length_unit = unit.into();
        self
    }

    /// `background`, or anything containing `color` in any case.
    pub fn is_color_key(&self, key: &str) -> bool {
        self.color_keys.iter().any(|k| k == key)
            || key
                .to_lowercase()
                .contains(&self.color_marker.to_lowercase())
    }

    /// `transform` or `filter`.
    pub fn is_transform_key(&self, key: &str) -> bool {
        self.transform_keys.iter().any(|k| k == key)
    }

    /// Media queries (`@...`) and nested selectors (`&...`).
    pub fn is_nesting_key(key: &str) -> bool {
        key.starts_with('@') || key.starts_with('&')
    }

    /// Transform arguments such as `scale` that stay bare numbers.
    pub fn is_unitless_key(&self, key: &str) -> bool {
        self.unitless_keys.iter().any(|k| k == key)
    }

    /// Whether an array of `len` elements under `key` gets the default
    /// border style appended.
    pub fn takes_border_style(&self, key: &str, len: usize) -> bool {
        len == 2 && key.starts_with(self.border_prefix.as_str())
    }

    /// Style appended to two-element border shorthands.
    pub fn border_style(&self) -> &str {
        &self.border_style
    }

    /// Unit appended to integral numbers inside arrays and transforms.
    pub fn length_unit(&self) -> &str {
        &self.length_unit
    }

    /// CSS function name for a transform entry; unknown names map to themselves.
    pub fn transform_function<'a>(&'a self, name: &'a str) -> &'a str {
        self.transform_aliases
            .get(name)
            .map(String::as_str)
            .unwrap_or(name)
    }
}
