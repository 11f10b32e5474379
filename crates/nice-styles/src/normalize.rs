//! Style tree normalization.
//!
//! The [`Normalizer`] walks a [`StyleTree`] and routes each key, first match
//! wins:
//!
//! | Value / key                      | Result                                 |
//! |----------------------------------|----------------------------------------|
//! | `null` (empty values not kept)   | key omitted                            |
//! | string or number                 | copied unchanged, no unit added        |
//! | color-bearing key, parsed color  | handed to the [`ColorConverter`]       |
//! | renderable or color              | rendered                               |
//! | color-bearing key                | handed to the [`ColorConverter`]       |
//! | `transform` / `filter`           | serialized to a function chain         |
//! | key starting with `@` or `&`     | normalized recursively                 |
//! | array                            | space-joined, integral numbers get `px`|
//! | anything else                    | [`StyleError::InvalidValue`]           |
//!
//! # Example
//!
//! ```
//! use nice_styles::{Normalizer, StyleTree};
//! use serde_json::json;
//!
//! let tree: StyleTree = serde_json::from_value(json!({
//!     "width": 10,
//!     "margin": [10, 20],
//!     "border": ["1px", "red"],
//!     "transform": { "x": 10, "scale": 1.5 },
//!     "&:hover": { "color": "blue", "gap": null }
//! })).unwrap();
//!
//! let css = Normalizer::new().normalize(&tree).unwrap();
//!
//! assert_eq!(serde_json::to_value(&css).unwrap(), json!({
//!     "width": 10,
//!     "margin": "10px 20px",
//!     "border": "1px red solid",
//!     "transform": "translateX(10px) scale(1.5)",
//!     "&:hover": { "color": "blue" }
//! }));
//! ```

use log::{debug, trace};

use crate::color::{ColorConverter, CssColorConverter};
use crate::error::{Result, StyleError};
use crate::render::render_css;
use crate::rules::Rules;
use crate::value::{CssEntry, CssTree, CssValue, StyleTree, StyleValue};

/// Normalizes style trees into CSS-ready trees.
///
/// A normalizer is immutable once built: it owns its [`Rules`] and its color
/// converter, and every call allocates a fresh output tree.
#[derive(Debug, Clone)]
pub struct Normalizer<C = CssColorConverter> {
    rules: Rules,
    colors: C,
}

impl Normalizer {
    /// Creates a normalizer with default rules and the default color converter.
    pub fn new() -> Self {
        Self {
            rules: Rules::default(),
            colors: CssColorConverter,
        }
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ColorConverter> Normalizer<C> {
    /// Replaces the routing rules, returning `self` for chaining.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Replaces the color converter.
    pub fn with_color_converter<D: ColorConverter>(self, colors: D) -> Normalizer<D> {
        Normalizer {
            rules: self.rules,
            colors,
        }
    }

    /// Returns the routing rules.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Normalizes `tree`, dropping null values.
    pub fn normalize(&self, tree: &StyleTree) -> Result<CssTree> {
        self.normalize_with(tree, false, "")
    }

    /// Normalizes `tree`.
    ///
    /// With `include_empty`, null values are kept as [`CssEntry::Empty`]
    /// instead of being dropped. This only applies to the top level; nested
    /// blocks always drop nulls. `error_label` prefixes the message of any
    /// error raised at this level.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidValue`] for the first value whose shape
    /// doesn't fit its key. No partial output is returned.
    pub fn normalize_with(
        &self,
        tree: &StyleTree,
        include_empty: bool,
        error_label: &str,
    ) -> Result<CssTree> {
        let mut out = CssTree::with_capacity(tree.len());
        for (key, value) in tree {
            match self.normalize_entry(key, value, include_empty, error_label)? {
                Some(entry) => {
                    out.insert(key.clone(), entry);
                }
                None => debug!("dropping empty style value for {}", key),
            }
        }
        Ok(out)
    }

    fn normalize_entry(
        &self,
        key: &str,
        value: &StyleValue,
        include_empty: bool,
        label: &str,
    ) -> Result<Option<CssEntry>> {
        match value {
            StyleValue::Null if include_empty => return Ok(Some(CssEntry::Empty)),
            StyleValue::Null => return Ok(None),
            StyleValue::Str(s) => return Ok(Some(CssEntry::from(s.as_str()))),
            StyleValue::Num(n) => return Ok(Some(CssEntry::from(*n))),
            _ => {}
        }

        // parsed colors under color keys belong to the converter
        if let StyleValue::Color(_) = value {
            if self.rules.is_color_key(key) {
                trace!("{}: color", key);
                return self.convert_color(key, value, label).map(|v| Some(v.into()));
            }
        }

        if let Some(rendered) = render_css(value) {
            trace!("{}: rendered", key);
            return Ok(Some(CssEntry::Value(rendered)));
        }

        if self.rules.is_color_key(key) {
            trace!("{}: color", key);
            return self.convert_color(key, value, label).map(|v| Some(v.into()));
        }

        if self.rules.is_transform_key(key) {
            trace!("{}: transform", key);
            let descriptor = value
                .as_tree()
                .ok_or_else(|| StyleError::invalid_value(label, key, value))?;
            let chain = self.serialize_transform_labeled(descriptor, label)?;
            return Ok(Some(CssEntry::from(chain)));
        }

        if Rules::is_nesting_key(key) {
            trace!("{}: nested block", key);
            let nested = value
                .as_tree()
                .ok_or_else(|| StyleError::invalid_value(label, key, value))?;
            return self.normalize_with(nested, false, "").map(|t| Some(CssEntry::Nested(t)));
        }

        if let StyleValue::Arr(values) = value {
            trace!("{}: array", key);
            let joined = self.coerce_array_labeled(key, values, label)?;
            return Ok(Some(CssEntry::from(joined)));
        }

        Err(StyleError::invalid_value(label, key, value))
    }

    pub(crate) fn convert_color(
        &self,
        key: &str,
        value: &StyleValue,
        label: &str,
    ) -> Result<CssValue> {
        self.colors
            .convert(value)
            .ok_or_else(|| StyleError::invalid_value(label, key, value))
    }
}
