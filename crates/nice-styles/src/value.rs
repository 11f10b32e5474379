//! Input and output value types.
//!
//! A [`StyleTree`] is the caller's style description: an ordered map from
//! property keys to [`StyleValue`]s. Normalization produces a [`CssTree`] whose
//! leaves are [`CssValue`]s (strings or numbers), with nested blocks preserved
//! as [`CssEntry::Nested`].
//!
//! Style trees can be built in code through the `From` conversions, or read
//! from JSON/YAML, which classifies each JSON value into a variant:
//!
//! ```
//! use nice_styles::{StyleTree, StyleValue};
//!
//! let tree: StyleTree = serde_json::from_str(r#"{
//!     "width": 10,
//!     "margin": [10, 20],
//!     "&:hover": { "opacity": 0.5 }
//! }"#).unwrap();
//!
//! assert!(matches!(tree["margin"], StyleValue::Arr(_)));
//! assert!(matches!(tree["&:hover"], StyleValue::Nested(_)));
//! ```

use std::fmt;
use std::sync::Arc;

use csscolorparser::Color;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::color_css;
use crate::render::Renderable;

/// Ordered style description, keyed by property name.
pub type StyleTree = IndexMap<String, StyleValue>;

/// Ordered normalized output, keyed by property name.
pub type CssTree = IndexMap<String, CssEntry>;

/// Numeric value, keeping integers and floats apart.
///
/// Integral values get a length unit appended when coerced inside arrays and
/// transforms; fractional ones are treated as unitless factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Signed 64-bit integer.
    I64(i64),
    /// Unsigned 64-bit integer.
    U64(u64),
    /// 64-bit floating point.
    F64(f64),
}

impl Number {
    /// Converts the number to f64.
    pub fn to_f64(self) -> f64 {
        match self {
            Number::I64(n) => n as f64,
            Number::U64(n) => n as f64,
            Number::F64(n) => n,
        }
    }

    /// Returns `true` for floats with a fractional part, and for infinities.
    ///
    /// `1.0` is integral, `NaN` is not fractional.
    pub fn is_fractional(self) -> bool {
        match self {
            Number::F64(n) => !n.is_nan() && (n.is_infinite() || n.fract() != 0.0),
            _ => false,
        }
    }

    fn from_json(n: &serde_json::Number) -> Self {
        if let Some(i) = n.as_i64() {
            Number::I64(i)
        } else if let Some(u) = n.as_u64() {
            Number::U64(u)
        } else {
            Number::F64(n.as_f64().unwrap_or(f64::NAN))
        }
    }

    fn to_json(self) -> serde_json::Value {
        match self {
            Number::I64(n) => n.into(),
            Number::U64(n) => n.into(),
            Number::F64(n) => serde_json::Number::from_f64(n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{}", n),
            Number::U64(n) => write!(f, "{}", n),
            // negative zero prints as `0`
            Number::F64(n) if *n == 0.0 => f.write_str("0"),
            // `{}` prints integral floats without a decimal point
            Number::F64(n) => write!(f, "{}", n),
        }
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Number::I64(n) => serializer.serialize_i64(n),
            Number::U64(n) => serializer.serialize_u64(n),
            Number::F64(n) => serializer.serialize_f64(n),
        }
    }
}

impl From<i32> for Number {
    fn from(n: i32) -> Self {
        Number::I64(n as i64)
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Number::I64(n)
    }
}

impl From<u32> for Number {
    fn from(n: u32) -> Self {
        Number::U64(n as u64)
    }
}

impl From<u64> for Number {
    fn from(n: u64) -> Self {
        Number::U64(n)
    }
}

impl From<usize> for Number {
    fn from(n: usize) -> Self {
        Number::U64(n as u64)
    }
}

impl From<f32> for Number {
    fn from(n: f32) -> Self {
        Number::F64(n as f64)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Number::F64(n)
    }
}

/// A value in a style description.
///
/// Which variants are meaningful depends on the key the value sits under:
/// `Nested` is only valid under nesting keys (`@media ...`, `&:hover`) and
/// transform keys, and color-bearing keys accept whatever the configured
/// [`ColorConverter`](crate::ColorConverter) understands.
#[derive(Debug, Clone)]
pub enum StyleValue {
    /// Absent value. Dropped from output unless empty values are kept.
    Null,
    /// Boolean. Never a valid style value; present so JSON input classifies.
    Bool(bool),
    /// Literal string, copied through.
    Str(String),
    /// Number.
    Num(Number),
    /// Space-joined shorthand list, or a color tuple under a color key.
    Arr(Vec<StyleValue>),
    /// Nested style block or transform descriptor.
    Nested(StyleTree),
    /// Value that knows how to render itself.
    Css(Arc<dyn Renderable>),
    /// Parsed color.
    Color(Color),
}

impl StyleValue {
    /// Wraps a [`Renderable`] value.
    pub fn css(value: impl Renderable + 'static) -> Self {
        StyleValue::Css(Arc::new(value))
    }

    /// Returns `true` if this is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, StyleValue::Null)
    }

    /// Extracts the string, if this is a `Str`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the number, if this is a `Num`.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            StyleValue::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Extracts the nested tree, if this is `Nested`.
    pub fn as_tree(&self) -> Option<&StyleTree> {
        match self {
            StyleValue::Nested(tree) => Some(tree),
            _ => None,
        }
    }

    /// Converts into the nested tree, if this is `Nested`.
    pub fn into_tree(self) -> Option<StyleTree> {
        match self {
            StyleValue::Nested(tree) => Some(tree),
            _ => None,
        }
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            StyleValue::Null => "null",
            StyleValue::Bool(_) => "bool",
            StyleValue::Str(_) => "string",
            StyleValue::Num(_) => "number",
            StyleValue::Arr(_) => "array",
            StyleValue::Nested(_) => "object",
            StyleValue::Css(_) => "css",
            StyleValue::Color(_) => "color",
        }
    }

    /// Serializes the value to JSON. Renderable values and colors appear in
    /// their rendered form.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value;

        match self {
            StyleValue::Null => Value::Null,
            StyleValue::Bool(b) => Value::Bool(*b),
            StyleValue::Str(s) => Value::String(s.clone()),
            StyleValue::Num(n) => n.to_json(),
            StyleValue::Arr(values) => Value::Array(values.iter().map(Self::to_json).collect()),
            StyleValue::Nested(tree) => Value::Object(
                tree.iter()
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
            StyleValue::Css(r) => r.render().to_json(),
            StyleValue::Color(c) => Value::String(color_css(c)),
        }
    }
}

impl From<serde_json::Value> for StyleValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => StyleValue::Null,
            Value::Bool(b) => StyleValue::Bool(b),
            Value::Number(n) => StyleValue::Num(Number::from_json(&n)),
            Value::String(s) => StyleValue::Str(s),
            Value::Array(values) => {
                StyleValue::Arr(values.into_iter().map(StyleValue::from).collect())
            }
            Value::Object(map) => StyleValue::Nested(
                map.into_iter()
                    .map(|(key, value)| (key, StyleValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(StyleValue::from)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Str(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::Str(s)
    }
}

impl From<Number> for StyleValue {
    fn from(n: Number) -> Self {
        StyleValue::Num(n)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        StyleValue::Num(n.into())
    }
}

impl From<i64> for StyleValue {
    fn from(n: i64) -> Self {
        StyleValue::Num(n.into())
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Num(n.into())
    }
}

impl From<Color> for StyleValue {
    fn from(color: Color) -> Self {
        StyleValue::Color(color)
    }
}

impl From<StyleTree> for StyleValue {
    fn from(tree: StyleTree) -> Self {
        StyleValue::Nested(tree)
    }
}

impl<T: Into<StyleValue>> From<Vec<T>> for StyleValue {
    fn from(values: Vec<T>) -> Self {
        StyleValue::Arr(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<StyleValue>> From<Option<T>> for StyleValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(StyleValue::Null, Into::into)
    }
}

/// A CSS-ready leaf value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CssValue {
    /// Text, emitted as-is.
    Text(String),
    /// Bare number (unitless, or a top-level number passed through).
    Number(Number),
}

impl CssValue {
    /// Extracts the text, if this is `Text`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CssValue::Text(s) => Some(s),
            CssValue::Number(_) => None,
        }
    }

    /// Extracts the number, if this is `Number`.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            CssValue::Number(n) => Some(*n),
            CssValue::Text(_) => None,
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match self {
            CssValue::Text(s) => serde_json::Value::String(s.clone()),
            CssValue::Number(n) => n.to_json(),
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Text(s) => f.write_str(s),
            CssValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CssValue {
    fn from(s: &str) -> Self {
        CssValue::Text(s.to_string())
    }
}

impl From<String> for CssValue {
    fn from(s: String) -> Self {
        CssValue::Text(s)
    }
}

impl From<Number> for CssValue {
    fn from(n: Number) -> Self {
        CssValue::Number(n)
    }
}

impl From<i64> for CssValue {
    fn from(n: i64) -> Self {
        CssValue::Number(n.into())
    }
}

impl From<f64> for CssValue {
    fn from(n: f64) -> Self {
        CssValue::Number(n.into())
    }
}

/// A single entry of a normalized tree.
///
/// Serializes untagged: values as strings or numbers, `Empty` as `null`,
/// nested blocks as maps.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CssEntry {
    /// Normalized leaf.
    Value(CssValue),
    /// Null kept because empty values were requested.
    Empty,
    /// Normalized nested block.
    Nested(CssTree),
}

impl CssEntry {
    /// Extracts the leaf value, if this is `Value`.
    pub fn as_value(&self) -> Option<&CssValue> {
        match self {
            CssEntry::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Extracts the leaf text, if this is a text `Value`.
    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(CssValue::as_str)
    }

    /// Extracts the nested block, if this is `Nested`.
    pub fn as_nested(&self) -> Option<&CssTree> {
        match self {
            CssEntry::Nested(tree) => Some(tree),
            _ => None,
        }
    }
}

impl From<CssValue> for CssEntry {
    fn from(value: CssValue) -> Self {
        CssEntry::Value(value)
    }
}

impl From<&str> for CssEntry {
    fn from(s: &str) -> Self {
        CssEntry::Value(s.into())
    }
}

impl From<String> for CssEntry {
    fn from(s: String) -> Self {
        CssEntry::Value(s.into())
    }
}

impl From<Number> for CssEntry {
    fn from(n: Number) -> Self {
        CssEntry::Value(n.into())
    }
}

impl From<i64> for CssEntry {
    fn from(n: i64) -> Self {
        CssEntry::Value(n.into())
    }
}

impl From<f64> for CssEntry {
    fn from(n: f64) -> Self {
        CssEntry::Value(n.into())
    }
}

impl From<CssValue> for StyleValue {
    fn from(value: CssValue) -> Self {
        match value {
            CssValue::Text(s) => StyleValue::Str(s),
            CssValue::Number(n) => StyleValue::Num(n),
        }
    }
}

impl From<CssEntry> for StyleValue {
    fn from(entry: CssEntry) -> Self {
        match entry {
            CssEntry::Value(v) => v.into(),
            CssEntry::Empty => StyleValue::Null,
            CssEntry::Nested(tree) => StyleValue::Nested(
                tree.into_iter()
                    .map(|(key, entry)| (key, StyleValue::from(entry)))
                    .collect(),
            ),
        }
    }
}
