//! Color conversion for color-bearing keys.
//!
//! Values under `background` or any key containing `color` are handed to a
//! [`ColorConverter`] and its result is stored verbatim. The default,
//! [`CssColorConverter`], understands:
//!
//! - CSS color strings: `red`, `#ff6b35`, `#fff`, `rgb(...)`, `hsl(...)`
//! - RGB tuples: `[255, 107, 53]`, with optional alpha `[255, 107, 53, 0.5]`
//! - Channel objects: `{ r: 255, g: 107, b: 53, a: 0.5 }`
//! - Parsed [`Color`]s and [`Renderable`](crate::Renderable) values
//!
//! Opaque colors render as `#rrggbb`, translucent ones as `rgba(r, g, b, a)`.
//! Strings that don't parse as colors (`inherit`, `var(--accent)`) pass
//! through unchanged.
//!
//! # Example
//!
//! ```
//! use nice_styles::{ColorConverter, CssColorConverter, CssValue, StyleValue};
//!
//! let converter = CssColorConverter;
//! let tuple = StyleValue::from(vec![255, 107, 53]);
//! assert_eq!(converter.convert(&tuple), Some(CssValue::from("#ff6b35")));
//!
//! let named = StyleValue::from("white");
//! assert_eq!(converter.convert(&named), Some(CssValue::from("#ffffff")));
//! ```

use csscolorparser::Color;

use crate::render::render_css;
use crate::value::{CssValue, StyleTree, StyleValue};

/// Converts a color descriptor into its stored CSS form.
///
/// Returning `None` means the value is not a color this converter
/// understands; normalization then fails with
/// [`StyleError::InvalidValue`](crate::StyleError::InvalidValue).
///
/// Closures of the right shape implement this trait:
///
/// ```
/// use nice_styles::{ColorConverter, CssValue, StyleValue};
///
/// let upper = |value: &StyleValue| value.as_str().map(|s| CssValue::from(s.to_uppercase()));
/// assert_eq!(upper.convert(&StyleValue::from("red")), Some(CssValue::from("RED")));
/// ```
pub trait ColorConverter {
    /// Converts `value` to a CSS color value.
    fn convert(&self, value: &StyleValue) -> Option<CssValue>;
}

impl<F> ColorConverter for F
where
    F: Fn(&StyleValue) -> Option<CssValue>,
{
    fn convert(&self, value: &StyleValue) -> Option<CssValue> {
        self(value)
    }
}

/// Default converter backed by `csscolorparser`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CssColorConverter;

impl ColorConverter for CssColorConverter {
    fn convert(&self, value: &StyleValue) -> Option<CssValue> {
        match value {
            StyleValue::Str(s) => Some(CssValue::Text(parse_color_string(s))),
            StyleValue::Num(n) => Some(CssValue::Number(*n)),
            StyleValue::Arr(values) => parse_rgb_tuple(values).map(CssValue::Text),
            StyleValue::Nested(tree) => parse_channel_object(tree).map(CssValue::Text),
            StyleValue::Css(_) | StyleValue::Color(_) => render_css(value),
            StyleValue::Null | StyleValue::Bool(_) => None,
        }
    }
}

/// Renders a parsed color: `#rrggbb` when opaque, `rgba(r, g, b, a)` otherwise.
pub fn color_css(color: &Color) -> String {
    let [r, g, b, _] = color.to_rgba8();
    format_rgba(r, g, b, color.a as f64)
}

fn format_rgba(r: u8, g: u8, b: u8, alpha: f64) -> String {
    if alpha >= 1.0 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        let alpha = (alpha.max(0.0) * 1000.0).round() / 1000.0;
        format!("rgba({}, {}, {}, {})", r, g, b, alpha)
    }
}

fn parse_color_string(s: &str) -> String {
    match s.trim().parse::<Color>() {
        Ok(color) => color_css(&color),
        Err(_) => s.to_string(),
    }
}

/// Parses `[r, g, b]` or `[r, g, b, a]`.
fn parse_rgb_tuple(values: &[StyleValue]) -> Option<String> {
    let (rgb, alpha) = match values {
        [r, g, b] => ([r, g, b], None),
        [r, g, b, a] => ([r, g, b], Some(a)),
        _ => return None,
    };
    rgba_from_parts(rgb, alpha)
}

/// Parses `{ r, g, b }` with an optional `a`.
fn parse_channel_object(tree: &StyleTree) -> Option<String> {
    let rgb = [tree.get("r")?, tree.get("g")?, tree.get("b")?];
    rgba_from_parts(rgb, tree.get("a"))
}

fn rgba_from_parts(rgb: [&StyleValue; 3], alpha: Option<&StyleValue>) -> Option<String> {
    let mut channels = [0u8; 3];
    for (slot, value) in channels.iter_mut().zip(rgb) {
        *slot = channel(value)?;
    }
    let alpha = match alpha {
        Some(value) => unit_interval(value)?,
        None => 1.0,
    };
    Some(format_rgba(channels[0], channels[1], channels[2], alpha))
}

fn channel(value: &StyleValue) -> Option<u8> {
    let n = value.as_number()?.to_f64();
    if (0.0..=255.0).contains(&n) {
        Some(n.round() as u8)
    } else {
        None
    }
}

fn unit_interval(value: &StyleValue) -> Option<f64> {
    let n = value.as_number()?.to_f64();
    (0.0..=1.0).contains(&n).then_some(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn convert(value: serde_json::Value) -> Option<CssValue> {
        CssColorConverter.convert(&StyleValue::from(value))
    }

    #[test]
    fn named_and_hex_strings() {
        assert_eq!(convert(json!("red")), Some(CssValue::from("#ff0000")));
        assert_eq!(convert(json!("#FFF")), Some(CssValue::from("#ffffff")));
        assert_eq!(convert(json!("#ff6b35")), Some(CssValue::from("#ff6b35")));
    }

    #[test]
    fn functional_strings() {
        assert_eq!(
            convert(json!("rgb(255, 107, 53)")),
            Some(CssValue::from("#ff6b35"))
        );
        assert_eq!(
            convert(json!("rgba(0, 0, 0, 0.5)")),
            Some(CssValue::from("rgba(0, 0, 0, 0.5)"))
        );
    }

    #[test]
    fn unknown_strings_pass_through() {
        assert_eq!(convert(json!("inherit")), Some(CssValue::from("inherit")));
        assert_eq!(
            convert(json!("var(--accent)")),
            Some(CssValue::from("var(--accent)"))
        );
    }

    #[test]
    fn rgb_tuples() {
        assert_eq!(convert(json!([255, 107, 53])), Some(CssValue::from("#ff6b35")));
        assert_eq!(
            convert(json!([255, 107, 53, 0.25])),
            Some(CssValue::from("rgba(255, 107, 53, 0.25)"))
        );
    }

    #[test]
    fn rgb_tuple_rejects_bad_shapes() {
        assert_eq!(convert(json!([255, 107])), None);
        assert_eq!(convert(json!([256, 0, 0])), None);
        assert_eq!(convert(json!([0, "x", 0])), None);
        assert_eq!(convert(json!([0, 0, 0, 2])), None);
    }

    #[test]
    fn channel_objects() {
        assert_eq!(
            convert(json!({ "r": 0, "g": 128, "b": 255 })),
            Some(CssValue::from("#0080ff"))
        );
        assert_eq!(
            convert(json!({ "r": 0, "g": 0, "b": 0, "a": 0 })),
            Some(CssValue::from("rgba(0, 0, 0, 0)"))
        );
        assert_eq!(convert(json!({ "r": 0, "g": 0 })), None);
    }

    #[test]
    fn numbers_pass_through() {
        assert_eq!(convert(json!(3)), Some(CssValue::from(3i64)));
    }

    #[test]
    fn rejects_null_and_bool() {
        assert_eq!(convert(json!(null)), None);
        assert_eq!(convert(json!(true)), None);
    }

    #[test]
    fn parsed_colors_render() {
        let color: Color = "rgba(255, 0, 0, 0.5)".parse().unwrap();
        assert_eq!(color_css(&color), "rgba(255, 0, 0, 0.5)");
    }
}
