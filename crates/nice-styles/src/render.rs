//! Values that render themselves to CSS.
//!
//! Any type implementing [`Renderable`] can be placed in a style tree with
//! [`StyleValue::css`]. Normalization calls [`Renderable::render`] and stores
//! the result, regardless of the key the value sits under.

use std::fmt;

use crate::color::color_css;
use crate::value::{CssValue, StyleValue};

/// Trait for values that know their own CSS form.
///
/// # Example
///
/// ```
/// use nice_styles::{normalize, CssValue, Renderable, StyleTree, StyleValue};
///
/// #[derive(Debug)]
/// struct Rem(f64);
///
/// impl Renderable for Rem {
///     fn render(&self) -> CssValue {
///         CssValue::Text(format!("{}rem", self.0))
///     }
/// }
///
/// let mut tree = StyleTree::new();
/// tree.insert("padding".into(), StyleValue::css(Rem(1.5)));
///
/// let css = normalize(&tree).unwrap();
/// assert_eq!(css["padding"].as_str(), Some("1.5rem"));
/// ```
pub trait Renderable: fmt::Debug + Send + Sync {
    /// Returns the final CSS string or number for this value.
    fn render(&self) -> CssValue;
}

/// Returns `true` if the value renders itself (a [`Renderable`] or a color).
pub fn is_css_able(value: &StyleValue) -> bool {
    matches!(value, StyleValue::Css(_) | StyleValue::Color(_))
}

/// Renders a CSS-able value. Returns `None` for every other shape.
pub fn render_css(value: &StyleValue) -> Option<CssValue> {
    match value {
        StyleValue::Css(r) => Some(r.render()),
        StyleValue::Color(c) => Some(CssValue::Text(color_css(c))),
        _ => None,
    }
}

/// Renders a color-ish value to CSS without going through color conversion.
///
/// Strings are returned as-is and CSS-able values are rendered. Other shapes
/// yield `None`.
pub fn color_to_string(value: &StyleValue) -> Option<CssValue> {
    match value {
        StyleValue::Str(s) => Some(CssValue::Text(s.clone())),
        _ => render_css(value),
    }
}
