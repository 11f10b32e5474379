//! Value coercion inside arrays and transform descriptors.
//!
//! Unlike top-level values, numbers reached here get a length unit: integral
//! numbers become `"<n>px"`. Inside transform arguments, fractional numbers
//! and the unitless arguments (`scale`, `grayscale`, `brightness`) stay bare.

use crate::color::ColorConverter;
use crate::error::{Result, StyleError};
use crate::normalize::Normalizer;
use crate::render::render_css;
use crate::value::{CssValue, Number, StyleValue};

impl<C: ColorConverter> Normalizer<C> {
    /// Coerces a single transform argument (or any value found outside an
    /// array context) for `key`.
    ///
    /// ```
    /// use nice_styles::{CssValue, Normalizer, StyleValue};
    ///
    /// let n = Normalizer::new();
    /// assert_eq!(n.coerce_scalar_or_array("x", &StyleValue::from(10)).unwrap(), CssValue::from("10px"));
    /// assert_eq!(n.coerce_scalar_or_array("x", &StyleValue::from(0.5)).unwrap(), CssValue::from(0.5));
    /// assert_eq!(n.coerce_scalar_or_array("scale", &StyleValue::from(2)).unwrap(), CssValue::from(2i64));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidValue`] for nulls, booleans, and nested
    /// objects, or for array elements that can't be coerced.
    pub fn coerce_scalar_or_array(&self, key: &str, value: &StyleValue) -> Result<CssValue> {
        self.coerce_scalar_or_array_labeled(key, value, "")
    }

    /// Space-joins `values` for `key`.
    ///
    /// Two-element arrays under `border*` keys get `solid` appended. Nested
    /// arrays go through the color converter, renderables are rendered, and
    /// every number gets the length unit.
    ///
    /// ```
    /// use nice_styles::{Normalizer, StyleValue};
    ///
    /// let n = Normalizer::new();
    /// let values = [StyleValue::from(1), StyleValue::from("red")];
    /// assert_eq!(n.coerce_array("borderTop", &values).unwrap(), "1px red solid");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidValue`] for elements that are null,
    /// booleans, or objects, and for nested arrays the color converter
    /// rejects.
    pub fn coerce_array(&self, key: &str, values: &[StyleValue]) -> Result<String> {
        self.coerce_array_labeled(key, values, "")
    }

    pub(crate) fn coerce_scalar_or_array_labeled(
        &self,
        key: &str,
        value: &StyleValue,
        label: &str,
    ) -> Result<CssValue> {
        match value {
            StyleValue::Num(n) if n.is_fractional() || self.rules().is_unitless_key(key) => {
                Ok(CssValue::Number(*n))
            }
            StyleValue::Num(n) => Ok(CssValue::Text(self.with_unit(*n))),
            StyleValue::Arr(values) => self
                .coerce_array_labeled(key, values, label)
                .map(CssValue::Text),
            StyleValue::Str(s) => Ok(CssValue::Text(s.clone())),
            _ => render_css(value).ok_or_else(|| StyleError::invalid_value(label, key, value)),
        }
    }

    pub(crate) fn coerce_array_labeled(
        &self,
        key: &str,
        values: &[StyleValue],
        label: &str,
    ) -> Result<String> {
        let mut parts = Vec::with_capacity(values.len() + 1);
        for value in values {
            parts.push(self.coerce_element(key, value, label)?);
        }
        if self.rules().takes_border_style(key, values.len()) {
            parts.push(self.rules().border_style().to_string());
        }
        Ok(parts.join(" "))
    }

    fn coerce_element(&self, key: &str, value: &StyleValue, label: &str) -> Result<String> {
        match value {
            // nested arrays are color tuples
            StyleValue::Arr(_) => self.convert_color(key, value, label).map(|c| c.to_string()),
            StyleValue::Num(n) => Ok(self.with_unit(*n)),
            StyleValue::Str(s) => Ok(s.clone()),
            _ => render_css(value)
                .map(|c| c.to_string())
                .ok_or_else(|| StyleError::invalid_value(label, key, value)),
        }
    }

    fn with_unit(&self, n: Number) -> String {
        format!("{}{}", n, self.rules().length_unit())
    }
}
