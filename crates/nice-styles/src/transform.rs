//! Transform and filter descriptor serialization.
//!
//! A descriptor maps CSS function names (or their shorthands) to arguments.
//! Entries are emitted in insertion order as `name(argument)` and joined with
//! single spaces:
//!
//! ```
//! use nice_styles::{Normalizer, StyleTree};
//! use serde_json::json;
//!
//! let descriptor: StyleTree = serde_json::from_value(json!({
//!     "x": 10,
//!     "rotate": "45deg",
//!     "scale": 1.2
//! })).unwrap();
//!
//! assert_eq!(
//!     Normalizer::new().serialize_transform(&descriptor).unwrap(),
//!     "translateX(10px) rotate(45deg) scale(1.2)"
//! );
//! ```

use crate::color::ColorConverter;
use crate::error::Result;
use crate::normalize::Normalizer;
use crate::value::StyleTree;

impl<C: ColorConverter> Normalizer<C> {
    /// Serializes a transform/filter descriptor into a CSS function chain.
    ///
    /// An empty descriptor yields an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidValue`](crate::StyleError::InvalidValue)
    /// when an argument can't be coerced.
    pub fn serialize_transform(&self, descriptor: &StyleTree) -> Result<String> {
        self.serialize_transform_labeled(descriptor, "")
    }

    pub(crate) fn serialize_transform_labeled(
        &self,
        descriptor: &StyleTree,
        label: &str,
    ) -> Result<String> {
        let mut functions = Vec::with_capacity(descriptor.len());
        for (name, value) in descriptor {
            let argument = self.coerce_scalar_or_array_labeled(name, value, label)?;
            functions.push(format!(
                "{}({})",
                self.rules().transform_function(name),
                argument
            ));
        }
        Ok(functions.join(" "))
    }
}
