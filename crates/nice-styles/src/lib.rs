//! Nice Styles - normalize nested style descriptions into CSS-ready values.
//!
//! A style description is a tree of property keys mapped to loosely shaped
//! values: strings, numbers, shorthand arrays, color descriptors,
//! transform/filter descriptors, and nested `@media`/`&:hover` blocks. This
//! crate turns it into a tree of plain strings and numbers that a stylesheet
//! writer can emit directly.
//!
//! - Shorthand arrays are space-joined, with `px` on integral numbers
//! - Two-element `border*` arrays get a default `solid` style
//! - Color-bearing keys go through a pluggable [`ColorConverter`]
//! - `transform`/`filter` descriptors become CSS function chains
//! - `@` and `&` blocks are normalized recursively
//!
//! # Quick Start
//!
//! ```rust
//! use nice_styles::{normalize, StyleTree};
//! use serde_json::json;
//!
//! let styles: StyleTree = serde_json::from_value(json!({
//!     "width": 10,
//!     "padding": [4, 8],
//!     "transform": { "x": 10, "scale": 1.5 },
//!     "&:hover": { "backgroundColor": [255, 0, 0] }
//! })).unwrap();
//!
//! let css = normalize(&styles).unwrap();
//!
//! assert_eq!(serde_json::to_value(&css).unwrap(), json!({
//!     "width": 10,
//!     "padding": "4px 8px",
//!     "transform": "translateX(10px) scale(1.5)",
//!     "&:hover": { "backgroundColor": "#ff0000" }
//! }));
//! ```
//!
//! # Routing
//!
//! Top-level strings and numbers are copied unchanged, so `{ width: 10 }`
//! stays `10` rather than `"10px"`; units are only added inside arrays and
//! transform descriptors. See [`Normalizer`] for the full routing table and
//! [`Rules`] for configuring which keys are treated specially.
//!
//! # Errors
//!
//! Values that fit none of the recognized shapes fail the whole call with
//! [`StyleError::InvalidValue`], naming the key and the offending value.

mod coerce;
mod color;
mod error;
mod normalize;
mod render;
mod rules;
mod transform;
mod value;

use once_cell::sync::Lazy;

// Re-export public API
pub use color::{color_css, ColorConverter, CssColorConverter};
pub use error::{Result, RulesError, StyleError};
pub use normalize::Normalizer;
pub use render::{color_to_string, is_css_able, render_css, Renderable};
pub use rules::Rules;
pub use value::{CssEntry, CssTree, CssValue, Number, StyleTree, StyleValue};

static DEFAULT_NORMALIZER: Lazy<Normalizer> = Lazy::new(Normalizer::new);

/// Normalizes `tree` with the default rules and color converter, dropping
/// null values.
pub fn normalize(tree: &StyleTree) -> Result<CssTree> {
    DEFAULT_NORMALIZER.normalize(tree)
}

/// Normalizes `tree` with the default rules and color converter.
///
/// See [`Normalizer::normalize_with`].
pub fn normalize_with(tree: &StyleTree, include_empty: bool, error_label: &str) -> Result<CssTree> {
    DEFAULT_NORMALIZER.normalize_with(tree, include_empty, error_label)
}
