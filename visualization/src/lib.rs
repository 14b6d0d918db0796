//! Canopy visualization: deterministic layout and SVG rendering for the
//! synthetic decision trees grown by `canopy-core`.
//!
//! The [`layout`] module turns a tree into non-overlapping 2D coordinates
//! with a two-pass traversal; the [`svg`] module emits that layout as a
//! standalone SVG document. Both stages are pure: no randomness, no shared
//! state, and identical output for identical input, so diagrams can be
//! regenerated on every UI event without flicker.

pub mod layout;
pub mod svg;

pub use layout::{layout, Branch, LayoutConfig, LayoutEdge, LayoutError, PlacedNode, TreeLayout};
pub use svg::{render, SvgStyle};
