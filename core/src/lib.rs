//! Canopy core: procedural generators behind the random-forest teaching
//! dashboard.
//!
//! Everything the dashboard draws is synthesized here from an audience
//! schema: tabular datasets ([`dataset`]), bootstrap resamples
//! ([`dataset::bootstrap`]), random decision trees ([`tree`]), and voting
//! forests ([`forest`]). All generation is pure and synchronous; every
//! randomized operation takes an injected [`rand::Rng`] so a fixed seed
//! reproduces the exact same structures, which the tests rely on.
//!
//! The trees are decorative. They illustrate how an ensemble classifier is
//! shaped without training anything, so there is no model state, no
//! persistence, and no failure mode past schema construction.

pub mod dataset;
pub mod error;
pub mod forest;
pub mod params;
pub mod schema;
pub mod tree;

pub use error::CoreError;
pub use forest::{Forest, VoteTally};
pub use params::ForestParameters;
pub use schema::{Feature, FeatureSchema, TargetSchema};
pub use tree::generator::{GrowthConfig, DEFAULT_LEAF_PROBABILITY};
pub use tree::{SplitCondition, TreeNode};
