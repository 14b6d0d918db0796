//! Recursive random-tree growth.
//!
//! # Algorithm
//!
//! Growth is top-down from the root at depth 1. A node terminates as a leaf
//! when the depth bound is reached, or (below the root) when a uniform draw
//! falls under the leaf probability. The root itself never terminates early:
//! a freshly grown tree always shows at least one decision, which is a
//! generation policy for the diagram, not a structural requirement on
//! consumers. The two children of a split are grown independently, so
//! asymmetric trees are the norm.
//!
//! The one defensive guard in the whole core lives here: a schema with zero
//! features cannot produce a split condition, so growth short-circuits to a
//! single leaf regardless of depth policy.

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{SplitCondition, TreeNode};
use crate::schema::{FeatureSchema, TargetSchema};

/// Probability that a non-root node below the depth bound terminates as a
/// leaf. Tuned for visual balance in the dashboard diagrams.
pub const DEFAULT_LEAF_PROBABILITY: f64 = 0.4;

/// Tuning knobs for tree growth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthConfig {
    /// Maximum tree depth, root counted as depth 1. Values below 1 are
    /// clamped. Because the root always splits, the grown tree reaches at
    /// least depth 2 even when this is 1.
    pub max_depth: u32,
    /// Per-node leaf termination probability below the root.
    pub leaf_probability: f64,
}

impl GrowthConfig {
    /// Config with the default leaf probability and the given depth bound.
    #[must_use]
    pub fn with_max_depth(max_depth: u32) -> Self {
        Self {
            max_depth,
            leaf_probability: DEFAULT_LEAF_PROBABILITY,
        }
    }
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self::with_max_depth(5)
    }
}

/// Grows one random decision tree over the given schemas.
///
/// Leaf labels are uniform draws over the two target labels; split
/// conditions pair a uniform feature with a uniform value from its domain.
/// Node ids (`"d<depth>-n<ordinal>"`, pre-order ordinal) are unique within
/// the returned tree and reproducible under a fixed RNG seed.
pub fn grow<R: Rng + ?Sized>(
    schema: &FeatureSchema,
    target: &TargetSchema,
    config: &GrowthConfig,
    rng: &mut R,
) -> TreeNode {
    let max_depth = if config.max_depth < 1 {
        warn!("max_depth {} below 1, clamped", config.max_depth);
        1
    } else {
        config.max_depth
    };
    // The root must split, so the effective bound is at least 2.
    let depth_bound = max_depth.max(2);

    let mut ordinal = 0;
    let tree = grow_node(schema, target, config.leaf_probability, depth_bound, 1, &mut ordinal, rng);
    debug!(
        "grew tree: depth {} of bound {}, {} splits, {} leaves",
        tree.depth(),
        depth_bound,
        tree.split_count(),
        tree.leaf_count()
    );
    tree
}

fn grow_node<R: Rng + ?Sized>(
    schema: &FeatureSchema,
    target: &TargetSchema,
    leaf_probability: f64,
    depth_bound: u32,
    depth: u32,
    ordinal: &mut u32,
    rng: &mut R,
) -> TreeNode {
    *ordinal += 1;
    let id = format!("d{depth}-n{ordinal}");

    let must_leaf = schema.is_empty() || depth >= depth_bound;
    if must_leaf || (depth > 1 && rng.gen::<f64>() < leaf_probability) {
        let label = if rng.gen_bool(0.5) {
            target.labels[0].clone()
        } else {
            target.labels[1].clone()
        };
        return TreeNode::Leaf { id, label };
    }

    let feature = &schema.as_slice()[rng.gen_range(0..schema.len())];
    let value = feature.values[rng.gen_range(0..feature.values.len())].clone();
    let condition = SplitCondition {
        feature: feature.name.clone(),
        value,
    };

    let left = grow_node(schema, target, leaf_probability, depth_bound, depth + 1, ordinal, rng);
    let right = grow_node(schema, target, leaf_probability, depth_bound, depth + 1, ordinal, rng);
    TreeNode::Split {
        id,
        condition,
        left: Box::new(left),
        right: Box::new(right),
    }
}
