//! Two-pass hierarchical tree layout.
//!
//! # Algorithm
//!
//! Layout is two pure traversals over an immutable tree value:
//!
//! 1. **Dimension pass** (post-order): every leaf occupies a fixed box of
//!    `leaf_width` by `level_separation`; a split is as wide as its children
//!    plus the sibling gap and one level taller than its tallest child.
//! 2. **Position pass** (pre-order): the root is centered on the total
//!    width; a split of width `w` at `(x, y)` centers its children at
//!    `x ∓ w / (2 · expansion_factor)` one level down.
//!
//! The expansion factor deliberately diverges from exact proportional
//! placement so shallow trees stay legible. Sibling subtree extents still
//! never overlap: child separation is `w / e`, which dominates half the
//! summed child widths whenever `e ≤ 2`, and the config rejects anything
//! larger.
//!
//! There is no randomness here. A fixed tree and config always produce the
//! identical layout, which is what makes diagram animation keys stable.

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use canopy_core::tree::TreeNode;

/// Layout configuration errors.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid layout config: {reason}")]
    InvalidConfig { reason: String },
}

/// Geometric constants for the layout passes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Horizontal box reserved for one leaf.
    pub leaf_width: f64,
    /// Vertical distance between consecutive tree levels.
    pub level_separation: f64,
    /// Horizontal gap between two sibling subtrees.
    pub sibling_gap: f64,
    /// Visual spread divisor; children sit at `± w / (2 · factor)`. Must
    /// stay in `(1.0, 2.0]` for siblings to remain disjoint.
    pub expansion_factor: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            leaf_width: 120.0,
            level_separation: 90.0,
            sibling_gap: 20.0,
            expansion_factor: 1.8,
        }
    }
}

impl LayoutConfig {
    /// Checks the geometric preconditions of the position pass.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidConfig`] for non-positive dimensions or
    /// an expansion factor outside `(1.0, 2.0]`.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.leaf_width <= 0.0 || self.level_separation <= 0.0 || self.sibling_gap < 0.0 {
            return Err(LayoutError::InvalidConfig {
                reason: format!(
                    "dimensions must be positive (leaf_width {}, level_separation {}, sibling_gap {})",
                    self.leaf_width, self.level_separation, self.sibling_gap
                ),
            });
        }
        if !(self.expansion_factor > 1.0 && self.expansion_factor <= 2.0) {
            return Err(LayoutError::InvalidConfig {
                reason: format!(
                    "expansion_factor {} outside (1.0, 2.0]",
                    self.expansion_factor
                ),
            });
        }
        Ok(())
    }
}

/// Which side of its parent an edge descends to. Purely positional: `First`
/// means the child sits left of the parent, not "no"/"yes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    First,
    Second,
}

/// A tree node with computed diagram coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedNode {
    /// Id of the underlying tree node.
    pub id: String,
    /// Display text: the condition for splits, the class label for leaves.
    pub label: String,
    pub is_leaf: bool,
    /// Center x of the node glyph.
    pub x: f64,
    /// Top y of the node's level.
    pub y: f64,
    /// Width of the full subtree rooted here, centered on `x`.
    pub subtree_width: f64,
}

/// Parent-to-child connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEdge {
    pub parent: String,
    pub child: String,
    pub branch: Branch,
}

/// Complete positioned diagram for one tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    pub width: f64,
    pub height: f64,
    /// Nodes in pre-order; the root is always first.
    pub nodes: Vec<PlacedNode>,
    pub edges: Vec<LayoutEdge>,
}

/// Computes the positioned layout for `tree`.
///
/// # Errors
///
/// Returns [`LayoutError::InvalidConfig`] when the config fails
/// [`LayoutConfig::validate`]; layout itself cannot fail.
pub fn layout(tree: &TreeNode, config: &LayoutConfig) -> Result<TreeLayout, LayoutError> {
    config.validate()?;

    let measured = measure(tree, config);
    let width = measured.width;
    let height = measured.height;

    let mut nodes = Vec::with_capacity(tree.node_count());
    let mut edges = Vec::with_capacity(tree.node_count().saturating_sub(1));
    place(&measured, width / 2.0, 0.0, config, &mut nodes, &mut edges);

    debug!(
        "laid out {} nodes in {width:.0}x{height:.0}",
        nodes.len()
    );
    Ok(TreeLayout {
        width,
        height,
        nodes,
        edges,
    })
}

/// Tree mirror carrying the dimension-pass results.
struct Measured<'a> {
    node: &'a TreeNode,
    width: f64,
    height: f64,
    children: Option<(Box<Measured<'a>>, Box<Measured<'a>>)>,
}

fn measure<'a>(tree: &'a TreeNode, config: &LayoutConfig) -> Measured<'a> {
    match tree {
        TreeNode::Leaf { .. } => Measured {
            node: tree,
            width: config.leaf_width,
            height: config.level_separation,
            children: None,
        },
        TreeNode::Split { left, right, .. } => {
            let left = measure(left, config);
            let right = measure(right, config);
            Measured {
                node: tree,
                width: left.width + right.width + config.sibling_gap,
                height: config.level_separation + left.height.max(right.height),
                children: Some((Box::new(left), Box::new(right))),
            }
        }
    }
}

fn place(
    measured: &Measured<'_>,
    x: f64,
    y: f64,
    config: &LayoutConfig,
    nodes: &mut Vec<PlacedNode>,
    edges: &mut Vec<LayoutEdge>,
) {
    let (label, is_leaf) = match measured.node {
        TreeNode::Split { condition, .. } => (condition.to_string(), false),
        TreeNode::Leaf { label, .. } => (label.clone(), true),
    };
    nodes.push(PlacedNode {
        id: measured.node.id().to_string(),
        label,
        is_leaf,
        x,
        y,
        subtree_width: measured.width,
    });

    if let Some((left, right)) = &measured.children {
        let offset = measured.width / (2.0 * config.expansion_factor);
        let child_y = y + config.level_separation;
        for (child, child_x) in [(left, x - offset), (right, x + offset)] {
            edges.push(LayoutEdge {
                parent: measured.node.id().to_string(),
                child: child.node.id().to_string(),
                branch: if child_x < x { Branch::First } else { Branch::Second },
            });
            place(child, child_x, child_y, config, nodes, edges);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use canopy_core::schema::{Feature, FeatureSchema, TargetSchema};
    use canopy_core::tree::generator::{grow, GrowthConfig};
    use canopy_core::tree::SplitCondition;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn leaf(id: &str, label: &str) -> TreeNode {
        TreeNode::Leaf {
            id: id.into(),
            label: label.into(),
        }
    }

    fn one_split_tree() -> TreeNode {
        TreeNode::Split {
            id: "d1-n1".into(),
            condition: SplitCondition {
                feature: "Rainfall".into(),
                value: "High".into(),
            },
            left: Box::new(leaf("d2-n2", "High")),
            right: Box::new(leaf("d2-n3", "Low")),
        }
    }

    fn random_tree(seed: u64, max_depth: u32) -> TreeNode {
        let schema = FeatureSchema::new(vec![
            Feature::new("Rainfall", ["Low", "Medium", "High"]),
            Feature::new("Soil Type", ["Sandy", "Clay", "Loam"]),
            Feature::new("Fertilizer", ["Type A", "Type B", "None"]),
        ])
        .unwrap();
        let target = TargetSchema::new("Yield", "High", "Low");
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        grow(&schema, &target, &GrowthConfig::with_max_depth(max_depth), &mut rng)
    }

    /// Asserts that the two subtree extents under every split are disjoint.
    fn assert_no_sibling_overlap(layout: &TreeLayout) {
        let find = |id: &str| {
            layout
                .nodes
                .iter()
                .find(|n| n.id == id)
                .expect("edge endpoint placed")
        };
        let mut parents: Vec<&str> = layout.edges.iter().map(|e| e.parent.as_str()).collect();
        parents.sort_unstable();
        parents.dedup();
        for parent in parents {
            let children: Vec<_> = layout
                .edges
                .iter()
                .filter(|e| e.parent == parent)
                .map(|e| find(&e.child))
                .collect();
            assert_eq!(children.len(), 2, "split {parent} must have two edges");
            let (left, right) = if children[0].x < children[1].x {
                (children[0], children[1])
            } else {
                (children[1], children[0])
            };
            assert!(
                left.x + left.subtree_width / 2.0 <= right.x - right.subtree_width / 2.0 + 1e-9,
                "subtrees under {parent} overlap: [{}] vs [{}]",
                left.id,
                right.id
            );
        }
    }

    #[test]
    fn test_known_shape_coordinates() {
        let config = LayoutConfig::default();
        let layout = layout(&one_split_tree(), &config).unwrap();

        // Two leaves plus the gap: 120 + 120 + 20.
        assert_relative_eq!(layout.width, 260.0);
        assert_relative_eq!(layout.height, 180.0);

        let root = &layout.nodes[0];
        assert_eq!(root.id, "d1-n1");
        assert_eq!(root.label, "Rainfall = High");
        assert_relative_eq!(root.x, 130.0);
        assert_relative_eq!(root.y, 0.0);

        let offset = 260.0 / (2.0 * 1.8);
        let left = layout.nodes.iter().find(|n| n.id == "d2-n2").unwrap();
        let right = layout.nodes.iter().find(|n| n.id == "d2-n3").unwrap();
        assert_relative_eq!(left.x, 130.0 - offset);
        assert_relative_eq!(right.x, 130.0 + offset);
        assert_relative_eq!(left.y, 90.0);
        assert_relative_eq!(right.y, 90.0);
        assert!(left.is_leaf && right.is_leaf);
    }

    #[test]
    fn test_edges_record_positional_branches() {
        let layout = layout(&one_split_tree(), &LayoutConfig::default()).unwrap();
        assert_eq!(layout.edges.len(), 2);
        assert_eq!(layout.edges[0].branch, Branch::First);
        assert_eq!(layout.edges[0].child, "d2-n2");
        assert_eq!(layout.edges[1].branch, Branch::Second);
        assert_eq!(layout.edges[1].child, "d2-n3");
    }

    #[test]
    fn test_layout_is_deterministic() {
        let tree = random_tree(42, 6);
        let config = LayoutConfig::default();
        let a = layout(&tree, &config).unwrap();
        let b = layout(&tree, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sibling_subtrees_never_overlap() {
        let config = LayoutConfig::default();
        for seed in 0..25 {
            let tree = random_tree(seed, 7);
            let result = layout(&tree, &config).unwrap();
            assert_no_sibling_overlap(&result);
        }
    }

    #[test]
    fn test_node_count_matches_tree() {
        let tree = random_tree(3, 6);
        let result = layout(&tree, &LayoutConfig::default()).unwrap();
        assert_eq!(result.nodes.len(), tree.node_count());
        assert_eq!(result.edges.len(), tree.node_count() - 1);
    }

    #[test]
    fn test_levels_sit_on_separation_multiples() {
        let tree = random_tree(9, 5);
        let result = layout(&tree, &LayoutConfig::default()).unwrap();
        for node in &result.nodes {
            let level = node.y / 90.0;
            assert_relative_eq!(level, level.round(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_config_validation_rejects_bad_expansion() {
        for factor in [0.5, 1.0, 2.5] {
            let config = LayoutConfig {
                expansion_factor: factor,
                ..LayoutConfig::default()
            };
            assert!(layout(&one_split_tree(), &config).is_err());
        }
    }

    #[test]
    fn test_config_validation_rejects_non_positive_dimensions() {
        let config = LayoutConfig {
            leaf_width: 0.0,
            ..LayoutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_single_leaf_tree_layout() {
        let result = layout(&leaf("d1-n1", "High"), &LayoutConfig::default()).unwrap();
        assert_eq!(result.nodes.len(), 1);
        assert!(result.edges.is_empty());
        assert_relative_eq!(result.width, 120.0);
        assert_relative_eq!(result.height, 90.0);
        assert_relative_eq!(result.nodes[0].x, 60.0);
    }

    #[test]
    fn test_layout_serde_roundtrip() {
        let result = layout(&one_split_tree(), &LayoutConfig::default()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        let back: TreeLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }
}
