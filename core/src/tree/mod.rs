//! Synthetic decision-tree structure.
//!
//! Trees here are decorative: they carry the *shape* of a decision tree
//! (feature/value splits, class-label leaves) without any trained model
//! behind them. The structural invariant that every split routes to exactly
//! two children is enforced by construction through the `left`/`right`
//! boxes, so consumers never need to re-validate arity.

pub mod generator;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The feature/value test displayed on a split node.
///
/// Stored as an explicit pair rather than a preformatted string so consumers
/// can restyle the condition; `Display` renders the canonical
/// `"<feature> = <value>"` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitCondition {
    pub feature: String,
    pub value: String,
}

impl fmt::Display for SplitCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.feature, self.value)
    }
}

/// A node in a generated decision tree, rooted at depth 1.
///
/// Ids are unique within one tree and are used downstream as diagram keys
/// and animation sequence handles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// Internal decision node with exactly two children.
    Split {
        id: String,
        condition: SplitCondition,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    /// Terminal node carrying a predicted class label.
    Leaf { id: String, label: String },
}

impl TreeNode {
    /// Node identifier, unique within the owning tree.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Split { id, .. } | Self::Leaf { id, .. } => id,
        }
    }

    /// True for leaf nodes.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    /// Maximum depth of the tree, counting the root as 1.
    #[must_use]
    pub fn depth(&self) -> u32 {
        match self {
            Self::Leaf { .. } => 1,
            Self::Split { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Total number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Split { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Number of leaf nodes.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Split { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Number of split nodes.
    #[must_use]
    pub fn split_count(&self) -> usize {
        self.node_count() - self.leaf_count()
    }

    /// Leaf class labels in left-to-right order.
    #[must_use]
    pub fn leaf_labels(&self) -> Vec<&str> {
        let mut labels = Vec::with_capacity(self.leaf_count());
        self.visit(&mut |node| {
            if let Self::Leaf { label, .. } = node {
                labels.push(label.as_str());
            }
        });
        labels
    }

    /// Pre-order traversal over every node.
    pub fn visit<'a, F: FnMut(&'a Self)>(&'a self, f: &mut F) {
        f(self);
        if let Self::Split { left, right, .. } = self {
            left.visit(f);
            right.visit(f);
        }
    }
}
