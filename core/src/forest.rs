//! Forest growth and majority voting.
//!
//! A forest is just `n_estimators` independently grown trees. Each tree
//! casts one vote (the majority label among its own leaves) and the forest
//! prediction is the majority of those votes. Ties at either level break
//! toward the first target label so tallies stay deterministic for a fixed
//! seed. The tally feeds the dashboard's per-tree vote bar chart.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::schema::{FeatureSchema, TargetSchema};
use crate::tree::generator::{self, GrowthConfig};
use crate::tree::TreeNode;

/// Vote count for one target label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    pub label: String,
    pub votes: usize,
}

/// An ensemble of independently generated trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    trees: Vec<TreeNode>,
}

impl Forest {
    /// Grows `n_estimators` independent trees with the same growth config.
    pub fn grow<R: Rng + ?Sized>(
        schema: &FeatureSchema,
        target: &TargetSchema,
        n_estimators: u32,
        config: &GrowthConfig,
        rng: &mut R,
    ) -> Self {
        let trees = (0..n_estimators)
            .map(|_| generator::grow(schema, target, config, rng))
            .collect::<Vec<_>>();
        debug!("grew forest of {} trees", trees.len());
        Self { trees }
    }

    /// The trees in generation order.
    #[must_use]
    pub fn trees(&self) -> &[TreeNode] {
        &self.trees
    }

    /// Number of trees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// True when the forest holds no trees.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Per-tree votes in generation order.
    #[must_use]
    pub fn predictions<'a>(&self, target: &'a TargetSchema) -> Vec<&'a str> {
        self.trees.iter().map(|tree| tree_vote(tree, target)).collect()
    }

    /// Vote counts per target label, in label order. Counts sum to the
    /// number of trees.
    #[must_use]
    pub fn tally(&self, target: &TargetSchema) -> [VoteTally; 2] {
        let first_votes = self
            .trees
            .iter()
            .filter(|tree| tree_vote(tree, target) == target.labels[0])
            .count();
        [
            VoteTally {
                label: target.labels[0].clone(),
                votes: first_votes,
            },
            VoteTally {
                label: target.labels[1].clone(),
                votes: self.trees.len() - first_votes,
            },
        ]
    }

    /// The forest's majority prediction (tie toward the first label).
    #[must_use]
    pub fn majority<'a>(&self, target: &'a TargetSchema) -> &'a str {
        let [first, second] = self.tally(target);
        if first.votes >= second.votes {
            &target.labels[0]
        } else {
            &target.labels[1]
        }
    }
}

/// One tree's vote: the majority label among its leaves, tie toward the
/// first target label.
fn tree_vote<'a>(tree: &TreeNode, target: &'a TargetSchema) -> &'a str {
    let labels = tree.leaf_labels();
    let first = labels.iter().filter(|l| **l == target.labels[0]).count();
    if first * 2 >= labels.len() {
        &target.labels[0]
    } else {
        &target.labels[1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Feature;
    use crate::tree::SplitCondition;
    use rand_chacha::rand_core::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_schema() -> FeatureSchema {
        FeatureSchema::new(vec![
            Feature::new("Study Method", ["Solo", "Group", "Tutor"]),
            Feature::new("Attended Review", ["Yes", "No"]),
        ])
        .unwrap()
    }

    fn test_target() -> TargetSchema {
        TargetSchema::new("Result", "Pass", "Fail")
    }

    fn leaf(id: &str, label: &str) -> TreeNode {
        TreeNode::Leaf {
            id: id.into(),
            label: label.into(),
        }
    }

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_forest_size_matches_n_estimators() {
        init_logging();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let forest = Forest::grow(&test_schema(), &test_target(), 10, &GrowthConfig::default(), &mut rng);
        assert_eq!(forest.len(), 10);
        assert!(!forest.is_empty());
    }

    #[test]
    fn test_tally_votes_sum_to_tree_count() {
        let target = test_target();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let forest = Forest::grow(&test_schema(), &target, 15, &GrowthConfig::default(), &mut rng);
        let [first, second] = forest.tally(&target);
        assert_eq!(first.label, "Pass");
        assert_eq!(second.label, "Fail");
        assert_eq!(first.votes + second.votes, 15);
    }

    #[test]
    fn test_majority_is_a_target_label() {
        let target = test_target();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let forest = Forest::grow(&test_schema(), &target, 9, &GrowthConfig::default(), &mut rng);
        assert!(target.contains(forest.majority(&target)));
    }

    #[test]
    fn test_tree_vote_majority_and_tie_break() {
        let target = test_target();
        let majority_fail = TreeNode::Split {
            id: "d1-n1".into(),
            condition: SplitCondition {
                feature: "Attended Review".into(),
                value: "Yes".into(),
            },
            left: Box::new(leaf("d2-n2", "Fail")),
            right: Box::new(TreeNode::Split {
                id: "d2-n3".into(),
                condition: SplitCondition {
                    feature: "Study Method".into(),
                    value: "Solo".into(),
                },
                left: Box::new(leaf("d3-n4", "Fail")),
                right: Box::new(leaf("d3-n5", "Pass")),
            }),
        };
        assert_eq!(tree_vote(&majority_fail, &target), "Fail");

        // One leaf of each label ties toward the first label.
        let tied = TreeNode::Split {
            id: "d1-n1".into(),
            condition: SplitCondition {
                feature: "Attended Review".into(),
                value: "No".into(),
            },
            left: Box::new(leaf("d2-n2", "Pass")),
            right: Box::new(leaf("d2-n3", "Fail")),
        };
        assert_eq!(tree_vote(&tied, &target), "Pass");
    }

    #[test]
    fn test_predictions_align_with_tally() {
        let target = test_target();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let forest = Forest::grow(&test_schema(), &target, 12, &GrowthConfig::default(), &mut rng);
        let predictions = forest.predictions(&target);
        assert_eq!(predictions.len(), 12);
        let pass_votes = predictions.iter().filter(|&&p| p == "Pass").count();
        let [first, _] = forest.tally(&target);
        assert_eq!(pass_votes, first.votes);
    }

    #[test]
    fn test_same_seed_grows_identical_forest() {
        let schema = test_schema();
        let target = test_target();
        let config = GrowthConfig::default();
        let a = Forest::grow(&schema, &target, 5, &config, &mut ChaCha8Rng::seed_from_u64(77));
        let b = Forest::grow(&schema, &target, 5, &config, &mut ChaCha8Rng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
