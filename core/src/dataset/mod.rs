//! Synthetic tabular dataset generation.
//!
//! Rows exist purely for display: each feature value is drawn uniformly from
//! its domain and the target label uniformly from the two classes, with no
//! modeled correlation between them. The explicit [`DatasetRow`] struct keys
//! values by feature index so a row can never silently misalign with its
//! schema.

pub mod bootstrap;

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::schema::{FeatureSchema, TargetSchema};

/// One generated row: feature values aligned by index with the schema that
/// produced it, plus a target label.
///
/// Rows are value objects. The 1-based `id` identifies a row only within the
/// batch it was generated in; bootstrap samples reuse ids to show which
/// source rows were drawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRow {
    /// 1-based position in the generated batch.
    pub id: u32,
    /// One value per schema feature, in schema order.
    pub feature_values: Vec<String>,
    /// One of the two target labels.
    pub target: String,
}

/// Generates `row_count` synthetic rows from the given schemas.
///
/// Each feature value is an independent uniform draw over that feature's
/// domain; the target is an independent uniform draw over the two labels.
/// Total over constructed schemas; `row_count == 0` yields an empty vector.
pub fn generate<R: Rng + ?Sized>(
    schema: &FeatureSchema,
    target: &TargetSchema,
    row_count: usize,
    rng: &mut R,
) -> Vec<DatasetRow> {
    let rows: Vec<DatasetRow> = (1..=row_count)
        .map(|id| {
            let feature_values = schema
                .iter()
                .map(|feature| {
                    let idx = rng.gen_range(0..feature.values.len());
                    feature.values[idx].clone()
                })
                .collect();
            let label = if rng.gen_bool(0.5) {
                target.labels[0].clone()
            } else {
                target.labels[1].clone()
            };
            DatasetRow {
                id: id as u32,
                feature_values,
                target: label,
            }
        })
        .collect();
    debug!(
        "generated {} synthetic rows over {} features",
        rows.len(),
        schema.len()
    );
    rows
}
