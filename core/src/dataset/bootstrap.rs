//! Bootstrap resampling of a generated dataset.
//!
//! Each ensemble member sees a resample-with-replacement of the base table,
//! the "bagging" input the dashboard illustrates. Duplicated rows are the
//! point, not an error: for a large source of size `n`, roughly `1 - 1/e`
//! (about 63.2%) of the distinct source rows appear in any one sample.

use std::collections::HashSet;

use log::debug;
use rand::Rng;

use super::DatasetRow;

/// Draws a bootstrap sample: `source.len()` independent uniform picks from
/// `source`, copied by value.
///
/// The output always has exactly the source length. An empty source yields
/// an empty sample.
pub fn resample<R: Rng + ?Sized>(source: &[DatasetRow], rng: &mut R) -> Vec<DatasetRow> {
    if source.is_empty() {
        return Vec::new();
    }
    let sample: Vec<DatasetRow> = (0..source.len())
        .map(|_| source[rng.gen_range(0..source.len())].clone())
        .collect();
    debug!(
        "bootstrap sample of {} rows, {} distinct",
        sample.len(),
        distinct_source_rows(&sample)
    );
    sample
}

/// Number of distinct source rows (by id) present in a sample.
#[must_use]
pub fn distinct_source_rows(sample: &[DatasetRow]) -> usize {
    sample.iter().map(|row| row.id).collect::<HashSet<_>>().len()
}

/// Analytic expected number of distinct rows in one bootstrap sample of a
/// source of size `n`: `n * (1 - (1 - 1/n)^n)`.
///
/// Converges to `n * (1 - 1/e)` as `n` grows; the dashboard caption quotes
/// this value next to the observed count.
#[must_use]
pub fn expected_distinct(n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    n * (1.0 - (1.0 - 1.0 / n).powf(n))
}
