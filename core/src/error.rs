//! Error types for Canopy core construction boundaries.
//!
//! The generators themselves are total over validated inputs; every failure
//! mode lives at the point where a schema or parameter set is built. Once a
//! `FeatureSchema` or `TargetSchema` exists, dataset, bootstrap, tree, and
//! forest generation cannot fail.

use thiserror::Error;

/// Errors raised while constructing schemas or parameter sets.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A categorical feature was declared with no possible values. Uniform
    /// sampling over an empty domain is undefined, so the schema refuses it.
    #[error("feature '{feature}' has an empty value domain")]
    EmptyValueDomain { feature: String },

    /// Two features in the same schema share a name, which would make
    /// condition strings ambiguous.
    #[error("duplicate feature name '{feature}' in schema")]
    DuplicateFeature { feature: String },

    /// A parameter fell outside its documented range.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },
}
