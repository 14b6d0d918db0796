//! Audience-facing feature and target schemas.
//!
//! A schema describes the vocabulary every generator draws from: an ordered
//! list of named categorical features (each with a closed value domain) and a
//! binary target. Schemas are immutable once constructed; the constructors
//! validate the invariants the generators rely on so that generation itself
//! is total.
//!
//! Persona content (crop-yield, patient-records, student-performance tables)
//! is supplied by the embedding dashboard, not hard-coded here.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A single named categorical feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Display name, unique within a schema.
    pub name: String,
    /// Optional unit shown alongside the name (e.g. "mm" for rainfall).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Closed categorical domain, never empty in a constructed schema.
    pub values: Vec<String>,
}

impl Feature {
    /// Creates a feature without a unit annotation.
    pub fn new(name: impl Into<String>, values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            unit: None,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Attaches a display unit.
    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }
}

/// Ordered, validated collection of features for one audience persona.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    features: Vec<Feature>,
}

impl FeatureSchema {
    /// Validates and constructs a schema.
    ///
    /// A zero-feature schema is legal (the tree generator degrades to a
    /// single leaf); a feature with an empty value domain is not, since
    /// uniform sampling over it is undefined.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyValueDomain`] or
    /// [`CoreError::DuplicateFeature`] when the invariants fail.
    pub fn new(features: Vec<Feature>) -> Result<Self, CoreError> {
        for (i, feature) in features.iter().enumerate() {
            if feature.values.is_empty() {
                return Err(CoreError::EmptyValueDomain {
                    feature: feature.name.clone(),
                });
            }
            if features[..i].iter().any(|f| f.name == feature.name) {
                return Err(CoreError::DuplicateFeature {
                    feature: feature.name.clone(),
                });
            }
        }
        Ok(Self { features })
    }

    /// Schema with no features at all.
    #[must_use]
    pub fn empty() -> Self {
        Self { features: Vec::new() }
    }

    /// Number of features.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// True when the schema has no features.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Feature at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Feature> {
        self.features.get(index)
    }

    /// Iterates over features in schema order.
    pub fn iter(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    /// Features as a slice, in schema order.
    #[must_use]
    pub fn as_slice(&self) -> &[Feature] {
        &self.features
    }
}

/// The binary prediction target: a name and exactly two class labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSchema {
    /// Display name of the predicted quantity (e.g. "Yield").
    pub name: String,
    /// The two class labels, in display order. The first label is the
    /// tie-break winner everywhere a vote can tie.
    pub labels: [String; 2],
}

impl TargetSchema {
    /// Constructs a binary target schema.
    pub fn new(
        name: impl Into<String>,
        first_label: impl Into<String>,
        second_label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            labels: [first_label.into(), second_label.into()],
        }
    }

    /// True if `label` is one of the two class labels.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}
