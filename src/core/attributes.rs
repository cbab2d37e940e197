use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ConfigError;

/// Labels shorter than this still reserve room for two characters.
pub const MIN_LABEL_CHARS: usize = 2;

/// One chart axis: a title and its normalized score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub label: String,
    pub value: f64,
}

impl Attribute {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Value clamped to `[0, 1]`.
    ///
    /// Out-of-range scores are tolerated and pinned to the nearest ring
    /// boundary instead of being rejected.
    #[must_use]
    pub fn clamped_value(&self) -> f64 {
        self.value.clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_clamped(&self) -> bool {
        !(0.0..=1.0).contains(&self.value)
    }
}

/// Ordered attributes, one per polygon vertex.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeSet {
    attributes: Vec<Attribute>,
}

impl AttributeSet {
    #[must_use]
    pub fn new(attributes: Vec<Attribute>) -> Self {
        Self { attributes }
    }

    /// Builds a set from `(label, value)` pairs in vertex order.
    #[must_use]
    pub fn from_pairs<L, I>(pairs: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (L, f64)>,
    {
        Self {
            attributes: pairs
                .into_iter()
                .map(|(label, value)| Attribute::new(label, value))
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Rejects values that cannot be clamped (NaN, infinities).
    pub fn validate_values(&self) -> Result<(), ConfigError> {
        for attribute in &self.attributes {
            if !attribute.value.is_finite() {
                return Err(ConfigError::NonFiniteValue {
                    label: attribute.label.clone(),
                });
            }
        }
        Ok(())
    }

    /// Longest label length in characters, never below `MIN_LABEL_CHARS`.
    #[must_use]
    pub fn max_label_chars(&self) -> usize {
        self.attributes
            .iter()
            .map(|attribute| attribute.label.chars().count())
            .fold(MIN_LABEL_CHARS, usize::max)
    }

    /// Clamped values rescaled to ring units (`value × ring_count`).
    #[must_use]
    pub fn ring_units(&self, ring_count: u32) -> SmallVec<[f64; 8]> {
        let rings = f64::from(ring_count);
        self.attributes
            .iter()
            .map(|attribute| attribute.clamped_value() * rings)
            .collect()
    }

    #[must_use]
    pub fn clamped_count(&self) -> usize {
        self.attributes
            .iter()
            .filter(|attribute| attribute.is_clamped())
            .count()
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<T: IntoIterator<Item = Attribute>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
