//! Range validation for the questionnaire
//!
//! Runs on every submit attempt. Messages are produced per field in
//! declaration order.

use crate::fields::{Bounds, Field, FIELD_COUNT};
use crate::form::{FieldInput, FormState};
use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    Empty { field: Field },
    OutOfRange { field: Field, bounds: Bounds },
}

impl Violation {
    pub fn field(&self) -> Field {
        match self {
            Violation::Empty { field } | Violation::OutOfRange { field, .. } => *field,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Empty { field } => write!(
                f,
                "⚠️ {} cannot be empty! Please enter a value.",
                field.display_name()
            ),
            Violation::OutOfRange { field, bounds } => write!(
                f,
                "{} must be between {} and {}",
                field.display_name(),
                bounds.min,
                bounds.max
            ),
        }
    }
}

/// Values in the order the prediction service expects
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// Whole numbers go out as JSON integers, matching what the web form sent
impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for &v in &self.0 {
            if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
                seq.serialize_element(&(v as i64))?;
            } else {
                seq.serialize_element(&v)?;
            }
        }
        seq.end()
    }
}

/// Validate the form and build the feature vector when every field passes.
pub fn check(form: &FormState) -> Result<FeatureVector, Vec<Violation>> {
    let mut violations = Vec::new();
    let mut features = Vec::with_capacity(FIELD_COUNT);

    for (field, input) in form.iter() {
        match input {
            FieldInput::Empty => violations.push(Violation::Empty { field }),
            FieldInput::Value(v) => {
                let bounds = field.bounds();
                if bounds.contains(v) {
                    features.push(v);
                } else {
                    violations.push(Violation::OutOfRange { field, bounds });
                }
            }
        }
    }

    if violations.is_empty() {
        Ok(FeatureVector(features))
    } else {
        Err(violations)
    }
}

/// Every violation in the form, in field declaration order. Empty when valid.
pub fn validate(form: &FormState) -> Vec<Violation> {
    check(form).err().unwrap_or_default()
}
