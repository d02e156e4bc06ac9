//! Per-step field validation.
//!
//! Each step keeps its raw input in a form type implementing [`StepForm`].
//! Validation is a pure mapping from a form to [`FieldErrors`]; an empty map
//! means the step is valid. Problems are always returned as data, never
//! raised as errors.

mod company;
mod employee;
mod insurance;
mod numeric;
mod state;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::models::{Field, StepId};

pub use company::CompanyForm;
pub use employee::EmployeeForm;
pub use insurance::InsuranceForm;
pub use numeric::{NumericInput, read_number};
pub use state::{ValidationState, Validity};

/// A single problem with one field.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: Field,
    pub message: String,
}

/// Field name to error message. A field absent from the map has no error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `message` against `field`, replacing any earlier message.
    pub fn insert(
        &mut self,
        field: Field,
        message: impl Into<String>,
    ) {
        self.0.insert(field, message.into());
    }

    pub fn get(
        &self,
        field: Field,
    ) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(
        &self,
        field: Field,
    ) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn errors(&self) -> Vec<FieldValidationError> {
        self.iter()
            .map(|(field, message)| FieldValidationError {
                field,
                message: message.to_string(),
            })
            .collect()
    }

    /// Keeps only the entries whose field satisfies `keep`.
    pub fn filtered(
        &self,
        mut keep: impl FnMut(Field) -> bool,
    ) -> Self {
        Self(
            self.0
                .iter()
                .filter(|(f, _)| keep(**f))
                .map(|(f, m)| (*f, m.clone()))
                .collect(),
        )
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Raw, user-editable input for one wizard step.
pub trait StepForm: Default {
    /// The committed value produced from a valid form.
    type Record;

    /// The step this form belongs to.
    const STEP: StepId;

    /// Stores a raw value for `field`. Fields of other steps are ignored.
    fn apply(
        &mut self,
        field: Field,
        value: &str,
    );

    /// Current raw value of every field, in form order.
    fn entries(&self) -> Vec<(Field, String)>;

    /// Parses the form into its record, or returns every field error.
    fn to_record(&self) -> Result<Self::Record, FieldErrors>;

    /// Pure validation: identical input always yields identical errors.
    fn validate(&self) -> FieldErrors {
        self.to_record().err().unwrap_or_default()
    }

    /// Builds a form pre-filled from a committed record.
    fn from_record(record: &Self::Record) -> Self;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn errors_iterate_in_form_order() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::TaxId, "Tax ID is required");
        errors.insert(Field::Name, "Company name is required");

        let fields: Vec<_> = errors.iter().map(|(f, _)| f).collect();

        assert_eq!(fields, vec![Field::Name, Field::TaxId]);
    }

    #[test]
    fn filtered_drops_unselected_fields() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Name, "Company name is required");
        errors.insert(Field::Email, "Email is required");

        let visible = errors.filtered(|f| f == Field::Email);

        assert_eq!(visible.len(), 1);
        assert_eq!(visible.get(Field::Email), Some("Email is required"));
        assert!(!visible.contains(Field::Name));
    }

    #[test]
    fn display_joins_entries() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Name, "Company name is required");
        errors.insert(Field::Email, "Invalid email address");

        assert_eq!(
            errors.to_string(),
            "name: Company name is required; email: Invalid email address"
        );
    }
}
