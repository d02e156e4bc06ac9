use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::FieldErrors;
use crate::models::Field;

/// Validation outcome of one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validity {
    /// Nothing touched and never submitted, so no verdict yet.
    #[default]
    Pending,
    Valid,
    Invalid,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Errors, touched flags and submission flag of one step.
///
/// Errors are only recorded once the step is engaged (a field was touched or
/// the step was submitted), and an error is only visible to the user when its
/// field was touched or the step was submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationState {
    errors: FieldErrors,
    touched: BTreeSet<Field>,
    submitted: bool,
}

impl ValidationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `field` as touched. Returns `true` if it was not touched before.
    pub fn touch(
        &mut self,
        field: Field,
    ) -> bool {
        self.touched.insert(field)
    }

    /// Marks the step submitted and every given field touched.
    pub fn submit(
        &mut self,
        fields: impl IntoIterator<Item = Field>,
    ) {
        self.submitted = true;
        self.touched.extend(fields);
    }

    pub fn is_touched(
        &self,
        field: Field,
    ) -> bool {
        self.touched.contains(&field)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Whether validation results should be recorded for this step.
    pub fn is_engaged(&self) -> bool {
        self.submitted || !self.touched.is_empty()
    }

    pub fn record(
        &mut self,
        errors: FieldErrors,
    ) {
        self.errors = errors;
    }

    pub fn validity(&self) -> Validity {
        if !self.is_engaged() {
            Validity::Pending
        } else if self.errors.is_empty() {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    /// Every recorded error, shown or not.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Errors the user should currently see.
    pub fn visible_errors(&self) -> FieldErrors {
        if self.submitted {
            return self.errors.clone();
        }
        self.errors.filtered(|f| self.touched.contains(&f))
    }
}
