use std::collections::BTreeMap;

use crate::models::{Field, StepId};
use crate::summary::QuoteSummary;
use crate::validation::{FieldErrors, Validity};

/// User actions forwarded by the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// A field's raw value changed. The field determines the step.
    FieldChanged { field: Field, value: String },
    /// A field lost focus.
    FieldBlurred(Field),
    /// The step's form was submitted ("Continue" or "Get quote").
    StepSubmitted(StepId),
    /// "Previous" was pressed on the given step.
    Previous(StepId),
    /// A step was picked from the navigation sidebar.
    NavigateTo(StepId),
    /// "Edit" was pressed on a summary section.
    EditRequested(StepId),
    /// The quote was confirmed for sending.
    QuoteConfirmed,
    /// The summary was closed without confirming.
    SummaryDismissed,
}

impl WizardEvent {
    pub fn field_changed(
        field: Field,
        value: impl Into<String>,
    ) -> Self {
        Self::FieldChanged {
            field,
            value: value.into(),
        }
    }
}

/// State changes the rendering collaborator reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardSignal {
    /// A step was revalidated. `errors` holds only the errors the user
    /// should see.
    ValidationChanged {
        step: StepId,
        errors: FieldErrors,
        validity: Validity,
    },
    /// The set of rendered steps changed.
    StepVisibilityChanged(BTreeMap<StepId, bool>),
    /// A different step became active and should be brought into view.
    ActiveStepChanged(StepId),
    /// Transient, auto-dismissing notice explaining a refused action.
    RejectionNotice(String),
    /// The quote is complete and ready to be presented.
    SummaryReady(Box<QuoteSummary>),
    /// The summary view should close.
    SummaryClosed,
    /// The quote was confirmed. Delivery is informational only.
    QuoteSent { recipient: String },
}
