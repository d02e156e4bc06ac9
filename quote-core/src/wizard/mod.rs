//! Step controller for the quote wizard.
//!
//! The controller owns the raw input of every step and decides which steps
//! are reachable. Renderers feed it [`WizardEvent`]s and react to the
//! [`WizardSignal`]s it returns.

mod controller;
mod events;

pub use controller::{QuoteRecords, QuoteWizard, WizardState};
pub use events::{WizardEvent, WizardSignal};
