pub mod calculations;
pub mod models;
pub mod summary;
pub mod validation;
pub mod wizard;

pub use calculations::{PremiumBreakdown, PremiumCalculator, PremiumRates, premium};
pub use summary::QuoteSummary;
pub use wizard::{QuoteWizard, WizardEvent, WizardSignal, WizardState};
