//! Plain-text rendering of wizard signals.

use std::io::{self, Write};

use quote_core::calculations::PremiumBreakdown;
use quote_core::calculations::common::format_currency;
use quote_core::validation::Validity;
use quote_core::WizardSignal;

/// Writes one block of text per signal.
pub struct ConsoleRenderer<W> {
    out: W,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn render_all(
        &mut self,
        signals: &[WizardSignal],
    ) -> io::Result<()> {
        signals.iter().try_for_each(|signal| self.render(signal))
    }

    pub fn render(
        &mut self,
        signal: &WizardSignal,
    ) -> io::Result<()> {
        let out = &mut self.out;
        match signal {
            WizardSignal::ValidationChanged {
                step,
                errors,
                validity,
            } => {
                let verdict = match validity {
                    Validity::Pending => "pending",
                    Validity::Valid => "valid",
                    Validity::Invalid => "invalid",
                };
                writeln!(out, "[{step}] {verdict}")?;
                for (field, message) in errors.iter() {
                    writeln!(out, "    {}: {message}", field.to_long_str())?;
                }
            }
            WizardSignal::StepVisibilityChanged(visibility) => {
                let shown: Vec<_> = visibility
                    .iter()
                    .filter(|(_, visible)| **visible)
                    .map(|(step, _)| step.as_str())
                    .collect();
                writeln!(out, "visible steps: {}", shown.join(", "))?;
            }
            WizardSignal::ActiveStepChanged(step) => {
                writeln!(out, "> {}", step.to_long_str())?;
            }
            WizardSignal::RejectionNotice(message) => writeln!(out, "! {message}")?,
            WizardSignal::SummaryReady(summary) => {
                writeln!(out)?;
                writeln!(out, "{summary}")?;
                writeln!(out)?;
            }
            WizardSignal::SummaryClosed => writeln!(out, "summary closed")?,
            WizardSignal::QuoteSent { recipient } => {
                writeln!(out, "Quote sent to {recipient}")?
            }
        }
        Ok(())
    }

    /// Itemised premium estimate.
    pub fn render_premium(
        &mut self,
        breakdown: &PremiumBreakdown,
    ) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out, "{:<20}{}", "Base premium:", format_currency(breakdown.base))?;
        writeln!(
            out,
            "{:<20}{} x {} employees = {}",
            "Add-ons:",
            format_currency(breakdown.per_employee_rate),
            breakdown.employee_count,
            format_currency(breakdown.add_on_total)
        )?;
        writeln!(out, "{:<20}{}", "Monthly premium:", format_currency(breakdown.total))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use quote_core::calculations::PremiumCalculator;
    use quote_core::models::{AddOn, CoverageLevel, Field, StepId};
    use quote_core::validation::FieldErrors;

    use super::*;

    fn rendered(signals: &[WizardSignal]) -> String {
        let mut renderer = ConsoleRenderer::new(Vec::new());
        renderer.render_all(signals).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn validation_lists_visible_errors_by_label() {
        let mut errors = FieldErrors::new();
        errors.insert(Field::Email, "Invalid email address");

        let text = rendered(&[WizardSignal::ValidationChanged {
            step: StepId::CompanyDetails,
            errors,
            validity: Validity::Invalid,
        }]);

        assert_eq!(
            text,
            "[company-details] invalid\n    Email: Invalid email address\n"
        );
    }

    #[test]
    fn visibility_lists_only_shown_steps() {
        let visibility = BTreeMap::from([
            (StepId::CompanyDetails, true),
            (StepId::EmployeeDemographic, true),
            (StepId::InsurancePlan, false),
        ]);

        let text = rendered(&[WizardSignal::StepVisibilityChanged(visibility)]);

        assert_eq!(
            text,
            "visible steps: company-details, employee-demographic\n"
        );
    }

    #[test]
    fn navigation_and_notices() {
        let text = rendered(&[
            WizardSignal::ActiveStepChanged(StepId::InsurancePlan),
            WizardSignal::RejectionNotice("Please complete current sections first.".into()),
            WizardSignal::QuoteSent {
                recipient: "hr@globex.com".into(),
            },
            WizardSignal::SummaryClosed,
        ]);

        assert_eq!(
            text,
            "> Group Life Insurance Plan\n\
             ! Please complete current sections first.\n\
             Quote sent to hr@globex.com\n\
             summary closed\n"
        );
    }

    #[test]
    fn premium_is_itemised() {
        let breakdown = PremiumCalculator::default().calculate(
            CoverageLevel::Basic,
            &[AddOn::AccidentalDeath].into_iter().collect(),
            100,
        );
        let mut renderer = ConsoleRenderer::new(Vec::new());

        renderer.render_premium(&breakdown).unwrap();

        assert_eq!(
            String::from_utf8(renderer.into_inner()).unwrap(),
            "Base premium:       $1,000.00\n\
             Add-ons:            $0.15 x 100 employees = $15.00\n\
             Monthly premium:    $1,015.00\n"
        );
    }
}
