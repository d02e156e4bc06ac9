//! Drives a [`QuoteWizard`] from a list of events and renders the outcome.

use std::io::{self, Write};

use quote_core::models::{
    AddOn, AgeRange, CalculationMethod, CoverageLevel, Field, InsuranceSelection, Multiplier,
    SeedProfile,
};
use quote_core::validation::{CompanyForm, EmployeeForm, InsuranceForm, StepForm};
use quote_core::{QuoteWizard, WizardEvent};
use tracing::debug;

use crate::render::ConsoleRenderer;

/// Feeds `events` to `wizard` in order, rendering every signal produced.
///
/// # Errors
///
/// Fails only when writing to the renderer fails.
pub fn replay<W: Write>(
    wizard: &mut QuoteWizard,
    events: impl IntoIterator<Item = WizardEvent>,
    renderer: &mut ConsoleRenderer<W>,
) -> io::Result<()> {
    for event in events {
        debug!(?event, "replaying event");
        let signals = wizard.handle(event);
        renderer.render_all(&signals)?;
    }
    Ok(())
}

/// Plan picked by the demo: basic cover with accidental death.
pub fn demo_selection() -> InsuranceSelection {
    InsuranceSelection {
        coverage_level: CoverageLevel::Basic,
        calculation_method: CalculationMethod::SalaryLinked,
        multiplier: Multiplier::X2,
        add_ons: [AddOn::AccidentalDeath].into_iter().collect(),
    }
}

/// Types every value of `record` into its step and submits it.
fn fill_and_submit<F: StepForm>(record: &F::Record) -> Vec<WizardEvent> {
    let mut events: Vec<_> = F::from_record(record)
        .entries()
        .into_iter()
        .map(|(field, value)| WizardEvent::field_changed(field, value))
        .collect();
    events.push(WizardEvent::StepSubmitted(F::STEP));
    events
}

/// Events of a complete session that enters the seed data, picks
/// [`demo_selection`] and confirms the quote. With `plan_only` the session
/// starts on the plan step, see [`QuoteWizard::standalone_plan`].
pub fn demo_events(
    seed: &SeedProfile,
    plan_only: bool,
) -> Vec<WizardEvent> {
    let mut events = Vec::new();
    if !plan_only {
        events.extend(fill_and_submit::<CompanyForm>(&seed.company));

        let mut employee = fill_and_submit::<EmployeeForm>(&seed.employee);
        // the lower thumb stops at the upper one, so raise the upper first
        if seed.employee.age_range.min() > AgeRange::default().max() {
            let min = employee
                .iter()
                .position(|e| matches!(e, WizardEvent::FieldChanged { field: Field::MinAge, .. }));
            let max = employee
                .iter()
                .position(|e| matches!(e, WizardEvent::FieldChanged { field: Field::MaxAge, .. }));
            if let (Some(min), Some(max)) = (min, max) {
                employee.swap(min, max);
            }
        }
        events.extend(employee);
    }
    events.extend(fill_and_submit::<InsuranceForm>(&demo_selection()));
    events.push(WizardEvent::QuoteConfirmed);
    events
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote_core::models::StepId;
    use quote_core::WizardSignal;

    use super::*;

    fn run_demo(
        seed: &SeedProfile,
        plan_only: bool,
    ) -> (QuoteWizard, String) {
        let mut wizard = if plan_only {
            QuoteWizard::standalone_plan(seed).unwrap()
        } else {
            QuoteWizard::new()
        };
        let mut renderer = ConsoleRenderer::new(Vec::new());

        replay(&mut wizard, demo_events(seed, plan_only), &mut renderer).unwrap();

        (wizard, String::from_utf8(renderer.into_inner()).unwrap())
    }

    #[test]
    fn full_demo_reaches_confirmation() {
        let (wizard, output) = run_demo(&SeedProfile::default(), false);

        assert!(output.contains("Insurance Quotation for Acme Corp"));
        // 1000 + 0.15 × 25
        assert!(output.contains("Monthly Premium:    $1,003.75"));
        assert!(output.ends_with("Quote sent to contact@acmecorp.com\nsummary closed\n"));
        assert!(!output.contains("! "));
        assert_eq!(wizard.active_step(), StepId::InsurancePlan);
    }

    #[test]
    fn plan_only_demo_skips_the_first_two_steps() {
        let seed = SeedProfile::default();

        let events = demo_events(&seed, true);
        let (_, output) = run_demo(&seed, true);

        assert!(events.iter().all(|e| !matches!(
            e,
            WizardEvent::StepSubmitted(StepId::CompanyDetails)
        )));
        assert!(output.contains("Quote sent to contact@acmecorp.com"));
    }

    #[test]
    fn older_workforce_keeps_its_age_range() {
        let mut seed = SeedProfile::default();
        seed.employee.age_range = AgeRange::new(50, 60);

        let (wizard, _) = run_demo(&seed, false);

        let committed = wizard.records().employee.clone().unwrap();
        assert_eq!(committed.age_range, AgeRange::new(50, 60));
    }

    #[test]
    fn replay_renders_signals_in_order() {
        let mut wizard = QuoteWizard::new();
        let mut renderer = ConsoleRenderer::new(Vec::new());

        replay(
            &mut wizard,
            [WizardEvent::NavigateTo(StepId::InsurancePlan)],
            &mut renderer,
        )
        .unwrap();

        let mut expected = ConsoleRenderer::new(Vec::new());
        expected
            .render(&WizardSignal::RejectionNotice(
                "Please complete current sections first.".to_string(),
            ))
            .unwrap();
        assert_eq!(renderer.into_inner(), expected.into_inner());
        assert_eq!(wizard.active_step(), StepId::CompanyDetails);
    }
}
