//! Integration tests that load the on-disk session fixture and replay it
//! through a fresh wizard.

use std::path::Path;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use quote_cli::render::ConsoleRenderer;
use quote_cli::{script, session};
use quote_core::models::{Field, StepId};
use quote_core::{QuoteWizard, WizardEvent};

/// Path to the sample session shipped with the test fixtures.
fn fixture_path() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("complete_session.csv")
        .leak()
}

fn replay_fixture() -> (QuoteWizard, String) {
    let events = script::load_from_file(fixture_path()).expect("fixture should load");
    let mut wizard = QuoteWizard::new();
    let mut renderer = ConsoleRenderer::new(Vec::new());

    session::replay(&mut wizard, events, &mut renderer).expect("writing to a Vec cannot fail");

    (wizard, String::from_utf8(renderer.into_inner()).unwrap())
}

#[test]
fn fixture_loads_every_row() {
    let events = script::load_from_file(fixture_path()).unwrap();

    assert_eq!(events.len(), 29);
    assert_eq!(events[0], WizardEvent::NavigateTo(StepId::InsurancePlan));
    assert_eq!(
        events[10],
        WizardEvent::field_changed(Field::Coverage, "1,200")
    );
    assert_eq!(events[28], WizardEvent::QuoteConfirmed);
}

#[test]
fn early_jump_is_refused() {
    let (_, output) = replay_fixture();

    assert!(output.starts_with("! Please complete current sections first.\n"));
}

#[test]
fn bad_email_is_reported_then_cleared() {
    let (_, output) = replay_fixture();

    assert!(output.contains("[company-details] invalid\n    Email: Invalid email address\n"));
    assert!(output.contains("> Employee Demographic\n"));
}

#[test]
fn edited_head_count_reprices_the_quote() {
    let (wizard, output) = replay_fixture();

    // 2000 + (0.30 + 0.10) × 1200, then × 1000 after the edit
    assert!(output.contains("Monthly Premium:    $2,480.00"));
    assert!(output.contains("Monthly Premium:    $2,400.00"));
    assert_eq!(
        wizard.records().employee.as_ref().map(|e| e.coverage_count),
        Some(1000)
    );
    assert_eq!(
        wizard.records().employee.as_ref().map(|e| e.salary_range.max),
        Some(dec!(160000))
    );
}

#[test]
fn session_ends_with_confirmation() {
    let (wizard, output) = replay_fixture();

    assert!(output.ends_with("Quote sent to benefits@globex.com\nsummary closed\n"));
    assert!(wizard.summary().is_none());
}
