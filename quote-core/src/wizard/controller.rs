use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, info, warn};

use super::events::{WizardEvent, WizardSignal};
use crate::calculations::PremiumCalculator;
use crate::models::{
    CompanyRecord, EmployeeRecord, Field, InsuranceSelection, SeedProfile, StepId,
};
use crate::summary::QuoteSummary;
use crate::validation::{
    CompanyForm, EmployeeForm, FieldErrors, InsuranceForm, StepForm, ValidationState, Validity,
};

const JUMP_REFUSED: &str = "Please complete current sections first.";

fn advance_refused(step: StepId) -> String {
    format!(
        "Please complete the {} form before proceeding.",
        step.to_notice_str()
    )
}

fn tracked_fields(step: StepId) -> impl Iterator<Item = Field> {
    Field::for_step(step).filter(Field::is_tracked)
}

/// Snapshot of the navigation-relevant state. `validity` holds whether each
/// step is currently valid; a step that has not been validated yet counts as
/// not valid, see [`QuoteWizard::validity`] for the three-state view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WizardState {
    pub active_step: StepId,
    pub validity: BTreeMap<StepId, bool>,
    pub visibility: BTreeMap<StepId, bool>,
}

impl WizardState {
    pub fn is_valid(
        &self,
        step: StepId,
    ) -> bool {
        self.validity.get(&step).copied().unwrap_or(false)
    }

    pub fn is_visible(
        &self,
        step: StepId,
    ) -> bool {
        self.visibility.get(&step).copied().unwrap_or(false)
    }
}

/// Records committed by steps the user has moved on from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuoteRecords {
    pub company: Option<CompanyRecord>,
    pub employee: Option<EmployeeRecord>,
    pub selection: Option<InsuranceSelection>,
}

#[derive(Debug, Clone, Default)]
struct StepSlot<F> {
    form: F,
    validation: ValidationState,
}

/// Drives the three-step intake wizard.
///
/// Every operation runs synchronously and returns the signals the rendering
/// collaborator should react to, in the order they occurred.
#[derive(Debug, Clone)]
pub struct QuoteWizard {
    active: StepId,
    visibility: BTreeMap<StepId, bool>,
    company: StepSlot<CompanyForm>,
    employee: StepSlot<EmployeeForm>,
    insurance: StepSlot<InsuranceForm>,
    records: QuoteRecords,
    summary: Option<QuoteSummary>,
    calculator: PremiumCalculator,
}

impl Default for QuoteWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl QuoteWizard {
    /// A fresh session on the company step, with only that step visible.
    pub fn new() -> Self {
        let visibility = StepId::ALL
            .into_iter()
            .map(|step| (step, step == StepId::CompanyDetails))
            .collect();
        Self {
            active: StepId::CompanyDetails,
            visibility,
            company: StepSlot::default(),
            employee: StepSlot::default(),
            insurance: StepSlot::default(),
            records: QuoteRecords::default(),
            summary: None,
            calculator: PremiumCalculator::default(),
        }
    }

    /// Opens a session directly on the plan step, with company and employee
    /// data taken from `seed` as if both steps had been completed.
    ///
    /// # Errors
    ///
    /// Returns the field errors of the seed if it would not pass validation.
    pub fn standalone_plan(seed: &SeedProfile) -> Result<Self, FieldErrors> {
        let mut wizard = Self::new();
        wizard.company.form = CompanyForm::from_record(&seed.company);
        wizard.employee.form = EmployeeForm::from_record(&seed.employee);

        let mut errors = FieldErrors::new();
        for step in [StepId::CompanyDetails, StepId::EmployeeDemographic] {
            let step_errors = wizard.validate_step(step);
            for (field, message) in step_errors.iter() {
                errors.insert(field, message);
            }
            let validation = wizard.validation_mut(step);
            validation.submit(tracked_fields(step));
            validation.record(step_errors);
        }
        if !errors.is_empty() {
            return Err(errors);
        }

        let mut signals = Vec::new();
        wizard.refresh_visibility(&mut signals);
        wizard.commit(StepId::CompanyDetails);
        wizard.commit(StepId::EmployeeDemographic);
        wizard.active = StepId::InsurancePlan;
        info!(company = %seed.company.name, "opened standalone plan step from seed profile");
        Ok(wizard)
    }

    /// Prices quotes with `calculator` instead of the standard rates.
    pub fn with_calculator(
        mut self,
        calculator: PremiumCalculator,
    ) -> Self {
        self.calculator = calculator;
        self
    }

    // ─── inspection ─────────────────────────────────────────────────────────

    pub fn active_step(&self) -> StepId {
        self.active
    }

    pub fn validity(
        &self,
        step: StepId,
    ) -> Validity {
        self.validation(step).validity()
    }

    pub fn is_valid(
        &self,
        step: StepId,
    ) -> bool {
        self.validity(step).is_valid()
    }

    pub fn is_visible(
        &self,
        step: StepId,
    ) -> bool {
        self.visibility.get(&step).copied().unwrap_or(false)
    }

    pub fn state(&self) -> WizardState {
        WizardState {
            active_step: self.active,
            validity: StepId::ALL
                .into_iter()
                .map(|step| (step, self.is_valid(step)))
                .collect(),
            visibility: self.visibility.clone(),
        }
    }

    pub fn validation(
        &self,
        step: StepId,
    ) -> &ValidationState {
        match step {
            StepId::CompanyDetails => &self.company.validation,
            StepId::EmployeeDemographic => &self.employee.validation,
            StepId::InsurancePlan => &self.insurance.validation,
        }
    }

    pub fn company_form(&self) -> &CompanyForm {
        &self.company.form
    }

    pub fn employee_form(&self) -> &EmployeeForm {
        &self.employee.form
    }

    pub fn insurance_form(&self) -> &InsuranceForm {
        &self.insurance.form
    }

    pub fn records(&self) -> &QuoteRecords {
        &self.records
    }

    /// The open summary, if any.
    pub fn summary(&self) -> Option<&QuoteSummary> {
        self.summary.as_ref()
    }

    // ─── inbound events ─────────────────────────────────────────────────────

    /// Dispatches one user action.
    pub fn handle(
        &mut self,
        event: WizardEvent,
    ) -> Vec<WizardSignal> {
        match event {
            WizardEvent::FieldChanged { field, value } => self.change_field(field, &value),
            WizardEvent::FieldBlurred(field) => self.blur_field(field),
            WizardEvent::StepSubmitted(step) => self.advance(step),
            WizardEvent::Previous(step) => self.previous(step),
            WizardEvent::NavigateTo(step) => self.navigate_to(step),
            WizardEvent::EditRequested(step) => self.request_edit(step),
            WizardEvent::QuoteConfirmed => self.confirm_quote(),
            WizardEvent::SummaryDismissed => self.dismiss_summary(),
        }
    }

    /// Stores a new raw value and revalidates the step once it is engaged.
    /// Picking an option from a closed set counts as touching the field.
    pub fn change_field(
        &mut self,
        field: Field,
        value: &str,
    ) -> Vec<WizardSignal> {
        let mut signals = Vec::new();
        let step = field.step();
        if !self.accepts_input(step, "change") {
            return signals;
        }

        debug!(%field, "field changed");
        match step {
            StepId::CompanyDetails => self.company.form.apply(field, value),
            StepId::EmployeeDemographic => self.employee.form.apply(field, value),
            StepId::InsurancePlan => self.insurance.form.apply(field, value),
        }
        if field.is_choice() {
            self.validation_mut(step).touch(field);
        }
        self.recompute(step, &mut signals);
        signals
    }

    /// Marks a field touched so its error becomes visible.
    pub fn blur_field(
        &mut self,
        field: Field,
    ) -> Vec<WizardSignal> {
        let mut signals = Vec::new();
        let step = field.step();
        if !self.accepts_input(step, "blur") || !field.is_tracked() {
            return signals;
        }

        if self.validation_mut(step).touch(field) {
            debug!(%field, "field touched");
        }
        self.recompute(step, &mut signals);
        signals
    }

    /// Submits `step` and moves to the next step, or opens the summary from
    /// the final step.
    ///
    /// Submission marks every field of the step touched. If the step is not
    /// valid afterwards the wizard stays put and a notice is emitted.
    pub fn advance(
        &mut self,
        step: StepId,
    ) -> Vec<WizardSignal> {
        let mut signals = Vec::new();
        if !self.accepts_input(step, "submit") {
            return signals;
        }

        self.validation_mut(step).submit(tracked_fields(step));
        self.recompute(step, &mut signals);

        if !self.is_valid(step) {
            warn!(%step, "advance refused: step has errors");
            signals.push(WizardSignal::RejectionNotice(advance_refused(step)));
            return signals;
        }

        match step.next() {
            Some(next) => self.transition(next, &mut signals),
            None => self.open_summary(&mut signals),
        }
        signals
    }

    /// Returns to the step before `step` without checking validity.
    pub fn previous(
        &mut self,
        step: StepId,
    ) -> Vec<WizardSignal> {
        let mut signals = Vec::new();
        if !self.accepts_input(step, "previous") {
            return signals;
        }

        match step.previous() {
            Some(target) => self.transition(target, &mut signals),
            None => debug!(%step, "no step before the first one"),
        }
        signals
    }

    /// Jumps to `target` from the navigation sidebar. Allowed only when every
    /// earlier step is currently valid.
    pub fn navigate_to(
        &mut self,
        target: StepId,
    ) -> Vec<WizardSignal> {
        let mut signals = Vec::new();
        if self.summary.is_some() {
            warn!(%target, "ignoring navigation while the summary is open");
            return signals;
        }

        if self.jump_allowed(target, &mut signals) {
            self.transition(target, &mut signals);
        }
        signals
    }

    /// Reopens `target` from the summary. Same rule as [`Self::navigate_to`],
    /// and the summary is closed.
    pub fn request_edit(
        &mut self,
        target: StepId,
    ) -> Vec<WizardSignal> {
        let mut signals = Vec::new();
        if !self.jump_allowed(target, &mut signals) {
            return signals;
        }

        if self.summary.take().is_some() {
            signals.push(WizardSignal::SummaryClosed);
        }
        info!(%target, "reopening step for edit");
        self.transition(target, &mut signals);
        signals
    }

    /// Confirms the open quote. Nothing is actually delivered.
    pub fn confirm_quote(&mut self) -> Vec<WizardSignal> {
        let Some(summary) = self.summary.take() else {
            warn!("ignoring confirmation: no quote is open");
            return Vec::new();
        };

        let recipient = summary.recipient().to_string();
        info!(%recipient, premium = %summary.monthly_premium(), "quote confirmed");
        vec![
            WizardSignal::QuoteSent { recipient },
            WizardSignal::SummaryClosed,
        ]
    }

    /// Closes the summary without confirming.
    pub fn dismiss_summary(&mut self) -> Vec<WizardSignal> {
        match self.summary.take() {
            Some(_) => vec![WizardSignal::SummaryClosed],
            None => Vec::new(),
        }
    }

    // ─── internals ──────────────────────────────────────────────────────────

    fn validation_mut(
        &mut self,
        step: StepId,
    ) -> &mut ValidationState {
        match step {
            StepId::CompanyDetails => &mut self.company.validation,
            StepId::EmployeeDemographic => &mut self.employee.validation,
            StepId::InsurancePlan => &mut self.insurance.validation,
        }
    }

    fn validate_step(
        &self,
        step: StepId,
    ) -> FieldErrors {
        match step {
            StepId::CompanyDetails => self.company.form.validate(),
            StepId::EmployeeDemographic => self.employee.form.validate(),
            StepId::InsurancePlan => self.insurance.form.validate(),
        }
    }

    /// Only the active step takes input, and nothing does while the summary
    /// is open.
    fn accepts_input(
        &self,
        step: StepId,
        action: &'static str,
    ) -> bool {
        if self.summary.is_some() {
            warn!(%step, action, "ignoring input while the summary is open");
            return false;
        }
        if step != self.active {
            warn!(%step, active = %self.active, action, "ignoring input for inactive step");
            return false;
        }
        true
    }

    fn jump_allowed(
        &self,
        target: StepId,
        signals: &mut Vec<WizardSignal>,
    ) -> bool {
        let allowed =
            self.is_visible(target) && target.predecessors().all(|step| self.is_valid(step));
        if !allowed {
            warn!(%target, "jump refused: earlier steps incomplete");
            signals.push(WizardSignal::RejectionNotice(JUMP_REFUSED.to_string()));
        }
        allowed
    }

    fn recompute(
        &mut self,
        step: StepId,
        signals: &mut Vec<WizardSignal>,
    ) {
        if !self.validation(step).is_engaged() {
            return;
        }

        let errors = self.validate_step(step);
        let validation = self.validation_mut(step);
        validation.record(errors);
        let validity = validation.validity();
        let visible = validation.visible_errors();
        debug!(%step, ?validity, shown = visible.len(), "step revalidated");

        signals.push(WizardSignal::ValidationChanged {
            step,
            errors: visible,
            validity,
        });
        self.refresh_visibility(signals);
    }

    /// Reveals steps whose predecessors are all valid. Visibility is never
    /// revoked.
    fn refresh_visibility(
        &mut self,
        signals: &mut Vec<WizardSignal>,
    ) {
        let mut changed = false;
        for step in StepId::ALL {
            let reachable = step.predecessors().all(|s| self.is_valid(s));
            if reachable && !self.is_visible(step) {
                self.visibility.insert(step, true);
                info!(%step, "step revealed");
                changed = true;
            }
        }
        if changed {
            signals.push(WizardSignal::StepVisibilityChanged(self.visibility.clone()));
        }
    }

    /// Saves the step's record if its current input is valid.
    fn commit(
        &mut self,
        step: StepId,
    ) {
        if !self.is_valid(step) {
            debug!(%step, "leaving step without committing: not valid");
            return;
        }
        match step {
            StepId::CompanyDetails => self.records.company = self.company.form.to_record().ok(),
            StepId::EmployeeDemographic => {
                self.records.employee = self.employee.form.to_record().ok()
            }
            StepId::InsurancePlan => {
                self.records.selection = self.insurance.form.to_record().ok()
            }
        }
        debug!(%step, "step committed");
    }

    fn transition(
        &mut self,
        target: StepId,
        signals: &mut Vec<WizardSignal>,
    ) {
        if target == self.active {
            return;
        }
        let leaving = self.active;
        self.commit(leaving);
        self.active = target;
        info!(from = %leaving, to = %target, "active step changed");
        signals.push(WizardSignal::ActiveStepChanged(target));
    }

    fn open_summary(
        &mut self,
        signals: &mut Vec<WizardSignal>,
    ) {
        self.commit(StepId::InsurancePlan);
        let records = &self.records;
        let (Some(company), Some(employee), Some(selection)) = (
            records.company.clone(),
            records.employee.clone(),
            records.selection,
        ) else {
            warn!("summary refused: a step has no committed record");
            signals.push(WizardSignal::RejectionNotice(JUMP_REFUSED.to_string()));
            return;
        };

        let summary = QuoteSummary::assemble(company, employee, selection, &self.calculator);
        info!(
            company = %summary.company.name,
            premium = %summary.monthly_premium(),
            "quote summary ready"
        );
        signals.push(WizardSignal::SummaryReady(Box::new(summary.clone())));
        self.summary = Some(summary);
    }
}
