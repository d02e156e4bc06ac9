use tracing::warn;

use super::numeric::read_switch;
use super::{FieldErrors, StepForm};
use crate::models::{
    AddOn, AddOns, CalculationMethod, CoverageLevel, Field, InsuranceSelection, Multiplier,
    StepId,
};

/// Raw input of the insurance plan step.
///
/// The multiplier and add-on switches always hold a legal value, so only the
/// coverage level and calculation method can be in error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsuranceForm {
    pub coverage_level: String,
    pub calculation_method: String,
    pub multiplier: Multiplier,
    pub add_ons: AddOns,
}

fn add_on_for(field: Field) -> Option<AddOn> {
    match field {
        Field::AccidentalDeath => Some(AddOn::AccidentalDeath),
        Field::CriticalIllness => Some(AddOn::CriticalIllness),
        Field::WaiverOfPremium => Some(AddOn::WaiverOfPremium),
        _ => None,
    }
}

impl StepForm for InsuranceForm {
    type Record = InsuranceSelection;

    const STEP: StepId = StepId::InsurancePlan;

    fn apply(
        &mut self,
        field: Field,
        value: &str,
    ) {
        match field {
            Field::CoverageLevel => self.coverage_level = value.to_string(),
            Field::CalculationMethod => self.calculation_method = value.to_string(),
            Field::Multiplier => match Multiplier::parse(value.trim()) {
                Some(multiplier) => self.multiplier = multiplier,
                None => warn!(value, "ignoring unknown multiplier"),
            },
            _ => {
                let Some(add_on) = add_on_for(field) else {
                    return;
                };
                match read_switch(value) {
                    Some(enabled) => self.add_ons.set(add_on, enabled),
                    None => warn!(%field, value, "ignoring unreadable switch position"),
                }
            }
        }
    }

    fn entries(&self) -> Vec<(Field, String)> {
        let mut entries = vec![
            (Field::CoverageLevel, self.coverage_level.clone()),
            (Field::CalculationMethod, self.calculation_method.clone()),
            (Field::Multiplier, self.multiplier.as_str().to_string()),
        ];
        for field in [
            Field::AccidentalDeath,
            Field::CriticalIllness,
            Field::WaiverOfPremium,
        ] {
            let enabled = add_on_for(field).is_some_and(|a| self.add_ons.is_enabled(a));
            entries.push((field, enabled.to_string()));
        }
        entries
    }

    fn to_record(&self) -> Result<InsuranceSelection, FieldErrors> {
        let mut errors = FieldErrors::new();

        let coverage_level = CoverageLevel::parse(self.coverage_level.trim());
        if coverage_level.is_none() {
            errors.insert(Field::CoverageLevel, "Please select a coverage level");
        }

        let calculation_method = CalculationMethod::parse(self.calculation_method.trim());
        if calculation_method.is_none() {
            errors.insert(
                Field::CalculationMethod,
                "Please select a calculation method",
            );
        }

        match (coverage_level, calculation_method) {
            (Some(coverage_level), Some(calculation_method)) => Ok(InsuranceSelection {
                coverage_level,
                calculation_method,
                multiplier: self.multiplier,
                add_ons: self.add_ons,
            }),
            _ => Err(errors),
        }
    }

    fn from_record(record: &InsuranceSelection) -> Self {
        Self {
            coverage_level: record.coverage_level.as_str().to_string(),
            calculation_method: record.calculation_method.as_str().to_string(),
            multiplier: record.multiplier,
            add_ons: record.add_ons,
        }
    }
}
