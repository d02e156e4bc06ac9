use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::warn;

use super::numeric::{NumericInput, read_number, read_whole};
use super::{FieldErrors, StepForm};
use crate::models::{AgeRange, EmployeeRecord, Field, SalaryBands, SalaryRange, StepId};

const INVALID_AMOUNT: &str = "Please enter a valid amount";
const INVALID_PERCENTAGE: &str = "Enter a valid percentage (1-100)";

/// Raw input of the employee demographic step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub coverage: String,
    pub age_range: AgeRange,
    pub min_salary: String,
    pub max_salary: String,
    pub min_percentage: String,
    pub max_percentage: String,
}

impl EmployeeForm {
    fn coverage_count(&self) -> Result<u32, &'static str> {
        match read_number(&self.coverage) {
            NumericInput::Blank => Err("Please enter the number of employees needing coverage"),
            NumericInput::Value(v) if v > Decimal::ZERO && v.fract().is_zero() => {
                v.to_u32().ok_or("Please enter a valid number")
            }
            _ => Err("Please enter a valid number"),
        }
    }

    fn percentage(raw: &str) -> Result<Decimal, &'static str> {
        match read_number(raw) {
            NumericInput::Blank => Err("Required"),
            NumericInput::Value(v) if v > Decimal::ZERO && v <= Decimal::ONE_HUNDRED => Ok(v),
            _ => Err(INVALID_PERCENTAGE),
        }
    }
}

impl StepForm for EmployeeForm {
    type Record = EmployeeRecord;

    const STEP: StepId = StepId::EmployeeDemographic;

    fn apply(
        &mut self,
        field: Field,
        value: &str,
    ) {
        match field {
            Field::Coverage => self.coverage = value.to_string(),
            Field::MinSalary => self.min_salary = value.to_string(),
            Field::MaxSalary => self.max_salary = value.to_string(),
            Field::MinPercentage => self.min_percentage = value.to_string(),
            Field::MaxPercentage => self.max_percentage = value.to_string(),
            Field::MinAge | Field::MaxAge => match read_whole::<u8>(value) {
                Some(age) if field == Field::MinAge => self.age_range.set_min(age),
                Some(age) => self.age_range.set_max(age),
                None => warn!(%field, value, "ignoring non-numeric age"),
            },
            _ => {}
        }
    }

    fn entries(&self) -> Vec<(Field, String)> {
        vec![
            (Field::Coverage, self.coverage.clone()),
            (Field::MinAge, self.age_range.min().to_string()),
            (Field::MaxAge, self.age_range.max().to_string()),
            (Field::MinSalary, self.min_salary.clone()),
            (Field::MinPercentage, self.min_percentage.clone()),
            (Field::MaxSalary, self.max_salary.clone()),
            (Field::MaxPercentage, self.max_percentage.clone()),
        ]
    }

    fn to_record(&self) -> Result<EmployeeRecord, FieldErrors> {
        let mut errors = FieldErrors::new();

        let coverage = self
            .coverage_count()
            .map_err(|message| errors.insert(Field::Coverage, message))
            .ok();

        let min_salary = match read_number(&self.min_salary) {
            NumericInput::Blank => {
                errors.insert(Field::MinSalary, "Please enter the minimum salary");
                None
            }
            NumericInput::Value(v) if v >= Decimal::ZERO => Some(v),
            _ => {
                errors.insert(Field::MinSalary, INVALID_AMOUNT);
                None
            }
        };

        let max_salary = match read_number(&self.max_salary) {
            NumericInput::Blank => {
                errors.insert(Field::MaxSalary, "Please enter the maximum salary");
                None
            }
            NumericInput::Value(v) if v > Decimal::ZERO => match min_salary {
                Some(min) if v <= min => {
                    errors.insert(
                        Field::MaxSalary,
                        "Maximum salary must be higher than minimum salary",
                    );
                    None
                }
                _ => Some(v),
            },
            _ => {
                errors.insert(Field::MaxSalary, INVALID_AMOUNT);
                None
            }
        };

        let min_percentage = Self::percentage(&self.min_percentage)
            .map_err(|message| errors.insert(Field::MinPercentage, message))
            .ok();
        let max_percentage = Self::percentage(&self.max_percentage)
            .map_err(|message| errors.insert(Field::MaxPercentage, message))
            .ok();

        // The sum rule only applies once both inputs are individually valid.
        if let (Some(lo), Some(hi)) = (min_percentage, max_percentage) {
            if lo + hi != Decimal::ONE_HUNDRED {
                errors.insert(Field::MaxPercentage, "Percentages must sum to 100%");
            }
        }

        match (coverage, min_salary, max_salary, min_percentage, max_percentage) {
            (Some(coverage_count), Some(min), Some(max), Some(lo), Some(hi))
                if errors.is_empty() =>
            {
                Ok(EmployeeRecord {
                    coverage_count,
                    age_range: self.age_range,
                    salary_range: SalaryRange { min, max },
                    salary_bands: SalaryBands {
                        min_percentage: lo,
                        max_percentage: hi,
                    },
                })
            }
            _ => Err(errors),
        }
    }

    fn from_record(record: &EmployeeRecord) -> Self {
        Self {
            coverage: record.coverage_count.to_string(),
            age_range: record.age_range,
            min_salary: record.salary_range.min.to_string(),
            max_salary: record.salary_range.max.to_string(),
            min_percentage: record.salary_bands.min_percentage.to_string(),
            max_percentage: record.salary_bands.max_percentage.to_string(),
        }
    }
}
