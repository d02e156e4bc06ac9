use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::StepId;

/// Returned when a wire name is not a field of the given step.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("step '{step}' has no field '{name}'")]
pub struct ParseFieldError {
    pub step: StepId,
    pub name: String,
}

/// Every input across the three steps. Declaration order is form order,
/// which is also the iteration order of error maps.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    // Company details
    Name,
    Email,
    Industry,
    Region,
    TaxId,

    // Employee demographic
    Coverage,
    MinAge,
    MaxAge,
    MinSalary,
    MinPercentage,
    MaxSalary,
    MaxPercentage,

    // Insurance plan
    CoverageLevel,
    CalculationMethod,
    Multiplier,
    AccidentalDeath,
    CriticalIllness,
    WaiverOfPremium,
}

impl Field {
    pub const ALL: [Field; 18] = [
        Field::Name,
        Field::Email,
        Field::Industry,
        Field::Region,
        Field::TaxId,
        Field::Coverage,
        Field::MinAge,
        Field::MaxAge,
        Field::MinSalary,
        Field::MinPercentage,
        Field::MaxSalary,
        Field::MaxPercentage,
        Field::CoverageLevel,
        Field::CalculationMethod,
        Field::Multiplier,
        Field::AccidentalDeath,
        Field::CriticalIllness,
        Field::WaiverOfPremium,
    ];

    pub fn step(&self) -> StepId {
        match self {
            Self::Name | Self::Email | Self::Industry | Self::Region | Self::TaxId => {
                StepId::CompanyDetails
            }
            Self::Coverage
            | Self::MinAge
            | Self::MaxAge
            | Self::MinSalary
            | Self::MinPercentage
            | Self::MaxSalary
            | Self::MaxPercentage => StepId::EmployeeDemographic,
            Self::CoverageLevel
            | Self::CalculationMethod
            | Self::Multiplier
            | Self::AccidentalDeath
            | Self::CriticalIllness
            | Self::WaiverOfPremium => StepId::InsurancePlan,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Industry => "industry",
            Self::Region => "region",
            Self::TaxId => "tax_id",
            Self::Coverage => "coverage",
            Self::MinAge => "min_age",
            Self::MaxAge => "max_age",
            Self::MinSalary => "min_salary",
            Self::MinPercentage => "min_percentage",
            Self::MaxSalary => "max_salary",
            Self::MaxPercentage => "max_percentage",
            Self::CoverageLevel => "coverage_level",
            Self::CalculationMethod => "calculation_method",
            Self::Multiplier => "multiplier",
            Self::AccidentalDeath => "accidental_death",
            Self::CriticalIllness => "critical_illness",
            Self::WaiverOfPremium => "waiver_of_premium",
        }
    }

    /// Resolves a wire name within one step.
    pub fn parse(
        step: StepId,
        name: &str,
    ) -> Result<Self, ParseFieldError> {
        let name = name.trim();
        Self::for_step(step)
            .find(|f| f.as_str() == name)
            .ok_or_else(|| ParseFieldError {
                step,
                name: name.to_string(),
            })
    }

    pub fn to_long_str(&self) -> &'static str {
        match self {
            Self::Name => "Company name",
            Self::Email => "Email",
            Self::Industry => "Industry",
            Self::Region => "Region",
            Self::TaxId => "Tax ID",
            Self::Coverage => "Employees needing coverage",
            Self::MinAge => "Minimum age",
            Self::MaxAge => "Maximum age",
            Self::MinSalary => "Minimum salary",
            Self::MinPercentage => "Minimum salary band %",
            Self::MaxSalary => "Maximum salary",
            Self::MaxPercentage => "Maximum salary band %",
            Self::CoverageLevel => "Coverage level",
            Self::CalculationMethod => "Calculation method",
            Self::Multiplier => "Multiplier",
            Self::AccidentalDeath => "Accidental death",
            Self::CriticalIllness => "Critical illness",
            Self::WaiverOfPremium => "Waiver of premium",
        }
    }

    /// Fields picked from a closed set of options where picking one counts
    /// as touching it. The multiplier picker only stores its value.
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            Self::Industry | Self::Region | Self::CoverageLevel | Self::CalculationMethod
        )
    }

    /// Whether the field participates in touched tracking. Slider bounds
    /// and add-on switches can never hold an invalid value.
    pub fn is_tracked(&self) -> bool {
        !matches!(
            self,
            Self::MinAge
                | Self::MaxAge
                | Self::AccidentalDeath
                | Self::CriticalIllness
                | Self::WaiverOfPremium
        )
    }

    pub fn for_step(step: StepId) -> impl Iterator<Item = Field> {
        Self::ALL.into_iter().filter(move |f| f.step() == step)
    }
}

impl fmt::Display for Field {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
