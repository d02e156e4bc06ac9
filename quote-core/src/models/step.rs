use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a wire name does not match any [`StepId`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown step '{0}'")]
pub struct ParseStepError(pub String);

/// The three sections of the intake wizard, in canonical progression order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum StepId {
    CompanyDetails,
    EmployeeDemographic,
    InsurancePlan,
}

impl StepId {
    /// Every step, first to last.
    pub const ALL: [StepId; 3] = [
        StepId::CompanyDetails,
        StepId::EmployeeDemographic,
        StepId::InsurancePlan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CompanyDetails => "company-details",
            Self::EmployeeDemographic => "employee-demographic",
            Self::InsurancePlan => "insurance-plan",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ParseStepError> {
        match s.trim() {
            "company-details" => Ok(Self::CompanyDetails),
            "employee-demographic" => Ok(Self::EmployeeDemographic),
            "insurance-plan" => Ok(Self::InsurancePlan),
            other => Err(ParseStepError(other.to_string())),
        }
    }

    /// Heading shown in navigation and on the summary.
    pub fn to_long_str(&self) -> &'static str {
        match self {
            Self::CompanyDetails => "Company Details",
            Self::EmployeeDemographic => "Employee Demographic",
            Self::InsurancePlan => "Group Life Insurance Plan",
        }
    }

    /// Lower-case words used inside rejection notices.
    pub fn to_notice_str(&self) -> &'static str {
        match self {
            Self::CompanyDetails => "company details",
            Self::EmployeeDemographic => "employee demographic",
            Self::InsurancePlan => "insurance plan",
        }
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            Self::CompanyDetails => Some(Self::EmployeeDemographic),
            Self::EmployeeDemographic => Some(Self::InsurancePlan),
            Self::InsurancePlan => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::CompanyDetails => None,
            Self::EmployeeDemographic => Some(Self::CompanyDetails),
            Self::InsurancePlan => Some(Self::EmployeeDemographic),
        }
    }

    /// Steps strictly before this one in canonical order.
    pub fn predecessors(&self) -> impl Iterator<Item = StepId> + use<> {
        let me = *self;
        Self::ALL.into_iter().take_while(move |s| *s < me)
    }
}

impl fmt::Display for StepId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
