mod company;
mod employee;
mod field;
mod insurance;
mod seed;
mod step;

pub use company::{CompanyRecord, Industry, Region};
pub use employee::{AgeRange, EmployeeRecord, SalaryBands, SalaryRange};
pub use field::{Field, ParseFieldError};
pub use insurance::{
    AddOn, AddOns, CalculationMethod, CoverageLevel, InsuranceSelection, Multiplier,
};
pub use seed::SeedProfile;
pub use step::{ParseStepError, StepId};
