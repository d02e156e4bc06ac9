use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    AgeRange, CompanyRecord, EmployeeRecord, Industry, Region, SalaryBands, SalaryRange,
};

/// Sample company and workforce used to open the plan step on its own,
/// e.g. for a demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedProfile {
    pub company: CompanyRecord,
    pub employee: EmployeeRecord,
}

impl Default for SeedProfile {
    fn default() -> Self {
        Self {
            company: CompanyRecord {
                name: "Acme Corp".to_string(),
                email: "contact@acmecorp.com".to_string(),
                industry: Industry::Tech,
                region: Region::North,
                tax_id: "00-0000000".to_string(),
            },
            employee: EmployeeRecord {
                coverage_count: 25,
                age_range: AgeRange::default(),
                salary_range: SalaryRange {
                    min: Decimal::new(50_000, 0),
                    max: Decimal::new(120_000, 0),
                },
                salary_bands: SalaryBands {
                    min_percentage: Decimal::new(50, 0),
                    max_percentage: Decimal::new(50, 0),
                },
            },
        }
    }
}
