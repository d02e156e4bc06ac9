use std::sync::LazyLock;

use regex::Regex;

use super::{FieldErrors, StepForm};
use crate::models::{CompanyRecord, Field, Industry, Region, StepId};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern compiles")
});

/// Raw input of the company details step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyForm {
    pub name: String,
    pub email: String,
    pub industry: String,
    pub region: String,
    pub tax_id: String,
}

impl StepForm for CompanyForm {
    type Record = CompanyRecord;

    const STEP: StepId = StepId::CompanyDetails;

    fn apply(
        &mut self,
        field: Field,
        value: &str,
    ) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Industry => &mut self.industry,
            Field::Region => &mut self.region,
            Field::TaxId => &mut self.tax_id,
            _ => return,
        };
        *slot = value.to_string();
    }

    fn entries(&self) -> Vec<(Field, String)> {
        vec![
            (Field::Name, self.name.clone()),
            (Field::Email, self.email.clone()),
            (Field::Industry, self.industry.clone()),
            (Field::Region, self.region.clone()),
            (Field::TaxId, self.tax_id.clone()),
        ]
    }

    fn to_record(&self) -> Result<CompanyRecord, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.insert(Field::Name, "Company name is required");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.insert(Field::Email, "Email is required");
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.insert(Field::Email, "Invalid email address");
        }

        let industry = Industry::parse(self.industry.trim());
        if industry.is_none() {
            errors.insert(Field::Industry, "Please select an industry");
        }

        let region = Region::parse(self.region.trim());
        if region.is_none() {
            errors.insert(Field::Region, "Please select a region");
        }

        let tax_id = self.tax_id.trim();
        if tax_id.is_empty() {
            errors.insert(Field::TaxId, "Tax ID is required");
        }

        match (industry, region) {
            (Some(industry), Some(region)) if errors.is_empty() => Ok(CompanyRecord {
                name: name.to_string(),
                email: email.to_string(),
                industry,
                region,
                tax_id: tax_id.to_string(),
            }),
            _ => Err(errors),
        }
    }

    fn from_record(record: &CompanyRecord) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            industry: record.industry.as_str().to_string(),
            region: record.region.as_str().to_string(),
            tax_id: record.tax_id.clone(),
        }
    }
}
