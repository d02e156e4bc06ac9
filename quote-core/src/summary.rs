//! Read-only recap of a finished quote.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculations::common::{format_currency, format_whole_currency, round_half_up};
use crate::calculations::{PremiumBreakdown, PremiumCalculator};
use crate::models::{CompanyRecord, EmployeeRecord, InsuranceSelection, StepId};

const UNDERWRITING_NOTE: &str = "This premium is based on the information provided and is subject to final underwriting approval.";

/// One label/value line of the recap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Recap of one step. `edit_target` is the step an "edit" request reopens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarySection {
    pub title: &'static str,
    pub edit_target: StepId,
    pub rows: Vec<SummaryRow>,
}

fn row(
    label: &'static str,
    value: impl Into<String>,
) -> SummaryRow {
    SummaryRow {
        label,
        value: value.into(),
    }
}

/// Everything collected by the wizard plus the premium it implies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteSummary {
    pub company: CompanyRecord,
    pub employee: EmployeeRecord,
    pub selection: InsuranceSelection,
    pub premium: PremiumBreakdown,
}

impl QuoteSummary {
    /// Prices the selection for the covered head count and bundles the
    /// result with the three records.
    pub fn assemble(
        company: CompanyRecord,
        employee: EmployeeRecord,
        selection: InsuranceSelection,
        calculator: &PremiumCalculator,
    ) -> Self {
        let premium = calculator.calculate(
            selection.coverage_level,
            &selection.add_ons,
            employee.coverage_count,
        );
        Self {
            company,
            employee,
            selection,
            premium,
        }
    }

    /// Monthly premium rounded to cents.
    pub fn monthly_premium(&self) -> Decimal {
        round_half_up(self.premium.total)
    }

    /// Where a confirmed quote would be delivered.
    pub fn recipient(&self) -> &str {
        &self.company.email
    }

    pub fn sections(&self) -> Vec<SummarySection> {
        let company = &self.company;
        let employee = &self.employee;
        let selection = &self.selection;

        let add_ons: Vec<_> = selection
            .add_ons
            .enabled()
            .map(|a| a.to_long_str())
            .collect();
        let add_ons = if add_ons.is_empty() {
            "None".to_string()
        } else {
            add_ons.join(", ")
        };

        vec![
            SummarySection {
                title: "Company Details",
                edit_target: StepId::CompanyDetails,
                rows: vec![
                    row("Company Name", company.name.as_str()),
                    row("Email", company.email.as_str()),
                    row("Industry", company.industry.to_long_str()),
                    row("Region", company.region.to_long_str()),
                ],
            },
            SummarySection {
                title: "Employee Demographics",
                edit_target: StepId::EmployeeDemographic,
                rows: vec![
                    row("Total Employees", employee.coverage_count.to_string()),
                    row(
                        "Age Range",
                        format!(
                            "{} - {} years",
                            employee.age_range.min(),
                            employee.age_range.max()
                        ),
                    ),
                    row(
                        "Salary Range",
                        format!(
                            "{} - {} per year",
                            format_whole_currency(employee.salary_range.min),
                            format_whole_currency(employee.salary_range.max)
                        ),
                    ),
                    row(
                        "Salary Bands",
                        format!(
                            "{}% / {}%",
                            employee.salary_bands.min_percentage.normalize(),
                            employee.salary_bands.max_percentage.normalize()
                        ),
                    ),
                ],
            },
            SummarySection {
                title: "Insurance Plan",
                edit_target: StepId::InsurancePlan,
                rows: vec![
                    row("Coverage Level", selection.coverage_level.to_long_str()),
                    row(
                        "Calculation Method",
                        selection.calculation_method.to_long_str(),
                    ),
                    row("Salary Multiplier", selection.multiplier.as_str()),
                    row("Add-ons", add_ons),
                ],
            },
        ]
    }
}

impl fmt::Display for QuoteSummary {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Insurance Quotation for {}", self.company.name)?;
        for section in self.sections() {
            writeln!(f)?;
            writeln!(f, "{} [edit: {}]", section.title, section.edit_target)?;
            for r in &section.rows {
                writeln!(f, "  {:<20}{}", r.label, r.value)?;
            }
        }
        writeln!(f)?;
        writeln!(
            f,
            "Monthly Premium:    {}",
            format_currency(self.premium.total)
        )?;
        write!(f, "{UNDERWRITING_NOTE}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{
        AddOn, CalculationMethod, CoverageLevel, Multiplier, SeedProfile,
    };

    fn summary(add_ons: &[AddOn]) -> QuoteSummary {
        let seed = SeedProfile::default();
        let selection = InsuranceSelection {
            coverage_level: CoverageLevel::Basic,
            calculation_method: CalculationMethod::SalaryLinked,
            multiplier: Multiplier::X2,
            add_ons: add_ons.iter().copied().collect(),
        };
        QuoteSummary::assemble(
            seed.company,
            seed.employee,
            selection,
            &PremiumCalculator::default(),
        )
    }

    fn value(
        section: &SummarySection,
        label: &str,
    ) -> String {
        section
            .rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.clone())
            .unwrap_or_default()
    }

    #[test]
    fn assemble_prices_the_covered_head_count() {
        let summary = summary(&[AddOn::CriticalIllness]);

        // 1000 + 0.30 × 25
        assert_eq!(summary.premium.total, dec!(1007.50));
        assert_eq!(summary.monthly_premium(), dec!(1007.50));
    }

    #[test]
    fn sections_cover_each_step_in_order() {
        let targets: Vec<_> = summary(&[])
            .sections()
            .iter()
            .map(|s| s.edit_target)
            .collect();

        assert_eq!(targets, StepId::ALL.to_vec());
    }

    #[test]
    fn company_section_uses_long_labels() {
        let sections = summary(&[]).sections();

        assert_eq!(value(&sections[0], "Industry"), "Technology");
        assert_eq!(value(&sections[0], "Region"), "North America");
    }

    #[test]
    fn employee_section_formats_ranges() {
        let sections = summary(&[]).sections();

        assert_eq!(value(&sections[1], "Age Range"), "25 - 45 years");
        assert_eq!(
            value(&sections[1], "Salary Range"),
            "$50,000 - $120,000 per year"
        );
        assert_eq!(value(&sections[1], "Salary Bands"), "50% / 50%");
    }

    #[test]
    fn add_ons_row_lists_enabled_riders() {
        let none = summary(&[]).sections();
        let two = summary(&[AddOn::AccidentalDeath, AddOn::WaiverOfPremium]).sections();

        assert_eq!(value(&none[2], "Add-ons"), "None");
        assert_eq!(
            value(&two[2], "Add-ons"),
            "Accidental Death (AD&D), Waiver of Premium"
        );
    }

    #[test]
    fn display_ends_with_rounded_premium_and_note() {
        let text = summary(&[AddOn::AccidentalDeath]).to_string();

        assert!(text.starts_with("Insurance Quotation for Acme Corp"));
        assert!(text.contains("Monthly Premium:    $1,003.75"));
        assert!(text.ends_with(UNDERWRITING_NOTE));
    }
}
