//! Monthly premium estimate for a group life quote.
//!
//! The estimate is a flat base amount chosen by coverage level plus a
//! per-employee charge for each selected add-on:
//!
//! | Component            | Amount                      |
//! |----------------------|-----------------------------|
//! | Base, basic          | 1000                        |
//! | Base, comprehensive  | 2000                        |
//! | Accidental death     | 0.15 per covered employee   |
//! | Critical illness     | 0.30 per covered employee   |
//! | Waiver of premium    | 0.10 per covered employee   |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::premium;
//! use quote_core::models::{AddOn, AddOns, CoverageLevel};
//!
//! let add_ons: AddOns = [AddOn::AccidentalDeath].into_iter().collect();
//!
//! assert_eq!(premium(CoverageLevel::Basic, &add_ons, 100), dec!(1015));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::{AddOn, AddOns, CoverageLevel};

/// Errors raised when premium rates are configured with impossible values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PremiumRatesError {
    /// A base amount was negative.
    #[error("base premium for {level} coverage must be non-negative, got {amount}")]
    NegativeBase {
        level: &'static str,
        amount: Decimal,
    },

    /// An add-on rate was negative.
    #[error("per-employee rate for {add_on} must be non-negative, got {rate}")]
    NegativeAddOnRate {
        add_on: &'static str,
        rate: Decimal,
    },
}

/// Constants used by the premium estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PremiumRates {
    /// Flat amount for basic coverage.
    pub basic_base: Decimal,

    /// Flat amount for comprehensive coverage.
    pub comprehensive_base: Decimal,

    /// Per-employee charge for accidental death cover.
    pub accidental_death: Decimal,

    /// Per-employee charge for critical illness cover.
    pub critical_illness: Decimal,

    /// Per-employee charge for waiver of premium.
    pub waiver_of_premium: Decimal,
}

impl Default for PremiumRates {
    fn default() -> Self {
        Self {
            basic_base: Decimal::new(1000, 0),
            comprehensive_base: Decimal::new(2000, 0),
            accidental_death: Decimal::new(15, 2),
            critical_illness: Decimal::new(30, 2),
            waiver_of_premium: Decimal::new(10, 2),
        }
    }
}

impl PremiumRates {
    /// Rejects negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PremiumRatesError`] naming the first negative value found.
    pub fn validate(&self) -> Result<(), PremiumRatesError> {
        for (level, amount) in [
            (CoverageLevel::Basic, self.basic_base),
            (CoverageLevel::Comprehensive, self.comprehensive_base),
        ] {
            if amount < Decimal::ZERO {
                return Err(PremiumRatesError::NegativeBase {
                    level: level.as_str(),
                    amount,
                });
            }
        }

        for add_on in AddOn::ALL {
            let rate = self.add_on_rate(add_on);
            if rate < Decimal::ZERO {
                return Err(PremiumRatesError::NegativeAddOnRate {
                    add_on: add_on.as_str(),
                    rate,
                });
            }
        }

        Ok(())
    }

    pub fn base(
        &self,
        level: CoverageLevel,
    ) -> Decimal {
        match level {
            CoverageLevel::Basic => self.basic_base,
            CoverageLevel::Comprehensive => self.comprehensive_base,
        }
    }

    pub fn add_on_rate(
        &self,
        add_on: AddOn,
    ) -> Decimal {
        match add_on {
            AddOn::AccidentalDeath => self.accidental_death,
            AddOn::CriticalIllness => self.critical_illness,
            AddOn::WaiverOfPremium => self.waiver_of_premium,
        }
    }
}

/// The components of one premium estimate. Values are unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    /// Flat amount for the chosen coverage level.
    pub base: Decimal,

    /// Sum of the per-employee rates of every selected add-on.
    pub per_employee_rate: Decimal,

    /// Number of employees the add-on rate is charged for.
    pub employee_count: u32,

    /// `per_employee_rate × employee_count`.
    pub add_on_total: Decimal,

    /// `base + add_on_total`.
    pub total: Decimal,
}

/// Calculator holding a validated set of [`PremiumRates`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PremiumCalculator {
    rates: PremiumRates,
}

impl PremiumCalculator {
    /// Creates a calculator after checking the rates.
    ///
    /// # Errors
    ///
    /// Returns [`PremiumRatesError`] if any rate is negative.
    pub fn new(rates: PremiumRates) -> Result<Self, PremiumRatesError> {
        rates.validate()?;
        Ok(Self { rates })
    }

    pub fn rates(&self) -> &PremiumRates {
        &self.rates
    }

    /// Computes the estimate for a coverage level, add-on selection and
    /// head count.
    pub fn calculate(
        &self,
        level: CoverageLevel,
        add_ons: &AddOns,
        employee_count: u32,
    ) -> PremiumBreakdown {
        let base = self.rates.base(level);
        let per_employee_rate: Decimal = add_ons
            .enabled()
            .map(|add_on| self.rates.add_on_rate(add_on))
            .sum();
        let add_on_total = per_employee_rate * Decimal::from(employee_count);
        let total = base + add_on_total;

        debug!(
            level = level.as_str(),
            employee_count,
            %per_employee_rate,
            %total,
            "calculated premium"
        );

        PremiumBreakdown {
            base,
            per_employee_rate,
            employee_count,
            add_on_total,
            total,
        }
    }
}

/// Premium with the standard rates: base plus per-employee add-on charges.
pub fn premium(
    level: CoverageLevel,
    add_ons: &AddOns,
    employee_count: u32,
) -> Decimal {
    PremiumCalculator::default()
        .calculate(level, add_ons, employee_count)
        .total
}
