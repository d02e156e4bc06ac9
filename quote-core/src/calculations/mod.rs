//! Premium calculation and money formatting.
//!
//! Amounts are carried as unrounded [`rust_decimal::Decimal`] values and only
//! rounded to cents when presented.

pub mod common;
pub mod premium;

pub use premium::{
    PremiumBreakdown, PremiumCalculator, PremiumRates, PremiumRatesError, premium,
};
