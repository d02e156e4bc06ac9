use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Two-thumb age slider. Both bounds stay inside
/// [`AgeRange::FLOOR`, `AgeRange::CEILING`] and never cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAgeRange")]
pub struct AgeRange {
    min: u8,
    max: u8,
}

#[derive(Deserialize)]
struct RawAgeRange {
    min: u8,
    max: u8,
}

impl From<RawAgeRange> for AgeRange {
    fn from(raw: RawAgeRange) -> Self {
        AgeRange::new(raw.min, raw.max)
    }
}

impl AgeRange {
    pub const FLOOR: u8 = 20;
    pub const CEILING: u8 = 65;

    /// Builds a range, clamping both bounds into the slider track and
    /// swapping them if they arrive reversed.
    pub fn new(
        min: u8,
        max: u8,
    ) -> Self {
        let lo = min.clamp(Self::FLOOR, Self::CEILING);
        let hi = max.clamp(Self::FLOOR, Self::CEILING);
        if lo <= hi {
            Self { min: lo, max: hi }
        } else {
            Self { min: hi, max: lo }
        }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// Moves the lower thumb; it stops at the upper thumb.
    pub fn set_min(
        &mut self,
        value: u8,
    ) {
        self.min = value.clamp(Self::FLOOR, self.max);
    }

    /// Moves the upper thumb; it stops at the lower thumb.
    pub fn set_max(
        &mut self,
        value: u8,
    ) {
        self.max = value.clamp(self.min, Self::CEILING);
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { min: 25, max: 45 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Share of the workforce at the low and high ends of the salary range.
/// The two percentages always sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBands {
    pub min_percentage: Decimal,
    pub max_percentage: Decimal,
}

/// Workforce profile as committed by the second step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub coverage_count: u32,
    pub age_range: AgeRange,
    pub salary_range: SalaryRange,
    pub salary_bands: SalaryBands,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_age_range_is_25_to_45() {
        let range = AgeRange::default();

        assert_eq!((range.min(), range.max()), (25, 45));
    }

    #[test]
    fn new_clamps_into_slider_track() {
        let range = AgeRange::new(5, 90);

        assert_eq!((range.min(), range.max()), (20, 65));
    }

    #[test]
    fn new_swaps_reversed_bounds() {
        let range = AgeRange::new(50, 30);

        assert_eq!((range.min(), range.max()), (30, 50));
    }

    #[test]
    fn set_min_cannot_pass_upper_thumb() {
        let mut range = AgeRange::default();

        range.set_min(60);

        assert_eq!((range.min(), range.max()), (45, 45));
    }

    #[test]
    fn set_max_cannot_pass_lower_thumb_or_ceiling() {
        let mut range = AgeRange::default();

        range.set_max(10);
        assert_eq!(range.max(), 25);

        range.set_max(99);
        assert_eq!(range.max(), 65);
    }
}
