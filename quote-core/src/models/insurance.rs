use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageLevel {
    Basic,
    Comprehensive,
}

impl CoverageLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Comprehensive => "comprehensive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(Self::Basic),
            "comprehensive" => Some(Self::Comprehensive),
            _ => None,
        }
    }

    pub fn to_long_str(&self) -> &'static str {
        match self {
            Self::Basic => "Basic Plan (1x salary death benefit)",
            Self::Comprehensive => "Comprehensive Plan (2x salary death benefit + extras)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationMethod {
    SalaryLinked,
    Fixed,
}

impl CalculationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SalaryLinked => "salary-linked",
            Self::Fixed => "fixed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "salary-linked" => Some(Self::SalaryLinked),
            "fixed" => Some(Self::Fixed),
            _ => None,
        }
    }

    pub fn to_long_str(&self) -> &'static str {
        match self {
            Self::SalaryLinked => "Salary-Linked",
            Self::Fixed => "Fixed Amount",
        }
    }
}

/// Death benefit as a multiple of salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Multiplier {
    X1,
    #[default]
    X2,
    X3,
}

impl Multiplier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::X1 => "x1",
            Self::X2 => "x2",
            Self::X3 => "x3",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "x1" => Some(Self::X1),
            "x2" => Some(Self::X2),
            "x3" => Some(Self::X3),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddOn {
    AccidentalDeath,
    CriticalIllness,
    WaiverOfPremium,
}

impl AddOn {
    pub const ALL: [AddOn; 3] = [
        AddOn::AccidentalDeath,
        AddOn::CriticalIllness,
        AddOn::WaiverOfPremium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccidentalDeath => "accidental-death",
            Self::CriticalIllness => "critical-illness",
            Self::WaiverOfPremium => "waiver-of-premium",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "accidental-death" => Some(Self::AccidentalDeath),
            "critical-illness" => Some(Self::CriticalIllness),
            "waiver-of-premium" => Some(Self::WaiverOfPremium),
            _ => None,
        }
    }

    pub fn to_long_str(&self) -> &'static str {
        match self {
            Self::AccidentalDeath => "Accidental Death (AD&D)",
            Self::CriticalIllness => "Critical Illness",
            Self::WaiverOfPremium => "Waiver of Premium",
        }
    }
}

/// Independently toggled optional riders. All off by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddOns {
    pub accidental_death: bool,
    pub critical_illness: bool,
    pub waiver_of_premium: bool,
}

impl AddOns {
    pub fn is_enabled(
        &self,
        add_on: AddOn,
    ) -> bool {
        match add_on {
            AddOn::AccidentalDeath => self.accidental_death,
            AddOn::CriticalIllness => self.critical_illness,
            AddOn::WaiverOfPremium => self.waiver_of_premium,
        }
    }

    pub fn set(
        &mut self,
        add_on: AddOn,
        enabled: bool,
    ) {
        match add_on {
            AddOn::AccidentalDeath => self.accidental_death = enabled,
            AddOn::CriticalIllness => self.critical_illness = enabled,
            AddOn::WaiverOfPremium => self.waiver_of_premium = enabled,
        }
    }

    /// Enabled add-ons in display order.
    pub fn enabled(&self) -> impl Iterator<Item = AddOn> + '_ {
        AddOn::ALL.into_iter().filter(|a| self.is_enabled(*a))
    }
}

impl FromIterator<AddOn> for AddOns {
    fn from_iter<I: IntoIterator<Item = AddOn>>(iter: I) -> Self {
        let mut add_ons = AddOns::default();
        for add_on in iter {
            add_ons.set(add_on, true);
        }
        add_ons
    }
}

/// Plan choices as committed by the final step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsuranceSelection {
    pub coverage_level: CoverageLevel,
    pub calculation_method: CalculationMethod,
    pub multiplier: Multiplier,
    pub add_ons: AddOns,
}
