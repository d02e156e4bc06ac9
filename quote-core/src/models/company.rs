use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Tech,
    Finance,
    Healthcare,
    Retail,
}

impl Industry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tech => "tech",
            Self::Finance => "finance",
            Self::Healthcare => "healthcare",
            Self::Retail => "retail",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tech" => Some(Self::Tech),
            "finance" => Some(Self::Finance),
            "healthcare" => Some(Self::Healthcare),
            "retail" => Some(Self::Retail),
            _ => None,
        }
    }

    pub fn to_long_str(&self) -> &'static str {
        match self {
            Self::Tech => "Technology",
            Self::Finance => "Finance",
            Self::Healthcare => "Healthcare",
            Self::Retail => "Retail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    North,
    Europe,
    Asia,
    Oceania,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::Europe => "europe",
            Self::Asia => "asia",
            Self::Oceania => "oceania",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "north" => Some(Self::North),
            "europe" => Some(Self::Europe),
            "asia" => Some(Self::Asia),
            "oceania" => Some(Self::Oceania),
            _ => None,
        }
    }

    pub fn to_long_str(&self) -> &'static str {
        match self {
            Self::North => "North America",
            Self::Europe => "Europe",
            Self::Asia => "Asia",
            Self::Oceania => "Oceania",
        }
    }
}

/// Company details as committed by the first step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    pub name: String,
    pub email: String,
    pub industry: Industry,
    pub region: Region,
    pub tax_id: String,
}
