use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Visual variant of the donation screen.
///
/// Variants only differ in presentation and in the quick-select amounts
/// offered; the form logic is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    #[default]
    Standard,
    Hero,
}

impl FormVariant {
    pub fn presets(&self) -> &'static [u32] {
        match self {
            Self::Standard => &[100, 500, 1000, 2100, 5100],
            Self::Hero => &[100, 500, 1000, 5000, 10000],
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Self::Standard => "Donate Now",
            Self::Hero => "Make a Donation",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Hero => "hero",
        }
    }
}

impl FromStr for FormVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "hero" => Ok(Self::Hero),
            other => Err(format!("unknown form variant '{other}'")),
        }
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
