//! Rubber grades and quality tiers.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parsing grade or tier notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GradeParseError {
    /// Unrecognised rubber grade notation.
    #[error("unknown rubber grade: {0}")]
    UnknownGrade(String),

    /// Unrecognised quality tier.
    #[error("unknown quality tier: {0}")]
    UnknownTier(String),
}

/// Market grade of natural rubber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RubberGrade {
    /// Ribbed smoked sheet, premium grade.
    #[serde(rename = "RSS-1")]
    Rss1,

    /// Ribbed smoked sheet, standard grade.
    #[serde(rename = "RSS-3")]
    Rss3,

    /// Ribbed smoked sheet, commercial grade.
    #[serde(rename = "RSS-4")]
    Rss4,

    /// Fresh field latex.
    Latex,

    /// Coagulated cup lump.
    #[serde(rename = "Cup Lump")]
    CupLump,
}

impl RubberGrade {
    /// Every traded grade, in market-board order.
    pub const ALL: [Self; 5] = [Self::Rss1, Self::Rss3, Self::Rss4, Self::Latex, Self::CupLump];

    /// Market notation, e.g. `RSS-1`.
    #[must_use]
    pub const fn notation(self) -> &'static str {
        match self {
            Self::Rss1 => "RSS-1",
            Self::Rss3 => "RSS-3",
            Self::Rss4 => "RSS-4",
            Self::Latex => "Latex",
            Self::CupLump => "Cup Lump",
        }
    }

    /// Long description used on the market board.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rss1 => "Premium Grade - Ribbed Smoked Sheets",
            Self::Rss3 => "Standard Grade - Ribbed Smoked Sheets",
            Self::Rss4 => "Commercial Grade - Ribbed Smoked Sheets",
            Self::Latex => "Fresh Latex - Direct from Trees",
            Self::CupLump => "Cup Lump - Coagulated Rubber",
        }
    }

    /// Whether the grade trades as a liquid; moisture percentage is
    /// reported as 0 (not applicable) for these.
    #[must_use]
    pub const fn is_liquid(self) -> bool {
        matches!(self, Self::Latex)
    }
}

impl Display for RubberGrade {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.notation())
    }
}

impl FromStr for RubberGrade {
    type Err = GradeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .into_iter()
            .find(|grade| grade.notation().eq_ignore_ascii_case(s))
            .ok_or_else(|| GradeParseError::UnknownGrade(s.to_string()))
    }
}

/// Quality tier of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityTier {
    /// Top-tier, export-ready rubber.
    Premium,

    /// Everyday trading quality.
    Standard,

    /// Bulk industrial quality.
    Commercial,
}

impl QualityTier {
    /// Every tier, best first.
    pub const ALL: [Self; 3] = [Self::Premium, Self::Standard, Self::Commercial];

    /// Display name, e.g. `Premium`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Premium => "Premium",
            Self::Standard => "Standard",
            Self::Commercial => "Commercial",
        }
    }
}

impl Display for QualityTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityTier {
    type Err = GradeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| GradeParseError::UnknownTier(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn grade_parses_market_notation() -> TestResult {
        assert_eq!("RSS-1".parse::<RubberGrade>()?, RubberGrade::Rss1);
        assert_eq!("Cup Lump".parse::<RubberGrade>()?, RubberGrade::CupLump);
        assert_eq!("latex".parse::<RubberGrade>()?, RubberGrade::Latex);

        Ok(())
    }

    #[test]
    fn grade_rejects_unknown_notation() {
        let result = "RSS-2".parse::<RubberGrade>();

        assert!(matches!(result, Err(GradeParseError::UnknownGrade(notation)) if notation == "RSS-2"));
    }

    #[test]
    fn grade_serde_uses_market_notation() -> TestResult {
        let json = serde_json::to_string(&RubberGrade::Rss1)?;

        assert_eq!(json, "\"RSS-1\"");

        let back: RubberGrade = serde_json::from_str("\"Cup Lump\"")?;

        assert_eq!(back, RubberGrade::CupLump);

        Ok(())
    }

    #[test]
    fn only_latex_is_liquid() {
        assert!(RubberGrade::Latex.is_liquid());
        assert!(!RubberGrade::Rss1.is_liquid());
        assert!(!RubberGrade::CupLump.is_liquid());
    }

    #[test]
    fn tier_parses_case_insensitively() -> TestResult {
        assert_eq!("Premium".parse::<QualityTier>()?, QualityTier::Premium);
        assert_eq!("commercial".parse::<QualityTier>()?, QualityTier::Commercial);

        Ok(())
    }

    #[test]
    fn tier_rejects_unknown_value() {
        let result = "Deluxe".parse::<QualityTier>();

        assert!(matches!(result, Err(GradeParseError::UnknownTier(tier)) if tier == "Deluxe"));
    }
}
