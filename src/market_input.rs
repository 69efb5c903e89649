//! Form input for a price query
//!
//! The model itself accepts any numbers. This layer is what sits in front of
//! it: every field required, integers where the form offers whole numbers,
//! and each value held to its documented range.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{PricingError, Result};
use crate::features::FeatureVector;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name for a 1-based month, `None` outside `1..=12`
pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|index| MONTH_NAMES.get(index as usize))
        .copied()
}

/// Local competition density, as offered in the form's selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitionLevel {
    VeryLow = 1,
    Low = 2,
    Medium = 3,
    High = 4,
    VeryHigh = 5,
}

impl CompetitionLevel {
    pub const ALL: [CompetitionLevel; 5] = [
        CompetitionLevel::VeryLow,
        CompetitionLevel::Low,
        CompetitionLevel::Medium,
        CompetitionLevel::High,
        CompetitionLevel::VeryHigh,
    ];

    pub fn from_level(level: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.level() == level)
    }

    pub fn level(self) -> u32 {
        self as u32
    }

    pub fn description(self) -> &'static str {
        match self {
            CompetitionLevel::VeryLow => "Very Low",
            CompetitionLevel::Low => "Low",
            CompetitionLevel::Medium => "Medium",
            CompetitionLevel::High => "High",
            CompetitionLevel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.level(), self.description())
    }
}

/// Validated market conditions for one price query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MarketConditionsFields")]
pub struct MarketConditions {
    /// 1 = January .. 12 = December
    month: u32,
    /// Expected demand in percent
    demand: u32,
    /// 1 (very low) .. 5 (very high)
    competition: u32,
    /// Ingredient cost in dollars
    ingredient_cost: f64,
}

/// Unchecked wire form; deserializing goes through [`MarketConditions::new`]
#[derive(Deserialize)]
struct MarketConditionsFields {
    month: u32,
    demand: u32,
    competition: u32,
    ingredient_cost: f64,
}

impl TryFrom<MarketConditionsFields> for MarketConditions {
    type Error = PricingError;

    fn try_from(fields: MarketConditionsFields) -> Result<Self> {
        Self::new(fields.month, fields.demand, fields.competition, fields.ingredient_cost)
    }
}

impl MarketConditions {
    /// Build from already-typed values, checking ranges.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidInput` naming the first out-of-range field
    pub fn new(month: u32, demand: u32, competition: u32, ingredient_cost: f64) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(invalid(format!("month must be between 1 and 12, got {}", month)));
        }
        if demand > 100 {
            return Err(invalid(format!("demand must be between 0 and 100, got {}", demand)));
        }
        if CompetitionLevel::from_level(competition).is_none() {
            return Err(invalid(format!(
                "competition must be between 1 and 5, got {}",
                competition
            )));
        }
        if !ingredient_cost.is_finite() || ingredient_cost < 0.0 {
            return Err(invalid(format!(
                "ingredient cost must be a non-negative amount, got {}",
                ingredient_cost
            )));
        }

        Ok(Self {
            month,
            demand,
            competition,
            ingredient_cost,
        })
    }

    /// Parse raw form fields.
    ///
    /// Month, demand and competition are whole-number fields: plain digits
    /// with an optional decimal part, which is truncated toward zero. Signs
    /// and exponents are rejected. Ingredient cost keeps its decimals.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidInput` for a missing, non-numeric or
    /// out-of-range field
    pub fn parse(month: &str, demand: &str, competition: &str, ingredient_cost: &str) -> Result<Self> {
        let month = parse_whole("month", month)?;
        let demand = parse_whole("demand", demand)?;
        let competition = parse_whole("competition", competition)?;
        let ingredient_cost = parse_decimal("ingredient cost", ingredient_cost)?;

        Self::new(month, demand, competition, ingredient_cost)
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn demand(&self) -> u32 {
        self.demand
    }

    pub fn competition(&self) -> u32 {
        self.competition
    }

    pub fn ingredient_cost(&self) -> f64 {
        self.ingredient_cost
    }

    pub fn to_features(&self) -> FeatureVector {
        [
            f64::from(self.month),
            f64::from(self.demand),
            f64::from(self.competition),
            self.ingredient_cost,
        ]
    }

    pub fn competition_level(&self) -> CompetitionLevel {
        // `new` only admits levels 1..=5
        CompetitionLevel::from_level(self.competition).unwrap_or(CompetitionLevel::Medium)
    }
}

impl fmt::Display for MarketConditions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, demand {}%, competition {}, ingredients ${:.2}",
            month_name(self.month).unwrap_or("?"),
            self.demand,
            self.competition_level(),
            self.ingredient_cost
        )
    }
}

fn invalid(message: String) -> PricingError {
    PricingError::InvalidInput { message }
}

fn parse_decimal(field: &str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid(format!("{} is required", field)));
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| invalid(format!("{} must be a number, got '{}'", field, trimmed)))?;
    if !value.is_finite() {
        return Err(invalid(format!("{} must be a finite number, got '{}'", field, trimmed)));
    }
    Ok(value)
}

fn parse_whole(field: &str, raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    if !trimmed.is_empty()
        && (whole.is_empty()
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit()))
    {
        return Err(invalid(format!("{} must be a whole number, got '{}'", field, trimmed)));
    }
    let value = parse_decimal(field, raw)?.trunc();
    if value < 0.0 || value > f64::from(u32::MAX) {
        return Err(invalid(format!("{} is out of range, got '{}'", field, raw.trim())));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_truncates() {
        assert_eq!(parse_whole("demand", "80.9").unwrap(), 80);
        assert_eq!(parse_whole("demand", " 42 ").unwrap(), 42);
    }

    #[test]
    fn test_parse_whole_rejects_negative() {
        assert!(parse_whole("demand", "-3").is_err());
    }

    #[test]
    fn test_parse_whole_rejects_sign_and_exponent() {
        assert!(parse_whole("month", "1e1").is_err());
        assert!(parse_whole("month", "+5").is_err());
        assert!(parse_whole("month", ".5").is_err());
        assert!(parse_whole("month", "5.2.1").is_err());
        assert_eq!(parse_whole("month", "5.").unwrap(), 5);
    }

    #[test]
    fn test_parse_decimal_rejects_non_finite() {
        assert!(parse_decimal("ingredient cost", "inf").is_err());
        assert!(parse_decimal("ingredient cost", "NaN").is_err());
    }
}
