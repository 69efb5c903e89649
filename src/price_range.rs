use std::fmt;

use serde::{Deserialize, Serialize};

/// Multiplier for the low end of the suggested range
pub const CONSERVATIVE_FACTOR: f64 = 0.9;

/// Multiplier for the high end of the suggested range
pub const AGGRESSIVE_FACTOR: f64 = 1.1;

/// Suggested pricing band around a model prediction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub conservative: f64,
    pub optimal: f64,
    pub aggressive: f64,
}

impl PriceRange {
    pub fn from_prediction(price: f64) -> Self {
        Self {
            conservative: price * CONSERVATIVE_FACTOR,
            optimal: price,
            aggressive: price * AGGRESSIVE_FACTOR,
        }
    }
}

/// Dollar amount with two decimals, e.g. `$18.00`
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Conservative: {}", format_price(self.conservative))?;
        writeln!(f, "Optimal:      {}", format_price(self.optimal))?;
        write!(f, "Aggressive:   {}", format_price(self.aggressive))
    }
}
