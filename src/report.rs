use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::market_input::MarketConditions;
use crate::price_model::{ModelState, PricePredictionModel};
use crate::price_range::PriceRange;

/// Everything shown for one price query: inputs, recommendation, range and
/// how well the model currently fits its training data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingReport {
    pub conditions: MarketConditions,
    pub price: f64,
    pub range: PriceRange,
    pub model_state: ModelState,
    pub epochs_trained: usize,
    pub training_mse: f64,
}

impl PricingReport {
    pub fn new(model: &PricePredictionModel, conditions: MarketConditions) -> Self {
        let price = model.predict(&conditions.to_features());
        Self {
            conditions,
            price,
            range: PriceRange::from_prediction(price),
            model_state: model.state(),
            epochs_trained: model.epochs_trained(),
            training_mse: model.mean_squared_error(),
        }
    }

    /// # Errors
    /// Returns `PricingError::Serialization` if JSON encoding fails
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
