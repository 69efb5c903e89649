pub mod errors;
pub mod features;
pub mod market_input;
pub mod model_config;
pub mod price_model;
pub mod price_range;
pub mod report;
pub mod training_data;
// Re-export key structs for easier access
pub use errors::{PricingError, Result};
pub use features::{FEATURE_MAX, FEATURE_NAMES, FeatureVector, NUM_FEATURES, normalize};
pub use market_input::{CompetitionLevel, MarketConditions, month_name};
pub use model_config::ModelConfig;
pub use price_model::{
    MAX_PRICE, MIN_PRICE, ModelState, NUM_WEIGHTS, PRICE_SCALE, PricePredictionModel, Weights,
};
pub use price_range::{PriceRange, format_price};
pub use report::PricingReport;
pub use training_data::{TRAINING_SET, TrainingExample, training_features, training_targets};
