use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{PricingError, Result};

/// Largest config file accepted by [`ModelConfig::from_json_file`]
pub const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

/// Learning rates above this still train but tend to oscillate
const LARGE_LEARNING_RATE: f64 = 0.1;

/// Hyperparameters for [`crate::PricePredictionModel`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Step size applied to each per-example error
    pub learning_rate: f64,
    /// Sweeps over the training set per `train()` call
    pub iterations: usize,
    /// Seed for weight initialization; `None` draws from the thread-local generator
    pub seed: Option<u64>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            iterations: 1000,
            seed: None,
        }
    }
}

impl ModelConfig {
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
            seed: None,
        }
    }

    pub fn with_learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject hyperparameters that can never train.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidConfig` for a non-finite or non-positive
    /// learning rate, or zero iterations
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(PricingError::InvalidConfig {
                message: format!(
                    "learning_rate must be finite and positive, got {}",
                    self.learning_rate
                ),
            });
        }

        if self.iterations == 0 {
            return Err(PricingError::InvalidConfig {
                message: "iterations must be at least 1".to_string(),
            });
        }

        if self.learning_rate > LARGE_LEARNING_RATE {
            tracing::warn!(
                learning_rate = self.learning_rate,
                "Learning rate is unusually large; training may not converge"
            );
        }

        Ok(())
    }

    /// Load and validate a config from a JSON file. Missing fields take their
    /// default values.
    ///
    /// # Errors
    /// Returns `PricingError` if the file is too large, unreadable, malformed
    /// or fails [`ModelConfig::validate`]
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let metadata = fs::metadata(path)?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(PricingError::InvalidConfig {
                message: format!(
                    "Config file size {} exceeds maximum allowed size {}",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
            });
        }

        let raw = fs::read_to_string(path)?;
        let config: ModelConfig = serde_json::from_str(&raw)?;
        config.validate()?;

        tracing::info!(
            path = %path.display(),
            learning_rate = config.learning_rate,
            iterations = config.iterations,
            seed = ?config.seed,
            "Loaded model config"
        );

        Ok(config)
    }
}
