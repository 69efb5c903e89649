//! Price prediction model
//!
//! A linear model over normalized market features, fitted with
//! sequential-sweep gradient descent: every iteration walks the fixed training
//! set in order and applies each example's update immediately, rather than
//! accumulating one gradient per sweep.

use ndarray::{Array1, Array2};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng, rng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::errors::{PricingError, Result};
use crate::features::{FeatureVector, NUM_FEATURES, normalize};
use crate::model_config::ModelConfig;
use crate::training_data::{TRAINING_SET, TrainingExample, training_features, training_targets};

/// Bias plus one weight per feature
pub const NUM_WEIGHTS: usize = NUM_FEATURES + 1;

/// Converts the raw linear output to dollars
pub const PRICE_SCALE: f64 = 20.0;

/// Lowest price the model will recommend
pub const MIN_PRICE: f64 = 5.0;

/// Highest price the model will recommend
pub const MAX_PRICE: f64 = 50.0;

/// `[bias, month, demand, competition, ingredient_cost]`
pub type Weights = [f64; NUM_WEIGHTS];

/// Training progress of a model instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelState {
    /// Random weights, `train()` not yet called
    Constructed,
    /// At least one `train()` call has completed
    Trained,
}

/// Linear price recommender trained on the fixed market table
#[derive(Debug, Clone)]
pub struct PricePredictionModel {
    weights: Weights,
    learning_rate: f64,
    iterations: usize,
    epochs_trained: usize,
    training_runs: usize,
}

impl Default for PricePredictionModel {
    fn default() -> Self {
        Self::from_config(&ModelConfig::default())
    }
}

impl PricePredictionModel {
    /// Create an untrained model with weights drawn uniformly from `[0, 1)`.
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        Self::with_rng(learning_rate, iterations, &mut rng())
    }

    /// Same as [`PricePredictionModel::new`] but reproducible.
    pub fn with_seed(learning_rate: f64, iterations: usize, seed: u64) -> Self {
        Self::with_rng(learning_rate, iterations, &mut StdRng::seed_from_u64(seed))
    }

    /// Draw the initial weights from a caller-supplied generator.
    pub fn with_rng<R: Rng + ?Sized>(learning_rate: f64, iterations: usize, rng: &mut R) -> Self {
        let weights: Weights = std::array::from_fn(|_| rng.random::<f64>());
        Self::from_weights(learning_rate, iterations, weights)
    }

    /// Start from known weights instead of random ones.
    pub fn from_weights(learning_rate: f64, iterations: usize, weights: Weights) -> Self {
        Self {
            weights,
            learning_rate,
            iterations,
            epochs_trained: 0,
            training_runs: 0,
        }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(config.learning_rate, config.iterations, seed),
            None => Self::new(config.learning_rate, config.iterations),
        }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    pub fn learning_rate(&self) -> f64 {
        self.learning_rate
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Total sweeps over the training set across all `train()` calls
    pub fn epochs_trained(&self) -> usize {
        self.epochs_trained
    }

    /// Number of completed `train()` calls
    pub fn training_runs(&self) -> usize {
        self.training_runs
    }

    pub fn state(&self) -> ModelState {
        if self.training_runs == 0 {
            ModelState::Constructed
        } else {
            ModelState::Trained
        }
    }

    /// Recommended price for `[month, demand, competition, ingredient_cost]`,
    /// always within `[MIN_PRICE, MAX_PRICE]`.
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        let price = linear_price(&self.weights, features);
        debug!(?features, price, "Predicted price");
        price
    }

    /// Predict every row of a `(n, 4)` feature matrix.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidInput` if the matrix does not have
    /// exactly four columns
    pub fn predict_batch(&self, features: &Array2<f64>) -> Result<Array1<f64>> {
        if features.ncols() != NUM_FEATURES {
            return Err(PricingError::InvalidInput {
                message: format!(
                    "Expected {} feature columns, got {}",
                    NUM_FEATURES,
                    features.ncols()
                ),
            });
        }

        Ok(row_prices(&self.weights, features))
    }

    /// Mean squared error of the clamped predictions over the training set.
    pub fn mean_squared_error(&self) -> f64 {
        let predictions = row_prices(&self.weights, &training_features());
        let diffs = predictions - training_targets();
        diffs.mapv(|d| d * d).mean().unwrap_or(0.0)
    }

    /// Run `iterations` more sweeps of gradient descent over the training set.
    ///
    /// Continues from the current weights; repeated calls refine the fit and
    /// never re-initialize.
    #[instrument(skip(self), fields(iterations = self.iterations, learning_rate = self.learning_rate))]
    pub fn train(&mut self) {
        let mse_before = self.mean_squared_error();

        for _ in 0..self.iterations {
            for example in &TRAINING_SET {
                apply_example(&mut self.weights, self.learning_rate, example);
            }
            self.epochs_trained += 1;
        }
        self.training_runs += 1;

        let mse_after = self.mean_squared_error();

        if self.weights.iter().any(|w| !w.is_finite()) {
            warn!(
                weights = ?self.weights,
                "Training produced non-finite weights; learning rate is too large"
            );
        }

        info!(
            training_runs = self.training_runs,
            epochs_trained = self.epochs_trained,
            mse_before = mse_before,
            mse_after = mse_after,
            "Training completed"
        );
    }
}

/// `max(MIN_PRICE, min(MAX_PRICE, (w0 + w·normalized) * PRICE_SCALE))`
#[inline]
fn linear_price(weights: &Weights, features: &FeatureVector) -> f64 {
    let normalized = normalize(features);
    let mut raw = weights[0];
    for (weight, x) in weights[1..].iter().zip(normalized.iter()) {
        raw += weight * x;
    }
    (raw * PRICE_SCALE).min(MAX_PRICE).max(MIN_PRICE)
}

fn row_prices(weights: &Weights, features: &Array2<f64>) -> Array1<f64> {
    features
        .rows()
        .into_iter()
        .map(|row| {
            let vector: FeatureVector = std::array::from_fn(|i| row[i]);
            linear_price(weights, &vector)
        })
        .collect()
}

/// One gradient step on a single example. The error is taken on the clamped
/// price and applied to the raw weights.
#[inline]
fn apply_example(weights: &mut Weights, learning_rate: f64, example: &TrainingExample) {
    let error = linear_price(weights, &example.features) - example.price;
    let normalized = normalize(&example.features);

    weights[0] -= learning_rate * error;
    for (weight, x) in weights[1..].iter_mut().zip(normalized.iter()) {
        *weight -= learning_rate * error * x;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_weights_floor_to_min_price() {
        let weights = [0.0; NUM_WEIGHTS];
        assert_eq!(linear_price(&weights, &[6.0, 95.0, 2.0, 6.0]), MIN_PRICE);
    }

    #[test]
    fn test_unclamped_price_is_scaled_linear_output() {
        // raw = 0.5 + 1.0 * (6 / 12) = 1.0
        let weights = [0.5, 1.0, 0.0, 0.0, 0.0];
        let price = linear_price(&weights, &[6.0, 95.0, 2.0, 6.0]);
        assert!((price - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_apply_example_moves_toward_target() {
        let example = TRAINING_SET[1];
        let mut weights = [0.5; NUM_WEIGHTS];
        let before = (linear_price(&weights, &example.features) - example.price).abs();
        apply_example(&mut weights, 0.01, &example);
        let after = (linear_price(&weights, &example.features) - example.price).abs();
        assert!(after < before, "error should shrink: {} -> {}", before, after);
    }

    #[test]
    fn test_apply_example_updates_bias_by_scaled_error() {
        // all-zero weights predict MIN_PRICE, so error = 5 - 15 = -10
        let example = TRAINING_SET[0];
        let mut weights = [0.0; NUM_WEIGHTS];
        apply_example(&mut weights, 0.01, &example);
        assert!((weights[0] - 0.1).abs() < 1e-12);
        // demand weight: 0.01 * 10 * (80 / 100)
        assert!((weights[2] - 0.08).abs() < 1e-12);
    }
}
