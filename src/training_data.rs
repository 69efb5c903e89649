use ndarray::{Array1, Array2};

use crate::features::{FeatureVector, NUM_FEATURES};

/// One labelled market observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingExample {
    pub features: FeatureVector,
    pub price: f64,
}

/// Fixed training set, swept in this order on every iteration.
pub const TRAINING_SET: [TrainingExample; 5] = [
    // January, high demand, medium competition, high ingredient cost
    TrainingExample { features: [1.0, 80.0, 3.0, 8.0], price: 15.0 },
    // June, very high demand, low competition, medium ingredient cost
    TrainingExample { features: [6.0, 95.0, 2.0, 6.0], price: 18.0 },
    // December, medium demand, high competition, high ingredient cost
    TrainingExample { features: [12.0, 70.0, 4.0, 9.0], price: 14.0 },
    // March, low demand, medium competition, low ingredient cost
    TrainingExample { features: [3.0, 60.0, 3.0, 5.0], price: 12.0 },
    // July, high demand, very low competition, medium-high ingredient cost
    TrainingExample { features: [7.0, 90.0, 1.0, 7.0], price: 22.0 },
];

/// Training features as a `(5, 4)` matrix, one example per row
pub fn training_features() -> Array2<f64> {
    Array2::from_shape_fn((TRAINING_SET.len(), NUM_FEATURES), |(row, col)| {
        TRAINING_SET[row].features[col]
    })
}

/// Training target prices, row-aligned with [`training_features`]
pub fn training_targets() -> Array1<f64> {
    TRAINING_SET.iter().map(|example| example.price).collect()
}
