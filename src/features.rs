//! Feature vectors and normalization
//!
//! A feature vector is `[month, demand, competition, ingredient_cost]`. Each
//! feature is divided by a fixed maximum so all four land roughly in `[0, 1]`.

/// Number of input features
pub const NUM_FEATURES: usize = 4;

/// Raw feature vector: `[month, demand, competition, ingredient_cost]`
pub type FeatureVector = [f64; NUM_FEATURES];

/// Per-feature normalization maxima, index-aligned with [`FeatureVector`]
pub const FEATURE_MAX: FeatureVector = [12.0, 100.0, 5.0, 10.0];

/// Feature names in vector order, used for logging and reports
pub const FEATURE_NAMES: [&str; NUM_FEATURES] = ["month", "demand", "competition", "ingredient_cost"];

/// Divide each feature by its fixed maximum.
///
/// No range checks: out-of-range or negative values are scaled like any other,
/// so a month of 24 normalizes to 2.0.
#[inline]
pub fn normalize(features: &FeatureVector) -> FeatureVector {
    let mut normalized = [0.0; NUM_FEATURES];
    for (i, (&value, &max)) in features.iter().zip(FEATURE_MAX.iter()).enumerate() {
        normalized[i] = value / max;
    }
    normalized
}
