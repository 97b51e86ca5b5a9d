//! Probability distributions and information measures

use crate::io::error::{ValueWarning, Validated};

/// Check a distribution for entries that cannot take part in an entropy sum
///
/// Negative and non-finite entries are dropped and reported; the remaining
/// entries keep their order.
pub fn validate_probabilities(probabilities: &[f64]) -> Validated<Vec<f64>> {
    let mut value = Vec::with_capacity(probabilities.len());
    let mut warnings = Vec::new();

    for (index, &p) in probabilities.iter().enumerate() {
        if p.is_finite() && p >= 0.0 {
            value.push(p);
        } else {
            warnings.push(ValueWarning::InvalidProbability { index, value: p });
        }
    }

    Validated { value, warnings }
}

/// Shannon entropy in bits: `|-Σ p·log2(p)|`
///
/// Zero probabilities contribute nothing. Invalid entries are skipped with a
/// warning rather than poisoning the sum.
pub fn shannon_entropy(probabilities: &[f64]) -> f64 {
    let valid = validate_probabilities(probabilities).log("shannon_entropy");

    let sum: f64 = valid
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.log2())
        .sum();

    (-sum).abs()
}

/// Turn raw counts into fractions of their total
///
/// An all-zero count vector yields all-zero fractions.
pub fn normalize_counts<const N: usize>(counts: [usize; N]) -> [f64; N] {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return [0.0; N];
    }
    counts.map(|count| count as f64 / total as f64)
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}
