//! Reduction of arbitrary bit patterns into canonical field elements

use tracing::{debug, instrument};

use super::{degree, GaloisField};
use crate::trace::ReductionStep;

/// Canonical value plus the folds that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Reduction {
    /// Reduced value, degree < n.
    pub value: u128,
    /// One entry per fold; empty when the input was already canonical.
    pub steps: Vec<ReductionStep>,
}

impl GaloisField {
    /// Fold high-order terms of `value` down until its degree is below n.
    ///
    /// Each fold XORs in the modulus aligned to the leading term, which
    /// clears that term, so the degree strictly decreases every iteration.
    #[instrument(level = "debug", skip_all, fields(n = self.degree, value = value))]
    pub fn reduce(&self, value: u128) -> Reduction {
        let mut current = value;
        let mut steps = Vec::new();

        while let Some(deg) = degree(current).filter(|&d| d >= self.degree) {
            let shift = deg - self.degree;
            let shifted_modulus = self.modulus << shift;
            let result = current ^ shifted_modulus;

            debug!(value = current, degree = deg, shift, shifted_modulus, result, "reduction fold");
            steps.push(ReductionStep {
                value: current,
                degree: deg,
                shift,
                shifted_modulus,
                result,
            });
            current = result;
        }

        Reduction {
            value: current,
            steps,
        }
    }
}
