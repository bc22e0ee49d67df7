//! Shift-and-XOR multiplication with inline overflow folding

use tracing::{debug, instrument};

use super::{FieldError, GaloisField};
use crate::trace::MultiplyStep;

/// Product of two field elements plus the per-iteration trace.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Product {
    /// Canonical product.
    pub value: u128,
    /// One entry per consumed bit of `b`.
    pub steps: Vec<MultiplyStep>,
}

impl GaloisField {
    /// Multiply canonical elements `a` and `b`.
    ///
    /// Both operands must have degree < n; otherwise this returns
    /// [`FieldError::NonCanonicalOperand`]. Route raw inputs through
    /// [`GaloisField::reduce`] first.
    pub fn multiply(&self, a: u128, b: u128) -> Result<Product, FieldError> {
        let a = self.check_canonical(a)?;
        let b = self.check_canonical(b)?;
        Ok(self.multiply_canonical(a, b))
    }

    /// Russian-peasant loop. `a` stays canonical between iterations, so a
    /// single XOR with the modulus undoes any overflow into bit n.
    #[instrument(level = "debug", skip_all, fields(n = self.degree, a = a, b = b))]
    pub(crate) fn multiply_canonical(&self, mut a: u128, mut b: u128) -> Product {
        let overflow_bit = 1u128 << self.degree;
        let mut result = 0u128;
        let mut steps = Vec::new();

        while b != 0 {
            let bit = b & 1 == 1;
            let result_before = result;
            if bit {
                result ^= a;
            }

            let b_before = b;
            b >>= 1;

            let a_before = a;
            let a_shifted = a << 1;
            let overflow = a_shifted & overflow_bit != 0;
            a = if overflow {
                a_shifted ^ self.modulus
            } else {
                a_shifted
            };

            debug!(
                iteration = steps.len() + 1,
                bit,
                result,
                b,
                a,
                overflow,
                "multiply iteration"
            );
            steps.push(MultiplyStep {
                iteration: steps.len() + 1,
                bit,
                result_before,
                result_after: result,
                b_before,
                b_after: b,
                a_before,
                a_shifted,
                overflow,
                a_after: a,
            });
        }

        Product {
            value: result,
            steps,
        }
    }
}
