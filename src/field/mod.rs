//! Binary extension field GF(2^n)
//!
//! Elements are `u128` bit patterns over GF(2). A [`GaloisField`] pairs a
//! modulus with its degree `n` and is validated once on construction, so the
//! reduction and multiplication loops below never see an inconsistent field.

mod multiplier;
mod reducer;

pub use multiplier::Product;
pub use reducer::Reduction;

use std::fmt;

use thiserror::Error;

use crate::codec;

/// Largest supported field degree.
///
/// A canonical element shifted left once has degree ≤ n and must still fit
/// in 128 bits.
pub const MAX_DEGREE: u32 = 127;

/// Errors raised when a field or operand violates its contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Requested field degree cannot be represented.
    #[error("field degree {degree} exceeds maximum {max}", max = MAX_DEGREE)]
    DegreeOutOfRange {
        /// Requested degree.
        degree: u32,
    },

    /// Modulus polynomial does not have the declared degree.
    #[error("modulus degree {} does not match field degree {expected}", display_degree(.actual))]
    ModulusDegreeMismatch {
        /// Declared field degree `n`.
        expected: u32,
        /// Actual modulus degree (`None` for the zero polynomial).
        actual: Option<u32>,
    },

    /// Multiplication operand is not reduced below the field degree.
    #[error("operand {value} is not canonical for GF(2^{degree})")]
    NonCanonicalOperand {
        /// Offending operand.
        value: u128,
        /// Field degree `n`.
        degree: u32,
    },
}

fn display_degree(degree: &Option<u32>) -> String {
    degree.map_or_else(|| "-inf".to_string(), |d| d.to_string())
}

/// Degree of the polynomial encoded by `value` (`None` for zero).
pub fn degree(value: u128) -> Option<u32> {
    value.checked_ilog2()
}

/// Validated field GF(2^n) with its defining modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct GaloisField {
    modulus: u128,
    degree: u32,
}

impl GaloisField {
    /// Create the field defined by `modulus`, which must have degree exactly `degree`.
    ///
    /// The modulus is trusted to be irreducible; only its degree is checked.
    pub fn new(modulus: u128, degree: u32) -> Result<Self, FieldError> {
        if degree > MAX_DEGREE {
            return Err(FieldError::DegreeOutOfRange { degree });
        }
        let actual = self::degree(modulus);
        if actual != Some(degree) {
            return Err(FieldError::ModulusDegreeMismatch {
                expected: degree,
                actual,
            });
        }
        Ok(Self { modulus, degree })
    }

    /// Decode `polynomial` (e.g. `x^3+x+1`) and create the field.
    pub fn from_polynomial(polynomial: &str, degree: u32) -> Result<Self, crate::EngineError> {
        let modulus = codec::decode(polynomial)?;
        Ok(Self::new(modulus, degree)?)
    }

    /// Modulus bit pattern.
    pub fn modulus(&self) -> u128 {
        self.modulus
    }

    /// Field degree `n`.
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// Number of elements, 2^n.
    pub fn order(&self) -> u128 {
        1u128 << self.degree
    }

    /// Whether `value` already has degree < n.
    pub fn is_canonical(&self, value: u128) -> bool {
        degree(value).map_or(true, |d| d < self.degree)
    }

    /// Fail with [`FieldError::NonCanonicalOperand`] unless `value` is canonical.
    pub fn check_canonical(&self, value: u128) -> Result<u128, FieldError> {
        if self.is_canonical(value) {
            Ok(value)
        } else {
            Err(FieldError::NonCanonicalOperand {
                value,
                degree: self.degree,
            })
        }
    }
}

impl fmt::Display for GaloisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF(2^{}) mod {}", self.degree, codec::encode(self.modulus))
    }
}

/// Reduce `value` modulo `modulus` into GF(2^n).
pub fn reduce(value: u128, modulus: u128, n: u32) -> Result<Reduction, FieldError> {
    Ok(GaloisField::new(modulus, n)?.reduce(value))
}

/// Multiply canonical `a` and `b` in GF(2^n) defined by `modulus`.
pub fn multiply(a: u128, b: u128, modulus: u128, n: u32) -> Result<Product, FieldError> {
    GaloisField::new(modulus, n)?.multiply(a, b)
}
