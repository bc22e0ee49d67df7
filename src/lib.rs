//! # Traceable GF(2^n) Multiplication
//!
//! This library multiplies elements of a binary extension field GF(2^n)
//! with the classical shift-and-XOR algorithm and records every bit-level
//! step along the way.
//!
//! ## Core Algorithm
//!
//! 1. **Codec**: polynomial text such as `x^3+x+1` ⇄ bit pattern `0b1011`
//! 2. **Reducer**: fold a raw value below degree n by XOR with the aligned modulus
//! 3. **Multiplier**: Russian-peasant loop, one XOR with the modulus per overflow
//!
//! Every step is kept as a structured record so callers can inspect, render,
//! or fingerprint the computation.
//!
//! ## Usage Example
//!
//! ```
//! use gfmul::evaluate;
//!
//! let evaluation = evaluate(3, 2, "x^3+x+1", 3)?;
//! assert_eq!(evaluation.product, 6);
//! assert_eq!(evaluation.trace.multiply.len(), 2);
//! # Ok::<(), gfmul::EngineError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod codec; // Polynomial ⇄ text encoding
pub mod field; // Field validation, reduction and multiplication
pub mod trace; // Step records and rendering
/// Python bindings for exposing the engine to external runtimes.
#[cfg(feature = "python-bindings")]
pub mod python_bindings;

// Re-exports for convenience
pub use codec::{decode, encode, CodecError};
pub use field::{degree, multiply, reduce, FieldError, GaloisField, Product, Reduction, MAX_DEGREE};
pub use trace::{EvaluationTrace, MultiplyStep, ReductionStep, RenderOptions};

use thiserror::Error;
use tracing::{info, instrument};

/// Errors that abort an [`evaluate`] call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Modulus text could not be decoded.
    #[error("invalid modulus polynomial: {0}")]
    Codec(#[from] CodecError),

    /// Modulus and degree do not describe a supported field.
    #[error("invalid field: {0}")]
    Field(#[from] FieldError),
}

/// Result of one multiplication request.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct Evaluation {
    /// Field the product was computed in.
    pub field: GaloisField,
    /// First input as supplied.
    pub a: u128,
    /// Second input as supplied.
    pub b: u128,
    /// `a` reduced into the field.
    pub a_reduced: u128,
    /// `b` reduced into the field.
    pub b_reduced: u128,
    /// Canonical product of the reduced inputs.
    pub product: u128,
    /// Reduce a, reduce b, multiply, in that order.
    pub trace: EvaluationTrace,
}

impl Evaluation {
    /// One-line statement of the result.
    pub fn summary(&self) -> String {
        format!(
            "{} times {} in the finite field of 2 to the power of {} over {}: {} -> polynomial form = {}",
            self.a,
            self.b,
            self.field.degree(),
            encode(self.field.modulus()),
            self.product,
            encode(self.product)
        )
    }
}

/// Multiply raw integers `a` and `b` in the field defined by `modulus_text`
/// and degree `n`.
///
/// Decoding or field errors abort before any arithmetic runs, so a failed
/// call never yields a partial trace.
pub fn evaluate(a: u128, b: u128, modulus_text: &str, n: u32) -> Result<Evaluation, EngineError> {
    let field = GaloisField::from_polynomial(modulus_text, n)?;
    Ok(evaluate_in(&field, a, b))
}

/// Multiply raw integers `a` and `b` in an already validated field.
///
/// Both inputs are reduced first, which establishes the multiplier's
/// canonical-operand precondition.
#[instrument(skip_all, fields(field = %field, a = a, b = b))]
pub fn evaluate_in(field: &GaloisField, a: u128, b: u128) -> Evaluation {
    let reduced_a = field.reduce(a);
    let reduced_b = field.reduce(b);
    let product = field.multiply_canonical(reduced_a.value, reduced_b.value);

    info!(
        a_reduced = reduced_a.value,
        b_reduced = reduced_b.value,
        product = product.value,
        "evaluation complete"
    );

    Evaluation {
        field: *field,
        a,
        b,
        a_reduced: reduced_a.value,
        b_reduced: reduced_b.value,
        product: product.value,
        trace: EvaluationTrace {
            reduce_a: reduced_a.steps,
            reduce_b: reduced_b.steps,
            multiply: product.steps,
        },
    }
}
