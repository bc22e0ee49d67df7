//! Polynomial codec
//!
//! Converts between the bit-pattern encoding of a GF(2) polynomial
//! (bit i set ⇔ coefficient of xⁱ is 1) and its symbolic form `x^3+x+1`.
//! Carries no arithmetic state; used for decoding moduli and rendering traces.

use std::num::IntErrorKind;

use bitvec::prelude::*;
use thiserror::Error;

use crate::field::MAX_DEGREE;

/// Literal used for the zero polynomial.
pub const ZERO_TERM: &str = "0";

/// Errors raised while decoding a polynomial string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Term is none of `1`, `x`, `x^<int>`.
    #[error("unrecognized term '{term}'")]
    MalformedTerm {
        /// Offending term (whitespace removed).
        term: String,
    },

    /// `x^` prefix followed by something other than a non-negative integer.
    #[error("invalid exponent in term '{term}'")]
    MalformedExponent {
        /// Offending term (whitespace removed).
        term: String,
    },

    /// Exponent parses but does not fit the 128-bit element encoding.
    #[error("exponent {exponent} in term '{term}' exceeds maximum degree {max}", max = MAX_DEGREE)]
    ExponentOutOfRange {
        /// Offending term (whitespace removed).
        term: String,
        /// Exponent digits as written; may exceed any machine integer.
        exponent: String,
    },
}

/// Render `value` as a sum of power terms in descending degree.
///
/// `0` renders as the literal zero term.
pub fn encode(value: u128) -> String {
    if value == 0 {
        return ZERO_TERM.to_string();
    }

    let bytes = value.to_le_bytes();
    let mut terms: Vec<String> = bytes
        .view_bits::<Lsb0>()
        .iter_ones()
        .map(term_for_power)
        .collect();
    terms.reverse();
    terms.join("+")
}

fn term_for_power(power: usize) -> String {
    match power {
        0 => "1".to_string(),
        1 => "x".to_string(),
        p => format!("x^{p}"),
    }
}

/// Parse a symbolic polynomial into its bit-pattern encoding.
///
/// Whitespace is ignored and terms may appear in any order. Repeated terms
/// are OR-combined rather than cancelled, so `x+x` decodes to `x`. The
/// literal `0` contributes no bits, which keeps `decode(encode(0)) == 0`.
pub fn decode(text: &str) -> Result<u128, CodecError> {
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

    let mut value = 0u128;
    for term in compact.split('+') {
        if let Some(exp) = exponent_of(term)? {
            value |= 1u128 << exp;
        }
    }
    Ok(value)
}

/// Exponent contributed by a single term; `None` for the zero literal.
fn exponent_of(term: &str) -> Result<Option<u32>, CodecError> {
    let exponent = match term {
        ZERO_TERM => return Ok(None),
        "1" => 0,
        "x" => 1,
        _ => {
            let digits = term.strip_prefix("x^").ok_or_else(|| CodecError::MalformedTerm {
                term: term.to_string(),
            })?;
            match digits.parse::<u32>() {
                Ok(exponent) => exponent,
                Err(err) if *err.kind() == IntErrorKind::PosOverflow => {
                    return Err(out_of_range(term, digits));
                }
                Err(_) => {
                    return Err(CodecError::MalformedExponent {
                        term: term.to_string(),
                    })
                }
            }
        }
    };

    if exponent > MAX_DEGREE {
        return Err(out_of_range(term, &exponent.to_string()));
    }
    Ok(Some(exponent))
}

fn out_of_range(term: &str, exponent: &str) -> CodecError {
    CodecError::ExponentOutOfRange {
        term: term.to_string(),
        exponent: exponent.to_string(),
    }
}
