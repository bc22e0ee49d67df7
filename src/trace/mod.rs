//! Structured step traces
//!
//! Each elementary operation performed by the reducer or multiplier is
//! recorded as a plain value. Traces are observational only: nothing in the
//! engine reads them back, they exist for rendering and for assertions.

mod render;

pub use render::{render_evaluation, render_product, render_reduction, RenderOptions};

use std::fmt;

use crate::codec::encode;

/// One fold of the reducer: `result = value ^ shifted_modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct ReductionStep {
    /// Value before the fold.
    pub value: u128,
    /// Degree of `value` (always ≥ n).
    pub degree: u32,
    /// Left shift applied to the modulus to align leading terms.
    pub shift: u32,
    /// `modulus << shift`.
    pub shifted_modulus: u128,
    /// Value after the XOR.
    pub result: u128,
}

impl fmt::Display for ReductionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reduce deg {}: {} ({:b}) ^ {} ({:b}) [shift {}] -> {} ({:b})",
            self.degree,
            encode(self.value),
            self.value,
            encode(self.shifted_modulus),
            self.shifted_modulus,
            self.shift,
            encode(self.result),
            self.result
        )
    }
}

/// One iteration of the shift-and-XOR multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct MultiplyStep {
    /// Iteration number, starting at 1.
    pub iteration: usize,
    /// Low bit of `b` consumed this iteration.
    pub bit: bool,
    /// Accumulator before the optional XOR.
    pub result_before: u128,
    /// Accumulator after the optional XOR.
    pub result_after: u128,
    /// `b` before the right shift.
    pub b_before: u128,
    /// `b` after the right shift.
    pub b_after: u128,
    /// `a` before the left shift.
    pub a_before: u128,
    /// `a << 1`, before any overflow fold.
    pub a_shifted: u128,
    /// Whether bit n of `a_shifted` was set and the modulus was folded in.
    pub overflow: bool,
    /// `a` carried into the next iteration.
    pub a_after: u128,
}

impl fmt::Display for MultiplyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "iteration {}: ", self.iteration)?;
        if self.bit {
            write!(
                f,
                "result {} ^ {} -> {} ({})",
                encode(self.result_before),
                encode(self.a_before),
                encode(self.result_after),
                self.result_after
            )?;
        } else {
            write!(f, "result unchanged {} ({})", encode(self.result_after), self.result_after)?;
        }
        write!(
            f,
            "; b {} -> {} ({}); a {} -> {}",
            encode(self.b_before),
            encode(self.b_after),
            self.b_after,
            encode(self.a_before),
            encode(self.a_shifted)
        )?;
        if self.overflow {
            write!(f, " overflow -> {} ({})", encode(self.a_after), self.a_after)
        } else {
            write!(f, " ({})", self.a_after)
        }
    }
}

/// Which input operand a reduction segment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub enum Operand {
    /// First factor.
    A,
    /// Second factor.
    B,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => f.write_str("a"),
            Operand::B => f.write_str("b"),
        }
    }
}

/// Borrowed view of a single step in an [`EvaluationTrace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceStep<'a> {
    /// Reduction fold applied to one of the inputs.
    Reduce(Operand, &'a ReductionStep),
    /// Multiplier iteration.
    Multiply(&'a MultiplyStep),
}

impl fmt::Display for TraceStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceStep::Reduce(operand, step) => write!(f, "[{operand}] {step}"),
            TraceStep::Multiply(step) => write!(f, "[mul] {step}"),
        }
    }
}

/// Combined trace of one `evaluate` call: reduce a, reduce b, multiply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(serde::Serialize))]
pub struct EvaluationTrace {
    /// Folds applied while canonicalizing `a`.
    pub reduce_a: Vec<ReductionStep>,
    /// Folds applied while canonicalizing `b`.
    pub reduce_b: Vec<ReductionStep>,
    /// Multiplier iterations.
    pub multiply: Vec<MultiplyStep>,
}

impl EvaluationTrace {
    /// All steps in execution order.
    pub fn steps(&self) -> impl Iterator<Item = TraceStep<'_>> {
        self.reduce_a
            .iter()
            .map(|step| TraceStep::Reduce(Operand::A, step))
            .chain(self.reduce_b.iter().map(|step| TraceStep::Reduce(Operand::B, step)))
            .chain(self.multiply.iter().map(TraceStep::Multiply))
    }

    /// Total number of recorded steps.
    pub fn len(&self) -> usize {
        self.reduce_a.len() + self.reduce_b.len() + self.multiply.len()
    }

    /// True when no step was recorded (both inputs canonical and `b == 0`).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// BLAKE3 digest over the rendered step lines.
    ///
    /// Identical inputs always yield the identical digest, so the value can be
    /// quoted alongside a result to identify the exact computation.
    pub fn fingerprint(&self) -> blake3::Hash {
        let mut hasher = blake3::Hasher::new();
        for step in self.steps() {
            hasher.update(step.to_string().as_bytes());
            hasher.update(b"\n");
        }
        hasher.finalize()
    }
}
