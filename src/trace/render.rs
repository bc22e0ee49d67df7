//! Text rendering of traces
//!
//! Produces the step-by-step report printed by the `gfmul` binary. Rendering
//! is kept apart from the engine; the engine only produces step records.

use crate::codec::encode;
use crate::field::GaloisField;
use crate::trace::{MultiplyStep, Operand, ReductionStep};
use crate::Evaluation;

const RULE: &str = "----------------------------------------";

/// Formatting switches for rendered reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Append the binary form next to every polynomial.
    pub show_binary: bool,
    /// Zero-pad width for multiplier operands (`None` → n + 1).
    pub binary_width: Option<usize>,
    /// Emit reduction and multiplication steps, not just the summary line.
    pub show_steps: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_binary: true,
            binary_width: None,
            show_steps: true,
        }
    }
}

impl RenderOptions {
    /// Toggle binary annotations.
    pub fn with_binary(mut self, enabled: bool) -> Self {
        self.show_binary = enabled;
        self
    }

    /// Fix the zero-pad width of multiplier operands.
    pub fn with_binary_width(mut self, width: usize) -> Self {
        self.binary_width = Some(width);
        self
    }

    /// Toggle step output.
    pub fn with_steps(mut self, enabled: bool) -> Self {
        self.show_steps = enabled;
        self
    }

    fn width_for(&self, field: &GaloisField) -> usize {
        self.binary_width.unwrap_or(field.degree() as usize + 1)
    }

    /// `"  (binary: 1011)"` or nothing.
    fn loose(&self, value: u128) -> String {
        if self.show_binary {
            format!("  (binary: {value:b})")
        } else {
            String::new()
        }
    }

    /// `" (binary: 0011)"` padded, or nothing.
    fn padded(&self, value: u128, width: usize) -> String {
        if self.show_binary {
            format!(" (binary: {value:0width$b})")
        } else {
            String::new()
        }
    }
}

/// Render the folds that canonicalized one value.
pub fn render_reduction(
    field: &GaloisField,
    steps: &[ReductionStep],
    options: &RenderOptions,
) -> String {
    let mut lines = vec!["--- Reduction Process Start ---".to_string()];
    for step in steps {
        lines.push(format!(
            "Current polynomial: {}{}",
            encode(step.value),
            options.loose(step.value)
        ));
        lines.push(format!(
            "  Degree = {}; needs degree < {}",
            step.degree,
            field.degree()
        ));
        lines.push(format!("  Shifting irreducible poly by {}:", step.shift));
        lines.push(format!(
            "    Irreducible poly shifted: {}{}",
            encode(step.shifted_modulus),
            options.loose(step.shifted_modulus)
        ));
        lines.push(format!(
            "  After XOR, new value: {}{}",
            encode(step.result),
            options.loose(step.result)
        ));
    }
    lines.push("--- Reduction Process End ---".to_string());
    lines.join("\n")
}

/// Render the multiplier iterations for canonical inputs `a` and `b`.
pub fn render_product(
    field: &GaloisField,
    a: u128,
    b: u128,
    steps: &[MultiplyStep],
    options: &RenderOptions,
) -> String {
    let width = options.width_for(field);
    let mut lines = vec![
        "=== Multiplication Process Start ===".to_string(),
        RULE.to_string(),
        format!("Initial a = {a} -> {}{}", encode(a), options.padded(a, width)),
        format!("Initial b = {b} -> {}{}", encode(b), options.padded(b, width)),
        format!("Initial result = 0 -> 0{}", options.padded(0, width)),
        RULE.to_string(),
    ];

    for step in steps {
        lines.push(format!("Iteration {}:", step.iteration));
        if step.bit {
            lines.push("  b LSB is 1: XOR result with a".to_string());
            lines.push(format!(
                "    {} XOR {} -> {}",
                encode(step.result_before),
                encode(step.a_before),
                encode(step.result_after)
            ));
        } else {
            lines.push("  b LSB is 0: result unchanged".to_string());
        }
        lines.push(format!(
            "  Shift b right: {} -> {}{}",
            encode(step.b_before),
            encode(step.b_after),
            options.padded(step.b_after, width)
        ));

        let mut shift_line = format!(
            "  Shift a left: {} -> {}{}",
            encode(step.a_before),
            encode(step.a_shifted),
            options.padded(step.a_shifted, width)
        );
        if step.overflow {
            shift_line.push_str(&format!(
                " -> overflow detected, reduced to {}{}",
                encode(step.a_after),
                options.padded(step.a_after, width)
            ));
        } else {
            shift_line.push_str(" (no overflow)");
        }
        lines.push(shift_line);
        lines.push(RULE.to_string());
    }

    lines.push("=== Multiplication Process End ===".to_string());
    lines.join("\n")
}

/// Render the full report of an evaluation, ending with the summary line.
pub fn render_evaluation(evaluation: &Evaluation, options: &RenderOptions) -> String {
    if !options.show_steps {
        return evaluation.summary();
    }

    let field = &evaluation.field;
    let segments = [
        (Operand::A, &evaluation.trace.reduce_a),
        (Operand::B, &evaluation.trace.reduce_b),
    ];

    let mut sections = Vec::new();
    for (operand, steps) in segments {
        sections.push(format!(
            ">>> Reducing input {operand}:\n{}",
            render_reduction(field, steps, options)
        ));
    }

    sections.push(format!(
        ">>> After Reduction:\n  a (original {}) reduced to {} -> {}\n  b (original {}) reduced to {} -> {}",
        evaluation.a,
        evaluation.a_reduced,
        encode(evaluation.a_reduced),
        evaluation.b,
        evaluation.b_reduced,
        encode(evaluation.b_reduced)
    ));

    sections.push(render_product(
        field,
        evaluation.a_reduced,
        evaluation.b_reduced,
        &evaluation.trace.multiply,
        options,
    ));
    sections.push(evaluation.summary());

    sections.join("\n\n")
}
