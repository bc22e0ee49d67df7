//! Python bindings that expose the field engine via PyO3.
use pyo3::{exceptions::PyValueError, prelude::*, types::PyModule};

use crate::{codec, GaloisField};

fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Polynomial form of an integer, e.g. `11` → `"x^3+x+1"`.
#[pyfunction]
pub fn encode(value: u128) -> String {
    codec::encode(value)
}

/// Integer form of a polynomial string.
#[pyfunction]
pub fn decode(polynomial: &str) -> PyResult<u128> {
    codec::decode(polynomial).map_err(value_error)
}

/// Reduce `value` into GF(2^degree).
///
/// Returns:
///     `(reduced, [step lines])`.
#[pyfunction]
pub fn reduce(value: u128, polynomial: &str, degree: u32) -> PyResult<(u128, Vec<String>)> {
    let field = GaloisField::from_polynomial(polynomial, degree).map_err(value_error)?;
    let reduction = field.reduce(value);
    let lines = reduction.steps.iter().map(ToString::to_string).collect();
    Ok((reduction.value, lines))
}

/// Multiply `a` and `b` in GF(2^degree) defined by `polynomial`.
///
/// Returns:
///     `(product, a_reduced, b_reduced, [step lines])`.
#[pyfunction]
pub fn evaluate(
    a: u128,
    b: u128,
    polynomial: &str,
    degree: u32,
) -> PyResult<(u128, u128, u128, Vec<String>)> {
    let evaluation = crate::evaluate(a, b, polynomial, degree).map_err(value_error)?;
    let lines = evaluation.trace.steps().map(|step| step.to_string()).collect();
    Ok((
        evaluation.product,
        evaluation.a_reduced,
        evaluation.b_reduced,
        lines,
    ))
}

/// Create Python module.
#[pymodule]
pub fn gfmul_py(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(reduce, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    Ok(())
}
