//! Worked examples for the codec, reducer, multiplier and `evaluate`

use gfmul::{
    decode, encode, evaluate, multiply, reduce, CodecError, EngineError, FieldError,
};
use test_case::test_case;

const GF8: u128 = 0b1011;
const AES: u128 = 0x11b;

#[test_case(0, "0" ; "zero")]
#[test_case(1, "1" ; "one")]
#[test_case(0b110, "x^2+x" ; "no constant term")]
#[test_case(0b1011, "x^3+x+1" ; "gf8 modulus")]
#[test_case(0x11b, "x^8+x^4+x^3+x+1" ; "aes modulus")]
fn encodes_descending(value: u128, expected: &str) {
    assert_eq!(encode(value), expected);
    assert_eq!(decode(expected).unwrap(), value);
}

#[test_case("x^a", CodecError::MalformedExponent { term: "x^a".into() } ; "non numeric exponent")]
#[test_case("x^", CodecError::MalformedExponent { term: "x^".into() } ; "missing exponent")]
#[test_case("y", CodecError::MalformedTerm { term: "y".into() } ; "unknown variable")]
#[test_case("2x", CodecError::MalformedTerm { term: "2x".into() } ; "coefficient")]
#[test_case("x^3+", CodecError::MalformedTerm { term: "".into() } ; "dangling plus")]
#[test_case("x^200", CodecError::ExponentOutOfRange { term: "x^200".into(), exponent: "200".into() } ; "exponent too large")]
#[test_case("x^4294967296", CodecError::ExponentOutOfRange { term: "x^4294967296".into(), exponent: "4294967296".into() } ; "exponent beyond u32")]
fn rejects_malformed_polynomials(text: &str, expected: CodecError) {
    assert_eq!(decode(text), Err(expected));
}

#[test_case(13, GF8, 3 => (6, 1) ; "single fold")]
#[test_case(5, GF8, 3 => (5, 0) ; "already canonical")]
#[test_case(1 << 6, GF8, 3 => (5, 3) ; "x^6")]
#[test_case(0x157, AES, 8 => (0x4c, 1) ; "aes overflow byte")]
fn reduces(value: u128, modulus: u128, n: u32) -> (u128, usize) {
    let reduction = reduce(value, modulus, n).unwrap();
    (reduction.value, reduction.steps.len())
}

#[test_case(3, 2, GF8, 3 => 6 ; "x plus one times x")]
#[test_case(5, 6, GF8, 3 => 3 ; "overflow during loop")]
#[test_case(7, 7, GF8, 3 => 3 ; "square")]
#[test_case(2, 4, GF8, 3 => 3 ; "x cubed")]
#[test_case(0x57, 0x83, AES, 8 => 0xc1 ; "fips 197 first example")]
#[test_case(0x57, 0x13, AES, 8 => 0xfe ; "fips 197 second example")]
fn multiplies(a: u128, b: u128, modulus: u128, n: u32) -> u128 {
    multiply(a, b, modulus, n).unwrap().value
}

#[test]
fn multiply_rejects_unreduced_operand() {
    assert_eq!(
        multiply(13, 2, GF8, 3),
        Err(FieldError::NonCanonicalOperand {
            value: 13,
            degree: 3
        })
    );
}

#[test_case(13, 2, "x^3+x+1", 3 => (7, 6, 2) ; "reduce a first")]
#[test_case(8, 9, "x + 1 + x^3", 3 => (6, 3, 2) ; "reduce both")]
#[test_case(0x57, 0x83, "x^8+x^4+x^3+x+1", 8 => (0xc1, 0x57, 0x83) ; "aes")]
#[test_case(13, 7, "1", 0 => (0, 0, 0) ; "degenerate constant modulus")]
fn evaluates(a: u128, b: u128, modulus: &str, n: u32) -> (u128, u128, u128) {
    let evaluation = evaluate(a, b, modulus, n).unwrap();
    (evaluation.product, evaluation.a_reduced, evaluation.b_reduced)
}

#[test]
fn evaluate_propagates_errors_without_trace() {
    assert!(matches!(
        evaluate(3, 2, "x^a", 3),
        Err(EngineError::Codec(CodecError::MalformedExponent { .. }))
    ));
    assert_eq!(
        evaluate(3, 2, "x^3+x+1", 4),
        Err(EngineError::Field(FieldError::ModulusDegreeMismatch {
            expected: 4,
            actual: Some(3)
        }))
    );
    assert_eq!(
        evaluate(3, 2, "x^3+x+1", 200),
        Err(EngineError::Field(FieldError::DegreeOutOfRange { degree: 200 }))
    );
}

#[test]
fn evaluate_trace_segments_follow_call_order() {
    let evaluation = evaluate(8, 9, "x^3+x+1", 3).unwrap();
    let trace = &evaluation.trace;
    assert_eq!(trace.reduce_a.len(), 1);
    assert_eq!(trace.reduce_b.len(), 1);
    assert_eq!(trace.multiply.len(), 2);
    assert_eq!(trace.len(), 4);

    let lines: Vec<String> = trace.steps().map(|step| step.to_string()).collect();
    assert!(lines[0].starts_with("[a] reduce deg 3"));
    assert!(lines[1].starts_with("[b] reduce deg 3"));
    assert!(lines[2].starts_with("[mul] iteration 1"));
    assert!(lines[3].starts_with("[mul] iteration 2"));
}
