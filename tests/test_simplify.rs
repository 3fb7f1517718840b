//! End-to-end minimization scenarios and invariants

use qmc_logic::BoolExpr;

fn simplify(input: &str) -> BoolExpr {
    BoolExpr::parse(input)
        .expect("scenario input parses")
        .simplify()
        .expect("scenario input minimizes")
}

#[test]
fn test_absorption() {
    assert_eq!(simplify("a & (a | b)").to_string(), "a");
}

#[test]
fn test_de_morgan_shape() {
    assert_eq!(simplify("!(a & b)").to_string(), "!a | !b");
}

#[test]
fn test_contradiction() {
    assert_eq!(simplify("a & !a").to_string(), "0");
}

#[test]
fn test_tautology() {
    assert_eq!(simplify("a | !a").to_string(), "1");
}

#[test]
fn test_xor_recognition() {
    assert_eq!(simplify("(!a & b) | (a & !b)").to_string(), "a ^ b");
}

#[test]
fn test_two_independent_groups() {
    assert_eq!(
        simplify("((x & y & z) | (u & v)) & ((x | !y | !z) | (u & v))").to_string(),
        "u & v | x & y & z"
    );
}

#[test]
fn test_consensus_term_dropped() {
    assert_eq!(
        simplify("(a & b) | (!a & c) | (b & c)").to_string(),
        "a & b | !a & c"
    );
}

/// The corpus the universal invariants run over; all within eight variables.
const CORPUS: &[&str] = &[
    "a",
    "!a",
    "0",
    "1",
    "a & b",
    "a | b",
    "a ^ b",
    "a & !a",
    "a | !a",
    "a & (a | b)",
    "!(a & b)",
    "!(a | b) ^ c",
    "(!a & b) | (a & !b)",
    "(a & b) | (!a & c) | (b & c)",
    "a ^ b ^ c",
    "(a | b) & (c | d)",
    "(a & b & c) | (a & b & !c) | (!a & d)",
    "((x & y & z) | (u & v)) & ((x | !y | !z) | (u & v))",
    "(a | b) & (c | d) & (e | f) & (g | h)",
    "a & b | c & d | e & f | g & h",
];

#[test]
fn test_semantic_preservation() {
    for input in CORPUS {
        let expr = BoolExpr::parse(input).unwrap();
        let simplified = expr.simplify().unwrap();
        assert!(
            expr.equivalent_to(&simplified),
            "{} is not equivalent to its simplification {}",
            input,
            simplified
        );
    }
}

#[test]
fn test_idempotence() {
    for input in CORPUS {
        let once = simplify(input);
        let twice = once.simplify().unwrap();
        assert_eq!(once, twice, "simplify is not idempotent on {}", input);
    }
}

#[test]
fn test_literal_monotonicity() {
    // Holds for inputs at or above sum-of-products form. A product-of-sums
    // or nested-XOR formula is more compact than any sum of products, so the
    // minimized output can legitimately carry more literals there.
    for input in [
        "a",
        "!a",
        "a & b",
        "a | b",
        "a ^ b",
        "a & !a",
        "a | !a",
        "a & (a | b)",
        "!(a & b)",
        "(!a & b) | (a & !b)",
        "(a & b) | (!a & c) | (b & c)",
        "a & b | a & b & c",
        "((x & y & z) | (u & v)) & ((x | !y | !z) | (u & v))",
        "a & b | c & d | e & f | g & h",
        "(a & b & c) | (a & b & !c) | (!a & d)",
    ] {
        let expr = BoolExpr::parse(input).unwrap();
        let simplified = expr.simplify().unwrap();
        assert!(
            simplified.literal_count() <= expr.literal_count(),
            "{} grew from {} to {} literals",
            input,
            expr.literal_count(),
            simplified.literal_count()
        );
    }
}

#[test]
fn test_tautologies_become_const_true() {
    for input in ["a | !a", "(a & b) | !a | !b", "a ^ !a", "1 | a"] {
        assert_eq!(
            simplify(input),
            BoolExpr::constant(true),
            "{} should canonicalize to 1",
            input
        );
    }
}

#[test]
fn test_contradictions_become_const_false() {
    for input in ["a & !a", "(a | b) & !a & !b", "a ^ a", "0 & a"] {
        assert_eq!(
            simplify(input),
            BoolExpr::constant(false),
            "{} should canonicalize to 0",
            input
        );
    }
}

#[test]
fn test_xor_against_product_minimizes_equivalently() {
    let simplified = simplify("(!(a & b) & c) | ((a & b) & !c)");
    let reference = BoolExpr::parse("(a & b) ^ c").unwrap();
    assert!(simplified.equivalent_to(&reference));
}

#[test]
fn test_redundant_literals_dropped() {
    assert_eq!(simplify("a & b | a & b & c").to_string(), "a & b");
    assert_eq!(simplify("a & 1").to_string(), "a");
    assert_eq!(simplify("a | 0").to_string(), "a");
}
