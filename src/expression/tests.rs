//! Tests for the expression module

use super::*;
use crate::expr;
use std::collections::HashMap;

fn assignment(pairs: &[(&str, bool)]) -> HashMap<Arc<str>, bool> {
    pairs
        .iter()
        .map(|(name, value)| (Arc::from(*name), *value))
        .collect()
}

#[test]
fn test_variables_first_occurrence_order() {
    let expr = BoolExpr::parse("c & a | c & b").unwrap();
    let vars = expr.variables();
    let names: Vec<&str> = vars.iter().map(|v| v.as_ref()).collect();
    assert_eq!(names, ["c", "a", "b"]);
}

#[test]
fn test_variables_descend_into_not_and_xor() {
    let expr = BoolExpr::parse("!x ^ y").unwrap();
    let vars = expr.variables();
    let names: Vec<&str> = vars.iter().map(|v| v.as_ref()).collect();
    assert_eq!(names, ["x", "y"]);
}

#[test]
fn test_structural_equality() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");
    assert_eq!(a.and(&b), a.and(&b));
    // Equality is structural, not semantic.
    assert_ne!(a.and(&b), b.and(&a));
}

#[test]
fn test_constructors_do_not_normalize() {
    let one = BoolExpr::constant(true);
    let a = BoolExpr::variable("a");
    let expr = a.and(&one);
    assert_ne!(expr, a);
    assert!(expr.equivalent_to(&a));
}

#[test]
fn test_evaluate_all_connectives() {
    let expr = BoolExpr::parse("(a & b) | (c ^ !d)").unwrap();
    let result = expr
        .evaluate(&assignment(&[("a", false), ("b", true), ("c", true), ("d", true)]))
        .unwrap();
    // c ^ !d = true ^ false = true
    assert!(result);
}

#[test]
fn test_evaluate_unbound_variable() {
    let expr = BoolExpr::parse("a & b").unwrap();
    let err = expr.evaluate(&assignment(&[("a", true)])).unwrap_err();
    assert_eq!(err, EvalError::UnboundVariable(Arc::from("b")));
}

#[test]
fn test_literal_count_counts_leaf_occurrences() {
    let expr = BoolExpr::parse("!a | !a").unwrap();
    assert_eq!(expr.literal_count(), 2);

    let expr = BoolExpr::parse("a & b ^ !c | 1").unwrap();
    assert_eq!(expr.literal_count(), 3);

    assert_eq!(BoolExpr::constant(false).literal_count(), 0);
}

#[test]
fn test_fold_counts_operations() {
    let expr = BoolExpr::parse("!(a & b) ^ c").unwrap();
    let op_count = expr.fold(|node| match node {
        ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
        ExprNode::And(l, r) | ExprNode::Or(l, r) | ExprNode::Xor(l, r) => l + r + 1,
        ExprNode::Not(inner) => inner + 1,
    });
    assert_eq!(op_count, 3);
}

#[test]
fn test_operator_overloads() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");

    assert_eq!(&a * &b, a.and(&b));
    assert_eq!(&a + &b, a.or(&b));
    assert_eq!(&a ^ &b, a.xor(&b));
    assert_eq!(!&a, a.not());

    // Owned variants delegate to the reference versions.
    assert_eq!(a.clone() * b.clone(), a.and(&b));
    assert_eq!(a.clone() + b.clone(), a.or(&b));
    assert_eq!(a.clone() ^ b.clone(), a.xor(&b));
    assert_eq!(!a.clone(), a.not());
}

#[test]
fn test_expr_macro() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");

    assert_eq!(expr!(a * b), a.and(&b));
    assert_eq!(expr!(a + b), a.or(&b));
    assert_eq!(expr!(a ^ b), a.xor(&b));
    assert_eq!(expr!(!a), a.not());
    assert_eq!(expr!("a" * "b"), a.and(&b));
    assert_eq!(expr!(1), BoolExpr::constant(true));
    assert_eq!(expr!(a * 0), a.and(&BoolExpr::constant(false)));
}

#[test]
fn test_expr_macro_precedence() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");
    let c = BoolExpr::variable("c");

    // + < ^ < * < !
    assert_eq!(expr!(a + b ^ c), a.or(&b.xor(&c)));
    assert_eq!(expr!(a ^ b * c), a.xor(&b.and(&c)));
    assert_eq!(expr!((a + b) * c), a.or(&b).and(&c));
    assert_eq!(expr!(!a * b), a.not().and(&b));
}

// ========== Display and parsing round trips ==========

#[test]
fn test_display_minimal_parens() {
    let expr = BoolExpr::parse("(a | b) & c").unwrap();
    assert_eq!(expr.to_string(), "(a | b) & c");

    let expr = BoolExpr::parse("a & b | c").unwrap();
    assert_eq!(expr.to_string(), "a & b | c");

    let expr = BoolExpr::parse("a ^ b & c").unwrap();
    assert_eq!(expr.to_string(), "a ^ b & c");

    let expr = BoolExpr::parse("(a | b) ^ c").unwrap();
    assert_eq!(expr.to_string(), "(a | b) ^ c");
}

#[test]
fn test_display_not() {
    assert_eq!(BoolExpr::parse("!a & b").unwrap().to_string(), "!a & b");
    assert_eq!(BoolExpr::parse("!(a & b)").unwrap().to_string(), "!(a & b)");
    assert_eq!(BoolExpr::parse("!!a").unwrap().to_string(), "!!a");
    assert_eq!(BoolExpr::parse("!1").unwrap().to_string(), "!1");
}

#[test]
fn test_display_word_operators() {
    let expr = BoolExpr::parse("!a & (b | c) ^ d").unwrap();
    let options = FormatOptions {
        operators: OperatorStyle::Word,
        parentheses: ParenStyle::Minimal,
    };
    assert_eq!(expr.format(&options), "NOT a AND (b OR c) XOR d");
}

#[test]
fn test_display_full_parens() {
    let expr = BoolExpr::parse("a | b & !c").unwrap();
    let options = FormatOptions {
        operators: OperatorStyle::Symbolic,
        parentheses: ParenStyle::Full,
    };
    assert_eq!(expr.format(&options), "(a | (b & !c))");
}

#[test]
fn test_display_parse_round_trip() {
    for input in [
        "a & b | c",
        "(a | b) & (c | d)",
        "!(a & b) ^ c",
        "a ^ b ^ c",
        "!a & !b | a & b",
        "(a | b) & c | d",
    ] {
        let expr = BoolExpr::parse(input).unwrap();
        let reparsed = BoolExpr::parse(&expr.to_string()).unwrap();
        assert_eq!(expr, reparsed, "round trip changed {}", input);
    }
}

#[test]
fn test_word_format_round_trips_through_parser() {
    let expr = BoolExpr::parse("!a & (b | c) ^ d").unwrap();
    let options = FormatOptions {
        operators: OperatorStyle::Word,
        parentheses: ParenStyle::Full,
    };
    let reparsed = BoolExpr::parse(&expr.format(&options)).unwrap();
    assert_eq!(expr, reparsed);
}

#[test]
fn test_equivalent_to_across_variable_sets() {
    let lhs = BoolExpr::parse("a & b").unwrap();
    let rhs = BoolExpr::parse("a & b | (c & !c)").unwrap();
    assert!(lhs.equivalent_to(&rhs));
    assert!(!lhs.equivalent_to(&BoolExpr::parse("a | b").unwrap()));
}

#[test]
fn test_equivalent_to_constants() {
    let tautology = BoolExpr::parse("a | !a").unwrap();
    assert!(tautology.equivalent_to(&BoolExpr::constant(true)));
    assert!(!tautology.equivalent_to(&BoolExpr::constant(false)));
}
