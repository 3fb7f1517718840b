//! Structural rewrites on minimized expressions
//!
//! Quine-McCluskey output is sum-of-products, which hides XOR: the function
//! `a ^ b` comes out as `!a & b | a & !b`. This pass walks the tree bottom-up
//! and folds that shape back into the `^` connective. Nothing else is
//! rewritten; absorption, consensus and De Morgan simplifications are already
//! realized by the minimization itself.

use crate::expression::{BoolExpr, BoolExprInner};

/// Recognize XOR patterns in a tree
///
/// Children are rewritten first, then the current node is matched against
/// `(!a & b) | (a & !b)` in every operand ordering of the OR and of both
/// ANDs. The pass is idempotent and never increases the literal count; an
/// unmatched tree is returned unchanged.
///
/// # Examples
///
/// ```
/// use qmc_logic::rewrite::rewrite;
/// use qmc_logic::BoolExpr;
///
/// let expr = BoolExpr::parse("(a & !b) | (!a & b)")?;
/// assert_eq!(rewrite(&expr).to_string(), "a ^ b");
///
/// let untouched = BoolExpr::parse("a & b")?;
/// assert_eq!(rewrite(&untouched), untouched);
/// # Ok::<(), qmc_logic::ParseError>(())
/// ```
pub fn rewrite(expr: &BoolExpr) -> BoolExpr {
    match expr.inner() {
        BoolExprInner::Variable(_) | BoolExprInner::Constant(_) => expr.clone(),
        BoolExprInner::Not(inner) => rewrite(inner).not(),
        BoolExprInner::And(left, right) => rewrite(left).and(&rewrite(right)),
        BoolExprInner::Xor(left, right) => rewrite(left).xor(&rewrite(right)),
        BoolExprInner::Or(left, right) => {
            let left = rewrite(left);
            let right = rewrite(right);
            match_xor(&left, &right).unwrap_or_else(|| left.or(&right))
        }
    }
}

/// Match `(!a & b) | (a & !b)` modulo commutativity and build `a ^ b`
fn match_xor(left: &BoolExpr, right: &BoolExpr) -> Option<BoolExpr> {
    let (l1, l2) = as_and(left)?;
    let (r1, r2) = as_and(right)?;

    for (l_plain, l_negated) in [(l1, l2), (l2, l1)] {
        let Some(a) = as_not(l_negated) else {
            continue;
        };
        for (r_plain, r_negated) in [(r1, r2), (r2, r1)] {
            let Some(b) = as_not(r_negated) else {
                continue;
            };
            // Left factor is !a & b, right factor is a & !b.
            if a == r_plain && l_plain == b {
                return Some(a.xor(b));
            }
        }
    }
    None
}

fn as_and(expr: &BoolExpr) -> Option<(&BoolExpr, &BoolExpr)> {
    match expr.inner() {
        BoolExprInner::And(left, right) => Some((left, right)),
        _ => None,
    }
}

fn as_not(expr: &BoolExpr) -> Option<&BoolExpr> {
    match expr.inner() {
        BoolExprInner::Not(inner) => Some(inner),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> BoolExpr {
        BoolExpr::parse(input).unwrap()
    }

    #[test]
    fn test_all_operand_orderings_recognized() {
        for input in [
            "(!a & b) | (a & !b)",
            "(b & !a) | (a & !b)",
            "(!a & b) | (!b & a)",
            "(b & !a) | (!b & a)",
            "(a & !b) | (!a & b)",
            "(!b & a) | (b & !a)",
        ] {
            let rewritten = rewrite(&parse(input));
            assert!(
                matches!(rewritten.inner(), BoolExprInner::Xor(..)),
                "{} did not become an XOR: {}",
                input,
                rewritten
            );
            assert!(rewritten.equivalent_to(&parse(input)));
        }
    }

    #[test]
    fn test_operands_may_be_subtrees() {
        let expr = parse("(!(a & b) & c) | ((a & b) & !c)");
        // AND binds tighter than XOR, so no parentheses are needed.
        assert_eq!(rewrite(&expr).to_string(), "a & b ^ c");
    }

    #[test]
    fn test_xnor_shape_not_rewritten() {
        let expr = parse("(a & b) | (!a & !b)");
        assert_eq!(rewrite(&expr), expr);
    }

    #[test]
    fn test_rewrites_below_an_or_chain() {
        // Only the inner OR forms the pattern; the outer one keeps its shape.
        let expr = parse("((!a & b) | (a & !b)) | (c & d)");
        assert_eq!(rewrite(&expr).to_string(), "a ^ b | c & d");
    }

    #[test]
    fn test_idempotent() {
        let expr = parse("(!a & b) | (a & !b)");
        let once = rewrite(&expr);
        assert_eq!(rewrite(&once), once);
    }

    #[test]
    fn test_literal_count_never_grows() {
        for input in ["(!a & b) | (a & !b)", "a & b | c", "!x | !y"] {
            let expr = parse(input);
            assert!(rewrite(&expr).literal_count() <= expr.literal_count());
        }
    }
}
