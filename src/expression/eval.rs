//! Evaluation and equivalence checking for boolean expressions

use super::error::EvalError;
use super::{BoolExpr, BoolExprInner};
use std::collections::HashMap;
use std::sync::Arc;

impl BoolExpr {
    /// Evaluate the expression under a variable assignment
    ///
    /// Structural recursion over the tree; XOR evaluates as inequality of its
    /// operands. Every variable of the expression must be bound in the
    /// assignment or evaluation fails with [`EvalError::UnboundVariable`].
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::BoolExpr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let expr = BoolExpr::parse("a & !b")?;
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assignment.insert(Arc::from("b"), false);
    /// assert_eq!(expr.evaluate(&assignment)?, true);
    ///
    /// assignment.insert(Arc::from("b"), true);
    /// assert_eq!(expr.evaluate(&assignment)?, false);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> Result<bool, EvalError> {
        match self.inner() {
            BoolExprInner::Variable(name) => assignment
                .get(name)
                .copied()
                .ok_or_else(|| EvalError::UnboundVariable(Arc::clone(name))),
            BoolExprInner::Constant(val) => Ok(*val),
            BoolExprInner::And(left, right) => {
                Ok(left.evaluate(assignment)? && right.evaluate(assignment)?)
            }
            BoolExprInner::Or(left, right) => {
                Ok(left.evaluate(assignment)? || right.evaluate(assignment)?)
            }
            BoolExprInner::Xor(left, right) => {
                Ok(left.evaluate(assignment)? != right.evaluate(assignment)?)
            }
            BoolExprInner::Not(inner) => Ok(!inner.evaluate(assignment)?),
        }
    }

    /// Check whether two expressions are logically equivalent
    ///
    /// Compares the two functions over every assignment of the union of their
    /// variables. Exponential in the variable count, which is fine for the
    /// sizes this crate targets.
    ///
    /// # Examples
    ///
    /// ```
    /// use qmc_logic::BoolExpr;
    ///
    /// let a = BoolExpr::variable("a");
    /// let b = BoolExpr::variable("b");
    ///
    /// let expr1 = a.and(&b);
    /// let expr2 = b.and(&a); // Commutative
    /// assert!(expr1.equivalent_to(&expr2));
    ///
    /// let expr3 = a.or(&b);
    /// assert!(!expr1.equivalent_to(&expr3));
    /// ```
    pub fn equivalent_to(&self, other: &BoolExpr) -> bool {
        let mut vars = self.variables();
        for var in other.variables() {
            if !vars.iter().any(|v| *v == var) {
                vars.push(var);
            }
        }
        let n = vars.len();

        let mut assignment = HashMap::with_capacity(n);
        for index in 0..(1usize << n) {
            assignment.clear();
            for (k, name) in vars.iter().enumerate() {
                assignment.insert(Arc::clone(name), (index >> (n - 1 - k)) & 1 == 1);
            }
            // The assignment binds the union of both variable sets, so
            // evaluation cannot fail here.
            match (self.evaluate(&assignment), other.evaluate(&assignment)) {
                (Ok(lhs), Ok(rhs)) if lhs == rhs => {}
                _ => return false,
            }
        }
        true
    }
}
