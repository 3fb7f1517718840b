//! Tree traversal operations for boolean expressions

use super::{BoolExpr, BoolExprInner};

/// Node type for expression tree folding
///
/// This enum represents the structure of an expression node without exposing
/// internal `Arc` types. It's used with [`BoolExpr::fold`] to traverse and
/// analyze expression trees; `T` is the accumulated result from child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// Logical AND with results from left and right subtrees
    And(T, T),
    /// Logical OR with results from left and right subtrees
    Or(T, T),
    /// Logical XOR with results from left and right subtrees
    Xor(T, T),
    /// Logical NOT with result from inner subtree
    Not(T),
    /// A constant boolean value
    Constant(bool),
}

impl BoolExpr {
    /// Fold the expression tree depth-first from leaves to root
    ///
    /// This method traverses the expression tree recursively, calling `f` on
    /// each node. The function receives an [`ExprNode`] containing the node
    /// type and accumulated results from child nodes.
    ///
    /// # Examples
    ///
    /// Count the number of operations in an expression:
    ///
    /// ```
    /// use qmc_logic::{BoolExpr, ExprNode};
    ///
    /// let a = BoolExpr::variable("a");
    /// let b = BoolExpr::variable("b");
    /// let expr = a.and(&b);
    ///
    /// let op_count = expr.fold(|node| match node {
    ///     ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
    ///     ExprNode::And(l, r) | ExprNode::Or(l, r) | ExprNode::Xor(l, r) => l + r + 1,
    ///     ExprNode::Not(inner) => inner + 1,
    /// });
    ///
    /// assert_eq!(op_count, 1); // Just AND
    /// ```
    pub fn fold<T, F>(&self, f: F) -> T
    where
        F: Fn(ExprNode<T>) -> T + Copy,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<T, F>(&self, f: &F) -> T
    where
        F: Fn(ExprNode<T>) -> T,
    {
        match self.inner() {
            BoolExprInner::Variable(name) => f(ExprNode::Variable(name)),
            BoolExprInner::And(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::And(left_result, right_result))
            }
            BoolExprInner::Or(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::Or(left_result, right_result))
            }
            BoolExprInner::Xor(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::Xor(left_result, right_result))
            }
            BoolExprInner::Not(inner) => {
                let inner_result = inner.fold_impl(f);
                f(ExprNode::Not(inner_result))
            }
            BoolExprInner::Constant(val) => f(ExprNode::Constant(*val)),
        }
    }
}
