//! Tree traversal over expressions

use super::Expression;

/// Node shape passed to [`Expression::fold`]
///
/// Child positions hold the results already computed for the children, so a
/// fold is a bottom-up reduction over the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// Negation with the result for the operand
    Not(T),
    /// Conjunction with results for left and right subtrees
    And(T, T),
    /// Disjunction with results for left and right subtrees
    Or(T, T),
    /// Implication with results for antecedent and consequent
    Implies(T, T),
}

impl Expression {
    /// Fold the expression tree depth-first from leaves to root
    ///
    /// Children are visited left before right.
    ///
    /// # Examples
    ///
    /// Count the connectives in an expression:
    ///
    /// ```
    /// use logical::{ExprNode, Expression};
    ///
    /// let expr = Expression::parse("~a & (b => c)")?;
    ///
    /// let op_count = expr.fold(|node: ExprNode<usize>| match node {
    ///     ExprNode::Variable(_) => 0,
    ///     ExprNode::Not(inner) => inner + 1,
    ///     ExprNode::And(l, r) | ExprNode::Or(l, r) | ExprNode::Implies(l, r) => l + r + 1,
    /// });
    ///
    /// assert_eq!(op_count, 3);
    /// # Ok::<(), logical::LogicError>(())
    /// ```
    pub fn fold<'a, T, F>(&'a self, f: F) -> T
    where
        F: Fn(ExprNode<'a, T>) -> T,
    {
        self.fold_impl(&f)
    }

    fn fold_impl<'a, T, F>(&'a self, f: &F) -> T
    where
        F: Fn(ExprNode<'a, T>) -> T,
    {
        match self {
            Expression::Variable(name) => f(ExprNode::Variable(name)),
            Expression::Not(inner) => {
                let inner_result = inner.fold_impl(f);
                f(ExprNode::Not(inner_result))
            }
            Expression::And(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::And(left_result, right_result))
            }
            Expression::Or(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::Or(left_result, right_result))
            }
            Expression::Implies(left, right) => {
                let left_result = left.fold_impl(f);
                let right_result = right.fold_impl(f);
                f(ExprNode::Implies(left_result, right_result))
            }
        }
    }
}
