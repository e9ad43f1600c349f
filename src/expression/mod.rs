//! Propositional expressions: tokenizing, parsing, printing and evaluation
//!
//! # Main Types
//!
//! - [`Expression`] - an immutable tree over five connectives: variables,
//!   `~` (not), `&` (and), `|` (or) and `=>` (implies). Children are shared
//!   through `Arc`, so cloning is cheap and trees are `Send + Sync`.
//! - [`Token`] / [`SpannedToken`] - output of [`tokenize`].
//! - [`Parser`] - recursive-descent parser with configurable [`Limits`](crate::Limits).
//! - [`TruthTable`] - every valuation of an expression's variables.
//!
//! # Quick Start
//!
//! ```
//! use logical::Expression;
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), logical::LogicError> {
//! let expr = Expression::parse("rain => wet")?;
//! println!("{}", expr); // (rain => wet)
//!
//! let mut valuation = HashMap::new();
//! valuation.insert("rain", true);
//! valuation.insert("wet", false);
//! assert_eq!(expr.evaluate(&valuation)?, false);
//! # Ok(())
//! # }
//! ```
//!
//! ## Building expressions in code
//!
//! ```
//! use logical::{formula, Expression};
//!
//! let p = Expression::variable("p");
//! let q = Expression::variable("q");
//!
//! // Method API
//! let a = p.implies(&q).and(&p);
//! // Operators: `&`, `|` and `!`
//! let b = (&p & &q) | !&p;
//! // The `formula!` macro uses the textual operators
//! let c = formula!((p => q) & p);
//!
//! assert_eq!(a, c);
//! assert_eq!(b.to_string(), "((p & q) | (~p))");
//! ```

mod ast;
mod display;
pub mod error;
mod eval;
mod lexer;
mod operators;
mod parser;
mod table;

pub use ast::ExprNode;
pub use error::{EvalError, LexError, ParseError, ParseErrorKind};
pub use eval::Valuation;
pub use lexer::{tokenize, SpannedToken, Token};
pub use parser::{parse_tokens, Parser};
pub use table::{TruthTable, TruthTableRow};

use std::collections::BTreeSet;
use std::sync::Arc;

/// A propositional formula
///
/// The variant set is closed; match on it directly or use [`Expression::fold`].
/// Trees are never mutated after construction. Equality is structural:
/// `a & b` and `b & a` are different trees (use
/// [`Expression::equivalent_to`] for logical equivalence).
///
/// # Depth
///
/// Printing, evaluation, [`fold`](Expression::fold) and dropping all recurse
/// once per level of [`depth`](Expression::depth). The parser rejects trees
/// deeper than [`Limits::max_depth`](crate::Limits::max_depth), but the
/// constructors in this module do not check; a tree built in code that is
/// tens of thousands of levels deep can overflow the stack. Check `depth()`
/// or round-trip through [`Parser`] before handing such trees on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expression {
    /// A named boolean input
    Variable(Arc<str>),
    /// Negation
    Not(Arc<Expression>),
    /// Conjunction
    And(Arc<Expression>, Arc<Expression>),
    /// Disjunction
    Or(Arc<Expression>, Arc<Expression>),
    /// Implication, antecedent on the left
    Implies(Arc<Expression>, Arc<Expression>),
}

impl Expression {
    /// Create a variable expression
    ///
    /// The name is stored as given. Names that do not match
    /// `[A-Za-z_][A-Za-z0-9_]*` can be built here but will not survive a
    /// print/parse round trip.
    pub fn variable(name: impl Into<Arc<str>>) -> Self {
        Expression::Variable(name.into())
    }

    /// The variable name, if this is a leaf
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Expression::Variable(name) => Some(&**name),
            _ => None,
        }
    }

    /// Distinct variable names in the expression, sorted
    pub fn variables(&self) -> BTreeSet<&str> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables<'a>(&'a self, vars: &mut BTreeSet<&'a str>) {
        match self {
            Expression::Variable(name) => {
                vars.insert(name);
            }
            Expression::Not(inner) => inner.collect_variables(vars),
            Expression::And(left, right)
            | Expression::Or(left, right)
            | Expression::Implies(left, right) => {
                left.collect_variables(vars);
                right.collect_variables(vars);
            }
        }
    }

    /// Height of the tree; a lone variable has depth 0
    pub fn depth(&self) -> usize {
        self.fold(|node: ExprNode<usize>| match node {
            ExprNode::Variable(_) => 0,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::And(l, r) | ExprNode::Or(l, r) | ExprNode::Implies(l, r) => l.max(r) + 1,
        })
    }

    /// Number of nodes in the tree
    pub fn size(&self) -> usize {
        self.fold(|node: ExprNode<usize>| match node {
            ExprNode::Variable(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::And(l, r) | ExprNode::Or(l, r) | ExprNode::Implies(l, r) => l + r + 1,
        })
    }
}

#[cfg(test)]
mod tests;
