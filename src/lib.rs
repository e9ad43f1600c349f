//! # logical
//!
//! A small propositional logic expression language: a tokenizer, a
//! recursive-descent parser, a canonical printer and an evaluator.
//!
//! ## Syntax
//!
//! | Spelling | Meaning     | Binding    |
//! |----------|-------------|------------|
//! | `~`      | not         | tightest   |
//! | `&`      | and         |            |
//! | `\|`     | or          |            |
//! | `=>`     | implies     | loosest    |
//! | `( )`    | grouping    |            |
//!
//! Variables are ASCII identifiers (`[A-Za-z_][A-Za-z0-9_]*`, case
//! sensitive). Every binary operator is left-associative, including `=>`:
//! `a => b => c` means `(a => b) => c`. This departs from the textbook
//! convention of a right-associative implication; parenthesize explicitly
//! when the other grouping is wanted.
//!
//! ## Quick Start
//!
//! ```
//! use logical::{evaluate, parse, render};
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), logical::LogicError> {
//! let expr = parse("~a & b => c")?;
//! assert_eq!(render(&expr), "(((~a) & b) => c)");
//!
//! let valuation: HashMap<&str, bool> =
//!     [("a", false), ("b", true), ("c", false)].into_iter().collect();
//! assert_eq!(evaluate(&expr, &valuation)?, false);
//! # Ok(())
//! # }
//! ```
//!
//! ## Analysis
//!
//! Expressions have finitely many variables, so classification is done by
//! exhaustive enumeration, bounded by [`Limits::max_table_variables`]:
//!
//! ```
//! use logical::Expression;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let modus_ponens = Expression::parse("((p => q) & p) => q")?;
//! assert!(modus_ponens.is_tautology()?);
//!
//! let table = Expression::parse("p | q")?.truth_table()?;
//! assert_eq!(table.models().count(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors
//!
//! Each stage has its own error type: [`LexError`] for unknown characters,
//! [`ParseError`] for malformed token sequences and [`EvalError`] for
//! unassigned variables. Nothing is repaired or defaulted. [`LogicError`]
//! wraps all three.
//!
//! ## Thread Safety
//!
//! There is no global state. [`Expression`] trees are immutable and
//! `Send + Sync`; valuations are borrowed for the duration of a call and
//! never modified, so any number of threads can parse and evaluate
//! concurrently without synchronization.

extern crate self as logical;

pub mod error;
pub mod expression;
pub mod limits;

pub use error::LogicError;
pub use expression::{
    parse_tokens, tokenize, EvalError, ExprNode, Expression, LexError, ParseError,
    ParseErrorKind, Parser, SpannedToken, Token, TruthTable, TruthTableRow, Valuation,
};
pub use limits::Limits;
pub use logical_macros::formula;

/// Tokenize and parse source text with default [`Limits`]
pub fn parse(source: &str) -> Result<Expression, LogicError> {
    Expression::parse(source)
}

/// Canonical fully parenthesized form of an expression
///
/// `parse(&render(e))` always yields a tree equal to `e`.
pub fn render(expr: &Expression) -> String {
    expr.to_string()
}

/// Evaluate an expression under a valuation
///
/// Fails with [`EvalError::MissingVariable`] for the first unassigned
/// variable met in left-to-right order.
pub fn evaluate<V: Valuation + ?Sized>(expr: &Expression, valuation: &V) -> Result<bool, EvalError> {
    expr.evaluate(valuation)
}
