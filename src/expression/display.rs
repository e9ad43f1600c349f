//! Canonical printing of expressions
//!
//! Every compound node wraps itself in parentheses, so the printed form needs
//! no precedence knowledge to read back and always reparses to the same tree.

use super::Expression;
use std::fmt;

impl Expression {
    fn fmt_binary(
        f: &mut fmt::Formatter<'_>,
        left: &Expression,
        op: &str,
        right: &Expression,
    ) -> fmt::Result {
        write!(f, "(")?;
        left.fmt_canonical(f)?;
        write!(f, " {} ", op)?;
        right.fmt_canonical(f)?;
        write!(f, ")")
    }

    fn fmt_canonical(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Variable(name) => write!(f, "{}", name),
            Expression::Not(inner) => {
                write!(f, "(~")?;
                inner.fmt_canonical(f)?;
                write!(f, ")")
            }
            Expression::And(left, right) => Self::fmt_binary(f, left, "&", right),
            Expression::Or(left, right) => Self::fmt_binary(f, left, "|", right),
            Expression::Implies(left, right) => Self::fmt_binary(f, left, "=>", right),
        }
    }
}

/// Canonical fully parenthesized form
///
/// # Examples
///
/// ```
/// use logical::Expression;
///
/// let expr = Expression::parse("~a & b => c")?;
/// assert_eq!(expr.to_string(), "(((~a) & b) => c)");
/// # Ok::<(), logical::LogicError>(())
/// ```
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_canonical(f)
    }
}
