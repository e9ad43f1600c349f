//! Connective constructors and operator overloading for expressions
//!
//! `&` builds a conjunction, `|` a disjunction and `!` a negation. There is no
//! operator for implication; use [`Expression::implies`].

use super::Expression;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

/// Conjunction for references: `&a & &b`
///
/// # Examples
///
/// ```
/// use logical::Expression;
///
/// let a = Expression::variable("a");
/// let b = Expression::variable("b");
/// assert_eq!(&a & &b, a.and(&b));
/// ```
impl BitAnd for &Expression {
    type Output = Expression;

    fn bitand(self, rhs: &Expression) -> Expression {
        self.and(rhs)
    }
}

/// Conjunction for owned values: `a & b`
impl BitAnd for Expression {
    type Output = Expression;

    fn bitand(self, rhs: Expression) -> Expression {
        self.and(&rhs)
    }
}

/// Disjunction for references: `&a | &b`
///
/// # Examples
///
/// ```
/// use logical::Expression;
///
/// let a = Expression::variable("a");
/// let b = Expression::variable("b");
/// assert_eq!((&a | &b).to_string(), "(a | b)");
/// ```
impl BitOr for &Expression {
    type Output = Expression;

    fn bitor(self, rhs: &Expression) -> Expression {
        self.or(rhs)
    }
}

/// Disjunction for owned values: `a | b`
impl BitOr for Expression {
    type Output = Expression;

    fn bitor(self, rhs: Expression) -> Expression {
        self.or(&rhs)
    }
}

/// Negation for references: `!&a`
impl Not for &Expression {
    type Output = Expression;

    fn not(self) -> Expression {
        Expression::not(self)
    }
}

/// Negation for owned values: `!a`
impl Not for Expression {
    type Output = Expression;

    fn not(self) -> Expression {
        Expression::not(&self)
    }
}

impl Expression {
    /// Negation of this expression
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self) -> Expression {
        Expression::Not(Arc::new(self.clone()))
    }

    /// Conjunction of this expression with another
    pub fn and(&self, other: &Expression) -> Expression {
        Expression::And(Arc::new(self.clone()), Arc::new(other.clone()))
    }

    /// Disjunction of this expression with another
    pub fn or(&self, other: &Expression) -> Expression {
        Expression::Or(Arc::new(self.clone()), Arc::new(other.clone()))
    }

    /// Implication with this expression as antecedent
    pub fn implies(&self, consequent: &Expression) -> Expression {
        Expression::Implies(Arc::new(self.clone()), Arc::new(consequent.clone()))
    }
}
