//! Evaluation of expressions against a valuation

use super::error::EvalError;
use super::Expression;
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

/// A source of truth values for variables
///
/// Implemented for `HashMap` and `BTreeMap` with any key that borrows as
/// `str` (`String`, `&str`, `Arc<str>`, ...). Returning `None` means the
/// variable is unassigned; evaluation treats that as an error rather than
/// a default.
pub trait Valuation {
    /// The value assigned to `name`, if any
    fn value(&self, name: &str) -> Option<bool>;
}

impl<K, S> Valuation for HashMap<K, bool, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<K> Valuation for BTreeMap<K, bool>
where
    K: Borrow<str> + Ord,
{
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<V: Valuation + ?Sized> Valuation for &V {
    fn value(&self, name: &str) -> Option<bool> {
        (**self).value(name)
    }
}

impl Expression {
    /// Evaluate the expression under a valuation
    ///
    /// Both operands of every binary node are evaluated, left first, so the
    /// reported [`EvalError::MissingVariable`] is always the leftmost
    /// unassigned variable in the printed form.
    ///
    /// # Examples
    ///
    /// ```
    /// use logical::{EvalError, Expression};
    /// use std::collections::HashMap;
    ///
    /// let expr = Expression::parse("p => q")?;
    ///
    /// let mut valuation = HashMap::new();
    /// valuation.insert("p".to_string(), true);
    /// valuation.insert("q".to_string(), false);
    /// assert_eq!(expr.evaluate(&valuation)?, false);
    ///
    /// valuation.remove("q");
    /// assert!(matches!(
    ///     expr.evaluate(&valuation),
    ///     Err(EvalError::MissingVariable { .. })
    /// ));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn evaluate<V: Valuation + ?Sized>(&self, valuation: &V) -> Result<bool, EvalError> {
        match self {
            Expression::Variable(name) => {
                valuation
                    .value(name)
                    .ok_or_else(|| EvalError::MissingVariable {
                        name: Arc::clone(name),
                    })
            }
            Expression::Not(inner) => Ok(!inner.evaluate(valuation)?),
            Expression::And(left, right) => {
                let l = left.evaluate(valuation)?;
                let r = right.evaluate(valuation)?;
                Ok(l && r)
            }
            Expression::Or(left, right) => {
                let l = left.evaluate(valuation)?;
                let r = right.evaluate(valuation)?;
                Ok(l || r)
            }
            Expression::Implies(left, right) => {
                let l = left.evaluate(valuation)?;
                let r = right.evaluate(valuation)?;
                Ok(!l || r)
            }
        }
    }
}
