//! Truth tables and exhaustive analysis
//!
//! An expression mentions finitely many variables, so satisfiability,
//! validity and equivalence are decided by enumerating every valuation. The
//! cost is `2^n` evaluations; [`Limits::max_table_variables`] bounds `n`.

use super::error::EvalError;
use super::eval::Valuation;
use super::Expression;
use crate::limits::Limits;
use std::fmt;
use std::sync::Arc;

/// One row of a [`TruthTable`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableRow {
    /// Values in the same order as [`TruthTable::variables`]
    pub values: Vec<bool>,
    /// Value of the expression under this row's valuation
    pub result: bool,
}

/// Every valuation of an expression's variables with the resulting value
///
/// Variables are sorted by name. Rows count upward in binary from all-false
/// to all-true, the first variable being the most significant bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    expression: Expression,
    variables: Vec<Arc<str>>,
    rows: Vec<TruthTableRow>,
}

impl TruthTable {
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    pub fn variables(&self) -> &[Arc<str>] {
        &self.variables
    }

    pub fn rows(&self) -> &[TruthTableRow] {
        &self.rows
    }

    /// Rows under which the expression is true
    pub fn models(&self) -> impl Iterator<Item = &TruthTableRow> {
        self.rows.iter().filter(|row| row.result)
    }

    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }

    pub fn is_contradiction(&self) -> bool {
        !self.is_satisfiable()
    }

    pub fn is_satisfiable(&self) -> bool {
        self.rows.iter().any(|row| row.result)
    }
}

/// Aligned table with `1`/`0` cells and the canonical expression as the
/// result column header
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header: Vec<&str> = self.variables.iter().map(|v| &**v).collect();
        writeln!(f, "{} | {}", header.join(" "), self.expression)?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .values
                .iter()
                .zip(&header)
                .map(|(value, name)| format!("{:<width$}", u8::from(*value), width = name.len()))
                .collect();
            writeln!(f, "{} | {}", cells.join(" "), u8::from(row.result))?;
        }
        Ok(())
    }
}

/// Valuation assigning sorted variables from the bits of a counter
struct Assignment<'a> {
    variables: &'a [&'a str],
    bits: u64,
}

impl Assignment<'_> {
    fn bit(&self, index: usize) -> bool {
        let shift = self.variables.len() - 1 - index;
        (self.bits >> shift) & 1 == 1
    }
}

impl Valuation for Assignment<'_> {
    fn value(&self, name: &str) -> Option<bool> {
        self.variables
            .binary_search(&name)
            .ok()
            .map(|index| self.bit(index))
    }
}

/// Run `visit` on every valuation of `variables` until it returns `Some`
fn enumerate<T>(
    variables: &[&str],
    limits: &Limits,
    mut visit: impl FnMut(&Assignment<'_>) -> Result<Option<T>, EvalError>,
) -> Result<Option<T>, EvalError> {
    let limit = limits.max_table_variables.min(63);
    if variables.len() > limit {
        return Err(EvalError::TooManyVariables {
            count: variables.len(),
            limit,
        });
    }

    for bits in 0..(1u64 << variables.len()) {
        let assignment = Assignment { variables, bits };
        if let Some(found) = visit(&assignment)? {
            return Ok(Some(found));
        }
    }
    Ok(None)
}

impl Expression {
    /// Build the truth table with default [`Limits`]
    ///
    /// # Examples
    ///
    /// ```
    /// use logical::Expression;
    ///
    /// let table = Expression::parse("p => q")?.truth_table()?;
    /// let results: Vec<bool> = table.rows().iter().map(|r| r.result).collect();
    /// assert_eq!(results, vec![true, true, false, true]);
    /// # Ok::<(), logical::LogicError>(())
    /// ```
    pub fn truth_table(&self) -> Result<TruthTable, EvalError> {
        self.truth_table_with_limits(&Limits::default())
    }

    pub fn truth_table_with_limits(&self, limits: &Limits) -> Result<TruthTable, EvalError> {
        let names: Vec<&str> = self.variables().into_iter().collect();
        let mut rows = Vec::new();

        enumerate::<()>(&names, limits, |assignment| {
            rows.push(TruthTableRow {
                values: (0..names.len()).map(|i| assignment.bit(i)).collect(),
                result: self.evaluate(assignment)?,
            });
            Ok(None)
        })?;

        Ok(TruthTable {
            expression: self.clone(),
            variables: names.into_iter().map(Arc::from).collect(),
            rows,
        })
    }

    /// True if some valuation makes the expression true
    pub fn is_satisfiable(&self) -> Result<bool, EvalError> {
        self.is_satisfiable_with_limits(&Limits::default())
    }

    pub fn is_satisfiable_with_limits(&self, limits: &Limits) -> Result<bool, EvalError> {
        self.find_valuation(true, limits).map(|found| found.is_some())
    }

    /// True if every valuation makes the expression true
    pub fn is_tautology(&self) -> Result<bool, EvalError> {
        self.is_tautology_with_limits(&Limits::default())
    }

    pub fn is_tautology_with_limits(&self, limits: &Limits) -> Result<bool, EvalError> {
        self.find_valuation(false, limits).map(|found| found.is_none())
    }

    /// True if no valuation makes the expression true
    pub fn is_contradiction(&self) -> Result<bool, EvalError> {
        self.is_contradiction_with_limits(&Limits::default())
    }

    pub fn is_contradiction_with_limits(&self, limits: &Limits) -> Result<bool, EvalError> {
        self.is_satisfiable_with_limits(limits).map(|sat| !sat)
    }

    /// First valuation, in truth-table order, under which the expression is true
    ///
    /// Returns `None` for a contradiction.
    pub fn find_model(&self) -> Result<Option<Vec<(Arc<str>, bool)>>, EvalError> {
        self.find_model_with_limits(&Limits::default())
    }

    pub fn find_model_with_limits(
        &self,
        limits: &Limits,
    ) -> Result<Option<Vec<(Arc<str>, bool)>>, EvalError> {
        self.find_valuation(true, limits)
    }

    fn find_valuation(
        &self,
        wanted: bool,
        limits: &Limits,
    ) -> Result<Option<Vec<(Arc<str>, bool)>>, EvalError> {
        let names: Vec<&str> = self.variables().into_iter().collect();
        enumerate(&names, limits, |assignment| {
            if self.evaluate(assignment)? == wanted {
                let model = names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| (Arc::from(*name), assignment.bit(i)))
                    .collect();
                Ok(Some(model))
            } else {
                Ok(None)
            }
        })
    }

    /// True if both expressions agree under every valuation of their
    /// combined variables
    ///
    /// # Examples
    ///
    /// ```
    /// use logical::Expression;
    ///
    /// let implication = Expression::parse("p => q")?;
    /// let contrapositive = Expression::parse("~q => ~p")?;
    /// assert!(implication.equivalent_to(&contrapositive)?);
    /// assert_ne!(implication, contrapositive);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn equivalent_to(&self, other: &Expression) -> Result<bool, EvalError> {
        self.equivalent_to_with_limits(other, &Limits::default())
    }

    /// [`equivalent_to`](Expression::equivalent_to) bounded by
    /// `limits.max_table_variables` over the combined variables
    pub fn equivalent_to_with_limits(
        &self,
        other: &Expression,
        limits: &Limits,
    ) -> Result<bool, EvalError> {
        let names: Vec<&str> = self
            .variables()
            .union(&other.variables())
            .copied()
            .collect();

        let counterexample = enumerate(&names, limits, |assignment| {
            if self.evaluate(assignment)? != other.evaluate(assignment)? {
                Ok(Some(()))
            } else {
                Ok(None)
            }
        })?;
        Ok(counterexample.is_none())
    }
}
