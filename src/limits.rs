//! Resource limits for parsing and truth-table enumeration

/// Bounds applied to untrusted input
///
/// The parser recurses once per open parenthesis, and printing, evaluating
/// and dropping a tree recurse once per level of height, so `max_depth` is
/// what keeps hostile input like `((((...` from exhausting the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum length of source text in bytes
    pub max_input_bytes: usize,
    /// Maximum tree height ([`Expression::depth`](crate::Expression::depth))
    /// and maximum nesting of parentheses
    pub max_depth: usize,
    /// Maximum number of distinct variables a truth table may enumerate
    pub max_table_variables: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_input_bytes: 1024 * 1024,
            max_depth: 512,
            max_table_variables: 20,
        }
    }
}

impl Limits {
    /// Create limits with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Set the maximum source length in bytes
    pub fn with_max_input_bytes(mut self, max_input_bytes: usize) -> Self {
        self.max_input_bytes = max_input_bytes;
        self
    }

    /// Set the maximum number of truth-table variables
    pub fn with_max_table_variables(mut self, max_table_variables: usize) -> Self {
        self.max_table_variables = max_table_variables;
        self
    }
}
