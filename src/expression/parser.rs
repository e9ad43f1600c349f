//! Recursive-descent parser for propositional expressions
//!
//! One function per precedence tier, loosest first:
//!
//! ```text
//! implication := disjunction ( "=>" disjunction )*
//! disjunction := conjunction ( "|" conjunction )*
//! conjunction := negation ( "&" negation )*
//! negation    := "~" negation | primary
//! primary     := IDENTIFIER | "(" implication ")"
//! ```
//!
//! Every binary tier folds to the left, `=>` included, so `a => b => c`
//! is `(a => b) => c`.

use super::error::{ParseError, ParseErrorKind};
use super::lexer::{tokenize, SpannedToken, Token};
use super::Expression;
use crate::error::LogicError;
use crate::limits::Limits;
use std::str::FromStr;

/// Expression parser configured with resource [`Limits`]
///
/// The free functions [`crate::parse`] and [`parse_tokens`] use
/// `Parser::default()`.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    limits: Limits,
}

impl Parser {
    /// Create a parser with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with the given limits
    pub fn with_limits(limits: Limits) -> Self {
        Parser { limits }
    }

    /// The limits this parser enforces
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Tokenize and parse source text
    ///
    /// Parse errors carry both the token index and the byte offset of the
    /// offending token. Errors at the end of input point one past the last
    /// token and at the end of the source.
    pub fn parse(&self, source: &str) -> Result<Expression, LogicError> {
        if source.len() > self.limits.max_input_bytes {
            return Err(ParseError::new(
                ParseErrorKind::InputTooLarge {
                    size: source.len(),
                    limit: self.limits.max_input_bytes,
                },
                None,
            )
            .into());
        }

        let tokens = tokenize(source)?;
        self.parse_tokens(&tokens).map_err(|err| {
            let position = err.index.map(|index| {
                tokens
                    .get(index)
                    .map(|t| t.offset)
                    .unwrap_or(source.len())
            });
            err.with_position(position).into()
        })
    }

    /// Parse an already tokenized expression
    pub fn parse_tokens(&self, tokens: &[SpannedToken]) -> Result<Expression, ParseError> {
        if tokens.is_empty() {
            return Err(ParseError::new(ParseErrorKind::EmptyExpression, None));
        }

        let mut state = ParseState {
            tokens,
            pos: 0,
            nesting: 0,
            max_depth: self.limits.max_depth,
        };
        let (expr, _) = state.implication()?;

        match state.peek() {
            None => Ok(expr),
            Some(Token::RParen) => Err(ParseError::new(
                ParseErrorKind::UnmatchedCloseParen,
                Some(state.pos),
            )),
            Some(_) => Err(ParseError::new(
                ParseErrorKind::TrailingInput,
                Some(state.pos),
            )),
        }
    }
}

/// Parse a token sequence with default limits
pub fn parse_tokens(tokens: &[SpannedToken]) -> Result<Expression, ParseError> {
    Parser::default().parse_tokens(tokens)
}

/// Cursor over the token slice
///
/// Each tier returns the subtree together with its height so the tree depth
/// limit can be enforced without re-walking subtrees. `nesting` counts open
/// parentheses only; the canonical form of a tree of height `h` nests at most
/// `h` deep, so printed output always fits the limits its tree was built under.
struct ParseState<'t> {
    tokens: &'t [SpannedToken],
    pos: usize,
    nesting: usize,
    max_depth: usize,
}

type Parsed = Result<(Expression, usize), ParseError>;

impl ParseState<'_> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos).map(|t| &t.token)
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn too_deep(&self) -> ParseError {
        ParseError::new(
            ParseErrorKind::TooDeep {
                limit: self.max_depth,
            },
            Some(self.pos),
        )
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.nesting += 1;
        if self.nesting > self.max_depth {
            return Err(self.too_deep());
        }
        Ok(())
    }

    fn leave(&mut self) {
        self.nesting -= 1;
    }

    fn join(&self, left: usize, right: usize) -> Result<usize, ParseError> {
        let height = left.max(right) + 1;
        if height > self.max_depth {
            return Err(self.too_deep());
        }
        Ok(height)
    }

    fn implication(&mut self) -> Parsed {
        let (mut left, mut height) = self.disjunction()?;
        while let Some(Token::Implies) = self.peek() {
            self.advance();
            let (right, right_height) = self.disjunction()?;
            height = self.join(height, right_height)?;
            left = left.implies(&right);
        }
        Ok((left, height))
    }

    fn disjunction(&mut self) -> Parsed {
        let (mut left, mut height) = self.conjunction()?;
        while let Some(Token::Or) = self.peek() {
            self.advance();
            let (right, right_height) = self.conjunction()?;
            height = self.join(height, right_height)?;
            left = left.or(&right);
        }
        Ok((left, height))
    }

    fn conjunction(&mut self) -> Parsed {
        let (mut left, mut height) = self.negation()?;
        while let Some(Token::And) = self.peek() {
            self.advance();
            let (right, right_height) = self.negation()?;
            height = self.join(height, right_height)?;
            left = left.and(&right);
        }
        Ok((left, height))
    }

    /// Consecutive `~` are counted in a loop, so a negation chain costs no
    /// recursion and is bounded before its operand is parsed.
    fn negation(&mut self) -> Parsed {
        let mut count = 0;
        while let Some(Token::Not) = self.peek() {
            self.advance();
            count += 1;
            if count > self.max_depth {
                return Err(self.too_deep());
            }
        }

        let (mut expr, operand_height) = self.primary()?;
        let height = operand_height + count;
        if height > self.max_depth {
            return Err(self.too_deep());
        }
        for _ in 0..count {
            expr = expr.not();
        }
        Ok((expr, height))
    }

    fn primary(&mut self) -> Parsed {
        let open = self.pos;
        match self.peek() {
            Some(Token::Identifier(name)) => {
                let expr = Expression::Variable(name.clone());
                self.advance();
                Ok((expr, 0))
            }
            Some(Token::LParen) => {
                self.advance();
                self.enter()?;
                let inner = self.implication()?;
                self.leave();
                match self.peek() {
                    Some(Token::RParen) => {
                        self.advance();
                        Ok(inner)
                    }
                    None => Err(ParseError::new(ParseErrorKind::UnclosedParen, Some(open))),
                    Some(_) => Err(ParseError::new(
                        ParseErrorKind::UnclosedParen,
                        Some(self.pos),
                    )),
                }
            }
            _ => Err(ParseError::new(
                ParseErrorKind::ExpectedOperand,
                Some(self.pos),
            )),
        }
    }
}

impl Expression {
    /// Parse an expression from a string
    ///
    /// Operators, loosest binding first: `=>` (implies), `|` (or),
    /// `&` (and), `~` (not). Parentheses regroup.
    ///
    /// # Examples
    ///
    /// ```
    /// use logical::Expression;
    ///
    /// let expr = Expression::parse("a & b | c")?;
    /// assert_eq!(expr.to_string(), "((a & b) | c)");
    /// # Ok::<(), logical::LogicError>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, LogicError> {
        Parser::default().parse(input)
    }
}

impl FromStr for Expression {
    type Err = LogicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Expression::parse(s)
    }
}
