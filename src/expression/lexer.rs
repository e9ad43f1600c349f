//! Tokenizer for propositional expressions

use super::error::LexError;
use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;
use std::sync::Arc;

/// A lexical token
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `~`
    Not,
    /// `&`
    And,
    /// `|`
    Or,
    /// `=>`
    Implies,
    /// A variable name matching `[A-Za-z_][A-Za-z0-9_]*`
    Identifier(Arc<str>),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Not => write!(f, "~"),
            Token::And => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::Implies => write!(f, "=>"),
            Token::Identifier(name) => write!(f, "{}", name),
        }
    }
}

/// A token together with the byte offset where it starts in the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    /// The token itself
    pub token: Token,
    /// Byte offset of the token's first character
    pub offset: usize,
}

impl SpannedToken {
    /// Pair a token with its source offset
    pub fn new(token: Token, offset: usize) -> Self {
        SpannedToken { token, offset }
    }
}

impl From<Token> for SpannedToken {
    fn from(token: Token) -> Self {
        SpannedToken { token, offset: 0 }
    }
}

/// Split source text into tokens
///
/// Whitespace is skipped. `=>` is matched as a single token before any
/// single-character operator is considered; a `=` not followed by `>` is an
/// error. Empty input produces an empty vector, leaving the "empty
/// expression" diagnosis to the parser.
///
/// # Examples
///
/// ```
/// use logical::expression::{tokenize, Token};
///
/// let tokens: Vec<Token> = tokenize("~rain => wet")?
///     .into_iter()
///     .map(|t| t.token)
///     .collect();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[2], Token::Implies);
/// # Ok::<(), logical::expression::LexError>(())
/// ```
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, LexError> {
    Lexer::new(source).collect()
}

struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Lexer {
            source,
            chars: source.char_indices().peekable(),
        }
    }

    fn identifier(&mut self, start: usize) -> Token {
        let mut end = self.source.len();
        while let Some(&(offset, c)) = self.chars.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                self.chars.next();
            } else {
                end = offset;
                break;
            }
        }
        Token::Identifier(Arc::from(&self.source[start..end]))
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<SpannedToken, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let (offset, c) = loop {
            let (offset, c) = self.chars.next()?;
            if !matches!(c, ' ' | '\t' | '\n' | '\r') {
                break (offset, c);
            }
        };

        let token = match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '~' => Token::Not,
            '&' => Token::And,
            '|' => Token::Or,
            '=' => match self.chars.peek() {
                Some(&(_, '>')) => {
                    self.chars.next();
                    Token::Implies
                }
                _ => {
                    return Some(Err(LexError {
                        character: '=',
                        position: offset,
                    }))
                }
            },
            c if c.is_ascii_alphabetic() || c == '_' => self.identifier(offset),
            other => {
                return Some(Err(LexError {
                    character: other,
                    position: offset,
                }))
            }
        };

        Some(Ok(SpannedToken::new(token, offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.token)
            .collect()
    }

    fn ident(name: &str) -> Token {
        Token::Identifier(Arc::from(name))
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize("  \t\n ").unwrap().is_empty());
    }

    #[test]
    fn test_all_token_kinds() {
        assert_eq!(
            kinds("(~a & b) | c => d"),
            vec![
                Token::LParen,
                Token::Not,
                ident("a"),
                Token::And,
                ident("b"),
                Token::RParen,
                Token::Or,
                ident("c"),
                Token::Implies,
                ident("d"),
            ]
        );
    }

    #[test]
    fn test_implies_without_spaces() {
        assert_eq!(kinds("a=>b"), vec![ident("a"), Token::Implies, ident("b")]);
    }

    #[test]
    fn test_identifier_text_preserved() {
        assert_eq!(
            kinds("Is_Mortal socrates2 _x"),
            vec![ident("Is_Mortal"), ident("socrates2"), ident("_x")]
        );
    }

    #[test]
    fn test_offsets() {
        let tokens = tokenize("ab  => (c)").unwrap();
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![0, 4, 7, 8, 9]);
    }

    #[test]
    fn test_unknown_character() {
        let err = tokenize("a & @b").unwrap_err();
        assert_eq!(err.character, '@');
        assert_eq!(err.position, 4);

        let err = tokenize("#").unwrap_err();
        assert_eq!(err.character, '#');
        assert_eq!(err.position, 0);
    }

    #[test]
    fn test_lone_equals_is_rejected() {
        let err = tokenize("a = b").unwrap_err();
        assert_eq!(err.character, '=');
        assert_eq!(err.position, 2);

        let err = tokenize("a =").unwrap_err();
        assert_eq!(err.position, 2);
    }

    #[test]
    fn test_leading_digit_is_rejected() {
        let err = tokenize("1a").unwrap_err();
        assert_eq!(err.character, '1');
        assert_eq!(err.position, 0);
    }

    #[test]
    fn test_greater_than_alone_is_rejected() {
        let err = tokenize("a > b").unwrap_err();
        assert_eq!(err.character, '>');
    }

    #[test]
    fn test_non_ascii_offset_is_byte_offset() {
        let err = tokenize("é & b").unwrap_err();
        assert_eq!(err.character, 'é');
        assert_eq!(err.position, 0);

        let err = tokenize("a & ü").unwrap_err();
        assert_eq!(err.position, 4);
    }

    #[test]
    fn test_token_display_spellings() {
        let rendered: Vec<String> = kinds("( ) ~ & | => x")
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(rendered, vec!["(", ")", "~", "&", "|", "=>", "x"]);
    }
}
