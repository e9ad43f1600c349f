use proc_macro::TokenStream;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::{parse_macro_input, Ident, Token};

/// Formula tree as written at the macro call site
enum Formula {
    Binding(Ident),
    Variable(syn::LitStr),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
}

impl Formula {
    /// Generate code building this formula through the `Expression` method API
    ///
    /// Sub-expressions are passed by reference; the methods share children
    /// through `Arc` so nothing is deep-copied.
    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Formula::Binding(ident) => {
                quote! {
                    ::core::clone::Clone::clone(&#ident)
                }
            }
            Formula::Variable(lit) => {
                quote! {
                    ::logical::Expression::variable(#lit)
                }
            }
            Formula::Not(inner) => {
                let inner_tokens = inner.to_tokens();
                quote! {
                    (&(#inner_tokens)).not()
                }
            }
            Formula::And(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    (&(#left_tokens)).and(&(#right_tokens))
                }
            }
            Formula::Or(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    (&(#left_tokens)).or(&(#right_tokens))
                }
            }
            Formula::Implies(left, right) => {
                let left_tokens = left.to_tokens();
                let right_tokens = right.to_tokens();
                quote! {
                    (&(#left_tokens)).implies(&(#right_tokens))
                }
            }
        }
    }
}

struct FormulaParser {
    formula: Formula,
}

impl Parse for FormulaParser {
    fn parse(input: ParseStream) -> Result<Self> {
        let formula = parse_implies(input)?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after formula"));
        }
        Ok(FormulaParser { formula })
    }
}

/// Parse implications (lowest precedence, left-associative)
fn parse_implies(input: ParseStream) -> Result<Formula> {
    let mut left = parse_or(input)?;

    while input.peek(Token![=>]) {
        input.parse::<Token![=>]>()?;
        let right = parse_or(input)?;
        left = Formula::Implies(Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn parse_or(input: ParseStream) -> Result<Formula> {
    let mut left = parse_and(input)?;

    while input.peek(Token![|]) && !input.peek(Token![||]) {
        input.parse::<Token![|]>()?;
        let right = parse_and(input)?;
        left = Formula::Or(Box::new(left), Box::new(right));
    }

    Ok(left)
}

fn parse_and(input: ParseStream) -> Result<Formula> {
    let mut left = parse_unary(input)?;

    while input.peek(Token![&]) && !input.peek(Token![&&]) {
        input.parse::<Token![&]>()?;
        let right = parse_unary(input)?;
        left = Formula::And(Box::new(left), Box::new(right));
    }

    Ok(left)
}

/// Parse negations; `!` and `~` are interchangeable
fn parse_unary(input: ParseStream) -> Result<Formula> {
    if input.peek(Token![!]) {
        input.parse::<Token![!]>()?;
        let inner = parse_unary(input)?;
        Ok(Formula::Not(Box::new(inner)))
    } else if input.peek(Token![~]) {
        input.parse::<Token![~]>()?;
        let inner = parse_unary(input)?;
        Ok(Formula::Not(Box::new(inner)))
    } else {
        parse_atom(input)
    }
}

fn parse_atom(input: ParseStream) -> Result<Formula> {
    if input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in input);
        let inner = parse_implies(&content)?;
        if !content.is_empty() {
            return Err(content.error("unexpected tokens inside parentheses"));
        }
        Ok(inner)
    } else if input.peek(syn::LitStr) {
        let lit: syn::LitStr = input.parse()?;
        validate_name(&lit)?;
        Ok(Formula::Variable(lit))
    } else if input.peek(Ident) {
        let ident: Ident = input.parse()?;
        Ok(Formula::Binding(ident))
    } else {
        Err(input.error("expected a variable name, an expression binding or `(`"))
    }
}

/// Reject variable names the runtime lexer could never produce
fn validate_name(lit: &syn::LitStr) -> Result<()> {
    let name = lit.value();
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(syn::Error::new(
            lit.span(),
            "variable names must match [A-Za-z_][A-Za-z0-9_]*",
        ))
    }
}

/// The `formula!` procedural macro for propositional formulas
///
/// Builds a `logical::Expression` with the same precedence and associativity
/// as the runtime parser.
///
/// # Supported Syntax
///
/// - `"p"` - String literal (creates `Expression::variable("p")`)
/// - `p` - Any `Expression` binding in scope (cloned)
/// - `~p` or `!p` - Negation
/// - `p & q` - Conjunction
/// - `p | q` - Disjunction
/// - `p => q` - Implication
/// - `(p => q) & r` - Parentheses for grouping
///
/// # Operator Precedence
///
/// From tightest to loosest:
/// 1. `~` / `!`
/// 2. `&`
/// 3. `|`
/// 4. `=>`
///
/// All binary operators are left-associative, so `"a" => "b" => "c"` builds
/// `(a => b) => c`.
///
/// # Examples
///
/// ```ignore
/// use logical::{formula, Expression};
///
/// let modus_ponens = formula!(("p" => "q") & "p" => "q");
/// assert!(modus_ponens.is_tautology()?);
///
/// let p = Expression::variable("p");
/// let excluded_middle = formula!(p | ~p);
/// ```
#[proc_macro]
pub fn formula(input: TokenStream) -> TokenStream {
    let parser = parse_macro_input!(input as FormulaParser);
    let tokens = parser.formula.to_tokens();
    TokenStream::from(tokens)
}
