//! Command line front end for the logical expression library

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use logical::{tokenize, Expression, Limits, Token};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "logical")]
#[command(about = "Parse, print and evaluate propositional logic formulas")]
#[command(
    long_about = "Formulas use ~ (not), & (and), | (or) and => (implies), loosest last.\nAll binary operators are left-associative: a => b => c means (a => b) => c."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log each processed formula to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Maximum expression depth (tree height and parenthesis nesting)
    #[arg(long, global = true, value_name = "N")]
    max_depth: Option<usize>,

    /// Maximum number of variables a truth table may enumerate
    #[arg(long, global = true, value_name = "N")]
    max_variables: Option<usize>,
}

#[derive(Args, Debug)]
struct Source {
    /// Formula to process
    #[arg(value_name = "EXPR", required_unless_present = "file")]
    expr: Option<String>,

    /// Read formulas from a file, one per line (blank lines and lines starting with % are skipped)
    #[arg(short = 'f', long = "file", value_name = "PATH", conflicts_with = "expr")]
    file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a formula with their byte offsets
    Tokens {
        #[command(flatten)]
        source: Source,
    },
    /// Print the canonical fully parenthesized form
    Render {
        #[command(flatten)]
        source: Source,
    },
    /// Evaluate under the given variable assignments
    ///
    /// Every variable in the formula must be assigned; values accept
    /// true/false, t/f, 1/0 (case-insensitive).
    Eval {
        #[command(flatten)]
        source: Source,

        /// Variable assignment, repeatable (e.g. -s rain=true -s wet=0)
        #[arg(short = 's', long = "set", value_name = "NAME=VALUE", value_parser = parse_assignment)]
        assignments: Vec<(String, bool)>,
    },
    /// Print the truth table and classify the formula
    Table {
        #[command(flatten)]
        source: Source,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut limits = Limits::default();
    if let Some(depth) = cli.max_depth {
        limits = limits.with_max_depth(depth);
    }
    if let Some(vars) = cli.max_variables {
        limits = limits.with_max_table_variables(vars);
    }

    let result = match &cli.command {
        Commands::Tokens { source } => tokens_command(source),
        Commands::Render { source } => render_command(source, &limits),
        Commands::Eval {
            source,
            assignments,
        } => eval_command(source, assignments, &limits),
        Commands::Table { source } => table_command(source, &limits),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "logical=debug" } else { "logical=warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .init();
}

fn parse_assignment(s: &str) -> Result<(String, bool), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing variable name in '{}'", s));
    }
    let value = match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => true,
        "false" | "f" | "0" => false,
        other => return Err(format!("invalid truth value '{}' for {}", other, name)),
    };
    Ok((name.to_string(), value))
}

/// Formulas named by the command line, in order
fn load_formulas(source: &Source) -> Result<Vec<String>> {
    if let Some(expr) = &source.expr {
        return Ok(vec![expr.clone()]);
    }
    let Some(path) = &source.file else {
        bail!("no formula given; pass EXPR or --file");
    };

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    let formulas: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('%'))
        .map(str::to_string)
        .collect();
    debug!(path = %path.display(), count = formulas.len(), "loaded formulas");
    Ok(formulas)
}

fn parse_formula(text: &str, limits: &Limits) -> Result<Expression> {
    let expr = logical::Parser::with_limits(*limits)
        .parse(text)
        .with_context(|| format!("in formula '{}'", text))?;
    debug!(formula = %text, canonical = %expr, "parsed formula");
    Ok(expr)
}

fn token_kind(token: &Token) -> &'static str {
    match token {
        Token::LParen => "LPAREN",
        Token::RParen => "RPAREN",
        Token::Not => "NOT",
        Token::And => "AND",
        Token::Or => "OR",
        Token::Implies => "IMPLIES",
        Token::Identifier(_) => "IDENTIFIER",
    }
}

fn tokens_command(source: &Source) -> Result<()> {
    for text in load_formulas(source)? {
        let tokens = tokenize(&text).with_context(|| format!("in formula '{}'", text))?;
        for spanned in tokens {
            println!(
                "{:>4}  {:<10}  {}",
                spanned.offset,
                token_kind(&spanned.token),
                spanned.token
            );
        }
    }
    Ok(())
}

fn render_command(source: &Source, limits: &Limits) -> Result<()> {
    for text in load_formulas(source)? {
        let expr = parse_formula(&text, limits)?;
        println!("{}", expr);
    }
    Ok(())
}

fn eval_command(source: &Source, assignments: &[(String, bool)], limits: &Limits) -> Result<()> {
    let valuation: HashMap<&str, bool> = assignments
        .iter()
        .map(|(name, value)| (name.as_str(), *value))
        .collect();

    for text in load_formulas(source)? {
        let expr = parse_formula(&text, limits)?;
        let value = expr
            .evaluate(&valuation)
            .with_context(|| format!("in formula '{}'", text))?;
        debug!(formula = %expr, value, "evaluated formula");
        println!("{}", value);
    }
    Ok(())
}

fn table_command(source: &Source, limits: &Limits) -> Result<()> {
    for (i, text) in load_formulas(source)?.iter().enumerate() {
        let expr = parse_formula(text, limits)?;
        let table = expr
            .truth_table_with_limits(limits)
            .with_context(|| format!("in formula '{}'", text))?;

        if i > 0 {
            println!();
        }
        print!("{}", table);

        let class = if table.is_tautology() {
            "tautology"
        } else if table.is_contradiction() {
            "contradiction"
        } else {
            "contingent"
        };
        println!("{} ({} of {} rows true)", class, table.models().count(), table.rows().len());
    }
    Ok(())
}
