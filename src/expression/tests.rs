//! Tests for the expression module

use super::*;
use crate::formula;
use std::collections::HashMap;

fn var(name: &str) -> Expression {
    Expression::variable(name)
}

fn canonical(source: &str) -> String {
    Expression::parse(source).unwrap().to_string()
}

#[test]
fn test_variables_sorted_and_distinct() {
    let expr = Expression::parse("c & (a | c) => b").unwrap();
    let vars: Vec<&str> = expr.variables().into_iter().collect();
    assert_eq!(vars, vec!["a", "b", "c"]);
}

#[test]
fn test_as_variable() {
    assert_eq!(var("p").as_variable(), Some("p"));
    assert_eq!(var("p").not().as_variable(), None);
}

// ========== Display and Parsing Round-trip Tests ==========
// Canonical output fully parenthesizes, so these pin down how the parser
// grouped its input.

#[test]
fn test_round_trip_concrete() {
    let expr = var("A").and(&var("B").or(&var("C")));
    let display = expr.to_string();
    assert_eq!(display, "(A & (B | C))");
    assert_eq!(Expression::parse(&display).unwrap(), expr);
}

#[test]
fn test_implication_is_left_associative() {
    assert_eq!(canonical("A => B => C"), "((A => B) => C)");
    assert_eq!(canonical("A => (B => C)"), "(A => (B => C))");
}

#[test]
fn test_and_or_left_associative() {
    assert_eq!(canonical("a & b & c"), "((a & b) & c)");
    assert_eq!(canonical("a | b | c"), "((a | b) | c)");
}

#[test]
fn test_precedence_and_over_or() {
    assert_eq!(canonical("A & B | C"), "((A & B) | C)");
    assert_eq!(canonical("A | B & C"), "(A | (B & C))");
}

#[test]
fn test_precedence_or_over_implies() {
    assert_eq!(canonical("a | b => c & d"), "((a | b) => (c & d))");
    assert_eq!(canonical("a => b | c"), "(a => (b | c))");
}

#[test]
fn test_not_binds_tightest() {
    assert_eq!(canonical("~A & B"), "((~A) & B)");
    assert_eq!(canonical("~(A & B)"), "(~(A & B))");
    assert_eq!(canonical("~A => ~B"), "((~A) => (~B))");
}

#[test]
fn test_double_negation_nests() {
    let expr = Expression::parse("~~A").unwrap();
    assert_eq!(expr, var("A").not().not());
    assert_eq!(expr.to_string(), "(~(~A))");
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(canonical("(a | b) & c"), "((a | b) & c)");
    assert_eq!(canonical("((a))"), "a");
    assert_eq!(canonical("(~(a))"), "(~a)");
}

#[test]
fn test_whitespace_insensitive() {
    assert_eq!(canonical("a&b|~c=>d"), canonical("  a &\tb |\n~ c => d "));
}

#[test]
fn test_printer_is_idempotent() {
    for source in ["a", "~~a", "a => b => c", "~(a | b) & c => ~d", "x | y & z"] {
        let once = canonical(source);
        assert_eq!(canonical(&once), once, "{}", source);
    }
}

#[test]
fn test_round_trip_of_built_trees() {
    let a = var("a");
    let b = var("b");
    let c = var("c");
    let trees = [
        a.implies(&b.implies(&c)),
        a.implies(&b).implies(&c),
        a.or(&b).not().and(&c.not().not()),
        a.and(&b.and(&c)),
        a.or(&b.or(&c)),
    ];
    for tree in trees {
        assert_eq!(Expression::parse(&tree.to_string()).unwrap(), tree);
    }
}

// ========== Evaluation ==========

#[test]
fn test_evaluate_parsed_formula() {
    let expr = Expression::parse("(rain | sprinkler) => wet").unwrap();
    let mut valuation = HashMap::new();
    valuation.insert("rain", false);
    valuation.insert("sprinkler", true);
    valuation.insert("wet", false);
    assert!(!expr.evaluate(&valuation).unwrap());

    valuation.insert("wet", true);
    assert!(expr.evaluate(&valuation).unwrap());
}

#[test]
fn test_extra_valuation_entries_ignored() {
    let expr = Expression::parse("a").unwrap();
    let mut valuation = HashMap::new();
    valuation.insert("a", true);
    valuation.insert("unused", false);
    assert!(expr.evaluate(&valuation).unwrap());
}

// ========== formula! macro ==========

#[test]
fn test_formula_macro_string_literals() {
    let expr = formula!("a" & "b" | "c");
    assert_eq!(expr, Expression::parse("a & b | c").unwrap());
}

#[test]
fn test_formula_macro_bindings() {
    let a = var("a");
    let b = var("b");
    let expr = formula!(a => b);
    assert_eq!(expr, a.implies(&b));
    // bindings are cloned, not moved
    assert_eq!(a, var("a"));
}

#[test]
fn test_formula_macro_negation_spellings() {
    assert_eq!(formula!(~"a"), var("a").not());
    assert_eq!(formula!(!"a"), var("a").not());
    assert_eq!(formula!(~~"a"), var("a").not().not());
}

#[test]
fn test_formula_macro_precedence_and_associativity() {
    assert_eq!(
        formula!("a" => "b" => "c"),
        Expression::parse("a => b => c").unwrap()
    );
    assert_eq!(
        formula!(~"a" & "b" | "c" => "d"),
        Expression::parse("~a & b | c => d").unwrap()
    );
    assert_eq!(
        formula!(~("a" & "b")),
        Expression::parse("~(a & b)").unwrap()
    );
}

#[test]
fn test_formula_macro_with_sub_expressions() {
    let premise = formula!("p" => "q");
    let modus_ponens = formula!(premise & "p" => "q");
    assert!(modus_ponens.is_tautology().unwrap());
}

#[test]
fn test_parse_display_operator_macro_agree() {
    let a = var("a");
    let b = var("b");

    let parsed = Expression::parse("a & ~b | ~a & b").unwrap();
    let built = a.and(&b.not()).or(&a.not().and(&b));
    let operators = (&a & &!&b) | (&!&a & &b);
    let macro_built = formula!(a & ~b | ~a & b);

    assert_eq!(parsed, built);
    assert_eq!(parsed, operators);
    assert_eq!(parsed, macro_built);
    assert_eq!(parsed.to_string(), "((a & (~b)) | ((~a) & b))");
}

// ========== Analysis ==========

#[test]
fn test_structural_versus_logical_equality() {
    let ab = Expression::parse("a & b").unwrap();
    let ba = Expression::parse("b & a").unwrap();
    assert_ne!(ab, ba);
    assert!(ab.equivalent_to(&ba).unwrap());
}

#[test]
fn test_de_morgan() {
    let pairs = [
        ("~(a & b)", "~a | ~b"),
        ("~(a | b)", "~a & ~b"),
        ("a => b", "~a | b"),
        ("~~a", "a"),
    ];
    for (left, right) in pairs {
        let l = Expression::parse(left).unwrap();
        let r = Expression::parse(right).unwrap();
        assert!(l.equivalent_to(&r).unwrap(), "{} == {}", left, right);
    }
}

#[test]
fn test_built_trees_checked_by_parser_limit() {
    let limits = crate::Limits::new().with_max_depth(40);
    let parser = Parser::with_limits(limits);

    let mut expr = var("a");
    for i in 0..40 {
        expr = if i % 2 == 0 { expr.not() } else { expr.or(&var("b")) };
    }
    assert_eq!(expr.depth(), 40);
    assert_eq!(parser.parse(&expr.to_string()).unwrap(), expr);

    let deeper = expr.and(&var("c"));
    assert_eq!(deeper.depth(), 41);
    assert!(parser.parse(&deeper.to_string()).is_err());
}

#[test]
fn test_expression_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Expression>();
    assert_send_sync::<TruthTable>();
}
