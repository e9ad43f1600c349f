use logical::{evaluate, parse, render, ExprNode, Expression, Limits, Parser};
use proptest::prelude::*;
use std::collections::HashMap;

const NAMES: [&str; 6] = ["a", "b", "c", "D", "e_1", "_x"];

fn arb_expression() -> impl Strategy<Value = Expression> {
    let leaf = prop::sample::select(NAMES.to_vec()).prop_map(Expression::variable);
    leaf.prop_recursive(6, 64, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| e.not()),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l.and(&r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| l.or(&r)),
            (inner.clone(), inner).prop_map(|(l, r)| l.implies(&r)),
        ]
    })
}

fn arb_valuation() -> impl Strategy<Value = HashMap<String, bool>> {
    prop::collection::vec(any::<bool>(), NAMES.len()).prop_map(|values| {
        NAMES
            .iter()
            .map(|name| name.to_string())
            .zip(values)
            .collect()
    })
}

/// A tree of exactly `height` levels mixing negations and left or right
/// leaning binary nodes, chosen by the bits of `shape`
fn deep_expression(height: usize, shape: u64) -> Expression {
    let mut expr = Expression::variable("a");
    for level in 0..height {
        let leaf = Expression::variable(NAMES[level % NAMES.len()]);
        expr = match (shape >> (level % 64)) & 3 {
            0 => expr.not(),
            1 => expr.and(&leaf),
            2 => leaf.or(&expr),
            _ => leaf.implies(&expr),
        };
    }
    expr
}

/// Independent evaluator used as an oracle
fn reference_eval(expr: &Expression, valuation: &HashMap<String, bool>) -> bool {
    expr.fold(|node: ExprNode<bool>| match node {
        ExprNode::Variable(name) => valuation[name],
        ExprNode::Not(v) => !v,
        ExprNode::And(l, r) => l && r,
        ExprNode::Or(l, r) => l || r,
        ExprNode::Implies(l, r) => !l || r,
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_render_then_parse_round_trips(expr in arb_expression()) {
        let text = render(&expr);
        prop_assert_eq!(parse(&text).unwrap(), expr);
    }

    #[test]
    fn prop_printer_is_idempotent(expr in arb_expression()) {
        let once = render(&expr);
        let twice = render(&parse(&once).unwrap());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_evaluate_matches_reference(expr in arb_expression(), valuation in arb_valuation()) {
        prop_assert_eq!(
            evaluate(&expr, &valuation).unwrap(),
            reference_eval(&expr, &valuation)
        );
    }

    #[test]
    fn prop_implication_is_not_or(
        p in arb_expression(),
        q in arb_expression(),
        valuation in arb_valuation(),
    ) {
        let implication = p.implies(&q);
        let expanded = p.not().or(&q);
        prop_assert_eq!(
            evaluate(&implication, &valuation).unwrap(),
            evaluate(&expanded, &valuation).unwrap()
        );
    }

    #[test]
    fn prop_double_negation_is_equivalent(expr in arb_expression()) {
        let doubled = expr.not().not();
        prop_assert_ne!(&doubled, &expr);
        prop_assert!(doubled.equivalent_to(&expr).unwrap());
    }

    #[test]
    fn prop_excluded_middle(expr in arb_expression()) {
        prop_assert!(expr.or(&expr.not()).is_tautology().unwrap());
        prop_assert!(expr.and(&expr.not()).is_contradiction().unwrap());
    }

    #[test]
    fn prop_whitespace_is_ignored(expr in arb_expression()) {
        let spaced = render(&expr)
            .replace('(', " ( ")
            .replace(')', " ) ")
            .replace("=>", "\t=>\n");
        prop_assert_eq!(parse(&spaced).unwrap(), expr);
    }

    #[test]
    fn prop_deep_trees_round_trip_under_their_limit(
        max_depth in 1usize..=512,
        slack in 0usize..4,
        shape in any::<u64>(),
    ) {
        let height = max_depth.saturating_sub(slack);
        let expr = deep_expression(height, shape);
        prop_assert_eq!(expr.depth(), height);

        let parser = Parser::with_limits(Limits::new().with_max_depth(max_depth));
        let once = render(&expr);
        let reparsed = parser.parse(&once).unwrap();
        prop_assert_eq!(render(&reparsed), once);
        prop_assert_eq!(reparsed, expr);
    }
}
