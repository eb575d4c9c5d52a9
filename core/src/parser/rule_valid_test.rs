// Tests with valid expressions for each rule in the parser.

use crate::parser::{ExpressionParser, Rule};
use pest::Parser;
use pest::iterators::Pair;

fn contains_rule(pair: Pair<Rule>, target: Rule) -> bool {
    if pair.as_rule() == target {
        return true;
    }
    for inner in pair.into_inner() {
        if contains_rule(inner, target) {
            return true;
        }
    }
    false
}

macro_rules! rule_examples {
    ( $($rule:ident => [$($expr:expr),* $(,)?]),* $(,)? ) => {
        $(
            #[test]
            fn $rule() {
                let inputs = vec![$($expr),*];
                for input in inputs {
                    let result = ExpressionParser::parse(Rule::main, input)
                        .unwrap_or_else(|e| panic!("Failed to parse '{}': {}", input, e));
                    let root = result.into_iter().next().unwrap();
                    assert!(
                        contains_rule(root.clone(), Rule::$rule),
                        "Expected to find rule {:?} in parse tree for input '{}'",
                        Rule::$rule,
                        input
                    );
                }
            }
        )*
    };
}

rule_examples! {
    number => ["0", "42", "f 12345"],
    variable => ["x", "foo_bar", "x'", "_tmp", "v10"],
    lambda => ["\\x -> x", "\\f -> f 1", "\\x -> \\y -> x", "(\\x->x) 1"],
    application => ["f x", "f x y", "(f) (g 1)", "f \\x -> x"],
    section => ["(+)", "(-) 1 2", "( * )", "(/) x"],
    operator => ["(+)", "(-)"],
    grouped => ["(x)", "((1))", "(f 1 :: N)"],
    add => ["1 + 2", "x+y"],
    sub => ["1 - 2", "\\x -> x - 1"],
    mul => ["2 * 3"],
    div => ["6 / 2"],
    annotation => ["x :: N", "\\x -> x :: a -> a", "(x :: N) 1"],
    type_expr => ["x :: N", "x :: a -> b", "f :: (a -> b) -> c"],
    type_name => ["x :: N", "x :: Num"],
}

#[test]
fn test_invalid_expressions() {
    let inputs = [
        "",
        "\\ -> x",
        "\\x x",
        "(",
        "(1",
        "1 +",
        "x ::",
        "x :: ->",
        "1 :: N :: N",
        "(1 2 +)",
    ];
    for input in inputs {
        assert!(
            ExpressionParser::parse(Rule::main, input).is_err(),
            "Expected '{}' to be rejected",
            input
        );
    }
}
