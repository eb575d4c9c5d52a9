mod cases;

use indoc::indoc;

test_case!(
    declared_mismatch,
    declare: ["f :: N -> N", "y :: B"],
    input: "f y",
    assigned: indoc! {"
        @ a
          f (N->N)
          y B
    "},
    resolved: Err("Type mismatch: (N->N) vs B"),
);

test_case!(
    inline_mismatch,
    declare: ["f :: N -> N"],
    input: "f (1 :: M)",
    assigned: indoc! {"
        @ a
          f (N->N)
          ParenExpr b
            1 M
    "},
    resolved: Err("Type mismatch: (N->N) vs M"),
);

test_case!(
    mismatch_inside_lambda,
    declare: ["f :: N -> N", "2 :: B"],
    input: "\\x -> f 2",
    assigned: indoc! {"
        λ a
          x b
          @ c
            f (N->N)
            2 B
    "},
    resolved: Err("Type mismatch: (N->N) vs B"),
);

test_case!(
    too_many_placeholders,
    input: "a b c d e f g h i j k l m n",
    error: "Resource limit exceeded: Out of placeholder names: at most 26 distinct subexpressions are supported",
);
