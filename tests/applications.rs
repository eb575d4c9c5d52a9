mod cases;

use indoc::indoc;

test_case!(
    number,
    input: "42",
    assigned: "42 a\n",
    resolved: Ok("42 a\n"),
);

test_case!(
    unconstrained_application,
    input: "f 1",
    assigned: indoc! {"
        @ a
          f b
          1 c
    "},
    resolved: Ok(indoc! {"
        @ b
          f b
          1 b
    "}),
);

test_case!(
    repeated_argument_shares_placeholder,
    input: "f x x",
    assigned: indoc! {"
        @ a
          @ b
            f d
            x c
          x c
    "},
    resolved: Ok(indoc! {"
        @ d
          @ d
            f d
            x d
          x d
    "}),
);

test_case!(
    nested_application,
    declare: ["f :: N -> N"],
    input: "f (f 1)",
    assigned: indoc! {"
        @ a
          f (N->N)
          ParenExpr b
            @ c
              f (N->N)
              1 d
    "},
    resolved: Ok(indoc! {"
        @ (N)
          f (N->N)
          ParenExpr N
            @ N
              f (N->N)
              1 N
    "}),
);

test_case!(
    chained_functions,
    declare: ["f :: N -> N", "g :: N -> B"],
    input: "g (f 1)",
    assigned: indoc! {"
        @ a
          g (N->B)
          ParenExpr b
            @ c
              f (N->N)
              1 d
    "},
    resolved: Ok(indoc! {"
        @ (B)
          g (N->B)
          ParenExpr N
            @ N
              f (N->N)
              1 N
    "}),
);

test_case!(
    exact_argument_leaves_empty_remainder,
    declare: ["f :: N", "1 :: N"],
    input: "f 1",
    assigned: indoc! {"
        @ a
          f N
          1 N
    "},
    resolved: Ok(indoc! {"
        @ ()
          f N
          1 N
    "}),
);

test_case!(
    one_letter_declared_type_is_halved,
    declare: ["f :: k -> N", "y :: k"],
    input: "f y",
    assigned: indoc! {"
        @ a
          f (k->N)
          y k
    "},
    resolved: Ok(indoc! {"
        @ k
          f (k->N)
          y N
    "}),
);
