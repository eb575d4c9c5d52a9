mod cases;

use indoc::indoc;

test_case!(
    lambda_over_declared_function,
    declare: ["f :: N -> N"],
    input: "\\x -> f x",
    assigned: indoc! {"
        λ a
          x b
          @ c
            f (N->N)
            x b
    "},
    resolved: Ok(indoc! {"
        λ (N->N)
          x N
          @ N
            f (N->N)
            x N
    "}),
);

test_case!(
    applied_lambda,
    declare: ["f :: N -> N"],
    input: "(\\x -> f x) x",
    assigned: indoc! {"
        @ a
          ParenExpr b
            λ d
              x c
              @ e
                f (N->N)
                x c
          x c
    "},
    resolved: Ok(indoc! {"
        @ N
          ParenExpr (N->N)
            λ (N->N)
              x N
              @ N
                f (N->N)
                x N
          x N
    "}),
);

test_case!(
    curried_lambda,
    declare: ["g :: N -> N -> N"],
    input: "\\x -> \\y -> g x y",
    assigned: indoc! {"
        λ a
          x b
          λ c
            y d
            @ e
              @ f
                g (N->N->N)
                x b
              y d
    "},
    resolved: Ok(indoc! {"
        λ ((N->N)->(N->N))
          x (N->N)
          λ (N->N)
            y N
            @ N
              @ N
                g (N->N->N)
                x (N->N)
              y N
    "}),
);

test_case!(
    composition,
    declare: ["f :: N -> N", "g :: N -> B"],
    input: "\\x -> g (f x)",
    assigned: indoc! {"
        λ a
          x b
          @ c
            g (N->B)
            ParenExpr d
              @ e
                f (N->N)
                x b
    "},
    resolved: Ok(indoc! {"
        λ (N->(B))
          x N
          @ (B)
            g (N->B)
            ParenExpr N
              @ N
                f (N->N)
                x N
    "}),
);

test_case!(
    lambda_over_operator,
    declare: ["(/) :: N -> N -> N", "2 :: N"],
    input: "\\y -> y / 2",
    assigned: indoc! {"
        λ a
          y b
          @ c
            @ d
              / (N->N->N)
              y b
            2 N
    "},
    resolved: Ok(indoc! {"
        λ ((N->N)->())
          y (N->N)
          @ ()
            @ N
              / (N->N->N)
              y (N->N)
            2 N
    "}),
);

test_case!(
    identity,
    input: "\\x -> x",
    assigned: indoc! {"
        λ a
          x b
          x b
    "},
    resolved: Err("Abstraction error: parameter 'x' of type b is never constrained"),
);

test_case!(
    applied_identity,
    input: "(\\x -> x) 1",
    assigned: indoc! {"
        @ a
          ParenExpr b
            λ d
              x e
              x e
          1 c
    "},
    resolved: Err("Abstraction error: parameter 'x' of type e is never constrained"),
);

test_case!(
    unused_parameter,
    declare: ["f :: N -> N"],
    input: "\\x -> \\y -> f x",
    assigned: indoc! {"
        λ a
          x b
          λ c
            y d
            @ e
              f (N->N)
              x b
    "},
    resolved: Err("Abstraction error: parameter 'y' of type d is never constrained"),
);
