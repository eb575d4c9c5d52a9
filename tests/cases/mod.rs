use hmlabel::{Error, Session};
use pretty_assertions::assert_eq;

/// Declares a test that runs `input` through a fresh [`Session`].
///
/// `declare` submissions are checked first so their annotations are in
/// effect. `assigned` is the tree after placeholder assignment, `resolved`
/// the tree after inference or the error message inference fails with.
/// Inputs that fail before inference use `error` instead.
#[macro_export]
macro_rules! test_case {
    (
        $name:ident,
        $(declare: [$($decl:expr),* $(,)?],)?
        input: $input:expr,
        assigned: $assigned:expr,
        resolved: $resolved:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let declarations: &[&str] = &[$($($decl),*)?];
            $crate::cases::run(declarations, $input, $assigned, $resolved);
        }
    };
    (
        $name:ident,
        $(declare: [$($decl:expr),* $(,)?],)?
        input: $input:expr,
        error: $error:expr $(,)?
    ) => {
        #[test]
        fn $name() {
            let declarations: &[&str] = &[$($($decl),*)?];
            $crate::cases::run_failing(declarations, $input, $error);
        }
    };
}

fn session_with(declarations: &[&str]) -> Session {
    let mut session = Session::default();
    for declaration in declarations {
        if let Err(e) = session.check(declaration) {
            panic!("declaration {:?} failed: {}", declaration, message(&e));
        }
    }
    session
}

/// First diagnostic message, or the error itself when it carries none.
pub fn message(error: &Error) -> String {
    match error.diagnostics().first() {
        Some(diagnostic) => diagnostic.message.clone(),
        None => error.to_string(),
    }
}

pub fn run(declarations: &[&str], input: &str, assigned: &str, resolved: Result<&str, &str>) {
    let mut session = session_with(declarations);

    let labeled = match session.label(input) {
        Ok(labeled) => labeled,
        Err(e) => panic!("labelling {:?} failed: {}", input, message(&e)),
    };
    assert_eq!(labeled.display().to_string(), assigned, "assigned tree");

    let actual = labeled
        .infer()
        .map(|checked| checked.display().to_string())
        .map_err(|e| message(&e));
    assert_eq!(
        actual.as_ref().map(String::as_str).map_err(String::as_str),
        resolved,
        "resolved tree"
    );
}

pub fn run_failing(declarations: &[&str], input: &str, error: &str) {
    let mut session = session_with(declarations);

    match session.label(input) {
        Ok(labeled) => panic!("expected {:?} to fail, got:\n{}", input, labeled.display()),
        Err(e) => assert_eq!(message(&e), error),
    }
}
