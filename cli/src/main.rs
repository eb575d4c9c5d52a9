use clap::Parser;
use hmlabel::{CanonicalForm, Error, Session, SessionOptions, render_error};
use hmlabel_core::semantic::display_symbol;
use miette::Result;
use reedline::{
    DefaultPrompt, DefaultPromptSegment, EditCommand, Emacs, KeyCode, KeyModifiers, Keybindings,
    Reedline, ReedlineEvent, Signal, default_emacs_keybindings,
};
use std::io::BufRead;
use std::io::BufReader;

/// hmlabel - Placeholder labelling and structural inference for lambda expressions
#[derive(Parser, Debug)]
#[command(name = "hmlabel")]
#[command(about = "Label and infer types of lambda expressions", long_about = None)]
struct Args {
    /// Forget declarations after every expression
    #[arg(long)]
    fresh: bool,

    /// Only print the trees, not the annotation and resolution tables
    #[arg(long)]
    no_tables: bool,

    /// Expression to check (if not provided, reads from stdin)
    expression: Option<String>,
}

fn add_keybindings(keybindings: &mut Keybindings) {
    keybindings.add_binding(
        KeyModifiers::ALT,
        KeyCode::Enter,
        ReedlineEvent::Edit(vec![EditCommand::InsertNewline]),
    );
}

fn setup_reedline() -> (Reedline, DefaultPrompt) {
    let mut keybindings = default_emacs_keybindings();
    add_keybindings(&mut keybindings);

    let edit_mode = Box::new(Emacs::new(keybindings));
    let line_editor = Reedline::create().with_edit_mode(edit_mode);

    let prompt = DefaultPrompt::new(
        DefaultPromptSegment::Basic("hm".to_string()),
        DefaultPromptSegment::Empty,
    );

    (line_editor, prompt)
}

/// Output for one submission, plus the error that stopped it, if any.
struct Report {
    output: String,
    error: Option<Error>,
}

/// Labels `input`, then infers it.
///
/// The assigned tree and annotation table are part of the output even when
/// inference fails. Tables are listed newest entry first.
fn report(session: &mut Session, input: &str, tables: bool) -> Report {
    let labeled = match session.label(input) {
        Ok(labeled) => labeled,
        Err(e) => {
            return Report {
                output: String::new(),
                error: Some(e),
            };
        }
    };

    let mut output = format!("=== Assigned ===\n{}", labeled.display());
    if tables {
        output.push_str("=== Annotations ===\n");
        for (key, ty) in labeled.annotations().iter().rev() {
            let key = match key {
                CanonicalForm::Text(text) => text.clone(),
                CanonicalForm::Node(id) => {
                    format!("{} {}", id, display_symbol(labeled.tree(), *id))
                }
            };
            output.push_str(&format!("{} :: {}\n", key, ty));
        }
    }

    let checked = match labeled.infer() {
        Ok(checked) => checked,
        Err(e) => {
            return Report {
                output,
                error: Some(e),
            };
        }
    };

    output.push_str(&format!("=== Resolved ===\n{}", checked.display()));
    if tables {
        output.push_str("=== Resolutions ===\n");
        for (placeholder, ty) in checked.resolutions().iter().rev() {
            output.push_str(&format!("{} => {}\n", placeholder, ty));
        }
    }

    Report {
        output,
        error: None,
    }
}

fn interpret_input(session: &mut Session, input: &str, tables: bool) {
    if input.trim().is_empty() {
        return;
    }

    let Report { output, error } = report(session, input, tables);
    print!("{}", output);
    if let Some(e) = error {
        render_error(&e);
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut session = Session::new(SessionOptions {
        retain_annotations: !args.fresh,
        ..SessionOptions::default()
    });
    let tables = !args.no_tables;

    // Check if we have a direct expression argument
    if let Some(expr) = args.expression {
        interpret_input(&mut session, &expr, tables);
        return Ok(());
    }

    // Otherwise, check if we're in interactive or pipe mode
    let is_interactive = atty::is(atty::Stream::Stdin);

    if is_interactive {
        let (mut line_editor, prompt) = setup_reedline();

        println!("hmlabel REPL - Type expressions to label (Ctrl+D or Ctrl+C to exit)");
        println!("Declare types with `name :: T -> T`; `:reset` forgets them");

        loop {
            let sig = line_editor
                .read_line(&prompt)
                .map_err(|e| miette::miette!("Reedline error: {e}"))?;

            match sig {
                Signal::Success(buffer) if buffer.trim() == ":reset" => {
                    session.reset();
                    println!("Declarations cleared");
                }
                Signal::Success(buffer) => {
                    interpret_input(&mut session, buffer.as_ref(), tables);
                }
                Signal::CtrlD | Signal::CtrlC => {
                    println!("\nGoodbye!");
                    return Ok(());
                }
            }
        }
    } else {
        // Pipe/stdin mode
        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin.lock());

        for line in reader.lines() {
            let line = line.map_err(|e| miette::miette!("Error reading line from stdin: {e}"))?;
            interpret_input(&mut session, &line, tables);
        }
    }

    Ok(())
}
