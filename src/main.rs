use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use moose::{Run, error::RenderMode, interpret_with, interpreter::evaluator::Evaluator};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Exit status when the script cannot be read (`EX_NOINPUT`).
const EXIT_NO_INPUT: u8 = 66;

/// moose evaluates prefix-notation arithmetic such as `(+ 1 (* 2 3))`.
///
/// Without a script, moose starts an interactive prompt that evaluates one
/// line at a time.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print the canonical form of the parsed expression before its value.
    #[arg(long)]
    ast: bool,

    /// The script to run. Starts the interactive prompt when omitted.
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match &args.script {
        Some(path) => run_file(path, args.ast),
        None => run_prompt(args.ast),
    }
}

/// Installs a stderr subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=moose=trace`.
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                        .with_target(true)
                                                        .with_level(true))
                                      .with(EnvFilter::from_default_env())
                                      .init();
    }
}

/// Runs a script once and maps its outcome onto the exit status.
fn run_file(path: &Path, print_ast: bool) -> ExitCode {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Failed to read the input file '{}': {e}", path.display());
            return ExitCode::from(EXIT_NO_INPUT);
        },
    };

    let display = path.display().to_string();
    let run = interpret_with(&Evaluator::new(), &source);
    report(&run, &source, RenderMode::File { path: &display }, print_ast);

    ExitCode::from(run.exit_code())
}

/// Evaluates stdin line by line until end of input. Failing lines print a
/// diagnostic and the prompt carries on.
fn run_prompt(print_ast: bool) -> ExitCode {
    let evaluator = Evaluator::new();
    let mut input = io::stdin().lock();
    let mut line = String::new();

    loop {
        print!("> ");
        if let Err(e) = io::stdout().flush() {
            eprintln!("Failed to write the prompt: {e}");
            return ExitCode::FAILURE;
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                println!();
                return ExitCode::SUCCESS;
            },
            Ok(_) => {},
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                return ExitCode::FAILURE;
            },
        }

        let source = line.trim_end_matches(['\n', '\r']);
        if source.trim().is_empty() {
            continue;
        }

        let run = interpret_with(&evaluator, source);
        report(&run, source, RenderMode::Interactive, print_ast);
    }
}

/// Prints the value of a successful run to stdout, or its diagnostic to
/// stderr.
fn report(run: &Run, source: &str, mode: RenderMode<'_>, print_ast: bool) {
    match &run.result {
        Ok(outcome) => {
            if print_ast {
                println!("{}", outcome.expr);
            }
            println!("{}", outcome.formatted());
        },
        Err(_) => {
            if let Some(diagnostic) = run.render_error(source, mode) {
                eprintln!("{diagnostic}");
            }
        },
    }
}
