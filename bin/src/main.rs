use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use interpreter::Interpreter;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

mod report;

use report::{Diagnostic, DiagnosticPrinter};

/// Runs Tally programs: `$name = expr` assignments and `PRINT expr, ...`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Program file to run.
    #[arg(required_unless_present = "eval", conflicts_with = "eval")]
    file: Option<PathBuf>,

    /// Run SOURCE directly instead of reading a file.
    #[arg(short, long, value_name = "SOURCE")]
    eval: Option<String>,

    /// Print the token sequence before parsing.
    #[arg(long)]
    tokens: bool,

    /// Print the parsed statements before running them.
    #[arg(long)]
    ast: bool,

    /// Print every variable after the program finishes.
    #[arg(long)]
    vars: bool,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Args {
    fn source(&self) -> io::Result<String> {
        match (&self.eval, &self.file) {
            (Some(source), _) => Ok(source.clone()),
            (None, Some(path)) => fs::read_to_string(path),
            (None, None) => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "no program given",
            )),
        }
    }
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args, source: &str) -> Result<(), Diagnostic> {
    let tokens = lexer::lex(source)?;
    let mut stdout = io::stdout().lock();
    if args.tokens {
        for token in &tokens {
            writeln!(stdout, "{:>4} {token}", token.offset)?;
        }
    }

    let statements = parser::parse(&tokens)?;
    if args.ast {
        for statement in &statements {
            writeln!(stdout, "{statement}")?;
        }
    }

    let mut interpreter = Interpreter::new(stdout);
    interpreter.interpret(&statements)?;

    if args.vars {
        let lines: Vec<String> = interpreter
            .variables()
            .sorted()
            .into_iter()
            .map(|(name, value)| format!("${name} = {}", value.describe()))
            .collect();
        let mut stdout = interpreter.into_output();
        for line in lines {
            writeln!(stdout, "{line}")?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args.log_level);

    let source = match args.source() {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "failed to read program");
            match &args.file {
                Some(path) => eprintln!("Failed to read '{}': {e}", path.display()),
                None => eprintln!("{e}"),
            }
            return ExitCode::from(2);
        }
    };
    debug!(chars = source.chars().count(), "program loaded");

    match run(&args, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(diagnostic) => {
            debug!(kind = %diagnostic.kind(), "program failed");
            if DiagnosticPrinter::new(&source).eprint(&diagnostic).is_err() {
                eprintln!("{diagnostic}");
            }
            ExitCode::FAILURE
        }
    }
}
