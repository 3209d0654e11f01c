use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use slen::{
    exit_status, length, PreconditionViolation, SeqRef, StderrReporter, TracingReporter,
    ViolationReporter, EXIT_FAILURE, EXIT_SUCCESS,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "slen", about = "Precondition-checked length of zero-terminated strings")]
struct Cli {
    /// Where uncaught precondition violations are reported.
    #[arg(long, value_enum, default_value_t = ReporterKind::Stderr, global = true)]
    reporter: ReporterKind,
    /// Log scan details (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the built-in scenarios and exit non-zero if any of them fails.
    Check,
    /// Print the length of a string.
    Measure {
        /// Text to measure.
        #[arg(required_unless_present = "null")]
        text: Option<String>,
        /// Treat `\0` in TEXT as an embedded terminator.
        #[arg(long)]
        escapes: bool,
        /// Measure a null reference instead of TEXT.
        #[arg(long, conflicts_with = "text")]
        null: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReporterKind {
    /// One diagnostic line on stderr.
    Stderr,
    /// A `tracing` error event.
    Log,
}

impl ReporterKind {
    fn build(self) -> Box<dyn ViolationReporter> {
        match self {
            ReporterKind::Stderr => Box::new(StderrReporter),
            ReporterKind::Log => Box::new(TracingReporter),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let reporter = cli.reporter.build();
    ExitCode::from(finish(run(cli.command), reporter.as_ref()))
}

/// Exit status for the outcome of a command.
///
/// A violation that escaped the command goes to `reporter`; any other error
/// is printed as a CLI error.
fn finish(result: Result<()>, reporter: &dyn ViolationReporter) -> u8 {
    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => match err.downcast::<PreconditionViolation>() {
            Ok(violation) => exit_status::<()>(Err(violation), reporter),
            Err(other) => {
                eprintln!("error: {other:#}");
                EXIT_FAILURE
            }
        },
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "slen=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Check => run_check(),
        Commands::Measure { text, escapes, null } => run_measure(text, escapes, null),
    }
}

fn run_check() -> Result<()> {
    let mut failed = 0usize;
    for (label, outcome) in slen::self_check() {
        match outcome {
            Ok(()) => println!("ok\t{label}"),
            Err(violation) => {
                println!("FAILED\t{label}\t{violation}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} check(s) failed");
    }
    println!("all checks passed");
    Ok(())
}

fn run_measure(text: Option<String>, escapes: bool, null: bool) -> Result<()> {
    if null {
        let len = length(SeqRef::<u8>::null())?;
        println!("{len}");
        return Ok(());
    }

    let text = text.context("no text given")?;
    let bytes = terminated_bytes(&text, escapes);
    let len = length(bytes.as_slice())?;
    println!("{len}");
    Ok(())
}

/// Bytes of `text` followed by a terminator, with `\0` expanded when asked.
fn terminated_bytes(text: &str, escapes: bool) -> Vec<u8> {
    let mut bytes = if escapes {
        text.replace("\\0", "\0").into_bytes()
    } else {
        text.as_bytes().to_vec()
    };
    bytes.push(0);
    bytes
}
