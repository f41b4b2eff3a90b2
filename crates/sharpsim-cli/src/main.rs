use clap::Parser;
use sharpsim::{run_code_with_skipped, SimulatorOptions};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// sharpsim - simulated console output for C#-style teaching snippets
#[derive(Parser, Debug)]
#[command(name = "sharpsim")]
#[command(about = "Print what a C# snippet would write to the console", long_about = None)]
struct Args {
    /// Source file to simulate (`-` reads stdin)
    source: Option<PathBuf>,

    /// Print the full ExecutionResult as JSON
    #[arg(long)]
    json: bool,

    /// Simulated latency in milliseconds (overrides the config file)
    #[arg(long, value_name = "N")]
    latency_ms: Option<u64>,

    /// SimulatorOptions as a JSON file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// List statements that were not simulated on stderr
    #[arg(long)]
    show_skipped: bool,

    /// Print the supported statement reference and exit
    #[arg(long)]
    reference: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("no source file given (use `-` for stdin)")]
    MissingSource,
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Config {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("{0}")]
    Run(String),
}

fn read_source(path: &Path) -> Result<String, CliError> {
    let read_err = |source| CliError::Read {
        path: path.display().to_string(),
        source,
    };
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).map_err(read_err)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path).map_err(read_err)
    }
}

fn load_options(args: &Args) -> Result<SimulatorOptions, CliError> {
    let mut options = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.display().to_string(),
                source,
            })?;
            serde_json::from_str(&text).map_err(|source| CliError::Config {
                path: path.display().to_string(),
                source,
            })?
        }
        None => SimulatorOptions::default(),
    };
    if let Some(latency_ms) = args.latency_ms {
        options.latency_ms = latency_ms;
    }
    Ok(options)
}

async fn run(args: Args) -> Result<(), CliError> {
    if args.reference {
        print!("{}", sharpsim::reference::supported_statements());
        return Ok(());
    }

    let path = args.source.as_deref().ok_or(CliError::MissingSource)?;
    let source = read_source(path)?;
    let options = load_options(&args)?;
    tracing::debug!(?options, path = %path.display(), "loaded");

    let (result, skipped) = run_code_with_skipped(&source, &options).await;
    if args.show_skipped {
        for line in &skipped {
            eprintln!("skipped {line}");
        }
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }
    match result.error {
        Some(error) => Err(CliError::Run(error)),
        None => {
            println!("{}", result.output);
            Ok(())
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // SHARPSIM_LOG controls the log level; defaults to warn.
    let filter = EnvFilter::try_from_env("SHARPSIM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}
