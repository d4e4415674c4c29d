use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use date_reaper::command::{exit_code, run_check, run_check_chunk};
use date_reaper::config::Config;
use date_reaper::lifecycle::evaluator::today;
use date_reaper::lifecycle::policy::CheckPolicy;
use date_reaper::lifecycle::registries::EndOfLifeRegistry;

#[derive(Parser)]
#[command(name = "date-reaper")]
#[command(version, about = "A utility for looking up EOL dates for software")]
struct Cli {
    /// Path to a JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write logs as JSON lines to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check if a software version is EOL
    Check {
        /// Product name as listed on endoflife.date (e.g. node)
        name: String,
        /// Release cycle to check (e.g. 20)
        #[arg(value_name = "VERSION")]
        cycle: String,
        /// Fail if the version is not found in the database
        #[arg(short = 'm', long)]
        fail_on_missing: bool,
        /// Fail if the version is not supported by regular updates anymore
        #[arg(short = 'u', long)]
        fail_on_unsupported: bool,
    },
    /// Checks a chunk file's variants for those which are EOL'd
    CheckChunk {
        /// Path to a chunk.yaml (or .json) file
        path: PathBuf,
        /// Tool to check versions for
        #[arg(short, long)]
        tool: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _guard = match init_tracing(cli.verbose, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(error) => {
            eprintln!("date-reaper error: {error:#}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::from(exit_code(&error))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    runtime.block_on(execute(cli.command, &config))
}

async fn execute(command: Command, config: &Config) -> anyhow::Result<()> {
    let registry =
        EndOfLifeRegistry::new(&config.registry).context("failed to create HTTP client")?;
    let mut out = std::io::stdout().lock();

    match command {
        Command::Check {
            name,
            cycle,
            fail_on_missing,
            fail_on_unsupported,
        } => {
            let policy = CheckPolicy {
                fail_on_missing,
                fail_on_unsupported,
            };
            run_check(&registry, &name, &cycle, policy, today(), &mut out).await
        }
        Command::CheckChunk { path, tool } => {
            run_check_chunk(&registry, &path, &tool, today(), &mut out).await
        }
    }
}

fn init_tracing(verbose: bool, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("DATE_REAPER_LOG").unwrap_or_else(|_| EnvFilter::new(level));

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("invalid log file path: {}", path.display()))?;
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(writer)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(Some(guard))
}
