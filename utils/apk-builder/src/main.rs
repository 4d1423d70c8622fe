use std::env;
use std::path::PathBuf;
use std::process;

use apk_builder::errors::BuildResult;
use apk_builder::{logger, pipeline, BuildConfig};
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = "apk-builder", version, about = "Builds the Stendhal Android WebView client.")]
struct Cli {
    /// Directory holding the cloned sources and the build output. Defaults to the current
    /// directory.
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Log every step, including ones that were skipped
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
enum Commands {
    /// Prepare sources, build, and collect the apks (the default)
    All,

    /// Clone the game client and networking library and build the library jar
    Prepare,

    /// Install the signing config, run gradle and collect the apks
    Build,

    /// Only move apks from the gradle output into the build directory
    Collect,

    /// Check that the tools the build needs are installed
    Verify,
}

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    if let Err(err) = run(cli) {
        debug!("{err:?}");
        eprintln!("{err}");
        process::exit(err.exit_code());
    }
}

fn run(cli: Cli) -> BuildResult<()> {
    let cwd = env::current_dir()?;
    let root = match cli.root {
        Some(root) => cwd.join(root),
        None => cwd,
    };
    let config = BuildConfig::from_env(root)?;

    match cli.command.unwrap_or(Commands::All) {
        Commands::All => pipeline::run_all(&config).map(drop),
        Commands::Prepare => pipeline::prepare(&config),
        Commands::Build => pipeline::build(&config).map(drop),
        Commands::Collect => pipeline::collect(&config).map(drop),
        Commands::Verify => pipeline::verify(&config),
    }
}
