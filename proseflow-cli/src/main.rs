//! proseflow — reflow and LaTeX tooling for version-controlled prose

use clap::Parser;
use proseflow_cli::commands::Commands;

/// Command-line entry point
#[derive(Debug, Parser)]
#[command(name = "proseflow", version, about = "Manuscript reflow and LaTeX conversion")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Init(args) => args.execute(),
        Commands::Format(args) => args.execute(),
        Commands::Texify(args) => args.execute(),
        Commands::Compile(args) => args.execute(),
    }
}
