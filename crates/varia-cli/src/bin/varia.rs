//! Varia CLI Binary
//!
//! Renders the closed-variant model demonstrations: raw-value conversion,
//! a toggling bulb, measured shapes, and an ancestry tree.
//!
//! # Usage
//!
//! ```bash
//! # Convert a raw integer under the alignment mapping
//! varia align --raw 20
//!
//! # Surface temperature before and after a toggle
//! varia bulb --ambient 77
//!
//! # Area and perimeter of the reference shapes
//! varia shapes
//!
//! # Build and enumerate the reference ancestry tree
//! varia tree
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use varia_cli::{
    cli::CliConfig,
    commands::{self, AlignArgs, BulbArgs, ShapesArgs, TreeArgs},
    diagnostics::setup_error_reporting,
    Result,
};

#[derive(Parser)]
#[command(
    name = "varia",
    version = env!("CARGO_PKG_VERSION"),
    about = "Closed-variant model demonstrations: alignment, bulbs, shapes, ancestry"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a raw integer under the text-alignment mapping
    Align(AlignArgs),

    /// Surface temperature of a bulb before and after a toggle
    Bulb(BulbArgs),

    /// Area and perimeter of the reference shapes
    Shapes(ShapesArgs),

    /// Build the reference ancestry tree and enumerate it
    Tree(TreeArgs),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{:?}", miette::Report::new(e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    setup_error_reporting()?;
    setup_logging(cli.verbose, cli.quiet)?;

    let config = CliConfig::load(cli.config.as_deref())?;

    let output = match cli.command {
        Commands::Align(args) => commands::align_command(&args, &config)?,
        Commands::Bulb(args) => commands::bulb_command(&args, &config)?,
        Commands::Shapes(args) => commands::shapes_command(&args, &config)?,
        Commands::Tree(args) => commands::tree_command(&args, &config)?,
    };
    println!("{output}");

    info!("command completed");
    Ok(())
}

fn setup_logging(verbose: u8, quiet: bool) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter)
        .init();

    Ok(())
}
