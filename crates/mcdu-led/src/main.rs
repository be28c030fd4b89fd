//! mcdu-led: LED brightness control for MCDU cockpit panels.
//!
//! Requests are validated by the controller and forwarded to a simulated panel,
//! whose resulting state is printed.

use std::path::PathBuf;

use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(
    name = "mcdu-led",
    version,
    about = "LED brightness control for MCDU cockpit panels"
)]
struct Args {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (overrides log_level from the config file)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() {
    let args = Args::parse();

    let (config, warnings) = cli::load_config(args.config.as_deref());
    let filter = if args.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
    for w in &warnings {
        log::warn!("{w}");
    }

    let ctx = cli::Context {
        config,
        config_path: args.config,
        json: args.json,
    };
    if let Err(e) = cli::run(args.command, &ctx) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
