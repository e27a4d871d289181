use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "bellsched-cli", version, about = "Bellsched CLI")]
struct Cli {
    /// Config file to use instead of ~/.config/bellsched/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the full schedule for a day
    Day(commands::day::DayArgs),
    /// Show the current and next entries
    Compact(commands::day::DayArgs),
    /// List custom events that collide with classes
    Conflicts(commands::conflicts::ConflictsArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("bellsched_core=warn,bellsched_cli=warn")
            }),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let result = match cli.command {
        Commands::Day(args) => commands::day::run_day(config, args),
        Commands::Compact(args) => commands::day::run_compact(config, args),
        Commands::Conflicts(args) => commands::conflicts::run(config, args),
        Commands::Config { action } => commands::config::run(config, action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
