use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod drafts;

use commands::{ConfigCommand, DiaryCommand, HabitCommand, PlanCommand, ProfileCommand};
use config::Config;

#[derive(Parser)]
#[command(name = "fit")]
#[command(version)]
#[command(about = "A daily calorie diary with fitness plans and habits", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record calories and water for a day
    Diary(DiaryCommand),

    /// Browse fitness plans and opt in or out
    Plan(PlanCommand),

    /// Pick habits to work on
    Habit(HabitCommand),

    /// Manage your goal and account details
    Profile(ProfileCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config)?;
    tracing::debug!("Using data directory {}", config.data_dir.value.display());

    execute_command(&cli.command, &config)
}

fn execute_command(
    command: &Option<Commands>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Some(Commands::Diary(cmd)) => {
            let store = config.store();
            cmd.run(&store, config)?;
        }
        Some(Commands::Plan(cmd)) => {
            let store = config.store();
            cmd.run(&store)?;
        }
        Some(Commands::Habit(cmd)) => {
            let store = config.store();
            cmd.run(&store)?;
        }
        Some(Commands::Profile(cmd)) => {
            let store = config.store();
            cmd.run(&store, config)?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}
