//! kindred - guided conversation simulator and profile discovery CLI.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kindred_core::config::StorageBackend;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;
mod context;

use context::AppContext;

#[derive(Parser, Debug)]
#[command(name = "kindred")]
#[command(version, about = "Kindred conversation simulator", long_about = None)]
struct Cli {
    /// Base directory for config and data (defaults to the platform dirs)
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// Record storage backend (memory, toml); overrides the config file
    #[arg(long, global = true)]
    storage: Option<StorageBackend>,

    /// Log filter (trace, debug, info, warn, error); overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the conversation prompts and their choices
    Prompts,

    /// Drive a conversation simulation
    Simulate {
        #[command(subcommand)]
        action: SimulateAction,
    },

    /// Browse profiles, optionally filtered
    Discover(commands::discover::DiscoverArgs),

    /// List your matches
    Matches,

    /// Show or create your own profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Inspect or write the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Write the effective configuration to the config file
    Init,
}

#[derive(Subcommand, Debug)]
enum ProfileAction {
    /// Show the active profile
    Show,
    /// Create the profile used by simulations and matching
    Create(commands::profile::CreateArgs),
}

#[derive(Subcommand, Debug)]
enum SimulateAction {
    /// Start a new simulation
    Start,
    /// Show the active simulation and its current prompt
    Status,
    /// Answer the current prompt with a choice number or its exact text
    Answer {
        answer: String,
    },
    /// Retry marking a fully answered simulation as completed
    Finalize,
    /// Delete the active simulation
    Abandon,
    /// Answer every remaining prompt interactively from stdin
    Run,
    /// List stored simulations
    #[command(alias = "ls")]
    History,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut ctx = AppContext::load(cli.base_dir.as_deref()).context("failed to load configuration")?;
    if let Some(storage) = cli.storage {
        ctx.config.storage = storage;
    }

    let log_level = cli.log_level.as_deref().unwrap_or(&ctx.config.log_level);
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    tracing::debug!(storage = %ctx.config.storage, "configuration resolved");

    match cli.command {
        Commands::Prompts => commands::prompts::list(&ctx),
        Commands::Simulate { action } => {
            let simulate = ctx.simulation()?;
            match action {
                SimulateAction::Start => commands::simulate::start(&simulate).await,
                SimulateAction::Status => commands::simulate::status(&simulate).await,
                SimulateAction::Answer { answer } => {
                    commands::simulate::answer(&simulate, &answer).await
                }
                SimulateAction::Finalize => commands::simulate::finalize(&simulate).await,
                SimulateAction::Abandon => commands::simulate::abandon(&simulate).await,
                SimulateAction::Run => commands::simulate::run(&simulate).await,
                SimulateAction::History => commands::simulate::history(&simulate).await,
            }
        }
        Commands::Discover(args) => commands::discover::run(&ctx, &args).await,
        Commands::Matches => commands::matches::run(&ctx).await,
        Commands::Profile { action } => {
            let setup = ctx.profile_setup()?;
            match action {
                ProfileAction::Show => commands::profile::show(&setup).await,
                ProfileAction::Create(args) => commands::profile::create(&setup, &args).await,
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&ctx),
            ConfigAction::Init => commands::config::init(&ctx),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_simulate_answer() {
        let cli = Cli::try_parse_from(["kindred", "--storage", "toml", "simulate", "answer", "2"])
            .unwrap();
        assert_eq!(cli.storage, Some(StorageBackend::Toml));
        match cli.command {
            Commands::Simulate {
                action: SimulateAction::Answer { answer },
            } => assert_eq!(answer, "2"),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_storage() {
        assert!(Cli::try_parse_from(["kindred", "--storage", "redis", "prompts"]).is_err());
    }

    #[test]
    fn test_parses_profile_create() {
        let cli = Cli::try_parse_from([
            "kindred",
            "profile",
            "create",
            "--name",
            "Kai",
            "--age",
            "34",
            "--location",
            "Kyoto",
            "--bio",
            "Tea and trains",
            "--mbti",
            "INTP",
            "--love-language",
            "service",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Profile {
                action: ProfileAction::Create(_)
            }
        ));
        assert!(Cli::try_parse_from(["kindred", "matches"]).is_ok());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["kindred", "prompts", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
    }
}
