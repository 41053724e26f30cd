//! Activities CLI
//!
//! Command-line front-end for the activities signup service:
//! - List activities and their rosters
//! - Sign a participant up
//! - Unregister a participant
//! - Generate a config file

use activities::config::{generate_default_config, Config};
use activities::controller::{SyncError, ViewSyncController};
use activities::{logging, ActivitiesClient, ActivityBoard};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "activities")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse extracurricular activities and manage signups")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Html,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List activities with their participants
    List,

    /// Sign a participant up for an activity
    Signup {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// Remove a participant from an activity
    Unregister {
        /// Activity name
        activity: String,
        /// Participant email
        email: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Cannot load config {:?}", path))?,
        None => Config::load_default(),
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    logging::init(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, strategy = %config.view.reconcile, "Starting");

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, &content)?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(());
    }

    let client = ActivitiesClient::new(config.client_config())?;
    let mut controller = ViewSyncController::new(client, config.controller_options());

    let result = match &cli.command {
        Commands::List => controller.load().await,
        Commands::Signup { activity, email } => {
            // The form is populated from a loaded board, so load first
            match controller.load().await {
                Ok(()) => {
                    controller.select_activity(activity.as_str());
                    controller.set_email(email.as_str());
                    controller.submit().await
                }
                Err(e) => Err(e),
            }
        }
        Commands::Unregister { activity, email } => match controller.load().await {
            Ok(()) => controller.unregister(activity, email).await,
            Err(e) => Err(e),
        },
        Commands::Config { .. } => return Ok(()),
    };

    if let Some(message) = controller.current_message() {
        match &result {
            Ok(()) => println!("{}", message.text),
            Err(_) => eprintln!("{}", message.text),
        }
    }

    if let Err(e) = result {
        let code = match e {
            SyncError::Validation(_) => 2,
            SyncError::Client(_) => 1,
        };
        std::process::exit(code);
    }

    match cli.format {
        OutputFormat::Table => print_table(controller.board()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(controller.board())?),
        OutputFormat::Html => {
            println!("{}", controller.render_list());
            println!("{}", controller.render_select());
        }
    }

    Ok(())
}

fn print_table(board: &ActivityBoard) {
    if board.is_empty() {
        println!("No activities available.");
        return;
    }

    println!(
        "{:<24} {:<32} {:>9} {:>10}",
        "Activity", "Schedule", "Enrolled", "Spots left"
    );
    println!("{}", "-".repeat(78));

    for activity in board.iter() {
        println!(
            "{:<24} {:<32} {:>9} {:>10}",
            activity.name,
            activity.schedule,
            format!("{}/{}", activity.participants.len(), activity.max_participants),
            activity.spots_left()
        );
        for email in &activity.participants {
            println!("    {}", email);
        }
    }

    println!();
    println!(
        "Fetched at {}",
        board.fetched_at().format("%Y-%m-%d %H:%M:%S UTC")
    );
}
