//! Creative Showcase CLI
//!
//! Command-line front end for the gallery: accounts, uploads and feeds.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use showcase_core::{open_default, Config, DocumentStore, FileKv, StorageError};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Creative Showcase - share and browse artworks")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use a specific config file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an account and log in
    Signup {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Log in by email
    Login {
        email: String,
    },
    /// Log out
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Upload an artwork as the logged-in user
    Upload {
        /// Image file, or an http(s)/data URI
        image: String,
        /// Artwork title
        #[arg(short = 'T', long)]
        title: String,
        /// Artwork description
        #[arg(short, long)]
        description: String,
        /// Tags to add
        #[arg(short, long)]
        tag: Vec<String>,
    },
    /// List every artwork, newest first
    #[command(alias = "ls")]
    Feed {
        /// Random order instead of newest first
        #[arg(long)]
        shuffle: bool,
    },
    /// List the logged-in user's artworks
    Dashboard,
    /// Show a user's profile and artworks
    Profile {
        username: String,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show store status
    Status,
    /// Restore the demo data (previous data is backed up)
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, latency_ms, logout_latency_ms, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));
    let config_path = cli.config.as_ref();

    // Commands that don't need the store
    if let Commands::Config { command } = &cli.command {
        return match command.clone() {
            Some(ConfigCommands::Show) | None => commands::config::show(config_path, &output),
            Some(ConfigCommands::Set { key, value }) => {
                commands::config::set(key, value, config_path, &output)
            }
        };
    }

    let config = Config::load_with_cli_override(config_path)?;
    init_logging(&config);
    debug!("Using data directory {:?}", config.data_dir);

    if let Commands::Reset { yes } = cli.command {
        let kv = FileKv::open(&config.data_dir)?;
        return commands::status::reset(kv, &config, yes, &output);
    }

    let store = open_store(&config)?;

    match cli.command {
        Commands::Signup {
            username,
            email,
            password,
        } => commands::account::signup(&store, username, email, password, &output).await,
        Commands::Login { email } => commands::account::login(&store, email, &output).await,
        Commands::Logout => commands::account::logout(&store, &output).await,
        Commands::Whoami => commands::account::whoami(&store, &output).await,
        Commands::Upload {
            image,
            title,
            description,
            tag,
        } => commands::artwork::upload(&store, image, title, description, tag, &output).await,
        Commands::Feed { shuffle } => commands::artwork::feed(&store, shuffle, &output).await,
        Commands::Dashboard => commands::artwork::dashboard(&store, &output).await,
        Commands::Profile { username } => {
            commands::artwork::profile(&store, username, &output).await
        }
        Commands::Status => commands::status::show(&store, &config, &output),
        Commands::Config { .. } | Commands::Reset { .. } => Ok(()), // Handled above
    }
}

/// Open the store, pointing at `showcase reset` when stored data is unreadable
fn open_store(config: &Config) -> Result<DocumentStore<FileKv>> {
    open_default(config).map_err(|e| {
        if let Some(hint) = e
            .downcast_ref::<StorageError>()
            .and_then(StorageError::recovery_suggestion)
        {
            eprintln!("⚠ {}", hint);
        }
        e
    })
}

/// Initialize logging
///
/// Only initializes if SHOWCASE_LOG is set. Logs go to `config.log_file`
/// when configured, stderr otherwise.
fn init_logging(config: &Config) {
    let Ok(log_level) = std::env::var("SHOWCASE_LOG") else {
        return;
    };

    let env_filter = EnvFilter::new(format!(
        "showcase_core={},showcase_cli={}",
        log_level, log_level
    ));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    // Ignore the error if a subscriber is already installed
    match &config.log_file {
        Some(path) => match File::create(path) {
            Ok(file) => {
                let _ = builder
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
            }
            Err(e) => {
                eprintln!("Warning: Could not create log file {:?}: {}", path, e);
            }
        },
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
}
