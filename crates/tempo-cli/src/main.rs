//! tempo CLI: chat and calendar shell for the terminal

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tempo_core::Config;

/// Chat-driven calendar companion with a two-pane TUI
#[derive(Parser)]
#[command(name = "tempo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI (default when no command specified)
    Tui,

    /// Initialize the .tempo/ directory and config
    Init,

    /// Print the resolved configuration
    Config {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the message journal
    Journal {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

const TEMPO_DIR: &str = ".tempo";

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Tui) => {
            // Default: open TUI. Diagnostics go to a log file so they never
            // corrupt the alternate screen.
            init_file_logging();
            let config = load_config();
            let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
            if let Err(e) = rt.block_on(tempo_tui::run_tui(config)) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        Some(Commands::Init) => {
            cmd_init();
        }
        Some(Commands::Config { json }) => {
            cmd_config(json);
        }
        Some(Commands::Journal { json }) => {
            cmd_journal(json);
        }
    }
}

fn config_path() -> PathBuf {
    Path::new(TEMPO_DIR).join("config.json")
}

/// Load the config file if present, otherwise fall back to defaults.
fn load_config() -> Config {
    Config::load(&config_path()).unwrap_or_default()
}

fn init_file_logging() {
    let log_path = Path::new(TEMPO_DIR).join("tempo.log");
    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    else {
        return;
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
}

fn cmd_init() {
    let path = config_path();
    if path.exists() {
        println!("Already initialized: {}", path.display());
        return;
    }

    match Config::default().save(&path) {
        Ok(()) => {
            println!("Initialized {}", path.display());
        }
        Err(e) => {
            eprintln!("Failed to initialize: {e}");
            std::process::exit(1);
        }
    }
}

fn cmd_config(json: bool) {
    let config = load_config();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&config).expect("failed to serialize")
        );
        return;
    }

    println!("Calendar URL:   {}", config.calendar_url);
    println!("Refresh delay:  {}ms", config.refresh_delay_ms);
    println!("Initial layout: {:?}", config.initial_layout);
    println!("Journal path:   {}", config.journal_path.display());
}

fn cmd_journal(json: bool) {
    let config = load_config();
    let store = tempo_core::JournalStore::new(config.journal_path);

    let messages = match store.load() {
        Ok(messages) => messages,
        Err(e) => {
            eprintln!("Failed to read journal: {e}");
            std::process::exit(1);
        }
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&messages).expect("failed to serialize")
        );
        return;
    }

    if messages.is_empty() {
        println!("Journal is empty");
        return;
    }

    for message in &messages {
        println!("{}  {}", message.sent_at.format("%Y-%m-%d %H:%M:%S"), message.text);
    }
}
