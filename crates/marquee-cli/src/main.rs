mod console;
mod tui;

use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use marquee_core::config::{self, MarqueeConfig};
use marquee_core::deeplink::DeepLink;
use owo_colors::OwoColorize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "marquee", about = "Marquee: search movies and browse their details", version)]
enum Cli {
    /// Search titles by name
    Search {
        /// Title to search for
        query: String,
        /// Output raw JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Maximum number of results to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show full details for one title
    Show {
        /// IMDb identifier (e.g. tt1375666)
        id: String,
        /// Output raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Launch the interactive terminal UI
    Tui {
        /// Open the detail panel for this identifier on startup
        #[arg(long)]
        id: Option<String>,
        /// Pre-fill the search box and run this query on startup
        #[arg(short, long)]
        query: Option<String>,
        /// Deep link carrying `id` or `q` parameters (e.g. marquee://open?id=tt1375666)
        #[arg(long, conflicts_with_all = ["id", "query"])]
        link: Option<String>,
    },
    /// Print the resolved configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(matches!(cli, Cli::Tui { .. }));

    let (config, warnings) = MarqueeConfig::load_with_warnings(Some(&std::env::current_dir()?))
        .unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load config, using defaults");
            (MarqueeConfig::default(), Vec::new())
        });

    match cli {
        Cli::Search { query, json, limit } => {
            console::cmd_search(&config, &query, json, limit).await
        }
        Cli::Show { id, json } => console::cmd_show(&config, &id, json).await,
        Cli::Tui { id, query, link } => {
            let deep_link = match link {
                Some(ref url) => DeepLink::parse_url(url),
                None => DeepLink::from_params(id.as_deref(), query.as_deref()),
            }
            .context("invalid deep link")?;
            tui::run_tui(&config, deep_link).await
        }
        Cli::Config => cmd_config(&config, &warnings),
    }
}

/// Log to stderr for one-shot commands. The TUI owns the terminal, so it logs
/// to a file under the cache dir instead, or not at all.
fn init_tracing(tui: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("marquee=info"));

    if !tui {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .compact()
            .init();
        return;
    }

    let Some(dir) = config::log_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("marquee.log"))
    else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn cmd_config(config: &MarqueeConfig, warnings: &[String]) -> Result<()> {
    let mut shown = config.clone();
    shown.api.api_key = shown.api.api_key.as_deref().map(config::mask_secret);

    let path = config::global_config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());
    println!("{}  {}", "Global config:".dimmed(), path);

    let key_status = match config::resolve_api_key(&config.api) {
        Ok(key) => config::mask_secret(&key).green().to_string(),
        Err(e) => e.to_string().red().to_string(),
    };
    println!("{}  {}", "API key:".dimmed(), key_status);
    println!();

    print!(
        "{}",
        toml::to_string_pretty(&shown).context("failed to render config")?
    );

    if !warnings.is_empty() {
        println!();
        println!("{}", "--- Warnings ---".dimmed());
        for w in warnings {
            println!("  {} {}", "⚠".yellow(), w);
        }
    }

    Ok(())
}
