//! Kukui - Main entrypoint.
//!
//! Command-line front end for validating and generating configuration and
//! for exercising the containers with the loaded settings.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use kukui_lib::config::{self, ConfigLoader, KukuiConfig, LogConfig, ENV_PREFIX};
use kukui_lib::data_structures::{
    ArrayStack, BTreeTrieMap, CircularArrayFifoQueue, ListFifoQueue, WorkList,
};
use kukui_lib::error::{
    report_error, set_error_reporter, ErrorContext, KukuiResult, TracingErrorReporter,
};

/// Command line arguments for kukui.
#[derive(Parser, Debug)]
#[clap(name = "kukui", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file (`.json` for JSON, TOML otherwise)
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },

    /// Run the containers once with the loaded configuration
    Smoke,
}

/// Initialize the logging system.
fn init_logging(log: &LogConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_line_number(log.source_location)
        .with_file(log.source_location)
        .with_thread_names(true);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };
    installed.context("Failed to set global tracing subscriber")
}

/// Drives every container through a short workload.
fn smoke(config: &KukuiConfig) -> KukuiResult<()> {
    const WORDS: [&str; 6] = ["app", "apple", "apply", "bat", "bath", "cat"];

    let mut trie: BTreeTrieMap<str, usize> = BTreeTrieMap::with_config(config.trie_map.clone());
    for (i, word) in WORDS.iter().enumerate() {
        trie.insert(*word, i)?;
    }
    let prefixed: Vec<String> = trie
        .entries_with_prefix("ap")?
        .into_iter()
        .map(|(key, _)| key.into_iter().collect())
        .collect();
    info!(keys = trie.size(), nodes = trie.node_count(), ?prefixed, "trie map populated");

    trie.delete("apple")?;
    info!(keys = trie.size(), nodes = trie.node_count(), "trie map after delete");

    let mut stack = ArrayStack::with_config(&config.worklists);
    let mut list_queue = ListFifoQueue::new();
    let mut ring_queue = CircularArrayFifoQueue::with_config(&config.worklists);
    for word in WORDS {
        stack.add(word)?;
        list_queue.add(word)?;
        ring_queue.add(word)?;
    }

    let mut drained = (Vec::new(), Vec::new(), Vec::new());
    while stack.has_work() {
        drained.0.push(stack.next()?);
        drained.1.push(list_queue.next()?);
        drained.2.push(ring_queue.next()?);
    }
    info!(stack = ?drained.0, list_queue = ?drained.1, ring_queue = ?drained.2, "worklists drained");

    Ok(())
}

/// Main entry point for the application.
fn main() -> Result<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX);

    let settings = match loader.load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    };

    init_logging(&settings.log)?;
    set_error_reporter(Arc::new(TracingErrorReporter::new()));
    config::init_global_config(settings.clone());

    match args.command.unwrap_or(Command::Validate) {
        Command::Validate => {
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            info!("Generating default configuration");

            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {parent:?}"))?;
            }
            config::write_config(&KukuiConfig::default(), &output)
                .with_context(|| format!("Failed to write configuration to {output:?}"))?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
        Command::Smoke => {
            if let Err(e) = smoke(&settings) {
                report_error(ErrorContext::new(e, "smoke"));
                process::exit(1);
            }
            Ok(())
        }
    }
}
