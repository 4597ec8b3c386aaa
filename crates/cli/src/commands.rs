//! Argument definitions and command execution.

use crate::output;
use anyhow::{Context, Result};
use caseproof_core::AppConfig;
use caseproof_ingest::{document_name, DocumentStore, FormFeedTextSource};
use caseproof_search::KeywordSet;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "caseproof", version, about = "Keyword evidence search over assessment text")]
pub struct Cli {
    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log matcher activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search documents for sentences matching a query
    Search {
        /// Free-text query
        #[arg(short, long)]
        query: String,

        /// Maximum number of matches (default from config, else 5)
        #[arg(short = 'k', long, value_parser = clap::value_parser!(u64).range(1..))]
        top_k: Option<u64>,

        /// Print matches as JSON
        #[arg(long)]
        json: bool,

        /// Form-feed paged text files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the keywords extracted from a query
    Keywords {
        /// Free-text query
        query: String,
    },
}

/// Run the parsed command, returning what to print on stdout.
pub fn run(cli: &Cli) -> Result<String> {
    run_with_env(cli, |key| std::env::var(key).ok())
}

/// Like [`run`], with config overrides read from `lookup` instead of the
/// process environment.
pub fn run_with_env<F>(cli: &Cli, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    let config = load_config_with(cli, lookup)?;
    debug!(target: "caseproof::cli", ?config, "config loaded");

    match &cli.command {
        Command::Search {
            query,
            top_k,
            json,
            files,
        } => {
            let top_k = top_k.map_or(config.search.top_k, |k| k as usize);
            let store = open_store(files, &config)?;
            let outcome = store.search(query, top_k);
            if *json {
                output::matches_json(&outcome.matches)
            } else {
                Ok(output::matches_text(&outcome))
            }
        }
        Command::Keywords { query } => Ok(output::keywords_text(&KeywordSet::from_query(query))),
    }
}

fn load_config_with<F>(cli: &Cli, lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    Ok(config.with_env_overrides(lookup)?)
}

fn open_store(files: &[PathBuf], config: &AppConfig) -> Result<DocumentStore> {
    let store = DocumentStore::from_config(config);
    for path in files {
        let source = FormFeedTextSource::open(path)?;
        store
            .insert_source(document_name(path), Arc::new(source))
            .with_context(|| format!("cannot add {}", path.display()))?;
    }
    Ok(store)
}
