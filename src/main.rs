//! Perch configuration checker.
//!
//! Loads a configuration document, resolves it against a simulated
//! window system, and reports the outcome: a summary or JSON dump of
//! the resolved state plus any warnings. The window manager itself
//! runs the same resolution against the live display server.

use anyhow::{Context, Result};
use clap::Parser;
use perch_config::backend::StaticWindowSystem;
use perch_config::constants::{APP_NAME, CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use perch_config::diag::Diagnostics;
use perch_config::document::Document;
use perch_config::models::compile_rules;
use perch_config::resolver::{self, RuntimeConfig};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Offline checker for Perch configuration files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file (defaults to the user config directory)
    #[arg(value_name = "FILE")]
    config_path: Option<PathBuf>,

    /// Number of display outputs to resolve against
    #[arg(long, default_value_t = 1)]
    outputs: usize,

    /// Print the resolved configuration as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Warnings are reported through the diagnostics summary below, so
    // the log stays quiet unless RUST_LOG asks for more.
    let directives = env::var("RUST_LOG").unwrap_or_else(|_| "error".into());
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::builder().parse_lossy(directives))
        .init();

    let cli = Cli::parse();

    let path = cli.config_path.or_else(default_config_path);
    let (doc, source) = load_document(path.as_deref())?;

    let ws = StaticWindowSystem::new(cli.outputs);
    let mut diags = Diagnostics::new();
    let config = resolver::resolve(&doc, &ws, &mut diags)?;

    // The matching engine compiles rule patterns after resolution;
    // doing it here surfaces bad patterns at check time.
    let _matchers = compile_rules(&config.rules, &mut diags);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        print_summary(&config, &source);
    }

    if !diags.is_empty() {
        eprintln!();
        eprintln!("{} warning(s):", diags.len());
        for warning in diags.warnings() {
            eprintln!("  {warning}");
        }
    }

    Ok(())
}

/// Default location of the user's configuration file.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Loads the document to check.
///
/// An unreadable file degrades to the built-in default document, as the
/// window manager itself does at startup. A readable file that fails to
/// parse is an error: there is no safe interpretation of a half-parsed
/// document.
fn load_document(path: Option<&Path>) -> Result<(Document, String)> {
    let builtin = || {
        Document::parse(resolver::DEFAULT_DOCUMENT)
            .context("built-in default configuration is invalid")
            .map(|doc| (doc, "built-in defaults".to_string()))
    };

    let Some(path) = path else {
        return builtin();
    };

    match fs::read_to_string(path) {
        Ok(text) => {
            let doc = Document::parse(&text)
                .with_context(|| format!("in {}", path.display()))?;
            Ok((doc, path.display().to_string()))
        }
        Err(err) => {
            eprintln!("Warning: cannot read {}: {}", path.display(), err);
            eprintln!("Checking the built-in default configuration instead.");
            builtin()
        }
    }
}

fn print_summary(config: &RuntimeConfig, source: &str) {
    println!("{} configuration check", APP_NAME);
    println!("document: {source}");
    println!();

    for (index, output) in config.outputs.iter().enumerate() {
        println!(
            "output {index}: {} layouts, {} tags, statusbar {:?}",
            output.layouts.len(),
            output.tags.len(),
            output.statusbar
        );
    }

    let pointer = &config.pointer;
    let pointer_total = pointer.tag.len()
        + pointer.layout.len()
        + pointer.title.len()
        + pointer.root.len()
        + pointer.client.len();
    println!("rules: {}", config.rules.len());
    println!("key bindings: {}", config.keys.len());
    println!("pointer bindings: {pointer_total}");
}
