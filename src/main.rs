//! AnchorLens - Angela test-results pattern analyzer
//!
//! A CLI tool that reads the latest Angela Paris test-results file, groups
//! the suggested anchors by trip-intent facet, scores keyword vocabularies
//! against anchor descriptions, and prints a pattern report to the console.
//!
//! Exit codes:
//!   0 - Report printed, or a recognized no-input/load-failure condition
//!   1 - Unexpected runtime error (invalid arguments, config failure)

mod analysis;
mod cli;
mod config;
mod loader;
mod models;
mod ops;
mod report;

use anyhow::{Context, Result};
use chrono::Local;
use cli::Args;
use config::Config;
use loader::LoadError;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Handle --init-config early (no logging needed)
    if args.init_config {
        return handle_init_config();
    }

    // Initialize logging
    init_logging(&args);

    info!("AnchorLens v{}", env!("CARGO_PKG_VERSION"));
    debug!("Arguments: {:?}", args);

    // Run the analysis
    match run_analysis(args) {
        Ok(exit_code) => {
            std::process::exit(exit_code);
        }
        Err(e) => {
            error!("Analysis failed: {}", e);
            eprintln!("\n❌ Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Handle --init-config: generate a default .anchorlens.toml.
fn handle_init_config() -> Result<()> {
    let path = std::path::Path::new(".anchorlens.toml");

    if path.exists() {
        eprintln!("⚠️  .anchorlens.toml already exists. Remove it first or edit it manually.");
        std::process::exit(1);
    }

    let content = Config::default_toml();
    std::fs::write(path, &content).context("Failed to write .anchorlens.toml")?;

    println!("✅ Created .anchorlens.toml with default settings.");
    println!("   Edit it to customize the results directory and report options.");
    Ok(())
}

/// Initialize logging based on verbosity settings.
fn init_logging(args: &Args) {
    let level = args.log_level();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

/// Run the complete analysis workflow. Returns the process exit code.
///
/// The two recognized no-report conditions (nothing to analyze, unreadable
/// result set) print a diagnostic and still exit 0; only unexpected errors
/// bubble up.
fn run_analysis(args: Args) -> Result<i32> {
    // Load configuration
    let mut config = load_config(&args)?;
    config.merge_with_args(&args);

    println!("🤖 ANGELA PARIS TEST RESULTS ANALYZER");
    println!("{}", "=".repeat(60));
    println!("📅 Analysis Date: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));

    // Step 1: Pick the result file
    let result_file = match resolve_result_file(&args, &config) {
        Ok(path) => path,
        Err(LoadError::NoInputFound { dir }) => {
            debug!("No candidate result files in {}", dir.display());
            println!("❌ No test results files found. Run the test suite first.");
            return Ok(0);
        }
        Err(err) => {
            warn!("Discovery failed: {}", err);
            println!("❌ {}", err);
            return Ok(0);
        }
    };

    let display_name = result_file
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| result_file.display().to_string());
    println!("📁 Analyzing: {}", display_name);

    // Step 2: Load the records
    let records = match loader::load_records(&result_file) {
        Ok(records) => records,
        Err(err) => {
            warn!("Load failed: {}", err);
            println!("❌ {}", err);
            return Ok(0);
        }
    };

    if records.is_empty() {
        println!("❌ Result file contains no test records. Run the test suite first.");
        return Ok(0);
    }

    debug!("Loaded {} test record(s)", records.len());

    // Step 3: Aggregate and render
    let patterns = analysis::aggregate_patterns(&records);

    let mut stdout = io::stdout();
    report::render_report(&mut stdout, &records, &patterns, &config.report)?;

    Ok(0)
}

/// Pick the result file: an explicit --file wins, otherwise discover the
/// lexicographically latest matching file in the configured directory.
fn resolve_result_file(args: &Args, config: &Config) -> Result<PathBuf, LoadError> {
    if let Some(ref file) = args.file {
        debug!("Using explicit result file: {}", file.display());
        return Ok(file.clone());
    }

    let dir = Path::new(&config.discovery.dir);
    loader::find_latest(dir, &config.discovery.prefix, &config.discovery.suffix)
}

/// Load configuration from file or use defaults.
fn load_config(args: &Args) -> Result<Config> {
    // Try explicit config path
    if let Some(ref config_path) = args.config {
        info!("Loading config from: {}", config_path.display());
        return Config::load(config_path);
    }

    // Try default location
    match Config::load_default() {
        Ok(Some(config)) => {
            info!("Loaded default config from .anchorlens.toml");
            Ok(config)
        }
        Ok(None) => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
        Err(e) => {
            warn!("Failed to load config: {}", e);
            Ok(Config::default())
        }
    }
}
