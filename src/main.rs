//! fair-audit: FAIR / DCAT-AP quality auditor for open-data catalog entries
//!
//! Scores catalog dataset pages for interoperability and reusability and
//! profiles their tabular resources.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use fair_audit::{
    cli,
    config::{AppConfig, CONFIG_FILE_NAMES},
    pipeline::{OutputTarget, write_output},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "fair-audit")]
#[command(version)]
#[command(about = "FAIR / DCAT-AP quality auditor for open-data catalog entries", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All datasets audited
    1  At least one catalog page could not be audited
    2  A dataset scored below --min-score
    3  Error occurred

EXAMPLES:
    # Audit the built-in sample of data.gov datasets
    fair-audit audit

    # Audit selected pages, four at a time, with JSON reports
    fair-audit audit https://catalog.data.gov/dataset/electric-vehicle-population-data \\
        --jobs 4 --report-format json

    # CI gate: fail when any dataset scores below 120 of 185
    fair-audit audit --urls-file datasets.txt --min-score 120 --no-report")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress the console report
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Cache directory for vocabularies and downloaded resources
    #[arg(long, global = true, env = "FAIR_AUDIT_CACHE_DIR")]
    cache_dir: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `audit` subcommand
#[derive(Parser)]
struct AuditArgs {
    /// Catalog page URLs (defaults to the configured or built-in list)
    urls: Vec<String>,

    /// File with one catalog URL per line (`#` starts a comment)
    #[arg(long)]
    urls_file: Option<PathBuf>,

    /// Exit with code 2 if any dataset scores below this total
    #[arg(long)]
    min_score: Option<u32>,

    /// Do not write report files
    #[arg(long)]
    no_report: bool,

    /// Report file format
    #[arg(long, value_enum)]
    report_format: Option<ReportFormat>,

    /// Directory receiving the report files
    #[arg(long)]
    report_dir: Option<PathBuf>,

    /// Number of datasets audited concurrently
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Skip the DCAT-AP validation service
    #[arg(long)]
    no_validation: bool,
}

impl AuditArgs {
    /// Apply command-line overrides on top of the file configuration.
    fn apply(&self, config: &mut AppConfig) {
        if let Some(min) = self.min_score {
            config.behavior.min_score = Some(min);
        }
        if self.no_report {
            config.output.write_reports = false;
        }
        if let Some(format) = self.report_format {
            config.output.format = format;
        }
        if let Some(dir) = &self.report_dir {
            config.output.report_dir.clone_from(dir);
        }
        if let Some(jobs) = self.jobs {
            config.behavior.jobs = jobs;
        }
        if self.no_validation {
            config.validation.enabled = false;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Audit catalog dataset pages
    Audit(AuditArgs),

    /// Inspect or refresh the cached reference vocabularies
    Vocab {
        #[command(subcommand)]
        action: VocabAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum VocabAction {
    /// Print cache locations, sizes and term counts
    Show,
    /// Re-download every vocabulary and rewrite the cache
    Refresh,
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .fair-audit.yaml in the current directory
    Init,
}

/// Load the configuration file and apply the global flags.
fn load_config(cli: &Cli) -> Result<(AppConfig, Option<PathBuf>)> {
    let (mut config, loaded_from) = match &cli.config {
        Some(path) => (
            fair_audit::config::load_config_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?,
            Some(path.clone()),
        ),
        None => fair_audit::config::load_or_default(None),
    };
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    if let Some(dir) = &cli.cache_dir {
        config.cache.dir = Some(dir.clone());
    }
    if let Some(timeout) = cli.timeout {
        config.network.timeout_secs = timeout;
    }
    if cli.no_color {
        config.output.no_color = true;
    }
    if cli.quiet {
        config.behavior.quiet = true;
    }
    Ok((config, loaded_from))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match &cli.command {
        Commands::Audit(args) => {
            let (mut config, _) = load_config(&cli)?;
            args.apply(&mut config);

            let source = cli::UrlSource {
                urls: args.urls.clone(),
                urls_file: args.urls_file.clone(),
            };
            let result = cli::run_audit(&config, &source);
            if let Err(e) = &result {
                tracing::error!("{:#}", e);
            }
            let code = cli::exit_code_for(&result);
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }

        Commands::Vocab { action } => {
            let (config, _) = load_config(&cli)?;
            match action {
                VocabAction::Show => cli::run_vocab_show(&config),
                VocabAction::Refresh => cli::run_vocab_refresh(&config),
            }
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "fair-audit", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = fair_audit::config::generate_json_schema()?;
            write_output(&schema, &OutputTarget::from_option(output.clone()))?;
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = load_config(&cli)?;
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml =
                    serde_yaml_ng::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    fair_audit::config::user_config_dir().map(|p| p.display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match fair_audit::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".fair-audit.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = fair_audit::config::generate_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
