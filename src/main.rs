// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod document;
mod errors;
mod file_utils;
mod providers;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

impl From<&app_config::LogLevel> for LevelFilter {
    fn from(level: &app_config::LogLevel) -> Self {
        match level {
            app_config::LogLevel::Error => LevelFilter::Error,
            app_config::LogLevel::Warn => LevelFilter::Warn,
            app_config::LogLevel::Info => LevelFilter::Info,
            app_config::LogLevel::Debug => LevelFilter::Debug,
            app_config::LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate all PDF documents in the input folder (default command)
    #[command(alias = "run")]
    Translate(TranslateArgs),

    /// Generate shell completions for doctrans
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Input directory containing the PDF files to translate
    #[arg(short, long)]
    input_folder: Option<PathBuf>,

    /// Output directory for translated files (created if missing)
    #[arg(short, long)]
    output_folder: Option<PathBuf>,

    /// Target language code (e.g. 'FR', 'DE', 'EN-US')
    #[arg(short, long)]
    target_language: Option<String>,

    /// API authentication key for the translation service
    #[arg(short, long, env = "DOCTRANS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Delay between status checks, in seconds
    #[arg(long)]
    poll_interval: Option<u64>,

    /// Maximum number of status checks before a document is abandoned
    #[arg(long)]
    max_poll_attempts: Option<u32>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// doctrans - batch PDF translation through the DeepL document API
///
/// Scans an input folder for PDF files, submits each one to the remote
/// document translation service, waits for the translation to finish and
/// downloads the result into the output folder.
#[derive(Parser, Debug)]
#[command(name = "doctrans")]
#[command(version = "1.0.0")]
#[command(about = "Batch PDF document translation tool")]
#[command(long_about = "doctrans submits every PDF in the input folder to a remote document
translation service, polls until each translation finishes, and saves the
result as translated_<name> in the output folder.

EXAMPLES:
    doctrans                                    # Translate using default config (conf.json)
    doctrans -t DE                              # Override the target language
    doctrans -i ./inbox -o ./done               # Override input/output folders
    doctrans --max-poll-attempts 20             # Give up earlier on stuck documents
    doctrans --log-level debug                  # Verbose run
    doctrans completions bash > doctrans.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a
    different config file with --config-path. If the config file doesn't
    exist, a default one will be created automatically; fill in the API key
    before the next run. The API key can also be provided through the
    DOCTRANS_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    translate: TranslateArgs,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} [{}] {}\x1B[0m",
                color, now, record.level(), record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "doctrans", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        // Default behavior - use top-level args
        None => run_translate(cli.translate).await,
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level((&config_log_level).into());
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader::<_, Config>(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(input_folder) = &options.input_folder {
        config.folders.input_folder = input_folder.to_string_lossy().to_string();
    }

    if let Some(output_folder) = &options.output_folder {
        config.folders.output_folder = output_folder.to_string_lossy().to_string();
    }

    if let Some(target_language) = &options.target_language {
        config.translation.target_language = target_language.clone();
    }

    if let Some(api_key) = &options.api_key {
        config.service.api_key = api_key.clone();
    }

    if let Some(poll_interval) = options.poll_interval {
        config.polling.interval_secs = poll_interval;
    }

    if let Some(max_poll_attempts) = options.max_poll_attempts {
        config.polling.max_attempts = max_poll_attempts;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level((&config.log_level).into());
    }

    // Create controller and run the batch
    let controller = Controller::with_config(config)?;
    controller.run().await
}
