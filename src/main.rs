// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod dictionary;
mod errors;
mod file_utils;
mod normalize;
mod subtitle_processor;

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

#[derive(Subcommand, Debug)]
enum Commands {
    /// Normalize subtitle cues and write reports (default command)
    Fix(FixArgs),

    /// Shift every cue of a subtitle file by a millisecond offset
    Shift {
        /// Input subtitle file
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        /// Offset in milliseconds, negative shifts earlier
        #[arg(short, long, allow_hyphen_values = true)]
        offset_ms: i64,
    },

    /// Append a second subtitle file after the first
    Merge {
        /// First subtitle file
        #[arg(value_name = "INPUT_PATH")]
        input_path: PathBuf,

        /// Subtitle file appended after the first
        #[arg(value_name = "SECOND_PATH")]
        second_path: PathBuf,
    },

    /// Generate shell completions for subtidy
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct FixArgs {
    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: PathBuf,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Language tag inserted into output filenames
    #[arg(short, long)]
    language_tag: Option<String>,

    /// Term dictionary file with the substitution tables
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subtidy - Subtitle cue normalization and reflow
///
/// Normalizes punctuation and brackets in CJK subtitle text, merges cues
/// that share a time range, rewraps over-width lines, and reports timing
/// overlaps and every correction it made.
#[derive(Parser, Debug)]
#[command(name = "subtidy")]
#[command(version = "1.0.0")]
#[command(about = "Subtitle cue normalization and reflow tool")]
#[command(long_about = "subtidy normalizes, deduplicates, reflows, and reports on subtitle cues.

EXAMPLES:
    subtidy episode.srt                        # Normalize using default config
    subtidy -f episode.srt                     # Force overwrite existing output
    subtidy -d dictionary.json episode.srt     # Use a specific term dictionary
    subtidy --log-level debug /subs/           # Process entire directory with debug logging
    subtidy shift -o 1500 episode.srt          # Shift all cues 1.5 seconds later
    subtidy merge part1.srt part2.srt          # Append part2 after part1
    subtidy completions bash > subtidy.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input subtitle file or directory to process
    #[arg(value_name = "INPUT_PATH")]
    input_path: Option<PathBuf>,

    /// Force overwrite of existing output files
    #[arg(short, long)]
    force_overwrite: bool,

    /// Language tag inserted into output filenames
    #[arg(short, long)]
    language_tag: Option<String>,

    /// Term dictionary file with the substitution tables
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
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

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
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
            let emoji = Self::get_emoji_for_level(record.level());

            let color = match record.level() {
                Level::Error => "\x1B[1;31m",
                Level::Warn => "\x1B[1;33m",
                Level::Info => "\x1B[1;32m",
                Level::Debug => "\x1B[1;36m",
                Level::Trace => "\x1B[1;35m",
            };

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                color, now, emoji, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subtidy", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Shift { input_path, offset_ms }) => {
            let controller = Controller::with_config(Config::default())?;
            controller.shift(input_path, offset_ms)
        }
        Some(Commands::Merge { input_path, second_path }) => {
            let controller = Controller::with_config(Config::default())?;
            controller.merge(input_path, second_path)
        }
        Some(Commands::Fix(args)) => run_fix(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let input_path = cli.input_path.ok_or_else(|| {
                anyhow!("INPUT_PATH is required when no subcommand is specified")
            })?;

            let fix_args = FixArgs {
                input_path,
                force_overwrite: cli.force_overwrite,
                language_tag: cli.language_tag,
                dictionary: cli.dictionary,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_fix(fix_args)
        }
    }
}

fn run_fix(options: FixArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if std::path::Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        // Create default configuration if not exists
        warn!("Config file not found at '{}', creating default config.", config_path);

        let config = Config::default();
        config.save(config_path)
            .with_context(|| format!("Failed to write default config to file: {}", config_path))?;
        config
    };

    // Override config with CLI options if provided
    if let Some(language_tag) = &options.language_tag {
        config.language_tag = language_tag.clone();
    }

    if let Some(dictionary) = &options.dictionary {
        config.dictionary_path = Some(dictionary.clone());
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    // Create controller
    let controller = Controller::with_config(config)?;

    // Run the controller with the input file or directory
    if options.input_path.is_file() {
        controller.run(options.input_path.clone(), options.force_overwrite)
    } else if options.input_path.is_dir() {
        controller.run_folder(options.input_path.clone(), options.force_overwrite)
    } else {
        Err(anyhow!("Input path does not exist: {:?}", options.input_path))
    }
}
