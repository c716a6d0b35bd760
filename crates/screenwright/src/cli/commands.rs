//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use screenwright::{LogFormat, ScriptMode};
use std::path::PathBuf;

/// Screenwright - screenplay segmentation and continuation planning
#[derive(Parser, Debug)]
#[command(name = "screenwright")]
#[command(about = "Screenplay segmentation and continuation planning", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log line format
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormatArg,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split screenplay text into typed blocks
    Segment {
        /// Screenplay file, or `-` for stdin
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,

        /// Clean the text as a raw generator response first
        #[arg(long)]
        clean: bool,
    },

    /// Show the continuation plan for a draft
    Plan {
        /// Draft file, or `-` for stdin
        input: PathBuf,

        /// Script mode (defaults to the configured mode)
        #[arg(long)]
        mode: Option<ModeArg>,

        /// Story outline file
        #[arg(long)]
        outline: Option<PathBuf>,
    },

    /// Check dialogue attribution and report draft progress
    Check {
        /// Draft file, or `-` for stdin
        input: PathBuf,
    },

    /// Clean a raw generator response
    Clean {
        /// Response file, or `-` for stdin
        input: PathBuf,
    },

    /// Print the prompt that would be sent for the next unit
    Prompt {
        /// Draft file, or `-` for stdin
        input: PathBuf,

        /// Script mode (defaults to the configured mode)
        #[arg(long)]
        mode: Option<ModeArg>,

        /// Story outline file
        #[arg(long)]
        outline: Option<PathBuf>,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

/// Script mode options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    /// Multi-scene short film
    ShortFilm,
    /// Short vertical social video
    SocialShort,
}

impl From<ModeArg> for ScriptMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::ShortFilm => ScriptMode::ShortFilm,
            ModeArg::SocialShort => ScriptMode::SocialShort,
        }
    }
}

/// Log format options
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum LogFormatArg {
    /// Human-readable lines
    Text,
    /// One JSON object per line
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
