//! Screenwright CLI binary.
//!
//! This binary provides command-line access to Screenwright's functionality:
//! - Segment screenplay text into blocks
//! - Plan and preview the next unit of a draft
//! - Check dialogue attribution
//! - Clean raw generator output

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{Cli, Commands, check_script, clean_script, plan_script, preview_prompt, segment_script};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    screenwright::init_logging(cli.verbose, cli.log_format.into())?;

    // Execute the requested command
    match cli.command {
        Commands::Segment {
            input,
            format,
            clean,
        } => {
            segment_script(&input, format, clean)?;
        }

        Commands::Plan {
            input,
            mode,
            outline,
        } => {
            plan_script(&input, mode, outline.as_deref(), cli.config.as_deref())?;
        }

        Commands::Check { input } => {
            check_script(&input)?;
        }

        Commands::Clean { input } => {
            clean_script(&input)?;
        }

        Commands::Prompt {
            input,
            mode,
            outline,
        } => {
            preview_prompt(&input, mode, outline.as_deref(), cli.config.as_deref())?;
        }
    }

    Ok(())
}
