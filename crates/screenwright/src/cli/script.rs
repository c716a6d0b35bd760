//! Segmentation, attribution check and cleaning command handlers.

use super::commands::OutputFormat;
use super::input::read_source;
use screenwright::{
    BlockKind, ContinuationState, JsonError, ScreenwrightResult, check_dialogue_attribution,
    clean_response, segment,
};
use std::path::Path;

/// Print the blocks of a screenplay.
#[tracing::instrument(skip(format))]
pub fn segment_script(input: &Path, format: OutputFormat, clean: bool) -> ScreenwrightResult<()> {
    let raw = read_source(input)?;
    let text = if clean { clean_response(&raw) } else { raw };
    let blocks = segment(&text);
    tracing::info!(block_count = blocks.len(), "Segmented screenplay");

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&blocks)
                .map_err(|e| JsonError::new(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Human => {
            for (index, block) in blocks.iter().enumerate() {
                println!("{:>4}  {:<14} {}", index, block.kind().to_string(), block.text());
            }
            println!("{:-<60}", "");
            println!("Total: {} blocks", blocks.len());
        }
    }

    Ok(())
}

/// Report draft progress and verify that every dialogue has a speaker.
#[tracing::instrument]
pub fn check_script(input: &Path) -> ScreenwrightResult<()> {
    let blocks = segment(&read_source(input)?);
    let state = ContinuationState::from_blocks(&blocks);

    println!("Scenes:        {}", state.scene_count);
    println!(
        "Last heading:  {}",
        state.last_scene_heading.as_deref().unwrap_or("(none)")
    );
    println!(
        "Last speaker:  {}",
        state.last_speaker.as_deref().unwrap_or("(none)")
    );
    println!(
        "Dialogue:      {}",
        blocks.iter().filter(|b| b.is(BlockKind::Dialogue)).count()
    );

    check_dialogue_attribution(&blocks)?;
    println!("Dialogue attribution OK");
    Ok(())
}

/// Print a cleaned generator response.
#[tracing::instrument]
pub fn clean_script(input: &Path) -> ScreenwrightResult<()> {
    println!("{}", clean_response(&read_source(input)?));
    Ok(())
}
