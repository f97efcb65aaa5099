use anyhow::{Context, Result};
use standup_core::game;

use crate::terminal::TerminalConsole;

pub fn run(console: &mut TerminalConsole) -> Result<()> {
    let session = game::perform(console).context("Stand-up session failed")?;
    tracing::debug!("[Game] Last joke told: {:?}", session.last_joke());
    Ok(())
}
