use anyhow::{Context, Result};
use standup_core::poem;

use crate::terminal::TerminalConsole;

pub fn run(console: &mut TerminalConsole) -> Result<()> {
    poem::write_poem(console).context("PoemGen did not finish")?;
    Ok(())
}
