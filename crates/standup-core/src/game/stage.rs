//! The stand-up game loop.

use strum::VariantNames;

use super::heckler;
use super::intro;
use super::joke::Category;
use super::session::{Action, Session, TurnOutcome};
use crate::console::{Console, Prompt, Reply, Tone};
use crate::error::Result;

pub const STAGE_LINE: &str = "You are on stage, the crowd awaits.";
pub const LEAVE_LINE: &str = "You leave the stage.";
pub const INTERRUPT_HINT: &str = "Type 'leave' anytime to get off the stage.";

pub const ACTION_PROMPT: Prompt =
    Prompt::new("Do you want to tell a 'joke' or 'leave'? ", &["joke", "leave"]);
pub const KIND_PROMPT: Prompt =
    Prompt::new("Pick a joke: crowd / knock-knock / dad: ", Category::VARIANTS);

/// Drives a [`Session`] against a [`Console`].
pub struct Stage<'c, C: Console + ?Sized> {
    console: &'c mut C,
    session: Session,
}

impl<'c, C: Console + ?Sized> Stage<'c, C> {
    pub fn new(console: &'c mut C) -> Self {
        Self {
            console,
            session: Session::new(),
        }
    }

    /// Shows the banner and loops until the comedian leaves or input ends.
    ///
    /// Returns the finished session so callers can inspect `last_joke`.
    pub fn perform(mut self) -> Result<Session> {
        tracing::info!("[Session] Comedian takes the stage");
        intro::show(&mut *self.console)?;

        while self.session.is_running() {
            self.turn()?;
        }

        let stats = self.session.stats();
        tracing::info!(
            turns = stats.turns,
            jokes_landed = stats.jokes_landed,
            duds = stats.duds,
            hecklers = stats.hecklers,
            "[Session] Set finished"
        );
        Ok(self.session)
    }

    fn turn(&mut self) -> Result<()> {
        self.console.blank_line()?;
        self.console.write_line(Tone::Narration, STAGE_LINE)?;

        let Some(action) = self.ask(&ACTION_PROMPT)? else {
            return Ok(());
        };
        if self.session.choose(&action) == Action::Leave {
            self.console.blank_line()?;
            self.console.write_line(Tone::Farewell, LEAVE_LINE)?;
            return Ok(());
        }

        let Some(kind) = self.ask(&KIND_PROMPT)? else {
            return Ok(());
        };
        match self.session.tell(&kind) {
            TurnOutcome::Heckled => {
                tracing::debug!("[Session] '{}' repeated, heckler interrupts", kind);
                heckler::confront_or_ignore(&mut *self.console)?;
            }
            TurnOutcome::Dispatched(joke) => {
                tracing::debug!("[Session] Dispatching joke '{}'", joke.as_str());
                self.console.blank_line()?;
                self.console.write_line(Tone::Joke, joke.response())?;
            }
        }
        Ok(())
    }

    /// Asks until a line comes back. `None` means input ended and the
    /// session has been closed.
    fn ask(&mut self, prompt: &Prompt) -> Result<Option<String>> {
        loop {
            match self.console.read_reply(prompt)? {
                Reply::Line(line) => return Ok(Some(line)),
                Reply::Interrupted => {
                    self.console.write_line(Tone::Notice, INTERRUPT_HINT)?;
                }
                Reply::Closed => {
                    tracing::info!("[Session] Input closed, leaving the stage");
                    self.session.end();
                    return Ok(None);
                }
            }
        }
    }
}

/// Runs a full stand-up session on `console`.
pub fn perform<C: Console + ?Sized>(console: &mut C) -> Result<Session> {
    Stage::new(console).perform()
}
