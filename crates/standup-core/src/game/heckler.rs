//! The heckler who shows up when a joke category is repeated.

use strum::{Display, VariantNames};

use super::stage::INTERRUPT_HINT;
use crate::console::{Console, Prompt, Reply, Tone};
use crate::error::Result;

pub const SHOUT: &str = "A heckler shouts: 'Boooo, same joke again!'";
pub const PROMPT: Prompt = Prompt::new(
    "Do you want to 'confront' or 'ignore' the heckler? ",
    HecklerChoice::VARIANTS,
);

/// How the comedian deals with the heckler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum HecklerChoice {
    Confront,
    Ignore,
}

impl HecklerChoice {
    /// Only an exact `"confront"` confronts; every other answer ignores.
    pub fn from_reply(input: &str) -> Self {
        match input {
            "confront" => HecklerChoice::Confront,
            _ => HecklerChoice::Ignore,
        }
    }

    pub fn response(self) -> &'static str {
        match self {
            HecklerChoice::Confront => "You confront the heckler, the crowd cheers!",
            HecklerChoice::Ignore => "You ignore the heckler and continue on with your set.",
        }
    }
}

/// Runs the heckler sub-dialogue and returns what the comedian chose.
///
/// Ctrl-C prints the leave reminder and asks again; end of input counts as
/// ignoring the heckler.
pub fn confront_or_ignore<C: Console + ?Sized>(console: &mut C) -> Result<HecklerChoice> {
    console.blank_line()?;
    console.write_line(Tone::Heckler, SHOUT)?;
    console.blank_line()?;

    let choice = loop {
        match console.read_reply(&PROMPT)? {
            Reply::Line(answer) => break HecklerChoice::from_reply(&answer),
            Reply::Interrupted => console.write_line(Tone::Notice, INTERRUPT_HINT)?,
            Reply::Closed => break HecklerChoice::Ignore,
        }
    };
    tracing::debug!("[Heckler] comedian chose to {}", choice);

    console.blank_line()?;
    console.write_line(Tone::Heckler, choice.response())?;
    Ok(choice)
}
