//! PoemGen: four prompts, two composed lines, one printed.
//!
//! The material line is composed but never printed: `write_poem` keeps it
//! on the returned [`Poem`] and logs it at debug level.

use crate::console::{Console, Prompt, Reply, Tone};
use crate::error::{Result, StandupError};

const BANNER: [&str; 3] = [
    "Welcome to PoemGen.",
    "Let's write something poem-y.",
    "-•-•-•-•-•-•-•>>>>>>",
];

pub const FEELING_PROMPT: Prompt = Prompt::free("How do you feel?: ");
pub const WORD_PROMPT: Prompt = Prompt::free("Enter a random word: ");
pub const SECOND_WORD_PROMPT: Prompt = Prompt::free("Enter another random word: ");
pub const MATERIAL_PROMPT: Prompt =
    Prompt::new("Choose one (Metal, wood, rock): ", &["Metal", "wood", "rock"]);

/// The four free-form answers a poem is built from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PoemAnswers {
    pub emotional_state: String,
    pub random_word1: String,
    pub random_word2: String,
    pub natural_material: String,
}

/// A composed poem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poem {
    /// Printed: `Feeling {emotional_state} and {random_word1}.`
    pub feeling_line: String,
    /// Not printed: `The {random_word2} is made out of {natural_material}.`
    pub material_line: String,
}

impl Poem {
    pub fn compose(answers: &PoemAnswers) -> Self {
        Self {
            feeling_line: format!(
                "Feeling {} and {}.",
                answers.emotional_state, answers.random_word1
            ),
            material_line: format!(
                "The {} is made out of {}.",
                answers.random_word2, answers.natural_material
            ),
        }
    }
}

/// Runs PoemGen on `console` and returns the composed poem.
///
/// Fails with [`StandupError::InputClosed`] if input ends or is
/// interrupted before all four answers are in.
pub fn write_poem<C: Console + ?Sized>(console: &mut C) -> Result<Poem> {
    for line in BANNER {
        console.write_line(Tone::Banner, line)?;
    }

    let answers = PoemAnswers {
        emotional_state: ask(console, &FEELING_PROMPT)?,
        random_word1: ask(console, &WORD_PROMPT)?,
        random_word2: ask(console, &SECOND_WORD_PROMPT)?,
        natural_material: ask(console, &MATERIAL_PROMPT)?,
    };

    let poem = Poem::compose(&answers);
    tracing::debug!(material_line = %poem.material_line, "[Poem] Composed");
    console.write_line(Tone::Poem, &poem.feeling_line)?;
    Ok(poem)
}

fn ask<C: Console + ?Sized>(console: &mut C, prompt: &Prompt) -> Result<String> {
    match console.read_reply(prompt)? {
        Reply::Line(answer) => Ok(answer),
        Reply::Interrupted | Reply::Closed => Err(StandupError::input_closed(prompt.text)),
    }
}
