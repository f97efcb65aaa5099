//! Terminal I/O seam shared by the game and the poem generator.
//!
//! Game logic never touches stdin/stdout directly. It prints through
//! [`Console::write_line`] and asks questions through [`Console::read_reply`],
//! so the binary can plug in a line editor and tests can plug in a
//! [`ScriptedConsole`].

use std::collections::VecDeque;

use crate::error::Result;

/// The role a printed line plays, used by front-ends to pick a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Static intro art and instructions.
    Banner,
    /// Scene-setting text between prompts.
    Narration,
    /// The crowd's reaction to a joke.
    Joke,
    /// Anything the heckler says or causes.
    Heckler,
    /// Leaving the stage.
    Farewell,
    /// Out-of-band hints (e.g. after Ctrl-C).
    Notice,
    /// Generated poem text.
    Poem,
}

/// A question put to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prompt {
    /// Text shown before the cursor, trailing space included.
    pub text: &'static str,
    /// Answers the front-end may offer as completions. Never enforced.
    pub choices: &'static [&'static str],
}

impl Prompt {
    pub const fn new(text: &'static str, choices: &'static [&'static str]) -> Self {
        Self { text, choices }
    }

    /// A prompt that takes free text only.
    pub const fn free(text: &'static str) -> Self {
        Self { text, choices: &[] }
    }
}

/// What came back from a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// A complete line, without the trailing newline. Not trimmed.
    Line(String),
    /// The player pressed Ctrl-C.
    Interrupted,
    /// Input ended (Ctrl-D or a closed stdin).
    Closed,
}

/// Line-oriented console used by the game and the poem generator.
pub trait Console {
    /// Prints one line of output.
    fn write_line(&mut self, tone: Tone, text: &str) -> Result<()>;

    /// Shows `prompt` and blocks until the player answers.
    fn read_reply(&mut self, prompt: &Prompt) -> Result<Reply>;

    /// Prints an empty line.
    fn blank_line(&mut self) -> Result<()> {
        self.write_line(Tone::Narration, "")
    }
}

/// One recorded interaction of a [`ScriptedConsole`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Output { tone: Tone, text: String },
    Asked { prompt: &'static str, reply: Reply },
}

/// A [`Console`] that replays queued replies and records everything.
///
/// Once the queue is exhausted every further prompt gets [`Reply::Closed`].
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    replies: VecDeque<Reply>,
    transcript: Vec<Entry>,
}

impl ScriptedConsole {
    /// Creates a console that answers prompts with `answers`, in order.
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_replies(answers.into_iter().map(|a| Reply::Line(a.into())))
    }

    /// Creates a console from raw replies, for scripting interrupts.
    pub fn with_replies(replies: impl IntoIterator<Item = Reply>) -> Self {
        Self {
            replies: replies.into_iter().collect(),
            transcript: Vec::new(),
        }
    }

    /// Everything printed or asked so far.
    pub fn transcript(&self) -> &[Entry] {
        &self.transcript
    }

    /// Printed lines, in order, blank lines included.
    pub fn lines(&self) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|entry| match entry {
                Entry::Output { text, .. } => Some(text.as_str()),
                Entry::Asked { .. } => None,
            })
            .collect()
    }

    /// Printed lines with the given tone.
    pub fn lines_with_tone(&self, wanted: Tone) -> Vec<&str> {
        self.transcript
            .iter()
            .filter_map(|entry| match entry {
                Entry::Output { tone, text } if *tone == wanted => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Prompt texts in the order they were shown.
    pub fn prompts(&self) -> Vec<&'static str> {
        self.transcript
            .iter()
            .filter_map(|entry| match entry {
                Entry::Asked { prompt, .. } => Some(*prompt),
                Entry::Output { .. } => None,
            })
            .collect()
    }

    /// Number of queued replies not consumed yet.
    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, tone: Tone, text: &str) -> Result<()> {
        self.transcript.push(Entry::Output {
            tone,
            text: text.to_string(),
        });
        Ok(())
    }

    fn read_reply(&mut self, prompt: &Prompt) -> Result<Reply> {
        let reply = self.replies.pop_front().unwrap_or(Reply::Closed);
        self.transcript.push(Entry::Asked {
            prompt: prompt.text,
            reply: reply.clone(),
        });
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ASK: Prompt = Prompt::new("Ready? ", &["yes", "no"]);

    #[test]
    fn test_scripted_console_replays_in_order() {
        let mut console = ScriptedConsole::new(["first", "second"]);

        assert_eq!(console.read_reply(&ASK).unwrap(), Reply::Line("first".into()));
        assert_eq!(console.read_reply(&ASK).unwrap(), Reply::Line("second".into()));
        assert_eq!(console.read_reply(&ASK).unwrap(), Reply::Closed);
        assert_eq!(console.prompts(), vec!["Ready? "; 3]);
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_scripted_console_records_output_and_tone() {
        let mut console = ScriptedConsole::default();
        console.write_line(Tone::Banner, "hello").unwrap();
        console.blank_line().unwrap();
        console.write_line(Tone::Joke, "ha").unwrap();

        assert_eq!(console.lines(), vec!["hello", "", "ha"]);
        assert_eq!(console.lines_with_tone(Tone::Joke), vec!["ha"]);
    }

    #[test]
    fn test_transcript_interleaves_output_and_prompts() {
        let mut console = ScriptedConsole::new(["yes"]);
        console.write_line(Tone::Narration, "Curtain up.").unwrap();
        console.read_reply(&ASK).unwrap();

        assert_eq!(
            console.transcript(),
            &[
                Entry::Output {
                    tone: Tone::Narration,
                    text: "Curtain up.".to_string(),
                },
                Entry::Asked {
                    prompt: "Ready? ",
                    reply: Reply::Line("yes".to_string()),
                },
            ]
        );
    }

    #[test]
    fn test_replies_are_not_trimmed() {
        let mut console = ScriptedConsole::new([" dad "]);
        assert_eq!(console.read_reply(&ASK).unwrap(), Reply::Line(" dad ".into()));
    }
}
