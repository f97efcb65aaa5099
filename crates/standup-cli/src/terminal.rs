use colored::{ColoredString, Colorize};
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use standup_core::{Console, Prompt, Reply, StandupError, Tone};

use crate::helper::PromptHelper;

/// [`Console`] backed by a rustyline editor on the real terminal.
pub struct TerminalConsole {
    editor: Editor<PromptHelper, DefaultHistory>,
    history: bool,
}

impl TerminalConsole {
    pub fn new(history: bool) -> standup_core::Result<Self> {
        let mut editor: Editor<PromptHelper, DefaultHistory> =
            Editor::new().map_err(|e| StandupError::terminal(e.to_string()))?;
        editor.set_helper(Some(PromptHelper::default()));
        Ok(Self { editor, history })
    }
}

fn styled(tone: Tone, text: &str) -> ColoredString {
    match tone {
        Tone::Banner => text.bright_magenta().bold(),
        Tone::Narration => text.normal(),
        Tone::Joke => text.bright_blue(),
        Tone::Heckler => text.bright_yellow(),
        Tone::Farewell => text.bright_green(),
        Tone::Notice => text.yellow(),
        Tone::Poem => text.bright_cyan().italic(),
    }
}

impl Console for TerminalConsole {
    fn write_line(&mut self, tone: Tone, text: &str) -> standup_core::Result<()> {
        if text.is_empty() {
            println!();
        } else {
            println!("{}", styled(tone, text));
        }
        Ok(())
    }

    fn read_reply(&mut self, prompt: &Prompt) -> standup_core::Result<Reply> {
        if let Some(helper) = self.editor.helper_mut() {
            helper.set_choices(prompt.choices);
        }

        match self.editor.readline(prompt.text) {
            Ok(line) => {
                if self.history && !line.is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Reply::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Reply::Interrupted),
            Err(ReadlineError::Eof) => Ok(Reply::Closed),
            Err(err) => {
                tracing::error!("[Terminal] readline failed: {:?}", err);
                Err(StandupError::terminal(err.to_string()))
            }
        }
    }
}
