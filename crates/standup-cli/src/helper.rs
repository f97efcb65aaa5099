use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// rustyline helper that completes, hints and highlights the answers the
/// current prompt suggests.
///
/// The choices are swapped before every prompt; they are suggestions only
/// and any line is accepted.
#[derive(Clone, Default)]
pub struct PromptHelper {
    choices: Vec<&'static str>,
}

impl PromptHelper {
    pub fn set_choices(&mut self, choices: &[&'static str]) {
        self.choices = choices.to_vec();
    }

    fn matching<'a>(&'a self, typed: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.choices
            .iter()
            .copied()
            .filter(move |choice| choice.starts_with(typed))
    }
}

impl Helper for PromptHelper {}

impl Completer for PromptHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let candidates: Vec<Pair> = self
            .matching(&line[..pos])
            .map(|choice| Pair {
                display: choice.to_string(),
                replacement: choice.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for PromptHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.choices.iter().any(|choice| *choice == line) {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for PromptHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let typed = &line[..pos];
        if typed.is_empty() {
            return None;
        }

        self.matching(typed)
            .find(|choice| choice.len() > typed.len())
            .map(|choice| choice[typed.len()..].to_string())
    }
}

impl Validator for PromptHelper {}
