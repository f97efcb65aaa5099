//! Stage banner shown once when a session starts.

use crate::console::{Console, Tone};
use crate::error::Result;

const ART: [&str; 9] = [
    r"|  |  |  |  |  |  |  |  |  |  |  |  |",
    r" |  |  |  |  |  |  |  |  |  |  |  |  ",
    r"|  |  |  |  o--|  |  |  |  |  |  |  |",
    r" |  |  |  |   \ |  |  |  |  |  |  | ",
    r"|  |  |  |  | ||\|  |  |  |  |  |  |",
    r"  |  |  |  |  || \ |  |  |  |  |  | ",
    r"|  |  |  |  | ||  |  |  |  |  |  |  |",
    r"_____________====____________________",
    r"_____________________________________",
];

const INSTRUCTIONS: [&str; 3] = [
    "You are a stand-up comedian. Before you, a crowd and a microphone.",
    "Tell jokes to the crowd.",
    "Type 'leave' anytime to get off the stage.",
];

pub fn show<C: Console + ?Sized>(console: &mut C) -> Result<()> {
    for line in ART.iter().chain(INSTRUCTIONS.iter()) {
        console.write_line(Tone::Banner, line)?;
    }
    console.blank_line()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;

    #[test]
    fn test_banner_ends_with_instructions_and_blank_line() {
        let mut console = ScriptedConsole::default();
        show(&mut console).unwrap();

        let lines = console.lines();
        assert_eq!(lines.len(), ART.len() + INSTRUCTIONS.len() + 1);
        assert_eq!(lines[lines.len() - 2], "Type 'leave' anytime to get off the stage.");
        assert_eq!(lines.last(), Some(&""));
        assert!(console.prompts().is_empty());
    }

    #[test]
    fn test_microphone_art_keeps_backslashes() {
        assert_eq!(ART[3], " |  |  |  |   \\ |  |  |  |  |  |  | ");
        assert!(ART[4].contains(r"||\|"));
    }
}
