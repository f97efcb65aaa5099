//! Game session state: running/ended, the last joke told, and counters.

use super::joke::JokeKind;

/// The literal action that ends a session.
pub const LEAVE: &str = "leave";

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// The comedian is on stage and the loop keeps prompting.
    #[default]
    Running,
    /// The comedian left the stage (or input ran out).
    Ended,
}

/// What the player asked to do at the action prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Exactly `"leave"`.
    Leave,
    /// Anything else, `"joke"` or not.
    Perform,
}

impl Action {
    pub fn parse(input: &str) -> Self {
        if input == LEAVE {
            Action::Leave
        } else {
            Action::Perform
        }
    }
}

/// How a joke turn played out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The kind repeated the previous one and the heckler takes over.
    Heckled,
    /// The kind was dispatched to its response.
    Dispatched(JokeKind),
}

/// Counters kept for the end-of-session log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionStats {
    /// Completed joke turns, heckled or not.
    pub turns: usize,
    /// Turns that reached a known category response.
    pub jokes_landed: usize,
    /// Turns that hit the fallback response.
    pub duds: usize,
    /// Turns taken over by the heckler.
    pub hecklers: usize,
}

/// State of one stand-up session.
///
/// `last_joke` starts as `None` and therefore never matches the first kind,
/// not even an empty one. A last joke of `""` would heckle an empty first
/// answer; `None` keeps turn one free of hecklers.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: GameState,
    last_joke: Option<String>,
    stats: SessionStats,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == GameState::Running
    }

    pub fn last_joke(&self) -> Option<&str> {
        self.last_joke.as_deref()
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Applies the answer to the action prompt. `"leave"` ends the session.
    pub fn choose(&mut self, input: &str) -> Action {
        let action = Action::parse(input);
        if action == Action::Leave {
            self.end();
        }
        action
    }

    /// Plays one joke turn and records `kind` as the last joke.
    ///
    /// The heckler decision compares raw strings, so `"dad"` followed by
    /// `"dad"` is heckled and so is `"pun"` followed by `"pun"`.
    pub fn tell(&mut self, kind: &str) -> TurnOutcome {
        let outcome = if self.last_joke.as_deref() == Some(kind) {
            self.stats.hecklers += 1;
            TurnOutcome::Heckled
        } else {
            let parsed = JokeKind::parse(kind);
            match parsed {
                JokeKind::Known(_) => self.stats.jokes_landed += 1,
                JokeKind::Unrecognized(_) => self.stats.duds += 1,
            }
            TurnOutcome::Dispatched(parsed)
        };

        self.last_joke = Some(kind.to_string());
        self.stats.turns += 1;
        outcome
    }

    /// Moves to [`GameState::Ended`]. Idempotent.
    pub fn end(&mut self) {
        self.state = GameState::Ended;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::joke::Category;

    #[test]
    fn test_new_session_is_running_without_last_joke() {
        let session = Session::new();
        assert_eq!(session.state(), GameState::Running);
        assert_eq!(session.last_joke(), None);
        assert_eq!(session.stats(), SessionStats::default());
    }

    #[test]
    fn test_only_exact_leave_ends() {
        let mut session = Session::new();
        for input in ["joke", "Leave", "leave ", "", "quit", "exit"] {
            assert_eq!(session.choose(input), Action::Perform);
            assert!(session.is_running(), "{input:?} must not end the session");
        }
        assert_eq!(session.choose("leave"), Action::Leave);
        assert_eq!(session.state(), GameState::Ended);
    }

    #[test]
    fn test_empty_kind_on_first_turn_is_not_heckled() {
        let mut session = Session::new();
        assert_eq!(
            session.tell(""),
            TurnOutcome::Dispatched(JokeKind::Unrecognized(String::new()))
        );
        assert_eq!(session.last_joke(), Some(""));
        assert_eq!(session.tell(""), TurnOutcome::Heckled);
    }

    #[test]
    fn test_repeat_is_heckled_and_still_recorded() {
        let mut session = Session::new();
        assert_eq!(
            session.tell("dad"),
            TurnOutcome::Dispatched(JokeKind::Known(Category::Dad))
        );
        assert_eq!(session.tell("dad"), TurnOutcome::Heckled);
        assert_eq!(session.last_joke(), Some("dad"));
        assert_eq!(session.tell("dad"), TurnOutcome::Heckled);
    }

    #[test]
    fn test_dispatch_after_heckler_is_unaffected() {
        let mut session = Session::new();
        session.tell("crowd");
        session.tell("crowd");
        assert_eq!(
            session.tell("knock-knock"),
            TurnOutcome::Dispatched(JokeKind::Known(Category::KnockKnock))
        );
        assert_eq!(
            session.tell("crowd"),
            TurnOutcome::Dispatched(JokeKind::Known(Category::Crowd))
        );
    }

    #[test]
    fn test_unrecognized_kind_is_recorded_and_can_be_heckled() {
        let mut session = Session::new();
        session.tell("pun");
        assert_eq!(session.last_joke(), Some("pun"));
        assert_eq!(session.tell("pun"), TurnOutcome::Heckled);
    }

    #[test]
    fn test_stats_count_each_outcome() {
        let mut session = Session::new();
        session.tell("dad");
        session.tell("dad");
        session.tell("pun");
        session.tell("crowd");

        assert_eq!(
            session.stats(),
            SessionStats {
                turns: 4,
                jokes_landed: 2,
                duds: 1,
                hecklers: 1,
            }
        );
    }
}
