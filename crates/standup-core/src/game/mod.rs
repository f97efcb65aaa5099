//! Stand-up comedy game.
//!
//! # Module Structure
//!
//! - `intro`: Stage banner shown once per session
//! - `joke`: Joke categories and their responses (`Category`, `JokeKind`)
//! - `session`: Session state machine (`Session`, `GameState`, `TurnOutcome`)
//! - `heckler`: Heckler sub-dialogue (`HecklerChoice`)
//! - `stage`: The prompt loop tying the pieces to a `Console`
//!
//! # Usage
//!
//! ```
//! use standup_core::console::ScriptedConsole;
//! use standup_core::game;
//!
//! let mut console = ScriptedConsole::new(["joke", "dad", "leave"]);
//! let session = game::perform(&mut console).unwrap();
//! assert_eq!(session.last_joke(), Some("dad"));
//! ```

pub mod heckler;
mod intro;
mod joke;
mod session;
mod stage;

// Re-export public API
pub use heckler::HecklerChoice;
pub use joke::{Category, JokeKind};
pub use session::{Action, GameState, LEAVE, Session, SessionStats, TurnOutcome};
pub use stage::{ACTION_PROMPT, KIND_PROMPT, LEAVE_LINE, STAGE_LINE, Stage, perform};
