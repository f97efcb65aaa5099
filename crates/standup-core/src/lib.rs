pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod poem;

// Re-export common types
pub use config::Config;
pub use console::{Console, Prompt, Reply, ScriptedConsole, Tone};
pub use error::{Result, StandupError};
