pub mod game;
pub mod poem;
