//! Small command-line utilities: an interactive number-guessing game,
//! a loan installment calculator and a headline-search client.
//!
//! The game is split into a pure engine ([`game::GameEngine`]) and an
//! interaction loop ([`game::Session`]) that works over any reader/writer.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod emi;
pub mod game;
pub mod logging;
pub mod news;
pub mod prompt;

pub use config::{GameConfig, NewsConfig};
pub use game::{GameEngine, GameError, GameStatus, Session, SessionError, Verdict};
