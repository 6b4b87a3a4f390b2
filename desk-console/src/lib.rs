//! Command-line front end for the Desk admin console.
//!
//! Stands in for the view layer: it opens the stores, runs the validator
//! before every create and update, and renders pages of the snapshot.
//!
//! Usage:
//!   desk login admin@example.com
//!   desk messages list --page 2
//!   desk users add --name "Ervin Howell" --email shanna@melissa.tv --phone 010-692-6593
//!
//! Collection commands require a saved session.
//!
//! Each invocation loads the collections afresh. `desk shell` keeps one
//! [`Console`] for the whole session, so local changes stay visible:
//!
//! ```text
//! desk> messages add --title "Out of office" --body "Back on Monday"
//! Added message 21
//! desk> messages update 21 --body "Back on Tuesday"
//! ```

mod cli;
mod commands;
mod config;
pub mod render;
mod shell;

pub use cli::{Cli, Command, ListArgs, MessageCommand, UserCommand};
pub use commands::{Console, run};
pub use config::{ConsoleConfig, default_session_dir};
pub use shell::split_words;
