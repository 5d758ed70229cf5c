//! Command-line front end for gameplan-seeker.
//!
//! Every invocation loads the game collection, replays the persisted
//! selection from the list file, runs one command and writes the selection
//! back when the command changed it.

mod cli;
mod commands;
mod logger;

pub use cli::{Cli, Command, ViewArgs};
pub use commands::run;
pub use logger::init_logger;
