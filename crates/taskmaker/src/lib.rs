//! taskmaker: command-line front end for the NPC database
//!
//! Looks up NPCs, locations and tags, checks the data and exports it as JSON.

pub mod cli;
pub mod display;
pub mod logging;

pub use cli::{Args, Command, run};
