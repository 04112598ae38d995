//! Command-line arguments and command dispatch

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tm_db::{Config, Database, DbError, load_database, save_database, validate_static};

use crate::display;

/// Browse, check and export the taskmaker NPC database
#[derive(Parser, Debug)]
#[command(name = "taskmaker")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file (defaults to the platform config directory)
    #[arg(long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show the tags of an NPC
    Npc {
        /// Engine section name
        id: String,
    },
    /// Show the NPC labels of a location
    Location {
        /// Location key (e.g. "bar", "military")
        key: String,
    },
    /// List NPCs carrying a tag
    Tag {
        /// Tag, matched exactly (e.g. "Mechanic", "Freedom")
        tag: String,
    },
    /// Check data invariants
    Validate {
        /// Database file to check instead of the built-in tables
        #[arg(short = 'f', long = "file")]
        file: Option<PathBuf>,
    },
    /// Write the database as JSON
    Export {
        /// Output file (defaults to <export_dir>/taskmaker_db.json)
        #[arg(short = 'o', long = "output")]
        output: Option<PathBuf>,
    },
}

/// Default export file name
pub const EXPORT_FILE: &str = "taskmaker_db.json";

/// Run a command. `Ok(false)` means the command ran but found problems.
pub fn run(args: &Args, out: &mut impl Write) -> anyhow::Result<bool> {
    let config = Config::load_or_default(args.config.as_deref())
        .context("failed to load configuration")?;
    tracing::debug!(?config, "configuration loaded");

    match &args.command {
        Command::Npc { id } => {
            let db = Database::builtin();
            let Some(text) = display::render_npc(&db, id) else {
                bail!("unknown NPC `{id}`");
            };
            write!(out, "{text}")?;
        }
        Command::Location { key } => {
            let db = Database::builtin();
            let Some(text) = display::render_location(&db, key) else {
                bail!("unknown location `{key}`");
            };
            write!(out, "{text}")?;
        }
        Command::Tag { tag } => {
            let db = Database::builtin();
            let text = display::render_tag(&db, tag);
            if text.is_empty() {
                tracing::warn!("no NPC carries tag `{}`", tag);
            }
            write!(out, "{text}")?;
        }
        Command::Validate { file } => return validate(file.as_deref(), out),
        Command::Export { output } => {
            let path = output
                .clone()
                .unwrap_or_else(|| config.export_dir.join(EXPORT_FILE));
            save_database(&Database::builtin(), &config, &path)
                .with_context(|| format!("failed to export to {}", path.display()))?;
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(true)
}

fn validate(file: Option<&Path>, out: &mut impl Write) -> anyhow::Result<bool> {
    let result = match file {
        None => validate_static().and_then(|()| Database::builtin().validate()),
        Some(path) => match load_database(path) {
            Ok(_) => Ok(()),
            Err(DbError::Invalid(report)) => Err(report),
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
        },
    };

    match result {
        Ok(()) => {
            writeln!(out, "ok")?;
            Ok(true)
        }
        Err(report) => {
            write!(out, "{}", display::render_report(&report))?;
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn test_parse_subcommands() {
        let args = parse(&["taskmaker", "npc", "snitch"]);
        assert_eq!(
            args.command,
            Command::Npc {
                id: "snitch".to_string()
            }
        );

        let args = parse(&["taskmaker", "-v", "export", "-o", "out.json"]);
        assert!(args.verbose);
        assert_eq!(
            args.command,
            Command::Export {
                output: Some(PathBuf::from("out.json"))
            }
        );

        let args = parse(&["taskmaker", "validate", "--config", "c.json"]);
        assert_eq!(args.config, Some(PathBuf::from("c.json")));
        assert_eq!(args.command, Command::Validate { file: None });
    }

    #[test]
    fn test_missing_subcommand_is_error() {
        assert!(Args::try_parse_from(["taskmaker"]).is_err());
    }
}
