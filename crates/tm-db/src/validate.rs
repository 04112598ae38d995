//! Data invariant checks
//!
//! Owned databases cannot hold duplicate keys, so [`Database::validate`]
//! only checks references and tag coverage. [`validate_static`] also looks
//! for duplicates in the static tables; duplicates in database files are
//! caught while reading them (see [`crate::io`]).

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;
use tm_data::{LOCATIONS, NPCS, Tag, TagKind};

use crate::model::Database;

/// A broken data invariant
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("duplicate NPC key `{0}`")]
    DuplicateNpc(String),

    #[error("NPC `{npc}` repeats tag `{tag}`")]
    DuplicateTag { npc: String, tag: String },

    #[error("duplicate location key `{0}`")]
    DuplicateLocation(String),

    #[error("location `{location}` lists NPC `{npc}` twice")]
    DuplicateLocationNpc { location: String, npc: String },

    #[error("location `{location}` references unknown NPC `{npc}`")]
    UnknownNpc { location: String, npc: String },

    #[error("NPC `{0}` has no tags")]
    EmptyTags(String),

    #[error("NPC `{0}` has no role tag")]
    MissingRole(String),

    #[error("NPC `{0}` has no location tag")]
    MissingArea(String),

    #[error("location `{location}` has an empty label for `{npc}`")]
    EmptyLabel { location: String, npc: String },

    #[error("duplicate quest key `{0}`")]
    DuplicateQuest(String),
}

/// Every violation found in one pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub(crate) fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub(crate) fn into_result(self) -> Result<(), ValidationReport> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} violation(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "\n  - {violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

fn check_tags<'a>(
    report: &mut ValidationReport,
    npc: &str,
    tags: impl IntoIterator<Item = &'a str>,
) {
    let kinds: Vec<TagKind> = tags.into_iter().map(|t| Tag::classify(t).kind()).collect();
    if kinds.is_empty() {
        report.push(Violation::EmptyTags(npc.to_string()));
        return;
    }
    if !kinds.contains(&TagKind::Role) {
        report.push(Violation::MissingRole(npc.to_string()));
    }
    if !kinds.contains(&TagKind::Area) {
        report.push(Violation::MissingArea(npc.to_string()));
    }
}

impl Database {
    /// Check references and tag coverage
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::default();

        for (npc, tags) in &self.npcs {
            check_tags(&mut report, npc, tags.iter().map(String::as_str));
        }

        for (location, roles) in &self.locations {
            for (npc, label) in roles {
                if !self.npcs.contains_key(npc) {
                    report.push(Violation::UnknownNpc {
                        location: location.clone(),
                        npc: npc.clone(),
                    });
                }
                if label.trim().is_empty() {
                    report.push(Violation::EmptyLabel {
                        location: location.clone(),
                        npc: npc.clone(),
                    });
                }
            }
        }

        report.into_result()
    }
}

/// Check the static tables, duplicates included
pub fn validate_static() -> Result<(), ValidationReport> {
    let mut report = ValidationReport::default();

    let mut npc_ids = HashSet::new();
    for npc in NPCS {
        if !npc_ids.insert(npc.id) {
            report.push(Violation::DuplicateNpc(npc.id.to_string()));
        }
        let mut seen = HashSet::new();
        for tag in npc.tags {
            if !seen.insert(*tag) {
                report.push(Violation::DuplicateTag {
                    npc: npc.id.to_string(),
                    tag: tag.to_string(),
                });
            }
        }
        check_tags(&mut report, npc.id, npc.tags.iter().copied());
    }

    let mut location_ids = HashSet::new();
    for loc in LOCATIONS {
        if !location_ids.insert(loc.id) {
            report.push(Violation::DuplicateLocation(loc.id.to_string()));
        }
        let mut seen = HashSet::new();
        for (npc, label) in loc.roles {
            if !seen.insert(*npc) {
                report.push(Violation::DuplicateLocationNpc {
                    location: loc.id.to_string(),
                    npc: npc.to_string(),
                });
            }
            if !npc_ids.contains(npc) {
                report.push(Violation::UnknownNpc {
                    location: loc.id.to_string(),
                    npc: npc.to_string(),
                });
            }
            if label.trim().is_empty() {
                report.push(Violation::EmptyLabel {
                    location: loc.id.to_string(),
                    npc: npc.to_string(),
                });
            }
        }
    }

    report.into_result()
}
