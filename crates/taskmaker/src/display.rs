//! Text rendering for CLI output

use std::fmt::Write;

use strum::IntoEnumIterator;
use tm_data::{Tag, TagKind};
use tm_db::{Database, ValidationReport};

/// Tags of one NPC grouped by kind, plus its label in its home location
pub fn render_npc(db: &Database, id: &str) -> Option<String> {
    let tags = db.tags(id)?;
    let classified: Vec<Tag<'_>> = tags.iter().map(|t| Tag::classify(t)).collect();

    let mut out = String::new();
    let _ = writeln!(out, "{id}");
    for kind in TagKind::iter() {
        let names: Vec<String> = classified
            .iter()
            .filter(|tag| tag.kind() == kind)
            .map(|tag| tag.to_string())
            .collect();
        if !names.is_empty() {
            let _ = writeln!(out, "  {:<8} {}", format!("{kind}:"), names.join(", "));
        }
    }

    let label = classified
        .iter()
        .find_map(|tag| tag.as_area())
        .and_then(|area| db.label(area.location_key(), id));
    if let Some(label) = label {
        let _ = writeln!(out, "  {:<8} {}", "Label:", label);
    }
    Some(out)
}

/// NPC -> label table of one location
pub fn render_location(db: &Database, key: &str) -> Option<String> {
    let roles = db.location(key)?;
    let width = roles.keys().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{} ({} NPCs)", key.to_lowercase(), roles.len());
    for (npc, label) in roles {
        let _ = writeln!(out, "  {npc:<width$}  {label}");
    }
    Some(out)
}

/// One NPC id per line
pub fn render_tag(db: &Database, tag: &str) -> String {
    let mut out = String::new();
    for id in db.npcs_with_tag(tag) {
        let _ = writeln!(out, "{id}");
    }
    out
}

pub fn render_report(report: &ValidationReport) -> String {
    format!("{report}\n")
}
