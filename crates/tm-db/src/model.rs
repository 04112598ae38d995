//! Owned database model

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tm_data::{AreaTag, LOCATIONS, NPCS, QUESTS, Tag};

/// NPC tags, location labels and quests as owned maps.
///
/// Maps are ordered so exported JSON is stable between runs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Database {
    /// NPC id -> tag set
    pub npcs: BTreeMap<String, BTreeSet<String>>,
    /// Location key -> NPC id -> display label
    pub locations: BTreeMap<String, BTreeMap<String, String>>,
    /// Quest key -> quest data (shape not fixed yet)
    #[serde(default)]
    pub quests: BTreeMap<String, serde_json::Value>,
}

impl Database {
    /// Build the database shipped with the tool
    pub fn builtin() -> Self {
        let npcs = NPCS
            .iter()
            .map(|npc| {
                let tags = npc.tags.iter().map(|t| t.to_string()).collect();
                (npc.id.to_string(), tags)
            })
            .collect();

        let locations = LOCATIONS
            .iter()
            .map(|loc| {
                let roles = loc
                    .roles
                    .iter()
                    .map(|(npc, label)| (npc.to_string(), label.to_string()))
                    .collect();
                (loc.id.to_string(), roles)
            })
            .collect();

        let quests = QUESTS
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        Self {
            npcs,
            locations,
            quests,
        }
    }

    /// Check that this database holds exactly the static tables
    pub fn matches_builtin(&self) -> bool {
        *self == Self::builtin()
    }

    pub fn num_npcs(&self) -> usize {
        self.npcs.len()
    }

    pub fn num_locations(&self) -> usize {
        self.locations.len()
    }

    /// Tag set of an NPC
    pub fn tags(&self, npc: &str) -> Option<&BTreeSet<String>> {
        self.npcs.get(npc)
    }

    /// Labels of a location (key match is case-insensitive)
    pub fn location(&self, location: &str) -> Option<&BTreeMap<String, String>> {
        self.locations.get(location).or_else(|| {
            self.locations
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(location))
                .map(|(_, roles)| roles)
        })
    }

    /// Display label of an NPC in a location
    pub fn label(&self, location: &str, npc: &str) -> Option<&str> {
        self.location(location)
            .and_then(|roles| roles.get(npc))
            .map(String::as_str)
    }

    /// NPC ids carrying a tag, in key order
    pub fn npcs_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a str> {
        self.npcs
            .iter()
            .filter(move |(_, tags)| tags.contains(tag))
            .map(|(id, _)| id.as_str())
    }

    /// NPC ids living in an area, in key order
    pub fn npcs_in_area(&self, area: AreaTag) -> impl Iterator<Item = &str> {
        self.npcs
            .iter()
            .filter(move |(_, tags)| {
                tags.iter().any(|t| Tag::classify(t).as_area() == Some(area))
            })
            .map(|(id, _)| id.as_str())
    }

    /// Every distinct tag used by any NPC
    pub fn all_tags(&self) -> BTreeSet<&str> {
        self.npcs
            .values()
            .flat_map(|tags| tags.iter().map(String::as_str))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_matches_static() {
        let db = Database::builtin();
        assert_eq!(db.num_npcs(), NPCS.len());
        assert_eq!(db.num_locations(), LOCATIONS.len());
        assert!(db.quests.is_empty());
        assert!(db.matches_builtin());
    }

    #[test]
    fn test_modified_database_does_not_match() {
        let mut db = Database::builtin();
        db.npcs.get_mut("snitch").unwrap().insert("Trader".to_string());
        assert!(!db.matches_builtin());

        let mut db = Database::builtin();
        db.locations
            .get_mut("bar")
            .unwrap()
            .insert("snitch".to_string(), "INFORMANT".to_string());
        assert!(!db.matches_builtin());
    }

    #[test]
    fn test_same_sizes_different_contents_do_not_match() {
        let mut db = Database::builtin();
        let tags = db.npcs.get_mut("snitch").unwrap();
        tags.remove("Loner");
        tags.insert("Duty".to_string());
        assert_eq!(db.num_npcs(), NPCS.len());
        assert!(!db.matches_builtin());
    }

    #[test]
    fn test_quest_contents_compared() {
        let mut a = Database::builtin();
        let mut b = Database::builtin();
        a.quests.insert("q".to_string(), serde_json::json!({ "giver": "snitch" }));
        b.quests.insert("q".to_string(), serde_json::json!({ "giver": "bar_dolg_leader" }));
        assert_eq!(a.quests.len(), b.quests.len());
        assert_ne!(a, b);
        assert!(!a.matches_builtin());
    }

    #[test]
    fn test_lookups() {
        let db = Database::builtin();
        let tags = db.tags("lider_monolith_haron").unwrap();
        assert!(tags.contains("Haron"));
        assert!(tags.contains("Leader"));

        assert_eq!(db.label("pripyat2", "lider_monolith_haron"), Some("HARON"));
        assert_eq!(db.label("PRIPYAT2", "lider_monolith_haron"), Some("HARON"));
        assert_eq!(db.label("pripyat2", "snitch"), None);
    }

    #[test]
    fn test_npcs_with_tag_sorted() {
        let db = Database::builtin();
        let greh: Vec<_> = db.npcs_with_tag("Greh").collect();
        assert_eq!(greh, vec!["red_greh_tech"]);

        let hunters: Vec<_> = db.npcs_with_tag("Hunter").collect();
        assert_eq!(hunters, vec!["hunter_gar_trader", "jup_b220_trapper"]);
    }

    #[test]
    fn test_npcs_in_area() {
        let db = Database::builtin();
        let marsh: Vec<_> = db.npcs_in_area(AreaTag::Marsh).collect();
        assert_eq!(marsh.len(), 5);
        assert!(marsh.contains(&"mar_base_stalker_barmen"));
    }

    #[test]
    fn test_all_tags_classify() {
        let db = Database::builtin();
        let tags = db.all_tags();
        assert!(tags.contains("Greh"));
        assert!(tags.contains("NightTrader"));
        assert!(matches!(Tag::classify("NightTrader"), Tag::Name(_)));
    }
}
