use std::collections::HashSet;

use proptest::prelude::*;
use tm_data::{LOCATIONS, NPCS, Tag, TagKind, get_location, get_npc, role_label};

#[test]
fn test_npc_keys_unique() {
    let mut seen = HashSet::new();
    for npc in NPCS {
        assert!(seen.insert(npc.id), "duplicate NPC key: {}", npc.id);
    }
    assert_eq!(seen.len(), 63);
}

#[test]
fn test_tags_distinct_within_npc() {
    for npc in NPCS {
        let set: HashSet<_> = npc.tags.iter().collect();
        assert_eq!(set.len(), npc.tags.len(), "repeated tag on {}", npc.id);
    }
}

#[test]
fn test_tag_sets_have_role_and_area() {
    for npc in NPCS {
        assert!(!npc.tags.is_empty(), "{} has no tags", npc.id);
        assert!(npc.roles().next().is_some(), "{} has no role tag", npc.id);
        assert!(npc.area().is_some(), "{} has no area tag", npc.id);
    }
}

#[test]
fn test_every_npc_has_one_faction() {
    for npc in NPCS {
        let factions = npc
            .classified()
            .filter(|tag| tag.kind() == TagKind::Faction)
            .count();
        assert_eq!(factions, 1, "{} has {} factions", npc.id, factions);
    }
}

#[test]
fn test_at_most_one_proper_name() {
    for npc in NPCS {
        let names: Vec<_> = npc.classified().filter_map(|tag| tag.as_name()).collect();
        assert!(names.len() <= 1, "{} has names {:?}", npc.id, names);
    }
}

#[test]
fn test_location_npcs_exist() {
    for loc in LOCATIONS {
        for npc in loc.npcs() {
            assert!(get_npc(npc).is_some(), "{} lists unknown NPC {}", loc.id, npc);
        }
    }
}

#[test]
fn test_location_keys_unique() {
    let mut seen = HashSet::new();
    for loc in LOCATIONS {
        assert!(seen.insert(loc.id), "duplicate location: {}", loc.id);
        let npcs: HashSet<_> = loc.npcs().collect();
        assert_eq!(npcs.len(), loc.roles.len(), "repeated NPC in {}", loc.id);
    }
}

#[test]
fn test_location_npcs_live_there() {
    for loc in LOCATIONS {
        for npc in loc.npcs() {
            let area = get_npc(npc).and_then(|n| n.area());
            assert_eq!(area, loc.area(), "{} is listed under {}", npc, loc.id);
        }
    }
}

#[test]
fn test_labels_are_uppercase() {
    for loc in LOCATIONS {
        for (npc, label) in loc.roles {
            assert!(!label.is_empty(), "empty label for {}", npc);
            assert_eq!(*label, label.to_uppercase(), "label for {} not uppercase", npc);
        }
    }
}

#[test]
fn test_named_labels_match_proper_names() {
    // Unique NPCs shown by name use their name tag, uppercased
    let kovalski = get_npc("agr_smart_terrain_1_6_near_2_military_colonel_kovalski").unwrap();
    assert_eq!(kovalski.proper_name(), Some("Kuznetsov"));
    assert_eq!(role_label("agroprom", kovalski.id), Some("KUZNETSOV"));

    let nimble = get_npc("esc_2_12_stalker_nimble").unwrap();
    assert_eq!(
        role_label("escape", nimble.id).map(str::to_string),
        nimble.proper_name().map(str::to_uppercase)
    );
}

#[test]
fn test_location_count() {
    assert_eq!(LOCATIONS.len(), 15);
    assert_eq!(get_location("pripyat2").unwrap().roles.len(), 7);
}

proptest! {
    #[test]
    fn prop_lowercase_strings_are_names(raw in "[a-z_]{1,12}") {
        prop_assert_eq!(Tag::classify(&raw), Tag::Name(&raw));
    }

    #[test]
    fn prop_unknown_keys_miss(key in "[0-9]{1,8}") {
        prop_assert!(get_npc(&key).is_none());
        prop_assert!(get_location(&key).is_none());
        prop_assert!(role_label("bar", &key).is_none());
    }
}
