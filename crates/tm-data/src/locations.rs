//! Location role tables
//!
//! For each location, the NPCs a quest may reference there and the label
//! shown for them in generated text.

use crate::tags::AreaTag;

/// One location and its NPC labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationEntry {
    /// Lowercase location key
    pub id: &'static str,
    /// (NPC id, uppercase display label)
    pub roles: &'static [(&'static str, &'static str)],
}

impl LocationEntry {
    pub const fn new(id: &'static str, roles: &'static [(&'static str, &'static str)]) -> Self {
        Self { id, roles }
    }

    /// Display label of an NPC in this location
    pub fn label(&self, npc: &str) -> Option<&'static str> {
        self.roles
            .iter()
            .find(|(id, _)| *id == npc)
            .map(|(_, label)| *label)
    }

    /// NPC ids listed for this location
    pub fn npcs(&self) -> impl Iterator<Item = &'static str> {
        self.roles.iter().map(|(id, _)| *id)
    }

    /// Area tag spelling of this location
    pub fn area(&self) -> Option<AreaTag> {
        AreaTag::from_location_key(self.id)
    }
}

pub static LOCATIONS: &[LocationEntry] = &[
    LocationEntry::new(
        "agroprom",
        &[
            ("agr_smart_terrain_1_6_army_mechanic_stalker", "MECHANIC"),
            ("agr_1_6_medic_army_mlr", "MEDIC"),
            ("agr_smart_terrain_1_6_near_2_military_colonel_kovalski", "KUZNETSOV"),
        ],
    ),
    LocationEntry::new(
        "bar",
        &[
            ("bar_visitors_stalker_mechanic", "MECHANIC"),
            ("bar_dolg_medic", "MEDIC"),
            ("bar_visitors_barman_stalker_trader", "BARKEEP"),
            ("bar_dolg_leader", "VORONIN"),
            ("bar_dolg_general_petrenko_stalker", "PETRENKO"),
            ("snitch", "SNITCH"),
        ],
    ),
    LocationEntry::new(
        "darkscape",
        &[
            ("dasc_tech_mlr", "MECHANIC"),
        ],
    ),
    LocationEntry::new(
        "darkvalley",
        &[
            ("val_smart_terrain_7_3_bandit_mechanic_stalker", "MECHANIC"),
            ("bandit_main_base_medic_mlr", "MEDIC"),
            ("zat_b7_bandit_boss_sultan", "SULTAN"),
            ("val_smart_terrain_7_4_bandit_trader_stalker", "OLIVIUS"),
        ],
    ),
    LocationEntry::new(
        "deadcity",
        &[
            ("cit_killers_merc_mechanic_stalker", "MECHANIC"),
            ("cit_killers_merc_medic_stalker", "MEDIC"),
            ("cit_killers_merc_trader_stalker", "DUSHMAN"),
            ("cit_killers_merc_barman_mlr", "ASLAN"),
        ],
    ),
    LocationEntry::new(
        "escape",
        &[
            ("esc_smart_terrain_5_7_loner_mechanic_stalker", "MECHANIC"),
            ("army_south_mechan_mlr", "MECHANIC"),
            ("drx_sl_esc_m_trader", "SIDOROVICH"),
            ("esc_2_12_stalker_wolf", "WOLF"),
            ("esc_2_12_stalker_nimble", "NIMBLE"),
            ("esc_3_16_military_trader", "MILITARY TRADER"),
            ("esc_2_12_stalker_fanat", "FANATIC"),
        ],
    ),
    LocationEntry::new(
        "garbage",
        &[
            ("hunter_gar_trader", "BUTCHER"),
            ("baraholka_trader_night", "TRADER"),
        ],
    ),
    LocationEntry::new(
        "jupiter",
        &[
            ("jup_b217_stalker_tech", "MECHANIC"),
            ("jup_cont_mech_bandit", "MECHANIC"),
            ("mechanic_monolith_jup_depo", "MECHANIC"),
            ("jup_a6_stalker_medik", "MEDIC"),
            ("drx_sl_jup_a6_freedom_leader", "LOKI"),
            ("jup_b6_scientist_tech", "TUKAREV"),
            ("jup_b220_trapper", "TRAPPER"),
            ("jup_b19_freedom_yar", "YAR"),
            ("jup_b6_scientist_nuclear_physicist", "HERMANN"),
        ],
    ),
    LocationEntry::new(
        "marsh",
        &[
            ("mar_base_stalker_tech", "MECHANIC"),
            ("mar_smart_terrain_base_doctor", "MEDIC"),
            ("mar_smart_terrain_base_stalker_leader_marsh", "COLD"),
            ("mar_base_owl_stalker_trader", "SPORE"),
            ("mar_base_stalker_barmen", "LIBRARIAN"),
        ],
    ),
    LocationEntry::new(
        "military",
        &[
            ("mil_smart_terrain_7_7_freedom_mechanic_stalker", "MECHANIC"),
            ("mil_freedom_medic", "MEDIC"),
            ("mil_smart_terrain_7_7_freedom_leader_stalker", "LUKASH"),
            ("mil_smart_terrain_7_10_freedom_trader_stalker", "SKINFLINT"),
        ],
    ),
    LocationEntry::new(
        "pripyat2",
        &[
            ("pri_monolith_monolith_mechanic_stalker", "MECHANIC"),
            ("merc_pri_a18_mech_mlr", "MECHANIC"),
            ("mechanic_monolith_kbo", "MECHANIC"),
            ("pri_monolith_monolith_trader_stalker", "RABBIT"),
            ("lider_monolith_haron", "HARON"),
            ("monolith_eidolon", "EIDOLON"),
            ("merc_pri_grifon_mlr", "GRIFFIN"),
        ],
    ),
    LocationEntry::new(
        "red_forest",
        &[
            ("red_greh_tech", "MECHANIC"),
        ],
    ),
    LocationEntry::new(
        "truck",
        &[
            ("trucks_cemetery_bandit_mechanic", "MECHANIC"),
        ],
    ),
    LocationEntry::new(
        "yantar",
        &[
            ("mechanic_army_yan_mlr", "MECHANIC"),
            ("yan_stalker_sakharov", "SAKHAROV"),
        ],
    ),
    LocationEntry::new(
        "zaton",
        &[
            ("zat_a2_stalker_mechanic", "MECHANIC"),
            ("zat_stancia_mech_merc", "MECHANIC"),
            ("zat_tech_mlr", "MECHANIC"),
            ("zat_b22_stalker_medic", "MEDIC"),
            ("zat_a2_stalker_barmen", "BEARD"),
            ("zat_stancia_trader_merc", "MERC TRADER"),
        ],
    ),
];

/// Number of locations
pub fn num_locations() -> usize {
    LOCATIONS.len()
}

/// Find a location by key (case-insensitive)
pub fn get_location(id: &str) -> Option<&'static LocationEntry> {
    LOCATIONS.iter().find(|loc| loc.id.eq_ignore_ascii_case(id))
}

/// Display label of an NPC in a location
pub fn role_label(location: &str, npc: &str) -> Option<&'static str> {
    get_location(location).and_then(|loc| loc.label(npc))
}

/// Location table entry for an area
pub fn location_for_area(area: AreaTag) -> Option<&'static LocationEntry> {
    get_location(area.location_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_label() {
        assert_eq!(role_label("escape", "esc_3_16_military_trader"), Some("MILITARY TRADER"));
        assert_eq!(role_label("bar", "snitch"), Some("SNITCH"));
        assert_eq!(role_label("Zaton", "zat_stancia_trader_merc"), Some("MERC TRADER"));
    }

    #[test]
    fn test_role_label_wrong_location() {
        // Sultan is listed under Dark Valley, not Zaton, despite the id prefix
        assert_eq!(role_label("zaton", "zat_b7_bandit_boss_sultan"), None);
        assert_eq!(role_label("darkvalley", "zat_b7_bandit_boss_sultan"), Some("SULTAN"));
        assert_eq!(role_label("cordon", "snitch"), None);
    }

    #[test]
    fn test_location_area_link() {
        let military = get_location("military").unwrap();
        assert_eq!(military.area(), Some(AreaTag::AW));
        assert_eq!(location_for_area(AreaTag::TruckCemetery).unwrap().id, "truck");
        assert_eq!(location_for_area(AreaTag::RedForest).unwrap().id, "red_forest");
    }

    #[test]
    fn test_every_location_has_an_area() {
        for loc in LOCATIONS {
            assert!(loc.area().is_some(), "{} has no area tag", loc.id);
        }
    }

    #[test]
    fn test_garbage_skips_day_trader() {
        let garbage = get_location("garbage").unwrap();
        let npcs: Vec<_> = garbage.npcs().collect();
        assert_eq!(npcs, vec!["hunter_gar_trader", "baraholka_trader_night"]);
    }
}
