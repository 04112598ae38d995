//! NPC table
//!
//! Every NPC the task generator knows about, keyed by its engine section
//! name, with the tags used to pick quest givers and targets.

use crate::tags::{AreaTag, FactionTag, RoleTag, Tag};

/// An NPC and its tag set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NpcEntry {
    /// Engine section name
    pub id: &'static str,
    /// Raw tags, distinct, in source order
    pub tags: &'static [&'static str],
}

impl NpcEntry {
    pub const fn new(id: &'static str, tags: &'static [&'static str]) -> Self {
        Self { id, tags }
    }

    /// Exact set-membership test on the raw tags
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }

    /// Tags classified into their vocabularies
    pub fn classified(&self) -> impl Iterator<Item = Tag<'static>> + '_ {
        self.tags.iter().copied().map(Tag::classify)
    }

    pub fn roles(&self) -> impl Iterator<Item = RoleTag> + '_ {
        self.classified().filter_map(|tag| tag.as_role())
    }

    pub fn has_role(&self, role: RoleTag) -> bool {
        self.roles().any(|r| r == role)
    }

    /// First faction tag. NPCs belong to one faction.
    pub fn faction(&self) -> Option<FactionTag> {
        self.classified().find_map(|tag| tag.as_faction())
    }

    /// First area tag. NPCs live in one area.
    pub fn area(&self) -> Option<AreaTag> {
        self.classified().find_map(|tag| tag.as_area())
    }

    /// Proper name, if this is a unique NPC
    pub fn proper_name(&self) -> Option<&'static str> {
        self.classified().find_map(|tag| tag.as_name())
    }
}

// Rows are grouped by area, in the order the mod lists them.
pub static NPCS: &[NpcEntry] = &[
    // Agroprom
    NpcEntry::new("agr_smart_terrain_1_6_army_mechanic_stalker", &["Mechanic", "Agroprom", "Army"]),
    NpcEntry::new("agr_1_6_medic_army_mlr", &["Medic", "Agroprom", "Army"]),
    NpcEntry::new(
        "agr_smart_terrain_1_6_near_2_military_colonel_kovalski",
        &["Leader", "Agroprom", "Army", "Kuznetsov"],
    ),
    // Bar
    NpcEntry::new("bar_visitors_stalker_mechanic", &["Mechanic", "Bar", "Duty"]),
    NpcEntry::new("bar_dolg_medic", &["Medic", "Bar", "Duty"]),
    NpcEntry::new(
        "bar_visitors_barman_stalker_trader",
        &["Barman", "Trader", "Loner", "Bar", "Barkeep"],
    ),
    NpcEntry::new("bar_dolg_leader", &["Trader", "Bar", "Duty", "Voronin"]),
    NpcEntry::new("bar_dolg_general_petrenko_stalker", &["Leader", "Bar", "Duty", "Petrenko"]),
    NpcEntry::new("snitch", &["Bar", "Loner", "Snitch"]),
    // Darkscape
    NpcEntry::new("dasc_tech_mlr", &["Mechanic", "Darkscape", "Loner"]),
    // Dark Valley
    NpcEntry::new(
        "val_smart_terrain_7_3_bandit_mechanic_stalker",
        &["Mechanic", "DarkValley", "Bandit"],
    ),
    NpcEntry::new("bandit_main_base_medic_mlr", &["Medic", "DarkValley", "Bandit"]),
    NpcEntry::new("zat_b7_bandit_boss_sultan", &["Leader", "DarkValley", "Bandit", "Sultan"]),
    NpcEntry::new(
        "val_smart_terrain_7_4_bandit_trader_stalker",
        &["Trader", "DarkValley", "Bandit", "Olivius"],
    ),
    // Dead City
    NpcEntry::new("cit_killers_merc_mechanic_stalker", &["Mechanic", "DeadCity", "Mercenary"]),
    NpcEntry::new("cit_killers_merc_medic_stalker", &["Medic", "DeadCity", "Mercenary"]),
    NpcEntry::new(
        "cit_killers_merc_trader_stalker",
        &["Leader", "Trader", "DeadCity", "Mercenary", "Dushman"],
    ),
    NpcEntry::new(
        "cit_killers_merc_barman_mlr",
        &["Barman", "Trader", "DeadCity", "Mercenary", "Aslan"],
    ),
    // Escape
    NpcEntry::new("esc_smart_terrain_5_7_loner_mechanic_stalker", &["Mechanic", "Escape", "Loner"]),
    NpcEntry::new("army_south_mechan_mlr", &["Mechanic", "Escape", "Army"]),
    NpcEntry::new("drx_sl_esc_m_trader", &["Trader", "Leader", "Escape", "Loner", "Sidorovich"]),
    NpcEntry::new("esc_2_12_stalker_wolf", &["TaskGiver", "Loner", "Escape", "Wolf"]),
    NpcEntry::new("esc_2_12_stalker_nimble", &["Trader", "Loner", "Escape", "Nimble"]),
    NpcEntry::new("esc_3_16_military_trader", &["Trader", "Army", "Escape"]),
    NpcEntry::new("esc_2_12_stalker_fanat", &["TaskGiver", "Loner", "Escape", "Fanatic"]),
    // Garbage
    NpcEntry::new("hunter_gar_trader", &["Hunter", "Loner", "Garbage", "Butcher"]),
    NpcEntry::new("baraholka_trader", &["Trader", "Loner", "Garbage"]),
    NpcEntry::new("baraholka_trader_night", &["Trader", "Loner", "Garbage", "NightTrader"]),
    // Jupiter
    NpcEntry::new("jup_b217_stalker_tech", &["Mechanic", "Loner", "Jupiter"]),
    NpcEntry::new("jup_cont_mech_bandit", &["Mechanic", "Bandit", "Jupiter"]),
    NpcEntry::new("mechanic_monolith_jup_depo", &["Mechanic", "Monolith", "Jupiter"]),
    NpcEntry::new("jup_a6_stalker_medik", &["Medic", "Loner", "Jupiter"]),
    NpcEntry::new("drx_sl_jup_a6_freedom_leader", &["Leader", "Freedom", "Jupiter", "Loki"]),
    NpcEntry::new("jup_b6_scientist_tech", &["Mechanic", "Ecolog", "Jupiter", "Tukarev"]),
    NpcEntry::new("jup_b220_trapper", &["Hunter", "Loner", "Jupiter", "Trapper"]),
    NpcEntry::new("jup_b19_freedom_yar", &["TaskGiver", "Freedom", "Jupiter", "Yar"]),
    NpcEntry::new(
        "jup_b6_scientist_nuclear_physicist",
        &["Leader", "Ecolog", "Jupiter", "Hermann"],
    ),
    // Marsh
    NpcEntry::new("mar_base_stalker_tech", &["Mechanic", "ClearSky", "Marsh"]),
    NpcEntry::new("mar_smart_terrain_base_doctor", &["Medic", "ClearSky", "Marsh"]),
    NpcEntry::new(
        "mar_smart_terrain_base_stalker_leader_marsh",
        &["Leader", "ClearSky", "Marsh", "Cold"],
    ),
    NpcEntry::new("mar_base_owl_stalker_trader", &["Trader", "ClearSky", "Marsh", "Spore"]),
    NpcEntry::new(
        "mar_base_stalker_barmen",
        &["Barman", "Trader", "ClearSky", "Marsh", "Librarian"],
    ),
    // Army Warehouses
    NpcEntry::new("mil_smart_terrain_7_7_freedom_mechanic_stalker", &["Mechanic", "Freedom", "AW"]),
    NpcEntry::new("mil_freedom_medic", &["Medic", "Freedom", "AW"]),
    NpcEntry::new(
        "mil_smart_terrain_7_7_freedom_leader_stalker",
        &["Leader", "Freedom", "AW", "Lukash"],
    ),
    NpcEntry::new(
        "mil_smart_terrain_7_10_freedom_trader_stalker",
        &["Trader", "Freedom", "AW", "Skinflint"],
    ),
    // Pripyat 2
    NpcEntry::new("pri_monolith_monolith_mechanic_stalker", &["Mechanic", "Monolith", "Pripyat2"]),
    NpcEntry::new("merc_pri_a18_mech_mlr", &["Mechanic", "Mercenary", "Pripyat2"]),
    NpcEntry::new("mechanic_monolith_kbo", &["Mechanic", "Monolith", "Pripyat2"]),
    NpcEntry::new(
        "pri_monolith_monolith_trader_stalker",
        &["Trader", "Monolith", "Pripyat2", "Rabbit"],
    ),
    NpcEntry::new("lider_monolith_haron", &["Leader", "Monolith", "Pripyat2", "Haron"]),
    NpcEntry::new("monolith_eidolon", &["TaskGiver", "Monolith", "Pripyat2", "Eidolon"]),
    NpcEntry::new("merc_pri_grifon_mlr", &["Leader", "Mercenary", "Pripyat2", "Griffin"]),
    // Red Forest
    NpcEntry::new("red_greh_tech", &["Mechanic", "Greh", "RedForest"]),
    // Truck Cemetery
    NpcEntry::new("trucks_cemetery_bandit_mechanic", &["Mechanic", "Bandit", "TruckCemetery"]),
    // Yantar
    NpcEntry::new("mechanic_army_yan_mlr", &["Mechanic", "Army", "Yantar"]),
    NpcEntry::new("yan_stalker_sakharov", &["Leader", "Ecolog", "Yantar", "Sakharov"]),
    // Zaton
    NpcEntry::new("zat_a2_stalker_mechanic", &["Mechanic", "Loner", "Zaton"]),
    NpcEntry::new("zat_stancia_mech_merc", &["Mechanic", "Mercenary", "Zaton"]),
    NpcEntry::new("zat_tech_mlr", &["Mechanic", "Loner", "Zaton"]),
    NpcEntry::new("zat_b22_stalker_medic", &["Medic", "Loner", "Zaton"]),
    NpcEntry::new(
        "zat_a2_stalker_barmen",
        &["Barman", "Trader", "Leader", "Loner", "Zaton", "Beard"],
    ),
    NpcEntry::new("zat_stancia_trader_merc", &["Trader", "Mercenary", "Zaton"]),
];

/// Number of NPCs
pub fn num_npcs() -> usize {
    NPCS.len()
}

/// Find an NPC by its engine section name
pub fn get_npc(id: &str) -> Option<&'static NpcEntry> {
    NPCS.iter().find(|npc| npc.id == id)
}

/// All NPCs carrying a raw tag
pub fn npcs_with_tag(tag: &str) -> impl Iterator<Item = &'static NpcEntry> + '_ {
    NPCS.iter().filter(move |npc| npc.has_tag(tag))
}

/// All NPCs living in an area
pub fn npcs_in_area(area: AreaTag) -> impl Iterator<Item = &'static NpcEntry> {
    NPCS.iter().filter(move |npc| npc.area() == Some(area))
}
