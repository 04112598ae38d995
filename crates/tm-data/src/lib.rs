//! tm-data: Static tables for the taskmaker mod tool
//!
//! Contains the NPC tag table, the per-location NPC labels and the quest table.

pub mod locations;
pub mod npcs;
pub mod quests;
pub mod tags;

pub use locations::{
    LOCATIONS, LocationEntry, get_location, location_for_area, num_locations, role_label,
};
pub use npcs::{NPCS, NpcEntry, get_npc, npcs_in_area, npcs_with_tag, num_npcs};
pub use quests::{QUESTS, get_quest, num_quests};
pub use tags::{AreaTag, FactionTag, RoleTag, Tag, TagKind};

/// Mod author written into generated files
pub const AUTHOR: &str = "no_author";

/// Prefix applied to generated identifiers
pub const PREFIX: &str = "";
