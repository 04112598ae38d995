//! Tag vocabulary
//!
//! NPC records carry plain tag strings. Most of them belong to one of three
//! closed vocabularies (role, faction, area); anything else is a proper name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// What an NPC does for the player
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumIter, EnumString,
)]
pub enum RoleTag {
    Mechanic,
    Medic,
    Trader,
    Leader,
    Barman,
    Hunter,
    TaskGiver,
    Snitch,
}

/// Faction membership
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumIter, EnumString,
)]
pub enum FactionTag {
    Army,
    Bandit,
    Duty,
    Freedom,
    Monolith,
    Mercenary,
    Loner,
    ClearSky,
    Ecolog,
    Greh,
}

/// Zone an NPC lives in, spelled the way NPC tags spell it
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumIter, EnumString,
)]
pub enum AreaTag {
    Agroprom,
    Bar,
    Darkscape,
    DarkValley,
    DeadCity,
    Escape,
    Garbage,
    Jupiter,
    Marsh,
    /// Army Warehouses
    AW,
    Pripyat2,
    RedForest,
    TruckCemetery,
    Yantar,
    Zaton,
}

impl AreaTag {
    /// Key of this area in the location table.
    ///
    /// The location table uses its own lowercase spelling, which only
    /// sometimes matches the tag.
    pub const fn location_key(&self) -> &'static str {
        match self {
            AreaTag::Agroprom => "agroprom",
            AreaTag::Bar => "bar",
            AreaTag::Darkscape => "darkscape",
            AreaTag::DarkValley => "darkvalley",
            AreaTag::DeadCity => "deadcity",
            AreaTag::Escape => "escape",
            AreaTag::Garbage => "garbage",
            AreaTag::Jupiter => "jupiter",
            AreaTag::Marsh => "marsh",
            AreaTag::AW => "military",
            AreaTag::Pripyat2 => "pripyat2",
            AreaTag::RedForest => "red_forest",
            AreaTag::TruckCemetery => "truck",
            AreaTag::Yantar => "yantar",
            AreaTag::Zaton => "zaton",
        }
    }

    /// Inverse of [`AreaTag::location_key`] (case-insensitive)
    pub fn from_location_key(key: &str) -> Option<AreaTag> {
        AreaTag::iter().find(|area| area.location_key().eq_ignore_ascii_case(key))
    }
}

/// A classified tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag<'a> {
    Role(RoleTag),
    Faction(FactionTag),
    Area(AreaTag),
    /// Proper name of a unique NPC ("Sultan", "Barkeep", ...)
    Name(&'a str),
}

impl<'a> Tag<'a> {
    /// Classify a raw tag. Matching is exact; unknown tags are names.
    pub fn classify(raw: &'a str) -> Tag<'a> {
        if let Ok(role) = RoleTag::from_str(raw) {
            Tag::Role(role)
        } else if let Ok(faction) = FactionTag::from_str(raw) {
            Tag::Faction(faction)
        } else if let Ok(area) = AreaTag::from_str(raw) {
            Tag::Area(area)
        } else {
            Tag::Name(raw)
        }
    }

    pub const fn kind(&self) -> TagKind {
        match self {
            Tag::Role(_) => TagKind::Role,
            Tag::Faction(_) => TagKind::Faction,
            Tag::Area(_) => TagKind::Area,
            Tag::Name(_) => TagKind::Name,
        }
    }

    pub const fn as_role(&self) -> Option<RoleTag> {
        match self {
            Tag::Role(role) => Some(*role),
            _ => None,
        }
    }

    pub const fn as_faction(&self) -> Option<FactionTag> {
        match self {
            Tag::Faction(faction) => Some(*faction),
            _ => None,
        }
    }

    pub const fn as_area(&self) -> Option<AreaTag> {
        match self {
            Tag::Area(area) => Some(*area),
            _ => None,
        }
    }

    pub const fn as_name(&self) -> Option<&'a str> {
        match self {
            Tag::Name(name) => Some(*name),
            _ => None,
        }
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Role(role) => write!(f, "{role}"),
            Tag::Faction(faction) => write!(f, "{faction}"),
            Tag::Area(area) => write!(f, "{area}"),
            Tag::Name(name) => f.write_str(name),
        }
    }
}

/// Tag categories, in display order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display,
    EnumIter,
)]
pub enum TagKind {
    Role,
    Faction,
    Area,
    Name,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_vocabularies() {
        assert_eq!(Tag::classify("Mechanic"), Tag::Role(RoleTag::Mechanic));
        assert_eq!(Tag::classify("TaskGiver"), Tag::Role(RoleTag::TaskGiver));
        assert_eq!(Tag::classify("ClearSky"), Tag::Faction(FactionTag::ClearSky));
        assert_eq!(Tag::classify("AW"), Tag::Area(AreaTag::AW));
        assert_eq!(Tag::classify("Sultan"), Tag::Name("Sultan"));
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        // Tags are compared like set members, so "mechanic" is just a name.
        assert_eq!(Tag::classify("mechanic"), Tag::Name("mechanic"));
    }

    #[test]
    fn test_bar_is_an_area_not_a_role() {
        assert_eq!(Tag::classify("Bar").kind(), TagKind::Area);
        assert_eq!(Tag::classify("Barman").kind(), TagKind::Role);
    }

    #[test]
    fn test_location_key_round_trip() {
        for area in AreaTag::iter() {
            assert_eq!(AreaTag::from_location_key(area.location_key()), Some(area));
        }
        assert_eq!(AreaTag::from_location_key("MILITARY"), Some(AreaTag::AW));
        assert_eq!(AreaTag::from_location_key("cordon"), None);
    }

    #[test]
    fn test_display_matches_raw_tag() {
        for raw in ["Leader", "Mercenary", "TruckCemetery", "Haron"] {
            assert_eq!(Tag::classify(raw).to_string(), raw);
        }
    }
}
