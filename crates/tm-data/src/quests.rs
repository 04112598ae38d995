//! Quest table
//!
//! Reserved for quest definitions; nothing is shipped yet.

pub static QUESTS: &[(&str, &str)] = &[];

pub fn num_quests() -> usize {
    QUESTS.len()
}

/// Find a quest value by key
pub fn get_quest(key: &str) -> Option<&'static str> {
    QUESTS.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
