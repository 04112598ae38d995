//! Database files
//!
//! JSON with a small versioned header in front of the tables.
//!
//! Files are read through a model that keeps every map entry in file order,
//! so repeated keys and tags are reported instead of silently merged.

use std::collections::{BTreeMap, BTreeSet};
use std::collections::btree_map::Entry;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::marker::PhantomData;
use std::path::Path;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::DbError;
use crate::config::Config;
use crate::model::Database;
use crate::validate::{ValidationReport, Violation};

/// Current database file format version
pub const DB_VERSION: u32 = 1;

/// Database file header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbHeader {
    /// Magic identifier
    pub magic: String,
    /// File format version
    pub version: u32,
    /// Mod author
    pub author: String,
    /// Identifier prefix
    pub prefix: String,
}

impl DbHeader {
    const MAGIC: &'static str = "TMDB";

    pub fn new(config: &Config) -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: DB_VERSION,
            author: config.author.clone(),
            prefix: config.prefix.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), DbError> {
        if self.magic != Self::MAGIC {
            return Err(DbError::InvalidHeader);
        }
        if self.version != DB_VERSION {
            return Err(DbError::IncompatibleVersion {
                expected: DB_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

/// Complete database file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DbFile {
    pub header: DbHeader,
    pub database: Database,
}

/// Write a database as pretty JSON, creating parent directories
pub fn save_database(
    db: &Database,
    config: &Config,
    path: impl AsRef<Path>,
) -> Result<(), DbError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let db_file = DbFile {
        header: DbHeader::new(config),
        database: db.clone(),
    };

    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, &db_file)?;
    writer.flush()?;
    tracing::info!(
        "Saved {} NPCs and {} locations to {}",
        db.num_npcs(),
        db.num_locations(),
        path.display()
    );
    Ok(())
}

/// JSON object entries in file order, duplicates kept
struct Entries<V>(Vec<(String, V)>);

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Entries(Vec::new())
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map with string keys")
            }

            fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// Database as written in a file, before duplicates are resolved
#[derive(Deserialize)]
struct RawDatabase {
    npcs: Entries<Vec<String>>,
    locations: Entries<Entries<String>>,
    #[serde(default)]
    quests: Entries<serde_json::Value>,
}

impl RawDatabase {
    /// Keep the first occurrence of every key and tag, report the rest
    fn into_database(self) -> (Database, ValidationReport) {
        let mut report = ValidationReport::default();
        let mut db = Database::default();

        for (npc, raw_tags) in self.npcs.0 {
            let mut tags = BTreeSet::new();
            for tag in raw_tags {
                if !tags.insert(tag.clone()) {
                    report.push(Violation::DuplicateTag {
                        npc: npc.clone(),
                        tag,
                    });
                }
            }
            match db.npcs.entry(npc) {
                Entry::Occupied(e) => report.push(Violation::DuplicateNpc(e.key().clone())),
                Entry::Vacant(e) => {
                    e.insert(tags);
                }
            }
        }

        for (location, raw_roles) in self.locations.0 {
            let mut roles = BTreeMap::new();
            for (npc, label) in raw_roles.0 {
                match roles.entry(npc) {
                    Entry::Occupied(e) => report.push(Violation::DuplicateLocationNpc {
                        location: location.clone(),
                        npc: e.key().clone(),
                    }),
                    Entry::Vacant(e) => {
                        e.insert(label);
                    }
                }
            }
            match db.locations.entry(location) {
                Entry::Occupied(e) => report.push(Violation::DuplicateLocation(e.key().clone())),
                Entry::Vacant(e) => {
                    e.insert(roles);
                }
            }
        }

        for (key, value) in self.quests.0 {
            match db.quests.entry(key) {
                Entry::Occupied(e) => report.push(Violation::DuplicateQuest(e.key().clone())),
                Entry::Vacant(e) => {
                    e.insert(value);
                }
            }
        }

        (db, report)
    }
}

#[derive(Deserialize)]
struct RawDbFile {
    header: DbHeader,
    database: RawDatabase,
}

fn read_file(path: &Path) -> Result<RawDbFile, DbError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => DbError::NotFound,
        _ => DbError::Io(err),
    })?;
    let reader = BufReader::new(file);
    let db_file: RawDbFile = serde_json::from_reader(reader)?;
    db_file.header.validate()?;
    Ok(db_file)
}

/// Load and validate a database file
pub fn load_database(path: impl AsRef<Path>) -> Result<Database, DbError> {
    let path = path.as_ref();
    let (database, mut report) = read_file(path)?.database.into_database();
    if let Err(invalid) = database.validate() {
        report.violations.extend(invalid.violations);
    }
    if let Err(report) = report.into_result() {
        tracing::warn!("{} failed validation: {}", path.display(), report);
        return Err(DbError::Invalid(report));
    }
    tracing::debug!("Loaded database from {}", path.display());
    Ok(database)
}

/// Load only the header of a database file
pub fn load_header(path: impl AsRef<Path>) -> Result<DbHeader, DbError> {
    Ok(read_file(path.as_ref())?.header)
}
