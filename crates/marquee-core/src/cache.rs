use std::collections::HashMap;

use crate::model::DetailRecord;

/// Identifies one cache lifetime. Bumped on every [`DetailCache::clear`].
pub type Generation = u64;

/// Outcome of [`DetailCache::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Stored,
    /// An entry already existed; the first stored record is kept.
    AlreadyCached,
    /// Issued under an older generation; dropped.
    Stale,
}

/// Identifier → detail record map, wiped at the start of every search.
///
/// Entries are write-once. Writes carry the generation their fetch was
/// issued under so results from a previous search never land in the
/// current one.
#[derive(Debug, Default)]
pub struct DetailCache {
    entries: HashMap<String, DetailRecord>,
    generation: Generation,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&DetailRecord> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn insert(&mut self, generation: Generation, record: DetailRecord) -> InsertOutcome {
        self.insert_as(generation, record.id.clone(), record)
    }

    /// Store `record` under `id`, which may differ from `record.id` when the
    /// API normalizes identifiers.
    pub fn insert_as(
        &mut self,
        generation: Generation,
        id: String,
        record: DetailRecord,
    ) -> InsertOutcome {
        if generation != self.generation {
            return InsertOutcome::Stale;
        }
        match self.entries.entry(id) {
            std::collections::hash_map::Entry::Occupied(_) => InsertOutcome::AlreadyCached,
            std::collections::hash_map::Entry::Vacant(slot) => {
                slot.insert(record);
                InsertOutcome::Stored
            }
        }
    }

    /// Drop every entry and start a new generation.
    pub fn clear(&mut self) -> Generation {
        self.entries.clear();
        self.generation += 1;
        self.generation
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
