//! Per-destination index tracking
//!
//! Nothing is persisted between runs: the next free index is always
//! recomputed from the destination's current contents, which is what makes
//! interrupted runs self-healing.

use crate::scanner::list_entry_names;
use crate::types::{CopyPair, IndexedName, SequinError};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Index state for one destination folder.
///
/// `next_index` only ever increases during a run; indices observed on disk
/// form the floor for every new assignment and are never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationState {
    next_index: u32,
    existing: HashSet<String>,
}

impl DestinationState {
    /// Build state from a destination folder's entry names.
    ///
    /// Entries without the managed prefix are inert: they contribute neither
    /// to the index floor nor to the set of present base names.
    pub fn from_entry_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut highest = 0;
        let mut existing = HashSet::new();
        for name in names {
            if let Some(parsed) = IndexedName::parse(name.as_ref()) {
                highest = highest.max(parsed.index);
                existing.insert(parsed.base);
            }
        }
        Self {
            next_index: highest + 1,
            existing,
        }
    }

    /// The index the next assignment will receive.
    pub fn next_index(&self) -> u32 {
        self.next_index
    }

    /// Check whether a normalized base name is already present.
    pub fn contains(&self, base: &str) -> bool {
        self.existing.contains(base)
    }

    /// Hand out the next index for `base` and record the name as present,
    /// so a second file normalizing to the same base within this run is
    /// skipped (first wins).
    pub fn assign(&mut self, base: &str) -> u32 {
        let index = self.next_index;
        self.next_index += 1;
        self.existing.insert(base.to_owned());
        index
    }
}

/// Index state for every destination referenced by the run's pairs.
///
/// Owned by the run and handed to the planner by mutable reference; there is
/// no module-level state. Destinations shared by several pairs are scanned
/// once and share one counter.
#[derive(Debug, Default)]
pub struct DestinationIndex {
    states: HashMap<PathBuf, DestinationState>,
}

impl DestinationIndex {
    /// Scan every distinct destination folder in `pairs`.
    pub fn scan(pairs: &[CopyPair]) -> Result<Self, SequinError> {
        let mut states = HashMap::new();
        for pair in pairs {
            if states.contains_key(&pair.destination) {
                continue;
            }
            let names = list_entry_names(&pair.destination)?;
            states.insert(
                pair.destination.clone(),
                DestinationState::from_entry_names(&names),
            );
        }
        Ok(Self { states })
    }

    /// Number of distinct destinations scanned.
    pub fn destination_count(&self) -> usize {
        self.states.len()
    }

    /// Mutable access to one destination's state, if it was scanned.
    pub fn state_mut(&mut self, destination: &Path) -> Option<&mut DestinationState> {
        self.states.get_mut(destination)
    }

    /// Read access to one destination's state, if it was scanned.
    pub fn state(&self, destination: &Path) -> Option<&DestinationState> {
        self.states.get(destination)
    }
}
