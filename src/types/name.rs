//! Indexed filename parsing and formatting

use std::fmt;

/// Width of the zero-padded index prefix.
pub const INDEX_WIDTH: usize = 5;

/// Separator between the index prefix and the base name.
pub const SEPARATOR: &str = "__";

/// Replace spaces with underscores in a source filename.
///
/// The normalized name is the dedup key: a source file is considered already
/// synchronized when its normalized name matches the base of any indexed
/// entry in the destination.
pub fn normalize_name(name: &str) -> String {
    name.replace(' ', "_")
}

/// A destination filename carrying a sequence prefix, e.g. `00042__My_Song.flac`.
///
/// Only names with exactly five ASCII digits followed by a double underscore
/// are managed entries; everything else in a destination folder is inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedName {
    /// Sequence index parsed from the prefix
    pub index: u32,

    /// Base name with the prefix stripped (already normalized)
    pub base: String,
}

impl IndexedName {
    /// Create an indexed name from an assigned index and a normalized base.
    pub fn new(index: u32, base: impl Into<String>) -> Self {
        Self {
            index,
            base: base.into(),
        }
    }

    /// Parse a destination entry name.
    ///
    /// Returns `None` when the name does not carry the managed prefix, which
    /// makes "no match" an explicit case for callers rather than a silent
    /// failure path.
    pub fn parse(name: &str) -> Option<Self> {
        let prefix = name.get(..INDEX_WIDTH)?;
        if !prefix.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let base = name[INDEX_WIDTH..].strip_prefix(SEPARATOR)?;

        // Five ASCII digits always parse into a u32.
        let index = prefix.parse::<u32>().ok()?;
        Some(Self::new(index, base))
    }
}

impl fmt::Display for IndexedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0width$}{}{}",
            self.index,
            SEPARATOR,
            self.base,
            width = INDEX_WIDTH
        )
    }
}
