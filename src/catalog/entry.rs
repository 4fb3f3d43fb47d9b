//! Raw catalog entries as produced by the external fetch step.
//!
//! The engine consumes an already-parsed catalog: a mapping from creature
//! name to `RawEntry`. Entries are tolerated in whatever shape they
//! arrive - missing stats or types deserialize to empty defaults rather
//! than failing.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One raw catalog record, keyed by creature name in the source mapping.
///
/// Field names follow the source catalog's JSON spelling.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    /// Catalog number. Entries outside [1, 1010] are not draftable.
    #[serde(default)]
    pub num: i64,

    /// Non-standard entries (unreleased, custom, format-restricted) are
    /// excluded from drafting. Absent means standard.
    #[serde(default, rename = "isNonstandard")]
    pub is_nonstandard: bool,

    /// Named base stat values. Strength is their sum; an absent or empty
    /// map means strength 0.
    #[serde(default, rename = "baseStats")]
    pub base_stats: FxHashMap<String, i64>,

    /// Type names as raw strings, parsed case-insensitively downstream.
    #[serde(default)]
    pub types: Vec<String>,
}

impl RawEntry {
    /// Sum of all base stat values, clamped at zero.
    #[must_use]
    pub fn strength(&self) -> u32 {
        self.base_stats.values().sum::<i64>().max(0) as u32
    }
}
