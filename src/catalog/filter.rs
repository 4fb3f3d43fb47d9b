//! Reduction of a raw catalog to the standard draftable subset.
//!
//! Filtering is permissive by design: malformed entries become strength-0
//! creatures with whatever tags still parse. Only three checks exclude an
//! entry outright - the catalog number range, the non-standard flag, and
//! the cosmetic forme suffix on its name.

use std::str::FromStr;

use crate::core::{sort_by_strength_desc, Creature};
use crate::typing::TypeTag;

use super::entry::RawEntry;

/// Highest catalog number considered draftable.
pub const MAX_CATALOG_NUM: i64 = 1010;

/// Name suffixes marking cosmetic forme entries in the source catalog.
///
/// The catalog encodes regional and type formes as separate entries whose
/// names end in one of these; they duplicate a base entry and are skipped.
const FORME_SUFFIXES: [&str; 23] = [
    "Normal", "Fire", "Water", "Electric", "Grass", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy", "Alola",
    "Galar", "Hisui", "Paldea", "Kalos",
];

/// Reduce a raw catalog to the standard eligible creatures.
///
/// Includes every entry with `1 <= num <= 1010`, a false/absent
/// non-standard flag, and no forme suffix. Output is sorted by strength
/// descending; ties keep catalog iteration order.
///
/// ## Example
///
/// ```
/// use pokedraft::catalog::{standard_creatures, RawEntry};
///
/// let mut entry = RawEntry::default();
/// entry.num = 1;
/// entry.types = vec!["grass".into(), "poison".into()];
///
/// let creatures = standard_creatures([("Bulbasaur", &entry)]);
/// assert_eq!(creatures.len(), 1);
/// assert_eq!(creatures[0].name, "Bulbasaur");
/// ```
pub fn standard_creatures<'a, I>(catalog: I) -> Vec<Creature>
where
    I: IntoIterator<Item = (&'a str, &'a RawEntry)>,
{
    let mut creatures: Vec<Creature> = catalog
        .into_iter()
        .filter(|(name, entry)| is_standard(name, entry))
        .map(|(name, entry)| {
            let types = entry
                .types
                .iter()
                .filter_map(|t| TypeTag::from_str(t).ok());
            Creature::new(name, entry.strength(), types)
        })
        .collect();

    sort_by_strength_desc(&mut creatures);
    creatures
}

fn is_standard(name: &str, entry: &RawEntry) -> bool {
    (1..=MAX_CATALOG_NUM).contains(&entry.num)
        && !entry.is_nonstandard
        && !FORME_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}
