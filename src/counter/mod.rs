//! Counter-pick lookup.
//!
//! A counter to a creature is any candidate whose types are
//! super-effective against it. The lookup is a pure stable filter over a
//! candidate slice, so it is safe to run from any number of read-only
//! contexts (e.g. precomputing display hints for a whole pool).

use crate::core::Creature;
use crate::typing::TypeChart;

/// Every candidate whose types are super-effective against `target`.
///
/// The filter is stable and never re-sorts: candidates are expected to be
/// pre-sorted by strength descending (as pools are), which makes the
/// result descending too. The target is not special-cased - if it appears
/// among the candidates and the chart lists one of its own types against
/// itself, it will be returned. Truncating to a display top-K is the
/// caller's concern.
///
/// ## Example
///
/// ```
/// use pokedraft::core::Creature;
/// use pokedraft::counter::find_counters;
/// use pokedraft::typing::{TypeChart, TypeTag};
///
/// let chart = TypeChart::standard();
/// let target = Creature::new("Charizard", 534, [TypeTag::Fire, TypeTag::Flying]);
/// let pool = vec![
///     Creature::new("Tyranitar", 600, [TypeTag::Rock, TypeTag::Dark]),
///     Creature::new("Venusaur", 525, [TypeTag::Grass, TypeTag::Poison]),
/// ];
///
/// let counters = find_counters(&target, &pool, &chart);
/// assert_eq!(counters.len(), 1);
/// assert_eq!(counters[0].name, "Tyranitar");
/// ```
#[must_use]
pub fn find_counters<'a>(
    target: &Creature,
    candidates: &'a [Creature],
    chart: &TypeChart,
) -> Vec<&'a Creature> {
    candidates
        .iter()
        .filter(|c| chart.is_super_effective(c.types(), target.types()))
        .collect()
}
