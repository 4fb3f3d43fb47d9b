//! The static type-effectiveness chart.
//!
//! A directional relation: `attacker tag -> defender tags it is listed
//! against`. The relation is binary - no damage multipliers or resistance
//! tiers are modeled. It is built once at startup and read-only for the
//! process lifetime, so queries are safe from any number of read contexts.
//!
//! The table is taken verbatim from the reference data, including its
//! asymmetries, the self-referential entries (Ghost beats Ghost, Dragon
//! beats Dragon), and the two listed zero-factor immunity pairs
//! (Normal/Ghost in both directions). It is deliberately not "completed"
//! into a full canonical effectiveness table.

use crate::typing::tag::{TypeTag, TYPE_COUNT};

use TypeTag::*;

/// The reference relation, one row per attacking tag.
///
/// A defender's presence in a row means the pair is listed in the chart.
const LISTED_PAIRS: [(TypeTag, &[TypeTag]); TYPE_COUNT] = [
    (Normal, &[Ghost]),
    (Fire, &[Grass, Ice, Bug, Steel]),
    (Water, &[Fire, Ground, Rock]),
    (Electric, &[Water, Flying]),
    (Grass, &[Water, Ground, Rock]),
    (Ice, &[Grass, Ground, Flying, Dragon]),
    (Fighting, &[Normal, Ice, Rock, Dark, Steel]),
    (Poison, &[Grass, Fairy]),
    (Ground, &[Fire, Electric, Poison, Rock, Steel]),
    (Flying, &[Grass, Fighting, Bug]),
    (Psychic, &[Fighting, Poison]),
    (Bug, &[Grass, Psychic, Dark]),
    (Rock, &[Fire, Ice, Flying, Bug]),
    (Ghost, &[Normal, Psychic, Ghost]),
    (Dragon, &[Dragon]),
    (Dark, &[Psychic, Ghost]),
    (Steel, &[Ice, Rock, Fairy]),
    (Fairy, &[Fighting, Dragon, Dark]),
];

/// Immutable attacker -> defender lookup table.
///
/// ## Example
///
/// ```
/// use pokedraft::typing::{TypeChart, TypeTag};
///
/// let chart = TypeChart::standard();
/// assert!(chart.is_super_effective(&[TypeTag::Water], &[TypeTag::Fire]));
/// assert!(!chart.is_super_effective(&[TypeTag::Normal], &[TypeTag::Normal]));
/// ```
#[derive(Clone, Debug)]
pub struct TypeChart {
    matrix: [[bool; TYPE_COUNT]; TYPE_COUNT],
}

impl TypeChart {
    /// Build the chart from the reference table.
    #[must_use]
    pub fn standard() -> Self {
        let mut matrix = [[false; TYPE_COUNT]; TYPE_COUNT];
        for (attacker, defenders) in LISTED_PAIRS {
            for defender in defenders {
                matrix[attacker.index()][defender.index()] = true;
            }
        }
        Self { matrix }
    }

    /// Whether a single attacker/defender pair is listed in the chart.
    #[must_use]
    pub fn is_listed(&self, attacker: TypeTag, defender: TypeTag) -> bool {
        self.matrix[attacker.index()][defender.index()]
    }

    /// Whether any attacker tag is listed against any defender tag.
    ///
    /// This is the engine's single effectiveness query: true iff at least
    /// one `(a, d)` pair from the two tag sets appears in the chart.
    #[must_use]
    pub fn is_super_effective(&self, attackers: &[TypeTag], defenders: &[TypeTag]) -> bool {
        attackers
            .iter()
            .any(|&a| defenders.iter().any(|&d| self.is_listed(a, d)))
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_vectors() {
        let chart = TypeChart::standard();

        assert!(chart.is_super_effective(&[Water], &[Fire]));
        assert!(chart.is_super_effective(&[Normal], &[Ghost]));
        assert!(!chart.is_super_effective(&[Normal], &[Normal]));
    }

    #[test]
    fn test_self_referential_entries() {
        let chart = TypeChart::standard();

        assert!(chart.is_listed(Ghost, Ghost));
        assert!(chart.is_listed(Dragon, Dragon));
        // No other tag is listed against itself.
        for tag in TypeTag::ALL {
            if tag != Ghost && tag != Dragon {
                assert!(!chart.is_listed(tag, tag), "{tag} should not beat itself");
            }
        }
    }

    #[test]
    fn test_chart_is_directional() {
        let chart = TypeChart::standard();

        assert!(chart.is_listed(Water, Fire));
        assert!(!chart.is_listed(Fire, Water));
        assert!(chart.is_listed(Fairy, Dragon));
        assert!(!chart.is_listed(Dragon, Fairy));
    }

    #[test]
    fn test_dual_type_queries() {
        let chart = TypeChart::standard();

        // One matching pair out of four suffices.
        assert!(chart.is_super_effective(&[Grass, Poison], &[Water, Flying]));
        // No pair matches.
        assert!(!chart.is_super_effective(&[Normal, Fire], &[Water, Dragon]));
    }

    #[test]
    fn test_empty_tag_lists_never_match() {
        let chart = TypeChart::standard();

        assert!(!chart.is_super_effective(&[], &[Fire]));
        assert!(!chart.is_super_effective(&[Water], &[]));
        assert!(!chart.is_super_effective(&[], &[]));
    }

    #[test]
    fn test_row_sizes_match_reference() {
        // Spot-check a few rows against the literal reference table.
        let chart = TypeChart::standard();

        let row = |attacker: TypeTag| {
            TypeTag::ALL
                .iter()
                .filter(|&&d| chart.is_listed(attacker, d))
                .count()
        };

        assert_eq!(row(Normal), 1);
        assert_eq!(row(Fighting), 5);
        assert_eq!(row(Ground), 5);
        assert_eq!(row(Dragon), 1);
        assert_eq!(row(Ghost), 3);
    }
}
