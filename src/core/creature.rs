//! Creature records - the immutable units being drafted.
//!
//! A `Creature` is built once from the source catalog and never mutated.
//! Its strength is the sum of its base stat values (BST) and is the sole
//! numeric ranking signal in the engine. Identity is by name, which is
//! unique within a catalog.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::typing::TypeTag;

/// Inline storage for a creature's type tags.
///
/// Every creature carries one or two tags, so two inline slots cover
/// the universe without heap allocation.
pub type TypeList = SmallVec<[TypeTag; 2]>;

/// An immutable draftable creature.
///
/// ## Example
///
/// ```
/// use pokedraft::core::Creature;
/// use pokedraft::typing::TypeTag;
///
/// let c = Creature::new("Garchomp", 600, [TypeTag::Dragon, TypeTag::Ground]);
/// assert_eq!(c.strength, 600);
/// assert_eq!(c.types.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Creature {
    /// Catalog name, unique per catalog. Doubles as identity.
    pub name: String,
    /// Base stat total. Zero for entries with no stat data.
    pub strength: u32,
    /// One or two type tags, in catalog order.
    pub types: TypeList,
}

impl Creature {
    /// Create a creature from a name, strength, and type tags.
    pub fn new(
        name: impl Into<String>,
        strength: u32,
        types: impl IntoIterator<Item = TypeTag>,
    ) -> Self {
        Self {
            name: name.into(),
            strength,
            types: types.into_iter().collect(),
        }
    }

    /// The creature's types as a slice, ready for chart queries.
    #[must_use]
    pub fn types(&self) -> &[TypeTag] {
        &self.types
    }
}

impl std::fmt::Display for Creature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (BST {})", self.name, self.strength)?;
        if !self.types.is_empty() {
            write!(f, " ")?;
            for (i, tag) in self.types.iter().enumerate() {
                if i > 0 {
                    write!(f, "/")?;
                }
                write!(f, "{}", tag)?;
            }
        }
        Ok(())
    }
}

/// Stable descending sort by strength.
///
/// Ties keep their relative input order, which is how both the catalog
/// filter and the pool sampler define tie-breaking.
pub fn sort_by_strength_desc(creatures: &mut [Creature]) {
    creatures.sort_by(|a, b| b.strength.cmp(&a.strength));
}
