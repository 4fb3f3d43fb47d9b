//! The session pool: a strength-sorted set of draftable creatures.
//!
//! A pool is built once per session by sampling the filtered catalog,
//! then only ever shrinks as picks remove creatures. The sorted order is
//! the pool's public face; the one-by-one reveal used by presentation
//! layers is a separate shuffled copy that leaves the pool untouched.

use serde::{Deserialize, Serialize};

use crate::core::{sort_by_strength_desc, Creature, DraftRng};

/// An ordered, shrinking collection of draftable creatures.
///
/// Invariant: creatures are kept in non-increasing strength order.
///
/// ## Example
///
/// ```
/// use pokedraft::core::{Creature, DraftRng};
/// use pokedraft::pool::Pool;
/// use pokedraft::typing::TypeTag;
///
/// let catalog: Vec<_> = (0..20)
///     .map(|i| Creature::new(format!("c{i}"), 100 + i, [TypeTag::Normal]))
///     .collect();
///
/// let pool = Pool::sample(&catalog, 8, &mut DraftRng::new(42));
/// assert_eq!(pool.len(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    creatures: Vec<Creature>,
}

impl Pool {
    /// Build a pool directly from creatures, sorting by strength.
    ///
    /// The sort is stable, so equal strengths keep their input order.
    #[must_use]
    pub fn from_creatures(mut creatures: Vec<Creature>) -> Self {
        sort_by_strength_desc(&mut creatures);
        Self { creatures }
    }

    /// Draw a pool of `min(size, creatures.len())` creatures uniformly
    /// without replacement, re-sorted by strength descending.
    ///
    /// Deterministic for a fixed RNG seed. The draw order is not
    /// preserved here; use [`Pool::reveal_order`] for a randomized
    /// presentation sequence.
    #[must_use]
    pub fn sample(creatures: &[Creature], size: usize, rng: &mut DraftRng) -> Self {
        Self::from_creatures(rng.sample(creatures, size))
    }

    /// Number of creatures still available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    /// True once every creature has been picked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    /// The creatures in strength order.
    #[must_use]
    pub fn as_slice(&self) -> &[Creature] {
        &self.creatures
    }

    /// Iterate in strength order, strongest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Creature> {
        self.creatures.iter()
    }

    /// The creature at a 0-based rank (0 = strongest), if in range.
    #[must_use]
    pub fn get(&self, rank: usize) -> Option<&Creature> {
        self.creatures.get(rank)
    }

    /// Whether a creature with this name is still available.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.creatures.iter().any(|c| c.name == name)
    }

    /// Remove and return the single occurrence of a creature by name.
    ///
    /// Returns `None` if no creature with that name is available.
    pub fn take(&mut self, name: &str) -> Option<Creature> {
        let rank = self.creatures.iter().position(|c| c.name == name)?;
        Some(self.creatures.remove(rank))
    }

    /// A shuffled copy of the pool for one-by-one reveal.
    ///
    /// Purely a presentation aid; the pool's own order is unchanged.
    #[must_use]
    pub fn reveal_order(&self, rng: &mut DraftRng) -> Vec<Creature> {
        let mut revealed = self.creatures.clone();
        rng.shuffle(&mut revealed);
        revealed
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Creature;
    type IntoIter = std::slice::Iter<'a, Creature>;

    fn into_iter(self) -> Self::IntoIter {
        self.creatures.iter()
    }
}
