//! # pokedraft
//!
//! Engine for a turn-based snake draft over a shared pool of creatures.
//!
//! Players alternately pick creatures from a pool sampled out of a
//! filtered catalog. Each creature carries a strength score (its base
//! stat total) and one or two type tags from a closed set of 18; a fixed
//! directional effectiveness chart drives counter-pick recommendations.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: rendering, input parsing, and catalog fetching are
//!    external collaborators. The engine consumes a parsed catalog and an
//!    injected [`draft::PickStrategy`], and exposes read-only state views.
//!
//! 2. **Deterministic**: all randomness flows through a seeded
//!    [`core::DraftRng`], so any session is replayable from its seed.
//!
//! 3. **Single control thread**: one pending pick at a time, allowed to
//!    block indefinitely on a human decision. Chart and counter queries
//!    are pure and safe to share read-only.
//!
//! ## Modules
//!
//! - `core`: creatures, player IDs, per-player maps, RNG
//! - `typing`: the 18 type tags and the static effectiveness chart
//! - `catalog`: raw entry filtering into the standard draftable subset
//! - `pool`: session pool sampling and removal
//! - `counter`: counter-pick lookup
//! - `draft`: snake-order scheduling, sessions, pick strategies
//!
//! ## Example
//!
//! ```
//! use pokedraft::core::{Creature, DraftRng, PlayerId};
//! use pokedraft::draft::{run_draft, StrongestAvailable, DEFAULT_ROUNDS};
//! use pokedraft::pool::Pool;
//! use pokedraft::typing::TypeTag;
//!
//! let catalog: Vec<_> = (0..40)
//!     .map(|i| Creature::new(format!("c{i}"), 300 + i, [TypeTag::Water]))
//!     .collect();
//!
//! let mut rng = DraftRng::new(42);
//! let pool = Pool::sample(&catalog, 8, &mut rng);
//! let rosters = run_draft(2, pool, DEFAULT_ROUNDS, StrongestAvailable);
//!
//! assert_eq!(rosters[PlayerId::new(0)].len(), 4);
//! assert_eq!(rosters[PlayerId::new(1)].len(), 4);
//! ```

pub mod catalog;
pub mod core;
pub mod counter;
pub mod draft;
pub mod pool;
pub mod typing;

// Re-export commonly used types
pub use crate::core::{Creature, DraftRng, PlayerId, PlayerMap, TypeList};

pub use crate::typing::{TypeChart, TypeTag, TYPE_COUNT};

pub use crate::catalog::{standard_creatures, RawEntry, MAX_CATALOG_NUM};

pub use crate::pool::Pool;

pub use crate::counter::find_counters;

pub use crate::draft::{
    run_draft, DraftPhase, DraftSession, PickStrategy, Roster, SnakeOrder, StrongestAvailable,
    DEFAULT_ROUNDS,
};
