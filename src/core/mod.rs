//! Core engine types: creatures, players, RNG.
//!
//! The fundamental building blocks shared by every other module. Nothing
//! here knows about drafting order or the type chart.

pub mod creature;
pub mod player;
pub mod rng;

pub use creature::{sort_by_strength_desc, Creature, TypeList};
pub use player::{PlayerId, PlayerMap};
pub use rng::DraftRng;
