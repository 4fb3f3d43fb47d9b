//! Pick strategies - the injection point for the interaction layer.
//!
//! The scheduler knows nothing about menus, pagination, or input parsing.
//! It hands the current seat, the available pool, and everyone's rosters
//! to a `PickStrategy` and gets back one creature. A human-facing
//! implementation is expected to re-prompt internally until the input
//! resolves to a still-available creature; the engine only ever sees the
//! resolved result.

use crate::core::{Creature, PlayerId, PlayerMap};
use crate::pool::Pool;

use super::session::Roster;

/// Supplies one pick per turn.
///
/// Contract: the returned creature must currently be in `pool`. Returning
/// anything else aborts the session as a broken-strategy diagnostic.
pub trait PickStrategy {
    /// Choose a creature from the available pool for `player`.
    ///
    /// May block indefinitely (a human deciding); the scheduler issues
    /// exactly one outstanding call at a time.
    fn pick(&mut self, player: PlayerId, pool: &Pool, rosters: &PlayerMap<Roster>) -> Creature;
}

/// Closures are strategies; handy for tests and simulations.
impl<F> PickStrategy for F
where
    F: FnMut(PlayerId, &Pool, &PlayerMap<Roster>) -> Creature,
{
    fn pick(&mut self, player: PlayerId, pool: &Pool, rosters: &PlayerMap<Roster>) -> Creature {
        self(player, pool, rosters)
    }
}

/// Deterministic strategy that always takes the strongest remaining
/// creature. Ships for tests, simulations, and as a reference
/// implementation of the contract.
#[derive(Clone, Copy, Debug, Default)]
pub struct StrongestAvailable;

impl PickStrategy for StrongestAvailable {
    fn pick(&mut self, _player: PlayerId, pool: &Pool, _rosters: &PlayerMap<Roster>) -> Creature {
        pool.get(0)
            .expect("scheduler never requests a pick from an empty pool")
            .clone()
    }
}
