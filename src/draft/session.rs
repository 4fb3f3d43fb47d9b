//! Draft sessions: pool, rosters, and the turn cursor.
//!
//! A `DraftSession` owns the shrinking pool and one roster per seat. Its
//! only mutation is `commit_pick`, driven either directly by a host or
//! through `run` with a `PickStrategy`. After every committed pick the
//! session exposes read-only views of the pool, the rosters, and the
//! current position, which is all a presentation layer needs.

use serde::{Deserialize, Serialize};

use crate::core::{Creature, PlayerId, PlayerMap};
use crate::pool::Pool;

use super::order::SnakeOrder;
use super::strategy::PickStrategy;

/// Rounds drafted when the host does not configure a count.
pub const DEFAULT_ROUNDS: usize = 4;

/// One seat's picks, in pick order.
///
/// Grows by exactly one creature per committed pick and is read-only once
/// the draft finishes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    picks: Vec<Creature>,
}

impl Roster {
    /// Number of picks made so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// True before the seat's first pick.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// The picks in draft order.
    #[must_use]
    pub fn picks(&self) -> &[Creature] {
        &self.picks
    }

    /// Iterate over picks in draft order.
    pub fn iter(&self) -> std::slice::Iter<'_, Creature> {
        self.picks.iter()
    }

    /// Consume the roster, yielding picks in draft order.
    pub fn into_picks(self) -> Vec<Creature> {
        self.picks
    }

    fn push(&mut self, creature: Creature) {
        self.picks.push(creature);
    }
}

/// Where a session stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftPhase {
    /// Waiting on the pick for this round and seat.
    AwaitingPick { round: usize, player: PlayerId },
    /// Terminal: every round played or the pool ran out.
    Finished,
}

/// A running (or finished) draft.
///
/// Turns follow [`SnakeOrder`]. The session becomes terminal when the
/// configured rounds are exhausted or the pool empties mid-draft - the
/// latter is a normal ending, not an error. Committed picks cannot be
/// withdrawn.
///
/// ## Example
///
/// ```
/// use pokedraft::core::{Creature, PlayerId};
/// use pokedraft::draft::{DraftSession, StrongestAvailable};
/// use pokedraft::pool::Pool;
/// use pokedraft::typing::TypeTag;
///
/// let pool = Pool::from_creatures(
///     (0..8).map(|i| Creature::new(format!("c{i}"), 800 - i, [TypeTag::Normal])).collect(),
/// );
///
/// let mut session = DraftSession::new(2, pool, 4);
/// session.run(&mut StrongestAvailable);
///
/// assert!(session.is_finished());
/// assert_eq!(session.roster(PlayerId::new(0)).len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct DraftSession {
    pool: Pool,
    rosters: PlayerMap<Roster>,
    turns: SnakeOrder,
    current: Option<(usize, PlayerId)>,
    rounds: usize,
}

impl DraftSession {
    /// Start a draft over `pool` with `player_count` seats and `rounds`
    /// snake rounds.
    ///
    /// If the pool cannot cover every turn, the draft will simply end
    /// early once it empties.
    #[must_use]
    pub fn new(player_count: usize, pool: Pool, rounds: usize) -> Self {
        let mut turns = SnakeOrder::new(player_count, rounds);
        let current = if pool.is_empty() { None } else { turns.next() };

        Self {
            pool,
            rosters: PlayerMap::with_default(player_count),
            turns,
            current,
            rounds,
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.rosters.player_count()
    }

    /// Configured round count.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The creatures still available, strongest first.
    #[must_use]
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    /// One seat's picks so far.
    #[must_use]
    pub fn roster(&self, player: PlayerId) -> &Roster {
        self.rosters.get(player)
    }

    /// All rosters, by seat.
    #[must_use]
    pub fn rosters(&self) -> &PlayerMap<Roster> {
        &self.rosters
    }

    /// The `(round, player)` whose pick is pending, or `None` once
    /// finished.
    #[must_use]
    pub fn current_turn(&self) -> Option<(usize, PlayerId)> {
        self.current
    }

    /// Current phase of the session.
    #[must_use]
    pub fn phase(&self) -> DraftPhase {
        match self.current {
            Some((round, player)) => DraftPhase::AwaitingPick { round, player },
            None => DraftPhase::Finished,
        }
    }

    /// True once no more picks will be requested.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }

    /// Commit a pick for the pending turn.
    ///
    /// The creature moves from the pool to the current seat's roster and
    /// the cursor advances; if the pool is now empty all remaining turns
    /// are skipped and the session finishes.
    ///
    /// Panics if the session is finished or if `creature` is not in the
    /// available pool - both are broken-caller contracts, not
    /// recoverable conditions. Interactive input that fails to resolve
    /// to an available creature must be re-prompted *before* committing.
    pub fn commit_pick(&mut self, creature: Creature) {
        let (_, player) = self
            .current
            .expect("commit_pick called on a finished draft");

        let picked = self.pool.take(&creature.name).unwrap_or_else(|| {
            panic!(
                "pick strategy for {player} returned {:?}, which is not in the available pool",
                creature.name
            )
        });
        self.rosters.get_mut(player).push(picked);

        self.current = if self.pool.is_empty() {
            None
        } else {
            self.turns.next()
        };
    }

    /// Drive the session to completion with a strategy.
    pub fn run(&mut self, strategy: &mut impl PickStrategy) {
        while let Some((_, player)) = self.current {
            let pick = strategy.pick(player, &self.pool, &self.rosters);
            self.commit_pick(pick);
        }
    }

    /// Consume a finished (or abandoned) session, keeping the rosters.
    #[must_use]
    pub fn into_rosters(self) -> PlayerMap<Roster> {
        self.rosters
    }
}

/// Run a complete draft and return the final rosters.
///
/// Convenience wrapper over [`DraftSession`] for hosts that do not need
/// mid-draft views.
pub fn run_draft(
    player_count: usize,
    pool: Pool,
    rounds: usize,
    mut strategy: impl PickStrategy,
) -> PlayerMap<Roster> {
    let mut session = DraftSession::new(player_count, pool, rounds);
    session.run(&mut strategy);
    session.into_rosters()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::StrongestAvailable;
    use crate::typing::TypeTag;

    fn descending_pool(n: usize) -> Pool {
        Pool::from_creatures(
            (0..n)
                .map(|i| Creature::new(format!("c{i}"), 1000 - i as u32, [TypeTag::Normal]))
                .collect(),
        )
    }

    #[test]
    fn test_new_session_awaits_first_turn() {
        let session = DraftSession::new(3, descending_pool(12), 4);

        assert_eq!(session.current_turn(), Some((0, PlayerId::new(0))));
        assert_eq!(
            session.phase(),
            DraftPhase::AwaitingPick {
                round: 0,
                player: PlayerId::new(0)
            }
        );
        assert!(!session.is_finished());
    }

    #[test]
    fn test_empty_pool_is_finished_immediately() {
        let session = DraftSession::new(2, Pool::from_creatures(vec![]), 4);

        assert!(session.is_finished());
        assert_eq!(session.phase(), DraftPhase::Finished);
    }

    #[test]
    fn test_commit_moves_creature_to_roster() {
        let mut session = DraftSession::new(2, descending_pool(8), 4);
        let strongest = session.pool().get(0).unwrap().clone();

        session.commit_pick(strongest.clone());

        assert_eq!(session.roster(PlayerId::new(0)).picks(), &[strongest]);
        assert_eq!(session.pool().len(), 7);
        assert_eq!(session.current_turn(), Some((0, PlayerId::new(1))));
    }

    #[test]
    #[should_panic(expected = "not in the available pool")]
    fn test_pick_outside_pool_is_fatal() {
        let mut session = DraftSession::new(2, descending_pool(8), 4);
        session.commit_pick(Creature::new("Missingno", 999, [TypeTag::Normal]));
    }

    #[test]
    #[should_panic(expected = "finished draft")]
    fn test_commit_after_finish_is_fatal() {
        let mut session = DraftSession::new(2, descending_pool(2), 1);
        session.run(&mut StrongestAvailable);

        let any = Creature::new("c0", 1000, [TypeTag::Normal]);
        session.commit_pick(any);
    }

    #[test]
    fn test_pool_exhaustion_ends_early() {
        // 3 creatures cannot cover 2 players x 4 rounds.
        let mut session = DraftSession::new(2, descending_pool(3), 4);
        session.run(&mut StrongestAvailable);

        assert!(session.is_finished());
        assert!(session.pool().is_empty());
        // Snake order hands picks 2 and 3 to seat 1.
        assert_eq!(session.roster(PlayerId::new(0)).len(), 1);
        assert_eq!(session.roster(PlayerId::new(1)).len(), 2);
    }

    #[test]
    fn test_run_draft_convenience() {
        let rosters = run_draft(2, descending_pool(8), 4, StrongestAvailable);

        assert_eq!(rosters[PlayerId::new(0)].len(), 4);
        assert_eq!(rosters[PlayerId::new(1)].len(), 4);
    }

    #[test]
    fn test_strategy_sees_current_state() {
        let mut seen_pool_sizes = Vec::new();
        let rosters = run_draft(
            2,
            descending_pool(4),
            2,
            |_: PlayerId, pool: &Pool, _: &PlayerMap<Roster>| {
                seen_pool_sizes.push(pool.len());
                pool.get(0).unwrap().clone()
            },
        );

        assert_eq!(seen_pool_sizes, vec![4, 3, 2, 1]);
        assert_eq!(rosters[PlayerId::new(0)].len(), 2);
    }
}
