//! Property-based tests for the engine's structural guarantees.

use proptest::prelude::*;

use pokedraft::core::{Creature, DraftRng, PlayerId};
use pokedraft::draft::{DraftSession, StrongestAvailable};
use pokedraft::pool::Pool;
use pokedraft::typing::TypeTag;

fn arb_creatures(max: usize) -> impl Strategy<Value = Vec<Creature>> {
    prop::collection::vec((0u32..800, 0usize..TypeTag::ALL.len()), 1..max).prop_map(|raw| {
        raw
            .into_iter()
            .enumerate()
            .map(|(i, (strength, tag))| {
                Creature::new(format!("c{i}"), strength, [TypeTag::ALL[tag]])
            })
            .collect()
    })
}

proptest! {
    /// The sampler never returns more than requested or than available,
    /// and the same seed always reproduces the same pool.
    #[test]
    fn sampler_bounds_and_determinism(
        creatures in arb_creatures(60),
        size in 0usize..80,
        seed in any::<u64>(),
    ) {
        let a = Pool::sample(&creatures, size, &mut DraftRng::new(seed));
        let b = Pool::sample(&creatures, size, &mut DraftRng::new(seed));

        prop_assert_eq!(a.len(), size.min(creatures.len()));
        prop_assert_eq!(&a, &b);

        let strengths: Vec<_> = a.iter().map(|c| c.strength).collect();
        prop_assert!(strengths.windows(2).all(|w| w[0] >= w[1]));
    }

    /// After any draft, every creature sits in exactly one place: the
    /// union of rosters plus the leftover pool is the starting pool.
    #[test]
    fn draft_conserves_creatures(
        creatures in arb_creatures(40),
        player_count in 1usize..6,
        rounds in 0usize..6,
        seed in any::<u64>(),
    ) {
        let pool = Pool::sample(&creatures, creatures.len(), &mut DraftRng::new(seed));
        let mut before: Vec<String> = pool.iter().map(|c| c.name.clone()).collect();

        let mut session = DraftSession::new(player_count, pool, rounds);
        session.run(&mut StrongestAvailable);
        prop_assert!(session.is_finished());

        let mut after: Vec<String> = session.pool().iter().map(|c| c.name.clone()).collect();
        for player in PlayerId::all(player_count) {
            prop_assert!(session.roster(player).len() <= rounds);
            after.extend(session.roster(player).iter().map(|c| c.name.clone()));
        }

        before.sort();
        after.sort();
        prop_assert_eq!(&before, &after);

        after.dedup();
        prop_assert_eq!(after.len(), before.len());
    }

    /// Roster sizes across seats never differ by more than one pick.
    #[test]
    fn draft_hands_out_picks_evenly(
        pool_size in 1usize..30,
        player_count in 1usize..6,
        rounds in 1usize..6,
    ) {
        let creatures: Vec<_> = (0..pool_size)
            .map(|i| Creature::new(format!("c{i}"), i as u32, [TypeTag::Water]))
            .collect();

        let mut session = DraftSession::new(player_count, Pool::from_creatures(creatures), rounds);
        session.run(&mut StrongestAvailable);

        let sizes: Vec<_> = PlayerId::all(player_count)
            .map(|p| session.roster(p).len())
            .collect();
        let min = sizes.iter().min().unwrap();
        let max = sizes.iter().max().unwrap();
        prop_assert!(max - min <= 1);
    }
}
