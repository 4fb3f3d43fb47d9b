//! Snake-order turn scheduling.
//!
//! A snake draft reverses the seat sequence every other round so that
//! picking late in one round means picking early in the next, balancing
//! average pick value across seats. The ordering is its own iterator so
//! the property can be tested independently of any session state.

use crate::core::PlayerId;

/// Iterator over `(round, player)` turns in snake order.
///
/// Even rounds (0-based) walk seats ascending, odd rounds descending.
///
/// ```
/// use pokedraft::core::PlayerId;
/// use pokedraft::draft::SnakeOrder;
///
/// let turns: Vec<_> = SnakeOrder::new(3, 2).collect();
/// let seats: Vec<_> = turns.iter().map(|(_, p)| p.index()).collect();
/// assert_eq!(seats, vec![0, 1, 2, 2, 1, 0]);
/// ```
#[derive(Clone, Debug)]
pub struct SnakeOrder {
    player_count: usize,
    rounds: usize,
    round: usize,
    seat: usize,
}

impl SnakeOrder {
    /// Turn order for `player_count` seats over `rounds` rounds.
    #[must_use]
    pub fn new(player_count: usize, rounds: usize) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        Self {
            player_count,
            rounds,
            round: 0,
            seat: 0,
        }
    }

    /// Total number of turns this order will yield.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.player_count * self.rounds
    }
}

impl Iterator for SnakeOrder {
    type Item = (usize, PlayerId);

    fn next(&mut self) -> Option<Self::Item> {
        if self.round >= self.rounds {
            return None;
        }

        // Odd rounds run the seat walk backwards.
        let index = if self.round % 2 == 0 {
            self.seat
        } else {
            self.player_count - 1 - self.seat
        };
        let turn = (self.round, PlayerId::new(index as u8));

        self.seat += 1;
        if self.seat == self.player_count {
            self.seat = 0;
            self.round += 1;
        }

        Some(turn)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.rounds - self.round) * self.player_count - self.seat;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SnakeOrder {}

#[cfg(test)]
mod tests {
    use super::*;

    fn seats(player_count: usize, rounds: usize) -> Vec<usize> {
        SnakeOrder::new(player_count, rounds)
            .map(|(_, p)| p.index())
            .collect()
    }

    #[test]
    fn test_two_players_four_rounds() {
        assert_eq!(seats(2, 4), vec![0, 1, 1, 0, 0, 1, 1, 0]);
    }

    #[test]
    fn test_four_players_alternate_direction() {
        assert_eq!(seats(4, 3), vec![0, 1, 2, 3, 3, 2, 1, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn test_single_player() {
        assert_eq!(seats(1, 3), vec![0, 0, 0]);
    }

    #[test]
    fn test_zero_rounds_is_empty() {
        assert_eq!(seats(3, 0), Vec::<usize>::new());
    }

    #[test]
    fn test_rounds_are_labeled() {
        let rounds: Vec<_> = SnakeOrder::new(2, 3).map(|(r, _)| r).collect();
        assert_eq!(rounds, vec![0, 0, 1, 1, 2, 2]);
    }

    #[test]
    fn test_every_seat_picks_once_per_round() {
        for player_count in [1, 2, 3, 5, 8] {
            for round in 0..4 {
                let mut indices: Vec<_> = SnakeOrder::new(player_count, 4)
                    .filter(|(r, _)| *r == round)
                    .map(|(_, p)| p.index())
                    .collect();
                indices.sort_unstable();
                assert_eq!(indices, (0..player_count).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_exact_size() {
        let mut order = SnakeOrder::new(3, 4);
        assert_eq!(order.len(), 12);
        order.next();
        assert_eq!(order.len(), 11);
    }
}
