//! The draft scheduler: snake-order turns over a shared pool.
//!
//! ## Key Types
//!
//! - `SnakeOrder`: alternating-direction `(round, player)` turn iterator
//! - `PickStrategy`: injected decision source (human UI, bot, test stub)
//! - `DraftSession`: pool + rosters + turn cursor, mutated one pick at a
//!   time until every round is played or the pool runs out
//! - `run_draft`: one-call driver from pool to final rosters

pub mod order;
pub mod session;
pub mod strategy;

pub use order::SnakeOrder;
pub use session::{run_draft, DraftPhase, DraftSession, Roster, DEFAULT_ROUNDS};
pub use strategy::{PickStrategy, StrongestAvailable};
