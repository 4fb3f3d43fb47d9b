//! Type tags and the static effectiveness chart.
//!
//! ## Key Types
//!
//! - `TypeTag`: closed 18-variant tag enum, case-insensitive parsing
//! - `TypeChart`: directional attacker -> defender relation, built once
//!   via `TypeChart::standard()` and never mutated

pub mod chart;
pub mod tag;

pub use chart::TypeChart;
pub use tag::{TypeTag, TYPE_COUNT};
