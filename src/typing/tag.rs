//! The closed set of creature type tags.
//!
//! Eighteen categories, fixed for the lifetime of the process. Parsing is
//! ASCII case-insensitive ("fire", "FIRE", "Fire" all resolve) and every
//! tag has exactly one canonical spelling used for display.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Number of type tags in the closed set.
pub const TYPE_COUNT: usize = 18;

/// One of the 18 creature types.
///
/// The discriminant doubles as a dense index into chart tables.
///
/// ```
/// use pokedraft::typing::TypeTag;
/// use std::str::FromStr;
///
/// assert_eq!(TypeTag::from_str("dragon").unwrap(), TypeTag::Dragon);
/// assert_eq!(TypeTag::Dragon.to_string(), "Dragon");
/// assert!(TypeTag::from_str("Shadow").is_err());
/// ```
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum TypeTag {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl TypeTag {
    /// All tags in declaration order.
    pub const ALL: [TypeTag; TYPE_COUNT] = [
        TypeTag::Normal,
        TypeTag::Fire,
        TypeTag::Water,
        TypeTag::Electric,
        TypeTag::Grass,
        TypeTag::Ice,
        TypeTag::Fighting,
        TypeTag::Poison,
        TypeTag::Ground,
        TypeTag::Flying,
        TypeTag::Psychic,
        TypeTag::Bug,
        TypeTag::Rock,
        TypeTag::Ghost,
        TypeTag::Dragon,
        TypeTag::Dark,
        TypeTag::Steel,
        TypeTag::Fairy,
    ];

    /// Dense 0-based index for table lookups.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}
