//! Fun commands backed by a random number generator.

use rand::Rng;

pub const DICE_SIDES: u8 = 6;

/// Rolls a six-sided die.
pub fn roll_dice(rng: &mut impl Rng) -> u8 {
    rng.random_range(1..=DICE_SIDES)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinSide {
    Heads,
    Tails,
}

impl CoinSide {
    pub fn label(self) -> &'static str {
        match self {
            Self::Heads => "HEADS",
            Self::Tails => "TAILS",
        }
    }
}

pub fn flip_coin(rng: &mut impl Rng) -> CoinSide {
    if rng.random_bool(0.5) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    }
}
