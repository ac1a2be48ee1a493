//! Dice simulation.

use rand::Rng;

use crate::error::{Error, Result};

/// Number of faces on a standard die
pub const DEFAULT_SIDES: u32 = 6;

/// Outcome of rolling a handful of dice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiceRoll {
    /// Sum of all faces
    pub total: u64,
    /// Individual faces, in the order they were rolled
    pub rolls: Vec<u32>,
}

impl DiceRoll {
    /// Number of dice in this roll
    pub fn count(&self) -> usize {
        self.rolls.len()
    }
}

/// Roll `count` dice with `sides` faces each using the given RNG.
///
/// Returns `Error::InvalidDice` if either argument is zero; no randomness
/// is consumed in that case.
pub fn roll_dice_with<R: Rng + ?Sized>(rng: &mut R, count: u32, sides: u32) -> Result<DiceRoll> {
    if count == 0 || sides == 0 {
        return Err(Error::InvalidDice { count, sides });
    }

    let rolls: Vec<u32> = (0..count).map(|_| rng.random_range(1..=sides)).collect();
    let total = rolls.iter().map(|&r| u64::from(r)).sum();

    Ok(DiceRoll { total, rolls })
}

/// Highest total `count` dice with `sides` faces can produce
pub fn max_total(count: u32, sides: u32) -> u64 {
    u64::from(count) * u64::from(sides)
}
