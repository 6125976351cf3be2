//! Counting the trees on the way down a toboggan slope which repeats endlessly to the right.

pub mod error;
pub mod io;
pub mod map;
pub mod out;
pub mod slope;

pub use error::{InputFormatError, InvalidSlopeError, RowError};
pub use map::{walk, Cell, Map, Row};
pub use slope::Slope;

use itertools::Itertools;

pub const PART_ONE_SLOPE: Slope = Slope::new_unchecked(3, 1);

pub const PART_TWO_SLOPES: [Slope; 5] = [
    Slope::new_unchecked(1, 1),
    Slope::new_unchecked(3, 1),
    Slope::new_unchecked(5, 1),
    Slope::new_unchecked(7, 1),
    Slope::new_unchecked(1, 2),
];

pub fn part_one(map: &Map) -> usize {
    map.trees_along(PART_ONE_SLOPE)
}

/// Product of the trees met on each of [`PART_TWO_SLOPES`].
pub fn part_two(map: &Map) -> u64 {
    let counts = PART_TWO_SLOPES
        .iter()
        .map(|&slope| map.trees_along(slope) as u64)
        .collect::<Vec<_>>();

    tracing::debug!(counts = %counts.iter().join(" * "), "part two");

    counts.iter().fold(1, |acc, &next| acc * next)
}
