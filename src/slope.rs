use crate::error::InvalidSlopeError;
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Step taken on every move: `right` columns (wrapping) and `down` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slope {
    right: usize,
    down: usize,
}

impl Slope {
    pub fn new(right: usize, down: usize) -> Result<Self, InvalidSlopeError> {
        if down == 0 {
            return Err(InvalidSlopeError::ZeroDown);
        }
        Ok(Slope { right, down })
    }

    /// Only for the known good constants of this crate.
    pub(crate) const fn new_unchecked(right: usize, down: usize) -> Self {
        Slope { right, down }
    }

    pub fn right(&self) -> usize {
        self.right
    }

    pub fn down(&self) -> usize {
        self.down
    }
}

impl TryFrom<(i64, i64)> for Slope {
    type Error = InvalidSlopeError;

    fn try_from((right, down): (i64, i64)) -> Result<Self, Self::Error> {
        match (usize::try_from(right), usize::try_from(down)) {
            (Ok(right), Ok(down)) => Slope::new(right, down),
            _ => Err(InvalidSlopeError::Negative(right, down)),
        }
    }
}

impl FromStr for Slope {
    type Err = InvalidSlopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || InvalidSlopeError::Malformed(s.to_owned());

        let mut parts = s.splitn(2, ',');
        let right = parts.next().ok_or_else(malformed)?.trim();
        let down = parts.next().ok_or_else(malformed)?.trim();

        let right = right.parse::<i64>().map_err(|_| malformed())?;
        let down = down.parse::<i64>().map_err(|_| malformed())?;

        Slope::try_from((right, down))
    }
}

impl fmt::Display for Slope {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{},{}", self.right, self.down)
    }
}
