use crate::error::{InputFormatError, InvalidSlopeError, RowError};
use crate::slope::Slope;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Tree,
}

impl Cell {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Cell::Open),
            '#' => Some(Cell::Tree),
            _ => None,
        }
    }

    fn as_char(&self) -> char {
        match *self {
            Cell::Open => '.',
            Cell::Tree => '#',
        }
    }
}

/// One line of the map, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row(Vec<Cell>);

impl Row {
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Row {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(column, found)| {
                Cell::from_char(found).ok_or(RowError::UnknownCell { column, found })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Row)
    }
}

/// The slope as read from the input: non-empty, and every row as wide as the first one. The
/// pattern repeats endlessly to the right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    rows: Vec<Row>,
    width: usize,
}

impl Map {
    /// Validates already parsed rows. Trailing empty rows are dropped, any other row of different
    /// width than the first is an error.
    pub fn from_rows(mut rows: Vec<Row>) -> Result<Self, InputFormatError> {
        while rows.last().map(Row::is_empty).unwrap_or(false) {
            rows.pop();
        }

        let width = match rows.first() {
            Some(first) if first.is_empty() => return Err(InputFormatError::EmptyRow { row: 0 }),
            Some(first) => first.len(),
            None => return Err(InputFormatError::Empty),
        };

        if let Some((row, found)) = rows
            .iter()
            .map(Row::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(InputFormatError::Ragged {
                row,
                expected: width,
                found,
            });
        }

        tracing::debug!(width, height = rows.len(), "map loaded");

        Ok(Map { rows, width })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the cell with `column` wrapped around the width, or `None` past the bottom.
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        self.rows
            .get(row)
            .map(|r| r.cells()[column % self.width])
    }

    /// Counts the trees hit going from the top left corner down to the bottom.
    pub fn trees_along(&self, slope: Slope) -> usize {
        let right = slope.right() % self.width;

        let trees = self
            .rows
            .iter()
            .step_by(slope.down())
            .scan(0, |column, row| {
                let cell = row.cells()[*column];
                *column = (*column + right) % self.width;
                Some(cell)
            })
            .filter(|&cell| cell == Cell::Tree)
            .count();

        tracing::debug!(%slope, trees, "walked");

        trees
    }
}

impl FromStr for Map {
    type Err = InputFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .trim_end()
            .lines()
            .enumerate()
            .map(|(row, line)| line.trim_end().parse::<Row>().map_err(|e| e.at(row)))
            .collect::<Result<Vec<_>, _>>()?;

        Map::from_rows(rows)
    }
}

impl fmt::Display for Map {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for cell in row.cells() {
                write!(fmt, "{}", cell.as_char())?;
            }
            writeln!(fmt)?;
        }
        Ok(())
    }
}

/// Counts the trees on the way down with `right` and `down` steps.
pub fn walk(map: &Map, right: usize, down: usize) -> Result<usize, InvalidSlopeError> {
    Slope::new(right, down).map(|slope| map.trees_along(slope))
}
