use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

use itertools::Itertools;

pub const EXAMPLE_INPUT: &str = include_str!("../data/test_input");
pub const EXAMPLE_ACCESSIBLE: usize = 13;
pub const EXAMPLE_TOTAL_REMOVED: usize = 43;

const ROLL: char = '@';
const EMPTY: char = '.';

/// A roll can be reached by a forklift when fewer than this many of its
/// neighbours are rolls.
pub const ACCESSIBLE_BELOW: usize = 4;

pub static NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rolls of paper on the floor, stored as the set of occupied columns of each
/// row. Rows without any roll are not stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rolls {
    rows: BTreeMap<usize, BTreeSet<usize>>,
    width: usize,
    height: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Removal {
    pub rounds: usize,
    pub removed: usize,
}

impl fmt::Display for Rolls {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        if self.contains(row, col) {
                            ROLL
                        } else {
                            EMPTY
                        }
                    })
                    .collect::<String>()
            })
            .join("\n");

        write!(f, "{rendered}")
    }
}

impl Rolls {
    /// Blank lines are skipped and don't take up a row. The first non-blank
    /// line decides the width; anything past it on a longer line is dropped.
    pub fn parse<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = BTreeMap::new();
        let mut width = 0;
        let mut height = 0;

        for line in lines {
            let line = line.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            let len = line.chars().count();
            if height == 0 {
                width = len;
            } else if len > width {
                log::warn!("row {height} is {len} wide, ignoring columns past {width}");
            }

            let cols = line
                .chars()
                .enumerate()
                .filter_map(|(col, c)| (c == ROLL && col < width).then_some(col))
                .collect::<BTreeSet<_>>();

            if !cols.is_empty() {
                rows.insert(height, cols);
            }
            height += 1;
        }

        log::debug!("parsed {height} rows of width {width}");

        Self {
            rows,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn contains(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(&row)
            .map_or(false, |cols| cols.contains(&col))
    }

    /// Anything outside the grid counts as empty floor.
    pub fn is_occupied(&self, row: isize, col: isize) -> bool {
        let (Ok(row), Ok(col)) = (usize::try_from(row), usize::try_from(col)) else {
            return false;
        };

        row < self.height && col < self.width && self.contains(row, col)
    }

    pub fn count_occupied_neighbours(&self, row: usize, col: usize) -> usize {
        let (row, col) = (row as isize, col as isize);

        NEIGHBOUR_OFFSETS
            .iter()
            .filter(|(dr, dc)| self.is_occupied(row + dr, col + dc))
            .count()
    }

    pub fn is_accessible(&self, row: usize, col: usize) -> bool {
        self.count_occupied_neighbours(row, col) < ACCESSIBLE_BELOW
    }

    /// Every occupied cell as `(row, col)`, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .flat_map(|(&row, cols)| cols.iter().map(move |&col| (row, col)))
    }

    pub fn occupied_count(&self) -> usize {
        self.rows.values().map(BTreeSet::len).sum()
    }

    pub fn accessible_cells(&self) -> Vec<(usize, usize)> {
        self.cells()
            .filter(|&(row, col)| self.is_accessible(row, col))
            .collect()
    }

    pub fn count_accessible(&self) -> usize {
        self.cells()
            .filter(|&(row, col)| self.is_accessible(row, col))
            .count()
    }

    /// Removes every roll that is accessible right now, all at once, and
    /// returns how many went. Returns 0 once nothing is left to remove.
    pub fn remove_round(&mut self) -> usize {
        let batch = self.accessible_cells();

        for &(row, col) in &batch {
            if let Some(cols) = self.rows.get_mut(&row) {
                cols.remove(&col);
                if cols.is_empty() {
                    self.rows.remove(&row);
                }
            }
        }

        batch.len()
    }

    pub fn remove_until_stable(&mut self) -> Removal {
        let mut removal = Removal::default();

        loop {
            let removed = self.remove_round();
            if removed == 0 {
                break;
            }

            removal.rounds += 1;
            removal.removed += removed;

            log::debug!(
                "round {}: removed {removed}, {} rolls left",
                removal.rounds,
                self.occupied_count()
            );
        }

        removal
    }
}

pub fn count_accessible<I, S>(input: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Rolls::parse(input).count_accessible()
}

pub fn total_removed<I, S>(input: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Rolls::parse(input).remove_until_stable().removed
}

/// Both answers for one input, each computed from its own parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub accessible: usize,
    pub total_removed: usize,
}

impl Report {
    pub const EXAMPLE: Report = Report {
        accessible: EXAMPLE_ACCESSIBLE,
        total_removed: EXAMPLE_TOTAL_REMOVED,
    };

    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        Self {
            accessible: count_accessible(lines),
            total_removed: total_removed(lines),
        }
    }

    pub fn render(&self, label: &str) -> String {
        format!(
            "{label} accessible: {}\n{label} total removed: {}",
            self.accessible, self.total_removed
        )
    }
}
