//! Word-search grids and the 8-direction scanner.
//!
//! A [`Grid`] is a rectangle of uppercase letters. [`find_word`] visits
//! starting cells in row-major order and, at each cell whose letter matches
//! the word's first letter, tries the directions of [`Direction::ALL`] in
//! order; the first walk that stays inside the grid and spells the word wins.
//! Not finding a word is a normal outcome, reported as `None`.

use crate::errors::ParseError;
use crate::word_char::WordChar;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// One of the eight compass directions a word can run in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    #[serde(rename = "Down-Right")]
    DownRight,
    #[serde(rename = "Down-Left")]
    DownLeft,
    #[serde(rename = "Up-Right")]
    UpRight,
    #[serde(rename = "Up-Left")]
    UpLeft,
}

impl Direction {
    /// Every direction, in scan priority order.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Direction::Right => "Right",
            Direction::Left => "Left",
            Direction::Down => "Down",
            Direction::Up => "Up",
            Direction::DownRight => "Down-Right",
            Direction::DownLeft => "Down-Left",
            Direction::UpRight => "Up-Right",
            Direction::UpLeft => "Up-Left",
        }
    }

    /// `(row, col)` step.
    #[must_use]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Direction {
    type Err = Box<ParseError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Box::new(ParseError::InvalidDirection { input: s.to_string() }))
    }
}

/// Where a word was found. Rows and columns are 1-indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub word: String,
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
    pub direction: Direction,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}: Row {}, Col {} → {}",
            self.word, self.start_row, self.start_col, self.direction
        )
    }
}

/// A searched word and, if it was found, its placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSearchOutcome {
    pub word: String,
    pub placement: Option<Placement>,
}

/// A rectangular grid of uppercase letters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from row strings.
    ///
    /// Each row is trimmed, stripped of internal whitespace and uppercased;
    /// rows left empty are dropped.
    ///
    /// # Errors
    /// `InvalidGridChar` for a cell outside A-Z, `RaggedGrid` if a row's
    /// length differs from the first row's.
    pub fn from_rows<I, S>(rows: I) -> Result<Grid, Box<ParseError>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells: Vec<Vec<char>> = Vec::new();
        for raw in rows {
            let row: Vec<char> = raw
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_uppercase)
                .collect();
            if row.is_empty() {
                continue;
            }

            let row_no = cells.len() + 1;
            if let Some((col, &invalid_char)) = row.iter().enumerate().find(|(_, c)| !c.is_grid_cell()) {
                return Err(Box::new(ParseError::InvalidGridChar { row: row_no, col: col + 1, invalid_char }));
            }
            if let Some(first) = cells.first()
                && first.len() != row.len()
            {
                return Err(Box::new(ParseError::RaggedGrid {
                    row: row_no,
                    expected: first.len(),
                    found: row.len(),
                }));
            }
            cells.push(row);
        }
        Ok(Grid { cells })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at 0-indexed `(row, col)`, if in bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Cell reached from `(row, col)` after `steps` moves along `dir`.
    fn step(&self, row: usize, col: usize, dir: Direction, steps: usize) -> Option<char> {
        let (dr, dc) = dir.delta();
        let steps = isize::try_from(steps).ok()?;
        let r = row.checked_add_signed(dr.checked_mul(steps)?)?;
        let c = col.checked_add_signed(dc.checked_mul(steps)?)?;
        self.get(r, c)
    }

    fn spells(&self, word: &[char], row: usize, col: usize, dir: Direction) -> bool {
        word.iter()
            .enumerate()
            .all(|(i, &expected)| self.step(row, col, dir, i) == Some(expected))
    }
}

impl FromStr for Grid {
    type Err = Box<ParseError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::from_rows(s.lines())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.cells {
            writeln!(f, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}

/// First placement of `word` in `grid`, or `None`.
#[must_use]
pub fn find_word(grid: &Grid, word: &str) -> Option<Placement> {
    let word = word.trim().to_uppercase();
    let letters: Vec<char> = word.chars().collect();
    let &first = letters.first()?;
    let len = letters.len();

    for (r, row) in grid.cells.iter().enumerate() {
        for (c, &cell) in row.iter().enumerate() {
            if cell != first {
                continue;
            }
            for dir in Direction::ALL {
                if grid.spells(&letters, r, c, dir) {
                    let (dr, dc) = dir.delta();
                    let last = (len - 1).cast_signed();
                    return Some(Placement {
                        word,
                        start_row: r + 1,
                        start_col: c + 1,
                        end_row: (r + 1).saturating_add_signed(last * dr),
                        end_col: (c + 1).saturating_add_signed(last * dc),
                        direction: dir,
                    });
                }
            }
        }
    }
    None
}

/// Search for every word, keeping input order. Blank words are skipped.
#[must_use]
pub fn find_words<S: AsRef<str>>(grid: &Grid, words: &[S]) -> Vec<WordSearchOutcome> {
    words
        .iter()
        .map(|w| w.as_ref().trim().to_uppercase())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let placement = find_word(grid, &word);
            log::debug!("word search '{word}': {}", if placement.is_some() { "found" } else { "not found" });
            WordSearchOutcome { word, placement }
        })
        .collect()
}

/// Only the placements that were found, in input order.
#[must_use]
pub fn found_placements(outcomes: &[WordSearchOutcome]) -> Vec<&Placement> {
    outcomes.iter().filter_map(|o| o.placement.as_ref()).collect()
}
