//! Single-cell reference parsing and formatting.
//!
//! Formulas carry exactly one reference of the shape `<ColumnLetter><Row>`
//! (e.g. `B3`): one leading letter, then a 1-based row number. Multi-letter
//! columns, ranges and arithmetic are out of scope.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reference to a cell by row and column indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

impl CellRef {
    pub fn new(row: usize, col: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse the reference token that follows `=` in a formula.
    ///
    /// The column index is the letter's code point minus `'A'`, so a
    /// lowercase letter parses to an index past `Z` and it is the sheet
    /// lookup that rejects it. Returns `None` for anything that is not one
    /// letter followed by a positive integer.
    pub fn parse_reference(token: &str) -> Option<CellRef> {
        let re = Regex::new(r"^(?<letter>[A-Za-z])(?<number>[0-9]+)$").unwrap();
        let caps = re.captures(token)?;

        let letter = caps["letter"].bytes().next()?;
        let col = (letter - b'A') as usize;

        let row = caps["number"].parse::<usize>().ok()?.checked_sub(1)?;

        Some(CellRef::new(row, col))
    }

    /// Convert a column index to spreadsheet-style letters (0 -> A, 25 -> Z,
    /// 26 -> AA). Only used for display; parsing accepts a single letter.
    pub fn col_to_letters(col: usize) -> String {
        let mut result = String::new();
        let mut n = col as u128 + 1;
        while n > 0 {
            n -= 1;
            result.insert(0, (b'A' + (n % 26) as u8) as char);
            n /= 26;
        }
        result
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letters(self.col), self.row + 1)
    }
}
