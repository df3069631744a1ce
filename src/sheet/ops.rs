use super::state::Sheet;
use crate::engine::{Cell, CellProperty, CellRef};
use crate::error::{GridwireError, Result};

impl Sheet {
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }

    /// Look up the cell at a position, read-only.
    ///
    /// The bound comparison is deliberately lenient: `row == rows` and
    /// `col == cols` pass it, and it is the checked arena index that turns
    /// that inclusive edge into a miss.
    pub fn get_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        if row > self.rows || col > self.cols {
            return None;
        }
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Set a cell's raw text and propagate.
    ///
    /// Literal text is copied to the cell's value verbatim. Text starting
    /// with `=` is resolved as a one-hop reference: the referenced cell's
    /// current value is copied over, once, with no live link (later changes
    /// to the referenced cell leave the copy stale). Each effective text
    /// change republishes exactly one value-changed notification to sheet
    /// subscribers; writing the current text back is a silent no-op.
    ///
    /// A malformed or dangling formula leaves the text committed, the value
    /// untouched, and no notification fires.
    pub fn set_text(&mut self, row: usize, col: usize, text: &str) -> Result<()> {
        let idx = self
            .index(row, col)
            .ok_or(GridwireError::CellOutOfRange { row, col })?;
        self.cells[idx].set_text(text);
        self.pump()
    }

    /// Drain the pending change queue. `Text` changes run resolution and are
    /// republished; `Value` entries are the echo of the sheet's own value
    /// writes and need no further handling.
    fn pump(&mut self) -> Result<()> {
        loop {
            let change = self.pending.borrow_mut().pop_front();
            let Some(change) = change else {
                break;
            };
            match change.property {
                CellProperty::Text => {
                    self.resolve(change.row, change.col)?;
                    self.republish(change.row, change.col);
                }
                CellProperty::Value => {}
            }
        }
        Ok(())
    }

    /// Derive a cell's display value from its current text.
    fn resolve(&mut self, row: usize, col: usize) -> Result<()> {
        let Some(idx) = self.index(row, col) else {
            return Ok(());
        };
        let text = self.cells[idx].text().to_string();

        let value = match text.strip_prefix('=') {
            Some(token) => {
                let reference =
                    CellRef::parse_reference(token).ok_or_else(|| GridwireError::InvalidFormula {
                        token: token.to_string(),
                    })?;
                let source = self
                    .get_cell(reference.row, reference.col)
                    .ok_or(GridwireError::DanglingReference { reference })?;
                source.value().to_string()
            }
            None => text,
        };

        self.cells[idx].set_value(&value);
        Ok(())
    }

    fn republish(&mut self, row: usize, col: usize) {
        let Some(idx) = self.index(row, col) else {
            return;
        };
        // Subscribers borrow the cell out of the arena, so the list is
        // parked during delivery.
        let mut subscribers = std::mem::take(&mut self.subscribers);
        for subscriber in subscribers.iter_mut() {
            subscriber(&self.cells[idx], CellProperty::Value);
        }
        self.subscribers = subscribers;
    }
}
