use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::engine::{Cell, CellChange, CellProperty};

/// Sheet-level observer. Republished notifications carry the originating
/// cell and are always tagged [`CellProperty::Value`].
pub type SheetObserver = Box<dyn FnMut(&Cell, CellProperty)>;

/// Cell changes awaiting the sheet's handler. Shared between the sheet and
/// the per-cell observers it registers at construction.
pub(crate) type PendingChanges = Rc<RefCell<VecDeque<CellChange>>>;

/// A fixed-size grid of cells with synchronous change propagation.
///
/// Every cell is allocated at construction and lives for the sheet's whole
/// lifetime; storage is a flat row-major arena with the sheet as sole owner.
/// Single-threaded by design: every mutation and its cascading notifications
/// run to completion on the caller's thread before the call returns.
pub struct Sheet {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<Cell>,
    pub(crate) pending: PendingChanges,
    pub(crate) subscribers: Vec<SheetObserver>,
}

impl Sheet {
    /// Create a sheet of `rows x cols` cells, each starting with empty text
    /// and value and wired into the sheet's change handler.
    pub fn new(rows: usize, cols: usize) -> Sheet {
        let pending: PendingChanges = Rc::new(RefCell::new(VecDeque::new()));

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let mut cell = Cell::new(row, col);
                let queue = Rc::clone(&pending);
                cell.subscribe(move |cell, property| {
                    queue.borrow_mut().push_back(CellChange {
                        row: cell.row(),
                        col: cell.col(),
                        property,
                    });
                });
                cells.push(cell);
            }
        }

        Sheet {
            rows,
            cols,
            cells,
            pending,
            subscribers: Vec::new(),
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Attach an external subscriber to the sheet's value-changed stream.
    /// UI or persistence layers use this to learn when to re-render/re-save.
    pub fn subscribe(&mut self, observer: impl FnMut(&Cell, CellProperty) + 'static) {
        self.subscribers.push(Box::new(observer));
    }
}
