//! The cell entity and its change notifications.
//!
//! A [`Cell`] holds raw input text and the display value derived from it.
//! Writing either attribute through its setter notifies every registered
//! observer synchronously before the setter returns; writing the current
//! value back is a silent no-op and notifies nobody.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which cell attribute changed.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum CellProperty {
    Text,
    Value,
}

/// A change record: which cell, which attribute.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    pub property: CellProperty,
}

/// Observer callback invoked synchronously after a cell attribute changes.
pub type CellObserver = Box<dyn FnMut(&Cell, CellProperty)>;

/// A single addressable cell. Coordinates are fixed at construction; text
/// and value start empty and are mutated in place for the cell's lifetime.
pub struct Cell {
    row: usize,
    col: usize,
    text: String,
    value: String,
    observers: Vec<CellObserver>,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            text: String::new(),
            value: String::new(),
            observers: Vec::new(),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Register an observer. Observers run in registration order, on the
    /// caller's thread, as a direct nested call from the setter.
    pub fn subscribe(&mut self, observer: impl FnMut(&Cell, CellProperty) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Update the raw text, notifying observers with [`CellProperty::Text`]
    /// when it actually changes.
    pub fn set_text(&mut self, text: &str) {
        if text == self.text {
            return;
        }
        self.text = text.to_string();
        self.emit(CellProperty::Text);
    }

    /// Update the display value, notifying observers with
    /// [`CellProperty::Value`] when it actually changes. Only the owning
    /// sheet writes values; everything else reads them.
    pub(crate) fn set_value(&mut self, value: &str) {
        if value == self.value {
            return;
        }
        self.value = value.to_string();
        self.emit(CellProperty::Value);
    }

    fn emit(&mut self, property: CellProperty) {
        // Observers receive `&self`, so the list is parked during delivery.
        let mut observers = std::mem::take(&mut self.observers);
        for observer in observers.iter_mut() {
            observer(self, property);
        }
        self.observers = observers;
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cell")
            .field("row", &self.row)
            .field("col", &self.col)
            .field("text", &self.text)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, CellProperty};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_cell() -> (Cell, Rc<RefCell<Vec<CellProperty>>>) {
        let mut cell = Cell::new(3, 4);
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        cell.subscribe(move |_, property| sink.borrow_mut().push(property));
        (cell, log)
    }

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new(3, 4);
        assert_eq!(cell.row(), 3);
        assert_eq!(cell.col(), 4);
        assert_eq!(cell.text(), "");
        assert_eq!(cell.value(), "");
    }

    #[test]
    fn test_set_text_notifies_once() {
        let (mut cell, log) = recording_cell();
        cell.set_text("hi");
        assert_eq!(cell.text(), "hi");
        assert_eq!(*log.borrow(), vec![CellProperty::Text]);
    }

    #[test]
    fn test_repeated_text_is_a_no_op() {
        let (mut cell, log) = recording_cell();
        cell.set_text("hi");
        cell.set_text("hi");
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_set_value_notifies_with_value_tag() {
        let (mut cell, log) = recording_cell();
        cell.set_value("42");
        cell.set_value("42");
        assert_eq!(cell.value(), "42");
        assert_eq!(*log.borrow(), vec![CellProperty::Value]);
    }

    #[test]
    fn test_observers_run_in_registration_order() {
        let mut cell = Cell::new(0, 0);
        let order = Rc::new(RefCell::new(Vec::new()));
        for id in 0..3 {
            let sink = Rc::clone(&order);
            cell.subscribe(move |_, _| sink.borrow_mut().push(id));
        }
        cell.set_text("go");
        assert_eq!(*order.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_observer_sees_updated_state() {
        let mut cell = Cell::new(0, 0);
        let seen = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&seen);
        cell.subscribe(move |cell, _| *sink.borrow_mut() = cell.text().to_string());
        cell.set_text("committed");
        assert_eq!(*seen.borrow(), "committed");
    }
}
