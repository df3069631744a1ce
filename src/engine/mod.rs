//! Cell engine API.
//!
//! This module provides the data types underneath the sheet:
//!
//! - [`Cell`], [`CellProperty`], [`CellChange`] - the cell entity and its
//!   change notifications
//! - [`CellRef`] - single-cell reference parsing (`B3` ↔ row/col indices)

mod cell;
mod cell_ref;

pub use cell::{Cell, CellChange, CellObserver, CellProperty};
pub use cell_ref::CellRef;
