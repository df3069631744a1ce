//! gridwire - change-propagating cell grid core.
//!
//! A [`Sheet`] owns a fixed-size grid of [`Cell`]s. Setting a cell's text
//! derives its display value (a verbatim copy for literals, a one-hop copy
//! for `=B3` style references) and republishes a single value-changed
//! notification to sheet subscribers.

pub mod engine;
pub mod error;
pub mod sheet;

pub use engine::{Cell, CellChange, CellProperty, CellRef};
pub use error::{GridwireError, Result};
pub use sheet::{Sheet, SheetObserver};
