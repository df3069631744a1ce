//! The sheet: fixed-size cell ownership plus change propagation.

mod ops;
mod state;

pub use state::{Sheet, SheetObserver};
