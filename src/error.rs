//! Error types for gridwire.

use thiserror::Error;

use crate::engine::CellRef;

/// Errors that can occur during sheet operations.
#[derive(Error, Debug)]
pub enum GridwireError {
    #[error("cell ({row}, {col}) is outside the sheet")]
    CellOutOfRange { row: usize, col: usize },

    #[error("invalid formula reference: {token:?}")]
    InvalidFormula { token: String },

    #[error("formula references {reference}, which is outside the sheet")]
    DanglingReference { reference: CellRef },
}

pub type Result<T> = std::result::Result<T, GridwireError>;
