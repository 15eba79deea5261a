//! Error type shared by every fallible quantity operation.

use alloc::string::String;
use thiserror::Error;

/// Result type for measurand operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors raised by quantity arithmetic, cross-dimension formulas and parsing.
///
/// Every error is returned to the direct caller; nothing is retried or logged by the arithmetic itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A quantity was divided by a scalar (or ratio) of exactly zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A physical precondition of a cross-dimension formula was violated.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// A unit symbol does not belong to the expected dimension.
    #[error("unknown {dimension} unit '{symbol}'")]
    UnknownUnit {
        /// Name of the dimension that was searched.
        dimension: &'static str,
        /// The unrecognized symbol.
        symbol: String,
    },

    /// Text could not be read as `<number> <symbol>`.
    #[error("invalid quantity '{0}'")]
    InvalidQuantity(String),
}
