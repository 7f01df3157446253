//! Error types for collection operations.
//!
//! Every fallible operation on [`Collection`](crate::Collection) reports one of
//! these variants and leaves the collection untouched.

use crate::String;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index fell outside the bounds valid for the operation.
    #[error("index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The operation needs at least one element.
    #[error("collection is empty")]
    EmptyCollection,

    /// A size or count argument cannot be satisfied by the current elements.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
