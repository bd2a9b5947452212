use std::io;

use thiserror::Error;

/// Shorthand for a result with a [`ShamrockError`] error variant.
pub type ShamrockResult<T> = Result<T, ShamrockError>;

/// All the errors that can happen when building or searching a rainbow table.
#[derive(Error, Debug)]
pub enum ShamrockError {
    #[error("The alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("The alphabet can only contain ASCII symbols")]
    NonAsciiAlphabet,

    #[error("The alphabet contains the symbol '{0}' several times")]
    DuplicateSymbol(char),

    #[error("The maximum word length must be 1 or more but {0} was provided")]
    InvalidMaxLength(usize),

    #[error("Unable to access the file at the given path. Make sure the right permissions are available")]
    Io(#[from] io::Error),

    #[error("A SQLite-related error occured")]
    Store(#[from] rusqlite::Error),
}
