use std::backtrace::Backtrace;

use crate::puzzle::piece::PieceId;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Domain errors: fatal puzzle-construction problems and usage-contract
/// violations. A search that drains without finding a solution is not an
/// error; it is an ordinary `Ok` outcome.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("a puzzle needs at least one piece")]
    NoPieces,
    #[error("expected exactly two symbol side labels across the piece set, found {0}")]
    SideCount(usize),
    #[error("piece id {0} appears more than once")]
    DuplicatePiece(PieceId),
    #[error("piece {id} has {directions} directions but {symbols} symbols")]
    PieceArity {
        id: PieceId,
        directions: usize,
        symbols: usize,
    },
    #[error("malformed symbol descriptor {0:?}, expected \"kind/side\"")]
    MalformedSymbol(String),
    #[error("cannot extend a board that holds unvalidated assignments")]
    ExtendUnvalidated,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<PuzzleError>,
        backtrace: Box<Backtrace>,
    },
}

impl Error {
    /// The wrapped domain error.
    pub fn puzzle_error(&self) -> &PuzzleError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}

impl From<PuzzleError> for Error {
    fn from(inner: PuzzleError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}
