use thiserror::Error;

pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while turning raw text into a graph or a list of numbers.
///
/// The `Display` output is meant to be shown to a user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unrecognized structure: could not parse a JSON array from the input ({0})")]
    InvalidJson(String),

    #[error(
        "Unrecognized array structure: expected an edge list like [[u, v, w?], ...] \
         or an adjacency list like [[neighbors of 0], [neighbors of 1], ...]"
    )]
    UnsupportedShape,

    #[error("Unrecognized structure: expected an array, or an object with an \"edges\" or \"graph\" array")]
    NoArrayProperty,

    #[error("Invalid number: \"{0}\"")]
    InvalidToken(String),

    #[error("Unknown input mode: {0} (expected \"text\" or \"array\")")]
    UnknownInputMode(String),
}
