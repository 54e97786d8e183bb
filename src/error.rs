/// Errors produced while building a code or running it over input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Tree construction was given zero symbol/frequency pairs.
    #[error("cannot build a code tree from an empty alphabet")]
    EmptyAlphabet,

    /// A code lookup for a symbol that is not in the tree.
    #[error("no code for symbol")]
    NotFound,

    /// Encoding hit a symbol without a code while configured to reject it.
    #[error("no code for symbol at position {position}")]
    UnmappedSymbol { position: usize },

    /// A bit string contained something other than '0' or '1'.
    #[error("malformed input: {found:?} at position {position} is not a bit")]
    MalformedInput { position: usize, found: char },

    /// The bit string ended in the middle of a code while configured to
    /// reject it. `position` is where the unfinished code started.
    #[error("bit string ends inside a code starting at position {position}")]
    TruncatedCode { position: usize },

    /// A tree made of a single leaf has nothing to branch on, so bits
    /// cannot be mapped back to symbols.
    #[error("cannot decode bits with a single-leaf code tree")]
    SingleLeafTree,

    /// A deserialized tree does not describe a full binary tree.
    #[error("invalid code tree: {0}")]
    InvalidTree(String),
}

pub type Result<T> = std::result::Result<T, Error>;
