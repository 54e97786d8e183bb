use serde::{Deserialize, Serialize};

/// What the encoder does with a symbol that has no code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedSymbol {
    /// Drop the symbol; it contributes no bits.
    #[default]
    Skip,
    /// Fail with [`Error::UnmappedSymbol`](crate::Error::UnmappedSymbol).
    Error,
}

/// What the decoder does when the bits run out in the middle of a code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncatedCode {
    /// Drop the unfinished code.
    #[default]
    Discard,
    /// Fail with [`Error::TruncatedCode`](crate::Error::TruncatedCode).
    Error,
}

/// Policies for input the code cannot represent.
///
/// The default is lenient on both counts. Missing fields of a deserialized
/// value take their default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub on_unmapped_symbol: UnmappedSymbol,
    pub on_truncated_code: TruncatedCode,
}

impl Options {
    /// Rejects both unmapped symbols and truncated codes.
    pub fn strict() -> Self {
        Self {
            on_unmapped_symbol: UnmappedSymbol::Error,
            on_truncated_code: TruncatedCode::Error,
        }
    }

    pub fn on_unmapped_symbol(self, policy: UnmappedSymbol) -> Self {
        Self {
            on_unmapped_symbol: policy,
            ..self
        }
    }

    pub fn on_truncated_code(self, policy: TruncatedCode) -> Self {
        Self {
            on_truncated_code: policy,
            ..self
        }
    }
}
