use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::options::Options;
use crate::table::Code;
use crate::Huffman;

/// One row of a report's code table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry<Symbol> {
    pub symbol: Symbol,
    pub count: u64,
    pub code: Code,
}

/// The outcome of coding one input: the encoded bits, the code table with
/// symbol counts, and enough sizes to judge the compression.
///
/// `Display` renders a plain-text report; `Serialize` suits any serde
/// format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report<Symbol> {
    pub encoded: Code,
    pub codes: Vec<ReportEntry<Symbol>>,
    /// Size of the input before coding, in bits.
    pub original_bits: u64,
}

impl<Symbol> Report<Symbol> {
    pub fn encoded_bits(&self) -> u64 {
        self.encoded.len() as u64
    }

    pub fn symbol_count(&self) -> u64 {
        self.codes
            .iter()
            .fold(0u64, |acc, e| acc.saturating_add(e.count))
    }

    /// Mean code length weighted by symbol counts, or `None` for an input
    /// with no counted symbols.
    pub fn average_code_length(&self) -> Option<f64> {
        let total = self.symbol_count();
        if total == 0 {
            return None;
        }
        let weighted = self.codes.iter().fold(0u64, |acc, e| {
            acc.saturating_add(e.count.saturating_mul(e.code.len() as u64))
        });
        Some(weighted as f64 / total as f64)
    }

    /// Encoded size over original size.
    pub fn compression_ratio(&self) -> Option<f64> {
        if self.original_bits == 0 {
            return None;
        }
        Some(self.encoded_bits() as f64 / self.original_bits as f64)
    }
}

impl Report<char> {
    /// Codes `text` on its own character frequencies. The original size
    /// counts the UTF-8 bytes of the text.
    pub fn for_text(text: &str, options: Options) -> Result<Self> {
        let chars: Vec<char> = text.chars().collect();
        Huffman::from_symbols(chars.iter().copied())?.report(
            &chars,
            |c| c.len_utf8() as u64 * 8,
            options,
        )
    }
}

impl<Symbol: fmt::Debug> fmt::Display for Report<Symbol> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Encoded text: {}", self.encoded)?;
        writeln!(
            f,
            "Encoded length: {} bits (original {} bits)",
            self.encoded_bits(),
            self.original_bits
        )?;
        writeln!(f, "Encoding codes:")?;
        for e in &self.codes {
            writeln!(f, "  {:?}\t{}\t({})", e.symbol, e.code, e.count)?;
        }
        Ok(())
    }
}
