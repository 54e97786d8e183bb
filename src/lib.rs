//! Huffman coding over any alphabet of hashable symbols.
//!
//! ```
//! use huffman::Options;
//!
//! let text = "abracadabra";
//! let code = huffman::build_code(text.chars())?;
//!
//! let bits = huffman::encode(text.chars(), code.table(), Options::default())?;
//! let decoded = huffman::decode(&bits.to_string(), code.tree(), Options::default())?;
//!
//! assert_eq!(decoded.into_iter().collect::<String>(), text);
//! # Ok::<(), huffman::Error>(())
//! ```
//!
//! By default the codec is lenient: symbols missing from the table are
//! skipped when encoding and an unfinished code at the end of the bits is
//! dropped when decoding. [`Options`] turns either into an error.

pub mod codec;
pub mod error;
pub mod frequency;
pub mod options;
pub mod report;
pub mod table;
pub mod tree;

use bitvec::slice::BitSlice;
use std::borrow::Borrow;
use std::hash::Hash;

pub use codec::{Decoder, Encoder};
pub use error::{Error, Result};
pub use frequency::{count, FrequencyTable};
pub use options::{Options, TruncatedCode, UnmappedSymbol};
pub use report::{Report, ReportEntry};
pub use table::{Code, CodeTable};
pub use tree::{CodeTree, Node, NodeId};

/// A code built for one input: its symbol counts, tree and table.
///
/// A new input needs a new `Huffman`; nothing here is updated in place.
#[derive(Debug, Clone)]
pub struct Huffman<Symbol> {
    frequencies: FrequencyTable<Symbol>,
    tree: CodeTree<Symbol>,
    table: CodeTable<Symbol>,
}

impl<Symbol> Huffman<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Result<Self> {
        Self::from_frequencies(count(symbols))
    }

    pub fn from_frequencies(frequencies: FrequencyTable<Symbol>) -> Result<Self> {
        let tree = CodeTree::from_frequencies(&frequencies)?;
        let table = CodeTable::from_tree(&tree);
        Ok(Self {
            frequencies,
            tree,
            table,
        })
    }

    pub fn frequencies(&self) -> &FrequencyTable<Symbol> {
        &self.frequencies
    }

    pub fn tree(&self) -> &CodeTree<Symbol> {
        &self.tree
    }

    pub fn table(&self) -> &CodeTable<Symbol> {
        &self.table
    }

    pub fn into_tree_and_table(self) -> (CodeTree<Symbol>, CodeTable<Symbol>) {
        (self.tree, self.table)
    }

    pub fn encoder(&self, options: Options) -> Encoder<'_, Symbol> {
        Encoder::new(&self.table, options)
    }

    pub fn decoder(&self, options: Options) -> Decoder<'_, Symbol> {
        Decoder::new(&self.tree, options)
    }

    /// Encodes `symbols` and summarizes the result. `bits_per_symbol` gives
    /// the uncoded size of each symbol.
    pub fn report(
        &self,
        symbols: &[Symbol],
        bits_per_symbol: impl Fn(&Symbol) -> u64,
        options: Options,
    ) -> Result<Report<Symbol>> {
        let encoded = self.encoder(options).encode(symbols)?;
        let codes = self
            .table
            .iter()
            .map(|(symbol, code)| ReportEntry {
                symbol: symbol.clone(),
                count: self.frequencies.get(symbol).unwrap_or(0),
                code: code.clone(),
            })
            .collect();
        let original_bits = symbols.iter().map(bits_per_symbol).sum();

        Ok(Report {
            encoded,
            codes,
            original_bits,
        })
    }
}

/// Counts `symbols`, builds their code tree and derives the code table.
pub fn build_code<Symbol>(symbols: impl IntoIterator<Item = Symbol>) -> Result<Huffman<Symbol>>
where
    Symbol: Eq + Hash + Clone,
{
    Huffman::from_symbols(symbols)
}

/// Like [`build_code`], keeping only the table.
pub fn build_code_table<Symbol>(
    symbols: impl IntoIterator<Item = Symbol>,
) -> Result<CodeTable<Symbol>>
where
    Symbol: Eq + Hash + Clone,
{
    build_code(symbols).map(|h| h.into_tree_and_table().1)
}

pub fn encode<Symbol, I>(symbols: I, table: &CodeTable<Symbol>, options: Options) -> Result<Code>
where
    Symbol: Eq + Hash + Clone,
    I: IntoIterator,
    I::Item: Borrow<Symbol>,
{
    Encoder::new(table, options).encode(symbols)
}

pub fn decode<Symbol: Clone>(
    bits: &str,
    tree: &CodeTree<Symbol>,
    options: Options,
) -> Result<Vec<Symbol>> {
    Decoder::new(tree, options).decode(bits)
}

pub fn decode_bits<Symbol: Clone>(
    bits: &BitSlice,
    tree: &CodeTree<Symbol>,
    options: Options,
) -> Result<Vec<Symbol>> {
    Decoder::new(tree, options).decode_bits(bits)
}
