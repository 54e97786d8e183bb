use bitvec::prelude::*;
use log::debug;
use std::borrow::Borrow;
use std::hash::Hash;

use crate::error::{Error, Result};
use crate::options::{Options, TruncatedCode, UnmappedSymbol};
use crate::table::{parse_bit, Code, CodeTable};
use crate::tree::{CodeTree, Node};

/// Turns symbols into bits using a [`CodeTable`].
#[derive(Debug, Clone, Copy)]
pub struct Encoder<'a, Symbol> {
    table: &'a CodeTable<Symbol>,
    options: Options,
}

impl<'a, Symbol> Encoder<'a, Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    pub fn new(table: &'a CodeTable<Symbol>, options: Options) -> Self {
        Self { table, options }
    }

    /// Concatenates the code of every symbol, in order.
    ///
    /// With [`UnmappedSymbol::Skip`] a symbol missing from the table adds
    /// nothing to the output.
    pub fn encode<I>(&self, symbols: I) -> Result<Code>
    where
        I: IntoIterator,
        I::Item: Borrow<Symbol>,
    {
        let mut out = Code::new();
        let mut skipped = 0usize;
        for (position, s) in symbols.into_iter().enumerate() {
            match self.table.get(s.borrow()) {
                Some(code) => out.extend_from_code(code),
                None => match self.options.on_unmapped_symbol {
                    UnmappedSymbol::Skip => skipped += 1,
                    UnmappedSymbol::Error => return Err(Error::UnmappedSymbol { position }),
                },
            }
        }
        if skipped > 0 {
            debug!("skipped {} symbols without a code", skipped);
        }

        Ok(out)
    }
}

/// Turns bits back into symbols by walking a [`CodeTree`].
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a, Symbol> {
    tree: &'a CodeTree<Symbol>,
    options: Options,
}

impl<'a, Symbol> Decoder<'a, Symbol>
where
    Symbol: Clone,
{
    pub fn new(tree: &'a CodeTree<Symbol>, options: Options) -> Self {
        Self { tree, options }
    }

    /// Decodes a string of `'0'` and `'1'` characters. Any other character
    /// stops decoding with [`Error::MalformedInput`].
    pub fn decode(&self, bits: &str) -> Result<Vec<Symbol>> {
        self.walk(bits.chars().enumerate().map(|(i, c)| parse_bit(i, c)))
    }

    pub fn decode_bits(&self, bits: &BitSlice) -> Result<Vec<Symbol>> {
        self.walk(bits.iter().by_vals().map(Ok))
    }

    fn walk(&self, bits: impl Iterator<Item = Result<bool>>) -> Result<Vec<Symbol>> {
        let root = self.tree.root();
        let mut out = Vec::new();
        let mut node = root;
        let mut start = 0;

        for (position, bit) in bits.enumerate() {
            let bit = bit?;
            if node == root {
                start = position;
            }

            node = match self.tree.node(node) {
                Some(Node::Internal { left, right, .. }) => {
                    if bit {
                        *right
                    } else {
                        *left
                    }
                }
                // only reachable when the root itself is a leaf
                Some(Node::Leaf { .. }) => return Err(Error::SingleLeafTree),
                None => return Err(Error::InvalidTree(format!("node #{} out of range", node))),
            };

            if let Some(Node::Leaf { symbol, .. }) = self.tree.node(node) {
                out.push(symbol.clone());
                node = root;
            }
        }

        if node != root {
            match self.options.on_truncated_code {
                TruncatedCode::Discard => {
                    debug!("discarding unfinished code starting at bit {}", start)
                }
                TruncatedCode::Error => return Err(Error::TruncatedCode { position: start }),
            }
        }

        Ok(out)
    }
}
