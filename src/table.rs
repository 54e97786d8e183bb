use bitvec::prelude::*;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::tree::CodeTree;

/// A string of bits, written as `'0'` and `'1'` characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Code {
    bits: BitVec,
}

impl Code {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn extend_from_code(&mut self, other: &Code) {
        self.bits.extend_from_bitslice(other.bits.as_bitslice());
    }

    pub fn as_bitslice(&self) -> &BitSlice {
        &self.bits
    }

    pub fn into_bitvec(self) -> BitVec {
        self.bits
    }

    pub fn starts_with(&self, prefix: &Code) -> bool {
        self.bits.starts_with(prefix.bits.as_bitslice())
    }
}

/// Maps one character to a bit, failing on anything but '0' and '1'.
pub(crate) fn parse_bit(position: usize, found: char) -> Result<bool> {
    match found {
        '0' => Ok(false),
        '1' => Ok(true),
        found => Err(Error::MalformedInput { position, found }),
    }
}

impl From<BitVec> for Code {
    fn from(bits: BitVec) -> Self {
        Self { bits }
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(i, c)| parse_bit(i, c))
            .collect::<Result<BitVec>>()
            .map(Code::from)
    }
}

impl TryFrom<String> for Code {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.to_string()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for bit in self.bits.iter().by_vals() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// The code of every symbol of a tree.
///
/// Entries are in left-to-right leaf order of the tree they came from.
#[derive(Debug, Clone)]
pub struct CodeTable<Symbol> {
    entries: Vec<(Symbol, Code)>,
    index: HashMap<Symbol, usize>,
}

impl<Symbol> CodeTable<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    /// Collects every root-to-leaf path in a single traversal.
    pub fn from_tree(tree: &CodeTree<Symbol>) -> Self {
        Self::from_entries(tree.leaves().map(|(s, code)| (s.clone(), code)))
    }

    fn from_entries(entries: impl IntoIterator<Item = (Symbol, Code)>) -> Self {
        let entries: Vec<_> = entries.into_iter().collect();
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (s, _))| (s.clone(), i))
            .collect();
        Self { entries, index }
    }

    pub fn get(&self, symbol: &Symbol) -> Option<&Code> {
        self.index.get(symbol).map(|&i| &self.entries[i].1)
    }

    /// Like [`get`](Self::get), but a missing symbol is an
    /// [`Error::NotFound`].
    pub fn code(&self, symbol: &Symbol) -> Result<&Code> {
        self.get(symbol).ok_or(Error::NotFound)
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.index.contains_key(symbol)
    }

    /// Total number of bits needed to encode symbols occurring with the
    /// given counts. Symbols without a code contribute nothing.
    pub fn weighted_length(&self, frequencies: &FrequencyTable<Symbol>) -> u64 {
        frequencies
            .iter()
            .filter_map(|(s, n)| self.get(s).map(|c| n.saturating_mul(c.len() as u64)))
            .fold(0u64, u64::saturating_add)
    }
}

impl<Symbol> CodeTable<Symbol> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Symbol, &Code)> + '_ {
        self.entries.iter().map(|(s, c)| (s, c))
    }

    /// True if no code is a prefix of another one.
    pub fn is_prefix_free(&self) -> bool {
        // after sorting, a code that prefixes any other prefixes its successor
        let mut codes: Vec<String> = self.entries.iter().map(|(_, c)| c.to_string()).collect();
        codes.sort();
        codes.windows(2).all(|w| !w[1].starts_with(w[0].as_str()))
    }
}

impl<Symbol> PartialEq for CodeTable<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(s, c)| other.get(s) == Some(c))
    }
}

impl<Symbol> Eq for CodeTable<Symbol> where Symbol: Eq + Hash + Clone {}

impl<Symbol: Serialize> Serialize for CodeTable<Symbol> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}

impl<'de, Symbol> Deserialize<'de> for CodeTable<Symbol>
where
    Symbol: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries = Vec::<(Symbol, Code)>::deserialize(deserializer)?;
        let table = Self::from_entries(entries);
        if table.index.len() != table.entries.len() {
            return Err(de::Error::custom("duplicate symbol in code table"));
        }
        if !table.is_prefix_free() {
            return Err(de::Error::custom("codes do not form a prefix code"));
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_display_and_parse() {
        let code: Code = "0110".parse().unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(code.to_string(), "0110");
        assert_eq!(code.as_bitslice(), bits![usize, Lsb0; 0, 1, 1, 0]);
        assert_eq!("".parse::<Code>(), Ok(Code::new()));
    }

    #[test]
    fn code_parse_rejects_other_chars() {
        assert_eq!(
            "01x1".parse::<Code>(),
            Err(Error::MalformedInput { position: 2, found: 'x' })
        );
    }

    #[test]
    fn code_prefix() {
        let a: Code = "01".parse().unwrap();
        let b: Code = "011".parse().unwrap();
        assert!(b.starts_with(&a));
        assert!(!a.starts_with(&b));
    }

    #[test]
    fn table_from_tree() {
        let tree = CodeTree::from_weights(vec![('a', 2), ('b', 1), ('c', 1)]).unwrap();
        let table = CodeTable::from_tree(&tree);

        assert_eq!(table.len(), 3);
        assert_eq!(table.code(&'a').unwrap().to_string(), "0");
        assert_eq!(table.code(&'b').unwrap().to_string(), "10");
        assert_eq!(table.code(&'c').unwrap().to_string(), "11");
        assert_eq!(table.code(&'d'), Err(Error::NotFound));
        assert!(table.contains(&'c'));
        assert!(!table.contains(&'d'));
        assert!(table.is_prefix_free());

        let freq = FrequencyTable::from_counts(vec![('a', 2), ('b', 1), ('c', 1)]);
        assert_eq!(table.weighted_length(&freq), 6);
    }

    #[test]
    fn table_matches_tree_lookup() {
        let tree = CodeTree::from_weights("helo wrd".chars().zip(1u64..)).unwrap();
        let table = CodeTable::from_tree(&tree);
        for (symbol, code) in table.iter() {
            assert_eq!(&tree.code_of(symbol).unwrap(), code);
        }
    }

    #[test]
    fn detects_non_prefix_codes() {
        let table = CodeTable::from_entries(vec![
            ('a', "0".parse().unwrap()),
            ('b', "01".parse().unwrap()),
        ]);
        assert!(!table.is_prefix_free());
    }
}
