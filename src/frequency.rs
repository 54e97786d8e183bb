use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts of the distinct symbols of a sequence.
///
/// Entries are kept in order of first occurrence. That order seeds the tree
/// builder, so the same input always yields the same codes, but nothing else
/// depends on it: two tables with the same counts compare equal regardless
/// of order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<Symbol> {
    entries: Vec<(Symbol, u64)>,
    index: HashMap<Symbol, usize>,
}

impl<Symbol> Default for FrequencyTable<Symbol> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<Symbol> FrequencyTable<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from explicit `(symbol, count)` pairs. Counts of
    /// repeated symbols are summed.
    pub fn from_counts(pairs: impl IntoIterator<Item = (Symbol, u64)>) -> Self {
        pairs
            .into_iter()
            .fold(Self::new(), |table, (s, n)| table.with(s, n))
    }

    fn with(mut self, symbol: Symbol, n: u64) -> Self {
        match self.index.get(&symbol) {
            Some(&i) => {
                let count = &mut self.entries[i].1;
                *count = count.saturating_add(n);
            }
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, n));
            }
        }
        self
    }

    /// Combines the counts of two tables, e.g. ones built over separate
    /// chunks of the same input.
    pub fn merge(self, other: Self) -> Self {
        other
            .entries
            .into_iter()
            .fold(self, |table, (s, n)| table.with(s, n))
    }

    pub fn get(&self, symbol: &Symbol) -> Option<u64> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0u64, |acc, (_, n)| acc.saturating_add(*n))
    }
}

impl<Symbol> FrequencyTable<Symbol> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&Symbol, u64)> + '_ {
        self.entries.iter().map(|(s, n)| (s, *n))
    }
}

impl<Symbol> FromIterator<Symbol> for FrequencyTable<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    fn from_iter<I: IntoIterator<Item = Symbol>>(symbols: I) -> Self {
        symbols
            .into_iter()
            .fold(Self::new(), |table, s| table.with(s, 1))
    }
}

impl<Symbol> PartialEq for FrequencyTable<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(s, n)| other.get(s) == Some(n))
    }
}

impl<Symbol> Eq for FrequencyTable<Symbol> where Symbol: Eq + Hash + Clone {}

/// Counts how often each distinct symbol occurs in `symbols`.
pub fn count<Symbol>(symbols: impl IntoIterator<Item = Symbol>) -> FrequencyTable<Symbol>
where
    Symbol: Eq + Hash + Clone,
{
    symbols.into_iter().collect()
}
