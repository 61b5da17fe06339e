use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Symbol counts, kept in the order each symbol was first added.
///
/// The order matters: the tree builder breaks ties between equal frequencies
/// by it, so two tables with the same counts in a different order may produce
/// different (equally valid) codes.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    entries: Vec<(S, u64)>,
    index: FxHashMap<S, usize>,
}

impl<S: Eq + Hash + Clone> FrequencyTable<S> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Count every symbol of the sequence, in order of first appearance.
    pub fn from_symbols<I: IntoIterator<Item = S>>(symbols: I) -> Self {
        let mut table = Self::new();
        symbols.into_iter().for_each(|sym| table.add(sym, 1));
        table
    }

    /// Add `count` to the symbol's frequency, inserting it at the end if new.
    /// A zero count is recorded as is; the tree builder rejects it.
    pub fn add(&mut self, symbol: S, count: u64) {
        match self.index.get(&symbol) {
            Some(&i) => self.entries[i].1 = self.entries[i].1.saturating_add(count),
            None => {
                self.index.insert(symbol.clone(), self.entries.len());
                self.entries.push((symbol, count));
            }
        }
    }

    pub fn get(&self, symbol: &S) -> Option<u64> {
        self.index.get(symbol).map(|&i| self.entries[i].1)
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.index.contains_key(symbol)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all frequencies.
    pub fn total(&self) -> u64 {
        self.entries
            .iter()
            .fold(0_u64, |acc, (_, f)| acc.saturating_add(*f))
    }

    /// (symbol, frequency) pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, u64)> + '_ {
        self.entries.iter().map(|(s, f)| (s, *f))
    }
}

impl FrequencyTable<u8> {
    /// Count a byte slice. Symbols are ordered by first appearance, same as
    /// `from_symbols` would order them.
    pub fn from_bytes(data: &[u8]) -> Self {
        let counts = freqs(data);
        let distinct = counts.iter().filter(|&&c| c > 0).count();
        let mut table = Self::new();
        for &byte in data {
            if table.len() == distinct {
                break;
            }
            if !table.contains(&byte) {
                table.add(byte, counts[byte as usize]);
            }
        }
        table
    }
}

impl FrequencyTable<char> {
    /// Count the characters of a string in order of first appearance.
    pub fn from_text(text: &str) -> Self {
        Self::from_symbols(text.chars())
    }
}

impl<S: Eq + Hash + Clone> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash + Clone> FromIterator<(S, u64)> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<S: Eq + Hash + Clone> Extend<(S, u64)> for FrequencyTable<S> {
    fn extend<I: IntoIterator<Item = (S, u64)>>(&mut self, iter: I) {
        iter.into_iter().for_each(|(sym, count)| self.add(sym, count));
    }
}

/// Returns a frequency count of the input data. Uses parallelism when data set is over 64k.
pub fn freqs(data: &[u8]) -> Vec<u64> {
    if data.len() > 64_000 {
        // 16k is pretty much the sweet spot for chunk size.
        data.par_chunks(16_000)
            .fold(
                || vec![0_u64; 256],
                |mut freqs, chunk| {
                    chunk.iter().for_each(|&el| freqs[el as usize] += 1);
                    freqs
                },
            )
            .reduce(
                || vec![0_u64; 256],
                |s, f| s.iter().zip(&f).map(|(a, b)| a + b).collect::<Vec<u64>>(),
            )
    } else {
        let mut freqs = vec![0_u64; 256];
        data.iter().for_each(|&el| freqs[el as usize] += 1);
        freqs
    }
}
