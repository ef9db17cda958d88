use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use yomidex_types::{DictionaryHandle, TermEntry, TermKey};

use crate::term_index::TermIndex;

/// Entries contributed by one dictionary, stored as positions into the
/// global [`TermIndex`].
#[derive(Debug)]
pub struct DictionaryIndex {
    handle: DictionaryHandle,
    /// Keys in the order they were first ingested
    keys: Vec<TermKey>,
    buckets: HashMap<TermKey, Vec<usize>>,
    entry_count: usize,
}

impl DictionaryIndex {
    pub fn new(handle: DictionaryHandle) -> Self {
        Self {
            handle,
            keys: Vec::new(),
            buckets: HashMap::new(),
            entry_count: 0,
        }
    }

    pub fn insert(&mut self, key: TermKey, entry_idx: usize) {
        match self.buckets.entry(key) {
            Entry::Occupied(mut bucket) => bucket.get_mut().push(entry_idx),
            Entry::Vacant(slot) => {
                self.keys.push(slot.key().clone());
                slot.insert(vec![entry_idx]);
            }
        }
        self.entry_count += 1;
    }

    pub fn handle(&self) -> &DictionaryHandle {
        &self.handle
    }

    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}

/// Read-only view of one dictionary's entries
#[derive(Clone, Copy)]
pub struct DictionaryEntries<'a> {
    index: &'a DictionaryIndex,
    terms: &'a TermIndex,
}

impl<'a> DictionaryEntries<'a> {
    pub(crate) fn new(index: &'a DictionaryIndex, terms: &'a TermIndex) -> Self {
        Self { index, terms }
    }

    pub fn handle(&self) -> &'a DictionaryHandle {
        &self.index.handle
    }

    /// Number of distinct (term, reading) keys
    pub fn len(&self) -> usize {
        self.index.key_count()
    }

    pub fn is_empty(&self) -> bool {
        self.index.keys.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.index.entry_count()
    }

    pub fn keys(self) -> impl Iterator<Item = &'a TermKey> + 'a {
        self.index.keys.iter()
    }

    pub fn get(&self, term: &str, reading: &str) -> Vec<&'a TermEntry> {
        self.index
            .buckets
            .get(&TermKey::new(term, reading))
            .map(|indices| self.terms.resolve(indices).collect())
            .unwrap_or_default()
    }

    /// Every key with its entries, keys in first-ingested order
    pub fn entries(self) -> impl Iterator<Item = (&'a TermKey, Vec<&'a TermEntry>)> + 'a {
        let index = self.index;
        let terms = self.terms;
        index.keys.iter().map(move |key| {
            let entries = index
                .buckets
                .get(key)
                .map(|indices| terms.resolve(indices).collect())
                .unwrap_or_default();
            (key, entries)
        })
    }

    /// Distinct terms of this dictionary
    pub fn terms(&self) -> HashSet<&'a str> {
        self.index.keys.iter().map(|key| key.term.as_str()).collect()
    }
}
