use std::collections::HashMap;

use yomidex_types::{TermEntry, TermKey};

/// Separator accepted by the `"term,reading"` lookup shorthand
pub const KEY_SEPARATOR: char = ',';

/// Global term index across every loaded dictionary.
///
/// Entries live in a single arena; buckets and per-dictionary views refer
/// to them by position.
#[derive(Debug, Default)]
pub struct TermIndex {
    entries: Vec<TermEntry>,
    buckets: HashMap<TermKey, Vec<usize>>,
    readings_by_term: HashMap<String, Vec<String>>,
    terms_by_reading: HashMap<String, Vec<String>>,
}

impl TermIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its arena position
    pub fn insert(&mut self, entry: TermEntry) -> usize {
        let entry_idx = self.entries.len();

        push_unique(
            self.readings_by_term.entry(entry.term.clone()).or_default(),
            &entry.reading,
        );
        push_unique(
            self.terms_by_reading.entry(entry.reading.clone()).or_default(),
            &entry.term,
        );
        self.buckets.entry(entry.key()).or_default().push(entry_idx);
        self.entries.push(entry);

        entry_idx
    }

    pub fn resolve<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = &'a TermEntry> {
        indices.iter().filter_map(|&idx| self.entries.get(idx))
    }

    pub fn readings_for_term(&self, term: &str) -> &[String] {
        self.readings_by_term
            .get(term)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn terms_for_reading(&self, reading: &str) -> &[String] {
        self.terms_by_reading
            .get(reading)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Entries for a (term, reading) pair, in the order they were loaded.
    ///
    /// An empty `reading` with a `term` of the form `"term,reading"` is
    /// split on the separator first, so a stored term that itself contains
    /// the separator and has no reading is only reachable through
    /// [`TermIndex::definitions_for_term`]. When the pair has no entries,
    /// entries stored under the term with an empty reading are returned
    /// instead.
    pub fn definitions_for_term_reading(&self, term: &str, reading: &str) -> Vec<&TermEntry> {
        let (term, reading) = split_shorthand(term, reading);

        let bucket = self.bucket(term, reading).or_else(|| {
            if reading.is_empty() {
                None
            } else {
                self.bucket(term, "")
            }
        });

        bucket
            .map(|indices| self.resolve(indices).collect())
            .unwrap_or_default()
    }

    /// Entries for every reading of `term`, grouped by reading in reading order
    pub fn definitions_for_term(&self, term: &str) -> Vec<&TermEntry> {
        self.readings_for_term(term)
            .iter()
            .flat_map(|reading| self.entries_for_key(term, reading))
            .collect()
    }

    /// Entries stored under exactly (term, reading), without shorthand
    /// parsing or fallback
    pub fn entries_for_key<'a>(
        &'a self,
        term: &str,
        reading: &str,
    ) -> impl Iterator<Item = &'a TermEntry> + use<'a> {
        self.resolve(self.bucket(term, reading).unwrap_or_default())
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn term_count(&self) -> usize {
        self.readings_by_term.len()
    }

    pub fn reading_count(&self) -> usize {
        self.terms_by_reading.len()
    }

    fn bucket(&self, term: &str, reading: &str) -> Option<&[usize]> {
        self.buckets
            .get(&TermKey::new(term, reading))
            .map(Vec::as_slice)
    }
}

fn split_shorthand<'a>(term: &'a str, reading: &'a str) -> (&'a str, &'a str) {
    if !reading.is_empty() {
        return (term, reading);
    }
    match term.split_once(KEY_SEPARATOR) {
        Some((term, rest)) => (term, rest.split(KEY_SEPARATOR).next().unwrap_or(rest)),
        None => (term, reading),
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|existing| existing == value) {
        values.push(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_only_applies_without_reading() {
        assert_eq!(split_shorthand("家,いえ", ""), ("家", "いえ"));
        assert_eq!(split_shorthand("家,いえ,extra", ""), ("家", "いえ"));
        assert_eq!(split_shorthand("家,", ""), ("家", ""));
        assert_eq!(split_shorthand("家,いえ", "うち"), ("家,いえ", "うち"));
        assert_eq!(split_shorthand("家", ""), ("家", ""));
    }

    #[test]
    fn push_unique_keeps_first_seen_order() {
        let mut values = Vec::new();
        for value in ["b", "a", "b", "c", "a"] {
            push_unique(&mut values, value);
        }
        assert_eq!(values, vec!["b", "a", "c"]);
    }
}
