use std::collections::HashMap;

use yomidex_types::{KanjiRecord, TermRecord};

use crate::error::LoadError;

/// Supplies decoded record banks for a dictionary identifier.
///
/// Archive extraction and record decoding live behind this trait; the
/// index only ever sees fully decoded banks.
pub trait RecordSource: Send + Sync {
    /// All term banks of the dictionary, in bank order
    fn term_banks(&self, dictionary: &str) -> Result<Vec<Vec<TermRecord>>, LoadError>;

    /// All kanji banks of the dictionary, in bank order
    fn kanji_banks(&self, dictionary: &str) -> Result<Vec<Vec<KanjiRecord>>, LoadError>;
}

#[derive(Debug, Default, Clone)]
struct MemoryDictionary {
    term_banks: Vec<Vec<TermRecord>>,
    kanji_banks: Vec<Vec<KanjiRecord>>,
}

/// Record source backed by banks held in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    dictionaries: HashMap<String, MemoryDictionary>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_term_bank(
        mut self,
        dictionary: impl Into<String>,
        records: impl IntoIterator<Item = TermRecord>,
    ) -> Self {
        self.add_term_bank(dictionary, records);
        self
    }

    pub fn with_kanji_bank(
        mut self,
        dictionary: impl Into<String>,
        records: impl IntoIterator<Item = KanjiRecord>,
    ) -> Self {
        self.add_kanji_bank(dictionary, records);
        self
    }

    pub fn add_term_bank(
        &mut self,
        dictionary: impl Into<String>,
        records: impl IntoIterator<Item = TermRecord>,
    ) {
        self.dictionaries
            .entry(dictionary.into())
            .or_default()
            .term_banks
            .push(records.into_iter().collect());
    }

    pub fn add_kanji_bank(
        &mut self,
        dictionary: impl Into<String>,
        records: impl IntoIterator<Item = KanjiRecord>,
    ) {
        self.dictionaries
            .entry(dictionary.into())
            .or_default()
            .kanji_banks
            .push(records.into_iter().collect());
    }

    fn dictionary(&self, dictionary: &str) -> Result<&MemoryDictionary, LoadError> {
        self.dictionaries
            .get(dictionary)
            .ok_or_else(|| LoadError::unavailable(dictionary, "not present in memory source"))
    }
}

impl RecordSource for MemorySource {
    fn term_banks(&self, dictionary: &str) -> Result<Vec<Vec<TermRecord>>, LoadError> {
        Ok(self.dictionary(dictionary)?.term_banks.clone())
    }

    fn kanji_banks(&self, dictionary: &str) -> Result<Vec<Vec<KanjiRecord>>, LoadError> {
        Ok(self.dictionary(dictionary)?.kanji_banks.clone())
    }
}
