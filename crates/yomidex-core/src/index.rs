use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;
use yomidex_types::{DictionaryHandle, KanjiEntry, KanjiRecord, TermEntry, TermRecord};

use crate::dictionary::{DictionaryEntries, DictionaryIndex};
use crate::error::LoadError;
use crate::kanji::KanjiIndex;
use crate::source::RecordSource;
use crate::term_index::TermIndex;

/// What a single dictionary load ingested
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub dictionary: DictionaryHandle,
    pub term_banks: usize,
    pub term_entries: usize,
    pub kanji_banks: usize,
    pub kanji_entries: usize,
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} term banks ({} entries), {} kanji banks ({} entries)",
            self.dictionary,
            self.term_banks,
            self.term_entries,
            self.kanji_banks,
            self.kanji_entries
        )
    }
}

/// Every bank of one dictionary, drained from a [`RecordSource`] but not
/// yet ingested
#[derive(Debug, Default)]
pub struct DictionaryBanks {
    pub term_banks: Vec<Vec<TermRecord>>,
    pub kanji_banks: Vec<Vec<KanjiRecord>>,
}

impl DictionaryBanks {
    pub fn fetch<S>(source: &S, dictionary: &str) -> Result<Self, LoadError>
    where
        S: RecordSource + ?Sized,
    {
        tracing::info!("Reading dictionary: {}", dictionary);

        Ok(Self {
            term_banks: source.term_banks(dictionary)?,
            kanji_banks: source.kanji_banks(dictionary)?,
        })
    }
}

/// In-memory index over one or more Yomichan-format dictionaries.
///
/// Loads are append-only: loading the same dictionary twice ingests its
/// records twice. Callers are expected to load each dictionary once.
#[derive(Debug, Default)]
pub struct Yomichan {
    terms: TermIndex,
    dictionaries: HashMap<DictionaryHandle, DictionaryIndex>,
    load_order: Vec<DictionaryHandle>,
    kanji: KanjiIndex,
}

impl Yomichan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an index with `dictionary` already loaded
    pub fn with_dictionary<S>(source: &S, dictionary: &str) -> Result<Self, LoadError>
    where
        S: RecordSource + ?Sized,
    {
        let mut index = Self::new();
        index.load(source, dictionary)?;
        Ok(index)
    }

    /// Drain `source` for `dictionary` and ingest every record.
    ///
    /// All banks are fetched before anything is ingested, so a failing
    /// source leaves the index as it was.
    pub fn load<S>(&mut self, source: &S, dictionary: &str) -> Result<LoadSummary, LoadError>
    where
        S: RecordSource + ?Sized,
    {
        let banks = DictionaryBanks::fetch(source, dictionary)?;
        Ok(self.ingest_banks(dictionary, banks))
    }

    /// Ingest banks already fetched with [`DictionaryBanks::fetch`]
    pub fn ingest_banks(&mut self, dictionary: &str, banks: DictionaryBanks) -> LoadSummary {
        let DictionaryBanks {
            term_banks,
            kanji_banks,
        } = banks;

        let handle = self.register(&DictionaryHandle::new(dictionary)).handle().clone();
        let mut summary = LoadSummary {
            dictionary: handle.clone(),
            term_banks: term_banks.len(),
            term_entries: 0,
            kanji_banks: kanji_banks.len(),
            kanji_entries: 0,
        };

        for (bank_idx, bank) in term_banks.into_iter().enumerate() {
            tracing::debug!(
                "Ingesting term bank {} ({} records) from {}",
                bank_idx + 1,
                bank.len(),
                dictionary
            );
            summary.term_entries += bank.len();
            for record in bank {
                self.ingest(&handle, record);
            }
        }

        for (bank_idx, bank) in kanji_banks.into_iter().enumerate() {
            tracing::debug!(
                "Ingesting kanji bank {} ({} records) from {}",
                bank_idx + 1,
                bank.len(),
                dictionary
            );
            summary.kanji_entries += bank.len();
            for record in bank {
                self.ingest_kanji(&handle, record);
            }
        }

        tracing::info!(
            "Read {} files with {} entries from {}",
            summary.term_banks + summary.kanji_banks,
            summary.term_entries + summary.kanji_entries,
            dictionary
        );

        summary
    }

    /// Load several dictionaries in order, stopping at the first failure
    pub fn load_all<S, I>(
        &mut self,
        source: &S,
        dictionaries: I,
    ) -> Result<Vec<LoadSummary>, LoadError>
    where
        S: RecordSource + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        dictionaries
            .into_iter()
            .map(|dictionary| self.load(source, dictionary.as_ref()))
            .collect()
    }

    /// Add one term-bank record contributed by `dictionary`
    pub fn ingest(&mut self, dictionary: &DictionaryHandle, record: TermRecord) {
        let entry = TermEntry::from_record(record, dictionary.clone());
        let key = entry.key();
        let entry_idx = self.terms.insert(entry);

        self.register(dictionary).insert(key, entry_idx);
    }

    /// Add one kanji-bank record contributed by `dictionary`
    pub fn ingest_kanji(&mut self, dictionary: &DictionaryHandle, record: KanjiRecord) {
        self.register(dictionary);
        self.kanji.insert(KanjiEntry::from_record(record, dictionary.clone()));
    }

    pub fn is_loaded(&self, dictionary: &str) -> bool {
        self.dictionaries.contains_key(dictionary)
    }

    /// Load `dictionary` unless it already is
    pub fn ensure_loaded<S>(&mut self, source: &S, dictionary: &str) -> Result<(), LoadError>
    where
        S: RecordSource + ?Sized,
    {
        if !self.is_loaded(dictionary) {
            self.load(source, dictionary)?;
        }
        Ok(())
    }

    /// Entries of an already loaded dictionary
    pub fn dictionary_entries(&self, dictionary: &str) -> Option<DictionaryEntries<'_>> {
        self.dictionaries
            .get(dictionary)
            .map(|index| DictionaryEntries::new(index, &self.terms))
    }

    /// Every (term, reading) key of `dictionary` with its entries, loading
    /// the dictionary first if needed
    pub fn all_entries<S>(
        &mut self,
        source: &S,
        dictionary: &str,
    ) -> Result<DictionaryEntries<'_>, LoadError>
    where
        S: RecordSource + ?Sized,
    {
        self.ensure_loaded(source, dictionary)?;
        self.dictionary_entries(dictionary)
            .ok_or_else(|| LoadError::unavailable(dictionary, "dictionary was not registered"))
    }

    /// Distinct terms of `dictionary`, loading it first if needed
    pub fn all_terms<S>(
        &mut self,
        source: &S,
        dictionary: &str,
    ) -> Result<HashSet<&str>, LoadError>
    where
        S: RecordSource + ?Sized,
    {
        Ok(self.all_entries(source, dictionary)?.terms())
    }

    /// Whether any reading of `term` has an entry owned by `dictionary`
    pub fn contains(&self, dictionary: &str, term: &str) -> bool {
        self.readings_for_term(term).iter().any(|reading| {
            self.terms
                .entries_for_key(term, reading)
                .any(|entry| entry.is_from(dictionary))
        })
    }

    pub fn readings_for_term(&self, term: &str) -> &[String] {
        self.terms.readings_for_term(term)
    }

    pub fn terms_for_reading(&self, reading: &str) -> &[String] {
        self.terms.terms_for_reading(reading)
    }

    /// See [`TermIndex::definitions_for_term_reading`]
    pub fn definitions_for_term_reading(&self, term: &str, reading: &str) -> Vec<&TermEntry> {
        self.terms.definitions_for_term_reading(term, reading)
    }

    pub fn definitions_for_term(&self, term: &str) -> Vec<&TermEntry> {
        self.terms.definitions_for_term(term)
    }

    /// Deinflection rules of every matching entry, deduplicated in
    /// first-seen order and joined with a single space
    pub fn deinflectors_for_term_reading(&self, term: &str, reading: &str) -> String {
        let mut seen = HashSet::new();
        let mut rules = Vec::new();

        for entry in self.definitions_for_term_reading(term, reading) {
            for rule in entry.deinflector_rules() {
                if seen.insert(rule) {
                    rules.push(rule);
                }
            }
        }

        rules.join(" ")
    }

    pub fn kanji_info(&self, character: &str, dictionary: &str) -> &[KanjiEntry] {
        self.kanji.kanji_info(character, dictionary)
    }

    /// Loaded dictionaries in load order
    pub fn loaded_dictionaries(&self) -> &[DictionaryHandle] {
        &self.load_order
    }

    pub fn term_entry_count(&self) -> usize {
        self.terms.entry_count()
    }

    pub fn term_count(&self) -> usize {
        self.terms.term_count()
    }

    pub fn reading_count(&self) -> usize {
        self.terms.reading_count()
    }

    pub fn kanji_entry_count(&self) -> usize {
        self.kanji.entry_count()
    }

    fn register(&mut self, handle: &DictionaryHandle) -> &mut DictionaryIndex {
        let load_order = &mut self.load_order;
        self.dictionaries.entry(handle.clone()).or_insert_with(|| {
            load_order.push(handle.clone());
            DictionaryIndex::new(handle.clone())
        })
    }
}
