use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::record::{Definition, KanjiRecord, TermRecord};

/// Identifier of a loaded dictionary (its load path or name).
///
/// Every entry carries the handle of the dictionary that contributed it,
/// and all per-dictionary views are keyed by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DictionaryHandle(Arc<str>);

impl DictionaryHandle {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DictionaryHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DictionaryHandle {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DictionaryHandle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DictionaryHandle {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for DictionaryHandle {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl From<&str> for DictionaryHandle {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for DictionaryHandle {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl Serialize for DictionaryHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Composite (term, reading) key identifying one bucket of definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TermKey {
    pub term: String,
    pub reading: String,
}

impl TermKey {
    pub fn new(term: impl Into<String>, reading: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            reading: reading.into(),
        }
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reading.is_empty() {
            f.write_str(&self.term)
        } else {
            write!(f, "{} [{}]", self.term, self.reading)
        }
    }
}

/// One definition record owned by the term index
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermEntry {
    pub term: String,
    pub reading: String,
    pub tags: String,
    /// Space-separated deinflection rule names, e.g. `"v1 vt"`
    pub deinflectors: String,
    /// Passed through untouched; never used for ordering
    pub popularity: f64,
    pub definitions: Vec<Definition>,
    pub sequence: i64,
    pub extra_tags: String,
    pub dictionary: DictionaryHandle,
}

impl TermEntry {
    pub fn from_record(record: TermRecord, dictionary: DictionaryHandle) -> Self {
        Self {
            term: record.term,
            reading: record.reading,
            tags: record.tags,
            deinflectors: record.deinflectors,
            popularity: record.popularity,
            definitions: record.definitions,
            sequence: record.sequence,
            extra_tags: record.extra_tags,
            dictionary,
        }
    }

    pub fn key(&self) -> TermKey {
        TermKey::new(&self.term, &self.reading)
    }

    pub fn deinflector_rules(&self) -> impl Iterator<Item = &str> {
        self.deinflectors.split_whitespace()
    }

    pub fn is_from(&self, dictionary: &str) -> bool {
        self.dictionary == dictionary
    }
}

/// Metadata for a single kanji character
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KanjiEntry {
    pub character: String,
    pub onyomi: Vec<String>,
    pub kunyomi: Vec<String>,
    pub tags: String,
    pub meanings: Vec<String>,
    pub stats: BTreeMap<String, serde_json::Value>,
    pub dictionary: DictionaryHandle,
}

impl KanjiEntry {
    pub fn from_record(record: KanjiRecord, dictionary: DictionaryHandle) -> Self {
        Self {
            character: record.character,
            onyomi: split_readings(&record.onyomi),
            kunyomi: split_readings(&record.kunyomi),
            tags: record.tags,
            meanings: record.meanings,
            stats: record.stats,
            dictionary,
        }
    }
}

fn split_readings(readings: &str) -> Vec<String> {
    readings.split_whitespace().map(str::to_string).collect()
}
