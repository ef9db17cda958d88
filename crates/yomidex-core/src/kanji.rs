use std::collections::HashMap;

use yomidex_types::{DictionaryHandle, KanjiEntry};

/// Kanji metadata keyed by (dictionary, character)
#[derive(Debug, Default)]
pub struct KanjiIndex {
    by_dictionary: HashMap<DictionaryHandle, HashMap<String, Vec<KanjiEntry>>>,
    entry_count: usize,
}

impl KanjiIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: KanjiEntry) {
        self.by_dictionary
            .entry(entry.dictionary.clone())
            .or_default()
            .entry(entry.character.clone())
            .or_default()
            .push(entry);
        self.entry_count += 1;
    }

    /// Entries for `character` from `dictionary`. Unknown dictionaries and
    /// unknown characters both yield an empty slice.
    pub fn kanji_info(&self, character: &str, dictionary: &str) -> &[KanjiEntry] {
        self.by_dictionary
            .get(dictionary)
            .and_then(|characters| characters.get(character))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}
