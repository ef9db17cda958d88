use std::collections::HashSet;

use yomidex_types::TermKey;

use super::sample_source;
use crate::error::LoadError;
use crate::index::Yomichan;

#[test]
fn test_all_entries_loads_lazily() {
    let source = sample_source();
    let mut index = Yomichan::new();
    assert!(index.dictionary_entries("jmdict").is_none());

    let entries = index.all_entries(&source, "jmdict").unwrap();
    assert_eq!(entries.handle(), "jmdict");
    assert_eq!(entries.len(), 6);
    assert_eq!(entries.entry_count(), 6);

    assert!(index.is_loaded("jmdict"));
    assert_eq!(index.loaded_dictionaries().len(), 1);
}

#[test]
fn test_all_entries_does_not_reload() {
    let source = sample_source();
    let mut index = Yomichan::with_dictionary(&source, "jmdict").unwrap();
    let before = index.term_entry_count();

    index.all_entries(&source, "jmdict").unwrap();
    index.all_terms(&source, "jmdict").unwrap();

    assert_eq!(index.term_entry_count(), before);
}

#[test]
fn test_all_entries_round_trip() {
    let source = sample_source();
    let mut index = Yomichan::new();
    index.load(&source, "jmdict").unwrap();
    index.load(&source, "kenkyusha").unwrap();

    let entries = index.dictionary_entries("kenkyusha").unwrap();
    let keys: Vec<_> = entries.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![
            TermKey::new("家", "いえ"),
            TermKey::new("食べる", "たべる"),
            TermKey::new("好い", "よい"),
        ]
    );

    // Only this dictionary's entries, even where the pair is shared
    let house = entries.get("家", "いえ");
    assert_eq!(house.len(), 1);
    assert_eq!(house[0].sequence, 100);

    for (key, bucket) in entries.entries() {
        assert!(!bucket.is_empty());
        assert!(bucket.iter().all(|entry| entry.key() == *key));
        assert!(bucket.iter().all(|entry| entry.dictionary == "kenkyusha"));
    }
}

#[test]
fn test_buckets_keep_ingestion_order() {
    let source = sample_source();
    let mut index = Yomichan::new();
    index.load(&source, "jmdict").unwrap();
    index.load(&source, "jmdict").unwrap();

    let entries = index.dictionary_entries("jmdict").unwrap();
    assert_eq!(entries.len(), 6);
    assert_eq!(entries.entry_count(), 12);

    let bucket = entries.get("家", "いえ");
    assert_eq!(bucket.len(), 2);
    assert!(std::ptr::eq(bucket[0], index.definitions_for_term_reading("家", "いえ")[0]));
}

#[test]
fn test_all_terms_is_unique_subset() {
    let source = sample_source();
    let mut index = Yomichan::new();
    index.load(&source, "kenkyusha").unwrap();

    let terms: HashSet<String> = index
        .all_terms(&source, "jmdict")
        .unwrap()
        .into_iter()
        .map(str::to_string)
        .collect();

    let expected: HashSet<String> = ["家", "良い", "食べる", "善い"]
        .into_iter()
        .map(str::to_string)
        .collect();
    assert_eq!(terms, expected);

    for term in &terms {
        assert!(!index.readings_for_term(term).is_empty());
    }
}

#[test]
fn test_all_entries_propagates_load_errors() {
    let mut index = Yomichan::new();

    let err = index.all_entries(&sample_source(), "missing").err().unwrap();
    assert!(matches!(err, LoadError::SourceUnavailable { .. }));
    assert!(!index.is_loaded("missing"));
}

#[test]
fn test_contains_matches_owning_dictionary() {
    let source = sample_source();
    let mut index = Yomichan::new();
    index.load_all(&source, ["jmdict", "kenkyusha"]).unwrap();

    assert!(index.contains("jmdict", "善い"));
    assert!(!index.contains("kenkyusha", "善い"));
    assert!(index.contains("kenkyusha", "好い"));
    assert!(!index.contains("jmdict", "好い"));
    assert!(index.contains("kenkyusha", "家"));
    assert!(!index.contains("kanjidic", "家"));

    for dictionary in ["jmdict", "kenkyusha"] {
        for term in ["家", "良い", "善い", "好い", "食べる", "DASDAS"] {
            let expected = index
                .definitions_for_term(term)
                .iter()
                .any(|entry| entry.dictionary == dictionary);
            assert_eq!(index.contains(dictionary, term), expected, "{dictionary} / {term}");
        }
    }
}

#[test]
fn test_empty_dictionary_is_still_loaded() {
    let source = sample_source();
    let mut index = Yomichan::new();

    let entries = index.all_entries(&source, "kanjidic").unwrap();
    assert!(entries.is_empty());
    assert!(entries.terms().is_empty());
}
