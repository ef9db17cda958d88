mod dictionary_tests;

use serde_json::json;
use yomidex_types::{KanjiRecord, TermRecord};

use crate::source::MemorySource;

pub(crate) fn term(row: serde_json::Value) -> TermRecord {
    serde_json::from_value(row).expect("valid term row")
}

pub(crate) fn kanji(row: serde_json::Value) -> KanjiRecord {
    serde_json::from_value(row).expect("valid kanji row")
}

/// Two small dictionaries sharing a few (term, reading) pairs
pub(crate) fn sample_source() -> MemorySource {
    MemorySource::new()
        .with_term_bank(
            "jmdict",
            [
                term(json!(["家", "いえ", "n", "", 10, ["house"], 1, "P"])),
                term(json!(["家", "うち", "n", "", 5, ["home", "family"], 1, ""])),
                term(json!(["良い", "よい", "adj-i", "adj-i", 20, ["good"], 2, "P"])),
                term(json!(["食べる", "たべる", "v1", "v1 vt", 30, ["to eat"], 3, "P"])),
            ],
        )
        .with_term_bank(
            "jmdict",
            [
                term(json!(["善い", "よい", "adj-i", "adj-i", 1, ["good (morally)"], 4, ""])),
                term(json!(["家", "け", "suf", "", 0, ["family name suffix"], 5, ""])),
            ],
        )
        .with_term_bank(
            "kenkyusha",
            [
                term(json!(["家", "いえ", "", "", 3, ["dwelling"], 100, ""])),
                term(json!(["食べる", "たべる", "", "vt v5", 1, ["to live on"], 101, ""])),
                term(json!(["好い", "よい", "", "", 0, ["nice"], 102, ""])),
            ],
        )
        .with_kanji_bank(
            "kanjidic",
            [
                kanji(json!(["家", "カ ケ", "いえ や うち", "jouyou", ["house", "home"], {"strokes": "10", "grade": "2"}])),
                kanji(json!(["日", "ニチ ジツ", "ひ -び -か", "jouyou", ["day", "sun"]])),
            ],
        )
}
