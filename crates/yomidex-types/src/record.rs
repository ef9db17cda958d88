//! Raw record-bank rows as they appear in `term_bank_N.json` and
//! `kanji_bank_N.json`.
//!
//! Both record types decode positionally from JSON arrays, e.g.
//! `["家", "いえ", "", "", 10, ["house"], 1, ""]`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// A single gloss. Older banks only contain plain strings, newer ones
/// also carry structured content objects which are kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Definition {
    Text(String),
    Structured(serde_json::Value),
}

impl Definition {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Definition::Text(text) => Some(text),
            Definition::Structured(_) => None,
        }
    }
}

impl From<&str> for Definition {
    fn from(text: &str) -> Self {
        Definition::Text(text.to_string())
    }
}

/// Term-bank row: `[term, reading, tags, deinflectors, popularity,
/// definitions, sequence, extraTags]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TermRecord {
    pub term: String,
    pub reading: String,
    #[serde(deserialize_with = "nullable_string")]
    pub tags: String,
    #[serde(deserialize_with = "nullable_string")]
    pub deinflectors: String,
    pub popularity: f64,
    pub definitions: Vec<Definition>,
    pub sequence: i64,
    #[serde(deserialize_with = "nullable_string")]
    pub extra_tags: String,
}

impl TermRecord {
    pub fn new(
        term: impl Into<String>,
        reading: impl Into<String>,
        definitions: impl IntoIterator<Item = Definition>,
    ) -> Self {
        Self {
            term: term.into(),
            reading: reading.into(),
            tags: String::new(),
            deinflectors: String::new(),
            popularity: 0.0,
            definitions: definitions.into_iter().collect(),
            sequence: 0,
            extra_tags: String::new(),
        }
    }

    pub fn with_deinflectors(mut self, deinflectors: impl Into<String>) -> Self {
        self.deinflectors = deinflectors.into();
        self
    }

    pub fn with_sequence(mut self, sequence: i64) -> Self {
        self.sequence = sequence;
        self
    }
}

/// Kanji-bank row: `[character, onyomi, kunyomi, tags, meanings, stats]`
///
/// Version 1 banks omit `stats`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct KanjiRecord {
    pub character: String,
    pub onyomi: String,
    pub kunyomi: String,
    #[serde(deserialize_with = "nullable_string")]
    pub tags: String,
    pub meanings: Vec<String>,
    #[serde(default)]
    pub stats: BTreeMap<String, serde_json::Value>,
}

impl KanjiRecord {
    pub fn new(
        character: impl Into<String>,
        onyomi: impl Into<String>,
        kunyomi: impl Into<String>,
        meanings: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            character: character.into(),
            onyomi: onyomi.into(),
            kunyomi: kunyomi.into(),
            tags: String::new(),
            meanings: meanings.into_iter().map(Into::into).collect(),
            stats: BTreeMap::new(),
        }
    }
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn term_record_decodes_from_array() {
        let record: TermRecord =
            serde_json::from_str(r#"["家", "いえ", "n", "", 10, ["house"], 1, ""]"#).unwrap();

        assert_eq!(record.term, "家");
        assert_eq!(record.reading, "いえ");
        assert_eq!(record.tags, "n");
        assert_eq!(record.popularity, 10.0);
        assert_eq!(record.definitions, vec![Definition::from("house")]);
        assert_eq!(record.sequence, 1);
    }

    #[test]
    fn term_record_accepts_null_tags_and_structured_glosses() {
        let record: TermRecord = serde_json::from_str(
            r#"["食べる", "たべる", null, "v1", -0.5, [{"type": "structured-content", "content": "to eat"}, "to live on"], 7, null]"#,
        )
        .unwrap();

        assert_eq!(record.tags, "");
        assert_eq!(record.extra_tags, "");
        assert_eq!(record.popularity, -0.5);
        assert!(matches!(record.definitions[0], Definition::Structured(_)));
        assert_eq!(record.definitions[1].as_text(), Some("to live on"));
    }

    #[test]
    fn kanji_record_without_stats() {
        let record: KanjiRecord =
            serde_json::from_str(r#"["家", "カ ケ", "いえ や うち", "jouyou", ["house", "home"]]"#)
                .unwrap();

        assert_eq!(record.character, "家");
        assert_eq!(record.meanings, vec!["house", "home"]);
        assert!(record.stats.is_empty());
    }

    #[test]
    fn kanji_record_with_stats() {
        let record: KanjiRecord = serde_json::from_str(
            r#"["日", "ニチ", "ひ", "", ["day"], {"freq": "1", "strokes": "4"}]"#,
        )
        .unwrap();

        assert_eq!(record.stats.get("strokes"), Some(&serde_json::json!("4")));
    }

    #[test]
    fn short_term_row_is_rejected() {
        let result = serde_json::from_str::<TermRecord>(r#"["家", "いえ", "", ""]"#);
        assert!(result.is_err());
    }
}
