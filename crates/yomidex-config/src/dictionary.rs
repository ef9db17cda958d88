use std::env;

use serde::{Deserialize, Serialize};

/// Separator for `YOMIDEX_DICTIONARIES`
pub const PATH_SEPARATOR: char = ';';

fn default_normalize_queries() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Dictionaries loaded at startup, in load order
    pub paths: Vec<String>,
    /// Base directory for relative dictionary paths
    pub root: Option<String>,
    #[serde(default = "default_normalize_queries")]
    pub normalize_queries: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            paths: vec![],
            root: None,
            normalize_queries: default_normalize_queries(),
        }
    }
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let paths = env::var("YOMIDEX_DICTIONARIES")
            .map(|v| parse_paths(&v))
            .unwrap_or_default();

        let root = env::var("YOMIDEX_DICTIONARY_ROOT")
            .ok()
            .filter(|v| !v.trim().is_empty());

        let normalize_queries = env::var("YOMIDEX_NORMALIZE_QUERIES")
            .ok()
            .and_then(|v| parse_bool(&v))
            .unwrap_or_else(default_normalize_queries);

        Self {
            paths,
            root,
            normalize_queries,
        }
    }
}

pub fn parse_paths(value: &str) -> Vec<String> {
    value
        .split(PATH_SEPARATOR)
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
