use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use yomidex_core::{LoadError, RecordSource};
use yomidex_types::{KanjiRecord, TermRecord};

use crate::archive;

pub const TERM_BANK_PREFIX: &str = "term_bank_";
pub const KANJI_BANK_PREFIX: &str = "kanji_bank_";

/// Reads banks from a Yomichan dictionary, either the distributed `.zip`
/// archive or a directory it was unpacked into.
///
/// The dictionary identifier is the archive or directory path, resolved
/// against `root` when it is relative.
#[derive(Debug, Clone, Default)]
pub struct BankSource {
    root: Option<PathBuf>,
}

impl BankSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    pub fn resolve(&self, dictionary: &str) -> PathBuf {
        let path = Path::new(dictionary);
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn read_banks<T>(&self, dictionary: &str, prefix: &str) -> Result<Vec<Vec<T>>, LoadError>
    where
        T: DeserializeOwned,
    {
        let path = self.resolve(dictionary);
        if path.is_dir() {
            read_dir_banks(&path, dictionary, prefix)
        } else if path.is_file() && archive::is_archive(&path) {
            archive::read_archive_banks(&path, dictionary, prefix)
        } else {
            Err(LoadError::unavailable(
                dictionary,
                format!("{} is neither a directory nor a .zip archive", path.display()),
            ))
        }
    }
}

impl RecordSource for BankSource {
    fn term_banks(&self, dictionary: &str) -> Result<Vec<Vec<TermRecord>>, LoadError> {
        let banks = self.read_banks(dictionary, TERM_BANK_PREFIX)?;
        if banks.is_empty() {
            tracing::warn!("No term banks found in {}", dictionary);
        }
        Ok(banks)
    }

    fn kanji_banks(&self, dictionary: &str) -> Result<Vec<Vec<KanjiRecord>>, LoadError> {
        self.read_banks(dictionary, KANJI_BANK_PREFIX)
    }
}

fn read_dir_banks<T>(dir: &Path, dictionary: &str, prefix: &str) -> Result<Vec<Vec<T>>, LoadError>
where
    T: DeserializeOwned,
{
    let read_dir =
        fs::read_dir(dir).map_err(|e| LoadError::unavailable(dictionary, e.to_string()))?;

    let mut files = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| LoadError::unavailable(dictionary, e.to_string()))?;
        let Some(name) = dir_entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if let Some(number) = bank_number(&name, prefix) {
            files.push((number, name));
        }
    }
    files.sort_by_key(|(number, _)| *number);

    let mut banks = Vec::with_capacity(files.len());
    for (_, file) in files {
        tracing::info!("Reading {} from {}", file, dictionary);
        let json = fs::read_to_string(dir.join(&file))
            .map_err(|e| file_unavailable(dictionary, &file, e))?;
        banks.push(decode_bank(dictionary, file, &json)?);
    }

    Ok(banks)
}

pub(crate) fn decode_bank<T>(dictionary: &str, file: String, json: &str) -> Result<T, LoadError>
where
    T: DeserializeOwned,
{
    serde_json::from_str(json).map_err(|source| LoadError::Decode {
        dictionary: dictionary.to_string(),
        file,
        source,
    })
}

pub(crate) fn file_unavailable(dictionary: &str, file: &str, err: impl fmt::Display) -> LoadError {
    LoadError::unavailable(dictionary, format!("cannot read {file}: {err}"))
}

/// `term_bank_12.json` -> `Some(12)` for prefix `term_bank_`
pub(crate) fn bank_number(file_name: &str, prefix: &str) -> Option<u32> {
    let digits = file_name.strip_prefix(prefix)?.strip_suffix(".json")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
