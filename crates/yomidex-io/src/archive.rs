use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::de::DeserializeOwned;
use yomidex_core::LoadError;
use zip::ZipArchive;

use crate::bank::{bank_number, decode_bank, file_unavailable};

pub(crate) fn is_archive(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zip"))
}

/// Banks stored at the top level of a dictionary archive, sorted by bank number
pub(crate) fn read_archive_banks<T>(
    path: &Path,
    dictionary: &str,
    prefix: &str,
) -> Result<Vec<Vec<T>>, LoadError>
where
    T: DeserializeOwned,
{
    let file = File::open(path)
        .map_err(|e| LoadError::unavailable(dictionary, format!("{}: {e}", path.display())))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| LoadError::unavailable(dictionary, format!("{}: {e}", path.display())))?;

    let mut files: Vec<(u32, String)> = archive
        .file_names()
        .filter_map(|name| bank_number(name, prefix).map(|number| (number, name.to_string())))
        .collect();
    files.sort_by_key(|(number, _)| *number);

    let mut banks = Vec::with_capacity(files.len());
    for (_, file) in files {
        tracing::info!("Reading {} from {}", file, dictionary);

        let mut json = String::new();
        let mut zipped = archive
            .by_name(&file)
            .map_err(|e| file_unavailable(dictionary, &file, e))?;
        zipped
            .read_to_string(&mut json)
            .map_err(|e| file_unavailable(dictionary, &file, e))?;

        banks.push(decode_bank(dictionary, file, &json)?);
    }

    Ok(banks)
}
