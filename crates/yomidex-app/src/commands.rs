use serde_json::{Value, json};
use yomidex_core::KEY_SEPARATOR;

use crate::cli::Command;
use crate::state::AppState;

pub async fn execute(state: &AppState, command: Command) -> anyhow::Result<Value> {
    match command {
        Command::Readings { term } => {
            let term = state.normalize(&term);
            let index = state.index.read().await;
            Ok(json!(index.readings_for_term(&term)))
        }
        Command::Terms { reading } => {
            let reading = state.normalize(&reading);
            let index = state.index.read().await;
            Ok(json!(index.terms_for_reading(&reading)))
        }
        Command::Define { term, reading } => handle_define(state, &term, reading.as_deref()).await,
        Command::Deinflectors { term, reading } => {
            let term = state.normalize(&term);
            let reading = state.normalize(&reading);
            let index = state.index.read().await;
            Ok(json!(index.deinflectors_for_term_reading(&term, &reading)))
        }
        Command::Kanji {
            character,
            dictionary,
        } => {
            let character = state.normalize(&character);
            let index = state.index.read().await;
            Ok(serde_json::to_value(index.kanji_info(&character, &dictionary))?)
        }
        Command::Contains { dictionary, term } => {
            let term = state.normalize(&term);
            let index = state.index.read().await;
            Ok(json!({
                "dictionary": dictionary,
                "term": term,
                "contains": index.contains(&dictionary, &term),
            }))
        }
        Command::Entries { dictionary, list } => handle_entries(state, &dictionary, list).await,
        Command::Dicts => {
            let index = state.index.read().await;
            Ok(json!({
                "dictionaries": index.loaded_dictionaries(),
                "term_entries": index.term_entry_count(),
                "terms": index.term_count(),
                "readings": index.reading_count(),
                "kanji_entries": index.kanji_entry_count(),
            }))
        }
    }
}

async fn handle_define(
    state: &AppState,
    term: &str,
    reading: Option<&str>,
) -> anyhow::Result<Value> {
    let term = state.normalize(term);
    let index = state.index.read().await;

    let entries = match reading {
        Some(reading) => index.definitions_for_term_reading(&term, &state.normalize(reading)),
        None if term.contains(KEY_SEPARATOR) => index.definitions_for_term_reading(&term, ""),
        None => index.definitions_for_term(&term),
    };
    tracing::debug!("{} definitions for '{}'", entries.len(), term);

    Ok(serde_json::to_value(entries)?)
}

async fn handle_entries(
    state: &AppState,
    dictionary: &str,
    list: bool,
) -> anyhow::Result<Value> {
    state
        .index
        .ensure_loaded(state.source.as_ref(), dictionary)
        .await?;

    let index = state.index.read().await;
    let Some(entries) = index.dictionary_entries(dictionary) else {
        anyhow::bail!("dictionary {dictionary} is not loaded");
    };

    let mut summary = json!({
        "dictionary": entries.handle(),
        "keys": entries.len(),
        "entries": entries.entry_count(),
        "terms": entries.terms().len(),
    });
    if list {
        summary["list"] = json!(entries.keys().collect::<Vec<_>>());
    }

    Ok(summary)
}
