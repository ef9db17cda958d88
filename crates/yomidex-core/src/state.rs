use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard};

use crate::error::LoadError;
use crate::index::{DictionaryBanks, LoadSummary, Yomichan};
use crate::source::RecordSource;

/// [`Yomichan`] behind a single writer lock.
///
/// Loads (including the lazy load behind [`SharedYomichan::all_terms`])
/// drain the record source without holding the lock, then take the write
/// lock for the whole ingest, so readers never see a partially loaded
/// dictionary.
#[derive(Clone, Default)]
pub struct SharedYomichan {
    index: Arc<RwLock<Yomichan>>,
}

impl SharedYomichan {
    pub fn new(index: Yomichan) -> Self {
        Self {
            index: Arc::new(RwLock::new(index)),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Yomichan> {
        self.index.read().await
    }

    pub async fn load<S>(&self, source: &S, dictionary: &str) -> Result<LoadSummary, LoadError>
    where
        S: RecordSource + ?Sized,
    {
        let banks = DictionaryBanks::fetch(source, dictionary)?;
        Ok(self.index.write().await.ingest_banks(dictionary, banks))
    }

    pub async fn ensure_loaded<S>(&self, source: &S, dictionary: &str) -> Result<(), LoadError>
    where
        S: RecordSource + ?Sized,
    {
        let loaded = self.index.read().await.is_loaded(dictionary);
        if loaded {
            return Ok(());
        }

        let banks = DictionaryBanks::fetch(source, dictionary)?;

        // Another writer may have loaded it while we were reading
        let mut index = self.index.write().await;
        if !index.is_loaded(dictionary) {
            index.ingest_banks(dictionary, banks);
        }
        Ok(())
    }

    pub async fn all_terms<S>(
        &self,
        source: &S,
        dictionary: &str,
    ) -> Result<HashSet<String>, LoadError>
    where
        S: RecordSource + ?Sized,
    {
        self.ensure_loaded(source, dictionary).await?;

        let index = self.index.read().await;
        let terms = index
            .dictionary_entries(dictionary)
            .map(|entries| entries.terms().into_iter().map(str::to_string).collect())
            .unwrap_or_default();
        Ok(terms)
    }

    pub async fn loaded_dictionaries(&self) -> Vec<String> {
        self.index
            .read()
            .await
            .loaded_dictionaries()
            .iter()
            .map(|handle| handle.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use yomidex_types::{Definition, KanjiRecord, TermRecord};

    use super::*;

    /// Records whether the index lock was free while banks were read
    struct LockCheckingSource {
        shared: SharedYomichan,
        lock_free: Mutex<Vec<bool>>,
    }

    impl RecordSource for LockCheckingSource {
        fn term_banks(&self, _dictionary: &str) -> Result<Vec<Vec<TermRecord>>, LoadError> {
            let free = self.shared.index.try_write().is_ok();
            self.lock_free.lock().unwrap().push(free);
            Ok(vec![vec![TermRecord::new("家", "いえ", [Definition::from("house")])]])
        }

        fn kanji_banks(&self, _dictionary: &str) -> Result<Vec<Vec<KanjiRecord>>, LoadError> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn source_is_read_without_holding_the_lock() {
        let shared = SharedYomichan::default();
        let source = LockCheckingSource {
            shared: shared.clone(),
            lock_free: Mutex::new(Vec::new()),
        };

        shared.load(&source, "jmdict").await.unwrap();
        shared.ensure_loaded(&source, "kenkyusha").await.unwrap();
        shared.ensure_loaded(&source, "kenkyusha").await.unwrap();

        assert_eq!(*source.lock_free.lock().unwrap(), [true, true]);
        assert_eq!(shared.read().await.term_entry_count(), 2);
    }
}
