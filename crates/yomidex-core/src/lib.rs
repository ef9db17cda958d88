pub mod dictionary;
pub mod error;
pub mod index;
pub mod kanji;
pub mod preprocess;
pub mod source;
pub mod state;
pub mod term_index;

#[cfg(test)]
mod tests;

pub use dictionary::{DictionaryEntries, DictionaryIndex};
pub use error::LoadError;
pub use index::{DictionaryBanks, LoadSummary, Yomichan};
pub use kanji::KanjiIndex;
pub use preprocess::{NfkcPreprocessor, Passthrough, Preprocessor};
pub use source::{MemorySource, RecordSource};
pub use state::SharedYomichan;
pub use term_index::{KEY_SEPARATOR, TermIndex};
