pub mod record;
pub mod types;

pub use record::{Definition, KanjiRecord, TermRecord};
pub use types::{DictionaryHandle, KanjiEntry, TermEntry, TermKey};
