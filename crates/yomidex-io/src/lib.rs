mod archive;
pub mod bank;

pub use bank::{BankSource, KANJI_BANK_PREFIX, TERM_BANK_PREFIX};
