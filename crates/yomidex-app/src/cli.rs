use clap::{Parser, Subcommand};
use yomidex_config::Config;

/// Query Yomichan-format dictionaries from the command line.
///
/// Dictionaries are Yomichan `.zip` archives, or directories they were
/// unpacked into, holding `term_bank_N.json` and `kanji_bank_N.json`
/// files. Results are printed as JSON.
#[derive(Parser, Debug)]
#[command(name = "yomidex", version)]
pub struct Cli {
    /// Dictionary archive or directory to load; repeat to load several, in order
    #[arg(short, long = "dict", value_name = "PATH")]
    pub dicts: Vec<String>,

    /// Base directory for relative dictionary paths
    #[arg(long, value_name = "DIR")]
    pub root: Option<String>,

    /// Look up query text as typed, without NFKC normalization
    #[arg(long)]
    pub raw: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Flags extend the environment config; `--root` replaces it
    pub fn apply(&self, config: &mut Config) {
        config.dictionary.paths.extend(self.dicts.iter().cloned());
        if let Some(root) = &self.root {
            config.dictionary.root = Some(root.clone());
        }
        if self.raw {
            config.dictionary.normalize_queries = false;
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Readings of a term, in first-seen order
    Readings { term: String },

    /// Terms sharing a reading
    Terms { reading: String },

    /// Definitions of a term, optionally narrowed to one reading.
    /// `TERM,READING` is accepted as shorthand.
    Define {
        term: String,
        reading: Option<String>,
    },

    /// Merged deinflection rules of a term/reading pair
    Deinflectors {
        term: String,
        #[arg(default_value = "")]
        reading: String,
    },

    /// Kanji metadata from one dictionary
    Kanji {
        character: String,
        #[arg(long = "from", value_name = "DICT")]
        dictionary: String,
    },

    /// Whether a dictionary defines a term
    Contains { dictionary: String, term: String },

    /// Summary of one dictionary, loading it if needed
    Entries {
        dictionary: String,
        /// Also list every (term, reading) key
        #[arg(long)]
        list: bool,
    },

    /// Loaded dictionaries with index statistics
    Dicts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_dicts_and_subcommand() {
        let cli = Cli::try_parse_from([
            "yomidex", "--dict", "jmdict", "-d", "kanjidic", "define", "家", "いえ",
        ])
        .unwrap();

        assert_eq!(cli.dicts, vec!["jmdict", "kanjidic"]);
        assert_eq!(
            cli.command,
            Command::Define {
                term: "家".to_string(),
                reading: Some("いえ".to_string()),
            }
        );
    }

    #[test]
    fn kanji_requires_dictionary() {
        assert!(Cli::try_parse_from(["yomidex", "kanji", "家"]).is_err());

        let cli = Cli::try_parse_from(["yomidex", "kanji", "家", "--from", "kanjidic"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Kanji {
                character: "家".to_string(),
                dictionary: "kanjidic".to_string(),
            }
        );
    }

    #[test]
    fn apply_extends_config() {
        let cli = Cli::try_parse_from([
            "yomidex", "--dict", "extra", "--root", "/dicts", "--raw", "dicts",
        ])
        .unwrap();
        let mut config = Config::default();
        config.dictionary.paths.push("from-env".to_string());

        cli.apply(&mut config);

        assert_eq!(config.dictionary.paths, vec!["from-env", "extra"]);
        assert_eq!(config.dictionary.root.as_deref(), Some("/dicts"));
        assert!(!config.dictionary.normalize_queries);
    }
}
