use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::logging::LogConfig;

pub mod dictionary;
pub mod logging;

#[derive(Default, Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub log: LogConfig,
}

impl Config {
    /// Build the config from `YOMIDEX_*` environment variables
    pub fn new() -> Self {
        Config {
            dictionary: DictionaryConfig::new(),
            log: LogConfig::new(),
        }
    }
}
