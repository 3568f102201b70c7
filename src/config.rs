use crate::SUPPORTED_LANGUAGE;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: String,

    /// Plain-text word list merged into the built-in dictionary.
    #[serde(default)]
    pub word_list: Option<PathBuf>,

    /// Words added from the command line, one per line.
    #[serde(default)]
    pub personal_dictionary: Option<PathBuf>,

    /// Worker threads shared by all analysis calls.
    #[serde(default = "default_pool_size")]
    pub pool_size: usize,
}

fn default_language() -> String {
    SUPPORTED_LANGUAGE.to_string()
}

fn default_pool_size() -> usize {
    4
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: default_language(),
            word_list: None,
            personal_dictionary: None,
            pool_size: default_pool_size(),
        }
    }
}

/// Values given on the command line; `None` leaves the file value in place.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<String>,
    pub word_list: Option<PathBuf>,
    pub personal_dictionary: Option<PathBuf>,
    pub pool_size: Option<usize>,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global_config = Self::from_file(&global_path)?;
                config = config.merge(global_config);
            }
        }

        let local_path = PathBuf::from(".textanalyzer.toml");
        if local_path.exists() {
            let local_config = Self::from_file(&local_path)?;
            config = config.merge(local_config);
        }

        config = config.apply(overrides);

        if config.personal_dictionary.is_none() {
            config.personal_dictionary = Self::default_personal_dict_path();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: Self) -> Self {
        // Merge logic: other's values override self's if they differ from defaults
        if other.language != default_language() {
            self.language = other.language;
        }
        if other.word_list.is_some() {
            self.word_list = other.word_list;
        }
        if other.personal_dictionary.is_some() {
            self.personal_dictionary = other.personal_dictionary;
        }
        if other.pool_size != default_pool_size() {
            self.pool_size = other.pool_size;
        }
        self
    }

    fn apply(mut self, overrides: Overrides) -> Self {
        if let Some(language) = overrides.language {
            self.language = language;
        }
        if let Some(path) = overrides.word_list {
            self.word_list = Some(path);
        }
        if let Some(path) = overrides.personal_dictionary {
            self.personal_dictionary = Some(path);
        }
        if let Some(size) = overrides.pool_size {
            self.pool_size = size;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.language != SUPPORTED_LANGUAGE {
            anyhow::bail!(
                "Unsupported language '{}': only '{}' is supported",
                self.language,
                SUPPORTED_LANGUAGE
            );
        }
        if self.pool_size == 0 {
            anyhow::bail!("pool_size must be at least 1");
        }
        Ok(())
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "textanalyzer").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn default_personal_dict_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "textanalyzer").map(|dirs| dirs.config_dir().join("personal.txt"))
    }
}
