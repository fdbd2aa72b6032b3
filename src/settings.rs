// std imports
use std::include_str;
use std::path::PathBuf;

// third-party imports
use config::{Config, File, FileFormat};
use serde::Deserialize;

// local imports
use crate::error::{Error, Result};

// ---

static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.toml");

// ---

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    pub filter: FilterSettings,
    pub count: bool,
    pub invert: bool,
}

impl Settings {
    /// Loads settings from the embedded defaults overridden by the given sources in order.
    pub fn load<I: IntoIterator<Item = Source>>(sources: I) -> Result<Self> {
        let mut builder = Config::builder().add_source(File::from_str(DEFAULT_SETTINGS, FileFormat::Toml));

        for source in sources {
            builder = match source {
                Source::File(file) => {
                    if !file.path.exists() {
                        if file.required {
                            return Err(Error::FileNotFoundError {
                                filename: file.path.to_string_lossy().into(),
                            });
                        }
                        log::debug!("skipping missing optional config file {:?}", file.path);
                        continue;
                    }
                    log::debug!("loading config file {:?}", file.path);
                    builder.add_source(File::from(file.path).required(file.required))
                }
                Source::String(text, format) => builder.add_source(File::from_str(&text, format)),
            };
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

// ---

#[derive(Debug, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct FilterSettings {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

// ---

/// A source of settings layered on top of the embedded defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(SourceFile),
    String(String, FileFormat),
}

impl From<SourceFile> for Source {
    fn from(file: SourceFile) -> Self {
        Self::File(file)
    }
}

/// A configuration file, its format is determined by the extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub required: bool,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    pub fn required(self, required: bool) -> Self {
        Self { required, ..self }
    }
}
