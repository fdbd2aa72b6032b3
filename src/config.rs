// std imports
use std::path::PathBuf;

// local imports
use crate::{
    appdirs::AppDirs,
    error::Result,
    settings::{Settings, Source, SourceFile},
};

// ---

pub const APP_NAME: &str = "namefilter";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Prepares loading of settings from the given configuration files.
///
/// An empty path or `-` discards all files listed before it including the default one.
pub fn at<I, P>(paths: I) -> Loader
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    Loader::new(paths.into_iter().map(Into::into).collect())
}

/// Returns the path to the default configuration file, if the platform has a configuration directory.
pub fn default_path() -> Option<PathBuf> {
    AppDirs::new(APP_NAME).map(|dirs| dirs.config_dir.join(CONFIG_FILE_NAME))
}

// ---

pub struct Loader {
    paths: Vec<PathBuf>,
    no_default: bool,
}

impl Loader {
    fn new(paths: Vec<PathBuf>) -> Self {
        let (offset, no_default) = paths
            .iter()
            .rposition(|path| path.as_os_str().is_empty() || path.as_os_str() == "-")
            .map(|i| (i + 1, true))
            .unwrap_or_default();

        Self {
            paths: paths[offset..].to_vec(),
            no_default,
        }
    }

    /// Disables loading of the default configuration file.
    pub fn no_default(self, no_default: bool) -> Self {
        Self {
            no_default: self.no_default || no_default,
            ..self
        }
    }

    pub fn load(self) -> Result<Settings> {
        Settings::load(self.sources())
    }

    fn sources(&self) -> Vec<Source> {
        let default = if self.no_default { None } else { default_path() };

        default
            .map(|path| SourceFile::new(path).required(false).into())
            .into_iter()
            .chain(self.paths.iter().map(|path| SourceFile::new(path).into()))
            .collect()
    }
}
