// std imports
use std::path::PathBuf;

pub struct AppDirs {
    pub config_dir: PathBuf,
}

impl AppDirs {
    pub fn new(name: &str) -> Option<Self> {
        let config_dir = sys::config_dir()?.join(name);
        Some(Self { config_dir })
    }
}

#[cfg(target_os = "macos")]
mod sys {
    use super::*;
    use std::env;

    pub(crate) fn config_dir() -> Option<PathBuf> {
        env::var_os("XDG_CONFIG_HOME")
            .and_then(dirs_sys::is_absolute_path)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
    }
}

#[cfg(not(target_os = "macos"))]
mod sys {
    use super::*;

    pub(crate) fn config_dir() -> Option<PathBuf> {
        dirs::config_dir()
    }
}
