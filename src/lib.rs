// public modules
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod input;
pub mod predicate;
pub mod settings;

// private modules
mod appdirs;

// public uses
pub use app::{App, Options};
pub use filter::{FilterOptions, NameFilter};
pub use predicate::{Predicate, and, not, or, string_contains};
pub use settings::Settings;
pub use wildcard::Pattern;
