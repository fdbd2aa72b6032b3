// std imports
use std::path::PathBuf;

// third-party imports
use clap::Parser;

// local imports
use crate::{app, filter::FilterOptions, input::InputReference, settings::Settings};

// ---

/// Filters fully qualified names read line by line.
///
/// Patterns look for a substring in each name: `*` matches any sequence of characters,
/// `|` separates alternatives, trailing whitespace requires the name to end with the alternative
/// and leading whitespace is ignored.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, an empty value or `-` discards previously listed files and the default one.
    #[arg(long, value_name = "FILE", env = "NAMEFILTER_CONFIG", num_args = 1)]
    pub config: Vec<String>,

    /// Accept only names matching the pattern, in addition to the positional pattern.
    #[arg(short, long, value_name = "PATTERN", num_args = 1)]
    pub include: Vec<String>,

    /// Reject names matching the pattern.
    #[arg(short = 'x', long, value_name = "PATTERN", num_args = 1)]
    pub exclude: Vec<String>,

    /// Output names rejected by the filter instead of accepted ones.
    #[arg(short = 'v', long)]
    pub invert: bool,

    /// Output only the number of accepted names.
    #[arg(short, long)]
    pub count: bool,

    /// Pattern to accept names by.
    pub pattern: Option<String>,

    /// Files to process, standard input is used if none or `-` is given.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    /// Merges the options with the settings, patterns from the command line go after configured ones.
    pub fn app_options(&self, settings: &Settings) -> app::Options {
        let include = settings
            .filter
            .include
            .iter()
            .chain(self.pattern.iter())
            .chain(self.include.iter())
            .cloned()
            .collect();
        let exclude = settings.filter.exclude.iter().chain(self.exclude.iter()).cloned().collect();

        app::Options {
            filter: FilterOptions {
                include,
                exclude,
                invert: self.invert || settings.invert,
            },
            count: self.count || settings.count,
        }
    }

    pub fn inputs(&self) -> Vec<InputReference> {
        if self.files.is_empty() {
            vec![InputReference::Stdin]
        } else {
            self.files.iter().cloned().map(InputReference::from).collect()
        }
    }
}
