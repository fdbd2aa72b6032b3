// third-party imports
use itertools::Itertools;

// local imports
use crate::predicate::{BoxPredicate, Contains, Predicate, and, not, string_contains};

// ---

/// Options for building a [`NameFilter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub invert: bool,
}

// ---

/// Accepts names matching all include patterns and none of the exclude patterns.
///
/// With `invert` set, accepts exactly the names that would otherwise be rejected.
pub struct NameFilter {
    options: FilterOptions,
    predicate: BoxPredicate,
}

impl NameFilter {
    pub fn new(options: &FilterOptions) -> Self {
        let (universal, include): (Vec<Contains>, Vec<Contains>) = options
            .include
            .iter()
            .map(|x| string_contains(x))
            .partition(|x| x.pattern().is_universal());
        if !universal.is_empty() {
            log::debug!("dropping include patterns matching any name: [{}]", universal.iter().join(", "));
        }
        let exclude: Vec<Contains> = options.exclude.iter().map(|x| string_contains(x)).collect();

        let effective = FilterOptions {
            include: include.iter().map(|x| x.pattern().to_string()).collect(),
            exclude: exclude.iter().map(|x| x.pattern().to_string()).collect(),
            invert: options.invert,
        };

        let predicate = and(
            include
                .into_iter()
                .map(Predicate::boxed)
                .chain(exclude.into_iter().map(|x| not(x).boxed())),
        );

        let predicate = if options.invert {
            not(predicate).boxed()
        } else {
            predicate.boxed()
        };

        Self {
            options: effective,
            predicate,
        }
    }

    /// Returns the options in effect, with normalized patterns and without the ones matching any name.
    pub fn options(&self) -> &FilterOptions {
        &self.options
    }
}

impl Default for NameFilter {
    fn default() -> Self {
        Self::new(&FilterOptions::default())
    }
}

impl Predicate for NameFilter {
    #[inline]
    fn matches(&self, name: &str) -> bool {
        self.predicate.matches(name)
    }
}

#[cfg(test)]
mod tests;
