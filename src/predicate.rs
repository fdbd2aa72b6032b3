//! Predicates over candidate names and their combinators.
//!
//! Any `Fn(&str) -> bool` is a [`Predicate`], so closures compose with compiled patterns:
//!
//! ```
//! use namefilter::predicate::{Predicate, and, not, string_contains};
//!
//! let filter = and([
//!     string_contains("com.example.").boxed(),
//!     not(string_contains("Test ")).boxed(),
//!     (|name: &str| name.len() < 64).boxed(),
//! ]);
//! assert!(filter.matches("com.example.Service"));
//! assert!(!filter.matches("com.example.ServiceTest"));
//! ```

// std imports
use std::fmt;

// third-party imports
use wildcard::Pattern;

// ---

/// A type-erased predicate that can be shared between threads.
pub type BoxPredicate = Box<dyn Fn(&str) -> bool + Send + Sync>;

// ---

/// A boolean-valued test of a candidate name.
pub trait Predicate {
    /// Returns `true` if the candidate satisfies the predicate.
    fn matches(&self, candidate: &str) -> bool;

    #[inline]
    fn and<P>(self, rhs: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate,
    {
        And { lhs: self, rhs }
    }

    #[inline]
    fn or<P>(self, rhs: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate,
    {
        Or { lhs: self, rhs }
    }

    #[inline]
    fn boxed(self) -> BoxPredicate
    where
        Self: Sized + Send + Sync + 'static,
    {
        Box::new(move |candidate: &str| self.matches(candidate))
    }
}

impl<F> Predicate for F
where
    F: Fn(&str) -> bool,
{
    #[inline]
    fn matches(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

// ---

/// Compiles the pattern into a predicate.
///
/// See [`wildcard::Pattern`] for the pattern syntax.
pub fn string_contains(pattern: &str) -> Contains {
    Contains::new(pattern)
}

/// Returns a predicate that yields the complement of the given one.
pub fn not<P: Predicate>(predicate: P) -> Not<P> {
    Not { inner: predicate }
}

/// Returns a predicate that yields `true` if all the given predicates do.
///
/// Evaluation stops at the first predicate that yields `false`.
/// With no predicates the result is always `true`.
pub fn and<I>(predicates: I) -> All<I::Item>
where
    I: IntoIterator,
    I::Item: Predicate,
{
    All {
        items: predicates.into_iter().collect(),
    }
}

/// Returns a predicate that yields `true` if any of the given predicates does.
///
/// Evaluation stops at the first predicate that yields `true`.
/// With no predicates the result is always `false`.
pub fn or<I>(predicates: I) -> Any<I::Item>
where
    I: IntoIterator,
    I::Item: Predicate,
{
    Any {
        items: predicates.into_iter().collect(),
    }
}

// ---

/// Matches candidates containing the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contains {
    pattern: Pattern,
}

impl Contains {
    pub fn new(pattern: &str) -> Self {
        Self {
            pattern: Pattern::new(pattern),
        }
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }
}

impl Predicate for Contains {
    #[inline]
    fn matches(&self, candidate: &str) -> bool {
        self.pattern.matches(candidate)
    }
}

impl fmt::Display for Contains {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.pattern.to_string())
    }
}

// ---

#[derive(Debug, Clone)]
pub struct Not<P> {
    inner: P,
}

impl<P: Predicate> Predicate for Not<P> {
    #[inline]
    fn matches(&self, candidate: &str) -> bool {
        !self.inner.matches(candidate)
    }
}

// ---

#[derive(Debug, Clone)]
pub struct And<L, R> {
    lhs: L,
    rhs: R,
}

impl<L: Predicate, R: Predicate> Predicate for And<L, R> {
    #[inline]
    fn matches(&self, candidate: &str) -> bool {
        self.lhs.matches(candidate) && self.rhs.matches(candidate)
    }
}

// ---

#[derive(Debug, Clone)]
pub struct Or<L, R> {
    lhs: L,
    rhs: R,
}

impl<L: Predicate, R: Predicate> Predicate for Or<L, R> {
    #[inline]
    fn matches(&self, candidate: &str) -> bool {
        self.lhs.matches(candidate) || self.rhs.matches(candidate)
    }
}

// ---

#[derive(Debug, Clone)]
pub struct All<P> {
    items: Vec<P>,
}

impl<P: Predicate> Predicate for All<P> {
    #[inline]
    fn matches(&self, candidate: &str) -> bool {
        self.items.iter().all(|item| item.matches(candidate))
    }
}

// ---

#[derive(Debug, Clone)]
pub struct Any<P> {
    items: Vec<P>,
}

impl<P: Predicate> Predicate for Any<P> {
    #[inline]
    fn matches(&self, candidate: &str) -> bool {
        self.items.iter().any(|item| item.matches(candidate))
    }
}
