//! Substring pattern matching for fully qualified names.
//!
//! A pattern is a `|`-separated list of alternatives. A candidate matches the
//! pattern if it matches at least one of the alternatives.
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `|` - Separates alternatives
//! - Leading whitespace of an alternative is ignored
//! - Trailing whitespace of an alternative anchors it to the end of the candidate
//! - Any other character matches itself, there are no escapes
//!
//! Without trailing whitespace an alternative may match anywhere within the candidate.
//!
//! # Examples
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("pkg");
//! assert!(pattern.matches("some.evil.long.pkg.SomeClass"));
//!
//! let pattern = Pattern::new("some.r*.*Class");
//! assert!(pattern.matches("some.random.Class"));
//! assert!(!pattern.matches("some.randomClass"));
//!
//! // Trailing whitespace requires the candidate to end with the alternative
//! let pattern = Pattern::new("Json ");
//! assert!(pattern.matches("some.pkg.Json"));
//! assert!(!pattern.matches("some.pkg.JsonParser"));
//!
//! // Alternatives are trimmed and anchored independently
//! let pattern = Pattern::new(" Parser | Json");
//! assert!(pattern.matches("some.pkg.JsonParser"));
//! assert!(pattern.matches("some.pkg.JsonWriter"));
//! assert!(!pattern.matches("some.pkg.XmlWriter"));
//! ```
//!
//! # Whitespace
//!
//! Whitespace is anything [`char::is_whitespace`] accepts, the same set [`str::trim`] removes.

mod pattern;

pub use pattern::{Pattern, SEPARATOR, WILDCARD};
