use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use memchr::memmem;

/// Matches zero or more characters.
pub const WILDCARD: char = '*';

/// Separates alternatives.
pub const SEPARATOR: char = '|';

/// A substring pattern for matching fully qualified names.
///
/// Patterns are created from strings containing:
/// - `*` that matches zero or more characters
/// - `|` that separates alternatives
///
/// Each alternative is trimmed, and trailing whitespace makes it match only at the end of the text.
///
/// # Examples
///
/// ```
/// use wildcard::Pattern;
///
/// let pattern = Pattern::new("f*ar");
/// assert!(pattern.matches("foobar"));
/// assert!(pattern.matches("far"));
///
/// let pattern = Pattern::new("foo |bar ");
/// assert!(pattern.matches("foo"));
/// assert!(!pattern.matches("fo"));
/// ```
///
/// - Patterns can be displayed back to strings in a normalized form via the `Display` trait
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Pattern {
    alternatives: Vec<Alternative>,
}

impl Pattern {
    /// Creates a new pattern from a string.
    ///
    /// This function is infallible; all input strings are valid patterns.
    /// Characters that have special meaning in regular expressions are matched literally.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new(".$?[]\\^+");
    /// assert!(pattern.matches(".$?[]\\^+"));
    /// assert!(!pattern.matches(".$?[.\\^+"));
    ///
    /// // Empty pattern matches anything
    /// let pattern = Pattern::new("");
    /// assert!(pattern.matches("anything"));
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            alternatives: raw.as_ref().split(SEPARATOR).map(Alternative::new).collect(),
        }
    }

    #[inline]
    /// Tests whether the pattern matches the given text.
    ///
    /// Returns `true` if at least one of the alternatives matches, `false` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard::Pattern;
    ///
    /// let pattern = Pattern::new(" fo| ba");
    /// assert!(pattern.matches("foo"));
    /// assert!(pattern.matches("bar"));
    /// assert!(!pattern.matches("anyOther"));
    /// ```
    pub fn matches(&self, text: &str) -> bool {
        self.alternatives.iter().any(|alternative| alternative.matches(text))
    }

    /// Returns `true` if the pattern matches any text.
    ///
    /// This is the case when at least one of the alternatives contains nothing but wildcards.
    pub fn is_universal(&self) -> bool {
        self.alternatives
            .iter()
            .any(|alternative| alternative.pieces.iter().all(|piece| piece.is_empty()))
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Self::new("")
    }
}

impl From<&str> for Pattern {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, alternative) in self.alternatives.iter().enumerate() {
            if i != 0 {
                write!(f, "{}", SEPARATOR)?;
            }
            write!(f, "{}", alternative)?;
        }
        Ok(())
    }
}

// ---

/// A single alternative split into literal pieces around wildcards.
///
/// There is always one more piece than there are wildcards, so `pieces` is never empty.
#[derive(Debug, PartialEq, Eq, Clone)]
struct Alternative {
    pieces: Vec<String>,
    anchored: bool,
}

impl Alternative {
    fn new(raw: &str) -> Self {
        Self {
            pieces: raw.trim().split(WILDCARD).map(String::from).collect(),
            anchored: raw.ends_with(char::is_whitespace),
        }
    }

    #[inline]
    fn matches(&self, text: &str) -> bool {
        let Some((last, init)) = self.pieces.split_last() else {
            return true;
        };

        // Leftmost occurrence of each piece leaves the most room for the rest,
        // so no backtracking is needed.
        let mut text = text.as_bytes();
        for piece in init {
            match memmem::find(text, piece.as_bytes()) {
                Some(i) => text = &text[i + piece.len()..],
                None => return false,
            }
        }

        if self.anchored {
            text.ends_with(last.as_bytes())
        } else {
            memmem::find(text, last.as_bytes()).is_some()
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, piece) in self.pieces.iter().enumerate() {
            if i != 0 {
                write!(f, "{}", WILDCARD)?;
            }
            write!(f, "{}", piece)?;
        }
        if self.anchored {
            write!(f, " ")?;
        }
        Ok(())
    }
}
