//! Route pattern parsing.
//!
//! A scheme is a pattern string such as `/cities/:name/weather/:day/show`.
//! Segments starting with `:` are parameters, matched against any resource
//! value and bound by name; everything else is a literal, matched by exact
//! string comparison.

/// Marks a scheme segment as a parameter.
pub(crate) const PARAM_MARKER: char = ':';

/// Scheme patterns always split on `/`, independent of the separator
/// configured for request-path resolution.
pub(crate) const SCHEME_SEPARATOR: char = '/';

/// One segment of a parsed scheme.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// Matched by exact, case-sensitive comparison against a path segment.
    Literal(String),
    /// Matched by any path segment; the matched value is bound to the name.
    Param(String),
}

/// A parsed route pattern: the original string plus its token sequence.
///
/// Immutable after [`Scheme::parse`]. The original string is retained
/// because the route ordering tie-break compares it, not the tokens.
#[derive(Clone, Debug)]
pub struct Scheme {
    raw: String,
    tokens: Vec<Token>,
}

impl Scheme {
    /// Parses a pattern string into a token sequence.
    ///
    /// Leading and trailing separators are trimmed, however many there
    /// are, then the remainder is split on the separator. Edge separators
    /// never contribute a token; interior doubled separators are not
    /// collapsed and produce empty literal segments.
    ///
    /// ```rust
    /// use ruta::Scheme;
    ///
    /// let s = Scheme::parse("/cities/:name/show");
    /// assert_eq!(s.segment_count(), 3);
    /// assert_eq!(s.param_count(), 1);
    /// ```
    pub fn parse(pattern: &str) -> Self {
        let trimmed = pattern.trim_matches(SCHEME_SEPARATOR);

        let tokens = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed
                .split(SCHEME_SEPARATOR)
                .map(|part| match part.strip_prefix(PARAM_MARKER) {
                    Some(name) => Token::Param(name.to_owned()),
                    None => Token::Literal(part.to_owned()),
                })
                .collect()
        };

        Self { raw: pattern.to_owned(), tokens }
    }

    /// The original pattern string, as registered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed token sequence.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of segments in the pattern.
    pub fn segment_count(&self) -> usize {
        self.tokens.len()
    }

    /// Number of parameter segments in the pattern.
    pub fn param_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Param(_)))
            .count()
    }
}
