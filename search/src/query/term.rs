const REGEX_PREFIX: &str = "re:";

/// How a raw query term is interpreted.
///
/// The single place that decides whether a term is a regular expression, so
/// highlighting and matching always agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermPattern<'a> {
    /// Pattern text with any `re:` prefix or `/.../` delimiters removed.
    Regex(&'a str),
    Literal(&'a str),
}

impl<'a> TermPattern<'a> {
    /// Classifies a term by its own markers: a `re:` prefix (ASCII
    /// case-insensitive) or surrounding slashes.
    pub fn classify(raw: &'a str) -> Self {
        if let Some(pattern) = raw
            .get(..REGEX_PREFIX.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(REGEX_PREFIX))
            .map(|_| &raw[REGEX_PREFIX.len()..])
        {
            return TermPattern::Regex(pattern);
        }
        if raw.len() >= 2 && raw.starts_with('/') && raw.ends_with('/') {
            return TermPattern::Regex(&raw[1..raw.len() - 1]);
        }
        TermPattern::Literal(raw)
    }

    /// Classifies a term for evaluation. With `use_regex_all`, unmarked terms
    /// are regular expressions too.
    pub fn resolve(raw: &'a str, use_regex_all: bool) -> Self {
        match Self::classify(raw) {
            TermPattern::Literal(text) if use_regex_all => TermPattern::Regex(text),
            pattern => pattern,
        }
    }

    pub fn is_regex(&self) -> bool {
        matches!(self, TermPattern::Regex(_))
    }
}
