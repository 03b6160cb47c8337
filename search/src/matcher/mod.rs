//! Single-term matching against a [`MatchContext`].

use crate::context::{MatchContext, strip_tag_marker};
use crate::normalize::normalize_term;
use crate::query::TermPattern;
use regex::{Regex, RegexBuilder};

/// Upper bound on a compiled term pattern.
const REGEX_SIZE_LIMIT: usize = 1 << 20;

/// Returns true if `term` matches `context`.
///
/// An invalid regular expression matches nothing and is logged.
pub fn matches(term: &str, context: &MatchContext) -> bool {
    match CompiledTerm::compile(term, context.use_regex_all()) {
        Ok(compiled) => compiled.matches(context),
        Err(e) => {
            tracing::warn!(term, error = %e, "invalid regex term matches nothing");
            false
        }
    }
}

/// A term prepared for repeated matching.
#[derive(Debug, Clone)]
pub enum CompiledTerm {
    /// Matches nothing: the pattern or normalized text is empty.
    Never,
    Regex(Regex),
    Literal {
        /// Normalized term, substring-tested against the combined text.
        text: String,
        /// Normalized term without a `tag:` marker, tested against the tag set.
        tag: String,
    },
}

impl CompiledTerm {
    pub fn compile(raw: &str, use_regex_all: bool) -> Result<Self, regex::Error> {
        match TermPattern::resolve(raw, use_regex_all) {
            TermPattern::Regex("") => Ok(CompiledTerm::Never),
            TermPattern::Regex(pattern) => {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .multi_line(true)
                    .size_limit(REGEX_SIZE_LIMIT)
                    .build()?;
                Ok(CompiledTerm::Regex(regex))
            }
            TermPattern::Literal(raw) => {
                let text = normalize_term(raw);
                let tag = normalize_term(strip_tag_marker(raw).unwrap_or(raw));
                if text.is_empty() && tag.is_empty() {
                    Ok(CompiledTerm::Never)
                } else {
                    Ok(CompiledTerm::Literal { text, tag })
                }
            }
        }
    }

    /// Regex terms search the tag text in tags-only mode and the per-field
    /// text otherwise, with `^` and `$` anchoring at each field. Literal terms test tag membership in tags-only mode and
    /// substring containment otherwise.
    pub fn matches(&self, context: &MatchContext) -> bool {
        match self {
            CompiledTerm::Never => false,
            CompiledTerm::Regex(regex) => {
                if context.tags_only() {
                    regex.is_match(context.tags_text())
                } else {
                    regex.is_match(context.field_text())
                }
            }
            CompiledTerm::Literal { text, tag } => {
                if context.tags_only() {
                    !tag.is_empty() && context.has_tag(tag)
                } else {
                    !text.is_empty() && context.combined_text().contains(text.as_str())
                }
            }
        }
    }
}
