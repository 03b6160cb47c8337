use crate::normalize::{normalize_term, normalize_text};
use marksift_core::types::Document;
use std::collections::HashSet;

const TAG_PREFIX: &str = "tag:";

/// Per-document searchable data, built fresh for every search.
#[derive(Debug, Clone)]
pub struct MatchContext {
    combined_text: String,
    field_text: String,
    tag_set: HashSet<String>,
    tags_text: String,
    use_regex_all: bool,
    tags_only: bool,
}

impl MatchContext {
    pub fn build(document: &Document, use_regex_all: bool, tags_only: bool) -> Self {
        let tags = extract_tags(&document.description);
        let combined_text = normalize_text(&format!(
            "{} {} {}",
            document.title, document.url, document.description
        ));
        let field_text = normalize_text(&format!(
            "{}\n{}\n{}",
            document.title, document.url, document.description
        ));
        let tag_set = tags
            .iter()
            .map(|tag| normalize_term(tag))
            .filter(|tag| !tag.is_empty())
            .collect();

        Self {
            combined_text,
            field_text,
            tags_text: tags.join(" "),
            tag_set,
            use_regex_all,
            tags_only,
        }
    }

    /// Normalized `title url description`.
    pub fn combined_text(&self) -> &str {
        &self.combined_text
    }

    /// Normalized title, url and description on separate lines, so `^` and
    /// `$` anchor at each field in multi-line regex mode.
    pub fn field_text(&self) -> &str {
        &self.field_text
    }

    /// Normalized tags joined by single spaces, in description order.
    pub fn tags_text(&self) -> &str {
        &self.tags_text
    }

    /// Tests membership of a tag already passed through `normalize_term`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag_set.contains(tag)
    }

    pub fn tag_count(&self) -> usize {
        self.tag_set.len()
    }

    pub fn use_regex_all(&self) -> bool {
        self.use_regex_all
    }

    pub fn tags_only(&self) -> bool {
        self.tags_only
    }
}

/// Returns the text after a case-insensitive `tag:` prefix.
pub(crate) fn strip_tag_marker(s: &str) -> Option<&str> {
    s.get(..TAG_PREFIX.len())
        .filter(|prefix| prefix.eq_ignore_ascii_case(TAG_PREFIX))
        .map(|_| &s[TAG_PREFIX.len()..])
}

fn extract_tags(description: &str) -> Vec<String> {
    description
        .split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter_map(strip_tag_marker)
        .map(normalize_text)
        .filter(|tag| !tag.is_empty())
        .collect()
}
