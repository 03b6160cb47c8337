//! Plain-text rendering of search results and saved queries.

use marksift_core::types::{SavedQuery, SavedQueryId};
use marksift_search::{CollectedTerm, SearchHit, SearchOutcome};

pub const NO_MATCHES: &str = "No matches found.";
pub const EMPTY_QUERY: &str = "Please enter a search query.";

/// Renders a search outcome. Warnings are not included.
pub fn render_outcome(outcome: &SearchOutcome<'_>) -> String {
    if outcome.is_empty() {
        return NO_MATCHES.to_string();
    }

    let mut out = format!("{} matches:", outcome.len());
    for hit in &outcome.hits {
        out.push('\n');
        out.push_str(&render_hit(hit, &outcome.terms));
    }
    out
}

/// `title  url  terms: a ~b~ -c`
fn render_hit(hit: &SearchHit<'_>, terms: &[CollectedTerm]) -> String {
    let terms = terms
        .iter()
        .map(|term| render_term(term, hit.is_matched(term)))
        .collect::<Vec<_>>()
        .join(" ");
    format!("{}  {}  terms: {}", hit.document.title, hit.document.url, terms)
}

/// Unmatched terms are struck through with `~`. Negated terms get a `-`.
pub fn render_term(term: &CollectedTerm, matched: bool) -> String {
    let sign = if term.negated { "-" } else { "" };
    if matched {
        format!("{sign}{}", term.raw)
    } else {
        format!("{sign}~{}~", term.raw)
    }
}

pub fn render_saved(id: SavedQueryId, saved: &SavedQuery) -> String {
    let mut line = format!("{id}\t{}", saved.query);
    if saved.mode.tags_only {
        line.push_str("\t[tags]");
    }
    if saved.mode.use_regex {
        line.push_str("\t[regex]");
    }
    line
}
