//! Flattening an expression into its terms for result annotation.

use crate::query::{Expression, TermPattern};

/// A query term with its position-independent display attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedTerm {
    pub raw: String,
    pub is_regex: bool,
    /// True when an odd number of `NOT`s sit between the root and this term.
    pub negated: bool,
}

/// Lists every term of `expression` in pre-order, left before right.
///
/// The regex flag ignores the regex-all override: it reflects only the term's own marker.
pub fn collect_terms(expression: Option<&Expression>) -> Vec<CollectedTerm> {
    let mut terms = Vec::new();
    if let Some(expression) = expression {
        collect_into(expression, false, &mut terms);
    }
    terms
}

fn collect_into(expression: &Expression, negated: bool, terms: &mut Vec<CollectedTerm>) {
    match expression {
        Expression::Term(raw) => terms.push(CollectedTerm {
            raw: raw.clone(),
            is_regex: TermPattern::classify(raw).is_regex(),
            negated,
        }),
        Expression::Not(inner) => collect_into(inner, !negated, terms),
        Expression::And(left, right) | Expression::Or(left, right) => {
            collect_into(left, negated, terms);
            collect_into(right, negated, terms);
        }
    }
}
