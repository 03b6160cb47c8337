//! Boolean evaluation of an [`Expression`] against a document context.

use crate::context::MatchContext;
use crate::matcher::matches;
use crate::query::Expression;

/// Evaluates `expression` against `context`. A missing expression is false.
pub fn evaluate(expression: Option<&Expression>, context: &MatchContext) -> bool {
    expression.is_some_and(|expression| {
        evaluate_with(expression, &|term: &str| matches(term, context))
    })
}

/// Evaluates `expression` with a caller-supplied term predicate.
///
/// Both sides of `And` and `Or` are always evaluated.
pub fn evaluate_with<F>(expression: &Expression, is_match: &F) -> bool
where
    F: Fn(&str) -> bool,
{
    match expression {
        Expression::Term(raw) => is_match(raw),
        Expression::Not(inner) => !evaluate_with(inner, is_match),
        Expression::And(left, right) => {
            let left = evaluate_with(left, is_match);
            let right = evaluate_with(right, is_match);
            left & right
        }
        Expression::Or(left, right) => {
            let left = evaluate_with(left, is_match);
            let right = evaluate_with(right, is_match);
            left | right
        }
    }
}
