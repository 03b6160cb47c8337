use std::fmt;

/// Boolean expression tree produced by the parser.
///
/// `Term` holds the raw, unnormalized text; normalization happens at match
/// time because regex terms must not be folded like literal terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Term(String),
    Not(Box<Expression>),
    And(Box<Expression>, Box<Expression>),
    Or(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn term(raw: impl Into<String>) -> Self {
        Expression::Term(raw.into())
    }

    pub fn not(inner: Expression) -> Self {
        Expression::Not(Box::new(inner))
    }

    pub fn and(left: Expression, right: Expression) -> Self {
        Expression::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expression, right: Expression) -> Self {
        Expression::Or(Box::new(left), Box::new(right))
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            Expression::Term(_) => 1,
            Expression::Not(inner) => 1 + inner.depth(),
            Expression::And(left, right) | Expression::Or(left, right) => {
                1 + left.depth().max(right.depth())
            }
        }
    }
}

/// Fully parenthesized rendering, e.g. `(a OR (b AND NOT c))`.
///
/// Terms that would not survive re-tokenizing as a single bare word are quoted.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Term(raw) => {
                let needs_quotes = raw.is_empty()
                    || raw.contains(|c: char| c.is_whitespace() || c == '(' || c == ')')
                    || ["and", "or", "not"]
                        .iter()
                        .any(|keyword| raw.eq_ignore_ascii_case(keyword));
                if needs_quotes {
                    write!(f, "\"{raw}\"")
                } else {
                    write!(f, "{raw}")
                }
            }
            Expression::Not(inner) => write!(f, "NOT {inner}"),
            Expression::And(left, right) => write!(f, "({left} AND {right})"),
            Expression::Or(left, right) => write!(f, "({left} OR {right})"),
        }
    }
}
