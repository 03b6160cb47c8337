//! Recursive-descent parser.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! or      := and (OR and)*
//! and     := not (AND not | not)*      adjacency is an implicit AND
//! not     := NOT not | primary
//! primary := '(' or ')' | TERM
//! ```
//!
//! The parser never fails. Stray operators and unmatched `)` are discarded,
//! dangling operators keep their left operand, and an unclosed `(` is closed
//! at the end of input. Past `max_depth` levels of parentheses and `NOT`,
//! further `(` are ignored along with their `)` and `NOT` chains collapse by
//! parity.

use super::expression::Expression;
use super::token::Token;

pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Parses tokens with the default depth limit.
///
/// Returns `None` if no term survives recovery (e.g. empty input or only
/// operators).
pub fn parse(tokens: &[Token]) -> Option<Expression> {
    Parser::new(tokens, DEFAULT_MAX_DEPTH).parse()
}

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    max_depth: usize,
    /// Groups currently being parsed.
    open_groups: usize,
    /// `(` skipped past the depth limit whose `)` has not been seen yet.
    flattened_groups: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token], max_depth: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            max_depth: max_depth.max(1),
            open_groups: 0,
            flattened_groups: 0,
        }
    }

    pub fn parse(mut self) -> Option<Expression> {
        let mut root = None;
        while !self.is_end() {
            let start = self.pos;
            let next = self.parse_or(0);
            root = combine(root, next, Expression::and);
            if self.pos == start {
                self.pos += 1;
            }
        }
        root
    }

    fn parse_or(&mut self, depth: usize) -> Option<Expression> {
        let mut node = self.parse_and(depth);
        while self.eat(&Token::Or) {
            let right = self.parse_and(depth);
            node = combine(node, right, Expression::or);
        }
        node
    }

    fn parse_and(&mut self, depth: usize) -> Option<Expression> {
        let mut node = self.parse_not(depth);
        loop {
            if self.eat(&Token::And) || self.peek().is_some_and(Token::starts_factor) {
                let right = self.parse_not(depth);
                node = combine(node, right, Expression::and);
            } else if !self.eat_unowned_rparen() {
                break;
            }
        }
        node
    }

    fn parse_not(&mut self, depth: usize) -> Option<Expression> {
        if depth >= self.max_depth {
            return self.parse_flattened();
        }
        if self.eat(&Token::Not) {
            return self.parse_not(depth + 1).map(Expression::not);
        }
        self.parse_primary(depth)
    }

    fn parse_primary(&mut self, depth: usize) -> Option<Expression> {
        match self.peek()? {
            Token::LParen => {
                self.pos += 1;
                self.open_groups += 1;
                let inner = self.parse_or(depth + 1);
                self.open_groups -= 1;
                if !self.eat(&Token::RParen) {
                    tracing::debug!("closing unterminated group at end of query");
                }
                inner
            }
            _ => self.parse_leaf(),
        }
    }

    /// Parses a factor past the depth limit without recursing.
    fn parse_flattened(&mut self) -> Option<Expression> {
        let mut negate = false;
        loop {
            if self.eat(&Token::LParen) {
                self.flattened_groups += 1;
            } else if self.eat(&Token::Not) {
                negate = !negate;
            } else {
                break;
            }
        }
        tracing::debug!(
            max_depth = self.max_depth,
            "query nesting past depth limit flattened"
        );
        let leaf = self.parse_leaf();
        if negate {
            leaf.map(Expression::not)
        } else {
            leaf
        }
    }

    /// Parses a term, discarding a stray operator or unmatched `)` in its place.
    fn parse_leaf(&mut self) -> Option<Expression> {
        match self.peek()? {
            Token::Term(raw) => {
                let term = Expression::term(raw.as_str());
                self.pos += 1;
                Some(term)
            }
            Token::RParen => {
                // Inside a group the `)` is left for the group to close.
                self.eat_unowned_rparen();
                None
            }
            Token::And | Token::Or => {
                tracing::debug!(position = self.pos, "discarding stray operator");
                self.pos += 1;
                None
            }
            Token::LParen | Token::Not => None,
        }
    }

    /// Consumes a `)` that no open group owns: the close of a flattened group
    /// or an unmatched `)` at top level.
    fn eat_unowned_rparen(&mut self) -> bool {
        if self.peek() != Some(&Token::RParen) {
            return false;
        }
        if self.flattened_groups > 0 {
            self.flattened_groups -= 1;
        } else if self.open_groups > 0 {
            return false;
        } else {
            tracing::debug!(position = self.pos, "ignoring unmatched ')'");
        }
        self.pos += 1;
        true
    }

    fn eat(&mut self, expected: &Token) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn is_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

fn combine(
    left: Option<Expression>,
    right: Option<Expression>,
    join: fn(Expression, Expression) -> Expression,
) -> Option<Expression> {
    match (left, right) {
        (Some(left), Some(right)) => Some(join(left, right)),
        (left, None) => left,
        (None, right) => right,
    }
}
