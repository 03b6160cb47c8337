//! Query language: tokens, expression tree, and parser.

mod expression;
mod parser;
mod term;
mod token;

pub use expression::Expression;
pub use parser::{DEFAULT_MAX_DEPTH, Parser, parse};
pub use term::TermPattern;
pub use token::{Token, tokenize};
