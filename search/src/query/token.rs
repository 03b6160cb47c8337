/// A lexical unit of the query language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    LParen,
    RParen,
    And,
    Or,
    Not,
    /// Bare word or quoted phrase, verbatim and without quotes.
    Term(String),
}

impl Token {
    /// Returns true if this token may begin a factor, and so continues an
    /// implicit conjunction when it follows another factor.
    pub fn starts_factor(&self) -> bool {
        matches!(self, Token::Term(_) | Token::Not | Token::LParen)
    }
}

/// Splits a query into tokens. Never fails; malformed quoting degrades to
/// bare words.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = input.trim_start();

    while let Some(ch) = rest.chars().next() {
        let consumed = match ch {
            '(' => {
                tokens.push(Token::LParen);
                1
            }
            ')' => {
                tokens.push(Token::RParen);
                1
            }
            _ => match quoted_phrase(rest) {
                Some(phrase) => {
                    tokens.push(Token::Term(phrase.to_string()));
                    phrase.len() + 2
                }
                None => {
                    let end = if starts_regex(rest) {
                        rest.find(char::is_whitespace)
                    } else {
                        rest.find(|c: char| c.is_whitespace() || c == '(' || c == ')')
                    }
                    .unwrap_or(rest.len());
                    tokens.push(word_token(&rest[..end]));
                    end
                }
            },
        };
        rest = rest[consumed..].trim_start();
    }

    tokens
}

/// Returns the content of a closed, non-empty `"..."` run at the start of `rest`.
fn quoted_phrase(rest: &str) -> Option<&str> {
    let body = rest.strip_prefix('"')?;
    let close = body.find('"')?;
    (close > 0).then(|| &body[..close])
}

/// A `re:` or `/` term runs to the next whitespace, parentheses included.
fn starts_regex(rest: &str) -> bool {
    rest.starts_with('/')
        || rest
            .get(..3)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("re:"))
}

fn word_token(word: &str) -> Token {
    if word.eq_ignore_ascii_case("and") {
        Token::And
    } else if word.eq_ignore_ascii_case("or") {
        Token::Or
    } else if word.eq_ignore_ascii_case("not") {
        Token::Not
    } else {
        Token::Term(word.to_string())
    }
}
