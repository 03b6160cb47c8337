//! Linear-scan boolean search over a document slice.

use crate::collect::{CollectedTerm, collect_terms};
use crate::config::SearchConfig;
use crate::context::MatchContext;
use crate::error::SearchError;
use crate::evaluate::evaluate_with;
use crate::matcher::CompiledTerm;
use crate::query::{Expression, Parser, Token, tokenize};
use crate::results::{QueryWarning, SearchHit, SearchOutcome};
use marksift_core::types::{Document, QueryText};
use std::collections::HashMap;

/// A parsed query with every distinct term compiled once.
#[derive(Debug, Clone)]
pub struct Query {
    expression: Option<Expression>,
    terms: Vec<CollectedTerm>,
    compiled: HashMap<String, CompiledTerm>,
    warnings: Vec<QueryWarning>,
    tags_only: bool,
    use_regex_all: bool,
}

impl Query {
    /// Tokenizes, limits, parses, and compiles `text`. Never fails: problems
    /// surface as [`Query::warnings`].
    pub fn compile(text: &QueryText, config: &SearchConfig) -> Self {
        let mut warnings = Vec::new();
        let tokens = limit_tokens(tokenize(text.as_str()), config.max_tokens, &mut warnings);

        let expression = Parser::new(&tokens, config.max_depth).parse();
        let terms = collect_terms(expression.as_ref());

        let mut compiled = HashMap::new();
        for term in &terms {
            if compiled.contains_key(&term.raw) {
                continue;
            }
            let term_matcher = match CompiledTerm::compile(&term.raw, config.use_regex_all) {
                Ok(term_matcher) => term_matcher,
                Err(e) => {
                    tracing::warn!(term = %term.raw, error = %e, "invalid regex term matches nothing");
                    warnings.push(QueryWarning::InvalidRegex {
                        term: term.raw.clone(),
                        reason: e.to_string(),
                    });
                    CompiledTerm::Never
                }
            };
            compiled.insert(term.raw.clone(), term_matcher);
        }

        Self {
            expression,
            terms,
            compiled,
            warnings,
            tags_only: config.tags_only,
            use_regex_all: config.use_regex_all,
        }
    }

    /// The parsed tree, or `None` if no term could be recovered.
    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    pub fn terms(&self) -> &[CollectedTerm] {
        &self.terms
    }

    pub fn warnings(&self) -> &[QueryWarning] {
        &self.warnings
    }

    /// Builds the match context for `document` with this query's flags.
    pub fn context_for(&self, document: &Document) -> MatchContext {
        MatchContext::build(document, self.use_regex_all, self.tags_only)
    }

    pub fn is_match(&self, context: &MatchContext) -> bool {
        self.expression.as_ref().is_some_and(|expression| {
            evaluate_with(expression, &|term: &str| self.term_matches(term, context))
        })
    }

    /// Query terms that match `context`, in query order.
    pub fn matched_terms(&self, context: &MatchContext) -> Vec<CollectedTerm> {
        self.terms
            .iter()
            .filter(|term| self.term_matches(&term.raw, context))
            .cloned()
            .collect()
    }

    /// Evaluates every document in order and collects the hits.
    pub fn run<'a>(&self, documents: &'a [Document]) -> SearchOutcome<'a> {
        let hits = documents
            .iter()
            .filter_map(|document| {
                let context = self.context_for(document);
                self.is_match(&context).then(|| SearchHit {
                    document,
                    matched_terms: self.matched_terms(&context),
                })
            })
            .collect();

        SearchOutcome {
            hits,
            terms: self.terms.clone(),
            warnings: self.warnings.clone(),
            scanned: documents.len(),
        }
    }

    fn term_matches(&self, term: &str, context: &MatchContext) -> bool {
        self.compiled
            .get(term)
            .is_some_and(|compiled| compiled.matches(context))
    }
}

fn limit_tokens(
    mut tokens: Vec<Token>,
    max_tokens: usize,
    warnings: &mut Vec<QueryWarning>,
) -> Vec<Token> {
    if tokens.len() > max_tokens {
        let dropped = tokens.len() - max_tokens;
        tracing::debug!(kept = max_tokens, dropped, "query truncated");
        tokens.truncate(max_tokens);
        warnings.push(QueryWarning::TruncatedQuery {
            kept: max_tokens,
            dropped,
        });
    }
    tokens
}

/// Boolean search engine. Holds only configuration: every search is a full
/// scan over the documents it is given.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    config: SearchConfig,
}

impl SearchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Runs `query` over `documents`.
    ///
    /// Returns [`SearchError::EmptyQuery`] without scanning when the query is
    /// blank.
    pub fn search<'a>(
        &self,
        query: &str,
        documents: &'a [Document],
    ) -> Result<SearchOutcome<'a>, SearchError> {
        if query.trim().is_empty() {
            return Err(SearchError::EmptyQuery);
        }
        let text = QueryText::try_new(query)?;
        let compiled = Query::compile(&text, &self.config);
        let outcome = compiled.run(documents);

        tracing::debug!(
            query = %text,
            scanned = outcome.scanned,
            hits = outcome.hits.len(),
            terms = outcome.terms.len(),
            warnings = outcome.warnings.len(),
            "search finished"
        );
        Ok(outcome)
    }
}

/// Runs `query` over `documents` with `config`.
pub fn search<'a>(
    query: &str,
    documents: &'a [Document],
    config: &SearchConfig,
) -> Result<SearchOutcome<'a>, SearchError> {
    SearchEngine::new(*config).search(query, documents)
}
