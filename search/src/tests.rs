use super::*;
use common::{docs, go_tour, rust_book, titles, with_config};
use marksift_core::types::{Document, QueryText};

mod common {
    use super::*;

    pub(super) fn rust_book() -> Document {
        Document::new("Rust Book", "https://rust-lang.org", "tag:rust tag:lang")
    }

    pub(super) fn go_tour() -> Document {
        Document::new("Go Tour", "https://go.dev", "tag:go")
    }

    pub(super) fn docs() -> Vec<Document> {
        vec![
            rust_book(),
            go_tour(),
            Document::new("Legacy Wiki", "http://wiki.example.org", "old notes tag:archive"),
            Document::new("Café Guide", "https://cafe.example", "tag:food, tag:Paris; espresso"),
        ]
    }

    pub(super) fn with_config(tags_only: bool, use_regex_all: bool) -> SearchConfig {
        SearchConfig {
            tags_only,
            use_regex_all,
            ..SearchConfig::default()
        }
    }

    pub(super) fn titles(outcome: &SearchOutcome<'_>) -> Vec<String> {
        outcome.hits.iter().map(|hit| hit.document.title.clone()).collect()
    }
}

mod search_fn {
    use super::*;

    #[test]
    fn test_tags_only_negation() {
        let documents = vec![rust_book(), go_tour()];

        let outcome = search("NOT tag:go", &documents, &with_config(true, false)).unwrap();

        assert_eq!(titles(&outcome), ["Rust Book"]);
        assert_eq!(outcome.scanned, 2);
        assert_eq!(outcome.hits[0].document, &documents[0]);
    }

    #[test]
    fn test_empty_query_scans_nothing() {
        let documents = docs();

        assert!(matches!(
            search("", &documents, &SearchConfig::default()),
            Err(SearchError::EmptyQuery)
        ));
        assert!(matches!(
            search("  \t ", &documents, &SearchConfig::default()),
            Err(SearchError::EmptyQuery)
        ));
    }

    #[test]
    fn test_overlong_query_is_rejected() {
        let documents = docs();
        let query = "a".repeat(marksift_core::types::MAX_QUERY_LENGTH + 1);
        assert!(matches!(
            search(&query, &documents, &SearchConfig::default()),
            Err(SearchError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_hits_keep_input_order() {
        let documents = docs();
        let outcome = search("tag OR re:example", &documents, &SearchConfig::default()).unwrap();
        assert_eq!(titles(&outcome), ["Rust Book", "Go Tour", "Legacy Wiki", "Café Guide"]);
    }

    #[test]
    fn test_regex_url() {
        let documents = docs();
        let outcome = search("re:^http://", &documents, &SearchConfig::default()).unwrap();
        assert_eq!(titles(&outcome), ["Legacy Wiki"]);

        let outcome = search("/^https://go\\./", &documents, &SearchConfig::default()).unwrap();
        assert_eq!(titles(&outcome), ["Go Tour"]);
    }

    #[test]
    fn test_regex_group_is_one_term() {
        let documents = vec![
            Document::new("bar baz", "https://b.example", ""),
            Document::new("qux", "https://q.example", ""),
        ];

        let outcome = search("re:^(foo|bar)", &documents, &SearchConfig::default()).unwrap();

        assert_eq!(titles(&outcome), ["bar baz"]);
        assert_eq!(outcome.terms.len(), 1);
        assert!(outcome.warnings.is_empty());
    }

    #[test]
    fn test_symbol_tags_in_tags_only_mode() {
        let documents = vec![
            Document::new("C++ Reference", "https://cppreference.com", "tag:c++"),
            Document::new("Rust Book", "https://rust-lang.org", "tag:rust"),
        ];

        let outcome = search("tag:c++", &documents, &with_config(true, false)).unwrap();
        assert_eq!(titles(&outcome), ["C++ Reference"]);
    }

    #[test]
    fn test_invalid_regex_warns_and_matches_nothing() {
        let documents = docs();
        let outcome = search("re:(", &documents, &SearchConfig::default()).unwrap();

        assert!(outcome.is_empty());
        assert_eq!(outcome.scanned, 4);
        assert!(matches!(
            outcome.warnings.as_slice(),
            [QueryWarning::InvalidRegex { term, .. }] if term == "re:("
        ));
    }

    #[test]
    fn test_invalid_regex_under_not_matches_everything() {
        let documents = docs();
        let outcome = search("NOT re:(", &documents, &SearchConfig::default()).unwrap();
        assert_eq!(outcome.len(), 4);
    }

    #[test]
    fn test_accent_insensitive() {
        let documents = docs();
        let outcome = search("cafe", &documents, &SearchConfig::default()).unwrap();
        assert_eq!(titles(&outcome), ["Café Guide"]);

        let outcome = search("paris", &documents, &with_config(true, false)).unwrap();
        assert_eq!(titles(&outcome), ["Café Guide"]);
    }

    #[test]
    fn test_malformed_query_does_not_fail() {
        let documents = docs();
        for query in ["(a AND", "AND", "))((", "NOT", "a OR OR b", "\"", "\"\""] {
            let outcome = search(query, &documents, &SearchConfig::default()).unwrap();
            assert_eq!(outcome.scanned, 4, "{query}");
        }
    }

    #[test]
    fn test_operator_only_query_matches_nothing() {
        let documents = docs();
        let outcome = search("AND OR NOT", &documents, &SearchConfig::default()).unwrap();
        assert!(outcome.is_empty());
        assert!(outcome.terms.is_empty());
    }
}

mod matched_terms {
    use super::*;

    #[test]
    fn test_matched_terms_per_hit() {
        let documents = docs();
        let outcome = search("rust OR go OR python", &documents, &SearchConfig::default()).unwrap();

        assert_eq!(outcome.terms.len(), 3);
        assert_eq!(titles(&outcome), ["Rust Book", "Go Tour"]);

        let rust: Vec<_> = outcome.hits[0].matched_terms.iter().map(|t| t.raw.as_str()).collect();
        let go: Vec<_> = outcome.hits[1].matched_terms.iter().map(|t| t.raw.as_str()).collect();
        assert_eq!(rust, ["rust"]);
        assert_eq!(go, ["go"]);
        assert!(!outcome.hits[0].is_matched(&outcome.terms[2]));
    }

    #[test]
    fn test_negated_terms_are_reported_by_presence() {
        let documents = docs();
        let outcome = search("tour NOT rust", &documents, &SearchConfig::default()).unwrap();

        assert_eq!(titles(&outcome), ["Go Tour"]);
        let hit = &outcome.hits[0];
        assert!(hit.is_matched(&outcome.terms[0]));
        assert!(!hit.is_matched(&outcome.terms[1]));
        assert!(outcome.terms[1].negated);
    }
}

mod properties {
    use super::*;

    fn hit_titles(query: &str, config: &SearchConfig) -> Vec<String> {
        let documents = docs();
        titles(&search(query, &documents, config).unwrap())
    }

    #[test]
    fn test_deterministic() {
        let config = SearchConfig::default();
        for query in ["rust OR go", "NOT tag:go", "re:^g", "(a AND"] {
            assert_eq!(hit_titles(query, &config), hit_titles(query, &config));
        }
    }

    #[test]
    fn test_double_negation() {
        let documents = docs();
        let config = SearchConfig::default();
        assert_eq!(hit_titles("NOT NOT go", &config), hit_titles("go", &config));

        let outcome = search("NOT NOT go", &documents, &config).unwrap();
        assert!(outcome.terms.iter().all(|term| !term.negated));
    }

    #[test]
    fn test_implicit_and() {
        let config = SearchConfig::default();
        assert_eq!(hit_titles("rust book", &config), hit_titles("rust AND book", &config));
        assert_eq!(hit_titles("tag lang", &config), ["Rust Book"]);
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let config = SearchConfig::default();
        assert_eq!(
            hit_titles("espresso OR go AND rust", &config),
            hit_titles("espresso OR (go AND rust)", &config)
        );
        assert_eq!(hit_titles("espresso OR go AND rust", &config), ["Café Guide"]);
    }

    #[test]
    fn test_quoted_keyword_is_a_term() {
        let documents = vec![Document::new("Salt and Pepper", "https://s.example", "")];
        let outcome = search("\"AND\"", &documents, &SearchConfig::default()).unwrap();

        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome.terms[0].raw, "AND");
    }

    #[test]
    fn test_tags_only_scoping() {
        let documents = vec![Document::new("Notes", "https://n.example", "tag:go tag:rust notes here")];

        let tags = search("notes", &documents, &with_config(true, false)).unwrap();
        let full = search("notes", &documents, &with_config(false, false)).unwrap();
        assert!(tags.is_empty());
        assert_eq!(full.len(), 1);

        let tags = search("go", &documents, &with_config(true, false)).unwrap();
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_regex_all() {
        let documents = docs();
        let outcome = search("^go", &documents, &with_config(false, true)).unwrap();
        assert_eq!(titles(&outcome), ["Go Tour"]);
        assert!(!outcome.terms[0].is_regex);
    }
}

mod limits {
    use super::*;

    #[test]
    fn test_token_limit_truncates_and_warns() {
        let documents = docs();
        let config = SearchConfig {
            max_tokens: 2,
            ..SearchConfig::default()
        };

        let outcome = search("rust book python", &documents, &config).unwrap();

        assert_eq!(titles(&outcome), ["Rust Book"]);
        assert_eq!(outcome.terms.len(), 2);
        assert_eq!(
            outcome.warnings,
            [QueryWarning::TruncatedQuery { kept: 2, dropped: 1 }]
        );
    }

    #[test]
    fn test_deep_nesting_is_flattened() {
        let documents = docs();
        let depth = 2_000;
        let query = format!("{}rust{}", "(".repeat(depth), ")".repeat(depth));
        let config = SearchConfig {
            max_tokens: depth * 2 + 1,
            ..SearchConfig::default()
        };

        let outcome = search(&query, &documents, &config).unwrap();
        assert_eq!(titles(&outcome), ["Rust Book"]);
    }

    #[test]
    fn test_long_not_chain_collapses_by_parity() {
        let config = SearchConfig {
            max_tokens: 1_000,
            ..SearchConfig::default()
        };
        let query = format!("{}go", "NOT ".repeat(501));
        let text = QueryText::try_new(query.as_str()).unwrap();

        let compiled = Query::compile(&text, &config);
        assert!(compiled.expression().unwrap().depth() <= DEFAULT_MAX_DEPTH + 2);

        let documents = [go_tour(), rust_book()];
        let outcome = compiled.run(&documents);
        assert_eq!(titles(&outcome), ["Rust Book"]);
    }
}

mod search_engine {
    use super::*;

    #[test]
    fn test_engine_reuses_config() {
        let engine = SearchEngine::new(with_config(true, false));
        let documents = docs();

        assert!(engine.config().tags_only);
        let outcome = engine.search("archive OR food", &documents).unwrap();
        assert_eq!(titles(&outcome), ["Legacy Wiki", "Café Guide"]);
    }

    #[test]
    fn test_compiled_query_over_several_sources() {
        let text = QueryText::try_new("tag:go").unwrap();
        let query = Query::compile(&text, &with_config(true, false));

        assert_eq!(query.run(&[rust_book()]).len(), 0);
        assert_eq!(query.run(&[go_tour(), go_tour()]).len(), 2);
        assert!(query.warnings().is_empty());
    }

    #[test]
    fn test_context_for_uses_query_flags() {
        let text = QueryText::try_new("rust").unwrap();
        let query = Query::compile(&text, &with_config(true, true));
        let context = query.context_for(&rust_book());

        assert!(context.tags_only());
        assert!(context.use_regex_all());
        assert!(query.is_match(&context));
        assert_eq!(query.matched_terms(&context).len(), 1);
    }
}
