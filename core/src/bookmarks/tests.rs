use super::*;
use tempfile::TempDir;

mod common {
    use super::*;

    pub(super) fn titles(documents: &[Document]) -> Vec<&str> {
        documents.iter().map(|d| d.title.as_str()).collect()
    }

    pub(super) fn leaf(title: &str, url: &str) -> BookmarkNode {
        BookmarkNode {
            title: title.to_string(),
            url: Some(url.to_string()),
            ..Default::default()
        }
    }

    pub(super) fn folder(title: &str, children: Vec<BookmarkNode>) -> BookmarkNode {
        BookmarkNode {
            title: title.to_string(),
            children,
            ..Default::default()
        }
    }
}

mod flatten_nodes {
    use super::common::*;
    use super::*;

    #[test]
    fn test_flatten_preserves_preorder() {
        let tree = vec![
            folder(
                "dev",
                vec![
                    leaf("Rust Book", "https://doc.rust-lang.org/book"),
                    folder("go", vec![leaf("Go Tour", "https://go.dev/tour")]),
                    leaf("crates.io", "https://crates.io"),
                ],
            ),
            leaf("News", "https://news.ycombinator.com"),
        ];

        let documents = flatten(&tree);

        assert_eq!(
            titles(&documents),
            vec!["Rust Book", "Go Tour", "crates.io", "News"]
        );
    }

    #[test]
    fn test_flatten_skips_folders_and_empty_urls() {
        let mut empty = leaf("Empty", "");
        empty.children = vec![leaf("Inside", "https://inside.example")];
        let tree = vec![folder("root", vec![empty])];

        let documents = flatten(&tree);

        assert_eq!(titles(&documents), vec!["Inside"]);
    }

    #[test]
    fn test_missing_description_becomes_empty() {
        let documents = flatten(&[leaf("Plain", "https://plain.example")]);
        assert_eq!(documents[0].description, "");
    }
}

mod parse {
    use super::common::*;
    use super::*;

    #[test]
    fn test_parse_node_array() {
        let json = r#"[
            {"title": "Rust Book", "url": "https://rust-lang.org", "description": "tag:rust tag:lang"},
            {"title": "Go Tour", "url": "https://go.dev", "description": "tag:go"}
        ]"#;

        let documents = parse_bookmarks(json).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(
            documents[0],
            Document::new("Rust Book", "https://rust-lang.org", "tag:rust tag:lang")
        );
    }

    #[test]
    fn test_parse_single_element_array() {
        let json = r#"[{"title": "Only", "url": "https://only.example"}]"#;

        let documents = parse_bookmarks(json).unwrap();

        assert_eq!(titles(&documents), vec!["Only"]);
    }

    #[test]
    fn test_parse_single_root_node() {
        let json = r#"{"title": "root", "children": [
            {"title": "a", "url": "https://a.example"},
            {"title": "sub", "children": [{"title": "b", "url": "https://b.example"}]}
        ]}"#;

        let documents = parse_bookmarks(json).unwrap();

        assert_eq!(titles(&documents), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_browser_export() {
        let json = r#"{
            "checksum": "abc",
            "roots": {
                "bookmark_bar": {"name": "Bookmarks bar", "type": "folder", "children": [
                    {"name": "Rust", "type": "url", "url": "https://rust-lang.org"}
                ]},
                "other": {"name": "Other", "type": "folder", "children": [
                    {"name": "Go", "type": "url", "url": "https://go.dev"}
                ]},
                "sync_transaction_version": "1"
            },
            "version": 1
        }"#;

        let documents = parse_bookmarks(json).unwrap();

        assert_eq!(titles(&documents), vec!["Rust", "Go"]);
    }

    #[test]
    fn test_export_roots_keep_file_order() {
        let json = r#"{
            "roots": {
                "toolbar": {"name": "Toolbar", "children": [{"name": "Zig", "url": "https://ziglang.org"}]},
                "menu": {"name": "Menu", "children": [{"name": "Ada", "url": "https://ada-lang.io"}]},
                "archive": {"name": "Archive", "children": [{"name": "Go", "url": "https://go.dev"}]}
            }
        }"#;

        let documents = parse_bookmarks(json).unwrap();

        assert_eq!(titles(&documents), vec!["Zig", "Ada", "Go"]);
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_bookmarks("{not json");
        assert!(matches!(result, Err(error::BookmarkError::Json(_))));
    }
}

mod load {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bookmarks.json");
        std::fs::write(&path, r#"[{"title": "x", "url": "https://x.example"}]"#).unwrap();

        let documents = load_bookmarks(&path).unwrap();

        assert_eq!(documents.len(), 1);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = load_bookmarks(&temp.path().join("absent.json"));
        assert!(matches!(result, Err(error::BookmarkError::Io(_))));
    }
}
