//! Bookmark tree loading.
//!
//! Accepts three JSON shapes:
//! - a browser export with a `roots` object of named top-level folders,
//! - an array of nodes,
//! - a single root node.
//!
//! Nodes are flattened depth-first in document order. Every node with a
//! non-empty URL becomes a [`Document`]; folders contribute only their children.

use crate::types::Document;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod error {
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum BookmarkError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("JSON error: {0}")]
        Json(#[from] serde_json::Error),
    }
}

use error::BookmarkError;

/// A bookmark or folder. Browser exports name the title field `name`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookmarkNode {
    #[serde(alias = "name")]
    pub title: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub children: Vec<BookmarkNode>,
}

impl BookmarkNode {
    fn collect_into(&self, out: &mut Vec<Document>) {
        if let Some(url) = self.url.as_deref().filter(|url| !url.is_empty()) {
            out.push(Document {
                title: self.title.clone(),
                url: url.to_string(),
                description: self.description.clone().unwrap_or_default(),
            });
        }
        for child in &self.children {
            child.collect_into(out);
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BookmarkFile {
    Nodes(Vec<BookmarkNode>),
    /// Roots are kept in file order.
    Export {
        roots: serde_json::Map<String, serde_json::Value>,
    },
    Node(BookmarkNode),
}

impl BookmarkFile {
    /// Flattens the file into documents, preserving tree order.
    pub fn into_documents(self) -> Vec<Document> {
        match self {
            BookmarkFile::Nodes(nodes) => flatten(&nodes),
            BookmarkFile::Export { roots } => {
                let nodes: Vec<BookmarkNode> = roots
                    .into_iter()
                    .filter_map(|(name, value)| match serde_json::from_value(value) {
                        Ok(node) => Some(node),
                        Err(e) => {
                            tracing::debug!(root = %name, error = %e, "skipping non-folder root");
                            None
                        }
                    })
                    .collect();
                flatten(&nodes)
            }
            BookmarkFile::Node(node) => flatten(std::slice::from_ref(&node)),
        }
    }
}

/// Depth-first pre-order traversal yielding every node that carries a URL.
pub fn flatten(nodes: &[BookmarkNode]) -> Vec<Document> {
    let mut out = Vec::new();
    for node in nodes {
        node.collect_into(&mut out);
    }
    out
}

pub fn parse_bookmarks(json: &str) -> Result<Vec<Document>, BookmarkError> {
    let file: BookmarkFile = serde_json::from_str(json)?;
    Ok(file.into_documents())
}

pub fn load_bookmarks(path: &Path) -> Result<Vec<Document>, BookmarkError> {
    let content = std::fs::read_to_string(path)?;
    let documents = parse_bookmarks(&content)?;
    tracing::debug!(path = %path.display(), count = documents.len(), "loaded bookmarks");
    Ok(documents)
}

#[cfg(test)]
mod tests;
