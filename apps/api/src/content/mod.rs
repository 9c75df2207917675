//! File-backed content documents.
//!
//! Every document lives under one directory and is addressed by file name.
//! JSON documents and rendered Markdown are cached after the first read; the
//! files are treated as immutable for the lifetime of the process.

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document '{0}' not found")]
    NotFound(String),

    #[error("failed to read content document '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },

    #[error("malformed content document '{name}': {source}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}

pub struct ContentStore {
    dir: PathBuf,
    json: RwLock<HashMap<String, Value>>,
    html: RwLock<HashMap<String, String>>,
}

impl ContentStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            json: RwLock::new(HashMap::new()),
            html: RwLock::new(HashMap::new()),
        }
    }

    /// Parses `name` as JSON into `T`. The parsed document is cached, so the file is read once.
    pub async fn load_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, ContentError> {
        let cached = self.json.read().await.get(name).cloned();
        let value = match cached {
            Some(value) => value,
            None => {
                let text = self.read(name).await?;
                let value: Value = serde_json::from_str(&text).map_err(|source| ContentError::Json {
                    name: name.to_string(),
                    source,
                })?;
                self.json
                    .write()
                    .await
                    .insert(name.to_string(), value.clone());
                debug!(document = name, "cached JSON document");
                value
            }
        };

        serde_json::from_value(value).map_err(|source| ContentError::Json {
            name: name.to_string(),
            source,
        })
    }

    /// Renders the Markdown document `name` to HTML. Cached.
    pub async fn load_markdown_html(&self, name: &str) -> Result<String, ContentError> {
        if let Some(html) = self.html.read().await.get(name) {
            return Ok(html.clone());
        }

        let markdown = self.load_markdown_raw(name).await?;
        let html = comrak::markdown_to_html(&markdown, &comrak::Options::default());
        self.html
            .write()
            .await
            .insert(name.to_string(), html.clone());
        debug!(document = name, "cached rendered Markdown");
        Ok(html)
    }

    /// The Markdown source of `name`, trimmed. Read from disk on every call.
    pub async fn load_markdown_raw(&self, name: &str) -> Result<String, ContentError> {
        Ok(self.read(name).await?.trim().to_string())
    }

    async fn read(&self, name: &str) -> Result<String, ContentError> {
        let path = self.dir.join(name);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => ContentError::NotFound(name.to_string()),
                _ => ContentError::Io {
                    name: name.to_string(),
                    source,
                },
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::{Contact, ProjectEntry};

    fn store_with(files: &[(&str, &str)]) -> (tempfile::TempDir, ContentStore) {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            std::fs::write(dir.path().join(name), body).unwrap();
        }
        let store = ContentStore::new(dir.path());
        (dir, store)
    }

    #[tokio::test]
    async fn test_load_json_parses_document() {
        let (_dir, store) = store_with(&[(
            "contact.json",
            r#"{"email": "a@b.c", "github": "github.com/a"}"#,
        )]);
        let contact: Contact = store.load_json("contact.json").await.unwrap();
        assert_eq!(contact.email, "a@b.c");
        assert_eq!(contact.linkedin, "");
    }

    #[tokio::test]
    async fn test_load_json_is_cached() {
        let (dir, store) = store_with(&[("projects.json", r#"[{"title": "One"}]"#)]);
        let first: Vec<ProjectEntry> = store.load_json("projects.json").await.unwrap();

        std::fs::write(dir.path().join("projects.json"), r#"[{"title": "Changed"}]"#).unwrap();
        let second: Vec<ProjectEntry> = store.load_json("projects.json").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(second[0].title, "One");
    }

    #[tokio::test]
    async fn test_missing_document_is_not_found() {
        let (_dir, store) = store_with(&[]);
        let err = store.load_json::<Contact>("contact.json").await.unwrap_err();
        assert!(matches!(err, ContentError::NotFound(name) if name == "contact.json"));
    }

    #[tokio::test]
    async fn test_malformed_json_reports_document() {
        let (_dir, store) = store_with(&[("contact.json", "{ not json")]);
        let err = store.load_json::<Contact>("contact.json").await.unwrap_err();
        assert!(matches!(err, ContentError::Json { ref name, .. } if name == "contact.json"));
    }

    #[tokio::test]
    async fn test_shape_mismatch_is_json_error() {
        let (_dir, store) = store_with(&[("projects.json", r#"{"title": "not a list"}"#)]);
        let err = store
            .load_json::<Vec<ProjectEntry>>("projects.json")
            .await
            .unwrap_err();
        assert!(matches!(err, ContentError::Json { .. }));
    }

    #[tokio::test]
    async fn test_markdown_rendered_to_html() {
        let (_dir, store) = store_with(&[("about_me.md", "\n# Hello\n\nSome *text*.\n\n")]);
        let html = store.load_markdown_html("about_me.md").await.unwrap();
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[tokio::test]
    async fn test_raw_markdown_trimmed_and_uncached() {
        let (dir, store) = store_with(&[("about_me.md", "  first version \n")]);
        assert_eq!(store.load_markdown_raw("about_me.md").await.unwrap(), "first version");

        std::fs::write(dir.path().join("about_me.md"), "second").unwrap();
        assert_eq!(store.load_markdown_raw("about_me.md").await.unwrap(), "second");
    }
}
