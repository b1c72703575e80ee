//! Loading the site content file.
//!
//! The page itself never fails; loading is the only fallible step.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::types::{Service, SiteContent};

/// Errors raised while loading site content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content file could not be read.
    #[error("failed to read content file {}", path.display())]
    Read {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
    /// The content is not valid JSON or does not match the expected shape.
    #[error("invalid site content: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse site content from a JSON string.
///
/// ```rust
/// let json = r#"{
///     "business": { "name": "Oak Ridge Decks", "service": "Deck Building",
///                   "city": "Portland", "phone": "555-0142" },
///     "services": [
///         { "slug": "deck-staining", "title": "Deck Staining",
///           "shortDescription": "Refresh your deck.", "image": "/img/a.jpg" }
///     ]
/// }"#;
///
/// let content = gallery_leptos::content::from_json_str(json).unwrap();
/// assert_eq!(content.services[0].short_description, "Refresh your deck.");
/// assert!(content.gallery.is_none());
/// ```
pub fn from_json_str(json: &str) -> Result<SiteContent, ContentError> {
    let content: SiteContent = serde_json::from_str(json)?;
    debug!(
        services = content.services.len(),
        gallery = content.gallery.as_ref().map_or(0, Vec::len),
        "parsed site content"
    );
    Ok(content)
}

/// Read and parse a site content file.
pub fn load(path: &Path) -> Result<SiteContent, ContentError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_str(&raw)
}

/// Slugs used by more than one service, each reported once in first-seen order.
pub fn duplicate_slugs(services: &[Service]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for s in services {
        *counts.entry(s.slug.as_str()).or_default() += 1;
    }

    let mut dups = Vec::new();
    for s in services {
        if counts.get(s.slug.as_str()).copied().unwrap_or(0) > 1 && !dups.contains(&s.slug) {
            dups.push(s.slug.clone());
        }
    }
    dups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GalleryItem;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const FULL: &str = r#"{
        "business": {
            "name": "Oak Ridge Decks",
            "service": "Deck Building",
            "city": "Portland",
            "phone": "(503) 555-0142",
            "email": "hello@example.com"
        },
        "hero": { "headline": "ignored" },
        "services": [
            { "slug": "deck-staining", "title": "Deck Staining",
              "shortDescription": "Protect your deck.", "image": "/img/stain.jpg",
              "features": ["a", "b"] }
        ],
        "gallery": [
            { "image": "/img/g1.jpg", "alt": "Cedar deck", "category": "Decks" }
        ]
    }"#;

    #[test]
    fn parses_camel_case_and_ignores_unknown_fields() {
        let content = from_json_str(FULL).unwrap();
        assert_eq!(content.business.name, "Oak Ridge Decks");
        assert_eq!(content.services[0].short_description, "Protect your deck.");
        assert_eq!(
            content.gallery,
            Some(vec![GalleryItem {
                image: "/img/g1.jpg".into(),
                alt: "Cedar deck".into(),
                category: "Decks".into(),
            }])
        );
    }

    #[test]
    fn missing_and_null_collections_are_accepted() {
        let bare = r#"{ "business": { "name": "A", "service": "B", "city": "C", "phone": "1" } }"#;
        let content = from_json_str(bare).unwrap();
        assert!(content.services.is_empty());
        assert!(content.gallery.is_none());

        let null_gallery =
            r#"{ "business": { "name": "A", "service": "B", "city": "C", "phone": "1" }, "gallery": null }"#;
        assert!(from_json_str(null_gallery).unwrap().gallery.is_none());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
        assert!(err.to_string().starts_with("invalid site content"));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();

        let content = load(file.path()).unwrap();
        assert_eq!(content.services.len(), 1);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("content.json");

        let err = load(&missing).unwrap_err();
        assert!(matches!(err, ContentError::Read { .. }));
        assert!(err.to_string().contains("content.json"));
    }

    #[test]
    fn duplicate_slugs_reported_once_in_order() {
        let svc = |slug: &str| Service {
            slug: slug.into(),
            ..Default::default()
        };
        let services = vec![svc("b"), svc("a"), svc("b"), svc("c"), svc("a"), svc("b")];
        assert_eq!(duplicate_slugs(&services), vec!["b".to_string(), "a".to_string()]);
        assert!(duplicate_slugs(&[svc("x"), svc("y")]).is_empty());
    }
}
