//! # gallery-leptos
//!
//! Leptos SSR renderer for a local service business "gallery" page.
//!
//! The page is built from a single content object (business info, services,
//! optional gallery) and contains, in order:
//!
//! 1. a hero banner with breadcrumb and intro copy,
//! 2. a category filter bar ("All" plus labels derived from service titles),
//! 3. an image grid (configured gallery, or one tile per service),
//! 4. a call-to-action block with contact and `tel:` links,
//! 5. a preview of the first three services.
//!
//! ## Quick Start
//!
//! ```rust
//! use gallery_leptos::{render_gallery_page, PageOptions};
//! use gallery_leptos::types::{Business, Service, SiteContent};
//!
//! let content = SiteContent {
//!     business: Business {
//!         name: "Oak Ridge Decks".into(),
//!         service: "Deck Building".into(),
//!         city: "Portland".into(),
//!         phone: "555-0142".into(),
//!     },
//!     services: vec![Service {
//!         slug: "deck-staining".into(),
//!         title: "Deck Staining".into(),
//!         ..Default::default()
//!     }],
//!     gallery: None,
//! };
//!
//! let html = render_gallery_page(&content, &PageOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("/services/deck-staining"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Content data structures (serde)
//! - [`content`] - Loading content from JSON
//! - [`view_data`] - Derived view data: categories, gallery fallback, copy
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! Rendering is pure: no reactive runtime, no hydration, no I/O. The same
//! content always yields the same HTML.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
pub mod styles;
pub mod types;
pub mod view_data;

use components::{GalleryDocument, GalleryPage};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use tracing::debug;
use types::SiteContent;
use view_data::GalleryView;

/// Rendering options for the full document.
///
/// # Example
///
/// ```rust
/// use gallery_leptos::PageOptions;
///
/// // Use the host's stylesheet instead of the bundled one
/// let options = PageOptions {
///     inline_styles: false,
///     stylesheet_href: Some("/assets/site.css".into()),
///     ..Default::default()
/// };
/// assert!(options.filter_script);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageOptions {
    /// `lang` attribute of the `<html>` element
    pub lang: String,
    /// Embed [`styles::GALLERY_CSS`] in a `<style>` element
    pub inline_styles: bool,
    /// Optional external stylesheet linked from `<head>`
    pub stylesheet_href: Option<String>,
    /// Embed the category filter script; without it the page is fully static
    pub filter_script: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            inline_styles: true,
            stylesheet_href: None,
            filter_script: true,
        }
    }
}

/// Render the gallery page as a complete HTML document.
///
/// Never fails: empty services and a missing gallery simply produce empty
/// sections.
pub fn render_gallery_page(content: &SiteContent, options: &PageOptions) -> String {
    let page = GalleryView::from_content(content);
    debug!(
        tiles = page.items.len(),
        categories = page.categories.len(),
        preview = page.preview.len(),
        "rendering gallery page"
    );

    let doc = view! {
        <GalleryDocument page=page options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render only the page sections, for embedding in a host-provided layout.
///
/// No `<html>`, `<head>`, styles or scripts are emitted.
pub fn render_gallery_fragment(content: &SiteContent) -> String {
    let page = GalleryView::from_content(content);
    debug!(tiles = page.items.len(), "rendering gallery fragment");

    view! { <GalleryPage page=page /> }.to_html()
}
