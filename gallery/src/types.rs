//! Content data types for the gallery page.
//!
//! These types mirror the site content file. They're designed to be:
//!
//! - **Serializable** - Load straight from the site's `content.json` via serde
//! - **Clone-friendly** - Components take owned props without borrowing issues
//! - **Default-able** - Build partial content with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use gallery_leptos::types::{Business, Service, SiteContent};
//!
//! let content = SiteContent {
//!     business: Business {
//!         name: "Oak Ridge Decks".into(),
//!         service: "Deck Building".into(),
//!         city: "Portland".into(),
//!         phone: "(503) 555-0142".into(),
//!     },
//!     services: vec![Service {
//!         slug: "deck-staining".into(),
//!         title: "Deck Staining".into(),
//!         short_description: "Protect and refresh your deck.".into(),
//!         image: "/images/deck-staining.jpg".into(),
//!     }],
//!     ..Default::default()
//! };
//! assert!(content.gallery.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Business details interpolated into page copy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    /// Trading name, e.g. "Oak Ridge Decks"
    pub name: String,
    /// Service category the business is known for, e.g. "Deck Building"
    pub service: String,
    /// City the business operates in
    pub city: String,
    /// Phone number as displayed; also used verbatim for the `tel:` link
    pub phone: String,
}

/// A service offered by the business.
///
/// Services are ordered; the first six feed the category filter bar and
/// the first three appear in the services preview.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Unique identifier, used in `/services/<slug>` links
    pub slug: String,
    /// Display title, e.g. "Deck Staining & Sealing"
    pub title: String,
    /// One-line teaser shown in the services preview
    #[serde(default)]
    pub short_description: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
}

/// A single tile in the gallery grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    /// Image URL
    pub image: String,
    /// Alt text for the image
    #[serde(default)]
    pub alt: String,
    /// Category label shown on the tile badge and used by the filter bar
    #[serde(default)]
    pub category: String,
}

/// The content source the page is rendered from.
///
/// Only the fields the gallery page reads are modelled; any other keys in
/// the site content file are ignored on deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Business info
    pub business: Business,
    /// Ordered service list
    #[serde(default)]
    pub services: Vec<Service>,
    /// Explicit gallery; `None` or empty means "generate from services"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<GalleryItem>>,
}

/// Document head metadata for the gallery route.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageMeta {
    /// `<title>` text
    pub title: String,
    /// `<meta name="description">` content
    pub description: String,
}
