//! Leptos UI components for rendering the gallery page.
//!
//! Each component is a Leptos `#[component]` function taking owned,
//! already-shaped data from [`crate::view_data::GalleryView`]. None of them
//! compute anything beyond layout.
//!
//! # Component Hierarchy
//!
//! ```text
//! GalleryDocument
//! └── GalleryPage
//!     ├── GalleryHero        (breadcrumb, heading, intro)
//!     ├── CategoryFilter     ("All" + derived categories)
//!     ├── GalleryGrid
//!     │   └── GalleryTile    (image, hover badge)
//!     ├── CallToAction       (/contact, tel: link)
//!     └── ServicesPreview    (/services/<slug> cards)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_gallery_page`], but
//! can be composed directly inside a host layout:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use gallery_leptos::components::{GalleryGrid, ServicesPreview};
//!
//! view! {
//!     <GalleryGrid items=view.items />
//!     <ServicesPreview subtitle=view.services_subtitle services=view.preview />
//! }
//! ```

mod cta;
mod document;
mod filter_bar;
mod grid;
mod hero;
mod icons;
mod page;
mod services_preview;

pub use cta::{CallToAction, CONTACT_HREF};
pub use document::GalleryDocument;
pub use filter_bar::{CategoryFilter, FILTER_ALL};
pub use grid::GalleryGrid;
pub use hero::GalleryHero;
pub use icons::*;
pub use page::GalleryPage;
pub use services_preview::ServicesPreview;
