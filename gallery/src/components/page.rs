//! The gallery page body - the five sections in display order.

use super::{CallToAction, CategoryFilter, GalleryGrid, GalleryHero, ServicesPreview};
use crate::view_data::GalleryView;
use leptos::prelude::*;

/// All page sections, without the surrounding document.
///
/// Used both by [`super::GalleryDocument`] and directly by
/// [`crate::render_gallery_fragment`] for hosts that supply their own layout.
#[component]
pub fn GalleryPage(page: GalleryView) -> impl IntoView {
    let GalleryView {
        hero_intro,
        categories,
        items,
        filterable,
        cta_copy,
        phone_href,
        phone_label,
        services_subtitle,
        preview,
        ..
    } = page;

    view! {
        <GalleryHero intro=hero_intro />
        <CategoryFilter categories=categories filterable=filterable />
        <GalleryGrid items=items />
        <CallToAction copy=cta_copy phone_href=phone_href phone_label=phone_label />
        <ServicesPreview subtitle=services_subtitle services=preview />
    }
}
