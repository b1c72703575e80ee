//! Gallery image grid

use crate::types::GalleryItem;
use leptos::prelude::*;

/// Responsive grid of square tiles; the category badge fades in on hover
/// or keyboard focus.
#[component]
pub fn GalleryGrid(items: Vec<GalleryItem>) -> impl IntoView {
    view! {
        <section class="gallery-section">
            <div class="container">
                <div class="gallery-grid">
                    {items.into_iter().map(|item| view! { <GalleryTile item=item /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn GalleryTile(item: GalleryItem) -> impl IntoView {
    let GalleryItem { image, alt, category } = item;
    let badge = category.clone();

    view! {
        <figure class="gallery-tile" data-category=category tabindex="0">
            <img src=image alt=alt loading="lazy" />
            <figcaption class="tile-overlay">
                <div class="tile-caption">
                    <span class="badge">{badge}</span>
                </div>
            </figcaption>
        </figure>
    }
}
