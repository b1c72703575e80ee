//! Hero banner with breadcrumb

use leptos::prelude::*;

/// Dark hero banner: breadcrumb back to `/`, page heading and intro copy.
#[component]
pub fn GalleryHero(intro: String) -> impl IntoView {
    view! {
        <section class="gallery-hero">
            <div class="container">
                <nav class="breadcrumb" aria-label="Breadcrumb">
                    <a href="/">"Home"</a>
                    <span>"/"</span>
                    <span class="current">"Gallery"</span>
                </nav>

                <div class="hero-copy">
                    <h1 class="hero-title">"Our Work"</h1>
                    <p class="hero-intro">{intro}</p>
                </div>
            </div>
        </section>
    }
}
