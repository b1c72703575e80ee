//! Basic gallery page example.
//!
//! Run with: `cargo run -p gallery-leptos --example basic_gallery`

use gallery_leptos::types::{Business, Service, SiteContent};
use gallery_leptos::{render_gallery_page, PageOptions};

fn main() -> std::io::Result<()> {
    let content = SiteContent {
        business: Business {
            name: "Oak Ridge Decks".into(),
            service: "Deck Building".into(),
            city: "Portland".into(),
            phone: "(503) 555-0142".into(),
        },
        services: vec![
            Service {
                slug: "deck-staining".into(),
                title: "Deck Staining".into(),
                short_description: "Protect and refresh weathered wood.".into(),
                image: "https://images.example.com/deck-staining.jpg".into(),
            },
            Service {
                slug: "fence-repair".into(),
                title: "Fence Repair".into(),
                short_description: "Posts, pickets and gates made solid again.".into(),
                image: "https://images.example.com/fence-repair.jpg".into(),
            },
        ],
        // No gallery: one tile per service is generated
        gallery: None,
    };

    let html = render_gallery_page(&content, &PageOptions::default());

    let output_path = "gallery.html";
    std::fs::write(output_path, &html)?;

    println!("Gallery written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
    Ok(())
}
