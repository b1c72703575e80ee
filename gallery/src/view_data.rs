//! Derived view data - everything the components need, computed up front.
//!
//! Components stay dumb: they receive owned strings and lists and only lay
//! them out. All shaping (category labels, gallery fallback, slicing for the
//! filter bar and preview, copy interpolation) happens here, so it can be
//! tested without going through HTML.

use tracing::debug;

use crate::types::{Business, GalleryItem, PageMeta, Service, SiteContent};

/// Maximum number of derived categories in the filter bar (excluding "All").
pub const MAX_CATEGORIES: usize = 6;

/// Maximum number of services shown in the services preview.
pub const MAX_PREVIEW_SERVICES: usize = 3;

/// Number of words a service title is reduced to for its category label.
const CATEGORY_WORDS: usize = 2;

/// Category label for a service title: its first two space-separated words.
///
/// Splits on single spaces only, so runs of spaces yield empty words the
/// same way a plain split would.
///
/// ```rust
/// use gallery_leptos::view_data::category_label;
///
/// assert_eq!(category_label("Deck Staining & Sealing"), "Deck Staining");
/// assert_eq!(category_label("Gutters"), "Gutters");
/// assert_eq!(category_label(""), "");
/// ```
pub fn category_label(title: &str) -> String {
    title
        .split(' ')
        .take(CATEGORY_WORDS)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Filter bar categories: labels of the first six services, in order.
///
/// Duplicate labels are kept; two services starting with the same two words
/// produce two buttons.
pub fn derive_categories(services: &[Service]) -> Vec<String> {
    services
        .iter()
        .take(MAX_CATEGORIES)
        .map(|s| category_label(&s.title))
        .collect()
}

/// One generated gallery tile per service.
pub fn generate_gallery(services: &[Service]) -> Vec<GalleryItem> {
    services
        .iter()
        .map(|s| GalleryItem {
            image: s.image.clone(),
            alt: s.title.clone(),
            category: category_label(&s.title),
        })
        .collect()
}

/// Gallery tiles to render: the configured gallery when it has items,
/// otherwise one generated tile per service.
pub fn gallery_items(content: &SiteContent) -> Vec<GalleryItem> {
    match content.gallery.as_deref() {
        Some(items) if !items.is_empty() => items.to_vec(),
        _ => {
            debug!(
                services = content.services.len(),
                "no gallery configured, generating tiles from services"
            );
            generate_gallery(&content.services)
        }
    }
}

/// Whether the filter bar can drive the grid: every derived category has
/// at least one tile carrying that exact label.
///
/// Always true for generated tiles. A configured gallery with its own
/// labels usually fails this, and filtering it would empty the grid.
pub fn is_filterable(categories: &[String], items: &[GalleryItem]) -> bool {
    categories
        .iter()
        .all(|c| items.iter().any(|item| &item.category == c))
}

/// Services shown in the preview block (at most three).
pub fn preview_services(services: &[Service]) -> &[Service] {
    &services[..services.len().min(MAX_PREVIEW_SERVICES)]
}

/// `<title>` and description for the gallery route.
pub fn page_meta(business: &Business) -> PageMeta {
    PageMeta {
        title: format!("Gallery | {}", business.name),
        description: format!(
            "View our portfolio of completed {} projects. See examples of our professional work from {} in {}.",
            business.service.to_lowercase(),
            business.name,
            business.city
        ),
    }
}

/// Complete derived data for one render of the gallery page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryView {
    /// Head metadata
    pub meta: PageMeta,
    /// Hero paragraph
    pub hero_intro: String,
    /// Filter bar labels (without "All")
    pub categories: Vec<String>,
    /// Grid tiles
    pub items: Vec<GalleryItem>,
    /// Filter buttons match tile labels (see [`is_filterable`])
    pub filterable: bool,
    /// CTA paragraph
    pub cta_copy: String,
    /// `tel:` link target
    pub phone_href: String,
    /// Phone button label
    pub phone_label: String,
    /// Services preview subtitle
    pub services_subtitle: String,
    /// Services preview entries
    pub preview: Vec<Service>,
}

impl GalleryView {
    /// Shape `content` into view data. Never fails; missing data yields
    /// empty lists.
    pub fn from_content(content: &SiteContent) -> Self {
        let business = &content.business;
        let service_lc = business.service.to_lowercase();
        let categories = derive_categories(&content.services);
        let items = gallery_items(content);
        let filterable = is_filterable(&categories, &items);
        if !filterable {
            debug!("gallery labels differ from service categories, filter bar stays static");
        }

        Self {
            meta: page_meta(business),
            hero_intro: format!(
                "Browse through our completed {} projects in {}. Quality workmanship and professional results on every job.",
                service_lc, business.city
            ),
            categories,
            items,
            filterable,
            cta_copy: format!(
                "Contact us today for a free quote on your {} project.",
                service_lc
            ),
            phone_href: format!("tel:{}", business.phone),
            phone_label: format!("Call {}", business.phone),
            services_subtitle: format!("Professional {} for {}", service_lc, business.city),
            preview: preview_services(&content.services).to_vec(),
        }
    }
}

/// `/services/<slug>` link for a service.
pub fn service_href(slug: &str) -> String {
    format!("/services/{}", slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn service(slug: &str, title: &str) -> Service {
        Service {
            slug: slug.into(),
            title: title.into(),
            short_description: format!("{} done right.", title),
            image: format!("/images/{}.jpg", slug),
        }
    }

    fn services(n: usize) -> Vec<Service> {
        (0..n)
            .map(|i| service(&format!("svc-{}", i), &format!("Service Number {}", i)))
            .collect()
    }

    fn content(services: Vec<Service>, gallery: Option<Vec<GalleryItem>>) -> SiteContent {
        SiteContent {
            business: Business {
                name: "Oak Ridge Decks".into(),
                service: "Deck Building".into(),
                city: "Portland".into(),
                phone: "(503) 555-0142".into(),
            },
            services,
            gallery,
        }
    }

    #[test]
    fn category_label_keeps_first_two_words() {
        assert_eq!(category_label("Deck Staining"), "Deck Staining");
        assert_eq!(category_label("Deck Staining & Sealing"), "Deck Staining");
        assert_eq!(category_label("Roofing"), "Roofing");
        assert_eq!(category_label(""), "");
    }

    #[test]
    fn category_label_splits_on_single_spaces() {
        assert_eq!(category_label("Deck  Staining"), "Deck ");
        assert_eq!(category_label(" Fence Repair"), " Fence");
    }

    #[test]
    fn generates_one_tile_per_service_when_gallery_missing() {
        let c = content(
            vec![
                service("deck-staining", "Deck Staining"),
                service("fence-repair", "Fence Repair"),
            ],
            None,
        );

        let items = gallery_items(&c);

        assert_eq!(
            items,
            vec![
                GalleryItem {
                    image: "/images/deck-staining.jpg".into(),
                    alt: "Deck Staining".into(),
                    category: "Deck Staining".into(),
                },
                GalleryItem {
                    image: "/images/fence-repair.jpg".into(),
                    alt: "Fence Repair".into(),
                    category: "Fence Repair".into(),
                },
            ]
        );
    }

    #[test]
    fn empty_configured_gallery_falls_back_to_services() {
        let c = content(services(4), Some(vec![]));
        assert_eq!(gallery_items(&c).len(), 4);
    }

    #[test]
    fn configured_gallery_wins() {
        let configured = vec![GalleryItem {
            image: "/images/custom.jpg".into(),
            alt: "Finished patio".into(),
            category: "Patios".into(),
        }];
        let c = content(services(5), Some(configured.clone()));
        assert_eq!(gallery_items(&c), configured);
    }

    #[test]
    fn empty_everything_yields_empty_grid() {
        let c = content(vec![], None);
        assert!(gallery_items(&c).is_empty());
        assert!(derive_categories(&c.services).is_empty());
        assert!(preview_services(&c.services).is_empty());
    }

    #[test]
    fn categories_cap_at_six_and_keep_duplicates() {
        for n in 0..10 {
            assert_eq!(derive_categories(&services(n)).len(), n.min(MAX_CATEGORIES));
        }

        let dupes = vec![
            service("a", "Deck Staining"),
            service("b", "Deck Staining Plus"),
        ];
        assert_eq!(
            derive_categories(&dupes),
            vec!["Deck Staining".to_string(), "Deck Staining".to_string()]
        );
    }

    #[test]
    fn preview_caps_at_three() {
        for n in 0..8 {
            let all = services(n);
            let preview = preview_services(&all);
            assert_eq!(preview.len(), n.min(MAX_PREVIEW_SERVICES));
            assert_eq!(preview, &all[..preview.len()]);
        }
    }

    #[test]
    fn page_meta_interpolates_business() {
        let c = content(vec![], None);
        let meta = page_meta(&c.business);
        assert_eq!(meta.title, "Gallery | Oak Ridge Decks");
        assert_eq!(
            meta.description,
            "View our portfolio of completed deck building projects. See examples of our professional work from Oak Ridge Decks in Portland."
        );
    }

    #[test]
    fn view_builds_copy_and_links() {
        let c = content(services(7), None);
        let view = GalleryView::from_content(&c);

        assert_eq!(view.phone_href, "tel:(503) 555-0142");
        assert_eq!(view.phone_label, "Call (503) 555-0142");
        assert_eq!(view.services_subtitle, "Professional deck building for Portland");
        assert_eq!(
            view.cta_copy,
            "Contact us today for a free quote on your deck building project."
        );
        assert!(
            view.hero_intro
                .starts_with("Browse through our completed deck building projects in Portland.")
        );
        assert!(view.filterable);
        assert_eq!(view.categories.len(), 6);
        assert_eq!(view.items.len(), 7);
        assert_eq!(view.preview.len(), 3);
    }

    #[test]
    fn configured_gallery_with_own_labels_is_not_filterable() {
        let gallery = vec![
            GalleryItem {
                image: "/images/decks.jpg".into(),
                alt: "Decks".into(),
                category: "Decks".into(),
            },
            GalleryItem {
                image: "/images/fences.jpg".into(),
                alt: "Fences".into(),
                category: "Fences".into(),
            },
        ];
        let c = content(
            vec![
                service("deck-staining", "Deck Staining & Sealing"),
                service("fence-repair", "Fence Repair"),
            ],
            Some(gallery),
        );

        assert!(!GalleryView::from_content(&c).filterable);
    }

    #[test]
    fn configured_gallery_matching_categories_is_filterable() {
        let gallery = vec![GalleryItem {
            image: "/images/fence.jpg".into(),
            alt: "New fence".into(),
            category: "Fence Repair".into(),
        }];
        let c = content(vec![service("fence-repair", "Fence Repair")], Some(gallery));

        assert!(GalleryView::from_content(&c).filterable);
    }

    #[test]
    fn no_categories_is_trivially_filterable() {
        assert!(is_filterable(&[], &[]));
        assert!(!is_filterable(&["Decks".to_string()], &[]));
    }

    #[test]
    fn view_does_not_touch_input() {
        let c = content(services(2), None);
        let before = c.clone();
        let _ = GalleryView::from_content(&c);
        assert_eq!(c, before);
    }

    #[test]
    fn service_href_uses_slug() {
        assert_eq!(service_href("deck-staining"), "/services/deck-staining");
    }
}
