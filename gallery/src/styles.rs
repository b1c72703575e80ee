//! CSS styles for the gallery page.
//!
//! The stylesheet is self-contained so a rendered page looks right without
//! a build step. Hosts with their own design system can turn inlining off
//! via [`crate::PageOptions::inline_styles`] and link a stylesheet instead.
//!
//! # Customization
//!
//! ```rust
//! use gallery_leptos::styles::GALLERY_CSS;
//!
//! let brand = ":root { --brand: #0f766e; --brand-dark: #115e59; }";
//! let combined = format!("{}\n{}", GALLERY_CSS, brand);
//! assert!(combined.contains("--brand: #0f766e"));
//! ```

/// Complete CSS for the gallery page.
///
/// Brand colour is driven by `--brand` / `--brand-dark`; override them to
/// re-theme the page.
pub const GALLERY_CSS: &str = r#"
:root {
    --brand: #2563eb;
    --brand-dark: #1d4ed8;
    --brand-tint: rgba(37, 99, 235, 0.1);
    --gray-50: #f9fafb;
    --gray-200: #e5e7eb;
    --gray-300: #d1d5db;
    --gray-400: #9ca3af;
    --gray-600: #4b5563;
    --gray-900: #111827;
    --white: #ffffff;
    --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, sans-serif;
    --container-max: 80rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--gray-900);
    line-height: 1.5;
}

img {
    display: block;
    max-width: 100%;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1rem;
}

@media (min-width: 640px) {
    .container { padding: 0 1.5rem; }
}

@media (min-width: 1024px) {
    .container { padding: 0 2rem; }
}

/* Hero */

.gallery-hero {
    padding: 5rem 0;
    background: var(--gray-900);
}

.breadcrumb {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin-bottom: 2rem;
    font-size: 0.875rem;
    color: var(--gray-400);
}

.breadcrumb a:hover,
.breadcrumb .current {
    color: var(--white);
}

.hero-copy {
    max-width: 48rem;
}

.hero-title {
    margin: 0 0 1.5rem;
    font-size: 2.25rem;
    font-weight: 700;
    color: var(--white);
}

@media (min-width: 640px) {
    .hero-title { font-size: 3rem; }
}

.hero-intro {
    margin: 0;
    font-size: 1.25rem;
    color: var(--gray-300);
}

/* Category filter */

.filter-bar {
    padding: 2rem 0;
    background: var(--gray-50);
    border-bottom: 1px solid var(--gray-200);
}

.filter-list {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 0.75rem;
}

.filter-btn {
    padding: 0.5rem 1.25rem;
    border: 1px solid var(--gray-200);
    border-radius: 9999px;
    background: var(--white);
    color: var(--gray-600);
    font: inherit;
    font-weight: 500;
    cursor: pointer;
    transition: background-color 0.15s, color 0.15s;
}

.filter-btn:hover {
    background: var(--brand-tint);
    color: var(--brand);
}

.filter-btn.active {
    border-color: var(--brand);
    background: var(--brand);
    color: var(--white);
}

/* Gallery grid */

.gallery-section {
    padding: 4rem 0;
}

.gallery-grid {
    display: grid;
    grid-template-columns: repeat(2, minmax(0, 1fr));
    gap: 1rem;
}

@media (min-width: 768px) {
    .gallery-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}

@media (min-width: 1024px) {
    .gallery-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}

.gallery-tile {
    position: relative;
    aspect-ratio: 1 / 1;
    overflow: hidden;
    border-radius: 0.75rem;
    cursor: pointer;
}

.gallery-tile[hidden] {
    display: none;
}

.gallery-tile img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.5s;
}

.gallery-tile:hover img,
.gallery-tile:focus-within img {
    transform: scale(1.1);
}

.tile-overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent 50%, transparent);
    opacity: 0;
    transition: opacity 0.15s;
}

.gallery-tile:hover .tile-overlay,
.gallery-tile:focus-within .tile-overlay {
    opacity: 1;
}

.tile-caption {
    position: absolute;
    right: 0;
    bottom: 0;
    left: 0;
    padding: 1rem;
}

.badge {
    display: inline-block;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: var(--brand);
    color: var(--white);
    font-size: 0.75rem;
}

/* CTA */

.cta-section {
    padding: 5rem 0;
    background: var(--gray-900);
    text-align: center;
}

.cta-title {
    margin: 0 0 1rem;
    font-size: 1.875rem;
    font-weight: 700;
    color: var(--white);
}

.cta-copy {
    max-width: 42rem;
    margin: 0 auto 2rem;
    color: var(--gray-300);
}

.cta-actions {
    display: flex;
    flex-direction: column;
    justify-content: center;
    gap: 1rem;
}

@media (min-width: 640px) {
    .cta-actions { flex-direction: row; }
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 1rem 2rem;
    border-radius: 9999px;
    font-size: 1.125rem;
    font-weight: 600;
    transition: all 0.15s;
}

.btn-primary {
    background: var(--brand);
    color: var(--white);
}

.btn-primary:hover {
    background: var(--brand-dark);
}

.btn-outline {
    border: 2px solid rgba(255, 255, 255, 0.3);
    color: var(--white);
}

.btn-outline:hover {
    background: var(--white);
    color: var(--gray-900);
}

/* Services preview */

.services-preview {
    padding: 5rem 0;
}

.section-heading {
    margin-bottom: 3rem;
    text-align: center;
}

.section-heading h2 {
    margin: 0;
    font-size: 1.875rem;
    font-weight: 700;
}

.section-heading p {
    margin: 0.5rem 0 0;
    color: var(--gray-600);
}

.services-grid {
    display: grid;
    gap: 2rem;
}

@media (min-width: 768px) {
    .services-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
}

.service-card .service-image {
    aspect-ratio: 4 / 3;
    overflow: hidden;
    margin-bottom: 1rem;
    border-radius: 0.75rem;
}

.service-card img {
    width: 100%;
    height: 100%;
    object-fit: cover;
    transition: transform 0.3s;
}

.service-card:hover img {
    transform: scale(1.05);
}

.service-card h3 {
    margin: 0;
    font-size: 1.25rem;
    font-weight: 700;
    transition: color 0.15s;
}

.service-card:hover h3 {
    color: var(--brand);
}

.service-card p {
    margin: 0.25rem 0 0;
    color: var(--gray-600);
}

.icon {
    flex-shrink: 0;
}
"#;
