//! Root document component - the complete HTML page

use super::GalleryPage;
use crate::styles::GALLERY_CSS;
use crate::view_data::GalleryView;
use crate::PageOptions;
use leptos::prelude::*;

/// The complete HTML document for the gallery route
#[component]
pub fn GalleryDocument(page: GalleryView, options: PageOptions) -> impl IntoView {
    let PageOptions {
        lang,
        inline_styles,
        stylesheet_href,
        filter_script,
    } = options;
    let title = page.meta.title.clone();
    let description = page.meta.description.clone();
    let with_script = filter_script && page.filterable;

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <meta name="description" content=description />
                {stylesheet_href.map(|href| view! { <link rel="stylesheet" href=href /> })}
                {inline_styles.then(|| view! { <style>{GALLERY_CSS}</style> })}
            </head>
            <body>
                <main>
                    <GalleryPage page=page />
                </main>
                {with_script.then(|| view! { <script>{FILTER_SCRIPT}</script> })}
            </body>
        </html>
    }
}

/// Category filtering: clicking a filter button shows only tiles whose
/// `data-category` matches, "All" (`*`) shows everything.
const FILTER_SCRIPT: &str = r#"
(() => {
  const buttons = document.querySelectorAll('.filter-btn[data-filter]');
  const tiles = document.querySelectorAll('.gallery-tile[data-category]');

  buttons.forEach(btn => {
      btn.addEventListener('click', () => {
          const filter = btn.dataset.filter;

          buttons.forEach(b => b.classList.toggle('active', b === btn));

          tiles.forEach(tile => {
              tile.hidden = filter !== '*' && tile.dataset.category !== filter;
          });
      });
  });
})();
"#;
