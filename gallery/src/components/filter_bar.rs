//! Category filter bar

use leptos::prelude::*;

/// `data-filter` value of the "All" button.
pub const FILTER_ALL: &str = "*";

/// "All" button followed by one button per category label.
///
/// Labels are rendered as given; duplicates produce duplicate buttons.
/// `data-filter` hooks are only emitted when `filterable` is set, otherwise
/// the bar is decorative.
#[component]
pub fn CategoryFilter(categories: Vec<String>, filterable: bool) -> impl IntoView {
    view! {
        <section class="filter-bar">
            <div class="container">
                <div class="filter-list" role="group" aria-label="Filter by category">
                    <button type="button" class="filter-btn active" data-filter=filterable.then_some(FILTER_ALL)>
                        "All"
                    </button>
                    {categories.into_iter().map(|category| {
                        let filter = filterable.then(|| category.clone());
                        view! {
                            <button type="button" class="filter-btn" data-filter=filter>
                                {category}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
