//! Call-to-action block

use crate::components::{Icon, ICON_ARROW_RIGHT, ICON_PHONE};
use leptos::prelude::*;

/// Path of the contact page the quote button links to.
pub const CONTACT_HREF: &str = "/contact";

/// "Want Results Like These?" block with quote and call buttons.
#[component]
pub fn CallToAction(copy: String, phone_href: String, phone_label: String) -> impl IntoView {
    view! {
        <section class="cta-section">
            <div class="container">
                <h2 class="cta-title">"Want Results Like These?"</h2>
                <p class="cta-copy">{copy}</p>
                <div class="cta-actions">
                    <a href=CONTACT_HREF class="btn btn-primary">
                        "Get Free Quote"
                        <Icon path=ICON_ARROW_RIGHT />
                    </a>
                    <a href=phone_href class="btn btn-outline">
                        <Icon path=ICON_PHONE />
                        {phone_label}
                    </a>
                </div>
            </div>
        </section>
    }
}
