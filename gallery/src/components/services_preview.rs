//! Services preview cards

use crate::types::Service;
use crate::view_data::service_href;
use leptos::prelude::*;

/// "Our Services" block: one linked card per service passed in.
///
/// Callers pass an already truncated list (see
/// [`crate::view_data::preview_services`]).
#[component]
pub fn ServicesPreview(subtitle: String, services: Vec<Service>) -> impl IntoView {
    view! {
        <section class="services-preview">
            <div class="container">
                <div class="section-heading">
                    <h2>"Our Services"</h2>
                    <p>{subtitle}</p>
                </div>
                <div class="services-grid">
                    {services.into_iter().map(|service| {
                        let Service { slug, title, short_description, image } = service;
                        let href = service_href(&slug);
                        let alt = title.clone();
                        view! {
                            <a href=href class="service-card">
                                <div class="service-image">
                                    <img src=image alt=alt loading="lazy" />
                                </div>
                                <h3>{title}</h3>
                                <p>{short_description}</p>
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
