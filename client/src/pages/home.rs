//! Landing page: hero, featured case study carousel, integration grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public data loads after hydration through the read-only API. The server
//! render shows the loading placeholders, matching the first client pass.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use records::{CaseStudy, Integration};

use crate::components::carousel::CaseStudyCarousel;
use crate::components::magnetic_button::MagneticButton;
use crate::components::tilt_card::TiltCard;
use crate::util::mounted::Mounted;

/// Featured studies when any are flagged, otherwise every published study.
fn carousel_items(studies: Vec<CaseStudy>) -> Vec<CaseStudy> {
    if studies.iter().any(|s| s.featured) {
        studies.into_iter().filter(|s| s.featured).collect()
    } else {
        studies
    }
}

/// Group integrations by category, keeping first-seen category order.
fn group_by_category(items: Vec<Integration>) -> Vec<(String, Vec<Integration>)> {
    let mut groups: Vec<(String, Vec<Integration>)> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|(category, _)| *category == item.category) {
            Some((_, members)) => members.push(item),
            None => groups.push((item.category.clone(), vec![item])),
        }
    }
    groups
}

#[component]
pub fn HomePage() -> impl IntoView {
    let studies = RwSignal::new(None::<Result<Vec<CaseStudy>, String>>);
    let integrations = RwSignal::new(None::<Result<Vec<Integration>, String>>);
    let mounted = Mounted::install();

    #[cfg(feature = "hydrate")]
    {
        let mounted = mounted.clone();
        leptos::task::spawn_local(async move {
            let loaded_studies = crate::net::api::fetch_published_case_studies().await;
            if !mounted.is_mounted() {
                return;
            }
            studies.set(Some(loaded_studies));
            let loaded_integrations = crate::net::api::fetch_active_integrations().await;
            if mounted.is_mounted() {
                integrations.set(Some(loaded_integrations));
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mounted;
    }

    let carousel = move || match studies.get() {
        None => view! { <p class="carousel__empty">"Loading case studies..."</p> }.into_any(),
        Some(Err(e)) => view! { <p class="carousel__empty">{format!("Case studies unavailable: {e}")}</p> }.into_any(),
        Some(Ok(items)) => view! { <CaseStudyCarousel items=carousel_items(items) autoplay=true/> }.into_any(),
    };

    let integration_grid = move || match integrations.get() {
        None => view! { <p>"Loading integrations..."</p> }.into_any(),
        Some(Err(_)) => ().into_any(),
        Some(Ok(items)) => group_by_category(items)
            .into_iter()
            .map(|(category, members)| {
                view! {
                    <div class="integrations__group">
                        <h3>{category}</h3>
                        <div class="integrations__grid">
                            {members
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <TiltCard class="integration-card">
                                            {item.logo_url.clone().map(|src| view! { <img src=src alt=item.name.clone() loading="lazy"/> })}
                                            <strong>{item.name.clone()}</strong>
                                            <p>{item.description.clone().unwrap_or_default()}</p>
                                        </TiltCard>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
            })
            .collect_view()
            .into_any(),
    };

    view! {
        <section class="hero">
            <h1 class="hero__title">"Autonomous IT operations, end to end."</h1>
            <p class="hero__lead">
                "XOps360 unifies observability, automation and service management on one platform."
            </p>
            <div class="hero__actions">
                <MagneticButton href="/#contact" label="Book a demo"/>
                <MagneticButton href="/case-studies" label="See customer results"/>
            </div>
        </section>
        <section class="home-section" id="case-studies">
            <h2>"Customer stories"</h2>
            {carousel}
        </section>
        <section class="home-section" id="integrations">
            <h2>"Integrations"</h2>
            {integration_grid}
        </section>
    }
}
