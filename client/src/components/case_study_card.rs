//! Case study summary card used by the carousel and the listing page.

use leptos::prelude::*;
use records::CaseStudy;

use super::tilt_card::TiltCard;

#[component]
pub fn CaseStudyCard(study: CaseStudy) -> impl IntoView {
    let href = format!("/case-studies/{}", study.slug);
    let metrics = study
        .metrics
        .iter()
        .take(3)
        .map(|m| {
            view! {
                <li class="case-card__metric">
                    <span class="case-card__metric-icon" aria-hidden="true">{m.icon.clone()}</span>
                    <strong>{m.value.clone()}</strong>
                    <span>{m.label.clone()}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <TiltCard class="case-card">
            <a class="case-card__link" href=href>
                {study.image_url.clone().map(|src| view! { <img class="case-card__image" src=src alt="" loading="lazy"/> })}
                <span class="case-card__industry">{study.industry.clone()}</span>
                <h3 class="case-card__title">{study.title.clone()}</h3>
                <p class="case-card__client">{study.client_name.clone()}</p>
                <p class="case-card__description">{study.description.clone()}</p>
                <ul class="case-card__metrics">{metrics}</ul>
            </a>
        </TiltCard>
    }
}
