//! Public case study detail page (`/case-studies/{slug}`).

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use records::CaseStudy;

use crate::util::markdown::render_markdown_html;
use crate::util::mounted::Mounted;

fn markdown_section(heading: &'static str, body: Option<String>) -> impl IntoView {
    body.filter(|b| !b.trim().is_empty()).map(|b| {
        let html = render_markdown_html(&b);
        view! {
            <section class="case-detail__section">
                <h2>{heading}</h2>
                <div class="prose" inner_html=html></div>
            </section>
        }
    })
}

#[component]
pub fn CaseStudyDetailPage() -> impl IntoView {
    let params = use_params_map();
    let study = RwSignal::new(None::<Result<CaseStudy, String>>);
    let mounted = Mounted::install();

    Effect::new(move || {
        let slug = params.with(|p| p.get("slug")).unwrap_or_default();
        study.set(None);
        #[cfg(feature = "hydrate")]
        {
            let mounted = mounted.clone();
            leptos::task::spawn_local(async move {
                let loaded = crate::net::api::fetch_case_study(&slug).await;
                if mounted.is_mounted() {
                    study.set(Some(loaded));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (slug, &mounted);
        }
    });

    let body = move || match study.get() {
        None => view! { <p>"Loading..."</p> }.into_any(),
        Some(Err(e)) => view! {
            <div class="case-detail__missing">
                <p>{format!("Case study not found: {e}")}</p>
                <a href="/case-studies">"Back to case studies"</a>
            </div>
        }
        .into_any(),
        Some(Ok(cs)) => {
            let metrics = cs
                .metrics
                .iter()
                .map(|m| {
                    view! {
                        <li class="case-detail__metric">
                            <span aria-hidden="true">{m.icon.clone()}</span>
                            <strong>{m.value.clone()}</strong>
                            <span>{m.label.clone()}</span>
                        </li>
                    }
                })
                .collect_view();
            let tags = cs.tags.iter().map(|t| view! { <li class="tag">{t.clone()}</li> }).collect_view();
            view! {
                <article class="case-detail">
                    <a class="case-detail__back" href="/case-studies">"← All case studies"</a>
                    <p class="case-detail__industry">{cs.industry.clone()}</p>
                    <h1>{cs.title.clone()}</h1>
                    <p class="case-detail__client">{cs.client_name.clone()}</p>
                    {cs.image_url.clone().map(|src| view! { <img class="case-detail__image" src=src alt=""/> })}
                    <p class="case-detail__lead">{cs.description.clone()}</p>
                    <ul class="case-detail__metrics">{metrics}</ul>
                    {markdown_section("The challenge", cs.challenge.clone())}
                    {markdown_section("The solution", cs.solution.clone())}
                    {markdown_section("The results", cs.results.clone())}
                    {markdown_section("Details", cs.content.clone())}
                    <ul class="case-detail__tags">{tags}</ul>
                </article>
            }
            .into_any()
        }
    };

    view! { <div class="case-detail-page">{body}</div> }
}
