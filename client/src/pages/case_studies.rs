//! Public case study listing with an industry filter.

#[cfg(test)]
#[path = "case_studies_test.rs"]
mod case_studies_test;

use leptos::prelude::*;
use records::CaseStudy;

use crate::components::case_study_card::CaseStudyCard;
use crate::util::mounted::Mounted;

/// Industries present in `studies`, in first-seen order.
fn industries_of(studies: &[CaseStudy]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for study in studies {
        if !seen.contains(&study.industry) {
            seen.push(study.industry.clone());
        }
    }
    seen
}

fn filter_by_industry(studies: &[CaseStudy], industry: Option<&str>) -> Vec<CaseStudy> {
    studies
        .iter()
        .filter(|s| industry.is_none_or(|wanted| s.industry == wanted))
        .cloned()
        .collect()
}

#[component]
pub fn CaseStudiesPage() -> impl IntoView {
    let studies = RwSignal::new(None::<Result<Vec<CaseStudy>, String>>);
    let industry = RwSignal::new(None::<String>);
    let mounted = Mounted::install();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let loaded = crate::net::api::fetch_published_case_studies().await;
        if mounted.is_mounted() {
            studies.set(Some(loaded));
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mounted;
    }

    let filters = move || {
        let all = studies.with(|s| s.as_ref().and_then(|r| r.as_ref().ok()).map(Vec::as_slice).map(industries_of).unwrap_or_default());
        let chip = move |label: String, value: Option<String>| {
            let active = {
                let value = value.clone();
                move || industry.with(|i| *i == value)
            };
            view! {
                <button
                    class="filter-chip"
                    class:filter-chip--active=active
                    on:click=move |_| industry.set(value.clone())
                >
                    {label}
                </button>
            }
        };
        let mut chips = vec![chip("All".to_owned(), None)];
        chips.extend(all.into_iter().map(|name| chip(name.clone(), Some(name))));
        chips
    };

    let grid = move || match studies.get() {
        None => view! { <p>"Loading case studies..."</p> }.into_any(),
        Some(Err(e)) => view! { <p class="page-error">{format!("Could not load case studies: {e}")}</p> }.into_any(),
        Some(Ok(items)) => {
            let shown = industry.with(|i| filter_by_industry(&items, i.as_deref()));
            if shown.is_empty() {
                return view! { <p>"No case studies match this filter."</p> }.into_any();
            }
            shown
                .into_iter()
                .map(|study| view! { <CaseStudyCard study=study/> })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <section class="case-studies-page">
            <h1>"Case studies"</h1>
            <div class="case-studies-page__filters">{filters}</div>
            <div class="case-studies-page__grid">{grid}</div>
        </section>
    }
}
