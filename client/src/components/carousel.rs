//! Featured case study carousel for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps `motion::carousel::Carousel`. Prev/next buttons, dot selection and
//! the window-level ArrowLeft/ArrowRight listener all drive the same state.
//! The slide element is rebuilt on every move, so a new move restarts the
//! CSS transition from the offsets in `SlideTransition`.

use leptos::prelude::*;
use motion::carousel::Carousel;
#[cfg(feature = "hydrate")]
use motion::carousel::NavKey;
use records::CaseStudy;

use super::case_study_card::CaseStudyCard;
use crate::util::reduced_motion::prefers_reduced_motion;

#[component]
pub fn CaseStudyCarousel(items: Vec<CaseStudy>, #[prop(optional)] autoplay: bool) -> impl IntoView {
    let Ok(initial) = Carousel::new(items.len()) else {
        return view! { <p class="carousel__empty">"No case studies yet."</p> }.into_any();
    };
    let carousel = RwSignal::new(initial);
    let hovered = RwSignal::new(false);
    let items = StoredValue::new(items);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| {
            if let Some(key) = NavKey::from_dom_key(&ev.key()) {
                carousel.update(|c| {
                    c.handle_key(key);
                });
            }
        });
        on_cleanup(move || handle.remove());
    }

    if autoplay && !prefers_reduced_motion() {
        start_autoplay(carousel, hovered);
    }

    let slide = move || {
        let state = carousel.get();
        let t = state.transition();
        let style = format!("--slide-enter-from: {}%; --slide-exit-to: {}%;", t.enter_from_pct, t.exit_to_pct);
        let card = items.with_value(|all| state.current(all).cloned());
        view! {
            <div class="carousel__slide" data-seq=t.seq.to_string() style=style>
                {card.map(|study| view! { <CaseStudyCard study=study/> })}
            </div>
        }
    };

    let dots = move || {
        let len = carousel.with(Carousel::len);
        (0..len)
            .map(|i| {
                let active = move || carousel.with(|c| c.index() == i);
                view! {
                    <button
                        class="carousel__dot"
                        class:carousel__dot--active=active
                        aria-label=format!("Show slide {}", i + 1)
                        on:click=move |_| {
                            carousel.update(|c| {
                                let _ = c.go_to(i);
                            });
                        }
                    ></button>
                }
            })
            .collect_view()
    };

    view! {
        <section
            class="carousel"
            aria-roledescription="carousel"
            on:pointerenter=move |_| hovered.set(true)
            on:pointerleave=move |_| hovered.set(false)
        >
            <button class="carousel__nav carousel__nav--prev" aria-label="Previous" on:click=move |_| carousel.update(Carousel::prev)>
                "‹"
            </button>
            <div class="carousel__viewport">{slide}</div>
            <button class="carousel__nav carousel__nav--next" aria-label="Next" on:click=move |_| carousel.update(Carousel::next)>
                "›"
            </button>
            <div class="carousel__dots">{dots}</div>
        </section>
    }
    .into_any()
}

/// Advance on a fixed interval while the pointer is outside the carousel.
fn start_autoplay(carousel: RwSignal<Carousel>, hovered: RwSignal<bool>) {
    #[cfg(feature = "hydrate")]
    {
        let mounted = crate::util::mounted::Mounted::install();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    motion::consts::CAROUSEL_AUTOPLAY_MS,
                )))
                .await;
                if !mounted.is_mounted() {
                    break;
                }
                if hovered.get_untracked() {
                    continue;
                }
                if carousel.try_update(Carousel::next).is_none() {
                    break;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (carousel, hovered);
    }
}
