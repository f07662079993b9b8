//! Header navigation with hover disclosure panels.
//!
//! Trigger and panel share one key in a `motion::hover::HoverGroup`, so the
//! pointer can cross the gap between them inside the hide delay. A pending
//! hide is a spawned sleep holding a `HideTicket`; only the latest ticket can
//! still fire, and teardown on unmount invalidates all of them.

use leptos::prelude::*;
use motion::hover::{HideTicket, HoverGroup};

struct MenuSection {
    key: &'static str,
    label: &'static str,
    links: &'static [(&'static str, &'static str)],
}

const SECTIONS: &[MenuSection] = &[
    MenuSection {
        key: "platform",
        label: "Platform",
        links: &[("/#observability", "Observability"), ("/#automation", "Automation"), ("/#integrations", "Integrations")],
    },
    MenuSection {
        key: "customers",
        label: "Customers",
        links: &[("/case-studies", "Case studies"), ("/#testimonials", "Testimonials")],
    },
];

fn schedule_hide(group: RwSignal<HoverGroup<&'static str>>, ticket: HideTicket) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(ticket.delay_ms()))).await;
        let _ = group.try_update(|g| g.fire(ticket));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (group, ticket);
    }
}

#[component]
pub fn HoverMenu() -> impl IntoView {
    let group = RwSignal::new(HoverGroup::<&'static str>::new());
    on_cleanup(move || {
        let _ = group.try_update(HoverGroup::teardown);
    });

    let enter = move |key: &'static str| {
        group.update(|g| {
            g.enter(key);
        });
    };
    let leave = move |key: &'static str| {
        if let Some(ticket) = group.try_update(|g| g.leave(&key)).flatten() {
            schedule_hide(group, ticket);
        }
    };
    let dismiss = move || group.update(HoverGroup::dismiss);

    view! {
        <nav
            class="nav-menu"
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Escape" {
                    dismiss();
                }
            }
        >
            {SECTIONS
                .iter()
                .map(|section| {
                    let key = section.key;
                    let open = move || group.with(|g| g.is_active(&key));
                    // focusin/focusout bubble, so moving focus from the trigger
                    // into the panel links is a leave then re-enter.
                    view! {
                        <div
                            class="nav-menu__item"
                            on:focusin=move |_| enter(key)
                            on:focusout=move |_| leave(key)
                        >
                            <button
                                class="nav-menu__trigger"
                                aria-expanded=move || open().to_string()
                                on:pointerenter=move |_| enter(key)
                                on:pointerleave=move |_| leave(key)
                            >
                                {section.label}
                            </button>
                            <div
                                class="nav-menu__panel"
                                class:nav-menu__panel--open=open
                                on:pointerenter=move |_| enter(key)
                                on:pointerleave=move |_| leave(key)
                            >
                                {section
                                    .links
                                    .iter()
                                    .map(|(href, text)| {
                                        view! {
                                            <a class="nav-menu__link" href=*href on:click=move |_| dismiss()>
                                                {*text}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
