//! Toast notifications for admin CRUD outcomes.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u64 = 4000;

/// Queue a toast and dismiss it after a few seconds.
pub fn show_toast(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let Some(id) = toasts.try_update(|t| t.push(kind, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
        let _ = toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host" role="status" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        let class = match toast.kind {
                            ToastKind::Success => "toast toast--success",
                            ToastKind::Error => "toast toast--error",
                        };
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
