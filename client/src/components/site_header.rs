//! Site-wide header with hover navigation and the admin session control.

use leptos::prelude::*;

use super::hover_menu::HoverMenu;
use super::magnetic_button::MagneticButton;
use crate::state::auth::AuthState;

#[component]
pub fn SiteHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            auth.update(|a| a.resolve(None));
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(crate::util::admin_guard::LOGIN_PATH);
            }
        });
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "XOps360"
            </a>
            <HoverMenu/>
            <span class="site-header__spacer"></span>
            <Show
                when=move || auth.with(|a| a.user.is_some())
                fallback=|| view! { <MagneticButton href="/#contact" label="Book a demo"/> }
            >
                <nav class="site-header__admin">
                    <a href="/admin/case-studies">"Case studies"</a>
                    <a href="/admin/integrations">"Integrations"</a>
                    <span class="site-header__self">
                        {move || auth.with(|a| a.user.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                    </span>
                    <button class="btn site-header__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </nav>
            </Show>
        </header>
    }
}
