//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::site_header::SiteHeader;
use crate::components::toast::ToastHost;
use crate::pages::{
    admin_case_studies::AdminCaseStudiesPage, admin_integrations::AdminIntegrationsPage, admin_login::AdminLoginPage,
    case_studies::CaseStudiesPage, case_study_detail::CaseStudyDetailPage, home::HomePage,
};
use crate::state::{auth::AuthState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth and notification contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/xops360-site.css"/>
        <Title text="XOps360"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("case-studies") view=CaseStudiesPage/>
                    <Route path=(StaticSegment("case-studies"), ParamSegment("slug")) view=CaseStudyDetailPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("login")) view=AdminLoginPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("case-studies")) view=AdminCaseStudiesPage/>
                    <Route path=(StaticSegment("admin"), StaticSegment("integrations")) view=AdminIntegrationsPage/>
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
