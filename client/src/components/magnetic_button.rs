//! Call-to-action link that drifts toward the pointer.

use leptos::prelude::*;
use motion::pointer::TrackingMode;

use super::pointer_surface::PointerSurface;

#[component]
pub fn MagneticButton(#[prop(into)] href: String, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <PointerSurface mode=TrackingMode::magnetic() class="magnetic">
            <a class="btn btn--primary magnetic__target" href=href>
                {label}
            </a>
        </PointerSurface>
    }
}
