//! Card with a 3D parallax tilt following the pointer.

use leptos::prelude::*;
use motion::pointer::TrackingMode;

use super::pointer_surface::PointerSurface;

#[component]
pub fn TiltCard(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let class = if class.is_empty() { "tilt-card".to_owned() } else { format!("tilt-card {class}") };
    view! {
        <PointerSurface mode=TrackingMode::tilt() class=class>
            {children()}
        </PointerSurface>
    }
}
