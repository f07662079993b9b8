//! Pointer-tracked wrapper shared by the magnetic button and the tilt card.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns one `motion::pointer::PointerTracker` per element. Pointer events
//! move the spring target; a `requestAnimationFrame` loop samples the spring
//! and stops once it settles or the element unmounts.
//!
//! Reduced motion is read at mount. When set, the element renders without
//! pointer handlers and without a transform.

use leptos::prelude::*;
use motion::pointer::{PointerTracker, TrackingMode};
use motion::spring::SpringConfig;

#[cfg(feature = "hydrate")]
use js_sys::Date;
#[cfg(feature = "hydrate")]
use motion::pointer::Rect;
#[cfg(feature = "hydrate")]
use motion::spring::Vec2;
#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

use crate::util::reduced_motion::prefers_reduced_motion;

/// Run frames until the tracker reports rest or its signal is disposed.
#[cfg(feature = "hydrate")]
fn start_frame_loop(tracker: RwSignal<PointerTracker>, running: &Rc<Cell<bool>>) {
    if running.get() {
        return;
    }
    let Some(window) = web_sys::window() else {
        return;
    };
    running.set(true);

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let running_for_cb = Rc::clone(running);
    let mut last_ms = Date::now();
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        let now_ms = Date::now();
        let dt_secs = (now_ms - last_ms).max(0.0) / 1000.0;
        last_ms = now_ms;

        let active = tracker.try_update(|t| t.tick(dt_secs)).unwrap_or(false);
        let rescheduled = active
            && web_sys::window().is_some_and(|w| {
                holder_for_cb
                    .borrow()
                    .as_ref()
                    .is_some_and(|cb| w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok())
            });
        if !rescheduled {
            running_for_cb.set(false);
            holder_for_cb.borrow_mut().take();
        }
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *holder.borrow_mut() = Some(cb);
    } else {
        running.set(false);
    }
}

#[cfg(feature = "hydrate")]
fn element_rect(node: &NodeRef<leptos::html::Div>) -> Option<Rect> {
    let el = node.get_untracked()?;
    let r = el.get_bounding_client_rect();
    Some(Rect::new(r.left(), r.top(), r.width(), r.height()))
}

/// Wrap `children` in a `<div>` whose transform follows the pointer.
#[component]
pub fn PointerSurface(
    mode: TrackingMode,
    #[prop(optional)] config: Option<SpringConfig>,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let reduced = prefers_reduced_motion();
    let tracker = RwSignal::new(PointerTracker::new(mode, config.unwrap_or_default(), reduced));

    if reduced {
        return view! { <div class=class>{children()}</div> }.into_any();
    }

    let node = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "hydrate")]
    let running = Rc::new(Cell::new(false));

    let on_enter = move |_ev: leptos::ev::PointerEvent| {
        tracker.update(|t| {
            t.enter();
        });
    };

    #[cfg(feature = "hydrate")]
    let running_move = Rc::clone(&running);
    let on_move = move |ev: leptos::ev::PointerEvent| {
        #[cfg(feature = "hydrate")]
        {
            let Some(rect) = element_rect(&node) else {
                return;
            };
            let pointer = Vec2::new(f64::from(ev.client_x()), f64::from(ev.client_y()));
            let changed = tracker.try_update(|t| t.pointer_move(pointer, rect)).unwrap_or(false);
            if changed {
                start_frame_loop(tracker, &running_move);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    #[cfg(feature = "hydrate")]
    let running_leave = Rc::clone(&running);
    let on_leave = move |_ev: leptos::ev::PointerEvent| {
        tracker.update(PointerTracker::leave);
        #[cfg(feature = "hydrate")]
        start_frame_loop(tracker, &running_leave);
    };

    view! {
        <div
            class=class
            node_ref=node
            style:transform=move || tracker.with(|t| t.transform().to_css())
            style:will-change="transform"
            on:pointerenter=on_enter
            on:pointermove=on_move
            on:pointerleave=on_leave
        >
            {children()}
        </div>
    }
    .into_any()
}
