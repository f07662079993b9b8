//! OS reduced-motion preference.
//!
//! Read once when an animated component mounts. SSR renders as if motion is
//! allowed; the hydrate pass then applies the real preference before any
//! pointer listener is attached.

#[cfg(test)]
#[path = "reduced_motion_test.rs"]
mod reduced_motion_test;

#[cfg(any(test, feature = "hydrate"))]
const QUERY: &str = "(prefers-reduced-motion: reduce)";

/// `true` when the user asked the OS to minimize motion.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(QUERY).ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}
