//! Debounced hover disclosure for a group of sibling menus.
//!
//! DESIGN
//! ======
//! A trigger and its panel report enter/leave under the same key, so moving
//! the pointer across the gap between them looks like leave-then-enter. The
//! leave schedules a hide; the enter cancels it before it fires.
//!
//! Scheduling is split across the boundary: [`HoverGroup::leave`] hands the
//! caller a [`HideTicket`] and the caller arms whatever timer it has. When the
//! timer fires it passes the ticket back to [`HoverGroup::fire`], which only
//! hides if no enter, leave, dismiss, or teardown happened in between. A
//! stale timer is therefore harmless even if the caller cannot cancel it.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

use crate::consts::HOVER_HIDE_DELAY_MS;

/// Receipt for a scheduled hide. Only the most recent ticket can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTicket {
    generation: u64,
    delay_ms: u32,
}

impl HideTicket {
    /// How long the caller should wait before calling [`HoverGroup::fire`].
    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

/// Single-slot hover state shared by sibling disclosures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverGroup<K> {
    active: Option<K>,
    pending: Option<u64>,
    generation: u64,
    delay_ms: u32,
    torn_down: bool,
}

impl<K> Default for HoverGroup<K> {
    fn default() -> Self {
        Self::with_delay(HOVER_HIDE_DELAY_MS)
    }
}

impl<K> HoverGroup<K> {
    #[must_use]
    pub fn with_delay(delay_ms: u32) -> Self {
        Self { active: None, pending: None, generation: 0, delay_ms, torn_down: false }
    }

    #[must_use]
    pub fn active(&self) -> Option<&K> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn hide_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Close immediately (Escape, click-through navigation).
    pub fn dismiss(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.active = None;
    }

    /// The owning component is going away. Outstanding tickets become inert
    /// and later enters are ignored.
    pub fn teardown(&mut self) {
        self.dismiss();
        self.torn_down = true;
    }

    /// A scheduled hide elapsed. Returns `true` if the disclosure closed.
    pub fn fire(&mut self, ticket: HideTicket) -> bool {
        if self.torn_down || self.pending != Some(ticket.generation) {
            return false;
        }
        self.pending = None;
        self.active = None;
        true
    }
}

impl<K: PartialEq + Clone> HoverGroup<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self, key: &K) -> bool {
        self.active.as_ref() == Some(key)
    }

    /// Pointer entered the trigger or panel for `key`.
    ///
    /// Cancels any pending hide. Returns `true` when `key` became the active
    /// disclosure (replacing any sibling), `false` if it already was.
    pub fn enter(&mut self, key: K) -> bool {
        if self.torn_down {
            return false;
        }
        self.generation += 1;
        self.pending = None;
        if self.active.as_ref() == Some(&key) {
            return false;
        }
        self.active = Some(key);
        true
    }

    /// Pointer left the trigger or panel for `key`.
    ///
    /// Returns a ticket to fire after [`HideTicket::delay_ms`], or `None` when
    /// `key` is not the active disclosure (a sibling already took over).
    pub fn leave(&mut self, key: &K) -> Option<HideTicket> {
        if self.torn_down || self.active.as_ref() != Some(key) {
            return None;
        }
        self.generation += 1;
        self.pending = Some(self.generation);
        Some(HideTicket { generation: self.generation, delay_ms: self.delay_ms })
    }
}
