//! Wrapping carousel index with slide-direction metadata.
//!
//! DESIGN
//! ======
//! The controller only knows the list length, never the items. Views index
//! their own slice with [`Carousel::current`]. Every move that changes the
//! index bumps `transition_seq`; views key the active slide on it so a second
//! click mid-animation restarts the slide from wherever it is instead of
//! queueing behind the first.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

use serde::{Deserialize, Serialize};

use crate::consts::SLIDE_TRAVEL_PCT;

/// Which way the last move travelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Backward,
    #[default]
    Still,
    Forward,
}

impl Direction {
    /// Signed form: `-1`, `0`, or `+1`.
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Self::Backward => -1,
            Self::Still => 0,
            Self::Forward => 1,
        }
    }

    fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Less => Self::Backward,
            std::cmp::Ordering::Equal => Self::Still,
            std::cmp::Ordering::Greater => Self::Forward,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    Empty,
    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Previous,
    Next,
}

impl NavKey {
    /// Map a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Enter/exit offsets for the slide transition, in percent of slide width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    pub seq: u64,
    pub enter_from_pct: f64,
    pub exit_to_pct: f64,
}

/// Carousel position over `len` items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Carousel {
    len: usize,
    index: usize,
    direction: Direction,
    transition_seq: u64,
}

impl Carousel {
    /// Start at the first item.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Empty`] when `len` is zero.
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        Self::starting_at(len, 0)
    }

    /// Start at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::Empty`] when `len` is zero, or
    /// [`CarouselError::OutOfRange`] when `start >= len`.
    pub fn starting_at(len: usize, start: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        if start >= len {
            return Err(CarouselError::OutOfRange { index: start, len });
        }
        Ok(Self { len, index: start, direction: Direction::Still, transition_seq: 0 })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`; a carousel cannot be constructed empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn transition_seq(&self) -> u64 {
        self.transition_seq
    }

    /// Advance one item, wrapping to the start.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
        self.direction = Direction::Forward;
        self.transition_seq += 1;
    }

    /// Step back one item, wrapping to the end.
    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
        self.direction = Direction::Backward;
        self.transition_seq += 1;
    }

    /// Jump directly to `index` (dot navigation).
    ///
    /// Jumping to the current index leaves the position alone and sets the
    /// direction to [`Direction::Still`].
    ///
    /// # Errors
    ///
    /// Returns [`CarouselError::OutOfRange`] without touching state when
    /// `index >= len`.
    pub fn go_to(&mut self, index: usize) -> Result<(), CarouselError> {
        if index >= self.len {
            return Err(CarouselError::OutOfRange { index, len: self.len });
        }
        self.direction = Direction::between(self.index, index);
        if index != self.index {
            self.index = index;
            self.transition_seq += 1;
        }
        Ok(())
    }

    /// Apply a navigation key. Returns `true` when the key was handled.
    pub fn handle_key(&mut self, key: NavKey) -> bool {
        match key {
            NavKey::Previous => self.prev(),
            NavKey::Next => self.next(),
        }
        true
    }

    /// The item at the current index of `items`.
    ///
    /// `items` is expected to have `len()` entries; a shorter slice yields `None`.
    #[must_use]
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }

    /// Slide offsets for the transition that produced the current index.
    #[must_use]
    pub fn transition(&self) -> SlideTransition {
        let sign = f64::from(self.direction.sign());
        SlideTransition {
            seq: self.transition_seq,
            enter_from_pct: sign * SLIDE_TRAVEL_PCT,
            exit_to_pct: -sign * SLIDE_TRAVEL_PCT,
        }
    }
}
