//! Named scroll profiles, registered once per process.
//!
//! A scroll profile is a declarative description of a looping horizontal
//! translation. Layers never own their profile; they look it up in a
//! [`KeyframeRegistry`] under a fixed id. Registration is check-then-insert
//! under a single lock and the entry is never replaced, so any number of
//! layers can mount without duplicating it.

use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex, MutexGuard, PoisonError},
};

use warren_core::Direction;

/// Registry id of the standard scroll sheet.
pub const SCROLL_SHEET_ID: &str = "warren-scroll";

/// A linear, endlessly looping horizontal translation.
///
/// `from` and `to` are expressed in spans: `-1.0` means shifted left by one
/// full tile width.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollProfile {
    name: &'static str,
    direction: Direction,
    from: f64,
    to: f64,
}

impl ScrollProfile {
    pub const fn new(name: &'static str, direction: Direction, from: f64, to: f64) -> Self {
        Self {
            name,
            direction,
            from,
            to,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Translation at `phase` (0.0 to 1.0 through one loop), in spans.
    pub fn translate(&self, phase: f64) -> f64 {
        let phase = phase.clamp(0.0, 1.0);
        self.from + (self.to - self.from) * phase
    }

    /// Which source column lands on screen column 0, for a tile `span` cells
    /// wide.
    pub fn offset(&self, phase: f64, span: usize) -> usize {
        if span == 0 {
            return 0;
        }
        let shift = (-self.translate(phase) * span as f64).floor() as i64;
        shift.rem_euclid(span as i64) as usize
    }
}

/// The pair of profiles a scrolling layer picks from.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSheet {
    forward: ScrollProfile,
    reverse: ScrollProfile,
}

impl ScrollSheet {
    /// Forward slides content left by one span; reverse slides it back right.
    pub fn standard() -> Self {
        Self {
            forward: ScrollProfile::new("warren-scroll-forward", Direction::Forward, 0.0, -1.0),
            reverse: ScrollProfile::new("warren-scroll-reverse", Direction::Reverse, -1.0, 0.0),
        }
    }

    pub fn profile(&self, direction: Direction) -> &ScrollProfile {
        match direction {
            Direction::Forward => &self.forward,
            Direction::Reverse => &self.reverse,
        }
    }
}

/// Process-wide store of named scroll sheets.
#[derive(Debug, Default)]
pub struct KeyframeRegistry {
    sheets: Mutex<HashMap<&'static str, Arc<ScrollSheet>>>,
}

static GLOBAL: LazyLock<KeyframeRegistry> = LazyLock::new(KeyframeRegistry::new);

impl KeyframeRegistry {
    /// An empty registry. The app uses [`KeyframeRegistry::global`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry shared by the whole process.
    pub fn global() -> &'static KeyframeRegistry {
        &GLOBAL
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<&'static str, Arc<ScrollSheet>>> {
        self.sheets.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert the sheet built by `build` unless `id` is already present.
    ///
    /// Returns the stored sheet and whether this call created it. `build`
    /// only runs on first registration.
    pub fn register_with(
        &self,
        id: &'static str,
        build: impl FnOnce() -> ScrollSheet,
    ) -> (Arc<ScrollSheet>, bool) {
        let mut sheets = self.lock();
        if let Some(existing) = sheets.get(id) {
            return (existing.clone(), false);
        }
        let sheet = Arc::new(build());
        sheets.insert(id, sheet.clone());
        tracing::debug!(id, "registered scroll sheet");
        (sheet, true)
    }

    /// The standard scroll sheet, registering it on first use.
    pub fn scroll_sheet(&self) -> Arc<ScrollSheet> {
        self.register_with(SCROLL_SHEET_ID, ScrollSheet::standard).0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lock().contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
