//! Per-clip event lists.
//!
//! The animation driver samples normalized time once per step and asks the
//! clip which events were crossed since the previous sample. Tracking what
//! already fired during the current loop stays with the driver.
//!
//! ## Crossing window
//!
//! For a step from `from` to `to` (both normalized):
//! - `from < to`: events with `from <= time < to`. When `to` reaches the
//!   clip end (`to >= 1`) the window also includes `time == 1`.
//! - `to < from`: playback looped, so the window is `[from, 1]` followed
//!   by `[0, to)`. A step that starts at the clip end (`from >= 1`) only
//!   covers `[0, to)`: the previous step already included `time == 1`.
//! - `from == to`: nothing was crossed.
//!
//! Consecutive steps therefore partition the loop, and every event is
//! crossed once per loop.

use serde::{Deserialize, Serialize};

use crate::params::ParameterSource;

use super::activation::{activate, Activation, ActivationSite};
use super::condition::ConditionEvaluator;
use super::event::AnimationEvent;

/// Ordered list of events authored on one clip.
///
/// Serialized as a plain list of
/// [`EventRecord`](crate::record::EventRecord)s, so loading validates
/// every event.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClipEvents {
    events: Vec<AnimationEvent>,
}

impl ClipEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event (builder pattern).
    #[must_use]
    pub fn with_event(mut self, event: AnimationEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn push(&mut self, event: AnimationEvent) {
        self.events.push(event);
    }

    /// Stable sort by normalized time; events sharing a time keep
    /// their authored order.
    pub fn sort_by_time(&mut self) {
        self.events.sort_by(|a, b| a.time.total_cmp(&b.time));
    }

    #[must_use]
    pub fn events(&self) -> &[AnimationEvent] {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut Vec<AnimationEvent> {
        &mut self.events
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnimationEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events whose time lies in the crossing window `from -> to`.
    ///
    /// Returned in list order; on a loop wrap the tail of the clip comes
    /// before its head.
    #[must_use]
    pub fn crossed(&self, from: f32, to: f32) -> Vec<&AnimationEvent> {
        if !from.is_finite() || !to.is_finite() || from == to {
            return Vec::new();
        }

        if from < to {
            let reaches_end = to >= 1.0;
            return self
                .events
                .iter()
                .filter(|e| e.time >= from && (e.time < to || (reaches_end && e.time <= to)))
                .collect();
        }

        let tail = self
            .events
            .iter()
            .filter(|e| from < 1.0 && e.time >= from && e.time <= 1.0);
        let head = self.events.iter().filter(|e| e.time >= 0.0 && e.time < to);
        tail.chain(head).collect()
    }

    /// Activate every crossed event whose conditions pass.
    pub fn activate_crossed<'a>(
        &'a self,
        from: f32,
        to: f32,
        site: ActivationSite,
        source: &impl ParameterSource,
        evaluator: &ConditionEvaluator,
    ) -> Vec<Activation<'a>> {
        self.crossed(from, to)
            .into_iter()
            .filter_map(|event| activate(event, site, source, evaluator))
            .collect()
    }
}

impl FromIterator<AnimationEvent> for ClipEvents {
    fn from_iter<I: IntoIterator<Item = AnimationEvent>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}
