//! Animation events.
//!
//! An [`AnimationEvent`] is authored on a clip at a normalized time. When
//! playback crosses that time, the event fires if it is enabled and its
//! condition set passes against the current animation parameters.
//!
//! Events are value objects. They are read-only during playback and owned
//! by the clip's event list; nothing else holds on to them except the
//! borrowed back-reference in an [`Activation`](super::Activation).

use serde::{Deserialize, Serialize};

use crate::params::ParameterSource;
use crate::record::EventRecord;

use super::category::SkillActionType;
use super::condition::{ConditionEntry, ConditionEvaluator, ConditionSet};
use super::payload::EventPayload;

/// An event authored on an animation clip.
///
/// Serializes through the flat [`EventRecord`], so deserializing rejects
/// the same invalid data as [`record::from_json`](crate::record::from_json).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord", into = "EventRecord")]
pub struct AnimationEvent {
    /// Handler/function identifier.
    pub name: String,

    /// Normalized clip time in `[0, 1]` at which the event becomes eligible.
    pub time: f32,

    /// Which skill handler consumes the event.
    pub category: SkillActionType,

    /// Parameter passed to the handler.
    pub payload: EventPayload,

    /// Conditions that must all pass for the event to fire.
    pub condition: ConditionSet,

    /// Critical events must never be dropped by throttling or batching.
    pub critical: bool,

    /// Disabled events never fire.
    pub enabled: bool,
}

impl Default for AnimationEvent {
    fn default() -> Self {
        Self {
            name: String::new(),
            time: 0.0,
            category: SkillActionType::None,
            payload: EventPayload::None,
            condition: ConditionSet::new(),
            critical: false,
            enabled: true,
        }
    }
}

impl AnimationEvent {
    /// Create an enabled, unconditional event with no payload.
    pub fn new(name: impl Into<String>, time: f32) -> Self {
        Self {
            name: name.into(),
            time,
            ..Self::default()
        }
    }

    /// Set the category (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: SkillActionType) -> Self {
        self.category = category;
        self
    }

    /// Set the payload (builder pattern).
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<EventPayload>) -> Self {
        self.payload = payload.into();
        self
    }

    /// Replace the condition set (builder pattern).
    #[must_use]
    pub fn with_condition(mut self, condition: ConditionSet) -> Self {
        self.condition = condition;
        self
    }

    /// Append a condition entry (builder pattern).
    #[must_use]
    pub fn with_entry(mut self, entry: ConditionEntry) -> Self {
        self.condition.push(entry);
        self
    }

    /// Mark as critical (builder pattern).
    #[must_use]
    pub fn critical(mut self) -> Self {
        self.critical = true;
        self
    }

    /// Enable or disable (builder pattern).
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Independent copy for authoring tools.
    ///
    /// Only the active payload variant is carried over and the condition
    /// list is a fresh list, so edits on either side never leak to the other.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            name: self.name.clone(),
            time: self.time,
            category: self.category,
            payload: self.payload.clone(),
            condition: self.condition.iter().cloned().collect(),
            critical: self.critical,
            enabled: self.enabled,
        }
    }

    /// Whether the event is allowed to fire at all.
    #[must_use]
    pub fn can_fire(&self) -> bool {
        self.enabled
    }

    /// True if `time` is a finite value in `[0, 1]`.
    #[must_use]
    pub fn has_valid_time(&self) -> bool {
        self.time.is_finite() && (0.0..=1.0).contains(&self.time)
    }

    /// Decide whether the event fires against the given parameters.
    ///
    /// Disabled events return false without reading any parameter.
    #[must_use]
    pub fn should_fire(
        &self,
        source: &impl ParameterSource,
        evaluator: &ConditionEvaluator,
    ) -> bool {
        self.can_fire() && evaluator.evaluate(&self.condition, source)
    }
}
