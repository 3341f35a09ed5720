//! Event activation.
//!
//! Firing an event produces an [`Activation`]: where in the animation graph
//! the event came from plus a borrowed reference to the event itself. The
//! caller passes it on to skill execution; no activation state is kept
//! anywhere else.

use serde::{Deserialize, Serialize};

use crate::params::ParameterSource;

use super::category::SkillActionType;
use super::condition::ConditionEvaluator;
use super::event::AnimationEvent;
use super::payload::EventPayload;

/// Location in the animation graph that produced an event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivationSite {
    /// Animation controller instance.
    pub controller_id: i32,
    /// Layer index within the controller.
    pub layer: i32,
    /// Hash of the playing state.
    pub state_hash: i32,
    /// Hash of the playing state's tag.
    pub tag_hash: i32,
}

impl ActivationSite {
    pub fn new(controller_id: i32, layer: i32, state_hash: i32, tag_hash: i32) -> Self {
        Self {
            controller_id,
            layer,
            state_hash,
            tag_hash,
        }
    }
}

/// A fired event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Activation<'a> {
    pub site: ActivationSite,
    pub event: &'a AnimationEvent,
}

impl<'a> Activation<'a> {
    #[must_use]
    pub fn category(&self) -> SkillActionType {
        self.event.category
    }

    #[must_use]
    pub fn payload(&self) -> &'a EventPayload {
        &self.event.payload
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.event.critical
    }
}

/// Fire `event` if it is enabled and its conditions pass.
///
/// Each call is independent: a failed condition means "no fire this step"
/// and the same event may be tried again on a later step.
pub fn activate<'a>(
    event: &'a AnimationEvent,
    site: ActivationSite,
    source: &impl ParameterSource,
    evaluator: &ConditionEvaluator,
) -> Option<Activation<'a>> {
    if !event.should_fire(source, evaluator) {
        return None;
    }

    log::trace!(
        "event `{}` fired at {} ({}) on controller {} layer {}",
        event.name,
        event.time,
        event.category,
        site.controller_id,
        site.layer
    );
    Some(Activation { site, event })
}
