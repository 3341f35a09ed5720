//! Condition-gated animation events.
//!
//! Events are authored on animation clips at normalized times. When the
//! animation driver crosses an event's time, the event fires if it is
//! enabled and every entry of its condition set passes against the live
//! animation parameters. A fired event is returned to the caller as an
//! [`Activation`] and handed to skill execution by its category.
//!
//! ## Key Components
//!
//! - [`ConditionEntry`] / [`ConditionSet`]: parameter comparisons, ANDed
//! - [`ConditionEvaluator`]: evaluates sets under an
//!   [`EvaluatorConfig`](crate::config::EvaluatorConfig)
//! - [`EventPayload`]: the single typed parameter of an event
//! - [`SkillActionType`]: which skill handler consumes the event
//! - [`AnimationEvent`]: the authored event record
//! - [`ClipEvents`]: a clip's event list, queried by time crossing
//! - [`Activation`]: a fired event plus the graph location that fired it
//! - [`ActivationBatch`]: per-step throttling that never drops critical events
//!
//! ## Example Usage
//!
//! ```
//! use anim_events::events::{
//!     ActivationSite, AnimationEvent, ClipEvents, ConditionEntry,
//!     ConditionEvaluator, ConditionMode, SkillActionType,
//! };
//! use anim_events::params::ParameterMap;
//!
//! let clip = ClipEvents::new()
//!     .with_event(
//!         AnimationEvent::new("ShakeOnLanding", 0.4)
//!             .with_category(SkillActionType::ShakeCamera)
//!             .with_payload(0.75f32)
//!             .with_entry(ConditionEntry::boolean("grounded", true)),
//!     )
//!     .with_event(
//!         AnimationEvent::new("Finisher", 0.8)
//!             .with_category(SkillActionType::HitedEvent)
//!             .with_entry(ConditionEntry::int("combo", ConditionMode::GreaterEqualThan, 3)),
//!     );
//!
//! let params = ParameterMap::new().with_bool("grounded", true).with_int("combo", 1);
//! let site = ActivationSite::new(1, 0, 0x1234, 0);
//! let evaluator = ConditionEvaluator::default();
//!
//! let fired = clip.activate_crossed(0.0, 1.0, site, &params, &evaluator);
//! assert_eq!(fired.len(), 1);
//! assert_eq!(fired[0].category(), SkillActionType::ShakeCamera);
//! assert_eq!(fired[0].payload().as_float(), Some(0.75));
//! ```

mod activation;
mod batch;
mod category;
mod clip;
mod condition;
mod event;
mod payload;

pub use activation::{activate, Activation, ActivationSite};
pub use batch::ActivationBatch;
pub use category::SkillActionType;
pub use clip::ClipEvents;
pub use condition::{
    ConditionEntry, ConditionEvaluator, ConditionMode, ConditionOperand, ConditionParamType,
    ConditionSet,
};
pub use event::AnimationEvent;
pub use payload::{EventPayload, PayloadKind, PayloadValue};
