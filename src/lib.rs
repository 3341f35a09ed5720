//! # anim-events
//!
//! Animation-driven gameplay events: triggers authored at normalized times
//! on animation clips, gated by animation parameter conditions, carrying a
//! typed payload for skill/ability logic (camera shake, hit reactions,
//! effects, audio, movement, ...).
//!
//! ## Design Principles
//!
//! 1. **Engine-Agnostic**: Parameters are read through the
//!    [`ParameterSource`] trait. The engine binding and test doubles are
//!    interchangeable.
//!
//! 2. **No Global State**: Firing an event returns an [`Activation`] to the
//!    caller instead of publishing a process-wide "current event".
//!
//! 3. **Typed Payloads**: An event's parameter is a sum type; only the
//!    active variant exists.
//!
//! 4. **Compatible by Default**: [`EvaluatorConfig::default`] evaluates
//!    conditions exactly like the authoring tools expect. The complete
//!    comparison tables are opt-in.
//!
//! ## Modules
//!
//! - `params`: Parameter source trait and in-memory snapshot
//! - `events`: Conditions, payloads, events, clips, activation, throttling
//! - `record`: Flat persisted representation (JSON and binary)
//! - `config`: Evaluator configuration
//! - `error`: Error types
//!
//! Evaluation is single-threaded and synchronous. Authored events are
//! read-only during playback.

pub mod config;
pub mod error;
pub mod events;
pub mod params;
pub mod record;

// Re-export commonly used types
pub use crate::config::{BooleanModePolicy, EvaluatorConfig, FloatModePolicy};
pub use crate::error::{EventError, Result};
pub use crate::events::{
    activate, Activation, ActivationBatch, ActivationSite, AnimationEvent, ClipEvents,
    ConditionEntry, ConditionEvaluator, ConditionMode, ConditionOperand, ConditionParamType,
    ConditionSet, EventPayload, PayloadKind, PayloadValue, SkillActionType,
};
pub use crate::params::{ParamValue, ParameterMap, ParameterSource};
pub use crate::record::{ConditionRecord, EventRecord};
