//! Flat persisted representation of authored events.
//!
//! Each event is stored as an [`EventRecord`]: scalar fields, a payload
//! kind, one optional slot per payload type, and a list of flat
//! [`ConditionRecord`]s. Writers only fill the slot matching the payload
//! kind; readers only look at that slot.
//!
//! Clips are stored as a list of records, as JSON (`serde_json`) or as a
//! compact binary blob (`bincode`).
//!
//! ```
//! use anim_events::events::{AnimationEvent, ClipEvents, SkillActionType};
//! use anim_events::record;
//!
//! let clip = ClipEvents::new().with_event(
//!     AnimationEvent::new("PlayStep", 0.5)
//!         .with_category(SkillActionType::PlayAudio)
//!         .with_payload("footstep_01"),
//! );
//!
//! let json = record::to_json(&clip).unwrap();
//! assert!(json.contains("\"stringParam\":\"footstep_01\""));
//! assert_eq!(record::from_json(&json).unwrap(), clip);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{EventError, Result};
use crate::events::{
    AnimationEvent, ClipEvents, ConditionEntry, ConditionMode, ConditionOperand,
    ConditionParamType, EventPayload, PayloadKind, SkillActionType,
};

/// One persisted condition entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRecord {
    pub parameter_name: String,
    pub parameter_type: ConditionParamType,
    pub mode: ConditionMode,
    #[serde(default)]
    pub int_value: i32,
    #[serde(default)]
    pub float_value: f32,
    #[serde(default)]
    pub bool_value: bool,
}

impl From<&ConditionEntry> for ConditionRecord {
    fn from(entry: &ConditionEntry) -> Self {
        let mut record = Self {
            parameter_name: entry.parameter_name.clone(),
            parameter_type: entry.param_type(),
            mode: entry.mode,
            int_value: 0,
            float_value: 0.0,
            bool_value: false,
        };
        match entry.operand {
            ConditionOperand::Int(v) => record.int_value = v,
            ConditionOperand::Float(v) => record.float_value = v,
            ConditionOperand::Boolean(v) => record.bool_value = v,
        }
        record
    }
}

impl From<ConditionRecord> for ConditionEntry {
    fn from(record: ConditionRecord) -> Self {
        let operand = match record.parameter_type {
            ConditionParamType::Int => ConditionOperand::Int(record.int_value),
            ConditionParamType::Float => ConditionOperand::Float(record.float_value),
            ConditionParamType::Boolean => ConditionOperand::Boolean(record.bool_value),
        };
        ConditionEntry::new(record.parameter_name, record.mode, operand)
    }
}

/// One persisted event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub name: String,
    pub time: f32,
    pub payload_kind: PayloadKind,
    /// [`SkillActionType`] code.
    pub category: u8,
    #[serde(default)]
    pub int_param: Option<i32>,
    #[serde(default)]
    pub float_param: Option<f32>,
    #[serde(default)]
    pub string_param: Option<String>,
    #[serde(default)]
    pub bool_param: Option<bool>,
    #[serde(default)]
    pub conditions: Vec<ConditionRecord>,
    #[serde(default)]
    pub critical: bool,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl From<&AnimationEvent> for EventRecord {
    fn from(event: &AnimationEvent) -> Self {
        let mut record = Self {
            name: event.name.clone(),
            time: event.time,
            payload_kind: event.payload.kind(),
            category: event.category.code(),
            int_param: None,
            float_param: None,
            string_param: None,
            bool_param: None,
            conditions: event.condition.iter().map(ConditionRecord::from).collect(),
            critical: event.critical,
            enabled: event.enabled,
        };
        match &event.payload {
            EventPayload::None => {}
            EventPayload::Int32(v) => record.int_param = Some(*v),
            EventPayload::Float(v) => record.float_param = Some(*v),
            EventPayload::String(s) => record.string_param = Some(s.clone()),
            EventPayload::Boolean(v) => record.bool_param = Some(*v),
        }
        record
    }
}

impl From<AnimationEvent> for EventRecord {
    fn from(event: AnimationEvent) -> Self {
        Self::from(&event)
    }
}

impl TryFrom<EventRecord> for AnimationEvent {
    type Error = EventError;

    /// Slots that do not match `payload_kind` are ignored. A missing
    /// matching slot reads as the type's default value.
    fn try_from(record: EventRecord) -> Result<Self> {
        if !record.time.is_finite() || !(0.0..=1.0).contains(&record.time) {
            return Err(EventError::InvalidTime(record.time));
        }
        let category = SkillActionType::try_from(record.category)?;

        let payload = match record.payload_kind {
            PayloadKind::None => EventPayload::None,
            PayloadKind::Int32 => EventPayload::Int32(record.int_param.unwrap_or_default()),
            PayloadKind::Float => EventPayload::Float(record.float_param.unwrap_or_default()),
            PayloadKind::String => EventPayload::String(record.string_param.unwrap_or_default()),
            PayloadKind::Boolean => EventPayload::Boolean(record.bool_param.unwrap_or_default()),
        };

        Ok(Self {
            name: record.name,
            time: record.time,
            category,
            payload,
            condition: record.conditions.into_iter().map(ConditionEntry::from).collect(),
            critical: record.critical,
            enabled: record.enabled,
        })
    }
}

/// Flatten a clip into records.
#[must_use]
pub fn to_records(clip: &ClipEvents) -> Vec<EventRecord> {
    clip.iter().map(EventRecord::from).collect()
}

/// Rebuild a clip from records, failing on the first invalid one.
pub fn from_records(records: Vec<EventRecord>) -> Result<ClipEvents> {
    records.into_iter().map(AnimationEvent::try_from).collect()
}

pub fn to_json(clip: &ClipEvents) -> Result<String> {
    Ok(serde_json::to_string(&to_records(clip))?)
}

pub fn from_json(json: &str) -> Result<ClipEvents> {
    from_records(serde_json::from_str(json)?)
}

pub fn to_bytes(clip: &ClipEvents) -> Result<Vec<u8>> {
    Ok(bincode::serialize(&to_records(clip))?)
}

pub fn from_bytes(bytes: &[u8]) -> Result<ClipEvents> {
    from_records(bincode::deserialize(bytes)?)
}
