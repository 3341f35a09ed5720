//! Typed event payloads.
//!
//! Every event carries at most one parameter for its handler. The payload
//! is a sum type, so the value that does not match the kind cannot exist.

use serde::{Deserialize, Serialize};

/// Discriminator of an [`EventPayload`].
///
/// The numeric codes are the ones used by persisted records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayloadKind {
    #[default]
    None = 0,
    Int32 = 1,
    Float = 2,
    String = 3,
    Boolean = 4,
}

/// The single parameter handed to an event's handler.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum EventPayload {
    #[default]
    None,
    Int32(i32),
    Float(f32),
    String(String),
    Boolean(bool),
}

/// Borrowed view of a present payload value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PayloadValue<'a> {
    Int32(i32),
    Float(f32),
    String(&'a str),
    Boolean(bool),
}

impl EventPayload {
    #[must_use]
    pub fn kind(&self) -> PayloadKind {
        match self {
            EventPayload::None => PayloadKind::None,
            EventPayload::Int32(_) => PayloadKind::Int32,
            EventPayload::Float(_) => PayloadKind::Float,
            EventPayload::String(_) => PayloadKind::String,
            EventPayload::Boolean(_) => PayloadKind::Boolean,
        }
    }

    /// The value selected by the kind, or `None` for an empty payload.
    #[must_use]
    pub fn value(&self) -> Option<PayloadValue<'_>> {
        match self {
            EventPayload::None => None,
            EventPayload::Int32(v) => Some(PayloadValue::Int32(*v)),
            EventPayload::Float(v) => Some(PayloadValue::Float(*v)),
            EventPayload::String(s) => Some(PayloadValue::String(s)),
            EventPayload::Boolean(v) => Some(PayloadValue::Boolean(*v)),
        }
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, EventPayload::None)
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            EventPayload::Int32(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            EventPayload::Float(v) => Some(*v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EventPayload::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            EventPayload::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i32> for EventPayload {
    fn from(v: i32) -> Self {
        EventPayload::Int32(v)
    }
}

impl From<f32> for EventPayload {
    fn from(v: f32) -> Self {
        EventPayload::Float(v)
    }
}

impl From<bool> for EventPayload {
    fn from(v: bool) -> Self {
        EventPayload::Boolean(v)
    }
}

impl From<String> for EventPayload {
    fn from(v: String) -> Self {
        EventPayload::String(v)
    }
}

impl From<&str> for EventPayload {
    fn from(v: &str) -> Self {
        EventPayload::String(v.to_string())
    }
}
