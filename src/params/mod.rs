//! Animation parameters read by event conditions.
//!
//! The animation state machine exposes named integer, float and boolean
//! parameters. Conditions only ever read them through [`ParameterSource`],
//! so the engine binding and the test doubles are interchangeable.
//!
//! ## Example
//!
//! ```
//! use anim_events::params::{ParameterMap, ParameterSource};
//!
//! let params = ParameterMap::new()
//!     .with_int("combo", 2)
//!     .with_float("speed", 1.5)
//!     .with_bool("grounded", true);
//!
//! assert_eq!(params.get_integer("combo"), 2);
//! assert_eq!(params.get_float("speed"), 1.5);
//! assert!(params.get_boolean("grounded"));
//!
//! // Unknown names fall back to zero/false.
//! assert_eq!(params.get_integer("missing"), 0);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Read access to the current animation parameters.
///
/// Implementations decide what an unknown name yields. The engine binding
/// returns zero/false for missing parameters, and so does [`ParameterMap`].
pub trait ParameterSource {
    /// Current value of an integer parameter.
    fn get_integer(&self, name: &str) -> i32;

    /// Current value of a float parameter.
    fn get_float(&self, name: &str) -> f32;

    /// Current value of a boolean parameter.
    fn get_boolean(&self, name: &str) -> bool;
}

impl<T: ParameterSource + ?Sized> ParameterSource for &T {
    fn get_integer(&self, name: &str) -> i32 {
        (**self).get_integer(name)
    }

    fn get_float(&self, name: &str) -> f32 {
        (**self).get_float(name)
    }

    fn get_boolean(&self, name: &str) -> bool {
        (**self).get_boolean(name)
    }
}

/// A single parameter value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Int(i32),
    Float(f32),
    Bool(bool),
}

impl ParamValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            ParamValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as float if this is a Float value.
    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            ParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v)
    }
}

impl From<f32> for ParamValue {
    fn from(v: f32) -> Self {
        ParamValue::Float(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

/// Snapshot of animation parameters keyed by name.
///
/// Reading a name with a value of a different type behaves like a missing
/// parameter and yields the type's zero value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterMap {
    values: FxHashMap<String, ParamValue>,
}

impl ParameterMap {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an integer parameter (builder pattern).
    #[must_use]
    pub fn with_int(mut self, name: impl Into<String>, value: i32) -> Self {
        self.set(name, value);
        self
    }

    /// Set a float parameter (builder pattern).
    #[must_use]
    pub fn with_float(mut self, name: impl Into<String>, value: f32) -> Self {
        self.set(name, value);
        self
    }

    /// Set a boolean parameter (builder pattern).
    #[must_use]
    pub fn with_bool(mut self, name: impl Into<String>, value: bool) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or overwrite a parameter.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<ParamValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Remove a parameter, returning its last value.
    pub fn remove(&mut self, name: &str) -> Option<ParamValue> {
        self.values.remove(name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<ParamValue> {
        self.values.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ParameterSource for ParameterMap {
    fn get_integer(&self, name: &str) -> i32 {
        self.get(name).and_then(|v| v.as_int()).unwrap_or(0)
    }

    fn get_float(&self, name: &str) -> f32 {
        self.get(name).and_then(|v| v.as_float()).unwrap_or(0.0)
    }

    fn get_boolean(&self, name: &str) -> bool {
        self.get(name).and_then(|v| v.as_bool()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_value_accessors() {
        let int = ParamValue::Int(3);
        assert_eq!(int.as_int(), Some(3));
        assert_eq!(int.as_float(), None);

        let float: ParamValue = 0.5f32.into();
        assert_eq!(float.as_float(), Some(0.5));
        assert_eq!(float.as_bool(), None);

        let boolean: ParamValue = true.into();
        assert_eq!(boolean.as_bool(), Some(true));
    }

    #[test]
    fn test_parameter_map_reads() {
        let params = ParameterMap::new()
            .with_int("combo", 4)
            .with_float("speed", 2.5)
            .with_bool("airborne", true);

        assert_eq!(params.len(), 3);
        assert_eq!(params.get_integer("combo"), 4);
        assert_eq!(params.get_float("speed"), 2.5);
        assert!(params.get_boolean("airborne"));
    }

    #[test]
    fn test_missing_parameters_default() {
        let params = ParameterMap::new();
        assert!(params.is_empty());
        assert_eq!(params.get_integer("nope"), 0);
        assert_eq!(params.get_float("nope"), 0.0);
        assert!(!params.get_boolean("nope"));
    }

    #[test]
    fn test_type_mismatch_defaults() {
        let params = ParameterMap::new().with_float("speed", 3.0);
        assert_eq!(params.get_integer("speed"), 0);
        assert!(!params.get_boolean("speed"));
    }

    #[test]
    fn test_set_and_remove() {
        let mut params = ParameterMap::new();
        params.set("combo", 1);
        params.set("combo", 2);
        assert_eq!(params.get_integer("combo"), 2);

        assert_eq!(params.remove("combo"), Some(ParamValue::Int(2)));
        assert_eq!(params.get_integer("combo"), 0);
    }

    #[test]
    fn test_source_through_reference() {
        fn read(source: impl ParameterSource) -> i32 {
            source.get_integer("combo")
        }

        let params = ParameterMap::new().with_int("combo", 7);
        assert_eq!(read(&params), 7);
    }
}
