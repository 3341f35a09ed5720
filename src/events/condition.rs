//! Event conditions.
//!
//! A [`ConditionSet`] is a list of parameter comparisons that must all pass
//! for an event to fire. Each [`ConditionEntry`] names an animation
//! parameter, a comparison mode and a typed operand.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::config::{BooleanModePolicy, EvaluatorConfig, FloatModePolicy};
use crate::params::ParameterSource;

/// Which parameter accessor a condition reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionParamType {
    Int,
    Float,
    Boolean,
}

/// Comparison applied between the live parameter value and the operand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionMode {
    #[default]
    Equal = 0,
    NotEqual = 1,
    GreaterThan = 2,
    LessThan = 3,
    GreaterEqualThan = 4,
    LessEqualThan = 5,
}

impl ConditionMode {
    /// All modes in declaration order.
    pub const ALL: [ConditionMode; 6] = [
        ConditionMode::Equal,
        ConditionMode::NotEqual,
        ConditionMode::GreaterThan,
        ConditionMode::LessThan,
        ConditionMode::GreaterEqualThan,
        ConditionMode::LessEqualThan,
    ];

    /// Compare `value` (live) against `operand` (authored).
    #[must_use]
    pub fn compare<T: PartialOrd>(self, value: T, operand: T) -> bool {
        match self {
            ConditionMode::Equal => value == operand,
            ConditionMode::NotEqual => value != operand,
            ConditionMode::GreaterThan => value > operand,
            ConditionMode::LessThan => value < operand,
            ConditionMode::GreaterEqualThan => value >= operand,
            ConditionMode::LessEqualThan => value <= operand,
        }
    }
}

/// The authored operand of a condition. Its variant selects the
/// parameter type, so only one operand is ever stored.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConditionOperand {
    Int(i32),
    Float(f32),
    Boolean(bool),
}

impl ConditionOperand {
    #[must_use]
    pub fn param_type(&self) -> ConditionParamType {
        match self {
            ConditionOperand::Int(_) => ConditionParamType::Int,
            ConditionOperand::Float(_) => ConditionParamType::Float,
            ConditionOperand::Boolean(_) => ConditionParamType::Boolean,
        }
    }
}

/// One comparison rule.
///
/// An entry with an empty parameter name is not configured yet and
/// always passes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConditionEntry {
    /// Name of the animation parameter to read.
    pub parameter_name: String,

    /// Comparison mode.
    pub mode: ConditionMode,

    /// Typed operand; also selects the parameter type.
    pub operand: ConditionOperand,
}

impl ConditionEntry {
    /// Create an entry.
    pub fn new(
        parameter_name: impl Into<String>,
        mode: ConditionMode,
        operand: ConditionOperand,
    ) -> Self {
        Self {
            parameter_name: parameter_name.into(),
            mode,
            operand,
        }
    }

    /// Integer comparison.
    pub fn int(parameter_name: impl Into<String>, mode: ConditionMode, value: i32) -> Self {
        Self::new(parameter_name, mode, ConditionOperand::Int(value))
    }

    /// Float comparison.
    pub fn float(parameter_name: impl Into<String>, mode: ConditionMode, value: f32) -> Self {
        Self::new(parameter_name, mode, ConditionOperand::Float(value))
    }

    /// Boolean equality check.
    pub fn boolean(parameter_name: impl Into<String>, value: bool) -> Self {
        Self::new(parameter_name, ConditionMode::Equal, ConditionOperand::Boolean(value))
    }

    /// Set the mode (builder pattern).
    #[must_use]
    pub fn with_mode(mut self, mode: ConditionMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn param_type(&self) -> ConditionParamType {
        self.operand.param_type()
    }

    /// Entries without a parameter name are skipped during evaluation.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.parameter_name.is_empty()
    }
}

/// Conjunction of condition entries.
///
/// An empty set has no constraints and always passes. Entry order only
/// affects how early evaluation can stop.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionSet {
    entries: SmallVec<[ConditionEntry; 4]>,
}

impl ConditionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry (builder pattern).
    #[must_use]
    pub fn with_entry(mut self, entry: ConditionEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Append an entry.
    pub fn push(&mut self, entry: ConditionEntry) {
        self.entries.push(entry);
    }

    /// Remove and return the entry at `index`.
    pub fn remove(&mut self, index: usize) -> ConditionEntry {
        self.entries.remove(index)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn entries(&self) -> &[ConditionEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [ConditionEntry] {
        &mut self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConditionEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Evaluate against `source` with the default (legacy) configuration.
    #[must_use]
    pub fn evaluate(&self, source: &impl ParameterSource) -> bool {
        ConditionEvaluator::default().evaluate(self, source)
    }
}

impl FromIterator<ConditionEntry> for ConditionSet {
    fn from_iter<I: IntoIterator<Item = ConditionEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ConditionSet {
    type Item = &'a ConditionEntry;
    type IntoIter = std::slice::Iter<'a, ConditionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Evaluator for condition sets.
///
/// Evaluation is a pure read of the parameter source: it stops at the first
/// failing entry and never reads parameters for skipped entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConditionEvaluator {
    config: EvaluatorConfig,
}

impl ConditionEvaluator {
    pub fn new(config: EvaluatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// True iff every non-skipped entry passes.
    #[must_use]
    pub fn evaluate(&self, set: &ConditionSet, source: &impl ParameterSource) -> bool {
        set.iter().all(|entry| self.evaluate_entry(entry, source))
    }

    /// Check a single entry.
    #[must_use]
    pub fn evaluate_entry(&self, entry: &ConditionEntry, source: &impl ParameterSource) -> bool {
        if entry.is_skipped() {
            return true;
        }

        let name = entry.parameter_name.as_str();
        let passed = match entry.operand {
            ConditionOperand::Int(operand) => entry.mode.compare(source.get_integer(name), operand),

            ConditionOperand::Float(operand) => match (self.config.float_modes, entry.mode) {
                (FloatModePolicy::Full, mode) => mode.compare(source.get_float(name), operand),
                (FloatModePolicy::Legacy, ConditionMode::GreaterThan) => {
                    legacy_float_check(source.get_float(name), operand, Ordering::Greater)
                }
                (FloatModePolicy::Legacy, ConditionMode::LessThan) => {
                    legacy_float_check(source.get_float(name), operand, Ordering::Less)
                }
                (FloatModePolicy::Legacy, mode) => {
                    if self.config.warn_unsupported {
                        log::warn!(
                            "float condition on `{}` uses unsupported mode {:?}; treating as pass",
                            name,
                            mode
                        );
                    }
                    true
                }
            },

            ConditionOperand::Boolean(operand) => {
                let value = source.get_boolean(name);
                match (self.config.boolean_modes, entry.mode) {
                    (BooleanModePolicy::Honor, ConditionMode::NotEqual) => value != operand,
                    _ => value == operand,
                }
            }
        };

        if !passed {
            log::trace!("condition on `{}` ({:?}) failed", name, entry.mode);
        }
        passed
    }
}

/// Legacy float check: fails only when `value` is ordered against
/// `operand` and the ordering differs from `expected`. Unordered (NaN)
/// comparisons pass.
fn legacy_float_check(value: f32, operand: f32, expected: Ordering) -> bool {
    value.partial_cmp(&operand).map_or(true, |ordering| ordering == expected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterMap;

    fn int_set(mode: ConditionMode, operand: i32) -> ConditionSet {
        ConditionSet::new().with_entry(ConditionEntry::int("combo", mode, operand))
    }

    #[test]
    fn test_empty_set_passes() {
        let set = ConditionSet::new();
        assert!(set.is_empty());
        assert!(set.evaluate(&ParameterMap::new()));
        assert!(set.evaluate(&ParameterMap::new().with_int("combo", 99)));
    }

    #[test]
    fn test_int_modes_equal_values() {
        let params = ParameterMap::new().with_int("combo", 5);

        assert!(int_set(ConditionMode::Equal, 5).evaluate(&params));
        assert!(!int_set(ConditionMode::NotEqual, 5).evaluate(&params));
        assert!(!int_set(ConditionMode::GreaterThan, 5).evaluate(&params));
        assert!(!int_set(ConditionMode::LessThan, 5).evaluate(&params));
        assert!(int_set(ConditionMode::GreaterEqualThan, 5).evaluate(&params));
        assert!(int_set(ConditionMode::LessEqualThan, 5).evaluate(&params));
    }

    #[test]
    fn test_int_modes_greater_value() {
        let params = ParameterMap::new().with_int("combo", 7);

        assert!(int_set(ConditionMode::GreaterThan, 5).evaluate(&params));
        assert!(!int_set(ConditionMode::LessEqualThan, 5).evaluate(&params));
        assert!(int_set(ConditionMode::NotEqual, 5).evaluate(&params));
        assert!(!int_set(ConditionMode::LessThan, 5).evaluate(&params));
    }

    #[test]
    fn test_float_legacy_modes() {
        let params = ParameterMap::new().with_float("speed", 3.0);
        let set = |mode| ConditionSet::new().with_entry(ConditionEntry::float("speed", mode, 2.0));

        assert!(set(ConditionMode::GreaterThan).evaluate(&params));
        assert!(!set(ConditionMode::LessThan).evaluate(&params));

        // Unsupported modes pass whatever the values are.
        assert!(set(ConditionMode::Equal).evaluate(&params));
        assert!(set(ConditionMode::LessEqualThan).evaluate(&params));
    }

    #[test]
    fn test_float_full_modes() {
        let evaluator = ConditionEvaluator::new(
            EvaluatorConfig::new().with_float_modes(FloatModePolicy::Full),
        );
        let params = ParameterMap::new().with_float("speed", 3.0);
        let set = |mode| ConditionSet::new().with_entry(ConditionEntry::float("speed", mode, 2.0));

        assert!(!evaluator.evaluate(&set(ConditionMode::Equal), &params));
        assert!(evaluator.evaluate(&set(ConditionMode::NotEqual), &params));
        assert!(evaluator.evaluate(&set(ConditionMode::GreaterEqualThan), &params));
        assert!(!evaluator.evaluate(&set(ConditionMode::LessEqualThan), &params));
    }

    #[test]
    fn test_float_nan_legacy_passes_full_fails() {
        let params = ParameterMap::new().with_float("speed", f32::NAN);
        let greater = ConditionSet::new()
            .with_entry(ConditionEntry::float("speed", ConditionMode::GreaterThan, 1.0));
        let less = ConditionSet::new()
            .with_entry(ConditionEntry::float("speed", ConditionMode::LessThan, 1.0));

        assert!(greater.evaluate(&params));
        assert!(less.evaluate(&params));

        let full = ConditionEvaluator::new(
            EvaluatorConfig::new().with_float_modes(FloatModePolicy::Full),
        );
        assert!(!full.evaluate(&greater, &params));
        assert!(!full.evaluate(&less, &params));
    }

    #[test]
    fn test_legacy_float_boundaries() {
        assert!(!legacy_float_check(2.0, 2.0, Ordering::Greater));
        assert!(!legacy_float_check(2.0, 2.0, Ordering::Less));
        assert!(legacy_float_check(2.5, 2.0, Ordering::Greater));
        assert!(legacy_float_check(1.5, 2.0, Ordering::Less));
        assert!(legacy_float_check(f32::NAN, 2.0, Ordering::Less));
    }

    #[test]
    fn test_boolean_ignores_mode() {
        let params = ParameterMap::new().with_bool("grounded", true);

        for mode in ConditionMode::ALL {
            let passing = ConditionSet::new()
                .with_entry(ConditionEntry::boolean("grounded", true).with_mode(mode));
            let failing = ConditionSet::new()
                .with_entry(ConditionEntry::boolean("grounded", false).with_mode(mode));

            assert!(passing.evaluate(&params), "mode {:?}", mode);
            assert!(!failing.evaluate(&params), "mode {:?}", mode);
        }
    }

    #[test]
    fn test_boolean_honor_not_equal() {
        let evaluator = ConditionEvaluator::new(
            EvaluatorConfig::new().with_boolean_modes(BooleanModePolicy::Honor),
        );
        let params = ParameterMap::new().with_bool("grounded", true);
        let set = ConditionSet::new().with_entry(
            ConditionEntry::boolean("grounded", false).with_mode(ConditionMode::NotEqual),
        );

        assert!(evaluator.evaluate(&set, &params));
        assert!(!set.evaluate(&params));
    }

    #[test]
    fn test_empty_name_skipped() {
        let params = ParameterMap::new().with_int("", 1);
        let set = ConditionSet::new()
            .with_entry(ConditionEntry::int("", ConditionMode::Equal, 42))
            .with_entry(ConditionEntry::boolean("", true));

        assert!(set.evaluate(&params));
        assert!(set.entries()[0].is_skipped());
    }

    #[test]
    fn test_and_semantics() {
        let params = ParameterMap::new()
            .with_int("combo", 2)
            .with_bool("grounded", true);

        let all_pass = ConditionSet::new()
            .with_entry(ConditionEntry::int("combo", ConditionMode::GreaterEqualThan, 2))
            .with_entry(ConditionEntry::boolean("grounded", true));
        assert!(all_pass.evaluate(&params));

        let mixed = all_pass
            .clone()
            .with_entry(ConditionEntry::int("combo", ConditionMode::Equal, 3));
        assert!(!mixed.evaluate(&params));
    }

    #[test]
    fn test_missing_parameter_uses_source_default() {
        let set = ConditionSet::new()
            .with_entry(ConditionEntry::int("combo", ConditionMode::Equal, 0))
            .with_entry(ConditionEntry::boolean("grounded", false));

        assert!(set.evaluate(&ParameterMap::new()));
    }

    #[test]
    fn test_param_type() {
        assert_eq!(
            ConditionEntry::int("a", ConditionMode::Equal, 1).param_type(),
            ConditionParamType::Int
        );
        assert_eq!(
            ConditionEntry::float("a", ConditionMode::LessThan, 1.0).param_type(),
            ConditionParamType::Float
        );
        assert_eq!(
            ConditionEntry::boolean("a", true).param_type(),
            ConditionParamType::Boolean
        );
    }

    #[test]
    fn test_set_editing() {
        let mut set: ConditionSet = [
            ConditionEntry::int("a", ConditionMode::Equal, 1),
            ConditionEntry::int("b", ConditionMode::Equal, 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        let removed = set.remove(0);
        assert_eq!(removed.parameter_name, "a");
        set.entries_mut()[0].mode = ConditionMode::NotEqual;
        assert_eq!(set.entries()[0].mode, ConditionMode::NotEqual);
        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn test_condition_serialization() {
        let set = ConditionSet::new()
            .with_entry(ConditionEntry::int("combo", ConditionMode::GreaterThan, 1))
            .with_entry(ConditionEntry::float("speed", ConditionMode::LessThan, 0.5));

        let json = serde_json::to_string(&set).unwrap();
        let deserialized: ConditionSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, deserialized);
    }
}
