//! Evaluator configuration.
//!
//! Authored content was built against an evaluator that only understands
//! `GreaterThan`/`LessThan` for float conditions and ignores the mode of
//! boolean conditions. The default configuration keeps that behavior so
//! existing clips fire exactly as before. Hosts that have migrated their
//! content can opt into the complete comparison tables.

use serde::{Deserialize, Serialize};

/// How float conditions interpret their comparison mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FloatModePolicy {
    /// Only `GreaterThan` and `LessThan` are checked. Every other mode
    /// passes without reading the parameter. A check fails only when the
    /// value is ordered on the wrong side of the operand, so NaN passes.
    #[default]
    Legacy,
    /// All six comparison modes apply, as for integers. Any comparison
    /// involving NaN fails, except `NotEqual`.
    Full,
}

/// How boolean conditions interpret their comparison mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BooleanModePolicy {
    /// The parameter must equal the operand; the mode is ignored.
    #[default]
    EqualityOnly,
    /// `NotEqual` inverts the check. Other modes still mean equality.
    Honor,
}

/// Configuration for [`ConditionEvaluator`](crate::events::ConditionEvaluator).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    /// Float comparison table.
    pub float_modes: FloatModePolicy,

    /// Boolean comparison table.
    pub boolean_modes: BooleanModePolicy,

    /// Emit a `log::warn!` whenever an entry is skipped because its
    /// mode is not supported for its parameter type.
    pub warn_unsupported: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            float_modes: FloatModePolicy::Legacy,
            boolean_modes: BooleanModePolicy::EqualityOnly,
            warn_unsupported: cfg!(debug_assertions),
        }
    }
}

impl EvaluatorConfig {
    /// Create the backward-compatible configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with complete comparison tables for every type.
    pub fn strict() -> Self {
        Self::new()
            .with_float_modes(FloatModePolicy::Full)
            .with_boolean_modes(BooleanModePolicy::Honor)
    }

    /// Set the float comparison table.
    #[must_use]
    pub fn with_float_modes(mut self, policy: FloatModePolicy) -> Self {
        self.float_modes = policy;
        self
    }

    /// Set the boolean comparison table.
    #[must_use]
    pub fn with_boolean_modes(mut self, policy: BooleanModePolicy) -> Self {
        self.boolean_modes = policy;
        self
    }

    /// Enable or disable warnings for skipped entries.
    #[must_use]
    pub fn with_warn_unsupported(mut self, warn: bool) -> Self {
        self.warn_unsupported = warn;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_legacy() {
        let config = EvaluatorConfig::default();
        assert_eq!(config.float_modes, FloatModePolicy::Legacy);
        assert_eq!(config.boolean_modes, BooleanModePolicy::EqualityOnly);
        assert_eq!(config, EvaluatorConfig::new());
    }

    #[test]
    fn test_strict() {
        let config = EvaluatorConfig::strict();
        assert_eq!(config.float_modes, FloatModePolicy::Full);
        assert_eq!(config.boolean_modes, BooleanModePolicy::Honor);
    }

    #[test]
    fn test_builder() {
        let config = EvaluatorConfig::new()
            .with_float_modes(FloatModePolicy::Full)
            .with_warn_unsupported(false);

        assert_eq!(config.float_modes, FloatModePolicy::Full);
        assert_eq!(config.boolean_modes, BooleanModePolicy::EqualityOnly);
        assert!(!config.warn_unsupported);
    }

    #[test]
    fn test_config_serialization() {
        let config = EvaluatorConfig::strict().with_warn_unsupported(true);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EvaluatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
