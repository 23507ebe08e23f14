// ============================================================================
// Step Parameters
// Snapshot of min/max/step/value read from a bound element
// ============================================================================

use crate::numeric::DecimalValue;

/// Constraints and current value of one element at one instant.
///
/// Never cached across operations: the element is the source of truth and
/// a fresh snapshot is taken for every step or validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepParameters {
    /// Lower bound, if the `min` attribute is numeric
    pub min: Option<DecimalValue>,

    /// Upper bound, if the `max` attribute is numeric
    pub max: Option<DecimalValue>,

    /// Step size, `1` unless the `step` attribute is a positive number
    pub step: DecimalValue,

    /// Current value, falling back to `min` or `0` when the text is invalid
    pub value: DecimalValue,
}

impl StepParameters {
    /// Parameters with no bounds and the default step of `1`.
    pub fn unbounded(value: DecimalValue) -> Self {
        Self {
            min: None,
            max: None,
            step: DecimalValue::from(1),
            value,
        }
    }

    /// Builder method: Set the lower bound
    pub fn with_min(mut self, min: DecimalValue) -> Self {
        self.min = Some(min);
        self
    }

    /// Builder method: Set the upper bound
    pub fn with_max(mut self, max: DecimalValue) -> Self {
        self.max = Some(max);
        self
    }

    /// Builder method: Set the step
    pub fn with_step(mut self, step: DecimalValue) -> Self {
        self.step = step;
        self
    }

    /// Whether `value` lies inside the present bounds.
    pub fn contains(&self, value: &DecimalValue) -> bool {
        self.min.as_ref().map_or(true, |min| value >= min)
            && self.max.as_ref().map_or(true, |max| value <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dv(s: &str) -> DecimalValue {
        s.parse().unwrap()
    }

    #[test]
    fn test_unbounded_defaults() {
        let params = StepParameters::unbounded(dv("3"));
        assert_eq!(params.step, dv("1"));
        assert!(params.min.is_none() && params.max.is_none());
        assert!(params.contains(&dv("-1000000")));
    }

    #[test]
    fn test_contains() {
        let params = StepParameters::unbounded(dv("0"))
            .with_min(dv("-1.5"))
            .with_max(dv("2"));
        assert!(params.contains(&dv("-1.5")));
        assert!(params.contains(&dv("2.0")));
        assert!(!params.contains(&dv("2.01")));
        assert!(!params.contains(&dv("-1.6")));
    }
}
