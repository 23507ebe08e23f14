// ============================================================================
// Stepping & Clipping Controller
// Bounded, lattice-aligned next values computed with exact decimals
// ============================================================================

use crate::domain::{StepDirection, StepParameters};
use crate::interfaces::NumericElement;
use crate::numeric::{align_precision, is_number, DecimalValue, NumericError, NumericResult};

/// Read `min`, `max`, `step` and the value off the element.
///
/// Anything that is not decimal-shaped counts as absent: bounds become
/// `None`, the step falls back to `1` (as does a zero or negative step), and
/// the value falls back to `min`, or `0` without one.
pub fn read_parameters<E: NumericElement + ?Sized>(element: &E) -> StepParameters {
    let numeric_attr = |name: &str| {
        element
            .attribute(name)
            .filter(|text| is_number(text))
            .and_then(|text| DecimalValue::from_number(&text).ok())
    };

    let min = numeric_attr("min");
    let max = numeric_attr("max");
    let step = numeric_attr("step")
        .filter(|step| !step.is_zero() && !step.is_negative())
        .unwrap_or_else(|| DecimalValue::from(1));

    let value = Some(element.value())
        .filter(|text| is_number(text))
        .and_then(|text| DecimalValue::from_number(&text).ok())
        .or_else(|| min.clone())
        .unwrap_or_else(DecimalValue::zero);

    StepParameters {
        min,
        max,
        step,
        value,
    }
}

/// Clamp `value` into the present bounds. `max` is checked first.
pub fn clip(
    value: &DecimalValue,
    min: Option<&DecimalValue>,
    max: Option<&DecimalValue>,
) -> DecimalValue {
    match (min, max) {
        (_, Some(max)) if value > max => max.clone(),
        (Some(min), _) if value < min => min.clone(),
        _ => value.clone(),
    }
}

/// Snap `value` onto the lattice `min + k * step` (`k * step` without a min).
///
/// Values already on the lattice come back unchanged. Otherwise the nearest
/// lattice point is taken, halves rounding towards positive infinity.
///
/// # Errors
/// Returns `Overflow` if the aligned digits exceed `i128`.
pub fn normalize_to_step(
    value: &DecimalValue,
    step: &DecimalValue,
    min: Option<&DecimalValue>,
) -> NumericResult<DecimalValue> {
    if step.is_zero() || step.is_negative() {
        return Ok(value.clone());
    }

    let residue = match min {
        Some(min) => value.checked_sub(min)?,
        None => value.clone(),
    };

    let (residue, step) = align_precision(&residue, step);
    let precision = residue.precision();
    let r = residue.unscaled()?;
    let s = step.unscaled()?;

    if r % s == 0 {
        return Ok(value.clone());
    }

    let k = round_half_up(r, s)?;
    let snapped = k
        .checked_mul(s)
        .map(|unscaled| DecimalValue::from_unscaled(unscaled, precision))
        .ok_or(NumericError::Overflow)?;

    match min {
        Some(min) => snapped.checked_add(min),
        None => Ok(snapped),
    }
}

/// `floor(r / s + 1/2)` for `s > 0`.
fn round_half_up(r: i128, s: i128) -> NumericResult<i128> {
    let numerator = r
        .checked_mul(2)
        .and_then(|twice| twice.checked_add(s))
        .ok_or(NumericError::Overflow)?;
    let denominator = s.checked_mul(2).ok_or(NumericError::Overflow)?;
    Ok(numerator.div_euclid(denominator))
}

/// Value after one step in `direction`.
///
/// Adds or subtracts the step, clamps against the bound in the direction of
/// travel, then snaps to the lattice. Snapping can overshoot a bound that is
/// itself off the lattice, so the bound is applied once more and wins.
pub fn next_value(params: &StepParameters, direction: StepDirection) -> NumericResult<DecimalValue> {
    let (moved, min, max) = match direction {
        StepDirection::Up => (
            params.value.checked_add(&params.step)?,
            None,
            params.max.as_ref(),
        ),
        StepDirection::Down => (
            params.value.checked_sub(&params.step)?,
            params.min.as_ref(),
            None,
        ),
    };

    let clipped = clip(&moved, min, max);
    let snapped = normalize_to_step(&clipped, &params.step, params.min.as_ref())?;
    Ok(clip(&snapped, min, max))
}

/// Value the change policy settles on for an already numeric input.
///
/// Clip, then snap. When the snapped lattice point falls outside the
/// bounds (a `max` that is not on the lattice), the bound wins so the
/// result is a fixed point of this function.
pub fn settle(params: &StepParameters) -> NumericResult<DecimalValue> {
    let clipped = clip(&params.value, params.min.as_ref(), params.max.as_ref());
    let snapped = normalize_to_step(&clipped, &params.step, params.min.as_ref())?;
    Ok(clip(&snapped, params.min.as_ref(), params.max.as_ref()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::MemoryElement;

    fn dv(s: &str) -> DecimalValue {
        s.parse().unwrap()
    }

    fn params(min: Option<&str>, max: Option<&str>, step: &str, value: &str) -> StepParameters {
        StepParameters {
            min: min.map(dv),
            max: max.map(dv),
            step: dv(step),
            value: dv(value),
        }
    }

    #[test]
    fn test_read_parameters() {
        let element = MemoryElement::number_input()
            .with_attribute("min", "-2.5")
            .with_attribute("max", "10")
            .with_attribute("step", "0.25")
            .with_value("3.75");

        let p = read_parameters(&element);
        assert_eq!(p.min, Some(dv("-2.5")));
        assert_eq!(p.max, Some(dv("10")));
        assert_eq!(p.step, dv("0.25"));
        assert_eq!(p.value, dv("3.75"));
    }

    #[test]
    fn test_read_parameters_treats_garbage_as_absent() {
        let element = MemoryElement::number_input()
            .with_attribute("min", "low")
            .with_attribute("max", "")
            .with_attribute("step", "any")
            .with_value("12abc");

        let p = read_parameters(&element);
        assert_eq!(p.min, None);
        assert_eq!(p.max, None);
        assert_eq!(p.step, dv("1"));
        assert_eq!(p.value, dv("0"));
    }

    #[test]
    fn test_read_parameters_value_falls_back_to_min() {
        let element = MemoryElement::number_input()
            .with_attribute("min", "4")
            .with_value("");
        assert_eq!(read_parameters(&element).value, dv("4"));
    }

    #[test]
    fn test_read_parameters_rejects_non_positive_step() {
        for step in ["0", "-2", "0.000"] {
            let element = MemoryElement::number_input().with_attribute("step", step);
            assert_eq!(read_parameters(&element).step, dv("1"), "step {}", step);
        }
    }

    #[test]
    fn test_clip() {
        let (min, max) = (dv("0"), dv("10"));
        assert_eq!(clip(&dv("10.3"), Some(&min), Some(&max)), max);
        assert_eq!(clip(&dv("-0.01"), Some(&min), Some(&max)), min);
        assert_eq!(clip(&dv("5"), Some(&min), Some(&max)), dv("5"));
        assert_eq!(clip(&dv("1000"), None, None), dv("1000"));
    }

    #[test]
    fn test_normalize_unchanged_on_lattice() {
        let v = dv("2.50");
        let out = normalize_to_step(&v, &dv("0.5"), None).unwrap();
        assert_eq!(out, v);
        assert_eq!(out.digits(), v.digits());
    }

    #[test]
    fn test_normalize_rounds_to_nearest() {
        assert_eq!(normalize_to_step(&dv("2.2"), &dv("0.5"), None).unwrap(), dv("2"));
        assert_eq!(normalize_to_step(&dv("2.3"), &dv("0.5"), None).unwrap(), dv("2.5"));
        // halves go up
        assert_eq!(normalize_to_step(&dv("2.25"), &dv("0.5"), None).unwrap(), dv("2.5"));
        assert_eq!(normalize_to_step(&dv("-2.25"), &dv("0.5"), None).unwrap(), dv("-2"));
    }

    #[test]
    fn test_normalize_anchors_at_min() {
        let min = dv("1");
        assert_eq!(normalize_to_step(&dv("5"), &dv("3"), Some(&min)).unwrap(), dv("4"));
        assert_eq!(normalize_to_step(&dv("2"), &dv("3"), Some(&min)).unwrap(), dv("1"));
        assert_eq!(
            normalize_to_step(&dv("0.7"), &dv("0.5"), Some(&dv("0.1"))).unwrap(),
            dv("0.6")
        );
    }

    #[test]
    fn test_increment_clips_then_normalizes() {
        let p = params(Some("0"), Some("10"), "0.5", "9.8");
        assert_eq!(next_value(&p, StepDirection::Up).unwrap().to_string(), "10");
    }

    #[test]
    fn test_increment_never_snaps_past_off_lattice_max() {
        let p = params(Some("0"), Some("11"), "3", "9");
        assert_eq!(next_value(&p, StepDirection::Up).unwrap().to_string(), "11");
    }

    #[test]
    fn test_decrement_twice_clips_to_min() {
        let p = params(Some("1"), Some("100"), "3", "5");
        let once = next_value(&p, StepDirection::Down).unwrap();
        let p = StepParameters { value: once, ..p };
        let twice = next_value(&p, StepDirection::Down).unwrap();
        assert_eq!(twice.to_string(), "1");
    }

    #[test]
    fn test_fractional_steps_do_not_drift() {
        let mut p = params(None, None, "0.1", "0");
        for _ in 0..30 {
            p.value = next_value(&p, StepDirection::Up).unwrap();
        }
        assert_eq!(p.value.to_string(), "3");
    }

    #[test]
    fn test_settle_prefers_bound_over_lattice() {
        // 3 snaps to 5 on the 0,5,10 lattice but max is 3
        let p = params(Some("0"), Some("3"), "5", "3");
        assert_eq!(settle(&p).unwrap(), dv("3"));

        let p = StepParameters {
            value: settle(&p).unwrap(),
            ..p
        };
        assert_eq!(settle(&p).unwrap(), dv("3"));
    }

    #[test]
    fn test_settle_in_range_value() {
        let p = params(Some("1"), Some("100"), "3", "50");
        assert_eq!(settle(&p).unwrap(), dv("49"));
    }
}
