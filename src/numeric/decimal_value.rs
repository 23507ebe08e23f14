// ============================================================================
// Decimal Value
// Exact decimal numbers held as unscaled digit strings plus a precision
// ============================================================================

use super::classify::{classify_text, NumberLike};
use super::errors::{NumericError, NumericResult};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Decimal number represented as `digits / 10^precision`.
///
/// `digits` holds an optional leading `-` followed by the unscaled integer
/// digits. `"-12.34"` is stored as `{ digits: "-1234", precision: 2 }`.
///
/// Values produced by parsing are normalized: no trailing fractional zeros,
/// no redundant leading zeros, and no negative zero. Values produced by
/// [`align_precision`] may carry trailing zeros; equality, ordering and
/// hashing always compare the represented number, not the digit layout.
///
/// # Example
/// ```
/// use number_spin::numeric::DecimalValue;
///
/// let v: DecimalValue = "-12.340".parse().unwrap();
/// assert_eq!(v.digits(), "-1234");
/// assert_eq!(v.precision(), 2);
/// assert_eq!(v.to_string(), "-12.34");
/// ```
#[derive(Clone)]
pub struct DecimalValue {
    digits: String,
    precision: u32,
}

impl DecimalValue {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Zero with precision 0.
    pub fn zero() -> Self {
        Self {
            digits: "0".to_string(),
            precision: 0,
        }
    }

    /// Convert a string or number into a normalized decimal value.
    ///
    /// # Errors
    /// Returns `InvalidNumber` if the text does not match the decimal grammar.
    pub fn from_number<T: NumberLike + ?Sized>(input: &T) -> NumericResult<Self> {
        let text = input.number_text();
        if !classify_text(&text).is_number {
            return Err(NumericError::invalid(text.into_owned()));
        }

        let (negative, body) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, &*text),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        let frac_part = frac_part.trim_end_matches('0');

        let mut magnitude = String::with_capacity(int_part.len() + frac_part.len());
        magnitude.push_str(int_part);
        magnitude.push_str(frac_part);

        Ok(Self::from_sign_and_magnitude(negative, &magnitude, frac_part.len() as u32))
    }

    /// Build from an unscaled integer and a precision, normalizing the result.
    ///
    /// `from_unscaled(-1234, 2)` is `-12.34`.
    pub fn from_unscaled(unscaled: i128, precision: u32) -> Self {
        let text = unscaled.to_string();
        let (negative, magnitude) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text.as_str()),
        };
        Self::from_sign_and_magnitude(negative, magnitude, precision)
    }

    fn from_sign_and_magnitude(negative: bool, magnitude: &str, precision: u32) -> Self {
        let mut value = Self {
            digits: String::with_capacity(magnitude.len() + 1),
            precision,
        };
        if negative {
            value.digits.push('-');
        }
        value.digits.push_str(magnitude);
        value.normalize_in_place();
        value
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Sign and unscaled digits, e.g. `"-1234"`.
    #[inline]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// Number of fractional digits encoded in `digits`.
    #[inline]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.digits.starts_with('-') && !self.is_zero()
    }

    pub fn is_zero(&self) -> bool {
        self.magnitude().bytes().all(|b| b == b'0')
    }

    #[inline]
    fn magnitude(&self) -> &str {
        self.digits.strip_prefix('-').unwrap_or(&self.digits)
    }

    /// The unscaled digits as an integer.
    ///
    /// # Errors
    /// Returns `Overflow` if the digits do not fit in an `i128`.
    pub fn unscaled(&self) -> NumericResult<i128> {
        self.digits.parse().map_err(|_| NumericError::Overflow)
    }

    // ========================================================================
    // Precision handling
    // ========================================================================

    /// Raise the precision by appending zeros to the digits.
    ///
    /// A target below the current precision leaves the value untouched.
    pub fn with_precision(&self, precision: u32) -> Self {
        let mut raised = self.clone();
        while raised.precision < precision {
            raised.digits.push('0');
            raised.precision += 1;
        }
        raised
    }

    /// Canonical form: trailing fractional zeros and leading zeros removed.
    pub fn normalized(&self) -> Self {
        let mut value = self.clone();
        value.normalize_in_place();
        value
    }

    fn normalize_in_place(&mut self) {
        let negative = self.digits.starts_with('-');
        let mut magnitude: String = self.magnitude().to_string();

        while self.precision > 0 && magnitude.len() > 1 && magnitude.ends_with('0') {
            magnitude.pop();
            self.precision -= 1;
        }

        let trimmed = magnitude.trim_start_matches('0');
        let magnitude = if trimmed.is_empty() { "0" } else { trimmed };
        if magnitude == "0" {
            self.precision = 0;
        }

        self.digits.clear();
        if negative && magnitude != "0" {
            self.digits.push('-');
        }
        self.digits.push_str(magnitude);
    }

    /// Flip the sign. Zero stays unsigned.
    pub fn negate(&self) -> Self {
        if self.is_zero() {
            return self.clone();
        }
        let digits = match self.digits.strip_prefix('-') {
            Some(rest) => rest.to_string(),
            None => format!("-{}", self.digits),
        };
        Self {
            digits,
            precision: self.precision,
        }
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Exact addition.
    ///
    /// # Errors
    /// Returns `Overflow` if the aligned digits exceed `i128`.
    pub fn checked_add(&self, rhs: &Self) -> NumericResult<Self> {
        let (lhs, rhs) = align_precision(self, rhs);
        let sum = lhs
            .unscaled()?
            .checked_add(rhs.unscaled()?)
            .ok_or(NumericError::Overflow)?;
        Ok(Self::from_unscaled(sum, lhs.precision))
    }

    /// Exact subtraction, defined as addition of the negation.
    pub fn checked_sub(&self, rhs: &Self) -> NumericResult<Self> {
        self.checked_add(&rhs.negate())
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Returns the smaller of two values.
    pub fn min(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    /// Returns the larger of two values.
    pub fn max(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }

    fn cmp_magnitude(a: &str, b: &str) -> Ordering {
        let a = a.trim_start_matches('0');
        let b = b.trim_start_matches('0');
        a.len().cmp(&b.len()).then_with(|| a.cmp(b))
    }
}

/// Pad the operand with the smaller precision so both share the larger one.
///
/// Adding unscaled digits of differently scaled values is only meaningful
/// after this step.
pub fn align_precision(a: &DecimalValue, b: &DecimalValue) -> (DecimalValue, DecimalValue) {
    let precision = a.precision.max(b.precision);
    (a.with_precision(precision), b.with_precision(precision))
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for DecimalValue {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for DecimalValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DecimalValue {}

impl PartialOrd for DecimalValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DecimalValue {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = align_precision(self, other);
        match (a.is_negative(), b.is_negative()) {
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
            (false, false) => Self::cmp_magnitude(a.magnitude(), b.magnitude()),
            (true, true) => Self::cmp_magnitude(b.magnitude(), a.magnitude()),
        }
    }
}

impl Hash for DecimalValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let canonical = self.normalized();
        canonical.digits.hash(state);
        canonical.precision.hash(state);
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for DecimalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DecimalValue({}, digits={}, precision={})",
            self, self.digits, self.precision
        )
    }
}

impl fmt::Display for DecimalValue {
    /// Canonical rendering: `{ "-5", 2 }` prints as `-0.05`, `{ "1500", 2 }`
    /// as `15`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let canonical = self.normalized();
        if canonical.precision == 0 {
            return f.write_str(&canonical.digits);
        }

        let precision = canonical.precision as usize;
        let magnitude = format!("{:0>width$}", canonical.magnitude(), width = precision + 1);
        let (int_part, frac_part) = magnitude.split_at(magnitude.len() - precision);

        if canonical.is_negative() {
            f.write_str("-")?;
        }
        write!(f, "{}.{}", int_part, frac_part)
    }
}

// ============================================================================
// Parsing and Conversion
// ============================================================================

impl FromStr for DecimalValue {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_number(s)
    }
}

impl From<i64> for DecimalValue {
    fn from(value: i64) -> Self {
        Self::from_unscaled(value as i128, 0)
    }
}

impl DecimalValue {
    /// Convert to `rust_decimal::Decimal` for API boundaries.
    ///
    /// # Errors
    /// Returns `Overflow` if the value does not fit a 96-bit mantissa or the
    /// precision exceeds 28.
    pub fn to_decimal(&self) -> NumericResult<rust_decimal::Decimal> {
        rust_decimal::Decimal::try_from_i128_with_scale(self.unscaled()?, self.precision)
            .map_err(|_| NumericError::Overflow)
    }

    /// Convert from `rust_decimal::Decimal`.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        Self::from_unscaled(d.mantissa(), d.scale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dv(s: &str) -> DecimalValue {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_float() {
        let v = dv("-12.340");
        assert_eq!(v.digits(), "-1234");
        assert_eq!(v.precision(), 2);
    }

    #[test]
    fn test_parse_integer() {
        let v = dv("0042");
        assert_eq!(v.digits(), "42");
        assert_eq!(v.precision(), 0);
    }

    #[test]
    fn test_parse_strips_all_trailing_zeros() {
        let v = dv("1.000");
        assert_eq!(v.digits(), "1");
        assert_eq!(v.precision(), 0);

        let v = dv("0.050");
        assert_eq!(v.digits(), "5");
        assert_eq!(v.precision(), 2);
    }

    #[test]
    fn test_negative_zero_is_unsigned() {
        let v = dv("-0.000");
        assert_eq!(v.digits(), "0");
        assert!(!v.is_negative());
        assert_eq!(v.to_string(), "0");
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "1.2.3".parse::<DecimalValue>(),
            Err(NumericError::invalid("1.2.3"))
        );
        assert!(DecimalValue::from_number(&f64::NAN).is_err());
    }

    #[test]
    fn test_from_f64_uses_decimal_text() {
        let v = DecimalValue::from_number(&0.1f64).unwrap();
        assert_eq!(v.digits(), "1");
        assert_eq!(v.precision(), 1);
    }

    #[test]
    fn test_with_precision() {
        let v = dv("1.5").with_precision(3);
        assert_eq!(v.digits(), "1500");
        assert_eq!(v.precision(), 3);
        assert_eq!(v, dv("1.5"));

        // Lowering is a no-op
        assert_eq!(v.with_precision(1).precision(), 3);
    }

    #[test]
    fn test_align_precision() {
        let (a, b) = align_precision(&dv("1.25"), &dv("-3"));
        assert_eq!((a.digits(), a.precision()), ("125", 2));
        assert_eq!((b.digits(), b.precision()), ("-300", 2));
    }

    #[test]
    fn test_display_pads_and_keeps_sign() {
        assert_eq!(DecimalValue::from_unscaled(-5, 2).to_string(), "-0.05");
        assert_eq!(DecimalValue::from_unscaled(5, 3).to_string(), "0.005");
        assert_eq!(DecimalValue::from_unscaled(1500, 2).to_string(), "15");
        assert_eq!(DecimalValue::from_unscaled(-1230, 2).to_string(), "-12.3");
        assert_eq!(DecimalValue::from_unscaled(0, 4).to_string(), "0");
    }

    #[test]
    fn test_display_of_unnormalized_value() {
        let raised = dv("-0.5").with_precision(4);
        assert_eq!(raised.digits(), "-5000");
        assert_eq!(raised.to_string(), "-0.5");
    }

    #[test]
    fn test_ordering() {
        assert!(dv("10") > dv("9.99"));
        assert!(dv("-10") < dv("-9.99"));
        assert!(dv("-0.1") < dv("0"));
        assert!(dv("0.10") == dv("0.1"));
        assert_eq!(dv("3").max(dv("3.5")), dv("3.5"));
        assert_eq!(dv("3").min(dv("-3.5")), dv("-3.5"));
    }

    #[test]
    fn test_hash_matches_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(dv("2.5"));
        assert!(set.contains(&dv("2.5").with_precision(6)));
    }

    #[test]
    fn test_checked_add_and_sub() {
        assert_eq!(dv("0.1").checked_add(&dv("0.2")).unwrap().to_string(), "0.3");
        assert_eq!(dv("1").checked_sub(&dv("1.75")).unwrap().to_string(), "-0.75");
    }

    #[test]
    fn test_overflow() {
        let huge = dv("9".repeat(39).as_str());
        assert_eq!(huge.unscaled(), Err(NumericError::Overflow));
        assert_eq!(huge.checked_add(&dv("1")), Err(NumericError::Overflow));
    }

    #[test]
    fn test_negate() {
        assert_eq!(dv("2.5").negate().to_string(), "-2.5");
        assert_eq!(dv("-2.5").negate().to_string(), "2.5");
        assert_eq!(dv("0").negate().digits(), "0");
    }

    #[test]
    fn test_rust_decimal_interop() {
        let d = dv("-12.34").to_decimal().unwrap();
        assert_eq!(d, rust_decimal::Decimal::new(-1234, 2));
        assert_eq!(DecimalValue::from_decimal(d), dv("-12.34"));
    }
}
