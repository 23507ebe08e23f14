// ============================================================================
// Decimal String Arithmetic
// Free-function surface over DecimalValue: coercion, rendering, add/subtract
// ============================================================================

use super::classify::{classify, NumberLike};
use super::decimal_value::DecimalValue;
use super::errors::{NumericError, NumericResult};

/// Convert a string or number into a normalized [`DecimalValue`].
///
/// # Errors
/// Returns `InvalidNumber` if the input does not match the decimal grammar.
#[inline]
pub fn to_decimal_value<T: NumberLike + ?Sized>(input: &T) -> NumericResult<DecimalValue> {
    DecimalValue::from_number(input)
}

/// Render a value in canonical decimal text.
#[inline]
pub fn render(value: &DecimalValue) -> String {
    value.to_string()
}

/// Exact decimal addition.
///
/// Both operands are classified first; the error names whichever argument
/// is not decimal-shaped.
///
/// # Example
/// ```
/// use number_spin::numeric::add;
///
/// assert_eq!(add("0.1", "0.2").unwrap(), "0.3");
/// ```
pub fn add<A, B>(a: &A, b: &B) -> NumericResult<String>
where
    A: NumberLike + ?Sized,
    B: NumberLike + ?Sized,
{
    let (a, b) = coerce_pair(a, b)?;
    Ok(render(&a.checked_add(&b)?))
}

/// Exact decimal subtraction: `add(a, -b)`.
pub fn subtract<A, B>(a: &A, b: &B) -> NumericResult<String>
where
    A: NumberLike + ?Sized,
    B: NumberLike + ?Sized,
{
    let (a, b) = coerce_pair(a, b)?;
    Ok(render(&a.checked_add(&b.negate())?))
}

fn coerce_pair<A, B>(a: &A, b: &B) -> NumericResult<(DecimalValue, DecimalValue)>
where
    A: NumberLike + ?Sized,
    B: NumberLike + ?Sized,
{
    if !classify(a).is_number {
        return Err(NumericError::invalid(a.number_text().into_owned()));
    }
    if !classify(b).is_number {
        return Err(NumericError::invalid(b.number_text().into_owned()));
    }
    Ok((to_decimal_value(a)?, to_decimal_value(b)?))
}

/// Number of digits after the decimal point as written; `0` for integers
/// and for anything that is not a number.
pub fn precision_of<T: NumberLike + ?Sized>(input: &T) -> u32 {
    let text = input.number_text();
    if !classify(&*text).is_float {
        return 0;
    }
    text.split_once('.')
        .map(|(_, frac)| frac.len() as u32)
        .unwrap_or(0)
}
