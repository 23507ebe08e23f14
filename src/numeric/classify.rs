// ============================================================================
// Number Classification
// Advisory pattern matching against the decimal grammar -?digits(.digits)?
// ============================================================================

use super::DecimalValue;
use std::borrow::Cow;

/// Anything that can be presented to the arithmetic engine as decimal text.
///
/// Strings are taken verbatim; numbers are stringified first, the decimal
/// string being the canonical representation. Rust renders floats without
/// an exponent, so `0.1f64` becomes `"0.1"` and `1e21` becomes a plain
/// 22-digit integer string. Non-finite floats render as `"NaN"`/`"inf"`
/// and therefore never classify as numbers.
pub trait NumberLike {
    /// The decimal text of this value.
    fn number_text(&self) -> Cow<'_, str>;
}

impl NumberLike for str {
    #[inline]
    fn number_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self)
    }
}

impl NumberLike for String {
    #[inline]
    fn number_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }
}

impl NumberLike for f64 {
    fn number_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl NumberLike for f32 {
    fn number_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

macro_rules! impl_number_like_int {
    ($($t:ty),*) => {
        $(
            impl NumberLike for $t {
                fn number_text(&self) -> Cow<'_, str> {
                    Cow::Owned(self.to_string())
                }
            }
        )*
    };
}

impl_number_like_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl NumberLike for DecimalValue {
    fn number_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }
}

impl<T: NumberLike + ?Sized> NumberLike for &T {
    #[inline]
    fn number_text(&self) -> Cow<'_, str> {
        (**self).number_text()
    }
}

/// Result of matching a value against the decimal grammar.
///
/// All flags are false for anything that is not a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Classification {
    /// Matches `-?\d+(\.\d+)?`
    pub is_number: bool,
    /// Matches `-?\d+`
    pub is_int: bool,
    /// Matches `-?\d+\.\d+`
    pub is_float: bool,
    /// Matches `-\d+(\.\d+)?`
    pub is_negative: bool,
}

/// Classify a string or number. Never fails.
pub fn classify<T: NumberLike + ?Sized>(input: &T) -> Classification {
    classify_text(&input.number_text())
}

pub(crate) fn classify_text(text: &str) -> Classification {
    let (negative, body) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body, None),
    };

    if !is_digits(int_part) {
        return Classification::default();
    }

    match frac_part {
        None => Classification {
            is_number: true,
            is_int: true,
            is_float: false,
            is_negative: negative,
        },
        Some(frac) if is_digits(frac) => Classification {
            is_number: true,
            is_int: false,
            is_float: true,
            is_negative: negative,
        },
        Some(_) => Classification::default(),
    }
}

#[inline]
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Shorthand for `classify(input).is_number`.
#[inline]
pub fn is_number<T: NumberLike + ?Sized>(input: &T) -> bool {
    classify(input).is_number
}
