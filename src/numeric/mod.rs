// ============================================================================
// Numeric Module
// Exact decimal arithmetic on digit strings
// ============================================================================
//
// This module provides:
// - DecimalValue: unscaled digits + precision, compared by value
// - classify / is_number: advisory grammar checks, never fail
// - add / subtract / precision_of / render: string-in, string-out surface
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - All fallible arithmetic returns Result (no panics)
// - Operands are aligned to a common precision before integer addition

mod arithmetic;
mod classify;
mod decimal_value;
mod errors;

pub use arithmetic::{add, precision_of, render, subtract, to_decimal_value};
pub use classify::{classify, is_number, Classification, NumberLike};
pub use decimal_value::{align_precision, DecimalValue};
pub use errors::{NumericError, NumericResult};
