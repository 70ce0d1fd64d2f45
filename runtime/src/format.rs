//! Builds the exact bytes each shim call emits.
//!
//! Formatting is kept apart from writing so that a whole record can be handed to the sink in a
//! single write.

use std::ffi::CStr;

use crate::error::{ShimError, ShimResult};

/// How many times `print_string` repeats the first byte of its input.
pub const STRING_REPEAT: usize = 10;
/// The line `print_string` finishes with.
pub const STRING_TRAILER: &[u8] = b"Test\n";

/// `42` -> `"42\n"`
pub fn int_record(int: i32) -> String {
    format!("{}\n", int)
}

/// Fixed-point with six fractional digits, never an exponent.
///
/// Non-finite values are spelled the way C's `%f` spells them (`inf`, `-inf`, `nan`, `-nan`),
/// which only differs from Rust's own formatting for NaN.
pub fn float_record(float: f64) -> String {
    if float.is_nan() {
        let sign = if float.is_sign_negative() { "-" } else { "" };
        format!("{}nan\n", sign)
    } else {
        format!("{:.6}\n", float)
    }
}

/// The first byte of `string` on ten lines, then `Test`.
///
/// Only the first byte is looked at; the rest of the string never reaches the output.
pub fn string_record(string: &CStr) -> ShimResult<Vec<u8>> {
    let &first = string.to_bytes().first().ok_or(ShimError::EmptyString)?;

    let mut record = Vec::with_capacity(STRING_REPEAT * 2 + STRING_TRAILER.len());
    for _ in 0..STRING_REPEAT {
        record.push(first);
        record.push(b'\n');
    }
    record.extend_from_slice(STRING_TRAILER);

    Ok(record)
}

/// The value truncated to a single byte (saturating at both ends, `NaN` becomes `0`).
pub fn putchard_record(float: f64) -> [u8; 1] {
    [float as u8]
}
