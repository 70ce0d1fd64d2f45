//! When I say "runtime", I mean "helpful Rust package that is linked to the compiled program".
//!
//! The functions exported here are what generated code calls to get values onto standard output.
//! Each one writes a single record and flushes before returning. None of them report failures to
//! their caller: write errors are dropped, and a string that cannot be printed prints nothing.
//!
//! The same behaviour is available to Rust code through [`Shim`], which writes to any
//! [`std::io::Write`] sink instead of the process's standard output.

use std::ffi::{c_char, CStr};

#[cfg(feature = "cranelift")]
pub mod abi;
mod error;
pub mod format;
mod shim;

pub use error::{ShimError, ShimResult};
pub use shim::Shim;

#[no_mangle]
/// Prints the provided integer to the standard output.
pub extern "C" fn print_int(int: i32) {
    tracing::trace!(int, "print_int");
    let _ = Shim::stdout().print_int(int);
}

#[no_mangle]
/// Prints the provided float to the standard output, with six digits after the decimal point.
pub extern "C" fn print_float(float: f64) {
    tracing::trace!(float, "print_float");
    let _ = Shim::stdout().print_float(float);
}

#[no_mangle]
/// Prints the first character of the provided string ten times, then `Test`.
///
/// Null and empty strings are skipped.
///
/// # Safety
///
/// `string` must be null or point to a nul-terminated string that stays alive and unmodified for
/// the duration of the call.
pub unsafe extern "C" fn print_string(string: *const c_char) {
    if string.is_null() {
        tracing::warn!("print_string called with a null pointer");
        return;
    }

    let string = CStr::from_ptr(string);
    tracing::trace!(len = string.to_bytes().len(), "print_string");

    if let Err(ShimError::EmptyString) = Shim::stdout().print_string(string) {
        tracing::warn!("print_string called with an empty string");
    }
}

#[no_mangle]
/// Writes the provided float, truncated to a byte, to the standard output. Always returns `0.0`.
pub extern "C" fn putchard(float: f64) -> f64 {
    tracing::trace!(float, "putchard");
    let _ = Shim::stdout().putchard(float);
    0.0
}

#[cfg(test)]
mod test {
    use std::ptr;

    use super::*;

    // These write to the test harness's stdout; the exact bytes are checked by the `cbits`
    // integration tests. Here we only make sure the edge cases return instead of crashing.

    #[test]
    fn print_string_accepts_null() {
        unsafe { print_string(ptr::null()) };
    }

    #[test]
    fn print_string_accepts_empty() {
        unsafe { print_string(c"".as_ptr()) };
    }

    #[test]
    fn putchard_returns_zero() {
        assert_eq!(putchard(b'\n' as f64), 0.0);
    }
}
