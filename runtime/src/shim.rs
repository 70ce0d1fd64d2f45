//! The output shim proper: formats one record per call and pushes it through a sink.

use std::{
    ffi::CStr,
    io::{self, StdoutLock, Write},
};

use crate::{
    error::ShimResult,
    format::{float_record, int_record, putchard_record, string_record},
};

/// Writes shim records to `W`.
///
/// Every operation formats its complete record up front and hands it over with one
/// [`Write::write_all`] followed by a [`Write::flush`], so a record is only ever split if the
/// sink itself splits writes.
#[derive(Debug)]
pub struct Shim<W> {
    writer: W,
}

impl Shim<StdoutLock<'static>> {
    /// A shim over the process's standard output, holding the stdout lock until it is dropped.
    pub fn stdout() -> Self {
        Self::new(io::stdout().lock())
    }
}

impl<W: Write> Shim<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self, record: &[u8]) -> io::Result<()> {
        self.writer.write_all(record)?;
        self.writer.flush()
    }

    /// Prints `int` in base 10 on its own line.
    pub fn print_int(&mut self, int: i32) -> io::Result<()> {
        self.emit(int_record(int).as_bytes())
    }

    /// Prints `float` in fixed-point notation with six fractional digits on its own line.
    pub fn print_float(&mut self, float: f64) -> io::Result<()> {
        self.emit(float_record(float).as_bytes())
    }

    /// Prints the first byte of `string` on ten lines, followed by the line `Test`.
    ///
    /// Nothing is written if `string` is empty.
    pub fn print_string(&mut self, string: &CStr) -> ShimResult {
        let record = string_record(string)?;
        self.emit(&record)?;
        Ok(())
    }

    /// Writes `float` truncated to a byte, with no newline, and returns `0.0`.
    pub fn putchard(&mut self, float: f64) -> io::Result<f64> {
        self.emit(&putchard_record(float))?;
        Ok(0.0)
    }
}
