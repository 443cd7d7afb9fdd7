use std::ffi::c_int;
use std::io::{self, Write};

use thiserror::Error;

use crate::Size;

const TYPE_SIZES_CAPTION: &str = "typename: size_in_bytes";
const SPECIAL_VALUES_CAPTION: &str = "MACRO or other special name: value";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write the report: {0}")]
    Write(#[from] io::Error),
}

/// The in-memory size of one primitive, reported under its C type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeSize {
    pub name: &'static str,
    pub size: Size,
}

/// A platform constant that is not a type size: an address-like sentinel
/// or a small integer flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialValue {
    pub name: &'static str,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Address(usize),
    Flag(c_int),
}

#[derive(Debug, Clone, Copy)]
pub struct Report {
    type_sizes: [TypeSize; 4],
    special_values: [SpecialValue; 2],
}

impl Report {
    pub(crate) const fn new(
        type_sizes: [TypeSize; 4],
        special_values: [SpecialValue; 2],
    ) -> Self {
        Self {
            type_sizes,
            special_values,
        }
    }

    #[must_use]
    pub const fn type_sizes(&self) -> &[TypeSize] {
        &self.type_sizes
    }

    #[must_use]
    pub const fn special_values(&self) -> &[SpecialValue] {
        &self.special_values
    }

    /// Renders every fact as a `name: value` line, one section caption
    /// before each group. Deterministic for a given report.
    pub fn write_to(&self, out: &mut impl Write) -> Result<(), ReportError> {
        writeln!(out, "{TYPE_SIZES_CAPTION}")?;
        for TypeSize { name, size } in &self.type_sizes {
            writeln!(out, "{name}: {}", size.as_bytes())?;
        }

        writeln!(out, "{SPECIAL_VALUES_CAPTION}")?;
        for SpecialValue { name, value } in &self.special_values {
            match value {
                Value::Address(address) => writeln!(out, "{name}: {address:#x}")?,
                Value::Flag(flag) => writeln!(out, "{name}: {flag}")?,
            }
        }

        Ok(())
    }
}
