//! Text encodings for every kind of state value.
//!
//! Each function appends to an output [`ByteBuffer`]; none of them allocate
//! anything else.

use crate::{
    byte_buffer::ByteBuffer,
    error::ReportError,
    options::{BitfieldFallback, FormattingOptions},
    symbols::SymbolCategory,
};

pub(crate) const TRUE: &str = "GL_TRUE";
pub(crate) const FALSE: &str = "GL_FALSE";
pub(crate) const UNAVAILABLE: &str = "n/a";

const ARRAY_OPEN: &str = "{ ";
const ARRAY_CLOSE: &str = " }";
const ARRAY_SEPARATOR: &str = ", ";
const ARRAY_ELLIPSIS: &str = ", ... ";
const BIT_SEPARATOR: &str = " | ";

pub(crate) fn write_bool(out: &mut ByteBuffer, value: bool) -> Result<(), ReportError> {
    out.append_str(if value { TRUE } else { FALSE })
}

pub(crate) fn write_int(out: &mut ByteBuffer, value: i32) -> Result<(), ReportError> {
    out.append_fmt(format_args!("{value}"))
}

pub(crate) fn write_uint(out: &mut ByteBuffer, value: u32) -> Result<(), ReportError> {
    out.append_fmt(format_args!("{value}"))
}

pub(crate) fn write_int64(out: &mut ByteBuffer, value: i64) -> Result<(), ReportError> {
    out.append_fmt(format_args!("{value}"))
}

/// `0x` followed by eight zero-padded uppercase hex digits.
pub(crate) fn write_hex(out: &mut ByteBuffer, value: u32) -> Result<(), ReportError> {
    out.append_fmt(format_args!("0x{value:08X}"))
}

/// Single-precision values are widened before formatting.
pub(crate) fn write_float(out: &mut ByteBuffer, value: f32) -> Result<(), ReportError> {
    write_double(out, f64::from(value))
}

/// Fixed notation with six fractional digits. Non-finite values use the C
/// spellings `nan`, `-nan`, `inf` and `-inf`.
pub(crate) fn write_double(out: &mut ByteBuffer, value: f64) -> Result<(), ReportError> {
    if value.is_nan() {
        out.append_str(if value.is_sign_negative() { "-nan" } else { "nan" })
    } else if value.is_infinite() {
        out.append_str(if value < 0.0 { "-inf" } else { "inf" })
    } else {
        out.append_fmt(format_args!("{value:.6}"))
    }
}

/// Encoding for a code no table knows.
pub(crate) fn write_unresolved(
    out: &mut ByteBuffer,
    value: u32,
    options: &FormattingOptions,
) -> Result<(), ReportError> {
    if options.enable_hex {
        write_hex(out, value)
    } else {
        write_uint(out, value)
    }
}

pub(crate) fn write_enum(
    out: &mut ByteBuffer,
    category: SymbolCategory,
    value: u32,
    options: &FormattingOptions,
) -> Result<(), ReportError> {
    match category.resolve(value) {
        Some(name) => out.append_str(name),
        None => {
            log::trace!("no {category:?} name for 0x{value:08X}");
            write_unresolved(out, value, options)
        }
    }
}

/// Names of the set bits among the lowest `bits`, joined with ` | `, or `0`
/// when none is set.
pub(crate) fn write_bitfield(
    out: &mut ByteBuffer,
    category: SymbolCategory,
    value: u32,
    bits: u32,
    options: &FormattingOptions,
) -> Result<(), ReportError> {
    let mut fields = 0usize;

    for bit in 0..bits.min(u32::BITS) {
        let flag = 1u32 << bit;
        if value & flag == 0 {
            continue;
        }
        if fields > 0 {
            out.append_str(BIT_SEPARATOR)?;
        }
        fields += 1;

        match category.resolve(flag) {
            Some(name) => out.append_str(name)?,
            None => {
                log::trace!("no {category:?} name for bit 0x{flag:08X} of 0x{value:08X}");
                let shown = match options.bitfield_fallback {
                    BitfieldFallback::WholeField => value,
                    BitfieldFallback::SingleBit => flag,
                };
                write_unresolved(out, shown, options)?;
            }
        }
    }

    if fields == 0 {
        out.append_str("0")?;
    }
    Ok(())
}

/// `{ a, b, c }`, truncated after `limit` items with a `, ... ` tail.
///
/// An empty list renders as `{  }`.
pub(crate) fn write_list<T>(
    out: &mut ByteBuffer,
    items: &[T],
    limit: usize,
    mut write_item: impl FnMut(&mut ByteBuffer, &T) -> Result<(), ReportError>,
) -> Result<(), ReportError> {
    out.append_str(ARRAY_OPEN)?;

    let shown = &items[..items.len().min(limit)];
    for (i, item) in shown.iter().enumerate() {
        if i > 0 {
            out.append_str(ARRAY_SEPARATOR)?;
        }
        write_item(out, item)?;
    }

    if items.len() > limit {
        out.append_str(ARRAY_ELLIPSIS)?;
    }

    out.append_str(ARRAY_CLOSE)
}
