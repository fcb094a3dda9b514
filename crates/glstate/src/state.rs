//! Typed attribute values and the capture pass that turns them into records.

use alloc::vec::Vec;

use crate::{
    byte_buffer::ByteBuffer,
    error::ReportError,
    options::FormattingOptions,
    record::RecordTable,
    render,
    symbols::SymbolCategory,
};

/// One captured attribute value.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Debug, PartialEq)]
pub enum StateValue {
    /// The attribute does not exist at the queried API version. Renders as
    /// `n/a`.
    Unavailable,
    Bool(bool),
    Int(i32),
    UInt(u32),
    Int64(i64),
    Float(f32),
    Double(f64),
    /// A mask, always shown as `0x%08X`.
    Hex(u32),
    Enum {
        category: SymbolCategory,
        value: u32,
    },
    /// Set bits among the lowest `bits` positions, each resolved through
    /// `category`.
    Bitfield {
        category: SymbolCategory,
        value: u32,
        bits: u32,
    },
    Array(ArrayValue),
}

/// Elements of an array value.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Debug, PartialEq)]
pub enum ArrayItems {
    Bool(Vec<bool>),
    Int { values: Vec<i32>, hex: bool },
    Int64(Vec<i64>),
    Float(Vec<f32>),
    Double(Vec<f64>),
    Enum {
        category: SymbolCategory,
        values: Vec<u32>,
    },
}

impl ArrayItems {
    pub fn len(&self) -> usize {
        match self {
            Self::Bool(v) => v.len(),
            Self::Int { values, .. } => values.len(),
            Self::Int64(v) => v.len(),
            Self::Float(v) => v.len(),
            Self::Double(v) => v.len(),
            Self::Enum { values, .. } => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fixed-size array and how many of its elements to show.
///
/// Elements past `limit` are elided with a `, ... ` tail. The constructors
/// show every element; use [`ArrayValue::with_limit`] to cut it short.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayValue {
    pub items: ArrayItems,
    pub limit: usize,
}

impl ArrayValue {
    pub fn new(items: ArrayItems) -> Self {
        let limit = items.len();
        Self { items, limit }
    }

    pub fn bools(values: impl Into<Vec<bool>>) -> Self {
        Self::new(ArrayItems::Bool(values.into()))
    }

    pub fn ints(values: impl Into<Vec<i32>>) -> Self {
        Self::new(ArrayItems::Int {
            values: values.into(),
            hex: false,
        })
    }

    /// Integers shown as `0x%08X`, e.g. masks.
    pub fn hex_ints(values: impl Into<Vec<i32>>) -> Self {
        Self::new(ArrayItems::Int {
            values: values.into(),
            hex: true,
        })
    }

    pub fn int64s(values: impl Into<Vec<i64>>) -> Self {
        Self::new(ArrayItems::Int64(values.into()))
    }

    pub fn floats(values: impl Into<Vec<f32>>) -> Self {
        Self::new(ArrayItems::Float(values.into()))
    }

    pub fn doubles(values: impl Into<Vec<f64>>) -> Self {
        Self::new(ArrayItems::Double(values.into()))
    }

    pub fn enums(category: SymbolCategory, values: impl Into<Vec<u32>>) -> Self {
        Self::new(ArrayItems::Enum {
            category,
            values: values.into(),
        })
    }

    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    fn render(&self, out: &mut ByteBuffer, options: &FormattingOptions) -> Result<(), ReportError> {
        let limit = self.limit;
        match &self.items {
            ArrayItems::Bool(v) => {
                render::write_list(out, v, limit, |o, b| render::write_bool(o, *b))
            }
            ArrayItems::Int { values, hex: false } => {
                render::write_list(out, values, limit, |o, n| render::write_int(o, *n))
            }
            ArrayItems::Int { values, hex: true } => {
                render::write_list(out, values, limit, |o, n| {
                    render::write_hex(o, u32::from_ne_bytes(n.to_ne_bytes()))
                })
            }
            ArrayItems::Int64(v) => {
                render::write_list(out, v, limit, |o, n| render::write_int64(o, *n))
            }
            ArrayItems::Float(v) => {
                render::write_list(out, v, limit, |o, f| render::write_float(o, *f))
            }
            ArrayItems::Double(v) => {
                render::write_list(out, v, limit, |o, f| render::write_double(o, *f))
            }
            ArrayItems::Enum { category, values } => render::write_list(out, values, limit, |o, e| {
                render::write_enum(o, *category, *e, options)
            }),
        }
    }
}

impl StateValue {
    pub fn enumerant(category: SymbolCategory, value: u32) -> Self {
        Self::Enum { category, value }
    }

    pub fn bitfield(category: SymbolCategory, value: u32, bits: u32) -> Self {
        Self::Bitfield {
            category,
            value,
            bits,
        }
    }

    /// Appends the display text of this value to `out`.
    pub fn render(&self, out: &mut ByteBuffer, options: &FormattingOptions) -> Result<(), ReportError> {
        match self {
            Self::Unavailable => out.append_str(render::UNAVAILABLE),
            Self::Bool(v) => render::write_bool(out, *v),
            Self::Int(v) => render::write_int(out, *v),
            Self::UInt(v) => render::write_uint(out, *v),
            Self::Int64(v) => render::write_int64(out, *v),
            Self::Float(v) => render::write_float(out, *v),
            Self::Double(v) => render::write_double(out, *v),
            Self::Hex(v) => render::write_hex(out, *v),
            Self::Enum { category, value } => render::write_enum(out, *category, *value, options),
            Self::Bitfield {
                category,
                value,
                bits,
            } => render::write_bitfield(out, *category, *value, *bits, options),
            Self::Array(array) => array.render(out, options),
        }
    }
}

macro_rules! state_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for StateValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

state_value_from! {
    bool => Bool,
    i32 => Int,
    u32 => UInt,
    i64 => Int64,
    f32 => Float,
    f64 => Double,
    ArrayValue => Array,
}

/// A producer of attribute values, typically a live graphics context.
///
/// Implementations report attributes in a fixed order by calling into
/// [`Capture`]. Any closure `Fn(&mut Capture<'_>) -> Result<(), ReportError>`
/// is a source too.
pub trait StateSource {
    fn capture(&self, capture: &mut Capture<'_>) -> Result<(), ReportError>;
}

impl<F> StateSource for F
where
    F: Fn(&mut Capture<'_>) -> Result<(), ReportError>,
{
    fn capture(&self, capture: &mut Capture<'_>) -> Result<(), ReportError> {
        self(capture)
    }
}

/// Receives attributes from a [`StateSource`] and renders each one into a
/// [`RecordTable`] as it arrives.
#[derive(Debug)]
pub struct Capture<'a> {
    table: RecordTable,
    options: &'a FormattingOptions,
}

impl<'a> Capture<'a> {
    pub fn new(options: &'a FormattingOptions) -> Self {
        Self {
            table: RecordTable::new(),
            options,
        }
    }

    /// Starts a new section. The title becomes a headline in insertion-ordered
    /// reports.
    pub fn section(&mut self, title: &str) -> Result<(), ReportError> {
        self.table.append_headline(title)
    }

    pub fn attribute(&mut self, name: &str, value: &StateValue) -> Result<(), ReportError> {
        let mut rendered = ByteBuffer::new()?;
        value.render(&mut rendered, self.options)?;
        self.table.append_pair(name, rendered)
    }

    pub fn unavailable(&mut self, name: &str) -> Result<(), ReportError> {
        self.table.append_text(name, render::UNAVAILABLE)
    }

    pub fn options(&self) -> &FormattingOptions {
        self.options
    }

    pub fn finish(self) -> RecordTable {
        self.table
    }
}
