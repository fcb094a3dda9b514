use alloc::string::String;

use crate::error::ReportError;

/// Order in which records appear in a report.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FormattingOrder {
    /// Capture order, with section headlines.
    #[default]
    Insertion,
    /// Byte-wise ascending by key, without headlines.
    Sorted,
}

/// What a bitfield shows in place of a set bit that has no name.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BitfieldFallback {
    /// The numeric encoding of the whole field, e.g. `A | 0x00000005` for
    /// bits 0 and 2 when only bit 0 is named. This is the historical output.
    #[default]
    WholeField,
    /// The numeric encoding of the unnamed bit alone, e.g. `A | 0x00000004`.
    SingleBit,
}

/// Formatting configuration for one report.
///
/// # Examples
///
/// ```rust
/// use glstate::{FormattingOptions, FormattingOrder};
///
/// let options = FormattingOptions {
///     order: FormattingOrder::Sorted,
///     filter: Some("STENCIL".into()),
///     ..Default::default()
/// };
/// assert_eq!(options.distance, 1);
/// ```
///
/// # Default
///
/// `' '` separator, distance `1`, array limit `200`, insertion order, hex
/// fallback enabled, no filter.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(default))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattingOptions {
    /// Character that pads attribute names up to the value column. Must be
    /// ASCII and not NUL.
    pub separator: char,

    /// Columns between the longest attribute name and the values.
    pub distance: usize,

    /// Array values longer than this many bytes are printed one element per
    /// line.
    pub array_limit: usize,

    pub order: FormattingOrder,

    /// Whether unknown enumerants render as `0x%08X` hex codes. When `false`
    /// they render as unsigned decimal.
    pub enable_hex: bool,

    /// Only attributes whose name contains this substring are printed.
    pub filter: Option<String>,

    pub bitfield_fallback: BitfieldFallback,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            separator: ' ',
            distance: 1,
            array_limit: 200,
            order: FormattingOrder::Insertion,
            enable_hex: true,
            filter: None,
            bitfield_fallback: BitfieldFallback::WholeField,
        }
    }
}

impl FormattingOptions {
    /// The separator as a single byte.
    pub(crate) fn separator_byte(&self) -> Result<u8, ReportError> {
        if self.separator.is_ascii() && self.separator != '\0' {
            // ASCII always fits in one byte.
            Ok(self.separator as u8)
        } else {
            Err(ReportError::InvalidSeparator(self.separator))
        }
    }

    /// Whether `key` passes the substring filter.
    pub(crate) fn matches(&self, key: &crate::ByteBuffer) -> bool {
        self.filter
            .as_deref()
            .is_none_or(|filter| key.contains(filter))
    }
}
