use core::fmt;

use bstr::BStr;

use crate::{
    assembler::assemble,
    byte_buffer::ByteBuffer,
    error::ReportError,
    options::FormattingOptions,
    state::{Capture, StateSource},
};

/// Captures every attribute of `source` and formats them into a report.
///
/// `None` uses [`FormattingOptions::default`].
///
/// # Examples
///
/// ```rust
/// use glstate::{query, Capture, ReportError, StateValue};
///
/// fn source(capture: &mut Capture<'_>) -> Result<(), ReportError> {
///     capture.attribute("GL_BLEND", &StateValue::Bool(true))?;
///     capture.attribute("GL_LINE_WIDTH", &StateValue::Float(1.0))
/// }
///
/// let report = query(&source, None).unwrap();
/// assert_eq!(
///     report.as_str(),
///     Some("GL_BLEND      GL_TRUE\nGL_LINE_WIDTH 1.000000\n")
/// );
/// ```
///
/// # Errors
///
/// Fails if the separator is NUL or not ASCII, if a name contains a NUL, if
/// any allocation fails, or with whatever error the source itself returns. Nothing is returned on failure.
pub fn query<S>(source: &S, options: Option<&FormattingOptions>) -> Result<Report, ReportError>
where
    S: StateSource + ?Sized,
{
    let default_options;
    let options = match options {
        Some(options) => options,
        None => {
            default_options = FormattingOptions::default();
            &default_options
        }
    };

    // Reject a bad separator before the source does any work.
    options.separator_byte()?;

    let mut capture = Capture::new(options);
    source.capture(&mut capture)?;
    let table = capture.finish();

    Ok(Report {
        text: assemble(table, options)?,
    })
}

/// A finished report. Owns its text until released or dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Report {
    text: ByteBuffer,
}

impl Report {
    pub fn text(&self) -> &BStr {
        self.text.as_bstr()
    }

    /// The text followed by a NUL terminator, for C consumers.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.text.as_bytes_with_nul()
    }

    /// The text as `str`, or `None` if a source supplied non-UTF-8 names.
    pub fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(self.text.as_bytes()).ok()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_buffer(self) -> ByteBuffer {
        self.text
    }

    /// Frees the report. Equivalent to dropping it.
    pub fn release(self) {
        self.text.release();
    }
}

impl fmt::Debug for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Report").field("text", &self.text).finish()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.text, f)
    }
}
