use thiserror::Error;

/// Failures that abort a report.
///
/// Unknown or future symbolic values are not errors; they always render
/// through the numeric fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// An allocation for a buffer or table failed, or its size overflowed.
    #[error("out of memory: cannot allocate {requested} bytes")]
    OutOfMemory {
        /// Capacity, in bytes or elements, of the failed allocation.
        requested: usize,
    },
    /// The padding separator must be a single, non-NUL ASCII byte.
    #[error("separator {0:?} is not a non-NUL ASCII character")]
    InvalidSeparator(char),
    /// Text contains a NUL byte, which would end the report early for
    /// consumers that read it as a C string.
    #[error("text contains a NUL byte at offset {position}")]
    InteriorNul {
        /// Offset of the first NUL within the rejected text.
        position: usize,
    },
}

impl ReportError {
    pub(crate) fn out_of_memory(requested: usize) -> Self {
        Self::OutOfMemory { requested }
    }
}
