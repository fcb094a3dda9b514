//! Readable, diffable reports of a graphics context's state.
//!
//! A [`StateSource`] hands typed attribute values to a [`Capture`], which
//! renders each one to text. [`query`] then lays the captured records out as
//! aligned `<name> <value>` lines, optionally sorted, filtered and with long
//! arrays wrapped one element per line.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(any(test, feature = "fuzzing"))]
extern crate std;

mod byte_buffer;
mod record;
mod render;
mod symbols;

mod assembler;
mod binding_points;
mod error;
mod options;
mod report;
mod snapshot;
mod state;

#[cfg(test)]
mod tests;

pub use assembler::assemble;
pub use binding_points::{BindingPoints, MAX_TEXTURE_LAYERS, TextureTarget};
pub use byte_buffer::{ByteBuffer, MIN_CAPACITY};
pub use error::ReportError;
pub use options::{BitfieldFallback, FormattingOptions, FormattingOrder};
pub use record::{Record, RecordTable};
pub use report::{Report, query};
pub use snapshot::{ApiVersion, Section, StateSnapshot};
pub use state::{ArrayItems, ArrayValue, Capture, StateSource, StateValue};
pub use symbols::SymbolCategory;

pub use bstr::BStr;
