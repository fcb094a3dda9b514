use alloc::vec::Vec;

use crate::{byte_buffer::ByteBuffer, error::ReportError};

/// One line of a report: an attribute and its rendered value, or a section
/// headline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub(crate) key: ByteBuffer,
    pub(crate) value: ByteBuffer,
    pub(crate) headline: bool,
}

impl Record {
    pub fn key(&self) -> &ByteBuffer {
        &self.key
    }

    /// Rendered value; always empty for headlines.
    pub fn value(&self) -> &ByteBuffer {
        &self.value
    }

    pub fn is_headline(&self) -> bool {
        self.headline
    }
}

/// Records in capture order.
///
/// The table grows as needed, so new attributes are never silently dropped.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordTable {
    records: Vec<Record>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, ReportError> {
        let mut records = Vec::new();
        records
            .try_reserve_exact(capacity)
            .map_err(|_| ReportError::out_of_memory(capacity))?;
        Ok(Self { records })
    }

    /// Appends a section title with an empty value.
    pub fn append_headline(&mut self, title: &str) -> Result<(), ReportError> {
        let record = Record {
            key: ByteBuffer::from_text(title)?,
            value: ByteBuffer::new()?,
            headline: true,
        };
        self.push(record)
    }

    /// Appends an attribute whose value is already rendered.
    pub fn append_pair(&mut self, key: &str, value: ByteBuffer) -> Result<(), ReportError> {
        let record = Record {
            key: ByteBuffer::from_text(key)?,
            value,
            headline: false,
        };
        self.push(record)
    }

    pub fn append_text(&mut self, key: &str, value: &str) -> Result<(), ReportError> {
        self.append_pair(key, ByteBuffer::from_text(value)?)
    }

    fn push(&mut self, record: Record) -> Result<(), ReportError> {
        self.records
            .try_reserve(1)
            .map_err(|_| ReportError::out_of_memory(self.records.len().saturating_add(1)))?;
        self.records.push(record);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn into_records(self) -> Vec<Record> {
        self.records
    }
}
