//! Lays a [`RecordTable`] out as aligned report text.
//!
//! Every emitted line is `<key><padding><value>\n`, where the padding brings
//! each value to the same column: the longest emitted key plus
//! [`FormattingOptions::distance`]. Array values longer than
//! [`FormattingOptions::array_limit`] are split after every comma, and each
//! continuation line is indented so its element sits under the first one.

use core::cmp::Ordering;

use crate::{
    byte_buffer::ByteBuffer,
    error::ReportError,
    options::{FormattingOptions, FormattingOrder},
    record::{Record, RecordTable},
};

/// Builds the report text from `table`, consuming it.
///
/// # Errors
///
/// [`ReportError::InvalidSeparator`] if the separator is NUL or not ASCII, and
/// [`ReportError::OutOfMemory`] if the output cannot be allocated. No partial
/// output is returned.
pub fn assemble(table: RecordTable, options: &FormattingOptions) -> Result<ByteBuffer, ReportError> {
    let separator = options.separator_byte()?;
    let sorted = options.order == FormattingOrder::Sorted;
    let emitted = |record: &Record| !(sorted && record.headline) && options.matches(&record.key);

    let mut records = table.into_records();
    let total = records.len();

    let column = records
        .iter()
        .filter(|r| emitted(*r))
        .map(|r| r.key.len())
        .max()
        .unwrap_or(0)
        .checked_add(options.distance)
        .ok_or(ReportError::out_of_memory(usize::MAX))?;

    // Lower bound on the output size; wrapping can only add to it.
    let estimate = records
        .iter()
        .filter(|r| emitted(*r))
        .fold(1usize, |acc, r| {
            acc.saturating_add(column.max(r.key.len()))
                .saturating_add(r.value.len())
                .saturating_add(if r.headline { 2 } else { 1 })
        });
    let mut out = ByteBuffer::with_capacity(estimate)?;

    if sorted {
        records.sort_by(|a, b| compare_keys(&a.key, &b.key));
    }

    let mut lines = 0usize;
    for record in records {
        if !emitted(&record) {
            continue;
        }
        lines += 1;

        if record.headline && !out.is_empty() {
            out.append_str("\n")?;
        }

        out.append(&record.key)?;
        let padding = column.saturating_sub(record.key.len());
        out.resize(out.len() + padding, Some(separator))?;

        if record.value.len() > options.array_limit && record.value.last_byte() == Some(b'}') {
            wrap_elements(&mut out, &record.value, record.key.len() + padding + 1, separator)?;
        } else {
            out.append(&record.value)?;
        }

        out.append_str("\n")?;
    }

    log::debug!(
        "assembled {lines} of {total} records, column {column}, {:?} order, {} bytes",
        options.order,
        out.len()
    );

    Ok(out)
}

/// Byte-wise key order, with empty keys after every non-empty one.
fn compare_keys(a: &ByteBuffer, b: &ByteBuffer) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.as_bytes().cmp(b.as_bytes()),
    }
}

/// Appends `value` with a line break after every comma. Each continuation
/// line starts with `indent` separators.
fn wrap_elements(
    out: &mut ByteBuffer,
    value: &ByteBuffer,
    indent: usize,
    separator: u8,
) -> Result<(), ReportError> {
    log::trace!("wrapping {} byte array value", value.len());

    let mut offset = 0;
    while offset < value.len() {
        match value.find_byte(b',', offset) {
            Some(comma) => {
                out.append_slice(value, offset, comma - offset + 1)?;
                out.append_str("\n")?;
                out.resize(out.len() + indent, Some(separator))?;
                offset = comma + 1;
            }
            None => {
                out.append_slice(value, offset, value.len() - offset)?;
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::*;

    fn table(pairs: &[(&str, &str)]) -> RecordTable {
        let mut table = RecordTable::new();
        for (key, value) in pairs {
            if let Some(title) = key.strip_prefix('#') {
                table.append_headline(title).unwrap();
            } else {
                table.append_text(key, value).unwrap();
            }
        }
        table
    }

    fn text(table: RecordTable, options: &FormattingOptions) -> String {
        let out = assemble(table, options).unwrap();
        String::from_utf8(out.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn aligns_values_one_past_the_longest_key() {
        let out = text(
            table(&[("GL_BLEND", "GL_TRUE"), ("GL_DEPTH_TEST", "GL_FALSE")]),
            &FormattingOptions::default(),
        );
        assert_eq!(out, "GL_BLEND      GL_TRUE\nGL_DEPTH_TEST GL_FALSE\n");
    }

    #[test]
    fn separator_and_distance() {
        let options = FormattingOptions {
            separator: '.',
            distance: 3,
            ..Default::default()
        };
        let out = text(table(&[("A", "1"), ("ABC", "2")]), &options);
        assert_eq!(out, "A.....1\nABC...2\n");
    }

    #[test]
    fn headlines_get_a_blank_line_except_at_the_start() {
        let out = text(
            table(&[("#GL_VERSION_1_0", ""), ("GL_A", "1"), ("#GL_VERSION_2_0", ""), ("GL_B", "2")]),
            &FormattingOptions::default(),
        );
        assert_eq!(
            out,
            "GL_VERSION_1_0 \nGL_A           1\n\nGL_VERSION_2_0 \nGL_B           2\n"
        );
    }

    #[test]
    fn sorted_order_drops_headlines() {
        let options = FormattingOptions {
            order: FormattingOrder::Sorted,
            ..Default::default()
        };
        let out = text(
            table(&[("GL_C", "3"), ("#GL_VERSION_LONG_TITLE", ""), ("GL_A", "1"), ("GL_B", "2")]),
            &options,
        );
        assert_eq!(out, "GL_A 1\nGL_B 2\nGL_C 3\n");
    }

    #[test]
    fn empty_keys_sort_last() {
        assert_eq!(
            compare_keys(&ByteBuffer::new().unwrap(), &ByteBuffer::from_text("A").unwrap()),
            Ordering::Greater
        );
        let options = FormattingOptions {
            order: FormattingOrder::Sorted,
            ..Default::default()
        };
        let out = text(table(&[("", "x"), ("B", "2"), ("A", "1")]), &options);
        assert_eq!(out, "A 1\nB 2\n  x\n");
    }

    #[test]
    fn filter_narrows_lines_and_column() {
        let options = FormattingOptions {
            filter: Some("STENCIL".into()),
            ..Default::default()
        };
        let out = text(
            table(&[
                ("GL_STENCIL_REF", "0"),
                ("GL_STENCIL_BACK_WRITEMASK_LONGER", "0xFFFFFFFF"),
                ("GL_A_VERY_LONG_UNRELATED_ATTRIBUTE", "1"),
            ]),
            &options,
        );
        assert_eq!(
            out,
            "GL_STENCIL_REF                   0\nGL_STENCIL_BACK_WRITEMASK_LONGER 0xFFFFFFFF\n"
        );
    }

    #[test]
    fn long_arrays_wrap_one_element_per_line() {
        let options = FormattingOptions {
            array_limit: 8,
            ..Default::default()
        };
        let out = text(table(&[("KEY", "{ 1, 2, 3 }"), ("K", "{ 4 }")]), &options);
        assert_eq!(out, "KEY { 1,\n      2,\n      3 }\nK   { 4 }\n");
    }

    #[test]
    fn only_bracketed_values_wrap() {
        let options = FormattingOptions {
            array_limit: 4,
            ..Default::default()
        };
        let out = text(table(&[("K", "A, B, C")]), &options);
        assert_eq!(out, "K A, B, C\n");
    }

    #[test]
    fn empty_table_is_empty_text() {
        let out = assemble(RecordTable::new(), &FormattingOptions::default()).unwrap();
        assert!(out.is_empty());
        assert_eq!(out.as_bytes_with_nul(), b"\0");
    }

    #[test]
    fn non_ascii_separator_fails_before_output() {
        let options = FormattingOptions {
            separator: 'é',
            ..Default::default()
        };
        assert_eq!(
            assemble(table(&[("A", "1")]), &options),
            Err(ReportError::InvalidSeparator('é'))
        );
    }
}
