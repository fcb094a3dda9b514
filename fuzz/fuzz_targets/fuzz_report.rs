#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use glstate::{
    BitfieldFallback, Capture, FormattingOptions, FormattingOrder, ReportError, StateSource,
    StateValue, query,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Entry {
    Section(String),
    Attribute(String, StateValue),
}

#[derive(Debug, Arbitrary)]
struct Input {
    entries: Vec<Entry>,
    separator: char,
    distance: u8,
    array_limit: u16,
    order: FormattingOrder,
    enable_hex: bool,
    filter: Option<String>,
    bitfield_fallback: BitfieldFallback,
}

struct Entries<'a>(&'a [Entry]);

impl StateSource for Entries<'_> {
    fn capture(&self, capture: &mut Capture<'_>) -> Result<(), ReportError> {
        for entry in self.0 {
            match entry {
                Entry::Section(title) => capture.section(title)?,
                Entry::Attribute(name, value) => capture.attribute(name, value)?,
            }
        }
        Ok(())
    }
}

fn report(data: &[u8]) {
    let Ok(input) = Input::arbitrary(&mut Unstructured::new(data)) else {
        return;
    };

    let options = FormattingOptions {
        separator: input.separator,
        distance: usize::from(input.distance),
        array_limit: usize::from(input.array_limit),
        order: input.order,
        enable_hex: input.enable_hex,
        filter: input.filter,
        bitfield_fallback: input.bitfield_fallback,
    };

    match query(&Entries(&input.entries), Some(&options)) {
        Ok(report) => {
            let with_nul = report.as_bytes_with_nul();
            assert_eq!(with_nul.len(), report.len() + 1);
            assert_eq!(with_nul.last(), Some(&0));
            // Every emitted record ends its last line.
            assert!(report.is_empty() || report.text().ends_with(b"\n"));
        }
        Err(ReportError::InvalidSeparator(c)) => assert!(!c.is_ascii() || c == '\0'),
        Err(ReportError::InteriorNul { .. }) => {
            assert!(input.entries.iter().any(|entry| match entry {
                Entry::Section(text) | Entry::Attribute(text, _) => text.contains('\0'),
            }));
        }
        Err(err) => panic!("unexpected error: {err}"),
    }
}

fuzz_target!(|data: &[u8]| report(data));
