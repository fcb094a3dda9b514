use alloc::{format, string::String, vec::Vec};

use regex::Regex;

use crate::{
    ArrayValue, BitfieldFallback, Capture, FormattingOptions, ReportError, StateValue,
    SymbolCategory, assemble, query,
};

fn single(name: &str, value: StateValue, options: &FormattingOptions) -> String {
    let mut capture = Capture::new(options);
    capture.attribute(name, &value).unwrap();
    let out = assemble(capture.finish(), options).unwrap();
    String::from_utf8(out.as_bytes().to_vec()).unwrap()
}

#[test]
fn bool_line_is_key_padding_token() {
    fn source(capture: &mut Capture<'_>) -> Result<(), ReportError> {
        capture.attribute("GL_DITHER", &true.into())?;
        capture.attribute("GL_POLYGON_SMOOTH", &false.into())
    }
    let report = query(&source, None).unwrap();
    let expected = format!(
        "GL_DITHER{}GL_TRUE\nGL_POLYGON_SMOOTH GL_FALSE\n",
        " ".repeat("GL_POLYGON_SMOOTH".len() - "GL_DITHER".len() + 1)
    );
    assert_eq!(report.as_str(), Some(expected.as_str()));
}

#[test]
fn bitfield_substitutes_whole_field_for_unnamed_bit() {
    // Bit 0 is named, bit 3 is not.
    let value = StateValue::bitfield(SymbolCategory::ContextFlag, 0b1001, 4);
    assert_eq!(
        single("F", value.clone(), &FormattingOptions::default()),
        "F GL_CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT | 0x00000009\n"
    );

    let single_bit = FormattingOptions {
        bitfield_fallback: BitfieldFallback::SingleBit,
        ..Default::default()
    };
    assert_eq!(
        single("F", value, &single_bit),
        "F GL_CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT | 0x00000008\n"
    );
}

#[test]
fn empty_array_renders_braces_with_two_spaces() {
    assert_eq!(
        single("A", ArrayValue::floats(Vec::<f32>::new()).into(), &FormattingOptions::default()),
        "A {  }\n"
    );
}

#[test]
fn every_category_falls_back_to_fixed_width_hex() {
    let hex = Regex::new(r"^X 0x[0-9A-F]{8}\n$").unwrap();
    for category in SymbolCategory::ALL {
        let value = StateValue::enumerant(category, 0x7FFF_0003);
        let out = single("X", value, &FormattingOptions::default());
        assert!(hex.is_match(&out), "{category:?}: {out:?}");
    }
    let value = StateValue::enumerant(SymbolCategory::BlendFunc, 3);
    assert_eq!(single("X", value, &FormattingOptions::default()), "X 0x00000003\n");
}

#[test]
fn hex_flag_applies_to_every_unresolved_code() {
    let decimal = FormattingOptions {
        enable_hex: false,
        ..Default::default()
    };
    assert_eq!(
        single("E", StateValue::enumerant(SymbolCategory::StencilOp, 3), &decimal),
        "E 3\n"
    );
    assert_eq!(
        single("A", ArrayValue::enums(SymbolCategory::StencilOp, [0x1E00, 3]).into(), &decimal),
        "A { GL_KEEP, 3 }\n"
    );
    assert_eq!(
        single("B", StateValue::bitfield(SymbolCategory::ContextFlag, 0b1000, 4), &decimal),
        "B 8\n"
    );
    // Explicit masks are not fallbacks.
    assert_eq!(single("M", StateValue::Hex(3), &decimal), "M 0x00000003\n");
}

#[test]
fn truncated_array_keeps_ellipsis_before_wrapping() {
    let options = FormattingOptions {
        array_limit: 10,
        ..Default::default()
    };
    let value = ArrayValue::ints([1, 2, 3, 4]).with_limit(2);
    assert_eq!(single("K", value.into(), &options), "K { 1,\n    2,\n    ...  }\n");
}

#[test]
fn source_can_follow_the_hex_flag() {
    fn formats(capture: &mut Capture<'_>) -> Result<(), ReportError> {
        let codes = [0x8E21, 1];
        let value = if capture.options().enable_hex {
            ArrayValue::hex_ints(codes)
        } else {
            ArrayValue::ints(codes)
        };
        capture.attribute("GL_SHADER_BINARY_FORMATS", &value.into())
    }

    let hex = query(&formats, None).unwrap().into_buffer();
    assert_eq!(
        hex.as_bytes(),
        b"GL_SHADER_BINARY_FORMATS { 0x00008E21, 0x00000001 }\n"
    );

    let decimal = FormattingOptions {
        enable_hex: false,
        ..Default::default()
    };
    let report = query(&formats, Some(&decimal)).unwrap();
    assert_eq!(
        report.as_str(),
        Some("GL_SHADER_BINARY_FORMATS { 36385, 1 }\n")
    );
}
