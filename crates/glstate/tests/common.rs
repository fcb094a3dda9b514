#![allow(missing_docs)]
#![allow(dead_code)]

use glstate::{
    ApiVersion, ArrayValue, BindingPoints, Report, Section, StateSnapshot, StateValue,
    SymbolCategory, TextureTarget,
};

/// A small but representative context: scalars, symbolic enums, arrays, a
/// bitfield and a section newer than `3.3`.
pub fn snapshot(major: u32, minor: u32) -> StateSnapshot {
    let v = ApiVersion::new;

    StateSnapshot::new(v(major, minor))
        .with_section(
            Section::untitled(v(1, 0))
                .with("GL_MAJOR_VERSION", StateValue::UInt(major))
                .with("GL_MINOR_VERSION", StateValue::UInt(minor))
                .with(
                    "GL_CONTEXT_FLAGS",
                    StateValue::bitfield(SymbolCategory::ContextFlag, 0b011, 3),
                ),
        )
        .with_section(
            Section::for_version(v(1, 0))
                .with("GL_BLEND", true)
                .with(
                    "GL_BLEND_SRC",
                    StateValue::enumerant(SymbolCategory::BlendFunc, 0x0302),
                )
                .with(
                    "GL_CULL_FACE_MODE",
                    StateValue::enumerant(SymbolCategory::CullFaceMode, 0x0405),
                )
                .with(
                    "GL_DEPTH_FUNC",
                    StateValue::enumerant(SymbolCategory::CompareFunc, 0x0201),
                )
                .with("GL_DEPTH_RANGE", ArrayValue::doubles([0.0, 1.0]))
                .with("GL_COLOR_CLEAR_VALUE", ArrayValue::floats([0.0, 0.0, 0.0, 1.0]))
                .with("GL_COLOR_WRITEMASK", ArrayValue::bools([true, true, true, false]))
                .with("GL_LINE_WIDTH", 1.5f32)
                .with(
                    "GL_LOGIC_OP_MODE",
                    StateValue::enumerant(SymbolCategory::LogicOp, 0x1503),
                )
                .with(
                    "GL_POLYGON_MODE",
                    ArrayValue::enums(SymbolCategory::PolygonMode, [0x1B02, 0x1B02]),
                )
                .with("GL_STENCIL_WRITEMASK", StateValue::Hex(0xFFFF_FFFF))
                .with("GL_VIEWPORT", ArrayValue::ints([0, 0, 1280, 720])),
        )
        .with_section(
            Section::for_version(v(1, 3))
                .with(
                    "GL_ACTIVE_TEXTURE",
                    StateValue::enumerant(SymbolCategory::TextureUnit, 0x84C0),
                )
                .with(
                    "GL_COMPRESSED_TEXTURE_FORMATS",
                    ArrayValue::enums(
                        SymbolCategory::CompressedTextureFormat,
                        [
                            0x83F0, 0x83F1, 0x83F2, 0x83F3, 0x8DBB, 0x8DBC, 0x8DBD, 0x8DBE, 0x9999,
                        ],
                    ),
                ),
        )
        .with_section(
            Section::for_version(v(3, 2))
                .with(
                    "GL_PROVOKING_VERTEX",
                    StateValue::enumerant(SymbolCategory::ProvokingVertex, 0x8E4E),
                )
                .with("GL_TIMESTAMP", 1_234_567_890_123_i64),
        )
        .with_section(
            Section::for_version(v(4, 5))
                .with(
                    "GL_CLIP_ORIGIN",
                    StateValue::enumerant(SymbolCategory::ClipOrigin, 0x8CA1),
                )
                .with(
                    "GL_CLIP_DEPTH_MODE",
                    StateValue::enumerant(SymbolCategory::ClipDepthMode, 0x935E),
                ),
        )
}

pub fn binding_points() -> BindingPoints {
    let mut points = BindingPoints::new();
    points.bind(TextureTarget::Texture2D, 0, 1);
    points.bind(TextureTarget::Texture2D, 1, 4);
    points.bind(TextureTarget::CubeMap, 3, 2);
    points
}

/// Report text with trailing whitespace stripped from every line.
///
/// Headline lines end in padding, which inline snapshots cannot keep.
pub fn lines(report: &Report) -> String {
    report
        .as_str()
        .expect("report is UTF-8")
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}
