//! Value-to-name tables, one per semantic category of GL enumerant.
//!
//! Lookups are linear scans over small hand-written tables. A miss is the
//! normal path for vendor or future values and is handled by the caller's
//! numeric fallback.

/// Semantic domain of a symbolic value. Each category owns one closed table.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "fuzzing", derive(arbitrary::Arbitrary))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    HintMode,
    CullFaceMode,
    PolygonMode,
    FrontFace,
    LogicOp,
    CompressedTextureFormat,
    TextureUnit,
    BlendFunc,
    BlendEquation,
    DrawBuffer,
    StencilOp,
    CompareFunc,
    ProvokingVertex,
    ContextFlag,
    ColorReadFormat,
    ColorReadType,
    ClipOrigin,
    ClipDepthMode,
}

type Table = &'static [(u32, &'static str)];

impl SymbolCategory {
    /// Every category, in declaration order.
    pub const ALL: [SymbolCategory; 18] = [
        Self::HintMode,
        Self::CullFaceMode,
        Self::PolygonMode,
        Self::FrontFace,
        Self::LogicOp,
        Self::CompressedTextureFormat,
        Self::TextureUnit,
        Self::BlendFunc,
        Self::BlendEquation,
        Self::DrawBuffer,
        Self::StencilOp,
        Self::CompareFunc,
        Self::ProvokingVertex,
        Self::ContextFlag,
        Self::ColorReadFormat,
        Self::ColorReadType,
        Self::ClipOrigin,
        Self::ClipDepthMode,
    ];

    /// Name of `value` in this category, if the table knows it.
    pub fn resolve(self, value: u32) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(code, _)| *code == value)
            .map(|(_, name)| *name)
    }

    fn table(self) -> Table {
        match self {
            Self::HintMode => HINT_MODE,
            Self::CullFaceMode => CULL_FACE_MODE,
            Self::PolygonMode => POLYGON_MODE,
            Self::FrontFace => FRONT_FACE,
            Self::LogicOp => LOGIC_OP,
            Self::CompressedTextureFormat => COMPRESSED_TEXTURE_FORMAT,
            Self::TextureUnit => TEXTURE_UNIT,
            Self::BlendFunc => BLEND_FUNC,
            Self::BlendEquation => BLEND_EQUATION,
            Self::DrawBuffer => DRAW_BUFFER,
            Self::StencilOp => STENCIL_OP,
            Self::CompareFunc => COMPARE_FUNC,
            Self::ProvokingVertex => PROVOKING_VERTEX,
            Self::ContextFlag => CONTEXT_FLAG,
            Self::ColorReadFormat => COLOR_READ_FORMAT,
            Self::ColorReadType => COLOR_READ_TYPE,
            Self::ClipOrigin => CLIP_ORIGIN,
            Self::ClipDepthMode => CLIP_DEPTH_MODE,
        }
    }
}

static HINT_MODE: Table = &[
    (0x1100, "GL_DONT_CARE"),
    (0x1101, "GL_FASTEST"),
    (0x1102, "GL_NICEST"),
];

static CULL_FACE_MODE: Table = &[
    (0x0404, "GL_FRONT"),
    (0x0405, "GL_BACK"),
    (0x0408, "GL_FRONT_AND_BACK"),
];

static POLYGON_MODE: Table = &[
    (0x1B00, "GL_POINT"),
    (0x1B01, "GL_LINE"),
    (0x1B02, "GL_FILL"),
];

static FRONT_FACE: Table = &[(0x0900, "GL_CW"), (0x0901, "GL_CCW")];

static LOGIC_OP: Table = &[
    (0x1500, "GL_CLEAR"),
    (0x1501, "GL_AND"),
    (0x1502, "GL_AND_REVERSE"),
    (0x1503, "GL_COPY"),
    (0x1504, "GL_AND_INVERTED"),
    (0x1505, "GL_NOOP"),
    (0x1506, "GL_XOR"),
    (0x1507, "GL_OR"),
    (0x1508, "GL_NOR"),
    (0x1509, "GL_EQUIV"),
    (0x150A, "GL_INVERT"),
    (0x150B, "GL_OR_REVERSE"),
    (0x150C, "GL_COPY_INVERTED"),
    (0x150D, "GL_OR_INVERTED"),
    (0x150E, "GL_NAND"),
    (0x150F, "GL_SET"),
];

static COMPRESSED_TEXTURE_FORMAT: Table = &[
    // Generic
    (0x8225, "GL_COMPRESSED_RED"),
    (0x8226, "GL_COMPRESSED_RG"),
    (0x84ED, "GL_COMPRESSED_RGB"),
    (0x84EE, "GL_COMPRESSED_RGBA"),
    (0x8C48, "GL_COMPRESSED_SRGB"),
    (0x8C49, "GL_COMPRESSED_SRGB_ALPHA"),
    // EXT_texture_sRGB
    (0x8C4A, "GL_COMPRESSED_SLUMINANCE_EXT"),
    (0x8C4B, "GL_COMPRESSED_SLUMINANCE_ALPHA_EXT"),
    (0x8C4C, "GL_COMPRESSED_SRGB_S3TC_DXT1_EXT"),
    (0x8C4D, "GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT1_EXT"),
    (0x8C4E, "GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT3_EXT"),
    (0x8C4F, "GL_COMPRESSED_SRGB_ALPHA_S3TC_DXT5_EXT"),
    // RGTC
    (0x8DBB, "GL_COMPRESSED_RED_RGTC1"),
    (0x8DBC, "GL_COMPRESSED_SIGNED_RED_RGTC1"),
    (0x8DBD, "GL_COMPRESSED_RG_RGTC2"),
    (0x8DBE, "GL_COMPRESSED_SIGNED_RG_RGTC2"),
    // BPTC
    (0x8E8C, "GL_COMPRESSED_RGBA_BPTC_UNORM"),
    (0x8E8D, "GL_COMPRESSED_SRGB_ALPHA_BPTC_UNORM"),
    (0x8E8E, "GL_COMPRESSED_RGB_BPTC_SIGNED_FLOAT"),
    (0x8E8F, "GL_COMPRESSED_RGB_BPTC_UNSIGNED_FLOAT"),
    // ETC2 / EAC
    (0x9270, "GL_COMPRESSED_R11_EAC"),
    (0x9271, "GL_COMPRESSED_SIGNED_R11_EAC"),
    (0x9272, "GL_COMPRESSED_RG11_EAC"),
    (0x9273, "GL_COMPRESSED_SIGNED_RG11_EAC"),
    (0x9274, "GL_COMPRESSED_RGB8_ETC2"),
    (0x9275, "GL_COMPRESSED_SRGB8_ETC2"),
    (0x9276, "GL_COMPRESSED_RGB8_PUNCHTHROUGH_ALPHA1_ETC2"),
    (0x9277, "GL_COMPRESSED_SRGB8_PUNCHTHROUGH_ALPHA1_ETC2"),
    (0x9278, "GL_COMPRESSED_RGBA8_ETC2_EAC"),
    (0x9279, "GL_COMPRESSED_SRGB8_ALPHA8_ETC2_EAC"),
    // KHR_texture_compression_astc
    (0x93B0, "GL_COMPRESSED_RGBA_ASTC_4x4_KHR"),
    (0x93B1, "GL_COMPRESSED_RGBA_ASTC_5x4_KHR"),
    (0x93B2, "GL_COMPRESSED_RGBA_ASTC_5x5_KHR"),
    (0x93B3, "GL_COMPRESSED_RGBA_ASTC_6x5_KHR"),
    (0x93B4, "GL_COMPRESSED_RGBA_ASTC_6x6_KHR"),
    (0x93B5, "GL_COMPRESSED_RGBA_ASTC_8x5_KHR"),
    (0x93B6, "GL_COMPRESSED_RGBA_ASTC_8x6_KHR"),
    (0x93B7, "GL_COMPRESSED_RGBA_ASTC_8x8_KHR"),
    (0x93B8, "GL_COMPRESSED_RGBA_ASTC_10x5_KHR"),
    (0x93B9, "GL_COMPRESSED_RGBA_ASTC_10x6_KHR"),
    (0x93BA, "GL_COMPRESSED_RGBA_ASTC_10x8_KHR"),
    (0x93BB, "GL_COMPRESSED_RGBA_ASTC_10x10_KHR"),
    (0x93BC, "GL_COMPRESSED_RGBA_ASTC_12x10_KHR"),
    (0x93BD, "GL_COMPRESSED_RGBA_ASTC_12x12_KHR"),
    (0x93D0, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_4x4_KHR"),
    (0x93D1, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_5x4_KHR"),
    (0x93D2, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_5x5_KHR"),
    (0x93D3, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_6x5_KHR"),
    (0x93D4, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_6x6_KHR"),
    (0x93D5, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_8x5_KHR"),
    (0x93D6, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_8x6_KHR"),
    (0x93D7, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_8x8_KHR"),
    (0x93D8, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_10x5_KHR"),
    (0x93D9, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_10x6_KHR"),
    (0x93DA, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_10x8_KHR"),
    (0x93DB, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_10x10_KHR"),
    (0x93DC, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_12x10_KHR"),
    (0x93DD, "GL_COMPRESSED_SRGB8_ALPHA8_ASTC_12x12_KHR"),
    // 3DFX_texture_compression_FXT1
    (0x86B0, "GL_COMPRESSED_RGB_FXT1_3DFX"),
    (0x86B1, "GL_COMPRESSED_RGBA_FXT1_3DFX"),
    // EXT_texture_compression_latc
    (0x8C70, "GL_COMPRESSED_LUMINANCE_LATC1_EXT"),
    (0x8C71, "GL_COMPRESSED_SIGNED_LUMINANCE_LATC1_EXT"),
    (0x8C72, "GL_COMPRESSED_LUMINANCE_ALPHA_LATC2_EXT"),
    (0x8C73, "GL_COMPRESSED_SIGNED_LUMINANCE_ALPHA_LATC2_EXT"),
    // EXT_texture_compression_s3tc
    (0x83F0, "GL_COMPRESSED_RGB_S3TC_DXT1_EXT"),
    (0x83F1, "GL_COMPRESSED_RGBA_S3TC_DXT1_EXT"),
    (0x83F2, "GL_COMPRESSED_RGBA_S3TC_DXT3_EXT"),
    (0x83F3, "GL_COMPRESSED_RGBA_S3TC_DXT5_EXT"),
    // OES_compressed_paletted_texture
    (0x8B90, "GL_PALETTE4_RGB8_OES"),
    (0x8B91, "GL_PALETTE4_RGBA8_OES"),
    (0x8B92, "GL_PALETTE4_R5_G6_B5_OES"),
    (0x8B93, "GL_PALETTE4_RGBA4_OES"),
    (0x8B94, "GL_PALETTE4_RGB5_A1_OES"),
    (0x8B95, "GL_PALETTE8_RGB8_OES"),
    (0x8B96, "GL_PALETTE8_RGBA8_OES"),
    (0x8B97, "GL_PALETTE8_R5_G6_B5_OES"),
    (0x8B98, "GL_PALETTE8_RGBA4_OES"),
    (0x8B99, "GL_PALETTE8_RGB5_A1_OES"),
];

static TEXTURE_UNIT: Table = &[
    (0x84C0, "GL_TEXTURE0"),
    (0x84C1, "GL_TEXTURE1"),
    (0x84C2, "GL_TEXTURE2"),
    (0x84C3, "GL_TEXTURE3"),
    (0x84C4, "GL_TEXTURE4"),
    (0x84C5, "GL_TEXTURE5"),
    (0x84C6, "GL_TEXTURE6"),
    (0x84C7, "GL_TEXTURE7"),
    (0x84C8, "GL_TEXTURE8"),
    (0x84C9, "GL_TEXTURE9"),
    (0x84CA, "GL_TEXTURE10"),
    (0x84CB, "GL_TEXTURE11"),
    (0x84CC, "GL_TEXTURE12"),
    (0x84CD, "GL_TEXTURE13"),
    (0x84CE, "GL_TEXTURE14"),
    (0x84CF, "GL_TEXTURE15"),
    (0x84D0, "GL_TEXTURE16"),
    (0x84D1, "GL_TEXTURE17"),
    (0x84D2, "GL_TEXTURE18"),
    (0x84D3, "GL_TEXTURE19"),
    (0x84D4, "GL_TEXTURE20"),
    (0x84D5, "GL_TEXTURE21"),
    (0x84D6, "GL_TEXTURE22"),
    (0x84D7, "GL_TEXTURE23"),
    (0x84D8, "GL_TEXTURE24"),
    (0x84D9, "GL_TEXTURE25"),
    (0x84DA, "GL_TEXTURE26"),
    (0x84DB, "GL_TEXTURE27"),
    (0x84DC, "GL_TEXTURE28"),
    (0x84DD, "GL_TEXTURE29"),
    (0x84DE, "GL_TEXTURE30"),
    (0x84DF, "GL_TEXTURE31"),
];

static BLEND_FUNC: Table = &[
    (0x0000, "GL_ZERO"),
    (0x0001, "GL_ONE"),
    (0x0300, "GL_SRC_COLOR"),
    (0x0301, "GL_ONE_MINUS_SRC_COLOR"),
    (0x0302, "GL_SRC_ALPHA"),
    (0x0303, "GL_ONE_MINUS_SRC_ALPHA"),
    (0x0304, "GL_DST_ALPHA"),
    (0x0305, "GL_ONE_MINUS_DST_ALPHA"),
    (0x0306, "GL_DST_COLOR"),
    (0x0307, "GL_ONE_MINUS_DST_COLOR"),
    (0x0308, "GL_SRC_ALPHA_SATURATE"),
    (0x8001, "GL_CONSTANT_COLOR"),
    (0x8002, "GL_ONE_MINUS_CONSTANT_COLOR"),
    (0x8003, "GL_CONSTANT_ALPHA"),
    (0x8004, "GL_ONE_MINUS_CONSTANT_ALPHA"),
    (0x8589, "GL_SRC1_ALPHA"),
    (0x88F9, "GL_SRC1_COLOR"),
    (0x88FA, "GL_ONE_MINUS_SRC1_COLOR"),
    (0x88FB, "GL_ONE_MINUS_SRC1_ALPHA"),
];

static BLEND_EQUATION: Table = &[
    (0x8006, "GL_FUNC_ADD"),
    (0x8007, "GL_MIN"),
    (0x8008, "GL_MAX"),
    (0x800A, "GL_FUNC_SUBTRACT"),
    (0x800B, "GL_FUNC_REVERSE_SUBTRACT"),
];

static DRAW_BUFFER: Table = &[
    (0x0000, "GL_NONE"),
    (0x0400, "GL_FRONT_LEFT"),
    (0x0401, "GL_FRONT_RIGHT"),
    (0x0402, "GL_BACK_LEFT"),
    (0x0403, "GL_BACK_RIGHT"),
    (0x0404, "GL_FRONT"),
    (0x0405, "GL_BACK"),
    (0x0406, "GL_LEFT"),
    (0x0407, "GL_RIGHT"),
    (0x0408, "GL_FRONT_AND_BACK"),
    (0x8CE0, "GL_COLOR_ATTACHMENT0"),
    (0x8CE1, "GL_COLOR_ATTACHMENT1"),
    (0x8CE2, "GL_COLOR_ATTACHMENT2"),
    (0x8CE3, "GL_COLOR_ATTACHMENT3"),
    (0x8CE4, "GL_COLOR_ATTACHMENT4"),
    (0x8CE5, "GL_COLOR_ATTACHMENT5"),
    (0x8CE6, "GL_COLOR_ATTACHMENT6"),
    (0x8CE7, "GL_COLOR_ATTACHMENT7"),
    (0x8CE8, "GL_COLOR_ATTACHMENT8"),
    (0x8CE9, "GL_COLOR_ATTACHMENT9"),
    (0x8CEA, "GL_COLOR_ATTACHMENT10"),
    (0x8CEB, "GL_COLOR_ATTACHMENT11"),
    (0x8CEC, "GL_COLOR_ATTACHMENT12"),
    (0x8CED, "GL_COLOR_ATTACHMENT13"),
    (0x8CEE, "GL_COLOR_ATTACHMENT14"),
    (0x8CEF, "GL_COLOR_ATTACHMENT15"),
    (0x8CF0, "GL_COLOR_ATTACHMENT16"),
    (0x8CF1, "GL_COLOR_ATTACHMENT17"),
    (0x8CF2, "GL_COLOR_ATTACHMENT18"),
    (0x8CF3, "GL_COLOR_ATTACHMENT19"),
    (0x8CF4, "GL_COLOR_ATTACHMENT20"),
    (0x8CF5, "GL_COLOR_ATTACHMENT21"),
    (0x8CF6, "GL_COLOR_ATTACHMENT22"),
    (0x8CF7, "GL_COLOR_ATTACHMENT23"),
    (0x8CF8, "GL_COLOR_ATTACHMENT24"),
    (0x8CF9, "GL_COLOR_ATTACHMENT25"),
    (0x8CFA, "GL_COLOR_ATTACHMENT26"),
    (0x8CFB, "GL_COLOR_ATTACHMENT27"),
    (0x8CFC, "GL_COLOR_ATTACHMENT28"),
    (0x8CFD, "GL_COLOR_ATTACHMENT29"),
    (0x8CFE, "GL_COLOR_ATTACHMENT30"),
    (0x8CFF, "GL_COLOR_ATTACHMENT31"),
];

static STENCIL_OP: Table = &[
    (0x0000, "GL_ZERO"),
    (0x150A, "GL_INVERT"),
    (0x1E00, "GL_KEEP"),
    (0x1E01, "GL_REPLACE"),
    (0x1E02, "GL_INCR"),
    (0x1E03, "GL_DECR"),
    (0x8507, "GL_INCR_WRAP"),
    (0x8508, "GL_DECR_WRAP"),
];

static COMPARE_FUNC: Table = &[
    (0x0200, "GL_NEVER"),
    (0x0201, "GL_LESS"),
    (0x0202, "GL_EQUAL"),
    (0x0203, "GL_LEQUAL"),
    (0x0204, "GL_GREATER"),
    (0x0205, "GL_NOTEQUAL"),
    (0x0206, "GL_GEQUAL"),
    (0x0207, "GL_ALWAYS"),
];

static PROVOKING_VERTEX: Table = &[
    (0x8260, "GL_UNDEFINED_VERTEX"),
    (0x8E4D, "GL_FIRST_VERTEX_CONVENTION"),
    (0x8E4E, "GL_LAST_VERTEX_CONVENTION"),
    (0x8E4F, "GL_PROVOKING_VERTEX"),
];

// Bit values, looked up one set bit at a time.
static CONTEXT_FLAG: Table = &[
    (0x0001, "GL_CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT"),
    (0x0002, "GL_CONTEXT_FLAG_DEBUG_BIT"),
    (0x0004, "GL_CONTEXT_FLAG_ROBUST_ACCESS_BIT"),
];

static COLOR_READ_FORMAT: Table = &[
    (0x1901, "GL_STENCIL_INDEX"),
    (0x1902, "GL_DEPTH_COMPONENT"),
    (0x1903, "GL_RED"),
    (0x1904, "GL_GREEN"),
    (0x1905, "GL_BLUE"),
    (0x1907, "GL_RGB"),
    (0x1908, "GL_RGBA"),
    (0x80E0, "GL_BGR"),
    (0x80E1, "GL_BGRA"),
    (0x84F9, "GL_DEPTH_STENCIL"),
];

static COLOR_READ_TYPE: Table = &[
    (0x1400, "GL_BYTE"),
    (0x1401, "GL_UNSIGNED_BYTE"),
    (0x1402, "GL_SHORT"),
    (0x1403, "GL_UNSIGNED_SHORT"),
    (0x1404, "GL_INT"),
    (0x1405, "GL_UNSIGNED_INT"),
    (0x1406, "GL_FLOAT"),
    (0x140B, "GL_HALF_FLOAT"),
    (0x8032, "GL_UNSIGNED_BYTE_3_3_2"),
    (0x8033, "GL_UNSIGNED_SHORT_4_4_4_4"),
    (0x8034, "GL_UNSIGNED_SHORT_5_5_5_1"),
    (0x8035, "GL_UNSIGNED_INT_8_8_8_8"),
    (0x8036, "GL_UNSIGNED_INT_10_10_10_2"),
    (0x8362, "GL_UNSIGNED_BYTE_2_3_3_REV"),
    (0x8363, "GL_UNSIGNED_SHORT_5_6_5"),
    (0x8364, "GL_UNSIGNED_SHORT_5_6_5_REV"),
    (0x8365, "GL_UNSIGNED_SHORT_4_4_4_4_REV"),
    (0x8366, "GL_UNSIGNED_SHORT_1_5_5_5_REV"),
    (0x8367, "GL_UNSIGNED_INT_8_8_8_8_REV"),
    (0x8368, "GL_UNSIGNED_INT_2_10_10_10_REV"),
    (0x84FA, "GL_UNSIGNED_INT_24_8"),
    (0x8C3B, "GL_UNSIGNED_INT_10F_11F_11F_REV"),
    (0x8C3E, "GL_UNSIGNED_INT_5_9_9_9_REV"),
    (0x8DAD, "GL_FLOAT_32_UNSIGNED_INT_24_8_REV"),
];

static CLIP_ORIGIN: Table = &[(0x8CA1, "GL_LOWER_LEFT"), (0x8CA2, "GL_UPPER_LEFT")];

static CLIP_DEPTH_MODE: Table = &[
    (0x935E, "GL_NEGATIVE_ONE_TO_ONE"),
    (0x935F, "GL_ZERO_TO_ONE"),
];

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(SymbolCategory::CompareFunc, 0x0203, "GL_LEQUAL")]
    #[case(SymbolCategory::BlendFunc, 0x0303, "GL_ONE_MINUS_SRC_ALPHA")]
    #[case(SymbolCategory::BlendFunc, 0, "GL_ZERO")]
    #[case(SymbolCategory::StencilOp, 0, "GL_ZERO")]
    #[case(SymbolCategory::DrawBuffer, 0, "GL_NONE")]
    #[case(SymbolCategory::DrawBuffer, 0x8CFF, "GL_COLOR_ATTACHMENT31")]
    #[case(SymbolCategory::TextureUnit, 0x84C0 + 17, "GL_TEXTURE17")]
    #[case(SymbolCategory::PolygonMode, 0x1B02, "GL_FILL")]
    #[case(SymbolCategory::ClipDepthMode, 0x935F, "GL_ZERO_TO_ONE")]
    #[case(SymbolCategory::ContextFlag, 0x2, "GL_CONTEXT_FLAG_DEBUG_BIT")]
    #[case(SymbolCategory::CompressedTextureFormat, 0x93BD, "GL_COMPRESSED_RGBA_ASTC_12x12_KHR")]
    fn resolves_known_values(
        #[case] category: SymbolCategory,
        #[case] value: u32,
        #[case] name: &str,
    ) {
        assert_eq!(category.resolve(value), Some(name));
    }

    #[rstest]
    #[case(SymbolCategory::CompareFunc, 0x0208)]
    #[case(SymbolCategory::HintMode, 0)]
    #[case(SymbolCategory::ContextFlag, 0x8)]
    #[case(SymbolCategory::FrontFace, 0x0404)]
    fn unknown_values_miss(#[case] category: SymbolCategory, #[case] value: u32) {
        assert_eq!(category.resolve(value), None);
    }

    /// Each table maps every code to exactly one name.
    #[test]
    fn tables_have_unique_codes() {
        for category in SymbolCategory::ALL {
            let table = category.table();
            let codes: BTreeSet<u32> = table.iter().map(|(code, _)| *code).collect();
            assert_eq!(codes.len(), table.len(), "{category:?}");
            assert!(table.iter().all(|(_, name)| name.starts_with("GL_")));
        }
    }
}
