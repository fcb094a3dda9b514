//! Per-unit texture bindings, reported as one integer array per target.

use alloc::vec::Vec;

use crate::{
    error::ReportError,
    state::{ArrayValue, Capture, StateSource, StateValue},
};

/// Texture units queried per target.
pub const MAX_TEXTURE_LAYERS: usize = 32;

const TARGET_COUNT: usize = 10;

/// Binding targets, in report order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextureTarget {
    Texture1D,
    Texture1DArray,
    Texture2D,
    Texture2DArray,
    Texture2DMultisample,
    Texture2DMultisampleArray,
    Texture3D,
    Buffer,
    CubeMap,
    Rectangle,
}

impl TextureTarget {
    pub const ALL: [TextureTarget; TARGET_COUNT] = [
        Self::Texture1D,
        Self::Texture1DArray,
        Self::Texture2D,
        Self::Texture2DArray,
        Self::Texture2DMultisample,
        Self::Texture2DMultisampleArray,
        Self::Texture3D,
        Self::Buffer,
        Self::CubeMap,
        Self::Rectangle,
    ];

    /// Name of the binding query, which is also the report key.
    pub fn binding_name(self) -> &'static str {
        match self {
            Self::Texture1D => "GL_TEXTURE_BINDING_1D",
            Self::Texture1DArray => "GL_TEXTURE_BINDING_1D_ARRAY",
            Self::Texture2D => "GL_TEXTURE_BINDING_2D",
            Self::Texture2DArray => "GL_TEXTURE_BINDING_2D_ARRAY",
            Self::Texture2DMultisample => "GL_TEXTURE_BINDING_2D_MULTISAMPLE",
            Self::Texture2DMultisampleArray => "GL_TEXTURE_BINDING_2D_MULTISAMPLE_ARRAY",
            Self::Texture3D => "GL_TEXTURE_BINDING_3D",
            Self::Buffer => "GL_TEXTURE_BINDING_BUFFER",
            Self::CubeMap => "GL_TEXTURE_BINDING_CUBE_MAP",
            Self::Rectangle => "GL_TEXTURE_BINDING_RECTANGLE",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Texture object names bound to each unit `GL_TEXTURE0..GL_TEXTURE31`, for
/// every target. Unqueried units stay `0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingPoints {
    bindings: [[i32; MAX_TEXTURE_LAYERS]; TARGET_COUNT],
}

impl Default for BindingPoints {
    fn default() -> Self {
        Self {
            bindings: [[0; MAX_TEXTURE_LAYERS]; TARGET_COUNT],
        }
    }
}

impl BindingPoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `texture` as bound to `target` on `layer`.
    ///
    /// Layers past [`MAX_TEXTURE_LAYERS`] are ignored.
    pub fn bind(&mut self, target: TextureTarget, layer: usize, texture: i32) {
        if let Some(slot) = self.bindings[target.index()].get_mut(layer) {
            *slot = texture;
        }
    }

    pub fn layers(&self, target: TextureTarget) -> &[i32; MAX_TEXTURE_LAYERS] {
        &self.bindings[target.index()]
    }
}

impl StateSource for BindingPoints {
    fn capture(&self, capture: &mut Capture<'_>) -> Result<(), ReportError> {
        for target in TextureTarget::ALL {
            let layers = Vec::from(self.layers(target).as_slice());
            capture.attribute(target.binding_name(), &StateValue::Array(ArrayValue::ints(layers)))?;
        }
        Ok(())
    }
}
