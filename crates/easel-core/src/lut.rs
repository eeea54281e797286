//! Lookup tables handed to the downstream renderer.
//!
//! The renderer uploads these as 1D textures or storage buffers; the byte
//! views are laid out for direct upload without conversion.

use crate::curve::CurveModel;
use crate::gradient::GradientModel;

/// A sampled curve as a tightly packed `f32` table.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveLut {
    pub values: Vec<f32>,
}

impl CurveLut {
    pub fn bake(curve: &CurveModel, size: usize) -> Self {
        Self {
            values: curve.sampled_values(size),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw native-endian `f32` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.values)
    }
}

/// A sampled gradient as opaque RGBA8 texels.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientLut {
    pub texels: Vec<[u8; 4]>,
}

impl GradientLut {
    pub fn bake(gradient: &GradientModel, size: usize) -> Self {
        Self {
            texels: gradient
                .sample_colors(size)
                .into_iter()
                .map(|c| c.to_rgba8())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.texels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texels.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.texels)
    }
}
