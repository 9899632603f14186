use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while validating backdrop configuration.
#[derive(Debug, Error, PartialEq)]
pub enum SpecError {
    #[error("grid needs at least one column and one row (got {columns}x{rows})")]
    DegenerateLattice { columns: u32, rows: u32 },
    #[error("cell dimensions must be positive (got {width}x{height})")]
    NonPositiveCell { width: f32, height: f32 },
}

/// Fixed lattice geometry for the wireframe backdrop.
///
/// Immutable once constructed; the renderer iterates `(columns + 1) x
/// (rows + 1)` vertices and strokes edges between lattice neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    pub columns: u32,
    pub rows: u32,
    pub cell_width: f32,
    pub cell_height: f32,
}

impl GridSpec {
    pub fn new(
        columns: u32,
        rows: u32,
        cell_width: f32,
        cell_height: f32,
    ) -> Result<Self, SpecError> {
        if columns == 0 || rows == 0 {
            return Err(SpecError::DegenerateLattice { columns, rows });
        }
        if cell_width <= 0.0 || cell_height <= 0.0 {
            return Err(SpecError::NonPositiveCell {
                width: cell_width,
                height: cell_height,
            });
        }
        Ok(Self {
            columns,
            rows,
            cell_width,
            cell_height,
        })
    }

    /// Total lattice width in world units.
    pub fn total_width(&self) -> f32 {
        self.columns as f32 * self.cell_width
    }

    /// Total lattice height in world units.
    pub fn total_height(&self) -> f32 {
        self.rows as f32 * self.cell_height
    }

    /// Number of lattice vertices visited per frame.
    pub fn vertex_count(&self) -> usize {
        (self.columns as usize + 1) * (self.rows as usize + 1)
    }

    /// Number of edges stroked per frame (horizontal plus vertical).
    pub fn edge_count(&self) -> usize {
        let c = self.columns as usize;
        let r = self.rows as usize;
        c * (r + 1) + r * (c + 1)
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            columns: 22,
            rows: 16,
            cell_width: 120.0,
            cell_height: 80.0,
        }
    }
}

/// Drawing surface dimensions in device pixels.
///
/// Owned by the viewport tracker, overwritten on resize, read once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    /// Zero-sized viewports are collapsed to 1x1 so normalization and
    /// projection stay finite during window minimization.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }
}

/// Last-observed pointer position normalized against the viewport.
///
/// Values may transiently leave `[0, 1]` during fast movement near the
/// viewport edge; consumers clamp the derived tilt, not the position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerNormalized {
    pub x: f32,
    pub y: f32,
}

impl Default for PointerNormalized {
    /// Center of the viewport, used until the first pointer event arrives.
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

/// Output of projecting one lattice vertex. Ephemeral; never stored across
/// frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Perspective scale factor; 1.0 at zero depth, shrinking with distance.
    pub scale: f32,
}

impl ScreenPoint {
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}
