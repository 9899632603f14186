use crate::camera::Tilt;
use wavegrid_common::{ScreenPoint, ViewportSize};

/// Floor for the perspective denominator. Depth is clamped so that a value
/// approaching `-focal_length` produces a cosmetically wrong point for one
/// frame instead of a non-finite one.
const MIN_DENOMINATOR: f32 = 1.0;

/// Perspective projection of a relief-displaced lattice vertex onto the
/// drawing surface.
///
/// Screen origin is horizontally centered and vertically placed at `horizon`
/// of the viewport height, so the camera appears to look slightly down at
/// the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    /// Strength of the depth effect; larger values flatten the scene.
    pub focal_length: f32,
    /// Vertical placement of the projection origin as a fraction of height.
    pub horizon: f32,
}

impl Default for Projector {
    fn default() -> Self {
        Self {
            focal_length: 600.0,
            horizon: 0.65,
        }
    }
}

impl Projector {
    /// Project world `(x, y, z)` under the given tilt into screen space.
    ///
    /// Stateless: the output depends only on the arguments. `scale` is 1.0 at
    /// `z = 0` and strictly decreases as `z` grows.
    pub fn project(&self, x: f32, y: f32, z: f32, tilt: Tilt, viewport: ViewportSize) -> ScreenPoint {
        let denominator = self.focal_length + z;
        if denominator < MIN_DENOMINATOR {
            tracing::warn!(
                z,
                focal_length = self.focal_length,
                "projection denominator clamped"
            );
        }
        let scale = self.focal_length / denominator.max(MIN_DENOMINATOR);
        let rx = (x * tilt.yaw.cos() - z * tilt.yaw.sin()) * scale;
        let ry = y * tilt.pitch.cos() * scale;
        ScreenPoint {
            x: viewport.width as f32 / 2.0 + rx,
            y: viewport.height as f32 * self.horizon + ry,
            scale,
        }
    }
}
