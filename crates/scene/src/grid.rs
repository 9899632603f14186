use crate::surface::Surface;
use glam::Vec2;
use wavegrid_common::{GridSpec, PointerNormalized, Rgba, ViewportSize};
use wavegrid_field::{Projector, TiltCamera, WaveField};

/// Stroke styling for the two lattice directions.
///
/// Horizontal and vertical edges are tinted differently so the grid keeps a
/// readable orientation under tilt. Any consistent two-color scheme works;
/// the defaults match the dashboard accent palette.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    /// Channel A: edges toward the right lattice neighbor. #00f5c4.
    pub horizontal: Rgba,
    /// Channel B: edges toward the bottom lattice neighbor. #7b61ff.
    pub vertical: Rgba,
    /// Alpha per unit of perspective scale; nearer vertices draw more opaque.
    pub alpha_gain: f32,
    pub horizontal_alpha_cap: f32,
    pub vertical_alpha_cap: f32,
    pub line_width: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            horizontal: Rgba::opaque(0.0, 245.0 / 255.0, 196.0 / 255.0),
            vertical: Rgba::opaque(123.0 / 255.0, 97.0 / 255.0, 1.0),
            alpha_gain: 0.4,
            horizontal_alpha_cap: 0.15,
            vertical_alpha_cap: 0.12,
            line_width: 0.5,
        }
    }
}

/// The per-frame lattice renderer.
///
/// Stateless between calls: every frame is a pure function of the viewport,
/// the pointer, and the time phase. The scene never touches host resources;
/// it only issues clear/stroke calls on the surface it is handed.
#[derive(Debug, Clone, Copy)]
pub struct GridScene {
    pub spec: GridSpec,
    pub field: WaveField,
    pub projector: Projector,
    pub camera: TiltCamera,
    pub style: GridStyle,
    /// Linear scroll rate in world units per phase unit, per axis. Wrapped
    /// modulo one cell so offsets stay small while the scroll appears
    /// endless.
    pub drift: Vec2,
}

impl GridScene {
    pub fn new(spec: GridSpec) -> Self {
        tracing::debug!(
            columns = spec.columns,
            rows = spec.rows,
            "grid scene constructed"
        );
        Self {
            spec,
            field: WaveField::default(),
            projector: Projector::default(),
            camera: TiltCamera::default(),
            style: GridStyle::default(),
            drift: Vec2::new(30.0, 20.0),
        }
    }

    /// Paint one frame.
    ///
    /// Clears the surface, derives tilt from the pointer, then walks the full
    /// lattice stroking right and bottom neighbor edges with
    /// distance-attenuated alpha.
    pub fn paint<S: Surface>(
        &self,
        surface: &mut S,
        viewport: ViewportSize,
        pointer: PointerNormalized,
        t: f32,
    ) {
        surface.clear();

        let tilt = self.camera.tilt(pointer);
        let ox = (t * self.drift.x) % self.spec.cell_width;
        let oy = (t * self.drift.y) % self.spec.cell_height;
        let half_w = self.spec.total_width() / 2.0;
        let half_h = self.spec.total_height() / 2.0;

        for r in 0..=self.spec.rows {
            for c in 0..=self.spec.columns {
                let x = c as f32 * self.spec.cell_width - half_w + ox;
                let y = r as f32 * self.spec.cell_height - half_h + oy;
                let p = self
                    .projector
                    .project(x, y, self.field.depth(x, y, t), tilt, viewport);

                if c < self.spec.columns {
                    let x2 = (c + 1) as f32 * self.spec.cell_width - half_w + ox;
                    let q = self
                        .projector
                        .project(x2, y, self.field.depth(x2, y, t), tilt, viewport);
                    let alpha = (p.scale * self.style.alpha_gain).min(self.style.horizontal_alpha_cap);
                    surface.stroke_line(
                        p.pos(),
                        q.pos(),
                        self.style.horizontal.with_alpha(alpha),
                        self.style.line_width,
                    );
                }

                if r < self.spec.rows {
                    let y2 = (r + 1) as f32 * self.spec.cell_height - half_h + oy;
                    let q = self
                        .projector
                        .project(x, y2, self.field.depth(x, y2, t), tilt, viewport);
                    let alpha = (p.scale * self.style.alpha_gain).min(self.style.vertical_alpha_cap);
                    surface.stroke_line(
                        p.pos(),
                        q.pos(),
                        self.style.vertical.with_alpha(alpha),
                        self.style.line_width,
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;

    const VIEWPORT: ViewportSize = ViewportSize {
        width: 1920,
        height: 1080,
    };

    fn small_scene() -> GridScene {
        GridScene::new(GridSpec::new(2, 2, 120.0, 80.0).unwrap())
    }

    #[test]
    fn lattice_edge_counts_are_exact() {
        let scene = small_scene();
        let mut surface = RecordingSurface::new();
        scene.paint(&mut surface, VIEWPORT, PointerNormalized::default(), 0.0);

        // C*(R+1) horizontal + R*(C+1) vertical for a 2x2 grid
        assert_eq!(surface.lines.len(), 12);
        assert_eq!(surface.lines_in_channel(scene.style.horizontal).count(), 6);
        assert_eq!(surface.lines_in_channel(scene.style.vertical).count(), 6);
    }

    #[test]
    fn every_frame_clears_first() {
        let scene = small_scene();
        let mut surface = RecordingSurface::new();
        scene.paint(&mut surface, VIEWPORT, PointerNormalized::default(), 0.0);
        scene.paint(&mut surface, VIEWPORT, PointerNormalized::default(), 0.006);
        assert_eq!(surface.clears, 2);
        // Second frame replaced the first, not appended to it.
        assert_eq!(surface.lines.len(), 12);
    }

    #[test]
    fn alpha_never_exceeds_channel_cap() {
        let scene = GridScene::new(GridSpec::default());
        let mut surface = RecordingSurface::new();
        scene.paint(&mut surface, VIEWPORT, PointerNormalized::default(), 1.3);

        for line in surface.lines_in_channel(scene.style.horizontal) {
            assert!(line.color.a <= scene.style.horizontal_alpha_cap + 1e-6);
        }
        for line in surface.lines_in_channel(scene.style.vertical) {
            assert!(line.color.a <= scene.style.vertical_alpha_cap + 1e-6);
        }
    }

    #[test]
    fn first_vertex_lands_left_of_center_above_horizon() {
        // Centered pointer means zero tilt; vertex (0, 0) sits in the
        // negative-shifted quadrant of a centered grid.
        let scene = small_scene();
        let mut surface = RecordingSurface::new();
        scene.paint(&mut surface, VIEWPORT, PointerNormalized::default(), 0.0);

        let first = surface.lines[0];
        assert!(first.from.x < VIEWPORT.width as f32 / 2.0);
        assert!(first.from.y < VIEWPORT.height as f32 * scene.projector.horizon);
    }

    #[test]
    fn pointer_motion_changes_the_frame() {
        let scene = small_scene();

        let mut centered = RecordingSurface::new();
        scene.paint(&mut centered, VIEWPORT, PointerNormalized::default(), 0.5);

        let mut tilted = RecordingSurface::new();
        scene.paint(
            &mut tilted,
            VIEWPORT,
            PointerNormalized { x: 1.0, y: 0.5 },
            0.5,
        );

        assert_ne!(centered.lines, tilted.lines);
    }

    #[test]
    fn phase_motion_changes_the_frame() {
        let scene = small_scene();
        let pointer = PointerNormalized::default();

        let mut a = RecordingSurface::new();
        scene.paint(&mut a, VIEWPORT, pointer, 0.0);
        let mut b = RecordingSurface::new();
        scene.paint(&mut b, VIEWPORT, pointer, 0.006);

        assert_ne!(a.lines, b.lines);
    }

    #[test]
    fn stroke_width_is_uniform() {
        let scene = small_scene();
        let mut surface = RecordingSurface::new();
        scene.paint(&mut surface, VIEWPORT, PointerNormalized::default(), 0.0);
        assert!(surface.lines.iter().all(|l| l.width == scene.style.line_width));
    }
}
