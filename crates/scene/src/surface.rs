use glam::Vec2;
use wavegrid_common::Rgba;

/// Minimal 2D drawing surface the scene paints through.
///
/// Backends exist for wgpu (the desktop host), SVG export, and an in-memory
/// recorder for tests and headless probing. The scene only ever clears and
/// strokes; no fills, no text.
pub trait Surface {
    /// Erase the full surface before a frame is painted.
    fn clear(&mut self);

    /// Stroke a straight line segment with the given color and width.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
}

/// One stroke captured by [`RecordingSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordedLine {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Rgba,
    pub width: f32,
}

/// Surface that records every call for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub clears: u32,
    pub lines: Vec<RecordedLine>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strokes whose RGB channels match `color` (alpha ignored).
    pub fn lines_in_channel(&self, color: Rgba) -> impl Iterator<Item = &RecordedLine> {
        self.lines
            .iter()
            .filter(move |l| (l.color.r, l.color.g, l.color.b) == (color.r, color.g, color.b))
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.clears += 1;
        self.lines.clear();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.lines.push(RecordedLine {
            from,
            to,
            color,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_drops_recorded_lines() {
        let mut surface = RecordingSurface::new();
        surface.stroke_line(Vec2::ZERO, Vec2::ONE, Rgba::opaque(1.0, 0.0, 0.0), 1.0);
        assert_eq!(surface.lines.len(), 1);
        surface.clear();
        assert_eq!(surface.clears, 1);
        assert!(surface.lines.is_empty());
    }

    #[test]
    fn channel_filter_ignores_alpha() {
        let mut surface = RecordingSurface::new();
        let teal = Rgba::opaque(0.0, 0.9, 0.7);
        surface.stroke_line(Vec2::ZERO, Vec2::ONE, teal.with_alpha(0.1), 0.5);
        surface.stroke_line(Vec2::ZERO, Vec2::ONE, teal.with_alpha(0.2), 0.5);
        surface.stroke_line(Vec2::ZERO, Vec2::ONE, Rgba::opaque(1.0, 0.0, 0.0), 0.5);
        assert_eq!(surface.lines_in_channel(teal).count(), 2);
    }
}
