use crate::surface::{RecordedLine, Surface};
use glam::Vec2;
use wavegrid_common::{Rgba, ViewportSize};

/// Surface backend that captures one frame as a standalone SVG document.
///
/// Useful for eyeballing the backdrop without a window and for the headless
/// CLI's `svg` command.
#[derive(Debug)]
pub struct SvgSurface {
    viewport: ViewportSize,
    background: Rgba,
    lines: Vec<RecordedLine>,
}

impl SvgSurface {
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            // Matches the dashboard body background (#04050a).
            background: Rgba::opaque(4.0 / 255.0, 5.0 / 255.0, 10.0 / 255.0),
            lines: Vec::new(),
        }
    }

    /// Serialize the captured frame.
    pub fn document(&self) -> String {
        let w = self.viewport.width;
        let h = self.viewport.height;
        let mut svg = String::with_capacity(self.lines.len() * 120 + 256);
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
        ));
        svg.push_str(&format!(
            r#"<rect width="{w}" height="{h}" fill="{}"/>"#,
            hex(self.background),
        ));
        for line in &self.lines {
            svg.push_str(&format!(
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-opacity="{:.4}" stroke-width="{}"/>"#,
                line.from.x,
                line.from.y,
                line.to.x,
                line.to.y,
                hex(line.color),
                line.color.a,
                line.width,
            ));
        }
        svg.push_str("</svg>");
        svg
    }
}

impl Surface for SvgSurface {
    fn clear(&mut self) {
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

fn hex(color: Rgba) -> String {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "#{:02x}{:02x}{:02x}",
        channel(color.r),
        channel(color.g),
        channel(color.b)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridScene;
    use wavegrid_common::{GridSpec, PointerNormalized};

    #[test]
    fn document_contains_background_and_lines() {
        let viewport = ViewportSize::new(640, 480);
        let mut surface = SvgSurface::new(viewport);
        surface.stroke_line(
            Vec2::new(1.0, 2.0),
            Vec2::new(3.0, 4.0),
            Rgba::opaque(0.0, 245.0 / 255.0, 196.0 / 255.0).with_alpha(0.15),
            0.5,
        );

        let doc = surface.document();
        assert!(doc.starts_with("<svg"));
        assert!(doc.ends_with("</svg>"));
        assert!(doc.contains(r##"fill="#04050a""##));
        assert!(doc.contains(r##"stroke="#00f5c4""##));
        assert!(doc.contains(r#"stroke-opacity="0.1500""#));
    }

    #[test]
    fn clear_resets_the_document() {
        let mut surface = SvgSurface::new(ViewportSize::new(100, 100));
        surface.stroke_line(Vec2::ZERO, Vec2::ONE, Rgba::opaque(1.0, 1.0, 1.0), 1.0);
        surface.clear();
        assert!(!surface.document().contains("<line"));
    }

    #[test]
    fn full_frame_exports_every_edge() {
        let spec = GridSpec::new(3, 2, 50.0, 50.0).unwrap();
        let scene = GridScene::new(spec);
        let viewport = ViewportSize::new(800, 600);
        let mut surface = SvgSurface::new(viewport);
        scene.paint(&mut surface, viewport, PointerNormalized::default(), 0.25);

        let doc = surface.document();
        assert_eq!(doc.matches("<line").count(), spec.edge_count());
    }
}
