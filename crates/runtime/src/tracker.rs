use wavegrid_common::{PointerNormalized, ViewportSize};

/// Owns the drawing surface's pixel dimensions.
///
/// Written synchronously on every host resize event (no debouncing), read
/// once per frame by the renderer. `detach()` corresponds to removing the
/// host listener: later events are ignored, and detaching twice is harmless.
#[derive(Debug, Clone, Copy)]
pub struct ViewportTracker {
    size: ViewportSize,
    attached: bool,
}

impl ViewportTracker {
    /// Samples the host's initial dimensions at construction.
    pub fn new(initial: ViewportSize) -> Self {
        Self {
            size: initial,
            attached: true,
        }
    }

    pub fn size(&self) -> ViewportSize {
        self.size
    }

    pub fn on_resize(&mut self, width: u32, height: u32) {
        if self.attached {
            self.size = ViewportSize::new(width, height);
        }
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }
}

/// Owns the last-known normalized pointer position.
///
/// Starts at the viewport center until the first pointer event arrives.
/// Updates are not clamped: positions just outside `[0, 1]` are legal
/// transients and the downstream tilt clamp absorbs them.
#[derive(Debug, Clone, Copy)]
pub struct PointerTracker {
    pointer: PointerNormalized,
    attached: bool,
}

impl Default for PointerTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTracker {
    pub fn new() -> Self {
        Self {
            pointer: PointerNormalized::default(),
            attached: true,
        }
    }

    pub fn pointer(&self) -> PointerNormalized {
        self.pointer
    }

    /// Normalize a pointer-move event against the current viewport.
    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32, viewport: ViewportSize) {
        if self.attached {
            self.pointer = PointerNormalized {
                x: client_x / viewport.width as f32,
                y: client_y / viewport.height as f32,
            };
        }
    }

    pub fn detach(&mut self) {
        self.attached = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_overwrites_on_resize() {
        let mut tracker = ViewportTracker::new(ViewportSize::new(800, 600));
        tracker.on_resize(1920, 1080);
        assert_eq!(tracker.size(), ViewportSize::new(1920, 1080));
    }

    #[test]
    fn viewport_ignores_events_after_detach() {
        let mut tracker = ViewportTracker::new(ViewportSize::new(800, 600));
        tracker.detach();
        tracker.detach();
        tracker.on_resize(1, 1);
        assert_eq!(tracker.size(), ViewportSize::new(800, 600));
    }

    #[test]
    fn pointer_normalizes_against_viewport() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_move(960.0, 540.0, ViewportSize::new(1920, 1080));
        assert_eq!(
            tracker.pointer(),
            PointerNormalized { x: 0.5, y: 0.5 }
        );
    }

    #[test]
    fn pointer_is_not_clamped() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_move(2400.0, -10.0, ViewportSize::new(1200, 800));
        let p = tracker.pointer();
        assert_eq!(p.x, 2.0);
        assert!(p.y < 0.0);
    }

    #[test]
    fn pointer_freezes_after_detach() {
        let mut tracker = PointerTracker::new();
        tracker.on_pointer_move(100.0, 100.0, ViewportSize::new(200, 200));
        tracker.detach();
        tracker.on_pointer_move(0.0, 0.0, ViewportSize::new(200, 200));
        assert_eq!(tracker.pointer(), PointerNormalized { x: 0.5, y: 0.5 });
    }
}
