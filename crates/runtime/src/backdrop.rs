use crate::scheduler::{FrameHost, FrameScheduler};
use crate::tracker::{PointerTracker, ViewportTracker};
use wavegrid_common::ViewportSize;
use wavegrid_scene::{GridScene, Surface};

/// The mountable backdrop: one owned object holding the scene, both input
/// trackers, and the frame loop.
///
/// This replaces what would otherwise be ambient per-module state (mouse
/// position, phase, frame handle) so multiple instances can never interfere.
/// `start`/`stop` are the mount/unmount boundary: `stop()` halts the loop and
/// detaches both trackers, and calling it again is harmless.
pub struct Backdrop<H: FrameHost> {
    scene: GridScene,
    scheduler: FrameScheduler<H>,
    viewport: ViewportTracker,
    pointer: PointerTracker,
}

impl<H: FrameHost> Backdrop<H> {
    pub fn new(scene: GridScene, host: H, initial_viewport: ViewportSize) -> Self {
        Self {
            scene,
            scheduler: FrameScheduler::new(host),
            viewport: ViewportTracker::new(initial_viewport),
            pointer: PointerTracker::new(),
        }
    }

    pub fn start(&mut self) {
        self.scheduler.start();
    }

    /// Stop the loop, then detach listeners. Order is not load-bearing: a
    /// stopped scheduler never fires a render that could read tracker state.
    pub fn stop(&mut self) {
        self.scheduler.stop();
        self.viewport.detach();
        self.pointer.detach();
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport.size()
    }

    pub fn scene(&self) -> &GridScene {
        &self.scene
    }

    /// Host resize event.
    pub fn handle_resize(&mut self, width: u32, height: u32) {
        self.viewport.on_resize(width, height);
    }

    /// Host pointer-move event, in surface pixel coordinates.
    pub fn handle_pointer_move(&mut self, client_x: f32, client_y: f32) {
        let viewport = self.viewport.size();
        self.pointer.on_pointer_move(client_x, client_y, viewport);
    }

    /// Deliver one frame: reads tracker state as of the callback start, then
    /// paints through the scene. No-op when stopped.
    pub fn render_frame<S: Surface>(&mut self, surface: &mut S) {
        let scene = self.scene;
        let viewport = self.viewport.size();
        let pointer = self.pointer.pointer();
        self.scheduler
            .on_frame(|tick| scene.paint(surface, viewport, pointer, tick.phase));
    }
}
