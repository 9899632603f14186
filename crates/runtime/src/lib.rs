//! Runtime for the wavegrid backdrop: the cooperative frame loop and the
//! input trackers that feed it.
//!
//! # Invariants
//! - Single logical thread: trackers are written by host events and read once
//!   per frame; no locking is needed.
//! - The scheduler never overlaps frames; a frame cannot begin until the
//!   previous callback has returned.
//! - `stop()` is idempotent and no frame callback runs after it.

mod backdrop;
mod phase;
mod scheduler;
mod tracker;

pub use backdrop::Backdrop;
pub use phase::TimePhase;
pub use scheduler::{FrameHost, FrameScheduler, FrameTick, LoopState};
pub use tracker::{PointerTracker, ViewportTracker};
