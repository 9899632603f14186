//! Scene layer for the wavegrid backdrop: the per-frame lattice renderer and
//! the drawing-surface abstraction it paints through.
//!
//! # Invariants
//! - `GridScene` is stateless between frames; all continuity lives in the
//!   externally owned time phase, viewport, and pointer state.
//! - Exactly `(columns + 1) * (rows + 1)` vertices are visited per frame and
//!   every interior edge is stroked exactly once.

mod grid;
mod surface;
mod svg;

pub use grid::{GridScene, GridStyle};
pub use surface::{RecordedLine, RecordingSurface, Surface};
pub use svg::SvgSurface;
