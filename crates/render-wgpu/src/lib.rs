//! wgpu render backend for the wavegrid backdrop.
//!
//! Streams each frame's stroked lattice edges to the GPU as an alpha-blended
//! line list in screen-space pixel coordinates; the vertex shader converts to
//! NDC using the current viewport.
//!
//! # Invariants
//! - The surface texture is written only here; no other component draws.
//! - The vertex buffer is preallocated once; oversized batches are truncated,
//!   never reallocated mid-frame.

mod line;
mod shaders;

pub use line::{LineBatch, LineRenderer};
