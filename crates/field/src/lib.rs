//! Field math for the wavegrid backdrop: relief generation, perspective
//! projection, and pointer-derived camera tilt.
//!
//! # Invariants
//! - Everything here is a pure function of its inputs; repeated calls with
//!   the same arguments are bit-for-bit identical.
//! - Tilt angles never exceed the configured maximum, regardless of pointer
//!   input.

mod camera;
mod project;
mod wave;

pub use camera::{Tilt, TiltCamera};
pub use project::Projector;
pub use wave::WaveField;
