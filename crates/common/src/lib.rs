//! Shared types for the wavegrid animated backdrop.
//!
//! # Invariants
//! - `GridSpec` is validated at construction and immutable afterwards.
//! - Nothing here owns host resources; everything is plain data.

pub mod types;

pub use types::{GridSpec, PointerNormalized, Rgba, ScreenPoint, SpecError, ViewportSize};
