use wavegrid_common::PointerNormalized;

/// Small camera rotation derived from the pointer, simulating parallax
/// without a real camera. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    /// Rotation around the horizontal axis, driven by pointer y.
    pub pitch: f32,
    /// Rotation around the vertical axis, driven by pointer x.
    pub yaw: f32,
}

/// Maps normalized pointer position to bounded tilt angles.
///
/// Tilt motion exists outside any deterministic frame state; it is purely a
/// function of the latest observed pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltCamera {
    /// Radians of tilt per unit of pointer offset from center.
    pub sensitivity: f32,
    /// Hard bound on either angle. Pointer positions outside `[0, 1]` can
    /// occur transiently; the clamp keeps them harmless.
    pub max_tilt: f32,
}

impl Default for TiltCamera {
    fn default() -> Self {
        Self {
            sensitivity: 0.4,
            max_tilt: 0.2,
        }
    }
}

impl TiltCamera {
    /// Tilt for the given pointer position, centered on (0.5, 0.5).
    ///
    /// The clamp is applied after the sensitivity multiplier, so `max_tilt`
    /// holds even for out-of-range pointer values.
    pub fn tilt(&self, pointer: PointerNormalized) -> Tilt {
        Tilt {
            pitch: ((pointer.y - 0.5) * self.sensitivity).clamp(-self.max_tilt, self.max_tilt),
            yaw: ((pointer.x - 0.5) * self.sensitivity).clamp(-self.max_tilt, self.max_tilt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_pointer_gives_zero_tilt() {
        let camera = TiltCamera::default();
        let tilt = camera.tilt(PointerNormalized::default());
        assert_eq!(tilt, Tilt::default());
    }

    #[test]
    fn right_edge_reaches_max_yaw() {
        let camera = TiltCamera::default();
        let tilt = camera.tilt(PointerNormalized { x: 1.0, y: 0.5 });
        assert_eq!(tilt.yaw, camera.max_tilt);
        assert_eq!(tilt.pitch, 0.0);
    }

    #[test]
    fn tilt_bounded_over_unit_square() {
        let camera = TiltCamera::default();
        for xi in 0..=10 {
            for yi in 0..=10 {
                let pointer = PointerNormalized {
                    x: xi as f32 / 10.0,
                    y: yi as f32 / 10.0,
                };
                let tilt = camera.tilt(pointer);
                assert!(tilt.pitch.abs() <= camera.max_tilt);
                assert!(tilt.yaw.abs() <= camera.max_tilt);
            }
        }
    }

    #[test]
    fn tilt_bounded_for_out_of_range_pointer() {
        // Fast motion near the window edge can report positions outside the
        // unit square before the next resize/update lands.
        let camera = TiltCamera::default();
        let tilt = camera.tilt(PointerNormalized { x: 3.0, y: -2.0 });
        assert_eq!(tilt.yaw, camera.max_tilt);
        assert_eq!(tilt.pitch, -camera.max_tilt);
    }
}
