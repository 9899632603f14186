/// Periodic relief generator for the undulating lattice.
///
/// The relief is a product of two trig terms, one per axis, each phase-shifted
/// by the time parameter. There is no hidden state and no randomness: for a
/// fixed `(x, y, t)` the output is reproducible exactly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveField {
    /// Peak relief magnitude in world units.
    pub amplitude: f32,
    /// Spatial frequency applied to both axes.
    pub frequency: f32,
    /// Time multiplier for the y-axis term, desynchronizing the two waves.
    pub cross_rate: f32,
    /// Multiplier turning relief into the pseudo-depth fed to the projector.
    pub depth_scale: f32,
}

impl Default for WaveField {
    fn default() -> Self {
        Self {
            amplitude: 30.0,
            frequency: 0.01,
            cross_rate: 0.7,
            depth_scale: 3.0,
        }
    }
}

impl WaveField {
    /// Relief height at `(x, y)` for time phase `t`.
    pub fn sample(&self, x: f32, y: f32, t: f32) -> f32 {
        (x * self.frequency + t).sin() * (y * self.frequency + t * self.cross_rate).cos()
            * self.amplitude
    }

    /// Relief scaled into the z-coordinate handed to the projector.
    ///
    /// Bounded by `amplitude * depth_scale`, which keeps the projection
    /// denominator well away from zero for any sane focal length.
    pub fn depth(&self, x: f32, y: f32, t: f32) -> f32 {
        self.sample(x, y, t) * self.depth_scale
    }

    /// Largest absolute depth this field can produce.
    pub fn max_depth(&self) -> f32 {
        (self.amplitude * self.depth_scale).abs()
    }
}
