/// Monotonic animation phase, advanced by a fixed increment once per frame.
///
/// Unbounded growth is fine: the consumers are trig functions, which are
/// naturally periodic. The accumulator is `f64` so the fixed step keeps
/// registering over arbitrarily long runtimes; an `f32` accumulator stops
/// absorbing a 0.006 step near 2^17, roughly a hundred hours at 60 fps. The
/// phase is created at zero on mount and never rewound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePhase {
    value: f64,
    increment: f64,
}

impl Default for TimePhase {
    fn default() -> Self {
        Self {
            value: 0.0,
            increment: 0.006,
        }
    }
}

impl TimePhase {
    pub fn with_increment(increment: f64) -> Self {
        Self {
            value: 0.0,
            increment,
        }
    }

    /// Advance one frame and return the new phase.
    pub fn advance(&mut self) -> f64 {
        self.value += self.increment;
        self.value
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }
}
