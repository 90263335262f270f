//! Easing curves for interpolated grid movement.

/// Easing function mapping a clamped progress value in `[0, 1]` to an
/// interpolation factor.
#[derive(Debug, Clone, Copy)]
pub struct Easing(pub fn(f32) -> f32);

impl Easing {
    pub const LINEAR: Self = Self(linear);
    pub const SMOOTHSTEP: Self = Self(smoothstep);
    pub const EASE_IN_QUAD: Self = Self(ease_in_quad);
    pub const EASE_OUT_QUAD: Self = Self(ease_out_quad);

    /// Apply the curve to `t`, clamping it to `[0, 1]` first.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        (self.0)(t.clamp(0.0, 1.0))
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::LINEAR
    }
}

pub fn linear(t: f32) -> f32 {
    t
}

pub fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

pub fn ease_in_quad(t: f32) -> f32 {
    t * t
}

pub fn ease_out_quad(t: f32) -> f32 {
    t * (2.0 - t)
}
