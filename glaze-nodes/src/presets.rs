//! Preset curves composed from the primitive kernels.
//!
//! Presets are what the editor's "curve preset" palette drops onto the
//! canvas: a single [`CurveOp`](crate::op::CurveOp) wired internally from the
//! core kernels, with a few artist-facing parameters. Keep presets
//! allocation-free and cheap per evaluation; thumbnail sweeps hit them hard.

use crate::op::CurveOp;
use glaze_core::remap::{lerp, saturate, smootherstep};

/// Contrast S-curve around a movable pivot.
///
/// - `pivot`    : the input value that stays fixed (output == pivot there),
/// - `strength` : 0 is the identity, 1 is the full smoother-step S-curve.
///
/// The swept value is normalized piecewise around the pivot, pushed through
/// the quintic smoother-step, and mapped back, so the rails and the pivot are
/// all fixed points at every strength.
#[derive(Copy, Clone, Debug)]
pub struct Contrast {
    pivot: f32,
    strength: f32,
}

impl Contrast {
    pub fn new(pivot: f32, strength: f32) -> Self {
        let mut c = Self { pivot: 0.5, strength: 0.0 };
        c.set_pivot(pivot);
        c.set_strength(strength);
        c
    }

    /// Pivot is kept away from the rails so the piecewise normalization
    /// stays finite.
    #[inline] pub fn set_pivot(&mut self, p: f32) { self.pivot = p.clamp(0.05, 0.95); }
    #[inline] pub fn set_strength(&mut self, s: f32) { self.strength = s.clamp(0.0, 1.0); }
    #[inline] pub fn pivot(&self) -> f32 { self.pivot }
    #[inline] pub fn strength(&self) -> f32 { self.strength }
}

impl Default for Contrast {
    fn default() -> Self {
        Self { pivot: 0.5, strength: 0.75 }
    }
}

impl CurveOp for Contrast {
    #[inline]
    fn eval(&self, t: f32) -> f32 {
        let t = saturate(t);
        let p = self.pivot;

        // Normalize around the pivot: [0,p] -> [0,0.5], [p,1] -> [0.5,1].
        let u = if t <= p {
            0.5 * (t / p)
        } else {
            0.5 + 0.5 * ((t - p) / (1.0 - p))
        };

        let v = smootherstep(0.0, 1.0, u);

        // Map back through the inverse of the same piecewise warp.
        let curved = if v <= 0.5 {
            2.0 * v * p
        } else {
            p + (2.0 * v - 1.0) * (1.0 - p)
        };

        lerp(t, curved, self.strength)
    }
}

/// Terraced quantization with smoothed risers.
///
/// Splits `[0, 1]` into `steps` equal bands; within each band the output
/// holds the band level and rises to the next with a smoother-step ramp over
/// the last `smoothness` fraction of the band. `smoothness = 1` degenerates
/// to a per-band smooth ramp, `smoothness -> 0` to hard stairs.
#[derive(Copy, Clone, Debug)]
pub struct Terrace {
    steps: u32,
    smoothness: f32,
}

impl Terrace {
    pub fn new(steps: u32, smoothness: f32) -> Self {
        let mut t = Self { steps: 4, smoothness: 0.5 };
        t.set_steps(steps);
        t.set_smoothness(smoothness);
        t
    }

    #[inline] pub fn set_steps(&mut self, n: u32) { self.steps = n.max(1); }
    #[inline] pub fn set_smoothness(&mut self, s: f32) { self.smoothness = s.clamp(1e-3, 1.0); }
    #[inline] pub fn steps(&self) -> u32 { self.steps }
}

impl Default for Terrace {
    fn default() -> Self {
        Self { steps: 4, smoothness: 0.5 }
    }
}

impl CurveOp for Terrace {
    #[inline]
    fn eval(&self, t: f32) -> f32 {
        let n = self.steps as f32;
        let scaled = saturate(t) * n;

        // Truncation is floor here; `scaled` is never negative.
        let band = (scaled as u32) as f32;
        let frac = scaled - band;

        let riser = smootherstep(1.0 - self.smoothness, 1.0, frac);
        (band + riser) / n
    }
}

// ------------------------------------ Tests --------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_fixes_rails_and_pivot() {
        let c = Contrast::new(0.3, 1.0);
        assert_eq!(c.eval(0.0), 0.0);
        assert_eq!(c.eval(1.0), 1.0);
        assert!((c.eval(0.3) - 0.3).abs() < 1e-6);
    }

    #[test]
    fn contrast_zero_strength_is_identity() {
        let c = Contrast::new(0.5, 0.0);
        for i in 0..=32 {
            let t = i as f32 / 32.0;
            assert!((c.eval(t) - t).abs() < 1e-6, "t={t}");
        }
    }

    #[test]
    fn contrast_is_monotone() {
        let c = Contrast::new(0.65, 0.9);
        let mut prev = c.eval(0.0);
        for i in 1..=128 {
            let y = c.eval(i as f32 / 128.0);
            assert!(y + 1e-6 >= prev, "i={i}");
            prev = y;
        }
    }

    #[test]
    fn contrast_deepens_shadows() {
        // Full-strength S-curve pushes values below the pivot down.
        let c = Contrast::new(0.5, 1.0);
        assert!(c.eval(0.2) < 0.2);
        assert!(c.eval(0.8) > 0.8);
    }

    #[test]
    fn terrace_hits_rails() {
        let t = Terrace::new(5, 0.5);
        assert_eq!(t.eval(0.0), 0.0);
        assert_eq!(t.eval(1.0), 1.0);
    }

    #[test]
    fn terrace_is_monotone_and_banded() {
        let tr = Terrace::new(4, 0.25);
        let mut prev = tr.eval(0.0);
        for i in 1..=256 {
            let y = tr.eval(i as f32 / 256.0);
            assert!(y + 1e-6 >= prev, "i={i}");
            prev = y;
        }
        // Early in a band the output sits on the band level.
        assert!((tr.eval(0.3) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn terrace_single_smooth_band_is_smootherstep() {
        let tr = Terrace::new(1, 1.0);
        for i in 0..=32 {
            let t = i as f32 / 32.0;
            assert_eq!(tr.eval(t), glaze_core::remap::smootherstep(0.0, 1.0, t));
        }
    }
}
