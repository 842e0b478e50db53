//! Operator node definitions.
//!
//! One small struct per node, holding the node's constant input-port values.
//! Everything here is `Copy`, cheap to move, and evaluates through the pure
//! kernels in `glaze-core`; the structs exist so the editor (and the FFI
//! layer) can configure ports once and sweep previews without re-threading
//! every scalar through each call.
//!
//! Contents:
//! - `SmootherStep`, `SmoothStep`, `Step` : threshold remaps
//! - `Remap`                              : range-to-range remap
//! - `Ease`                               : the easing curve family
//! - `BiasGain`, `Logistic`, `Parabola`   : tonal shaping
//!
//! Notes:
//! - Defaults match what the editor drops onto the canvas for a fresh node.
//! - Port setters take values as-is unless stated; kernels are total anyway.

use crate::op::CurveOp;
use glaze_core::{remap, shaping};

// The Ease node's selector is part of this crate's surface too.
pub use glaze_core::easing::EaseKind;

/// Quintic smoother-step node. Ports: `low`, `high`, plus the swept `t`.
///
/// This is the reference node of the remap family; the kernel it wraps is
/// [`remap::smootherstep`] and the generated shader code mirrors it exactly.
#[derive(Copy, Clone, Debug)]
pub struct SmootherStep {
    low: f32,
    high: f32,
}

impl SmootherStep {
    #[inline] pub fn new(low: f32, high: f32) -> Self { Self { low, high } }
    #[inline] pub fn set_low(&mut self, low: f32) { self.low = low; }
    #[inline] pub fn set_high(&mut self, high: f32) { self.high = high; }
    #[inline] pub fn set_thresholds(&mut self, low: f32, high: f32) { self.low = low; self.high = high; }
    #[inline] pub fn thresholds(&self) -> (f32, f32) { (self.low, self.high) }
}

impl Default for SmootherStep {
    #[inline] fn default() -> Self { Self { low: 0.0, high: 1.0 } }
}

impl CurveOp for SmootherStep {
    #[inline]
    fn eval(&self, t: f32) -> f32 {
        remap::smootherstep(self.low, self.high, t)
    }
}

/// Cubic smooth-step node. Same ports as [`SmootherStep`].
#[derive(Copy, Clone, Debug)]
pub struct SmoothStep {
    low: f32,
    high: f32,
}

impl SmoothStep {
    #[inline] pub fn new(low: f32, high: f32) -> Self { Self { low, high } }
    #[inline] pub fn set_thresholds(&mut self, low: f32, high: f32) { self.low = low; self.high = high; }
}

impl Default for SmoothStep {
    #[inline] fn default() -> Self { Self { low: 0.0, high: 1.0 } }
}

impl CurveOp for SmoothStep {
    #[inline]
    fn eval(&self, t: f32) -> f32 {
        remap::smoothstep(self.low, self.high, t)
    }
}

/// Hard step node. Port: `edge`.
#[derive(Copy, Clone, Debug)]
pub struct Step {
    edge: f32,
}

impl Step {
    #[inline] pub fn new(edge: f32) -> Self { Self { edge } }
    #[inline] pub fn set_edge(&mut self, edge: f32) { self.edge = edge; }
}

impl Default for Step {
    #[inline] fn default() -> Self { Self { edge: 0.5 } }
}

impl CurveOp for Step {
    #[inline]
    fn eval(&self, t: f32) -> f32 {
        remap::step(self.edge, t)
    }
}

/// Range-to-range remap node. Ports: input range, output range, `clamp`.
#[derive(Copy, Clone, Debug)]
pub struct Remap {
    in_lo: f32,
    in_hi: f32,
    out_lo: f32,
    out_hi: f32,
    clamp: bool,
}

impl Remap {
    #[inline]
    pub fn new(in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> Self {
        Self { in_lo, in_hi, out_lo, out_hi, clamp: false }
    }
    #[inline] pub fn set_input_range(&mut self, lo: f32, hi: f32) { self.in_lo = lo; self.in_hi = hi; }
    #[inline] pub fn set_output_range(&mut self, lo: f32, hi: f32) { self.out_lo = lo; self.out_hi = hi; }
    #[inline] pub fn set_clamp(&mut self, clamp: bool) { self.clamp = clamp; }
}

impl Default for Remap {
    #[inline]
    fn default() -> Self {
        Self { in_lo: 0.0, in_hi: 1.0, out_lo: 0.0, out_hi: 1.0, clamp: false }
    }
}

impl CurveOp for Remap {
    #[inline]
    fn eval(&self, t: f32) -> f32 {
        if self.clamp {
            remap::remap_clamped(t, self.in_lo, self.in_hi, self.out_lo, self.out_hi)
        } else {
            remap::remap(t, self.in_lo, self.in_hi, self.out_lo, self.out_hi)
        }
    }
}

/// Easing node. Port: the curve selector.
#[derive(Copy, Clone, Debug)]
pub struct Ease {
    kind: EaseKind,
}

impl Ease {
    #[inline] pub fn new(kind: EaseKind) -> Self { Self { kind } }
    #[inline] pub fn set_kind(&mut self, kind: EaseKind) { self.kind = kind; }
    #[inline] pub fn kind(&self) -> EaseKind { self.kind }

    // Convenience constructors, mirroring the editor's node-search shortcuts.
    #[inline] pub fn sine_in_out() -> Self { Self::new(EaseKind::SineInOut) }
    #[inline] pub fn cubic_in_out() -> Self { Self::new(EaseKind::CubicInOut) }
    #[inline] pub fn expo_in_out() -> Self { Self::new(EaseKind::ExpoInOut) }
}

impl Default for Ease {
    #[inline] fn default() -> Self { Self { kind: EaseKind::SineInOut } }
}

impl CurveOp for Ease {
    #[inline]
    fn eval(&self, t: f32) -> f32 {
        self.kind.apply(t)
    }
}

/// Bias-then-gain tonal node. Ports: `bias`, `gain`; 0.5/0.5 is the identity.
#[derive(Copy, Clone, Debug)]
pub struct BiasGain {
    bias: f32,
    gain: f32,
}

impl BiasGain {
    #[inline] pub fn new(bias: f32, gain: f32) -> Self { Self { bias, gain } }
    #[inline] pub fn set_bias(&mut self, b: f32) { self.bias = b; }
    #[inline] pub fn set_gain(&mut self, g: f32) { self.gain = g; }
}

impl Default for BiasGain {
    #[inline] fn default() -> Self { Self { bias: 0.5, gain: 0.5 } }
}

impl CurveOp for BiasGain {
    #[inline]
    fn eval(&self, t: f32) -> f32 {
        shaping::gain(shaping::bias(t, self.bias), self.gain)
    }
}

/// Logistic sigmoid node. Port: `sharpness`. The swept value is recentered so
/// the inflection sits at `t = 0.5`, which is where artists expect it.
#[derive(Copy, Clone, Debug)]
pub struct Logistic {
    sharpness: f32,
}

impl Logistic {
    #[inline] pub fn new(sharpness: f32) -> Self { Self { sharpness } }
    #[inline] pub fn set_sharpness(&mut self, k: f32) { self.sharpness = k; }
}

impl Default for Logistic {
    #[inline] fn default() -> Self { Self { sharpness: 8.0 } }
}

impl CurveOp for Logistic {
    #[inline]
    fn eval(&self, t: f32) -> f32 {
        shaping::logistic(t - 0.5, self.sharpness)
    }
}

/// Power parabola node. Port: `k` (shoulder shape).
#[derive(Copy, Clone, Debug)]
pub struct Parabola {
    k: f32,
}

impl Parabola {
    #[inline] pub fn new(k: f32) -> Self { Self { k } }
    #[inline] pub fn set_k(&mut self, k: f32) { self.k = k; }
}

impl Default for Parabola {
    #[inline] fn default() -> Self { Self { k: 1.0 } }
}

impl CurveOp for Parabola {
    #[inline]
    fn eval(&self, t: f32) -> f32 {
        shaping::parabola(t, self.k)
    }
}

// ------------------------------------ Tests --------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use glaze_core::easing;

    #[test]
    fn smootherstep_node_matches_kernel() {
        let node = SmootherStep::new(2.0, 4.0);
        for i in 0..=32 {
            let t = 1.5 + i as f32 * 0.1;
            assert_eq!(node.eval(t), remap::smootherstep(2.0, 4.0, t));
        }
        assert_eq!(SmootherStep::default().eval(0.5), 0.5);
    }

    #[test]
    fn threshold_setters_apply() {
        let mut node = SmootherStep::default();
        node.set_thresholds(0.25, 0.75);
        assert_eq!(node.thresholds(), (0.25, 0.75));
        assert_eq!(node.eval(0.25), 0.0);
        assert_eq!(node.eval(0.75), 1.0);
    }

    #[test]
    fn remap_node_clamp_toggle() {
        let mut node = Remap::new(0.0, 1.0, 0.0, 10.0);
        assert_eq!(node.eval(1.5), 15.0);
        node.set_clamp(true);
        assert_eq!(node.eval(1.5), 10.0);
    }

    #[test]
    fn ease_node_dispatches_kind() {
        let node = Ease::cubic_in_out();
        assert_eq!(node.eval(0.25), easing::cubic_in_out(0.25));
    }

    #[test]
    fn bias_gain_default_is_identity() {
        let node = BiasGain::default();
        for i in 0..=16 {
            let t = i as f32 / 16.0;
            assert!((node.eval(t) - t).abs() < 1e-5, "t={t}");
        }
    }

    #[test]
    fn logistic_node_is_centered() {
        let node = Logistic::default();
        assert!((node.eval(0.5) - 0.5).abs() < 1e-6);
        assert!(node.eval(0.0) < 0.05);
        assert!(node.eval(1.0) > 0.95);
    }
}
