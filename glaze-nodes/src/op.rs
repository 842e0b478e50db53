//! Operator evaluation core.
//!
//! This module defines the minimal `CurveOp` trait and a lightweight
//! `Preview<O>` wrapper that owns a configured operator, tracks the sample
//! domain, and fills thumbnail buffers with evenly spaced evaluations, with
//! zero heap work per sweep.
//!
//! Design goals
//! - No dynamic allocations while sweeping
//! - Domain changes handled lazily (the editor re-pans constantly), cheap
//! - Generic over the operator type, so ops can be swapped without trait objects

/// A scalar operator node: one `f32` in, one `f32` out.
///
/// `eval` must be pure; every call is an independent evaluation with no state
/// retained between invocations. That is what lets the compiler inline the
/// same kernel into generated shader source.
pub trait CurveOp {
    /// Evaluate the operator at `t`.
    fn eval(&self, t: f32) -> f32;
}

// Hosts that pick an op at runtime sweep through a boxed trait object.
impl<O: CurveOp + ?Sized> CurveOp for Box<O> {
    #[inline]
    fn eval(&self, t: f32) -> f32 {
        (**self).eval(t)
    }
}

/// Lightweight preview sweeper that owns an operator.
///
/// The editor calls `fill` with the thumbnail's sample buffer whenever the
/// node's inputs or the visible domain change. The default domain is the
/// unit interval, which is what most remap-family nodes are authored against.
pub struct Preview<O: CurveOp> {
    from: f32,
    to: f32,
    op: O,
}

impl<O: CurveOp> Preview<O> {
    /// Construct with an already-configured operator and the `[0, 1]` domain.
    #[inline]
    pub fn new(op: O) -> Self {
        Self { from: 0.0, to: 1.0, op }
    }

    /// Set the visible sample domain. `from > to` sweeps right-to-left; the
    /// kernels do not care.
    #[inline]
    pub fn set_domain(&mut self, from: f32, to: f32) {
        self.from = from;
        self.to = to;
    }

    /// Return the current `(from, to)` domain.
    #[inline]
    pub fn domain(&self) -> (f32, f32) {
        (self.from, self.to)
    }

    /// Sample position `i` of `n`: evenly spaced, endpoints included.
    #[inline]
    pub fn position(&self, i: usize, n: usize) -> f32 {
        if n <= 1 {
            self.from
        } else {
            self.from + (self.to - self.from) * (i as f32 / (n - 1) as f32)
        }
    }

    /// Evaluate sample `i` of `n`.
    #[inline]
    pub fn sample(&self, i: usize, n: usize) -> f32 {
        self.op.eval(self.position(i, n))
    }

    /// Fill `out` with one evaluation per slot across the domain. An empty
    /// buffer is a no-op; a single slot gets the domain start.
    #[inline]
    pub fn fill(&self, out: &mut [f32]) {
        let n = out.len();
        for (i, y) in out.iter_mut().enumerate() {
            *y = self.sample(i, n);
        }
    }

    /// Replace the inner operator, keeping the domain.
    #[inline]
    pub fn swap_op(&mut self, new_op: O) {
        self.op = new_op;
    }

    /// Get a mutable reference to the inner operator for live port tweaks.
    #[inline]
    pub fn op_mut(&mut self) -> &mut O {
        &mut self.op
    }

    /// Borrow the inner operator.
    #[inline]
    pub fn op(&self) -> &O {
        &self.op
    }
}

// ------------------------------------ Tests --------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubler;
    impl CurveOp for Doubler {
        fn eval(&self, t: f32) -> f32 {
            2.0 * t
        }
    }

    #[test]
    fn fill_spans_the_domain() {
        let mut pv = Preview::new(Doubler);
        pv.set_domain(1.0, 3.0);
        let mut buf = [0.0_f32; 5];
        pv.fill(&mut buf);
        assert_eq!(buf, [2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn degenerate_buffers() {
        let pv = Preview::new(Doubler);
        let mut empty: [f32; 0] = [];
        pv.fill(&mut empty);
        let mut one = [9.0_f32];
        pv.fill(&mut one);
        assert_eq!(one, [0.0]);
    }

    #[test]
    fn swap_keeps_domain() {
        let mut pv = Preview::new(Doubler);
        pv.set_domain(-1.0, 1.0);
        pv.swap_op(Doubler);
        assert_eq!(pv.domain(), (-1.0, 1.0));
    }
}
