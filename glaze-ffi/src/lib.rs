//! C ABI wrapper for the Glaze curve kernels.
//!
//! Exposes a small set of functions to create/destroy a configured curve,
//! evaluate it, fill preview buffers, and tweak its ports, plus direct
//! exports of the hottest kernels for hosts that want the bare functions.
//!
//! ABI notes
//! - All functions are `extern "C"` and `#[no_mangle]`.
//! - Opaque handle type: `GlazeCurve` (heap-allocated; you own/delete it).
//! - Setters that do not apply to the handle's kind are no-ops.
//!
//! Threading
//! - The handle is NOT thread-safe; share it across threads only with your
//!   own synchronization. The direct kernel exports are pure and reentrant.

use glaze_nodes::op::{CurveOp, Preview};
use glaze_nodes::{Contrast, SmoothStep, SmootherStep, Step, Terrace};

/// Curve kinds accepted by [`glaze_curve_create`].
pub const GLAZE_OP_SMOOTHERSTEP: u32 = 0;
pub const GLAZE_OP_SMOOTHSTEP: u32 = 1;
pub const GLAZE_OP_STEP: u32 = 2;
pub const GLAZE_OP_CONTRAST: u32 = 3;
pub const GLAZE_OP_TERRACE: u32 = 4;

/// Runtime-selected operator, one variant per exported kind.
#[derive(Copy, Clone, Debug)]
enum OpSlot {
    SmootherStep(SmootherStep),
    SmoothStep(SmoothStep),
    Step(Step),
    Contrast(Contrast),
    Terrace(Terrace),
}

impl CurveOp for OpSlot {
    #[inline]
    fn eval(&self, t: f32) -> f32 {
        match self {
            OpSlot::SmootherStep(n) => n.eval(t),
            OpSlot::SmoothStep(n) => n.eval(t),
            OpSlot::Step(n) => n.eval(t),
            OpSlot::Contrast(n) => n.eval(t),
            OpSlot::Terrace(n) => n.eval(t),
        }
    }
}

/// Opaque curve wrapper we hand to C.
///
/// Wraps a preview sweeper so the host gets the same domain handling the
/// editor uses; call `glaze_curve_set_domain` when the visible range changes.
#[repr(C)]
pub struct GlazeCurve {
    inner: Preview<OpSlot>,
}

// --- Creation / destruction -------------------------------------------------------

/// Create a new curve of the given kind with editor-default ports.
/// Returns a non-null pointer on success, or null for an unknown kind.
#[no_mangle]
pub extern "C" fn glaze_curve_create(kind: u32) -> *mut GlazeCurve {
    let slot = match kind {
        GLAZE_OP_SMOOTHERSTEP => OpSlot::SmootherStep(SmootherStep::default()),
        GLAZE_OP_SMOOTHSTEP => OpSlot::SmoothStep(SmoothStep::default()),
        GLAZE_OP_STEP => OpSlot::Step(Step::default()),
        GLAZE_OP_CONTRAST => OpSlot::Contrast(Contrast::default()),
        GLAZE_OP_TERRACE => OpSlot::Terrace(Terrace::default()),
        _ => return std::ptr::null_mut(),
    };
    Box::into_raw(Box::new(GlazeCurve { inner: Preview::new(slot) }))
}

/// Destroy a curve previously returned by `glaze_curve_create`.
#[no_mangle]
pub extern "C" fn glaze_curve_destroy(curve: *mut GlazeCurve) {
    if !curve.is_null() {
        unsafe { drop(Box::from_raw(curve)); }
    }
}

// --- Port setters -----------------------------------------------------------------

/// Set the threshold pair. Applies to smoother-step and smooth-step; for the
/// hard step, `low` is the edge and `high` is ignored.
#[no_mangle]
pub extern "C" fn glaze_curve_set_thresholds(curve: *mut GlazeCurve, low: f32, high: f32) {
    if curve.is_null() { return; }
    let c = unsafe { &mut *curve };
    match c.inner.op_mut() {
        OpSlot::SmootherStep(n) => n.set_thresholds(low, high),
        OpSlot::SmoothStep(n) => n.set_thresholds(low, high),
        OpSlot::Step(n) => n.set_edge(low),
        _ => {}
    }
}

/// Set the contrast preset's pivot and strength. No-op for other kinds.
#[no_mangle]
pub extern "C" fn glaze_curve_set_contrast(curve: *mut GlazeCurve, pivot: f32, strength: f32) {
    if curve.is_null() { return; }
    let c = unsafe { &mut *curve };
    if let OpSlot::Contrast(n) = c.inner.op_mut() {
        n.set_pivot(pivot);
        n.set_strength(strength);
    }
}

/// Set the terrace preset's band count and riser smoothness. No-op for other kinds.
#[no_mangle]
pub extern "C" fn glaze_curve_set_terrace(curve: *mut GlazeCurve, steps: u32, smoothness: f32) {
    if curve.is_null() { return; }
    let c = unsafe { &mut *curve };
    if let OpSlot::Terrace(n) = c.inner.op_mut() {
        n.set_steps(steps);
        n.set_smoothness(smoothness);
    }
}

/// Set the sweep domain used by `glaze_curve_fill`.
#[no_mangle]
pub extern "C" fn glaze_curve_set_domain(curve: *mut GlazeCurve, from: f32, to: f32) {
    if curve.is_null() { return; }
    let c = unsafe { &mut *curve };
    c.inner.set_domain(from, to);
}

// --- Evaluation -------------------------------------------------------------------

/// Evaluate the curve at `t`. Returns 0.0 on a null handle.
#[no_mangle]
pub extern "C" fn glaze_curve_eval(curve: *const GlazeCurve, t: f32) -> f32 {
    if curve.is_null() { return 0.0; }
    let c = unsafe { &*curve };
    c.inner.op().eval(t)
}

/// Fill `out` with `len` evenly spaced evaluations across the sweep domain
/// (endpoints included). Returns the number of values written (0 on error).
#[no_mangle]
pub extern "C" fn glaze_curve_fill(curve: *const GlazeCurve, out: *mut f32, len: u32) -> u32 {
    if curve.is_null() || out.is_null() || len == 0 {
        return 0;
    }
    let c = unsafe { &*curve };
    let out = unsafe { std::slice::from_raw_parts_mut(out, len as usize) };
    c.inner.fill(out);
    len
}

// --- Direct kernel exports --------------------------------------------------------

/// Quintic smoother-step kernel, exactly as the shader emitter reproduces it.
#[no_mangle]
pub extern "C" fn glaze_smootherstep(low: f32, high: f32, t: f32) -> f32 {
    glaze_core::remap::smootherstep(low, high, t)
}

/// Cubic smooth-step kernel.
#[no_mangle]
pub extern "C" fn glaze_smoothstep(low: f32, high: f32, t: f32) -> f32 {
    glaze_core::remap::smoothstep(low, high, t)
}

/// Unclamped linear blend.
#[no_mangle]
pub extern "C" fn glaze_lerp(a: f32, b: f32, t: f32) -> f32 {
    glaze_core::remap::lerp(a, b, t)
}
