// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Complex numbers over `f64`.
//!
//! `Complex` is a plain `Copy` pair of doubles. Arithmetic goes through the
//! usual operator traits; division is the one fallible operator and returns
//! a `Result` instead of producing infinities:
//!
//! ```
//! use cplx::Complex;
//!
//! # fn main() -> Result<(), cplx::ComplexError> {
//! let z = Complex::new(3.0, 4.0);
//! assert_eq!(z.norm(), 5.0);
//! assert_eq!(Complex::I * Complex::I, -Complex::ONE);
//! assert_eq!((Complex::new(4.0, 0.0) / Complex::new(2.0, 0.0))?, Complex::new(2.0, 0.0));
//! assert!((Complex::ONE / Complex::ZERO).is_err());
//! # Ok(())
//! # }
//! ```
//!
//! ## Equality
//!
//! Two values compare equal when both components differ by less than
//! `f64::EPSILON`. This is an absolute tolerance: it is not transitive near
//! the boundary, and `Hash` is only consistent with it for values whose
//! components are exactly equal. Don't use `Complex` as a general-purpose
//! map key.
#![doc(html_root_url = "https://docs.rs/cplx/0.1")]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("cplx requires either the `std` or the `libm` feature");

use core::fmt;
use core::hash::{Hash, Hasher};

use num_traits::Float;

mod error;
mod functions;
mod ops;
mod traits;

#[cfg(any(test, feature = "quickcheck"))]
mod quickcheck_impls;

pub use crate::error::{ComplexError, ErrorKind};

/// A complex number in Cartesian form.
///
/// Values are immutable: every operation builds a new `Complex`. Components
/// may be NaN or infinite; nothing rejects them, and NaN propagates through
/// every function.
#[derive(Copy, Clone, Debug, Default)]
#[repr(C)]
pub struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    /// `0 + 0i`
    pub const ZERO: Complex = Complex::new(0.0, 0.0);
    /// `1 + 0i`
    pub const ONE: Complex = Complex::new(1.0, 0.0);
    /// The imaginary unit, `0 + 1i`.
    pub const I: Complex = Complex::new(0.0, 1.0);
    /// Both components NaN.
    pub const NAN: Complex = Complex::new(f64::NAN, f64::NAN);

    /// Euler's number.
    pub const E: f64 = core::f64::consts::E;
    /// Archimedes' constant.
    pub const PI: f64 = core::f64::consts::PI;

    /// Create a new Complex
    #[inline]
    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// Create a Complex lying on the real axis.
    #[inline]
    pub const fn from_real(re: f64) -> Complex {
        Complex { re, im: 0.0 }
    }

    /// Real part
    #[inline]
    pub const fn re(&self) -> f64 {
        self.re
    }

    /// Imaginary part
    #[inline]
    pub const fn im(&self) -> f64 {
        self.im
    }

    /// Returns the square of the norm, i.e. `re^2 + im^2`.
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// Calculate the magnitude `|self|`.
    #[inline]
    pub fn norm(&self) -> f64 {
        Float::hypot(self.re, self.im)
    }

    /// Calculate the principal Arg of self, in `(-π, π]`.
    #[inline]
    pub fn arg(&self) -> f64 {
        Float::atan2(self.im, self.re)
    }

    /// Convert to polar form (r, theta), such that `self = r * exp(i * theta)`
    #[inline]
    pub fn to_polar(&self) -> (f64, f64) {
        (self.norm(), self.arg())
    }

    /// Convert a polar representation into a complex number.
    #[inline]
    pub fn from_polar(r: f64, theta: f64) -> Complex {
        Complex::new(r * Float::cos(theta), r * Float::sin(theta))
    }

    /// Multiplies `self` by the scalar `t`.
    #[inline]
    pub fn scale(&self, t: f64) -> Complex {
        Complex::new(self.re * t, self.im * t)
    }

    /// Divides `self` by the scalar `t`, without any zero check.
    #[inline]
    pub fn unscale(&self, t: f64) -> Complex {
        Complex::new(self.re / t, self.im / t)
    }

    /// Checks if either component is NaN
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// Checks if the given complex number is infinite
    #[inline]
    pub fn is_infinite(self) -> bool {
        !self.is_nan() && (self.re.is_infinite() || self.im.is_infinite())
    }

    /// Checks if the given complex number is finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

#[inline]
fn within_epsilon(d: f64) -> bool {
    -f64::EPSILON < d && d < f64::EPSILON
}

/// Component-wise comparison with an absolute tolerance of `f64::EPSILON`.
///
/// Infinite and NaN components never compare equal, not even to themselves.
impl PartialEq for Complex {
    #[inline]
    fn eq(&self, other: &Complex) -> bool {
        within_epsilon(self.re - other.re) && within_epsilon(self.im - other.im)
    }
}

// `0.0` and `-0.0` compare equal, so they must hash alike. Values that are
// only equal within tolerance are not covered.
fn canonical_bits(x: f64) -> u64 {
    if x == 0.0 {
        0
    } else if x.is_nan() {
        f64::NAN.to_bits()
    } else {
        x.to_bits()
    }
}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.re).hash(state);
        canonical_bits(self.im).hash(state);
    }
}

macro_rules! write_complex {
    ($f:ident, $t:expr, $re:expr, $im:expr) => {{
        if let Some(prec) = $f.precision() {
            write!($f, concat!("({0:.1$", $t, "}, {2:.1$", $t, "})"), $re, prec, $im)
        } else {
            write!($f, concat!("({:", $t, "}, {:", $t, "})"), $re, $im)
        }
    }};
}

/* string conversions */
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_complex!(f, "", self.re, self.im)
    }
}

impl fmt::LowerExp for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_complex!(f, "e", self.re, self.im)
    }
}

impl fmt::UpperExp for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_complex!(f, "E", self.re, self.im)
    }
}

#[cfg(test)]
fn hash<T: Hash>(x: &T) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    let mut hasher = DefaultHasher::new();
    x.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
pub(crate) mod test {
    #![allow(non_upper_case_globals)]

    use super::Complex;
    use std::f64::consts;

    pub const _0_0i: Complex = Complex::new(0.0, 0.0);
    pub const _1_0i: Complex = Complex::new(1.0, 0.0);
    pub const _1_1i: Complex = Complex::new(1.0, 1.0);
    pub const _0_1i: Complex = Complex::new(0.0, 1.0);
    pub const _neg1_1i: Complex = Complex::new(-1.0, 1.0);
    pub const _05_05i: Complex = Complex::new(0.5, 0.5);
    pub const all_consts: [Complex; 5] = [_0_0i, _1_0i, _1_1i, _neg1_1i, _05_05i];

    pub fn close(a: Complex, b: Complex) -> bool {
        close_to_tol(a, b, 1e-10)
    }

    pub fn close_to_tol(a: Complex, b: Complex, tol: f64) -> bool {
        // returns true if a and b are reasonably close
        (a == b) || (a - b).norm() < tol
    }

    #[test]
    fn test_consts() {
        // check our constants are what Complex::new creates
        fn test(c: Complex, r: f64, i: f64) {
            assert_eq!(c, Complex::new(r, i));
        }
        test(_0_0i, 0.0, 0.0);
        test(_1_0i, 1.0, 0.0);
        test(_1_1i, 1.0, 1.0);
        test(_neg1_1i, -1.0, 1.0);
        test(_05_05i, 0.5, 0.5);

        assert_eq!(_0_0i, Complex::ZERO);
        assert_eq!(_1_0i, Complex::ONE);
        assert_eq!(_0_1i, Complex::I);
        assert!(Complex::NAN.is_nan());
        assert_eq!(Complex::E, consts::E);
        assert_eq!(Complex::PI, consts::PI);
    }

    #[test]
    fn test_accessors() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.re(), 3.0);
        assert_eq!(c.im(), 4.0);
        assert_eq!(Complex::from_real(2.5), Complex::new(2.5, 0.0));
        assert_eq!(Complex::default(), _0_0i);
    }

    #[test]
    fn test_norm() {
        fn test(c: Complex, ns: f64) {
            assert_eq!(c.norm_sqr(), ns);
            assert!((c.norm() - ns.sqrt()).abs() < 1e-15);
        }
        test(_0_0i, 0.0);
        test(_1_0i, 1.0);
        test(_1_1i, 2.0);
        test(_neg1_1i, 2.0);
        test(_05_05i, 0.5);
        assert_eq!(Complex::new(3.0, 4.0).norm(), 5.0);
        assert_eq!(Complex::I.norm(), 1.0);
    }

    #[test]
    fn test_arg() {
        fn test(c: Complex, arg: f64) {
            assert!((c.arg() - arg).abs() < 1.0e-6)
        }
        test(_1_0i, 0.0);
        test(_1_1i, 0.25 * consts::PI);
        test(_neg1_1i, 0.75 * consts::PI);
        test(_05_05i, 0.25 * consts::PI);
        test(Complex::new(3.0, 4.0), 4f64.atan2(3.0));
        assert!((Complex::new(3.0, 4.0).arg() - 0.9273).abs() < 1e-4);
        // the negative real axis belongs to the upper half
        assert_eq!(Complex::new(-1.0, 0.0).arg(), consts::PI);
    }

    #[test]
    fn test_polar_conv() {
        fn test(c: Complex) {
            let (r, theta) = c.to_polar();
            assert!((c - Complex::from_polar(r, theta)).norm() < 1e-6);
        }
        for &c in all_consts.iter() {
            test(c);
        }
    }

    #[test]
    fn test_scale_unscale() {
        assert_eq!(_05_05i.scale(2.0), _1_1i);
        assert_eq!(_1_1i.unscale(2.0), _05_05i);
        for &c in all_consts.iter() {
            assert_eq!(c.scale(2.0).unscale(2.0), c);
        }
    }

    #[test]
    fn test_tolerance_eq() {
        let a = Complex::new(1.0, 1.0);
        assert_eq!(a, Complex::new(1.0 + f64::EPSILON / 2.0, 1.0));
        assert!(a != Complex::new(1.0 + 4.0 * f64::EPSILON, 1.0));
        assert!(a != Complex::new(1.0, 1.0 - 4.0 * f64::EPSILON));
        // absolute, not relative
        assert!(Complex::new(1e20, 0.0) != Complex::new(1e20 + 1e5, 0.0));
        // no reflexivity for non-finite values
        assert!(Complex::NAN != Complex::NAN);
        let inf = Complex::new(f64::INFINITY, 0.0);
        assert!(inf != inf);
    }

    #[test]
    fn test_to_string() {
        fn test(c: Complex, s: &str) {
            assert_eq!(c.to_string(), s);
        }
        test(_0_0i, "(0, 0)");
        test(_1_0i, "(1, 0)");
        test(_0_1i, "(0, 1)");
        test(_neg1_1i, "(-1, 1)");
        test(-_neg1_1i, "(1, -1)");
        test(_05_05i, "(0.5, 0.5)");
        test(Complex::NAN, "(NaN, NaN)");
    }

    #[test]
    fn test_string_formatting() {
        let a = Complex::new(1.23456, 123.456);
        assert_eq!(format!("{}", a), "(1.23456, 123.456)");
        assert_eq!(format!("{:.2}", a), "(1.23, 123.46)");
        assert_eq!(format!("{:.2e}", a), "(1.23e0, 1.23e2)");
        assert_eq!(format!("{:E}", Complex::new(1500.0, -0.25)), "(1.5E3, -2.5E-1)");
    }

    #[test]
    fn test_hash() {
        let a = Complex::new(0.0, 0.0);
        let b = Complex::new(1.0, 0.0);
        let c = Complex::new(0.0, 1.0);
        assert!(crate::hash(&a) != crate::hash(&b));
        assert!(crate::hash(&b) != crate::hash(&c));
        assert!(crate::hash(&c) != crate::hash(&a));

        assert_eq!(crate::hash(&Complex::new(2.5, -1.0)), crate::hash(&Complex::new(2.5, -1.0)));
        assert_eq!(crate::hash(&Complex::new(-0.0, 0.0)), crate::hash(&Complex::new(0.0, -0.0)));
        assert_eq!(crate::hash(&Complex::NAN), crate::hash(&Complex::new(f64::NAN, -f64::NAN)));
    }

    #[test]
    fn test_is_nan() {
        assert!(!_1_1i.is_nan());
        assert!(!Complex::ONE.is_nan());
        assert!(Complex::NAN.is_nan());
    }

    #[test]
    fn test_is_nan_special_cases() {
        let a = Complex::new(0f64, f64::NAN);
        let b = Complex::new(f64::NAN, 0f64);
        assert!(a.is_nan());
        assert!(b.is_nan());
    }

    #[test]
    fn test_is_infinite() {
        let a = Complex::new(2f64, f64::INFINITY);
        assert!(a.is_infinite());
        assert!(!a.is_finite());
        assert!(!Complex::NAN.is_infinite());
    }

    #[test]
    fn test_is_finite() {
        assert!(_1_1i.is_finite())
    }
}
