// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Elementary and transcendental functions.
//!
//! Everything here is built from `exp` and `ln` plus the arithmetic
//! operators, and returns the principal value of multi-valued functions.
//! Functions whose formula divides return `Result` and fail exactly when
//! that division would.

use core::f64::consts::LN_10;

use num_traits::Float;

use crate::{Complex, ComplexError};

// -i/2, also 1/(2i)
const NEG_HALF_I: Complex = Complex::new(0.0, -0.5);

impl Complex {
    /// Alias of `norm`: the magnitude `|self|`.
    #[inline]
    pub fn abs(&self) -> f64 {
        self.norm()
    }

    /// Returns the complex conjugate. i.e. `re - i im`
    #[inline]
    pub fn conj(&self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// Returns `1/self`.
    ///
    /// Unlike division this does not check for zero: the reciprocal of a
    /// value at or near the origin has infinite or NaN components.
    #[inline]
    pub fn inv(&self) -> Complex {
        let norm_sqr = self.norm_sqr();
        Complex::new(self.re / norm_sqr, -self.im / norm_sqr)
    }

    /// Computes `e^(self)`, where `e` is the base of the natural logarithm.
    #[inline]
    pub fn exp(&self) -> Complex {
        // formula: e^(a + bi) = e^a (cos(b) + i*sin(b))
        // = from_polar(e^a, b)
        Complex::from_polar(Float::exp(self.re), self.im)
    }

    /// Computes the principal value of natural logarithm of `self`.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 0]`, continuous from above.
    ///
    /// The branch satisfies `-π < arg(ln(z)) ≤ π`. `ln(0)` is `-∞ + 0i`.
    #[inline]
    pub fn ln(&self) -> Complex {
        // formula: ln(z) = ln|z| + i*arg(z), with ln|z| = ln(|z|^2)/2
        Complex::new(Float::ln(self.norm_sqr()) / 2.0, self.arg())
    }

    /// Returns the logarithm of `self` with respect to a real base.
    ///
    /// Fails with `DivideByZero` when `ln(base)` is below `f64::EPSILON` in
    /// magnitude, i.e. for a base of (nearly) one.
    #[inline]
    pub fn log(&self, base: f64) -> Result<Complex, ComplexError> {
        self.ln().checked_div_real(Float::ln(base))
    }

    /// Returns the logarithm of `self` with respect to a complex base.
    ///
    /// Fails with `DivideByZero` when `ln(base)` is (nearly) zero.
    #[inline]
    pub fn log_base(&self, base: Complex) -> Result<Complex, ComplexError> {
        self.ln() / base.ln()
    }

    /// Returns the base 10 logarithm of `self`.
    #[inline]
    pub fn log10(&self) -> Complex {
        self.ln().unscale(LN_10)
    }

    /// Raises `self` to an integer power, through the polar form.
    #[inline]
    pub fn powi(&self, exp: i32) -> Complex {
        let (r, theta) = self.to_polar();
        Complex::from_polar(Float::powi(r, exp), theta * exp as f64)
    }

    /// Raises `self` to a floating point power.
    ///
    /// For fractional exponents this is the principal root only.
    #[inline]
    pub fn powf(&self, exp: f64) -> Complex {
        // formula: x^y = (ρ e^(i θ))^y = ρ^y e^(i θ y)
        // = from_polar(ρ^y, θ y)
        let (r, theta) = self.to_polar();
        Complex::from_polar(Float::powf(r, exp), theta * exp)
    }

    /// Raises `self` to a complex power, `e^(exp * ln(self))`.
    ///
    /// The base zero has no finite logarithm, so `0^z` comes out NaN.
    #[inline]
    pub fn powc(&self, exp: Complex) -> Complex {
        (exp * self.ln()).exp()
    }

    /// Computes the principal value of the square root of `self`.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 0)`, continuous from above.
    ///
    /// The branch satisfies `-π/2 < arg(sqrt(z)) ≤ π/2`.
    #[inline]
    pub fn sqrt(&self) -> Complex {
        self.powf(0.5)
    }

    /// Computes `self^2`.
    #[inline]
    pub fn sqr(&self) -> Complex {
        self.powi(2)
    }

    /// Computes the sine of `self`.
    #[inline]
    pub fn sin(&self) -> Complex {
        // formula: sin(z) = (e^(iz) - e^(-iz))/(2i)
        let p = Complex::I * self;
        (p.exp() - (-p).exp()) * NEG_HALF_I
    }

    /// Computes the cosine of `self`.
    #[inline]
    pub fn cos(&self) -> Complex {
        // formula: cos(z) = (e^(iz) + e^(-iz))/2
        let p = Complex::I * self;
        (p.exp() + (-p).exp()).scale(0.5)
    }

    /// Computes the tangent of `self`.
    ///
    /// Fails with `DivideByZero` where the cosine vanishes.
    #[inline]
    pub fn tan(&self) -> Result<Complex, ComplexError> {
        self.sin() / self.cos()
    }

    /// Computes the cotangent of `self`.
    ///
    /// Fails with `DivideByZero` where the sine vanishes.
    #[inline]
    pub fn cot(&self) -> Result<Complex, ComplexError> {
        self.cos() / self.sin()
    }

    /// Computes the principal value of the inverse sine of `self`.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞, -1)`, continuous from above.
    /// * `(1, ∞)`, continuous from below.
    ///
    /// The branch satisfies `-π/2 ≤ Re(asin(z)) ≤ π/2`.
    #[inline]
    pub fn asin(&self) -> Complex {
        // formula: arcsin(z) = -i ln(iz + sqrt(1-z^2))
        let i = Complex::I;
        -i * (i * self + (Complex::ONE - self * self).sqrt()).ln()
    }

    /// Computes the principal value of the inverse cosine of `self`.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞, -1)`, continuous from above.
    /// * `(1, ∞)`, continuous from below.
    ///
    /// The branch satisfies `0 ≤ Re(acos(z)) ≤ π`.
    #[inline]
    pub fn acos(&self) -> Complex {
        // formula: arccos(z) = -i ln(z + i sqrt(1-z^2))
        let i = Complex::I;
        -i * (self + i * (Complex::ONE - self * self).sqrt()).ln()
    }

    /// Computes the inverse tangent of `self`.
    ///
    /// The result is only determined up to an additive multiple of π; on the
    /// imaginary axis beyond `±i` it may land on a different sheet than the
    /// textbook principal value. Fails with `DivideByZero` at `-i`.
    #[inline]
    pub fn atan(&self) -> Result<Complex, ComplexError> {
        // formula: arctan(z) = -i/2 ln((1+iz)/(1-iz))
        let iz = Complex::I * self;
        Ok(((Complex::ONE + iz) / (Complex::ONE - iz))?.ln() * NEG_HALF_I)
    }

    /// Computes the inverse cotangent of `self`.
    ///
    /// Like `atan`, only determined up to an additive multiple of π. Fails
    /// with `DivideByZero` at `i`.
    #[inline]
    pub fn acot(&self) -> Result<Complex, ComplexError> {
        // formula: arccot(z) = -i/2 ln((iz-1)/(iz+1))
        let iz = Complex::I * self;
        Ok(((iz - Complex::ONE) / (iz + Complex::ONE))?.ln() * NEG_HALF_I)
    }

    /// Computes the hyperbolic sine of `self`.
    #[inline]
    pub fn sinh(&self) -> Complex {
        // formula: sinh(z) = (e^z - e^(-z))/2
        (self.exp() - (-self).exp()).scale(0.5)
    }

    /// Computes the hyperbolic cosine of `self`.
    #[inline]
    pub fn cosh(&self) -> Complex {
        // formula: cosh(z) = (e^z + e^(-z))/2
        (self.exp() + (-self).exp()).scale(0.5)
    }

    /// Computes the hyperbolic tangent of `self`.
    ///
    /// Fails with `DivideByZero` where the hyperbolic cosine vanishes.
    #[inline]
    pub fn tanh(&self) -> Result<Complex, ComplexError> {
        self.sinh() / self.cosh()
    }

    /// Computes the hyperbolic cotangent of `self`.
    ///
    /// Fails with `DivideByZero` where the hyperbolic sine vanishes.
    #[inline]
    pub fn coth(&self) -> Result<Complex, ComplexError> {
        self.cosh() / self.sinh()
    }

    /// Computes the principal value of inverse hyperbolic sine of `self`.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞i, -i)`, continuous from the left.
    /// * `(i, ∞i)`, continuous from the right.
    ///
    /// The branch satisfies `-π/2 ≤ Im(asinh(z)) ≤ π/2`.
    #[inline]
    pub fn asinh(&self) -> Complex {
        // formula: arcsinh(z) = ln(z + sqrt(1+z^2))
        (self + (Complex::ONE + self * self).sqrt()).ln()
    }

    /// Computes the principal value of inverse hyperbolic cosine of `self`.
    ///
    /// This function has one branch cut:
    ///
    /// * `(-∞, 1)`, continuous from above.
    ///
    /// The branch satisfies `-π ≤ Im(acosh(z)) ≤ π` and `0 ≤ Re(acosh(z)) < ∞`.
    #[inline]
    pub fn acosh(&self) -> Complex {
        // formula: arccosh(z) = 2 ln(sqrt((z+1)/2) + sqrt((z-1)/2))
        let plus = (self + Complex::ONE).scale(0.5).sqrt();
        let minus = (self - Complex::ONE).scale(0.5).sqrt();
        (plus + minus).ln().scale(2.0)
    }

    /// Computes the principal value of inverse hyperbolic tangent of `self`.
    ///
    /// This function has two branch cuts:
    ///
    /// * `(-∞, -1]`, continuous from above.
    /// * `[1, ∞)`, continuous from below.
    ///
    /// `±1` map to `±∞`.
    #[inline]
    pub fn atanh(&self) -> Complex {
        // formula: arctanh(z) = (ln(1+z) - ln(1-z))/2
        ((Complex::ONE + self).ln() - (Complex::ONE - self).ln()).scale(0.5)
    }
}
