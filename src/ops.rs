// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Operator overloading and widening conversions.
//!
//! Addition, subtraction, multiplication and negation are total. Division
//! returns `Result<Complex, ComplexError>`: a divisor of zero (or, for
//! floating point divisors, of magnitude below `f64::EPSILON`) is reported
//! rather than turned into infinities.

use core::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::Float;

use crate::{Complex, ComplexError};

impl Complex {
    /// Divides `self` by `other`, failing when `|other|^2 < f64::EPSILON`.
    ///
    /// A NaN divisor is not an error; the NaN propagates into the result.
    #[inline]
    pub fn checked_div(&self, other: &Complex) -> Result<Complex, ComplexError> {
        // (a + i b) / (c + i d) == [(a + i b) * (c - i d)] / (c*c + d*d)
        //   == [(a*c + b*d) / (c*c + d*d)] + i [(b*c - a*d) / (c*c + d*d)]
        let norm_sqr = other.norm_sqr();
        if Float::abs(norm_sqr) < f64::EPSILON {
            return Err(ComplexError::divide_by_zero());
        }
        let re = self.re * other.re + self.im * other.im;
        let im = self.im * other.re - self.re * other.im;
        Ok(Complex::new(re / norm_sqr, im / norm_sqr))
    }

    /// Divides both components by `other`, failing when `|other| < f64::EPSILON`.
    #[inline]
    pub fn checked_div_real(&self, other: f64) -> Result<Complex, ComplexError> {
        if Float::abs(other) < f64::EPSILON {
            return Err(ComplexError::divide_by_zero());
        }
        Ok(self.unscale(other))
    }
}

macro_rules! forward_ref_ref_binop {
    (impl $imp:ident, $method:ident, $output:ty) => {
        impl<'a, 'b> $imp<&'b Complex> for &'a Complex {
            type Output = $output;

            #[inline]
            fn $method(self, other: &Complex) -> $output {
                (*self).$method(*other)
            }
        }
    };
}

macro_rules! forward_ref_val_binop {
    (impl $imp:ident, $method:ident, $output:ty) => {
        impl<'a> $imp<Complex> for &'a Complex {
            type Output = $output;

            #[inline]
            fn $method(self, other: Complex) -> $output {
                (*self).$method(other)
            }
        }
    };
}

macro_rules! forward_val_ref_binop {
    (impl $imp:ident, $method:ident, $output:ty) => {
        impl<'a> $imp<&'a Complex> for Complex {
            type Output = $output;

            #[inline]
            fn $method(self, other: &Complex) -> $output {
                self.$method(*other)
            }
        }
    };
}

macro_rules! forward_all_binop {
    (impl $imp:ident, $method:ident, $output:ty) => {
        forward_ref_ref_binop!(impl $imp, $method, $output);
        forward_ref_val_binop!(impl $imp, $method, $output);
        forward_val_ref_binop!(impl $imp, $method, $output);
    };
}

/* arithmetic */
forward_all_binop!(impl Add, add, Complex);

// (a + i b) + (c + i d) == (a + c) + i (b + d)
impl Add<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }
}

forward_all_binop!(impl Sub, sub, Complex);

// (a + i b) - (c + i d) == (a - c) + i (b - d)
impl Sub<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }
}

forward_all_binop!(impl Mul, mul, Complex);

// (a + i b) * (c + i d) == (a*c - b*d) + i (a*d + b*c)
impl Mul<Complex> for Complex {
    type Output = Complex;

    #[inline]
    fn mul(self, other: Complex) -> Complex {
        let re = self.re * other.re - self.im * other.im;
        let im = self.re * other.im + self.im * other.re;
        Complex::new(re, im)
    }
}

forward_all_binop!(impl Div, div, Result<Complex, ComplexError>);

impl Div<Complex> for Complex {
    type Output = Result<Complex, ComplexError>;

    #[inline]
    fn div(self, other: Complex) -> Result<Complex, ComplexError> {
        self.checked_div(&other)
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl<'a> Neg for &'a Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        -*self
    }
}

// Mixed arithmetic only touches the real part, except `n - c` which
// negates the imaginary part as well.
macro_rules! scalar_add_sub {
    ($($scalar:ident),*) => {
        $(
            impl Add<$scalar> for Complex {
                type Output = Complex;

                #[inline]
                fn add(self, other: $scalar) -> Complex {
                    Complex::new(self.re + other as f64, self.im)
                }
            }
            impl<'a> Add<$scalar> for &'a Complex {
                type Output = Complex;

                #[inline]
                fn add(self, other: $scalar) -> Complex {
                    (*self).add(other)
                }
            }
            impl Add<Complex> for $scalar {
                type Output = Complex;

                #[inline]
                fn add(self, other: Complex) -> Complex {
                    Complex::new(self as f64 + other.re, other.im)
                }
            }
            impl<'a> Add<&'a Complex> for $scalar {
                type Output = Complex;

                #[inline]
                fn add(self, other: &Complex) -> Complex {
                    self.add(*other)
                }
            }
            impl Sub<$scalar> for Complex {
                type Output = Complex;

                #[inline]
                fn sub(self, other: $scalar) -> Complex {
                    Complex::new(self.re - other as f64, self.im)
                }
            }
            impl<'a> Sub<$scalar> for &'a Complex {
                type Output = Complex;

                #[inline]
                fn sub(self, other: $scalar) -> Complex {
                    (*self).sub(other)
                }
            }
            impl Sub<Complex> for $scalar {
                type Output = Complex;

                #[inline]
                fn sub(self, other: Complex) -> Complex {
                    Complex::new(self as f64 - other.re, -other.im)
                }
            }
            impl<'a> Sub<&'a Complex> for $scalar {
                type Output = Complex;

                #[inline]
                fn sub(self, other: &Complex) -> Complex {
                    self.sub(*other)
                }
            }
        )*
    };
}

scalar_add_sub!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64, f32, f64);

macro_rules! real_div {
    ($($real:ident),*) => {
        $(
            impl Div<$real> for Complex {
                type Output = Result<Complex, ComplexError>;

                #[inline]
                fn div(self, other: $real) -> Result<Complex, ComplexError> {
                    self.checked_div_real(other as f64)
                }
            }
            impl<'a> Div<$real> for &'a Complex {
                type Output = Result<Complex, ComplexError>;

                #[inline]
                fn div(self, other: $real) -> Result<Complex, ComplexError> {
                    self.checked_div_real(other as f64)
                }
            }
        )*
    };
}

real_div!(f32, f64);

// Integer divisors are only rejected when exactly zero.
macro_rules! integer_div {
    ($($int:ident),*) => {
        $(
            impl Div<$int> for Complex {
                type Output = Result<Complex, ComplexError>;

                #[inline]
                fn div(self, other: $int) -> Result<Complex, ComplexError> {
                    if other == 0 {
                        return Err(ComplexError::divide_by_zero());
                    }
                    Ok(self.unscale(other as f64))
                }
            }
            impl<'a> Div<$int> for &'a Complex {
                type Output = Result<Complex, ComplexError>;

                #[inline]
                fn div(self, other: $int) -> Result<Complex, ComplexError> {
                    (*self).div(other)
                }
            }
        )*
    };
}

integer_div!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64);

macro_rules! widen_from {
    ($($scalar:ident),*) => {
        $(
            impl From<$scalar> for Complex {
                #[inline]
                fn from(re: $scalar) -> Complex {
                    Complex::from_real(re as f64)
                }
            }
            impl<'a> From<&'a $scalar> for Complex {
                #[inline]
                fn from(re: &$scalar) -> Complex {
                    Complex::from_real(*re as f64)
                }
            }
        )*
    };
}

widen_from!(usize, u8, u16, u32, u64, isize, i8, i16, i32, i64, f32, f64);
