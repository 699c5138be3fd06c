// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Generic numeric traits and `num-complex` interop.

use core::iter::{Product, Sum};

use num_complex::Complex64;
use num_traits::{Inv, One, ToPrimitive, Zero};

use crate::Complex;

/* constants */
impl Zero for Complex {
    #[inline]
    fn zero() -> Complex {
        Complex::ZERO
    }

    /// Zero within the `PartialEq` tolerance.
    #[inline]
    fn is_zero(&self) -> bool {
        *self == Complex::ZERO
    }
}

impl One for Complex {
    #[inline]
    fn one() -> Complex {
        Complex::ONE
    }
}

impl Inv for Complex {
    type Output = Complex;

    #[inline]
    fn inv(self) -> Complex {
        Complex::inv(&self)
    }
}

impl<'a> Inv for &'a Complex {
    type Output = Complex;

    #[inline]
    fn inv(self) -> Complex {
        Complex::inv(self)
    }
}

/// Explicit narrowing: the imaginary part is dropped, and integer
/// conversions truncate the real part. `None` when the real part is NaN or
/// out of range.
impl ToPrimitive for Complex {
    #[inline]
    fn to_i64(&self) -> Option<i64> {
        self.re.to_i64()
    }

    #[inline]
    fn to_u64(&self) -> Option<u64> {
        self.re.to_u64()
    }

    #[inline]
    fn to_i128(&self) -> Option<i128> {
        self.re.to_i128()
    }

    #[inline]
    fn to_u128(&self) -> Option<u128> {
        self.re.to_u128()
    }

    #[inline]
    fn to_f32(&self) -> Option<f32> {
        self.re.to_f32()
    }

    #[inline]
    fn to_f64(&self) -> Option<f64> {
        Some(self.re)
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, |acc, c| acc + c)
    }
}

impl<'a> Sum<&'a Complex> for Complex {
    fn sum<I: Iterator<Item = &'a Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ZERO, |acc, c| acc + c)
    }
}

impl Product for Complex {
    fn product<I: Iterator<Item = Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ONE, |acc, c| acc * c)
    }
}

impl<'a> Product<&'a Complex> for Complex {
    fn product<I: Iterator<Item = &'a Complex>>(iter: I) -> Complex {
        iter.fold(Complex::ONE, |acc, c| acc * c)
    }
}

impl From<Complex64> for Complex {
    #[inline]
    fn from(c: Complex64) -> Complex {
        Complex::new(c.re, c.im)
    }
}

impl<'a> From<&'a Complex64> for Complex {
    #[inline]
    fn from(c: &Complex64) -> Complex {
        Complex::new(c.re, c.im)
    }
}

impl From<Complex> for Complex64 {
    #[inline]
    fn from(c: Complex) -> Complex64 {
        Complex64::new(c.re, c.im)
    }
}

impl<'a> From<&'a Complex> for Complex64 {
    #[inline]
    fn from(c: &Complex) -> Complex64 {
        Complex64::new(c.re, c.im)
    }
}

#[cfg(test)]
mod test {
    use num_complex::Complex64;
    use num_traits::{Inv, One, ToPrimitive, Zero};

    use crate::test::{_05_05i, _0_0i, _0_1i, _1_0i, _1_1i, _neg1_1i, all_consts};
    use crate::Complex;

    #[test]
    fn test_zero_one() {
        assert_eq!(Complex::zero(), _0_0i);
        assert_eq!(Complex::one(), _1_0i);
        assert!(_0_0i.is_zero());
        assert!(Complex::new(-0.0, 1e-17).is_zero());
        assert!(!_0_1i.is_zero());
        assert!(Complex::one().is_one());
    }

    #[test]
    fn test_inv_trait() {
        assert_eq!(Inv::inv(_1_1i), _05_05i.conj());
        assert_eq!(Inv::inv(&_1_0i), _1_0i);
    }

    #[test]
    fn test_to_primitive() {
        let c = Complex::new(-3.75, 12.0);
        assert_eq!(c.to_f64(), Some(-3.75));
        assert_eq!(c.to_f32(), Some(-3.75f32));
        assert_eq!(c.to_i32(), Some(-3));
        assert_eq!(c.to_i64(), Some(-3));
        assert_eq!(c.to_u32(), None);
        assert_eq!(Complex::new(2.9, -1.0).to_u8(), Some(2));
        assert_eq!(Complex::new(1e20, 0.0).to_i32(), None);
        assert_eq!(Complex::NAN.to_i64(), None);
        assert!(Complex::NAN.to_f64().unwrap().is_nan());
    }

    #[test]
    fn test_sum_product() {
        let sum: Complex = all_consts.iter().sum();
        assert_eq!(sum, Complex::new(1.5, 2.5));
        let sum: Complex = all_consts.iter().cloned().sum();
        assert_eq!(sum, Complex::new(1.5, 2.5));
        let product: Complex = [_0_1i, _0_1i, _1_1i].iter().product();
        assert_eq!(product, -_1_1i);
        let empty: [Complex; 0] = [];
        assert_eq!(empty.iter().product::<Complex>(), _1_0i);
    }

    #[test]
    fn test_num_complex_interop() {
        let ours = _neg1_1i;
        let theirs: Complex64 = ours.into();
        assert_eq!(theirs, Complex64::new(-1.0, 1.0));
        assert_eq!(Complex::from(theirs), ours);
        assert_eq!(Complex::from(&theirs), ours);
        assert_eq!(Complex64::from(&ours), theirs);
        for &c in all_consts.iter() {
            assert_eq!(Complex::from(Complex64::from(c)), c);
        }
    }
}
