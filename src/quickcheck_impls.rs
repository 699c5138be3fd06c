// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use quickcheck::{Arbitrary, Gen};

use crate::Complex;

impl Arbitrary for Complex {
    fn arbitrary(g: &mut Gen) -> Self {
        Complex::new(f64::arbitrary(g), f64::arbitrary(g))
    }

    // shrink the real part first, then the imaginary part
    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let (re, im) = (self.re, self.im);
        let shrink_re = re.shrink().map(move |re| Complex::new(re, im));
        let shrink_im = im.shrink().map(move |im| Complex::new(re, im));
        Box::new(shrink_re.chain(shrink_im))
    }
}
