// Copyright 2013 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use core::fmt;

/// An error raised by a fallible complex operation.
///
/// Division (and every function whose formula divides) reports a zero
/// divisor here instead of producing infinite or NaN components.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ComplexError {
    kind: ErrorKind,
}

/// The reason a complex operation failed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The divisor was zero, or its magnitude was below `f64::EPSILON`.
    DivideByZero,
}

impl ComplexError {
    pub(crate) fn divide_by_zero() -> ComplexError {
        ComplexError {
            kind: ErrorKind::DivideByZero,
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Shorthand for `self.kind() == ErrorKind::DivideByZero`.
    pub fn is_divide_by_zero(&self) -> bool {
        self.kind == ErrorKind::DivideByZero
    }
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.kind.description())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ComplexError {}

impl ErrorKind {
    fn description(&self) -> &'static str {
        match *self {
            ErrorKind::DivideByZero => "complex division by zero",
        }
    }
}
