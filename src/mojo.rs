// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use core::cmp::Ordering;
use std::fmt;
use std::num::ParseFloatError;
use std::ops::{Add, Deref, Div, Mul, Sub};
use std::str::FromStr;

/// The smallest unit of XCH
pub type Mojo = u64;

const XCH_UNIT: Mojo = 1_000_000_000_000;
const XCH_UNIT_F: f64 = XCH_UNIT as f64;

pub(crate) const MIN: Xch = Xch(1);
pub(crate) const MAX: Xch = Xch(Mojo::MAX);

/// Denomination for XCH
#[derive(Copy, Clone, Eq)]
pub struct Xch(Mojo);

impl Xch {
    /// Create Xch from f64
    pub fn from(value: f64) -> Self {
        Self((value * XCH_UNIT_F) as Mojo)
    }

    /// Create Xch from mojos
    pub fn from_mojos(value: Mojo) -> Self {
        Self(value)
    }

    /// Get value in mojos
    pub fn as_mojos(&self) -> Mojo {
        self.0
    }

    /// Get value as f64
    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / XCH_UNIT_F
    }

    /// Min between two values
    pub fn min(self, other: Self) -> Self {
        if self <= other {
            self
        } else {
            other
        }
    }
}

/// Core ops
/// Implementations of Addition, Subtraction, Multiplication,
/// Division, and Comparison operators for Xch

/// Addition
impl Add for Xch {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Subtraction
impl Sub for Xch {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

/// Multiplication
impl Mul for Xch {
    type Output = Self;
    fn mul(self, other: Self) -> Self {
        // widen first, the intermediate product overflows u64 past one XCH
        Self(((self.0 as u128 * other.0 as u128) / XCH_UNIT as u128) as Mojo)
    }
}

/// Division
impl Div for Xch {
    type Output = Self;
    fn div(self, other: Self) -> Self {
        Self(((self.0 as f64 / other.0 as f64) * XCH_UNIT_F) as Mojo)
    }
}

/// Equality
impl PartialEq for Xch {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl PartialEq<Mojo> for Xch {
    fn eq(&self, other: &Mojo) -> bool {
        self.as_mojos() == *other
    }
}
impl PartialEq<f64> for Xch {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == *other
    }
}

/// Comparison
impl PartialOrd for Xch {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}
impl PartialOrd<Mojo> for Xch {
    fn partial_cmp(&self, other: &Mojo) -> Option<Ordering> {
        self.as_mojos().partial_cmp(other)
    }
}
impl PartialOrd<f64> for Xch {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.as_f64().partial_cmp(other)
    }
}

/// Conversion ops
/// Convenient conversion of primitives to and from Xch

/// Floats are used directly as XCH value
impl From<f64> for Xch {
    fn from(val: f64) -> Self {
        Self::from(val)
    }
}

/// Mojos represent XCH in their underlying unit type
impl From<Mojo> for Xch {
    fn from(mojos: Mojo) -> Self {
        Self(mojos)
    }
}

/// Strings are parsed as XCH values (floats)
impl FromStr for Xch {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        f64::from_str(s).map(Xch::from)
    }
}

/// Xch derefs into its underlying mojo amount
impl Deref for Xch {
    type Target = Mojo;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Display
/// Let the user print stuff

impl fmt::Display for Xch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

impl fmt::Debug for Xch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basics() {
        let one = Xch::from(1.0);
        let dec = Xch::from(2.25);
        assert_eq!(one, XCH_UNIT);
        assert_eq!(one, 1.0);
        assert_eq!(dec, 2.25);
    }

    #[test]
    fn compare_xch() {
        let one = Xch::from(1.0);
        let two = Xch::from(2.0);
        let dec_a = Xch::from(0.00025);
        let dec_b = Xch::from(0.00190);
        assert!(one == one);
        assert!(one != two);
        assert!(one < two);
        assert!(one <= two);
        assert!(one >= one);
        assert!(dec_a < dec_b);
        assert!(one > dec_b);
    }

    #[test]
    fn ops_xch_xch() {
        let one = Xch::from(1.0);
        let two = Xch::from(2.0);
        let three = Xch::from(3.0);
        assert_eq!(one + two, three);
        assert_eq!(three - two, one);
        assert_eq!(one * one, one);
        assert_eq!(two * one, two);
        assert_eq!(two / one, two);
        let point_five = Xch::from(0.5);
        assert_eq!(one / two, point_five);
        assert_eq!(point_five * point_five, Xch::from(0.25))
    }

    #[test]
    fn conversions() {
        let my_float = 35.049;
        let xch: Xch = my_float.into();
        assert_eq!(xch, my_float);
        let one_xch = 1_000_000_000_000u64;
        let xch: Xch = one_xch.into();
        assert_eq!(xch, 1.0);
        assert_eq!(*xch, one_xch);
        let xch = Xch::from_str("69.420").unwrap();
        assert_eq!(xch, 69.420);
    }
}
