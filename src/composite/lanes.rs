use std::ops::{Add, Div, Mul, Sub};

use crate::foundation::core::PAIR_PIXELS;

/// Two `f64` lanes: one channel of a pixel pair.
///
/// Every operation is lane-wise, so results match two independent scalar evaluations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct F64x2([f64; PAIR_PIXELS]);

impl F64x2 {
    /// Lane count, one per pixel of a pair.
    pub const LANES: usize = PAIR_PIXELS;

    /// Build from explicit lane values.
    pub const fn new(lane0: f64, lane1: f64) -> Self {
        Self([lane0, lane1])
    }

    /// Same value in both lanes.
    pub const fn splat(v: f64) -> Self {
        Self([v, v])
    }

    /// Lane values, pixel 0 first.
    pub fn lanes(self) -> [f64; Self::LANES] {
        self.0
    }

    /// Apply `f` to each lane.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        let [a, b] = self.0;
        Self([f(a), f(b)])
    }

    fn zip(self, rhs: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        let [a0, a1] = self.0;
        let [b0, b1] = rhs.0;
        Self([f(a0, b0), f(a1, b1)])
    }
}

impl Add for F64x2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a + b)
    }
}

impl Sub for F64x2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a - b)
    }
}

impl Mul for F64x2 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a * b)
    }
}

impl Div for F64x2 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.zip(rhs, |a, b| a / b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/lanes.rs"]
mod tests;
