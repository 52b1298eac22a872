//! Scalar entries of a vector: real or complex values over `f64`.
//!
//! Purely real values are stored with a zero imaginary part. Whether a value
//! *renders* as `1.5` or `1.5+0i` is not a property of the value itself but
//! of the [`Domain`] tag carried by the owning vector, so rendering takes the
//! tag as an argument.

use std::ops::{Add, Mul, Sub};

use num_traits::{One, Zero};

/// Numeric domain of a vector, decided once at construction and carried as
/// an explicit tag. Downstream operations dispatch on the tag instead of
/// re-inspecting entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Real,
    Complex,
}

impl Domain {
    /// Combined domain of two operands. `Complex` wins.
    #[inline]
    pub fn union(self, other: Domain) -> Domain {
        if self == Domain::Complex || other == Domain::Complex {
            Domain::Complex
        } else {
            Domain::Real
        }
    }

    #[inline]
    pub fn is_complex(self) -> bool {
        self == Domain::Complex
    }
}

/// A single vector entry with real and imaginary components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scalar {
    pub re: f64,
    pub im: f64,
}

impl Scalar {
    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// A purely real entry.
    #[inline]
    pub fn real(re: f64) -> Self {
        Self { re, im: 0.0 }
    }

    /// Complex conjugate. A no-op on purely real values.
    #[inline]
    pub fn conj(self) -> Self {
        Self { re: self.re, im: -self.im }
    }

    /// Multiply both components by a real factor.
    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Self { re: self.re * factor, im: self.im * factor }
    }

    /// Divide both components by a real divisor.
    #[inline]
    pub fn div_real(self, divisor: f64) -> Self {
        Self { re: self.re / divisor, im: self.im / divisor }
    }

    /// Round both components independently to `places` decimal places.
    #[inline]
    pub fn rounded(self, places: u32) -> Self {
        Self { re: round_to(self.re, places), im: round_to(self.im, places) }
    }

    /// Textual form under the given domain tag: a bare decimal for `Real`,
    /// `re+imi` / `re-imi` for `Complex`. Both components are always written
    /// in the complex form, even when zero.
    pub(crate) fn render(self, domain: Domain) -> String {
        match domain {
            Domain::Real => format!("{}", canonical(self.re)),
            Domain::Complex => {
                let re = canonical(self.re);
                let im = canonical(self.im);
                if im < 0.0 {
                    format!("{re}-{}i", -im)
                } else {
                    format!("{re}+{im}i")
                }
            }
        }
    }
}

impl Add for Scalar {
    type Output = Scalar;

    #[inline]
    fn add(self, rhs: Scalar) -> Scalar {
        Scalar { re: self.re + rhs.re, im: self.im + rhs.im }
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    #[inline]
    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar { re: self.re - rhs.re, im: self.im - rhs.im }
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    /// Full complex product `(ac - bd) + (ad + bc)i`.
    #[inline]
    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl Zero for Scalar {
    #[inline]
    fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Scalar {
    #[inline]
    fn one() -> Self {
        Self { re: 1.0, im: 0.0 }
    }
}

/// Round to `places` decimal places, half away from zero. When `10^places`
/// or the scaled value overflows `f64`, the rounding quantum is finer than
/// one ulp of the value, so the value is returned unchanged.
pub(crate) fn round_to(value: f64, places: u32) -> f64 {
    if places > 308 {
        return canonical(value);
    }
    let factor = 10f64.powi(places as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return canonical(value);
    }
    canonical(scaled.round() / factor)
}

/// Collapse `-0.0` to `0.0` so rendered output never shows a signed zero.
#[inline]
pub(crate) fn canonical(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
