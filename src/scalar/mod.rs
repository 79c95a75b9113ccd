mod kind;
mod sqrt;

pub use kind::ScalarKind;
pub use sqrt::SQRT_ITERATIONS;

use core::fmt;
use core::iter::{Product, Sum};
use core::ops::{Add, Mul, Neg, Sub};

use num_traits::{Float, One, Zero};

use crate::error::{Error, Result};

/// Components with a magnitude below this are snapped to exactly zero.
///
/// Elimination on floating-point data leaves residue such as `1e-16` where an
/// exact computation would give `0`. Snapping at construction keeps that
/// residue from being picked as a pivot or propagating into later rows.
pub const EPSILON: f64 = 1e-12;

/// Decimal precision used by `PartialEq` (matches [`EPSILON`]).
pub const DEFAULT_PRECISION: u32 = 12;

/// Real or complex number: real part `r`, imaginary part `i`.
///
/// Immutable value type; every operation returns a new `Scalar`. Both
/// components are snapped to zero when their magnitude is below
/// [`EPSILON`].
///
/// Equality (`==`) compares both components to [`DEFAULT_PRECISION`]
/// decimals; use [`approx_eq`](Self::approx_eq) for a coarser precision.
///
/// # Examples
///
/// ```
/// use gridlin::Scalar;
///
/// let a = Scalar::new(5.0, 3.0);
/// let b = Scalar::new(7.0, 4.0);
/// assert_eq!(a + b, Scalar::new(12.0, 7.0));
/// assert_eq!(a * b, Scalar::new(23.0, 41.0));
///
/// // Residue below EPSILON disappears
/// let tiny = Scalar::new(1e-15, -3e-14);
/// assert_eq!(tiny.re(), 0.0);
/// assert_eq!(tiny.im(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Scalar {
    r: f64,
    i: f64,
}

#[inline]
fn snap(x: f64) -> f64 {
    if Float::abs(x) < EPSILON {
        0.0
    } else {
        x
    }
}

// ── Constructors ────────────────────────────────────────────────────

impl Scalar {
    /// The additive identity.
    pub const ZERO: Scalar = Scalar { r: 0.0, i: 0.0 };
    /// The multiplicative identity.
    pub const ONE: Scalar = Scalar { r: 1.0, i: 0.0 };
    /// The imaginary unit.
    pub const I: Scalar = Scalar { r: 0.0, i: 1.0 };

    /// Create a scalar from its real and imaginary parts.
    ///
    /// Both components must be finite. This is only asserted in debug
    /// builds; NaN or infinite components propagate through every later
    /// operation unchecked.
    #[inline]
    pub fn new(real: f64, imaginary: f64) -> Self {
        debug_assert!(real.is_finite() && imaginary.is_finite(), "scalar components must be finite");
        Self {
            r: snap(real),
            i: snap(imaginary),
        }
    }

    /// Create a purely real scalar.
    #[inline]
    pub fn real(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Create a purely imaginary scalar.
    #[inline]
    pub fn imaginary(value: f64) -> Self {
        Self::new(0.0, value)
    }

    /// Real part.
    #[inline]
    pub fn re(self) -> f64 {
        self.r
    }

    /// Imaginary part.
    #[inline]
    pub fn im(self) -> f64 {
        self.i
    }
}

// ── Predicates ──────────────────────────────────────────────────────

impl Scalar {
    /// Both components are exactly zero (after snapping).
    #[inline]
    pub fn is_zero(self) -> bool {
        self.r == 0.0 && self.i == 0.0
    }

    /// The imaginary part is zero.
    #[inline]
    pub fn is_real(self) -> bool {
        self.i == 0.0
    }

    /// The imaginary part is non-zero.
    #[inline]
    pub fn is_complex(self) -> bool {
        self.i != 0.0
    }

    /// Real with no fractional part.
    #[inline]
    pub fn is_integer(self) -> bool {
        self.is_real() && Float::fract(self.r) == 0.0
    }

    /// Compare both components to `precision` decimal places.
    ///
    /// Two scalars are equal when each component differs by less than
    /// `10^-precision`.
    ///
    /// ```
    /// use gridlin::Scalar;
    /// let third = Scalar::real(1.0 / 3.0);
    /// assert!(third.approx_eq(Scalar::real(0.33333), 4));
    /// assert!(!third.approx_eq(Scalar::real(0.33333), 6));
    /// ```
    pub fn approx_eq(self, other: Scalar, precision: u32) -> bool {
        let tol = Float::powi(10.0_f64, -(precision as i32));
        Float::abs(self.r - other.r) < tol && Float::abs(self.i - other.i) < tol
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(*other, DEFAULT_PRECISION)
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl Scalar {
    /// Complex conjugate: negates the imaginary part.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(self.r, -self.i)
    }

    /// Modulus `sqrt(r² + i²)`.
    #[inline]
    pub fn absolute(self) -> f64 {
        Float::sqrt(self.r * self.r + self.i * self.i)
    }

    /// Divide by `rhs`: multiply by its conjugate over its squared modulus.
    ///
    /// Returns [`Error::DivideByZero`] when `rhs` is zero.
    ///
    /// ```
    /// use gridlin::{Error, Scalar};
    /// let q = Scalar::new(4.0, 1.0).divide(Scalar::new(2.0, 2.0)).unwrap();
    /// assert_eq!(q, Scalar::new(1.25, -0.75));
    /// assert_eq!(Scalar::ONE.divide(Scalar::ZERO), Err(Error::DivideByZero));
    /// ```
    pub fn divide(self, rhs: Scalar) -> Result<Self> {
        if rhs.is_zero() {
            return Err(Error::DivideByZero);
        }
        let denom = rhs.r * rhs.r + rhs.i * rhs.i;
        let r = self.r * rhs.r + self.i * rhs.i;
        let i = self.i * rhs.r - self.r * rhs.i;
        Ok(Self::new(r / denom, i / denom))
    }

    /// Linear interpolation `a + (b - a)·t`.
    ///
    /// `t` must be real and within `[0, 1]`, otherwise
    /// [`Error::InvalidInterpolationFactor`].
    pub fn linear_interpolation(a: Scalar, b: Scalar, t: Scalar) -> Result<Self> {
        check_factor(t)?;
        Ok(a + (b - a) * t)
    }
}

/// Validate an interpolation factor.
pub(crate) fn check_factor(t: Scalar) -> Result<()> {
    if !t.is_real() || t.r < 0.0 || t.r > 1.0 {
        return Err(Error::InvalidInterpolationFactor);
    }
    Ok(())
}

impl Add for Scalar {
    type Output = Scalar;

    #[inline]
    fn add(self, rhs: Scalar) -> Scalar {
        Scalar::new(self.r + rhs.r, self.i + rhs.i)
    }
}

impl Sub for Scalar {
    type Output = Scalar;

    #[inline]
    fn sub(self, rhs: Scalar) -> Scalar {
        Scalar::new(self.r - rhs.r, self.i - rhs.i)
    }
}

impl Mul for Scalar {
    type Output = Scalar;

    #[inline]
    fn mul(self, rhs: Scalar) -> Scalar {
        Scalar::new(
            self.r * rhs.r - self.i * rhs.i,
            self.r * rhs.i + self.i * rhs.r,
        )
    }
}

impl Neg for Scalar {
    type Output = Scalar;

    #[inline]
    fn neg(self) -> Scalar {
        Scalar::new(-self.r, -self.i)
    }
}

impl Zero for Scalar {
    #[inline]
    fn zero() -> Self {
        Scalar::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Scalar::is_zero(*self)
    }
}

impl One for Scalar {
    #[inline]
    fn one() -> Self {
        Scalar::ONE
    }
}

impl Sum for Scalar {
    fn sum<I: Iterator<Item = Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::ZERO, |acc, x| acc + x)
    }
}

impl Product for Scalar {
    fn product<I: Iterator<Item = Scalar>>(iter: I) -> Scalar {
        iter.fold(Scalar::ONE, |acc, x| acc * x)
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl From<f64> for Scalar {
    #[inline]
    fn from(value: f64) -> Self {
        Scalar::real(value)
    }
}

#[cfg(feature = "complex")]
impl From<num_complex::Complex<f64>> for Scalar {
    #[inline]
    fn from(z: num_complex::Complex<f64>) -> Self {
        Scalar::new(z.re, z.im)
    }
}

#[cfg(feature = "complex")]
impl From<Scalar> for num_complex::Complex<f64> {
    #[inline]
    fn from(s: Scalar) -> Self {
        num_complex::Complex::new(s.r, s.i)
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Round to `DEFAULT_PRECISION` decimals and clear negative zero.
fn fix_decimals(x: f64) -> f64 {
    let scale = Float::powi(10.0_f64, DEFAULT_PRECISION as i32);
    if Float::abs(x) >= 1e15 {
        return x;
    }
    Float::round(x * scale) / scale + 0.0
}

fn write_imaginary(f: &mut fmt::Formatter<'_>, magnitude: f64) -> fmt::Result {
    if magnitude == 1.0 {
        write!(f, "i")
    } else {
        write!(f, "{}i", magnitude)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let re = fix_decimals(self.r);
        let im = fix_decimals(self.i);

        if im == 0.0 {
            write!(f, "{}", re)
        } else if re == 0.0 {
            if im < 0.0 {
                write!(f, "-")?;
            }
            write_imaginary(f, Float::abs(im))
        } else if im < 0.0 {
            write!(f, "{} - ", re)?;
            write_imaginary(f, -im)
        } else {
            write!(f, "{} + ", re)?;
            write_imaginary(f, im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn c(re: f64, im: f64) -> Scalar {
        Scalar::new(re, im)
    }

    #[test]
    fn snapping() {
        let s = c(1e-13, 5.0);
        assert_eq!(s.re(), 0.0);
        assert_eq!(s.im(), 5.0);
        // Exactly representable, above threshold
        assert_eq!(c(1e-11, 0.0).re(), 1e-11);
        // Negative zero is normalized
        assert!(c(-0.0, 0.0).re().is_sign_positive());
    }

    #[test]
    fn add() {
        assert_eq!(c(2.0, 0.0) + c(3.0, 0.0), c(5.0, 0.0));
        assert_eq!(c(2.5, 0.0) + c(3.5, 0.0), c(6.0, 0.0));
        assert_eq!(c(5.0, 3.0) + c(7.0, 4.0), c(12.0, 7.0));
        assert_eq!(c(4.75, 2.25) + c(8.125, 0.75), c(12.875, 3.0));
    }

    #[test]
    fn subtract() {
        assert_eq!(c(2.0, 0.0) - c(3.0, 0.0), c(-1.0, 0.0));
        assert_eq!(c(5.0, 3.0) - c(7.0, 4.0), c(-2.0, -1.0));
        assert_eq!(c(4.75, 2.25) - c(8.125, 0.75), c(-3.375, 1.5));
    }

    #[test]
    fn multiply() {
        assert_eq!(c(2.5, 0.0) * c(2.5, 0.0), c(6.25, 0.0));
        assert_eq!(Scalar::I * Scalar::I, c(-1.0, 0.0));
        assert_eq!(c(5.0, 3.0) * c(7.0, 4.0), c(23.0, 41.0));
        assert_eq!(c(4.75, 2.0) * c(8.0, 1.0), c(36.0, 20.75));
    }

    #[test]
    fn divide() {
        assert_eq!(c(2.0, 0.0).divide(c(2.0, 0.0)).unwrap(), c(1.0, 0.0));
        assert_eq!(c(2.5, 0.0).divide(c(0.25, 0.0)).unwrap(), c(10.0, 0.0));
        assert_eq!(c(4.0, 1.0).divide(c(2.0, 2.0)).unwrap(), c(1.25, -0.75));
        assert_eq!(c(4.25, 1.0).divide(c(2.75, 0.5)).unwrap(), c(1.56, 0.08));
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(c(3.0, 1.0).divide(Scalar::ZERO), Err(Error::DivideByZero));
        // Snapped residue counts as zero
        assert_eq!(c(3.0, 1.0).divide(c(1e-14, 0.0)), Err(Error::DivideByZero));
    }

    #[test]
    fn multiply_then_divide() {
        let a = c(3.5, -1.25);
        let b = c(-0.75, 2.0);
        assert_eq!((a * b).divide(b).unwrap(), a);
    }

    #[test]
    fn conjugate_and_absolute() {
        assert_eq!(c(3.0, 4.0).conjugate(), c(3.0, -4.0));
        assert!((c(3.0, 4.0).absolute() - 5.0).abs() < 1e-15);
        assert!((c(-2.0, 0.0).absolute() - 2.0).abs() < 1e-15);
    }

    #[test]
    fn predicates() {
        assert!(Scalar::ZERO.is_zero());
        assert!(c(4.0, 0.0).is_integer());
        assert!(!c(4.5, 0.0).is_integer());
        assert!(!c(4.0, 1.0).is_integer());
        assert!(c(4.5, 0.0).is_real());
        assert!(c(0.0, 2.0).is_complex());
    }

    #[test]
    fn approx_eq_precision() {
        let x = c(-12.166_666_666, 0.0);
        assert!(x.approx_eq(c(-12.16666, 0.0), 4));
        assert!(!x.approx_eq(c(-12.16666, 0.0), 8));
        assert!(x != c(-12.16666, 0.0));
    }

    #[test]
    fn linear_interpolation() {
        let zero = Scalar::ZERO;
        let one = Scalar::ONE;
        assert_eq!(Scalar::linear_interpolation(zero, one, c(0.0, 0.0)).unwrap(), zero);
        assert_eq!(Scalar::linear_interpolation(zero, one, c(1.0, 0.0)).unwrap(), one);
        assert_eq!(Scalar::linear_interpolation(zero, one, c(0.5, 0.0)).unwrap(), c(0.5, 0.0));
        assert_eq!(
            Scalar::linear_interpolation(c(21.0, 0.0), c(42.0, 0.0), c(0.3, 0.0)).unwrap(),
            c(27.3, 0.0)
        );
        assert_eq!(
            Scalar::linear_interpolation(c(5.0, 10.0), c(10.0, -15.0), c(0.25, 0.0)).unwrap(),
            c(6.25, 3.75)
        );
    }

    #[test]
    fn linear_interpolation_invalid_factor() {
        let (a, b) = (Scalar::ZERO, c(2.0, 0.0));
        assert_eq!(
            Scalar::linear_interpolation(a, b, c(1.0, 1.0)),
            Err(Error::InvalidInterpolationFactor)
        );
        assert_eq!(
            Scalar::linear_interpolation(a, b, c(-0.1, 0.0)),
            Err(Error::InvalidInterpolationFactor)
        );
        assert_eq!(
            Scalar::linear_interpolation(a, b, c(1.5, 0.0)),
            Err(Error::InvalidInterpolationFactor)
        );
    }

    #[test]
    fn num_traits_identities() {
        let a = c(2.5, -4.0);
        assert_eq!(a + Scalar::zero(), a);
        assert_eq!(a * Scalar::one(), a);
        assert!(Zero::is_zero(&Scalar::zero()));
    }

    #[test]
    fn sum_and_product() {
        let xs = [c(1.0, 1.0), c(2.0, -1.0), c(3.0, 0.0)];
        assert_eq!(xs.iter().copied().sum::<Scalar>(), c(6.0, 0.0));
        assert_eq!(xs.iter().copied().product::<Scalar>(), c(9.0, 3.0));
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", c(3.0, 0.0)), "3");
        assert_eq!(format!("{}", c(0.0, 1.0)), "i");
        assert_eq!(format!("{}", c(0.0, -1.0)), "-i");
        assert_eq!(format!("{}", c(0.0, 2.5)), "2.5i");
        assert_eq!(format!("{}", c(1.5, -2.0)), "1.5 - 2i");
        assert_eq!(format!("{}", c(1.5, 1.0)), "1.5 + i");
        assert_eq!(format!("{}", c(0.1 + 0.2, 0.0)), "0.3");
    }
}
