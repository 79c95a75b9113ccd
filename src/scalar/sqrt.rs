use num_traits::Float;

use super::Scalar;

/// Number of Babylonian refinement steps in [`Scalar::square_root`].
///
/// Fixed rather than convergence-driven so the cost is bounded for every input.
pub const SQRT_ITERATIONS: usize = 10;

/// Square root of a non-negative real.
///
/// Brackets the root with a power of two `b` such that `√x < b ≤ 2√x`, then
/// applies `SQRT_ITERATIONS` steps of `y = (y + x/y) / 2`. Starting within a
/// factor of two, the relative error falls below machine precision after
/// six steps.
fn real_root(x: f64) -> f64 {
    if x == 0.0 || !x.is_finite() {
        return x;
    }

    let mut bound = 1.0_f64;
    while bound * bound <= x {
        bound *= 2.0;
    }
    while (bound * 0.5) * (bound * 0.5) > x {
        bound *= 0.5;
    }

    let mut y = bound;
    for _ in 0..SQRT_ITERATIONS {
        y = 0.5 * (y + x / y);
    }
    y
}

impl Scalar {
    /// Principal square root.
    ///
    /// - Non-negative real: real root.
    /// - Negative real: purely imaginary root `sqrt(-a)·i`.
    /// - Complex `a + bi`: `sqrt((|z|+a)/2) + sign(b)·sqrt((|z|-a)/2)·i`.
    ///
    /// ```
    /// use gridlin::Scalar;
    /// assert_eq!(Scalar::real(16.0).square_root(), Scalar::real(4.0));
    /// assert_eq!(Scalar::real(-9.0).square_root(), Scalar::imaginary(3.0));
    /// assert_eq!(Scalar::new(3.0, -4.0).square_root(), Scalar::new(2.0, -1.0));
    /// ```
    pub fn square_root(self) -> Scalar {
        if self.is_real() {
            return if self.r >= 0.0 {
                Scalar::real(real_root(self.r))
            } else {
                Scalar::imaginary(real_root(-self.r))
            };
        }

        let modulus = self.absolute();
        let re = real_root(Float::max((modulus + self.r) * 0.5, 0.0));
        let im = real_root(Float::max((modulus - self.r) * 0.5, 0.0));
        if self.i < 0.0 {
            Scalar::new(re, -im)
        } else {
            Scalar::new(re, im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_root_exact_squares() {
        assert_eq!(real_root(0.0), 0.0);
        assert_eq!(real_root(1.0), 1.0);
        assert_eq!(real_root(4.0), 2.0);
        assert!((real_root(144.0) - 12.0).abs() < 1e-12);
    }

    #[test]
    fn real_root_wide_range() {
        for &x in &[2.0_f64, 0.25, 1e-8, 3.5e-5, 1e10, 7.0e14, 123.456] {
            let y = real_root(x);
            assert!(
                ((y - x.sqrt()) / x.sqrt()).abs() < 1e-14,
                "sqrt({}) = {}, expected {}",
                x,
                y,
                x.sqrt()
            );
        }
    }

    #[test]
    fn negative_real() {
        assert_eq!(Scalar::real(-4.0).square_root(), Scalar::imaginary(2.0));
        assert_eq!(Scalar::real(-2.25).square_root(), Scalar::imaginary(1.5));
    }

    #[test]
    fn complex_root() {
        assert_eq!(Scalar::new(3.0, 4.0).square_root(), Scalar::new(2.0, 1.0));
        assert_eq!(Scalar::new(-3.0, 4.0).square_root(), Scalar::new(1.0, 2.0));
        assert_eq!(Scalar::new(-3.0, -4.0).square_root(), Scalar::new(1.0, -2.0));

        let half = 0.5_f64.sqrt();
        assert_eq!(Scalar::I.square_root(), Scalar::new(half, half));
    }

    #[test]
    fn root_squared_recovers_input() {
        for z in [
            Scalar::new(2.0, 7.5),
            Scalar::new(-11.0, 0.3),
            Scalar::new(0.02, -0.9),
            Scalar::real(98.6),
        ] {
            let r = z.square_root();
            assert!(r.re() >= 0.0);
            assert!((r * r).approx_eq(z, 10), "{:?}^2 != {:?}", r, z);
        }
    }
}
