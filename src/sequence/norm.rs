use num_traits::Float;

use super::Sequence;

// ── Vector norms ────────────────────────────────────────────────────

impl Sequence {
    /// L1 norm: sum of moduli. Zero for an empty sequence.
    ///
    /// ```
    /// use gridlin::{Scalar, Sequence};
    /// let v = Sequence::new(vec![Scalar::new(3.0, 4.0), Scalar::real(-2.0)]);
    /// assert!((v.manhattan_distance() - 7.0).abs() < 1e-12);
    /// ```
    pub fn manhattan_distance(&self) -> f64 {
        let mut sum = 0.0;
        for x in self.iter() {
            sum += x.absolute();
        }
        sum
    }

    /// L2 (Euclidean) norm: square root of the sum of squared moduli.
    ///
    /// ```
    /// use gridlin::{Scalar, Sequence};
    /// let v = Sequence::new(vec![Scalar::new(1.0, 2.0), Scalar::imaginary(-2.0)]);
    /// assert!((v.euclidean_norm() - 3.0).abs() < 1e-12);
    /// ```
    pub fn euclidean_norm(&self) -> f64 {
        let mut sum = 0.0;
        for x in self.iter() {
            let m = x.absolute();
            sum += m * m;
        }
        Float::sqrt(sum)
    }

    /// Infinity norm: largest modulus.
    ///
    /// ```
    /// use gridlin::Sequence;
    /// let v = Sequence::from_reals(&[1.0, -9.5, 3.0]);
    /// assert_eq!(v.supremum_norm(), 9.5);
    /// ```
    pub fn supremum_norm(&self) -> f64 {
        let mut max = 0.0_f64;
        for x in self.iter() {
            max = Float::max(max, x.absolute());
        }
        max
    }
}
