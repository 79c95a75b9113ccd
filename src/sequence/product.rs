use crate::error::{Error, Result};
use crate::scalar::Scalar;

use super::Sequence;

/// Σ aᵢ·f(bᵢ) over equal-length operands.
fn dot_unchecked(a: &Sequence, b: &Sequence, f: impl Fn(Scalar) -> Scalar) -> Scalar {
    a.iter().zip(b.iter()).map(|(x, y)| x * f(y)).sum()
}

impl Sequence {
    fn check_product(&self, other: &Sequence) -> Result<()> {
        self.check_size(other)?;
        if self.is_empty() {
            return Err(Error::EmptyOperand);
        }
        Ok(())
    }

    /// Dot product Σ aᵢ·bᵢ, with no conjugation.
    ///
    /// [`Error::ShapeMismatch`] when sizes differ, [`Error::EmptyOperand`]
    /// on empty operands.
    ///
    /// ```
    /// use gridlin::{Scalar, Sequence};
    /// let a = Sequence::from_reals(&[1.0, 2.0, 3.0]);
    /// let b = Sequence::from_reals(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot_product(&b).unwrap(), Scalar::real(32.0));
    /// ```
    pub fn dot_product(&self, other: &Sequence) -> Result<Scalar> {
        self.check_product(other)?;
        Ok(dot_unchecked(self, other, |y| y))
    }

    /// Hermitian inner product Σ aᵢ·conj(bᵢ).
    ///
    /// ```
    /// use gridlin::{Scalar, Sequence};
    /// let v = Sequence::new(vec![Scalar::new(1.0, 1.0), Scalar::new(0.0, 2.0)]);
    /// // ⟨v, v⟩ = ‖v‖²
    /// assert_eq!(v.inner_product(&v).unwrap(), Scalar::real(6.0));
    /// ```
    pub fn inner_product(&self, other: &Sequence) -> Result<Scalar> {
        self.check_product(other)?;
        Ok(dot_unchecked(self, other, Scalar::conjugate))
    }

    /// Cross product of two 3-vectors, without conjugation.
    ///
    /// [`Error::ShapeMismatch`] when sizes differ, [`Error::DimensionError`]
    /// unless both have exactly three elements.
    ///
    /// ```
    /// use gridlin::Sequence;
    /// let x = Sequence::from_reals(&[1.0, 0.0, 0.0]);
    /// let z = Sequence::from_reals(&[0.0, 0.0, 1.0]);
    /// assert_eq!(z.cross_product(&x).unwrap(), Sequence::from_reals(&[0.0, 1.0, 0.0]));
    /// ```
    pub fn cross_product(&self, other: &Sequence) -> Result<Sequence> {
        self.check_size(other)?;
        if self.size() != 3 {
            return Err(Error::DimensionError);
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Sequence::new(alloc::vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    /// Cosine of the angle between two vectors, `⟨a, b⟩ / (‖a‖·‖b‖)`.
    ///
    /// Complex for complex operands. [`Error::ShapeMismatch`] when sizes
    /// differ, [`Error::DimensionError`] for fewer than two elements, and
    /// [`Error::EmptyOperand`] when either is the zero vector.
    ///
    /// ```
    /// use gridlin::{Scalar, Sequence};
    /// let a = Sequence::from_reals(&[1.0, 0.0]);
    /// let b = Sequence::from_reals(&[1.0, 1.0]);
    /// let cos = a.cosine(&b).unwrap();
    /// assert!(cos.approx_eq(Scalar::real(0.5_f64.sqrt()), 12));
    /// ```
    pub fn cosine(&self, other: &Sequence) -> Result<Scalar> {
        self.check_size(other)?;
        if self.size() < 2 {
            return Err(Error::DimensionError);
        }
        let norms = self.euclidean_norm() * other.euclidean_norm();
        if norms == 0.0 {
            return Err(Error::EmptyOperand);
        }
        dot_unchecked(self, other, Scalar::conjugate).divide(Scalar::real(norms))
    }
}
