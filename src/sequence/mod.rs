mod norm;
mod product;

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;

use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::scalar::{self, Scalar};

#[cfg(feature = "rand")]
use crate::scalar::ScalarKind;

/// Fixed-length ordered list of [`Scalar`]s.
///
/// Every operation returns a new sequence; operands are never modified.
/// A size of zero is valid and denotes the empty vector.
///
/// # Examples
///
/// ```
/// use gridlin::{Scalar, Sequence};
///
/// let a = Sequence::from_reals(&[1.0, 2.0, 3.0]);
/// let b = Sequence::new(vec![Scalar::I, Scalar::ONE, Scalar::ZERO]);
/// let s = a.add(&b).unwrap();
/// assert_eq!(s[0], Scalar::new(1.0, 1.0));
/// assert_eq!(s.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sequence {
    pub(crate) data: Vec<Scalar>,
}

impl Sequence {
    /// Wrap a vector of scalars.
    pub fn new(data: Vec<Scalar>) -> Self {
        Self { data }
    }

    /// Sequence of purely real scalars.
    ///
    /// ```
    /// use gridlin::{Scalar, Sequence};
    /// let v = Sequence::from_reals(&[2.0, -0.5]);
    /// assert_eq!(v[1], Scalar::real(-0.5));
    /// ```
    pub fn from_reals(values: &[f64]) -> Self {
        values.iter().map(|&x| Scalar::real(x)).collect()
    }

    /// Sequence of `n` zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![Scalar::ZERO; n],
        }
    }

    /// Number of elements.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Whether the sequence has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    /// Iterate over the elements by value.
    pub fn iter(&self) -> impl Iterator<Item = Scalar> + '_ {
        self.data.iter().copied()
    }

    /// Consume the sequence, returning its elements.
    pub fn into_vec(self) -> Vec<Scalar> {
        self.data
    }

    fn check_size(&self, other: &Sequence) -> Result<()> {
        if self.size() != other.size() {
            return Err(Error::ShapeMismatch);
        }
        Ok(())
    }

    fn zip_with(&self, other: &Sequence, f: impl Fn(Scalar, Scalar) -> Scalar) -> Result<Self> {
        self.check_size(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| f(a, b))
            .collect())
    }
}

// ── Element-wise arithmetic ─────────────────────────────────────────

impl Sequence {
    /// Element-wise sum. [`Error::ShapeMismatch`] when sizes differ.
    pub fn add(&self, other: &Sequence) -> Result<Self> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference. [`Error::ShapeMismatch`] when sizes differ.
    pub fn subtract(&self, other: &Sequence) -> Result<Self> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Multiply every element by `k`.
    ///
    /// ```
    /// use gridlin::{Scalar, Sequence};
    /// let v = Sequence::from_reals(&[1.0, -2.0]).scale(Scalar::I);
    /// assert_eq!(v, Sequence::new(vec![Scalar::I, Scalar::imaginary(-2.0)]));
    /// ```
    pub fn scale(&self, k: Scalar) -> Self {
        self.iter().map(|x| x * k).collect()
    }

    /// Divide every element by `k`; [`Error::DivideByZero`] when `k` is zero.
    pub fn divide(&self, k: Scalar) -> Result<Self> {
        if k.is_zero() {
            return Err(Error::DivideByZero);
        }
        self.iter().map(|x| x.divide(k)).collect()
    }

    /// Conjugate every element.
    pub fn conjugate(&self) -> Self {
        self.iter().map(Scalar::conjugate).collect()
    }

    /// Element-wise comparison to `precision` decimals.
    ///
    /// [`Error::ShapeMismatch`] when sizes differ; `==` returns `false`
    /// instead.
    pub fn equals(&self, other: &Sequence, precision: u32) -> Result<bool> {
        self.check_size(other)?;
        Ok(self
            .iter()
            .zip(other.iter())
            .all(|(a, b)| a.approx_eq(b, precision)))
    }

    /// Product of all elements. [`Error::EmptyOperand`] on an empty sequence.
    ///
    /// ```
    /// use gridlin::{Scalar, Sequence};
    /// let v = Sequence::new(vec![Scalar::I, Scalar::I, Scalar::real(3.0)]);
    /// assert_eq!(v.product_reduce().unwrap(), Scalar::real(-3.0));
    /// ```
    pub fn product_reduce(&self) -> Result<Scalar> {
        if self.is_empty() {
            return Err(Error::EmptyOperand);
        }
        Ok(self.iter().product())
    }

    /// Element-wise interpolation `a + (b - a)·t`.
    ///
    /// The factor is validated before the sizes, so an invalid `t` fails
    /// even for empty operands.
    pub fn linear_interpolation(a: &Sequence, b: &Sequence, t: Scalar) -> Result<Self> {
        scalar::check_factor(t)?;
        a.zip_with(b, |x, y| x + (y - x) * t)
    }
}

// ── Reshaping ───────────────────────────────────────────────────────

impl Sequence {
    /// Row-major reshape into a `rows × columns` grid.
    ///
    /// [`Error::DimensionError`] if either dimension is zero or
    /// `rows * columns` differs from the size.
    ///
    /// ```
    /// use gridlin::{Scalar, Sequence};
    /// let g = Sequence::from_reals(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).to_grid(2, 3).unwrap();
    /// assert_eq!(g.shape(), (2, 3));
    /// assert_eq!(g[(1, 0)], Scalar::real(4.0));
    /// ```
    pub fn to_grid(&self, rows: usize, columns: usize) -> Result<Grid> {
        if rows == 0 || columns == 0 || rows.checked_mul(columns) != Some(self.size()) {
            return Err(Error::DimensionError);
        }
        let rows = self
            .data
            .chunks(columns)
            .map(|chunk| Sequence::new(chunk.to_vec()))
            .collect();
        Ok(Grid::from_rows_unchecked(rows, columns))
    }
}

// ── Random ──────────────────────────────────────────────────────────

#[cfg(feature = "rand")]
impl Sequence {
    /// Random sequence of `size` scalars of the given kind.
    ///
    /// [`Error::DimensionError`] when `size` is zero.
    pub fn random<R: rand::Rng + ?Sized>(size: usize, kind: ScalarKind, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(Error::DimensionError);
        }
        Ok((0..size).map(|_| Scalar::random(kind, rng)).collect())
    }
}

// ── Conversions / Index ─────────────────────────────────────────────

impl Index<usize> for Sequence {
    type Output = Scalar;

    #[inline]
    fn index(&self, i: usize) -> &Scalar {
        &self.data[i]
    }
}

impl FromIterator<Scalar> for Sequence {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Scalar>> for Sequence {
    fn from(data: Vec<Scalar>) -> Self {
        Self { data }
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Scalar;
    type IntoIter = core::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, x) in self.data.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}
