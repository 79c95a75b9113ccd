mod ops;
mod square;
mod util;

use alloc::vec::Vec;
use core::ops::Index;

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::sequence::Sequence;

#[cfg(feature = "rand")]
use crate::scalar::ScalarKind;

/// Row-major matrix of [`Scalar`]s: an ordered list of equal-length
/// [`Sequence`]s.
///
/// Zero rows, or rows of size zero, denote the empty matrix. Every
/// operation returns a new grid and leaves its operands untouched; the
/// elimination routines work on a private clone.
///
/// # Examples
///
/// ```
/// use gridlin::{Grid, Scalar, Sequence};
///
/// let a = Grid::from_reals(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a.shape(), (2, 2));
/// assert_eq!(a[(1, 0)], Scalar::real(3.0));
///
/// let b = Grid::new(vec![
///     Sequence::new(vec![Scalar::I, Scalar::ZERO]),
///     Sequence::new(vec![Scalar::ZERO, Scalar::I]),
/// ])
/// .unwrap();
/// assert_eq!(a.multiply_matrix(&b).unwrap()[(0, 1)], Scalar::imaginary(2.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    pub(crate) rows: Vec<Sequence>,
    pub(crate) ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl Grid {
    /// Build a grid from its rows.
    ///
    /// [`Error::ShapeMismatch`] when the rows differ in size.
    ///
    /// ```
    /// use gridlin::{Error, Grid, Sequence};
    /// let ragged = Grid::new(vec![Sequence::from_reals(&[1.0]), Sequence::from_reals(&[1.0, 2.0])]);
    /// assert_eq!(ragged, Err(Error::ShapeMismatch));
    /// ```
    pub fn new(rows: Vec<Sequence>) -> Result<Self> {
        let ncols = rows.first().map_or(0, Sequence::size);
        if rows.iter().any(|row| row.size() != ncols) {
            return Err(Error::ShapeMismatch);
        }
        Ok(Self { rows, ncols })
    }

    pub(crate) fn from_rows_unchecked(rows: Vec<Sequence>, ncols: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.size() == ncols));
        Self { rows, ncols }
    }

    /// Build a `rows × columns` grid of real scalars from row-major values.
    ///
    /// [`Error::DimensionError`] when `values.len() != rows * columns`.
    pub fn from_reals(rows: usize, columns: usize, values: &[f64]) -> Result<Self> {
        if rows.checked_mul(columns) != Some(values.len()) {
            return Err(Error::DimensionError);
        }
        let data = (0..rows)
            .map(|i| Sequence::from_reals(&values[i * columns..(i + 1) * columns]))
            .collect();
        Ok(Self::from_rows_unchecked(data, columns))
    }

    /// Create a `rows × columns` grid from `f(row, col)`.
    ///
    /// ```
    /// use gridlin::{Grid, Scalar};
    /// let g = Grid::from_fn(2, 3, |i, j| Scalar::new(i as f64, j as f64));
    /// assert_eq!(g[(1, 2)], Scalar::new(1.0, 2.0));
    /// ```
    pub fn from_fn(rows: usize, columns: usize, f: impl Fn(usize, usize) -> Scalar) -> Self {
        let data = (0..rows)
            .map(|i| (0..columns).map(|j| f(i, j)).collect::<Sequence>())
            .collect();
        Self::from_rows_unchecked(data, columns)
    }

    /// `rows × columns` grid of zeros.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        let data = (0..rows).map(|_| Sequence::zeros(columns)).collect();
        Self::from_rows_unchecked(data, columns)
    }

    /// `n × n` identity.
    ///
    /// ```
    /// use gridlin::{Grid, Scalar};
    /// let id = Grid::identity(3);
    /// assert_eq!(id[(1, 1)], Scalar::ONE);
    /// assert_eq!(id[(1, 2)], Scalar::ZERO);
    /// ```
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { Scalar::ONE } else { Scalar::ZERO })
    }
}

#[cfg(feature = "rand")]
impl Grid {
    /// Random `rows × columns` grid of the given kind.
    ///
    /// [`Error::DimensionError`] when either dimension is zero.
    ///
    /// ```
    /// use gridlin::{Grid, ScalarKind};
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    /// let g = Grid::random(2, 4, ScalarKind::Real, &mut rng).unwrap();
    /// assert_eq!(g.shape(), (2, 4));
    /// ```
    pub fn random<R: rand::Rng + ?Sized>(
        rows: usize,
        columns: usize,
        kind: ScalarKind,
        rng: &mut R,
    ) -> Result<Self> {
        if rows == 0 || columns == 0 {
            return Err(Error::DimensionError);
        }
        let data = (0..rows)
            .map(|_| Sequence::random(columns, kind, rng))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_rows_unchecked(data, columns))
    }
}

// ── Shape / access ──────────────────────────────────────────────────

impl Grid {
    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> usize {
        self.ncols
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows(), self.ncols)
    }

    /// Same number of rows and columns.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows() == self.ncols
    }

    /// No rows, or rows of size zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows() == 0 || self.ncols == 0
    }

    /// Row `i`. [`Error::OutOfRange`] past the last row.
    pub fn row(&self, i: usize) -> Result<&Sequence> {
        self.rows.get(i).ok_or(Error::OutOfRange)
    }

    /// Column `j` as a new sequence. [`Error::OutOfRange`] past the last column.
    pub fn column(&self, j: usize) -> Result<Sequence> {
        if j >= self.ncols {
            return Err(Error::OutOfRange);
        }
        Ok(self.rows.iter().map(|row| row[j]).collect())
    }

    /// Iterate over the rows.
    pub fn iter_rows(&self) -> impl Iterator<Item = &Sequence> + '_ {
        self.rows.iter()
    }

    #[inline]
    pub(crate) fn set(&mut self, i: usize, j: usize, value: Scalar) {
        self.rows[i].data[j] = value;
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Scalar;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &Scalar {
        &self.rows[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn new_rejects_ragged() {
        let rows = vec![Sequence::from_reals(&[1.0, 2.0]), Sequence::from_reals(&[3.0])];
        assert_eq!(Grid::new(rows), Err(Error::ShapeMismatch));
    }

    #[test]
    fn empty_grids() {
        let none = Grid::new(vec![]).unwrap();
        assert_eq!(none.shape(), (0, 0));
        assert!(none.is_empty());

        let hollow = Grid::zeros(3, 0);
        assert_eq!(hollow.shape(), (3, 0));
        assert!(hollow.is_empty());
        assert!(!hollow.is_square());
    }

    #[test]
    fn from_reals() {
        let g = Grid::from_reals(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(g.shape(), (2, 3));
        assert_eq!(g[(0, 2)], Scalar::real(3.0));
        assert_eq!(g[(1, 0)], Scalar::real(4.0));
        assert_eq!(Grid::from_reals(2, 2, &[1.0]), Err(Error::DimensionError));
    }

    #[test]
    fn from_reals_overflowing_dimensions() {
        assert_eq!(Grid::from_reals(usize::MAX, 2, &[]), Err(Error::DimensionError));
        // Wraps to zero without the checked product
        assert_eq!(Grid::from_reals(usize::MAX / 2 + 1, 2, &[]), Err(Error::DimensionError));
    }

    #[test]
    fn identity_and_zeros() {
        let id = Grid::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { Scalar::ONE } else { Scalar::ZERO };
                assert_eq!(id[(i, j)], expected);
            }
        }
        let z = Grid::zeros(2, 4);
        assert!(z.iter_rows().all(|r| r.iter().all(Scalar::is_zero)));
    }

    #[test]
    fn row_and_column() {
        let g = Grid::from_reals(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(g.row(1).unwrap(), &Sequence::from_reals(&[3.0, 4.0]));
        assert_eq!(g.column(1).unwrap(), Sequence::from_reals(&[2.0, 4.0]));
        assert_eq!(g.row(2), Err(Error::OutOfRange));
        assert_eq!(g.column(2), Err(Error::OutOfRange));
    }

    #[cfg(feature = "rand")]
    #[test]
    fn random() {
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(11);
        let g = Grid::random(3, 2, ScalarKind::ComplexDecimal, &mut rng).unwrap();
        assert_eq!(g.shape(), (3, 2));
        assert_eq!(Grid::random(0, 2, ScalarKind::Natural, &mut rng), Err(Error::DimensionError));
        assert_eq!(Grid::random(2, 0, ScalarKind::Natural, &mut rng), Err(Error::DimensionError));
    }
}
