use core::fmt;
use core::str::FromStr;

use crate::error::Error;

#[cfg(feature = "rand")]
use super::Scalar;
#[cfg(feature = "rand")]
use num_traits::Float;
#[cfg(feature = "rand")]
use rand::Rng;

/// Kind of value produced by the random fixture generators.
///
/// Integer kinds draw `±floor(u·100)`, decimal kinds `±u·100` with `u`
/// uniform in `[0, 1)`. Real and imaginary parts get independent signs.
///
/// ```
/// use gridlin::{Error, ScalarKind};
///
/// let kind: ScalarKind = "complex-decimal".parse().unwrap();
/// assert_eq!(kind, ScalarKind::ComplexDecimal);
/// assert_eq!("octonion".parse::<ScalarKind>(), Err(Error::InvalidOperand));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScalarKind {
    /// Signed integer real part, zero imaginary part.
    #[default]
    Natural,
    /// Signed decimal real part.
    Real,
    /// Signed integer imaginary part, zero real part.
    ImaginaryInteger,
    /// Signed decimal imaginary part.
    ImaginaryDecimal,
    /// Signed integer real and imaginary parts.
    ComplexInteger,
    /// Signed decimal real and imaginary parts.
    ComplexDecimal,
}

impl ScalarKind {
    /// Every kind, in declaration order.
    pub const ALL: [ScalarKind; 6] = [
        ScalarKind::Natural,
        ScalarKind::Real,
        ScalarKind::ImaginaryInteger,
        ScalarKind::ImaginaryDecimal,
        ScalarKind::ComplexInteger,
        ScalarKind::ComplexDecimal,
    ];

    /// Kebab-case selector name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Natural => "natural",
            Self::Real => "real",
            Self::ImaginaryInteger => "imaginary-integer",
            Self::ImaginaryDecimal => "imaginary-decimal",
            Self::ComplexInteger => "complex-integer",
            Self::ComplexDecimal => "complex-decimal",
        }
    }
}

impl FromStr for ScalarKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        ScalarKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or(Error::InvalidOperand)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Random generation ───────────────────────────────────────────────

#[cfg(feature = "rand")]
fn sign<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    if rng.random_bool(0.5) {
        -1.0
    } else {
        1.0
    }
}

#[cfg(feature = "rand")]
fn integer<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    Float::floor(rng.random::<f64>() * 100.0)
}

#[cfg(feature = "rand")]
fn decimal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>() * 100.0
}

#[cfg(feature = "rand")]
impl Scalar {
    /// Random scalar of the given kind, for test fixtures.
    ///
    /// ```
    /// use gridlin::{Scalar, ScalarKind};
    /// use rand::SeedableRng;
    ///
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    /// let z = Scalar::random(ScalarKind::ImaginaryInteger, &mut rng);
    /// assert_eq!(z.re(), 0.0);
    /// assert_eq!(z.im().fract(), 0.0);
    /// ```
    pub fn random<R: Rng + ?Sized>(kind: ScalarKind, rng: &mut R) -> Scalar {
        let sign_re = sign(rng);
        let sign_im = sign(rng);
        match kind {
            ScalarKind::Natural => Scalar::real(sign_re * integer(rng)),
            ScalarKind::Real => Scalar::real(sign_re * decimal(rng)),
            ScalarKind::ImaginaryInteger => Scalar::imaginary(sign_im * integer(rng)),
            ScalarKind::ImaginaryDecimal => Scalar::imaginary(sign_im * decimal(rng)),
            ScalarKind::ComplexInteger => {
                let re = sign_re * integer(rng);
                Scalar::new(re, sign_im * integer(rng))
            }
            ScalarKind::ComplexDecimal => {
                let re = sign_re * decimal(rng);
                Scalar::new(re, sign_im * decimal(rng))
            }
        }
    }
}
