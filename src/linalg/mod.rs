//! Gaussian elimination engines.
//!
//! Free functions operate in place on an owned [`Grid`](crate::Grid); the
//! `Grid` methods ([`reduced_row_echelon_form`](crate::Grid::reduced_row_echelon_form),
//! [`triangulation`](crate::Grid::triangulation), [`rank`](crate::Grid::rank),
//! [`determinant`](crate::Grid::determinant), [`inverse`](crate::Grid::inverse))
//! clone their receiver and delegate here.

pub(crate) mod rref;
pub(crate) mod triangulate;

pub use rref::rref_in_place;
pub use triangulate::{triangulate_in_place, Triangulation};
