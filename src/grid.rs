use crate::errors::{DoeError, Result};
use linfa::Float;
use ndarray::{s, Array1, Array2};

/// Default ceiling on the number of enumerated candidate points.
///
/// The candidate space of a grid with `g` levels over `nx` variables holds
/// `g^nx` points, so it outgrows any ceiling quickly as `nx` increases:
/// callers hitting [DoeError::ResourceExceeded] should reduce the variable
/// count, the resolution or the ceiling-driving sample count.
pub const DEFAULT_MAX_CANDIDATES: usize = 1_000_000;

/// Returns `resolution` evenly spaced levels over `[lower, upper]`,
/// both endpoints included.
///
/// Fails with [DoeError::InvalidConfiguration] if `resolution < 2` or
/// `lower > upper`.
///
/// ```
/// use spacefilling::grid_levels;
///
/// let levels = grid_levels(1.0, 6.0, 5).unwrap();
/// assert_eq!(levels.len(), 5);
/// assert_eq!(levels[2], 3.5);
/// ```
pub fn grid_levels<F: Float>(lower: F, upper: F, resolution: usize) -> Result<Array1<F>> {
    if resolution < 2 {
        return Err(DoeError::InvalidConfiguration(format!(
            "grid resolution must be at least 2, got {resolution}"
        )));
    }
    if lower > upper {
        return Err(DoeError::InvalidConfiguration(format!(
            "grid lower bound {lower} exceeds upper bound {upper}"
        )));
    }
    let span = upper - lower;
    let last = F::cast(resolution - 1);
    Ok(Array1::from_shape_fn(resolution, |k| {
        lower + span * (F::cast(k) / last)
    }))
}

/// The enumerated candidate space of the maxmin selection: the full
/// Cartesian product of one evenly spaced grid per variable, held in
/// normalized coordinates.
///
/// Points are ordered lexicographically over variable order then level
/// index, the first variable varying slowest. The order is part of the
/// contract: selection tie-breaks resolve to the first enumerated point,
/// which keeps the whole maxmin path reproducible.
#[derive(Debug)]
pub struct CandidateGrid<F: Float> {
    /// (n_points, nx) matrix of candidates within `[0., 1.]^nx`
    points: Array2<F>,
}

impl<F: Float> CandidateGrid<F> {
    /// Enumerates the `resolution^nx` candidates of a `nx`-dimensional grid.
    ///
    /// The space size is checked against `max_points` before anything is
    /// allocated; an oversized request fails with [DoeError::ResourceExceeded]
    /// carrying the computed size and the ceiling.
    pub fn new(nx: usize, resolution: usize, max_points: usize) -> Result<Self> {
        if nx == 0 {
            return Err(DoeError::InvalidConfiguration(
                "candidate grid needs at least one dimension".to_string(),
            ));
        }
        if resolution < 2 {
            return Err(DoeError::InvalidConfiguration(format!(
                "grid resolution must be at least 2, got {resolution}"
            )));
        }
        let size = (resolution as u128)
            .checked_pow(nx as u32)
            .unwrap_or(u128::MAX);
        if size > max_points as u128 {
            return Err(DoeError::ResourceExceeded {
                size,
                limit: max_points,
            });
        }
        let n_points = size as usize;
        let levels = grid_levels(F::zero(), F::one(), resolution)?;

        let mut points = Array2::<F>::zeros((n_points, nx));
        let mut level_repeat = n_points;
        let mut range_repeat = 1;
        for j in 0..nx {
            level_repeat /= resolution;
            let mut chunk = Array1::zeros(level_repeat * resolution);
            for (i, &level) in levels.iter().enumerate() {
                chunk
                    .slice_mut(s![i * level_repeat..(i + 1) * level_repeat])
                    .assign(&Array1::from_elem(level_repeat, level));
            }
            for k in 0..range_repeat {
                points
                    .slice_mut(s![
                        resolution * level_repeat * k..resolution * level_repeat * (k + 1),
                        j
                    ])
                    .assign(&chunk);
            }
            range_repeat *= resolution;
        }
        Ok(CandidateGrid { points })
    }

    /// The candidates as a (n_points, nx) matrix in `[0., 1.]^nx`
    pub fn points(&self) -> &Array2<F> {
        &self.points
    }

    /// Number of enumerated candidates
    pub fn n_points(&self) -> usize {
        self.points.nrows()
    }

    /// Dimension of the candidate space
    pub fn nx(&self) -> usize {
        self.points.ncols()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_grid_levels() {
        let expected = array![1., 2.25, 3.5, 4.75, 6.];
        let actual = grid_levels(1., 6., 5).unwrap();
        assert_abs_diff_eq!(expected, actual, epsilon = 1e-9);
    }

    #[test]
    fn test_grid_levels_endpoints_exact() {
        let levels = grid_levels(0.1_f64, 0.7, 7).unwrap();
        assert_eq!(levels[0], 0.1);
        assert_eq!(levels[6], 0.7);
    }

    #[test]
    fn test_grid_levels_bad_resolution() {
        assert!(matches!(
            grid_levels(0., 1., 1),
            Err(DoeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            grid_levels(0., 1., 0),
            Err(DoeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_grid_levels_inverted_bounds() {
        assert!(matches!(
            grid_levels(2., 1., 5),
            Err(DoeError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_enumeration_order() {
        // first variable varies slowest, levels in increasing order
        let expected = array![
            [0., 0.],
            [0., 0.5],
            [0., 1.],
            [0.5, 0.],
            [0.5, 0.5],
            [0.5, 1.],
            [1., 0.],
            [1., 0.5],
            [1., 1.],
        ];
        let grid = CandidateGrid::new(2, 3, DEFAULT_MAX_CANDIDATES).unwrap();
        assert_abs_diff_eq!(expected, grid.points().to_owned(), epsilon = 1e-9);
        assert_eq!(grid.n_points(), 9);
        assert_eq!(grid.nx(), 2);
    }

    #[test]
    fn test_space_too_large() {
        let err = CandidateGrid::<f64>::new(8, 10, DEFAULT_MAX_CANDIDATES).unwrap_err();
        match err {
            DoeError::ResourceExceeded { size, limit } => {
                assert_eq!(size, 100_000_000);
                assert_eq!(limit, 1_000_000);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_space_size_overflow() {
        // 10^64 overflows even u128; the size check must still trip
        let err = CandidateGrid::<f64>::new(64, 10, DEFAULT_MAX_CANDIDATES).unwrap_err();
        assert!(matches!(err, DoeError::ResourceExceeded { .. }));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            CandidateGrid::<f64>::new(0, 5, DEFAULT_MAX_CANDIDATES),
            Err(DoeError::InvalidConfiguration(_))
        ));
    }
}
