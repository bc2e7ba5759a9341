use crate::errors::Result;
use crate::variable::DesignSpace;
use crate::SamplingMethod;
use linfa::Float;
use ndarray::{Array, Array2};
use ndarray_rand::{rand::Rng, rand::SeedableRng, rand_distr::Uniform, RandomExt};
use rand_xoshiro::Xoshiro256Plus;

/// The Random design consists in drawing samples independently and
/// uniformly within each variable's bounds.
///
/// Importance weights and the grid play no role: points are i.i.d., making
/// this the fast unweighted baseline with no combinatorial cost. Given a
/// seeded generator the output is reproducible; the default generator is
/// seeded from entropy and each call yields a fresh sample set.
///
/// ```
/// use spacefilling::{DesignSpace, Random, SamplingMethod, Variable};
/// use ndarray_rand::rand::SeedableRng;
/// use rand_xoshiro::Xoshiro256Plus;
///
/// let space = DesignSpace::new(vec![Variable::new("x", 5.0, 10.0)]).unwrap();
/// let doe = Random::new(&space)
///     .with_rng(Xoshiro256Plus::seed_from_u64(42))
///     .sample(9)
///     .unwrap();
/// assert_eq!(doe.nrows(), 9);
/// ```
pub struct Random<F: Float, R: Rng + Clone> {
    /// Sampling space definition as a (nx, 2) matrix
    /// The ith row is the [lower_bound, upper_bound] of xi, the ith component of x
    xlimits: Array2<F>,
    /// Random generator used for reproducibility
    rng: R,
}

impl<F: Float> Random<F, Xoshiro256Plus> {
    /// Constructor given a design space, with an entropy-seeded generator
    pub fn new(space: &DesignSpace<F>) -> Self {
        Self::new_with_rng(space, Xoshiro256Plus::from_entropy())
    }
}

impl<F: Float, R: Rng + Clone> Random<F, R> {
    /// Constructor given a design space and a random generator for reproducibility
    pub fn new_with_rng(space: &DesignSpace<F>, rng: R) -> Self {
        Random {
            xlimits: space.xlimits(),
            rng,
        }
    }

    /// Sets the random generator
    pub fn with_rng<R2: Rng + Clone>(self, rng: R2) -> Random<F, R2> {
        Random {
            xlimits: self.xlimits,
            rng,
        }
    }
}

impl<F: Float, R: Rng + Clone> SamplingMethod<F> for Random<F, R> {
    fn sampling_space(&self) -> &Array2<F> {
        &self.xlimits
    }

    fn normalized_sample(&self, ns: usize) -> Result<Array2<F>> {
        let mut rng = self.rng.clone();
        let nx = self.xlimits.nrows();
        Ok(Array::random_using((ns, nx), Uniform::new(0., 1.), &mut rng).mapv(|v| F::cast(v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variable::Variable;

    fn space() -> DesignSpace<f64> {
        DesignSpace::new(vec![
            Variable::new("a", 5., 10.),
            Variable::new("b", 0., 1.),
        ])
        .unwrap()
    }

    #[test]
    fn test_random_shape_and_bounds() {
        let doe = Random::new(&space()).sample(100).unwrap();
        assert_eq!(doe.dim(), (100, 2));
        for row in doe.rows() {
            assert!(row[0] >= 5. && row[0] <= 10.);
            assert!(row[1] >= 0. && row[1] <= 1.);
        }
    }

    #[test]
    fn test_random_seeded_reproducibility() {
        let first = Random::new(&space())
            .with_rng(Xoshiro256Plus::seed_from_u64(42))
            .sample(9)
            .unwrap();
        let second = Random::new(&space())
            .with_rng(Xoshiro256Plus::seed_from_u64(42))
            .sample(9)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_seeds_differ() {
        let first = Random::new(&space())
            .with_rng(Xoshiro256Plus::seed_from_u64(0))
            .sample(9)
            .unwrap();
        let second = Random::new(&space())
            .with_rng(Xoshiro256Plus::seed_from_u64(1))
            .sample(9)
            .unwrap();
        assert_ne!(first, second);
    }
}
