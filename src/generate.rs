use crate::errors::{DoeError, Result};
use crate::maxmin::Maxmin;
use crate::random::Random;
use crate::variable::DesignSpace;
use crate::SamplingMethod;
use linfa::Float;
use ndarray::{Array2, Axis};
use ndarray_rand::rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serializable")]
use serde::{Deserialize, Serialize};

/// Sample generation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Independent uniform random draws within bounds
    Uniform,
    /// Greedy maximin selection over a full-factorial grid
    Maxmin,
}

impl FromStr for Mode {
    type Err = DoeError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "uniform" => Ok(Mode::Uniform),
            "maxmin" => Ok(Mode::Maxmin),
            other => Err(DoeError::InvalidConfiguration(format!(
                "unknown mode '{other}'"
            ))),
        }
    }
}

/// A generated experiment table: one row per sample point, one column per
/// variable, labeled by the variable identifiers in design-space order.
///
/// Maxmin rows come in selection order, so any prefix of the table is
/// itself a space-filling design. The [fmt::Display] implementation renders
/// the table with two-decimal cells under the identifier header.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serializable", derive(Serialize, Deserialize))]
pub struct SampleSet<F: Float> {
    ids: Vec<String>,
    values: Array2<F>,
}

impl<F: Float> SampleSet<F> {
    /// Variable identifiers, the column labels
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Sample values as a (n_samples, nx) matrix
    pub fn values(&self) -> &Array2<F> {
        &self.values
    }

    /// Number of sample points
    pub fn n_samples(&self) -> usize {
        self.values.nrows()
    }

    /// Iterates over sample points as `(identifier, value)` pairs in
    /// variable order
    pub fn rows(&self) -> impl Iterator<Item = Vec<(&str, F)>> + '_ {
        self.values.axis_iter(Axis(0)).map(move |row| {
            self.ids
                .iter()
                .map(String::as_str)
                .zip(row.iter().copied())
                .collect()
        })
    }
}

impl<F: Float> fmt::Display for SampleSet<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = self.ids.iter().map(|id| id.len().max(8)).collect();
        for (id, &width) in self.ids.iter().zip(&widths) {
            write!(f, " {id:>width$}")?;
        }
        writeln!(f)?;
        for row in self.values.rows() {
            for (value, &width) in row.iter().zip(&widths) {
                write!(f, " {value:>width$.2}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Generates an experiment table for the given design space.
///
/// The single entry point of the library: validates the request, builds the
/// candidate space when needed and runs the requested sampler.
///
/// * `mode`: [Mode::Uniform] draws `sample_count` i.i.d. points;
///   [Mode::Maxmin] selects `min(sample_count, grid size)` points from the
///   `grid_resolution`-level full-factorial grid by greedy maximin.
/// * `grid_resolution` is only used (and only validated) in maxmin mode.
///
/// Uniform draws come from an entropy-seeded generator; use
/// [generate_with_rng] for reproducible uniform sampling. Maxmin output is
/// deterministic either way.
///
/// Fails with [DoeError::InvalidConfiguration] on a zero sample count, a
/// maxmin resolution below 2 or an invalid design space, and with
/// [DoeError::ResourceExceeded] when the maxmin candidate space outgrows
/// [crate::DEFAULT_MAX_CANDIDATES] (use [Maxmin] directly to adjust the
/// ceiling).
///
/// ```
/// use spacefilling::{generate, DesignSpace, Mode, Variable};
///
/// let space = DesignSpace::new(vec![
///     Variable::new("h2o", 1.0, 6.0),
///     Variable::new("temperature", 100.0, 200.0).with_weight(2.0),
/// ]).unwrap();
/// let table = generate(Mode::Maxmin, &space, 10, 5).unwrap();
/// assert_eq!(table.n_samples(), 10);
/// ```
pub fn generate<F: Float>(
    mode: Mode,
    space: &DesignSpace<F>,
    sample_count: usize,
    grid_resolution: usize,
) -> Result<SampleSet<F>> {
    generate_with_rng(
        mode,
        space,
        sample_count,
        grid_resolution,
        Xoshiro256Plus::from_entropy(),
    )
}

/// Same as [generate], with the random generator used by uniform mode
/// supplied by the caller (maxmin mode ignores it).
pub fn generate_with_rng<F: Float, R: Rng + Clone>(
    mode: Mode,
    space: &DesignSpace<F>,
    sample_count: usize,
    grid_resolution: usize,
    rng: R,
) -> Result<SampleSet<F>> {
    if sample_count < 1 {
        return Err(DoeError::InvalidConfiguration(
            "sample count must be at least 1".to_string(),
        ));
    }
    let values = match mode {
        Mode::Uniform => Random::new_with_rng(space, rng).sample(sample_count)?,
        Mode::Maxmin => Maxmin::new(space)
            .resolution(grid_resolution)
            .sample(sample_count)?,
    };
    Ok(SampleSet {
        ids: space.ids().iter().map(|id| id.to_string()).collect(),
        values,
    })
}


#[cfg(all(test, feature = "serializable"))]
mod serde_tests {
    use super::*;
    use crate::variable::Variable;

    #[test]
    fn test_sample_set_json() {
        let space = DesignSpace::new(vec![Variable::new("x", 0., 1.)]).unwrap();
        let table = generate(Mode::Maxmin, &space, 2, 3).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let back: SampleSet<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(table, back);
    }
}
