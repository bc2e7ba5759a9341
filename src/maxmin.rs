use crate::errors::Result;
use crate::grid::{CandidateGrid, DEFAULT_MAX_CANDIDATES};
use crate::utils::{cdist, scale_columns};
use crate::variable::DesignSpace;
use crate::SamplingMethod;
use linfa::Float;
use log::debug;
use ndarray::{s, Array1, Array2, ArrayBase, Axis, Data, Ix2};
use ndarray_stats::DeviationExt;
use rayon::prelude::*;

/// Default number of grid levels per dimension.
pub const DEFAULT_RESOLUTION: usize = 5;

/// The Maxmin design selects points from a full-factorial candidate grid,
/// greedily maximizing the minimum pairwise importance-weighted distance
/// of the selected set (the maximin space-filling criterion).
///
/// The exact maximin optimum is a combinatorial problem, NP-hard in
/// general; this sampler uses the deterministic greedy farthest-point
/// approximation instead:
/// 1. start from the candidate farthest from the candidate-space centroid,
/// 2. repeatedly add the candidate whose minimum weighted distance to the
///    already selected points is largest,
/// 3. ties resolve to the first candidate in enumeration order.
///
/// Points are returned in selection order, so a returned design prefix is
/// itself a space-filling design. Requests larger than the candidate space
/// are clamped: the whole space is returned. The output is a pure function
/// of the design space and resolution; repeated calls yield identical
/// designs.
///
/// Cost is O(ns * resolution^nx) distance evaluations. The candidate space
/// is capped ([Maxmin::max_candidates], default [DEFAULT_MAX_CANDIDATES])
/// and enumeration fails with [crate::DoeError::ResourceExceeded] beyond
/// the cap, rather than truncating variables silently.
///
/// ```
/// use spacefilling::{DesignSpace, Maxmin, SamplingMethod, Variable};
///
/// let space = DesignSpace::new(vec![Variable::new("h2o", 1.0, 6.0)]).unwrap();
/// let doe = Maxmin::new(&space).resolution(5).sample(3).unwrap();
/// // extremes first, then the midpoint
/// assert_eq!(doe.column(0).to_vec(), vec![1.0, 6.0, 3.5]);
/// ```
pub struct Maxmin<F: Float> {
    /// Sampling space definition as a (nx, 2) matrix
    xlimits: Array2<F>,
    /// Importance weights aligned with the variable order
    weights: Array1<F>,
    /// Number of grid levels per dimension
    resolution: usize,
    /// Ceiling on the candidate space size
    max_candidates: usize,
}

impl<F: Float> Maxmin<F> {
    /// Constructor given the design space, with [DEFAULT_RESOLUTION] levels
    /// per dimension and the [DEFAULT_MAX_CANDIDATES] candidate ceiling.
    pub fn new(space: &DesignSpace<F>) -> Self {
        Maxmin {
            xlimits: space.xlimits(),
            weights: space.weights(),
            resolution: DEFAULT_RESOLUTION,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Sets the number of grid levels per dimension (must be at least 2)
    pub fn resolution(mut self, resolution: usize) -> Self {
        self.resolution = resolution;
        self
    }

    /// Sets the ceiling on the candidate space size
    pub fn max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }
}

impl<F: Float> SamplingMethod<F> for Maxmin<F> {
    fn sampling_space(&self) -> &Array2<F> {
        &self.xlimits
    }

    fn normalized_sample(&self, ns: usize) -> Result<Array2<F>> {
        let nx = self.xlimits.nrows();
        let grid = CandidateGrid::new(nx, self.resolution, self.max_candidates)?;

        // Weighted distances are evaluated in normalized space: scaling each
        // normalized axis by weight * span makes them equal to the weighted
        // distances over the actual bounds.
        let spans = &self.xlimits.column(1) - &self.xlimits.column(0);
        let eff_weights = &self.weights * &spans;
        let scaled = scale_columns(grid.points(), &eff_weights);

        let take = ns.min(grid.n_points());
        debug!(
            "maxmin selection of {} points among {} candidates ({} levels per dimension)",
            take,
            grid.n_points(),
            self.resolution
        );
        let selection = select_greedy(&scaled, take);

        let mut doe = Array2::zeros((selection.len(), nx));
        for (row, &chosen) in selection.iter().enumerate() {
            doe.row_mut(row).assign(&grid.points().row(chosen));
        }
        Ok(doe)
    }
}

/// Greedy farthest-point selection over pre-scaled candidates, returning
/// candidate indices in selection order.
///
/// The initial point is the candidate farthest from the candidate centroid.
/// Each round keeps the minimum distance from every candidate to the
/// selected set up to date (one new-point update per round) and picks the
/// arg-max. Both arg-max scans break ties on the lower candidate index, the
/// parallel one through a reduction where the greater distance wins and
/// equal distances fall back to the lower index, so the result does not
/// depend on work splitting.
fn select_greedy<F: Float>(scaled: &Array2<F>, ns: usize) -> Vec<usize> {
    let n_points = scaled.nrows();
    let mut selection = Vec::with_capacity(ns);
    if ns == 0 || n_points == 0 {
        return selection;
    }

    let centroid = scaled.mean_axis(Axis(0)).unwrap().insert_axis(Axis(0));
    let from_centroid = cdist(scaled, &centroid);
    let mut first = 0;
    let mut best = from_centroid[[0, 0]];
    for (i, d) in from_centroid.column(0).iter().enumerate().skip(1) {
        if *d > best {
            first = i;
            best = *d;
        }
    }
    selection.push(first);

    let mut in_design = vec![false; n_points];
    in_design[first] = true;
    let mut min_dist: Vec<F> = (0..n_points)
        .into_par_iter()
        .map(|i| dist(scaled, i, &scaled.slice(s![first..first + 1, ..])))
        .collect();

    while selection.len() < ns {
        let next = min_dist
            .par_iter()
            .enumerate()
            .filter(|(i, _)| !in_design[*i])
            .map(|(i, d)| (i, *d))
            .reduce_with(|a, b| {
                if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) {
                    b
                } else {
                    a
                }
            });
        let next = match next {
            Some((i, _)) => i,
            None => break,
        };
        in_design[next] = true;
        selection.push(next);
        if selection.len() == ns {
            break;
        }
        let row = scaled.slice(s![next..next + 1, ..]);
        min_dist.par_iter_mut().enumerate().for_each(|(i, d)| {
            if !in_design[i] {
                let di = dist(scaled, i, &row);
                if di < *d {
                    *d = di;
                }
            }
        });
    }
    selection
}

fn dist<F: Float>(x: &Array2<F>, i: usize, point: &ArrayBase<impl Data<Elem = F>, Ix2>) -> F {
    F::from(x.row(i).l2_dist(&point.row(0)).unwrap()).unwrap()
}
