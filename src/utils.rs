use ndarray::{s, Array1, Array2, ArrayBase, Data, Ix1, Ix2, NdFloat};
use ndarray_stats::{DeviationExt, QuantileExt};
use num_traits::Signed;

/// Importance-weighted Euclidean distance between two points:
/// `sqrt(sum_i (w_i * (a_i - b_i))^2)`.
///
/// Weights are per-dimension scale factors: a weight of 0 removes the
/// dimension from the metric, all-zero weights make every distance 0.
///
/// **Panics** if operand lengths differ.
pub fn wdist<F: NdFloat + Signed>(
    a: &ArrayBase<impl Data<Elem = F>, Ix1>,
    b: &ArrayBase<impl Data<Elem = F>, Ix1>,
    weights: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> F {
    if a.len() != b.len() || a.len() != weights.len() {
        panic!(
            "wdist: operands should have same length. Found {}, {} and {}",
            a.len(),
            b.len(),
            weights.len()
        );
    }
    let wa = a.to_owned() * weights;
    let wb = b.to_owned() * weights;
    F::from(wa.l2_dist(&wb).unwrap()).unwrap()
}

/// Scales each column of `x` by the matching weight, turning plain L2
/// distances between the resulting rows into weighted distances.
pub fn scale_columns<F: NdFloat>(
    x: &ArrayBase<impl Data<Elem = F>, Ix2>,
    weights: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> Array2<F> {
    x.to_owned() * weights
}

/// Condensed pairwise L2 distances between the rows of `x`:
/// a flat array of the `n(n-1)/2` distances `d(row_i, row_j)` for `i < j`.
pub fn pdist<F: NdFloat + Signed>(x: &ArrayBase<impl Data<Elem = F>, Ix2>) -> Array1<F> {
    let nrows = x.nrows();
    let size: usize = (nrows - 1) * nrows / 2;
    let mut res: Array1<F> = Array1::zeros(size);
    let mut k = 0;
    for i in 0..nrows {
        for j in (i + 1)..nrows {
            let a = x.slice(s![i, ..]);
            let b = x.slice(s![j, ..]);
            res[k] = F::from(a.l2_dist(&b).unwrap()).unwrap();
            k += 1;
        }
    }
    res
}

/// L2 distances between each row of `xa` and each row of `xb` as a
/// `(xa.nrows(), xb.nrows())` matrix.
///
/// **Panics** if operands column counts differ.
pub fn cdist<F: NdFloat + Signed>(
    xa: &ArrayBase<impl Data<Elem = F>, Ix2>,
    xb: &ArrayBase<impl Data<Elem = F>, Ix2>,
) -> Array2<F> {
    let ma = xa.nrows();
    let mb = xb.nrows();
    let na = xa.ncols();
    let nb = xb.ncols();
    if na != nb {
        panic!(
            "cdist: operands should have same nb of columns. Found {} and {}",
            na, nb
        );
    }
    let mut res = Array2::zeros((ma, mb));
    for i in 0..ma {
        for j in 0..mb {
            let a = xa.slice(s![i, ..]);
            let b = xb.slice(s![j, ..]);
            res[[i, j]] = F::from(a.l2_dist(&b).unwrap()).unwrap();
        }
    }

    res
}

/// The achieved maximin criterion of a design: the minimum pairwise
/// weighted distance between the rows of `x`. `None` for designs of
/// fewer than two points, where no pair exists.
pub fn min_pairwise_distance<F: NdFloat + Signed>(
    x: &ArrayBase<impl Data<Elem = F>, Ix2>,
    weights: &ArrayBase<impl Data<Elem = F>, Ix1>,
) -> Option<F> {
    if x.nrows() < 2 {
        return None;
    }
    let scaled = scale_columns(x, weights);
    let dists = pdist(&scaled);
    dists.min().ok().copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{arr2, array};

    #[test]
    fn test_wdist() {
        let a = array![0., 0.];
        let b = array![3., 4.];
        assert_abs_diff_eq!(wdist(&a, &b, &array![1., 1.]), 5., epsilon = 1e-9);
        // weight 2 on the first axis stretches it
        assert_abs_diff_eq!(
            wdist(&a, &b, &array![2., 1.]),
            52_f64.sqrt(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_wdist_symmetry_and_identity() {
        let a = array![1., 2.25, 6.];
        let b = array![6., 3.5, 1.];
        let w = array![1., 2., 0.5];
        assert_abs_diff_eq!(wdist(&a, &b, &w), wdist(&b, &a, &w), epsilon = 1e-12);
        assert_abs_diff_eq!(wdist(&a, &a, &w), 0., epsilon = 1e-12);
    }

    #[test]
    fn test_wdist_zero_weights() {
        let a = array![0., 0.];
        let b = array![3., 4.];
        assert_abs_diff_eq!(wdist(&a, &b, &array![0., 0.]), 0., epsilon = 1e-12);
    }

    #[test]
    fn test_pdist() {
        let x = arr2(&[[0., 0.], [1., 0.], [0., 1.]]);
        let dists = pdist(&x);
        assert_eq!(dists.len(), 3);
        assert_abs_diff_eq!(
            dists,
            array![1., 1., 2_f64.sqrt()],
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_cdist() {
        let xa = arr2(&[[0., 0.], [1., 1.]]);
        let xb = arr2(&[[1., 0.]]);
        let dists = cdist(&xa, &xb);
        assert_abs_diff_eq!(dists, arr2(&[[1.], [1.]]), epsilon = 1e-9);
    }

    #[test]
    fn test_min_pairwise_distance() {
        // unit square corners, unweighted: adjacent corners are the closest pairs
        let corners = arr2(&[[0., 0.], [1., 1.], [0., 1.], [1., 0.]]);
        let d = min_pairwise_distance(&corners, &array![1., 1.]).unwrap();
        assert_abs_diff_eq!(d, 1., epsilon = 1e-9);
        assert_eq!(min_pairwise_distance(&corners.slice(s![..1, ..]), &array![1., 1.]), None);
    }
}
