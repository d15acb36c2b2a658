// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Partial trace over subsystems of a composite operator or pure state.
//!
//! Subsystems are addressed by 1-based position in `dims`, and the canonical
//! argument is the set of subsystems to *trace out*. [`partial_trace_single`],
//! [`partial_trace_keep`] and [`partial_trace_state`] are conveniences over
//! [`partial_trace`].
//!
//! For kept configurations `r, c` and traced configuration `j`,
//!
//! ```text
//! out[r, c] = Σ_j ρ[K_r + J_j, K_c + J_j]
//! ```
//!
//! where `K` and `J` are the joint-index offsets of the kept and traced
//! subsystems from [`SubsystemDims::offsets`]. Cost is
//! O(d_kept² · d_traced) without materializing a reshaped tensor.

use ndarray::{Array1, Array2};
use tracing::debug;

use crate::error::{Error, Result};
use crate::operator::{outer_product, Scalar};
use crate::tensor::SubsystemDims;

/// Trace out the 1-based subsystems `trace_out` of `rho` over `dims`.
///
/// Kept subsystems stay in their original relative order. An empty
/// `trace_out` returns a copy of `rho`; tracing every subsystem returns the
/// full trace as a 1×1 matrix. The order of `trace_out` does not matter.
///
/// # Errors
/// * `DimensionMismatch` if `rho` is not square or `prod(dims)` differs from
///   its size.
/// * `InvalidArgument` if a dimension is zero or an index is out of
///   `[1, dims.len()]` or repeated.
pub fn partial_trace<A: Scalar>(
    rho: &Array2<A>,
    trace_out: &[usize],
    dims: &[usize],
) -> Result<Array2<A>> {
    let layout = validate_layout(rho, dims)?;
    let traced = validate_indices(trace_out, layout.len())?;
    let kept: Vec<usize> = (0..layout.len())
        .filter(|k| traced.binary_search(k).is_err())
        .collect();

    debug!(
        dims = ?dims,
        traced = ?trace_out,
        "partial trace"
    );

    let kept_offsets = layout.offsets(&kept);
    let traced_offsets = layout.offsets(&traced);
    let d = kept_offsets.len();

    Ok(Array2::from_shape_fn((d, d), |(r, c)| {
        let (row, col) = (kept_offsets[r], kept_offsets[c]);
        traced_offsets
            .iter()
            .fold(A::zero(), |acc, &j| acc + rho[[row + j, col + j]])
    }))
}

/// Trace out a single 1-based subsystem.
pub fn partial_trace_single<A: Scalar>(
    rho: &Array2<A>,
    index: usize,
    dims: &[usize],
) -> Result<Array2<A>> {
    partial_trace(rho, &[index], dims)
}

/// Keep only the 1-based subsystems `keep`, tracing out the rest.
///
/// The result is ordered as the subsystems appear in `dims`, not as listed
/// in `keep`.
pub fn partial_trace_keep<A: Scalar>(
    rho: &Array2<A>,
    keep: &[usize],
    dims: &[usize],
) -> Result<Array2<A>> {
    let keep = validate_indices(keep, dims.len())?;
    let trace_out: Vec<usize> = (0..dims.len())
        .filter(|k| keep.binary_search(k).is_err())
        .map(|k| k + 1)
        .collect();
    partial_trace(rho, &trace_out, dims)
}

/// Reduced density operator of the pure state `psi`.
///
/// Equivalent to `partial_trace(|ψ⟩⟨ψ|, trace_out, dims)`.
pub fn partial_trace_state<A: Scalar>(
    psi: &Array1<A>,
    trace_out: &[usize],
    dims: &[usize],
) -> Result<Array2<A>> {
    let total = checked_total(dims)?;
    if psi.len() != total {
        return Err(Error::dimension(
            "partial_trace_state",
            format!("state of length {total}"),
            format!("length {}", psi.len()),
        ));
    }
    partial_trace(&outer_product(psi), trace_out, dims)
}

fn validate_layout<A>(rho: &Array2<A>, dims: &[usize]) -> Result<SubsystemDims> {
    if rho.nrows() != rho.ncols() {
        return Err(Error::dimension(
            "partial_trace",
            "a square operator",
            format!("{} x {}", rho.nrows(), rho.ncols()),
        ));
    }
    let total = checked_total(dims)?;
    if total != rho.nrows() {
        return Err(Error::dimension(
            "partial_trace",
            format!("operator of size {total} (product of dims {dims:?})"),
            format!("{} x {}", rho.nrows(), rho.ncols()),
        ));
    }
    Ok(SubsystemDims::new(dims))
}

fn checked_total(dims: &[usize]) -> Result<usize> {
    if let Some(pos) = dims.iter().position(|&d| d == 0) {
        return Err(Error::invalid(
            "partial_trace",
            format!("subsystem {} has dimension 0", pos + 1),
        ));
    }
    dims.iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or_else(|| Error::invalid("partial_trace", "product of dims overflows"))
}

/// Convert 1-based subsystem indices to sorted 0-based positions.
fn validate_indices(indices: &[usize], num_subsystems: usize) -> Result<Vec<usize>> {
    let mut positions = Vec::with_capacity(indices.len());
    for &index in indices {
        if index == 0 || index > num_subsystems {
            return Err(Error::invalid(
                "partial_trace",
                format!("subsystem index {index} is outside [1, {num_subsystems}]"),
            ));
        }
        positions.push(index - 1);
    }
    positions.sort_unstable();
    if let Some(pair) = positions.windows(2).find(|w| w[0] == w[1]) {
        return Err(Error::invalid(
            "partial_trace",
            format!("subsystem index {} listed more than once", pair[0] + 1),
        ));
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operator::trace;
    use crate::tensor::{kron, tensor, tensor_states};
    use crate::test_utils::{assert_matrix_close, random_density_matrix, random_matrix};
    use approx::assert_relative_eq;
    use ndarray::array;
    use num_complex::Complex64;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_bipartite_inverse_law() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = random_density_matrix(&mut rng, 2);
        let b = random_density_matrix(&mut rng, 3);
        let ab = kron(&a, &b);

        assert_matrix_close(&partial_trace(&ab, &[2], &[2, 3]).unwrap(), &a, 1e-12);
        assert_matrix_close(&partial_trace(&ab, &[1], &[2, 3]).unwrap(), &b, 1e-12);
    }

    #[test]
    fn test_tripartite_every_kept_subset() {
        let mut rng = StdRng::seed_from_u64(2);
        let parts = vec![
            random_density_matrix(&mut rng, 2),
            random_density_matrix(&mut rng, 3),
            random_density_matrix(&mut rng, 2),
        ];
        let dims = [2, 3, 2];
        let joint = tensor(&parts);

        for mask in 0u32..8 {
            let keep: Vec<usize> = (0..3).filter(|k| mask & (1 << k) != 0).collect();
            let trace_out: Vec<usize> = (0..3)
                .filter(|k| mask & (1 << k) == 0)
                .map(|k| k + 1)
                .collect();
            let expected = tensor(&keep.iter().map(|&k| parts[k].clone()).collect::<Vec<_>>());
            let reduced = partial_trace(&joint, &trace_out, &dims).unwrap();
            assert_matrix_close(&reduced, &expected, 1e-12);
        }
    }

    #[test]
    fn test_trace_order_is_irrelevant() {
        let mut rng = StdRng::seed_from_u64(3);
        let rho = random_matrix(&mut rng, 12, 12);
        let dims = [2, 3, 2];
        let a = partial_trace(&rho, &[2, 3], &dims).unwrap();
        let b = partial_trace(&rho, &[3, 2], &dims).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_trace_set_is_identity() {
        let mut rng = StdRng::seed_from_u64(4);
        let rho = random_matrix(&mut rng, 6, 6);
        assert_eq!(partial_trace(&rho, &[], &[2, 3]).unwrap(), rho);
    }

    #[test]
    fn test_tracing_everything_gives_scalar_trace() {
        let mut rng = StdRng::seed_from_u64(5);
        let rho = random_matrix(&mut rng, 6, 6);
        let full = partial_trace(&rho, &[1, 2], &[2, 3]).unwrap();
        assert_eq!(full.dim(), (1, 1));
        assert_relative_eq!(full[[0, 0]].re, trace(&rho).re, epsilon = 1e-12);
        assert_relative_eq!(full[[0, 0]].im, trace(&rho).im, epsilon = 1e-12);
    }

    #[test]
    fn test_non_product_ground_truth() {
        // Hand-computed: ρ = Σ a_ij |i⟩⟨j| on 2×2, Tr_2 sums the 2×2 diagonal blocks
        // and Tr_1 sums the blocks themselves.
        let rho = Array2::from_shape_fn((4, 4), |(i, j)| (4 * i + j) as f64);
        let tr2 = partial_trace(&rho, &[2], &[2, 2]).unwrap();
        let tr1 = partial_trace(&rho, &[1], &[2, 2]).unwrap();
        assert_eq!(tr2, array![[0.0 + 5.0, 2.0 + 7.0], [8.0 + 13.0, 10.0 + 15.0]]);
        assert_eq!(tr1, array![[0.0 + 10.0, 1.0 + 11.0], [4.0 + 14.0, 5.0 + 15.0]]);
    }

    #[test]
    fn test_keep_is_complement_of_trace_out() {
        let mut rng = StdRng::seed_from_u64(6);
        let rho = random_matrix(&mut rng, 12, 12);
        let dims = [2, 3, 2];
        assert_eq!(
            partial_trace_keep(&rho, &[3, 1], &dims).unwrap(),
            partial_trace(&rho, &[2], &dims).unwrap()
        );
        assert_eq!(
            partial_trace_single(&rho, 2, &dims).unwrap(),
            partial_trace(&rho, &[2], &dims).unwrap()
        );
    }

    #[test]
    fn test_pure_product_state_reduces_to_factor() {
        let s = 1.0 / 2.0_f64.sqrt();
        let plus = array![Complex64::new(s, 0.0), Complex64::new(s, 0.0)];
        let zero = array![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0)];
        let psi = tensor_states(&[plus.clone(), zero]);
        let reduced = partial_trace_state(&psi, &[2], &[2, 2]).unwrap();
        assert_matrix_close(&reduced, &outer_product(&plus), 1e-15);
    }

    #[test]
    fn test_bell_state_reduces_to_maximally_mixed() {
        let s = 1.0 / 2.0_f64.sqrt();
        let bell = array![s, 0.0, 0.0, s];
        let reduced = partial_trace_state(&bell, &[1], &[2, 2]).unwrap();
        assert_relative_eq!(reduced[[0, 0]], 0.5, epsilon = 1e-15);
        assert_relative_eq!(reduced[[1, 1]], 0.5, epsilon = 1e-15);
        assert_relative_eq!(reduced[[0, 1]], 0.0);
    }

    #[test]
    fn test_index_out_of_range_rejected() {
        let rho = Array2::<f64>::eye(4);
        let err = partial_trace(&rho, &[5], &[2, 2]).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert!(partial_trace(&rho, &[0], &[2, 2]).is_err());
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let rho = Array2::<f64>::eye(4);
        let err = partial_trace(&rho, &[1, 1], &[2, 2]).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let rho = Array2::<f64>::eye(4);
        assert!(matches!(
            partial_trace(&rho, &[1], &[2, 3]),
            Err(Error::DimensionMismatch { .. })
        ));
        let rect = Array2::<f64>::zeros((4, 2));
        assert!(matches!(
            partial_trace(&rect, &[1], &[2, 2]),
            Err(Error::DimensionMismatch { .. })
        ));
        assert!(matches!(
            partial_trace(&rho, &[1], &[4, 0]),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_state_length_mismatch_rejected() {
        let psi = array![1.0, 0.0, 0.0];
        assert!(matches!(
            partial_trace_state(&psi, &[1], &[2, 2]),
            Err(Error::DimensionMismatch { .. })
        ));
    }
}
