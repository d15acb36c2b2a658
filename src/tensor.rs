// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Tensor products and the composite-index layout they share with the
//! partial trace.
//!
//! A joint index over subsystems `(d_1, …, d_N)` is laid out with the first
//! subsystem varying slowest:
//!
//! ```text
//! flat = i_1·(d_2⋯d_N) + i_2·(d_3⋯d_N) + … + i_N
//! ```
//!
//! which is exactly the index order of the Kronecker product
//! `A_1 ⊗ A_2 ⊗ … ⊗ A_N`. Both [`tensor`] and
//! [`partial_trace`](crate::partial_trace::partial_trace) go through
//! [`SubsystemDims`] so they cannot disagree about it.

use ndarray::{Array1, Array2, ArrayBase, ArrayView1, ArrayView2, Data, Ix2};

use crate::operator::Scalar;

/// Composite-index layout for an ordered list of subsystem dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsystemDims {
    dims: Vec<usize>,
    strides: Vec<usize>,
    total: usize,
}

impl SubsystemDims {
    /// Build the layout for `dims`. An empty list describes the trivial
    /// one-dimensional space.
    pub fn new(dims: &[usize]) -> Self {
        let mut strides = vec![1; dims.len()];
        for k in (0..dims.len().saturating_sub(1)).rev() {
            strides[k] = strides[k + 1] * dims[k + 1];
        }
        let total = dims.iter().product();
        Self {
            dims: dims.to_vec(),
            strides,
            total,
        }
    }

    /// Number of subsystems.
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Subsystem dimensions in order.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Dimension of the joint space.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Index of subsystem `k` (0-based) inside the joint index `flat`.
    #[inline]
    pub fn local_index(&self, flat: usize, k: usize) -> usize {
        (flat / self.strides[k]) % self.dims[k]
    }

    /// Decompose a joint index into per-subsystem indices.
    pub fn split(&self, flat: usize) -> Vec<usize> {
        (0..self.len()).map(|k| self.local_index(flat, k)).collect()
    }

    /// Compose per-subsystem indices into a joint index.
    pub fn join(&self, multi: &[usize]) -> usize {
        multi
            .iter()
            .zip(&self.strides)
            .map(|(&i, &stride)| i * stride)
            .sum()
    }

    /// Joint-index contributions of every configuration of `subsystems`
    /// (0-based, in the given order), with the first listed subsystem
    /// varying slowest.
    ///
    /// For disjoint subsets `K` and `J` covering all subsystems, every joint
    /// index is uniquely `offsets(K)[r] + offsets(J)[j]`.
    pub fn offsets(&self, subsystems: &[usize]) -> Vec<usize> {
        let size = subsystems.iter().map(|&k| self.dims[k]).product();
        let mut out = Vec::with_capacity(size);
        out.push(0);
        for &k in subsystems {
            let stride = self.strides[k];
            out = out
                .iter()
                .flat_map(|&base| (0..self.dims[k]).map(move |i| base + i * stride))
                .collect();
        }
        out
    }
}

/// Kronecker product `a ⊗ b`.
pub fn kron<A, S1, S2>(a: &ArrayBase<S1, Ix2>, b: &ArrayBase<S2, Ix2>) -> Array2<A>
where
    A: Scalar,
    S1: Data<Elem = A>,
    S2: Data<Elem = A>,
{
    tensor_views(&[a.view(), b.view()])
}

/// Tensor product of operators, first factor slowest.
///
/// `tensor(&[a, b, c]) == kron(&kron(&a, &b), &c) == kron(&a, &kron(&b, &c))`.
/// Factors may be rectangular. The empty product is the 1×1 identity.
pub fn tensor<A: Scalar>(factors: &[Array2<A>]) -> Array2<A> {
    let views: Vec<ArrayView2<'_, A>> = factors.iter().map(|f| f.view()).collect();
    tensor_views(&views)
}

/// [`tensor`] over borrowed views.
pub fn tensor_views<A: Scalar>(factors: &[ArrayView2<'_, A>]) -> Array2<A> {
    let rows = SubsystemDims::new(&factors.iter().map(|f| f.nrows()).collect::<Vec<_>>());
    let cols = SubsystemDims::new(&factors.iter().map(|f| f.ncols()).collect::<Vec<_>>());

    Array2::from_shape_fn((rows.total(), cols.total()), |(r, c)| {
        factors.iter().enumerate().fold(A::one(), |acc, (k, f)| {
            acc * f[[rows.local_index(r, k), cols.local_index(c, k)]]
        })
    })
}

/// Tensor product of state vectors, first factor slowest.
pub fn tensor_states<A: Scalar>(factors: &[Array1<A>]) -> Array1<A> {
    let views: Vec<ArrayView1<'_, A>> = factors.iter().map(|f| f.view()).collect();
    let layout = SubsystemDims::new(&views.iter().map(|f| f.len()).collect::<Vec<_>>());

    Array1::from_shape_fn(layout.total(), |i| {
        views
            .iter()
            .enumerate()
            .fold(A::one(), |acc, (k, f)| acc * f[layout.local_index(i, k)])
    })
}
