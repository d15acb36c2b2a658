// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Vectorization and superoperator identities through the public API.

mod common;

use common::{assert_matrix_close, c, random_matrix};
use ndarray::array;
use rand::rngs::StdRng;
use rand::SeedableRng;

use qubit_os_liouville::superop::apply_superop;
use qubit_os_liouville::vectorize::to_operator_with_dim;
use qubit_os_liouville::{
    anticommutator_superop, commutator_superop, left_right_superop, left_superop, right_superop,
    to_operator, to_vector, Error,
};

#[test]
fn vectorization_is_column_major() {
    let v = array![1.0, 3.0, 2.0, 4.0];
    let a = to_operator(&v).unwrap();
    assert_eq!(a, array![[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(to_vector(&a), v);
}

#[test]
fn vectorization_rejects_non_square_lengths() {
    let v = array![1.0, 2.0, 3.0, 4.0, 5.0];
    assert!(matches!(
        to_operator(&v),
        Err(Error::DimensionMismatch { .. })
    ));
    assert!(to_operator_with_dim(&array![1.0, 2.0, 3.0, 4.0], 3).is_err());
}

#[test]
fn superoperators_reproduce_operator_products() {
    let mut rng = StdRng::seed_from_u64(201);
    let a = random_matrix(&mut rng, 3, 3);
    let b = random_matrix(&mut rng, 3, 3);
    let rho = random_matrix(&mut rng, 3, 3);
    let tol = 1e-12;

    assert_matrix_close(
        &apply_superop(&left_superop(&a), &rho).unwrap(),
        &a.dot(&rho),
        tol,
    );
    assert_matrix_close(
        &apply_superop(&right_superop(&a), &rho).unwrap(),
        &rho.dot(&a),
        tol,
    );
    assert_matrix_close(
        &apply_superop(&left_right_superop(&a, &b), &rho).unwrap(),
        &a.dot(&rho).dot(&b),
        tol,
    );
    assert_matrix_close(
        &apply_superop(&commutator_superop(&a).unwrap(), &rho).unwrap(),
        &(a.dot(&rho) - rho.dot(&a)),
        tol,
    );
    assert_matrix_close(
        &apply_superop(&anticommutator_superop(&a).unwrap(), &rho).unwrap(),
        &(a.dot(&rho) + rho.dot(&a)),
        tol,
    );
}

#[test]
fn superoperator_composition_matches_operator_composition() {
    let mut rng = StdRng::seed_from_u64(202);
    let a = random_matrix(&mut rng, 2, 2);
    let b = random_matrix(&mut rng, 2, 2);
    // left(A)·right(B) = left_right(A, B)
    let composed = left_superop(&a).dot(&right_superop(&b));
    assert_matrix_close(&composed, &left_right_superop(&a, &b), 1e-12);
    // left and right actions commute
    let other = right_superop(&b).dot(&left_superop(&a));
    assert_matrix_close(&composed, &other, 1e-12);
}

#[test]
fn commutator_requires_square_operator() {
    let a = array![[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)]];
    assert!(matches!(
        commutator_superop(&a),
        Err(Error::DimensionMismatch { .. })
    ));
}
