//! Algebraic property tests for the dense matrix type.

use approx::assert_relative_eq;
use frontier_matrix::Matrix;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_double_transpose_identity() {
    let mut rng = StdRng::seed_from_u64(1);
    for &(r, c) in &[(1, 1), (2, 3), (5, 2), (4, 4), (1, 7)] {
        let m = Matrix::random_uniform(r, c, &mut rng);
        assert_eq!(m.transpose().transpose(), m);
    }
}

#[test]
fn test_add_then_sub_recovers_lhs() {
    // Exact for integer-valued fixtures.
    let a = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    let b = Matrix::from_vec(vec![7.0, -8.0, 9.0, 0.0, -1.0, 2.0], 2, 3).unwrap();
    assert_eq!(a.checked_add(&b).unwrap().checked_sub(&b).unwrap(), a);

    // Within tolerance for arbitrary floats.
    let mut rng = StdRng::seed_from_u64(2);
    let a = Matrix::random_uniform(3, 3, &mut rng);
    let b = Matrix::random_uniform(3, 3, &mut rng);
    let back = a.checked_add(&b).unwrap().checked_sub(&b).unwrap();
    for (x, y) in back.as_slice().iter().zip(a.as_slice()) {
        assert_relative_eq!(x, y, epsilon = 1e-12);
    }
}

#[test]
fn test_matmul_associativity() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = Matrix::random_uniform(3, 4, &mut rng);
    let b = Matrix::random_uniform(4, 5, &mut rng);
    let c = Matrix::random_uniform(5, 2, &mut rng);
    let left = a.matmul(&b).unwrap().matmul(&c).unwrap();
    let right = a.matmul(&b.matmul(&c).unwrap()).unwrap();
    assert_eq!(left.rows(), 3);
    assert_eq!(left.cols(), 2);
    for (x, y) in left.as_slice().iter().zip(right.as_slice()) {
        assert_relative_eq!(x, y, epsilon = 1e-12);
    }
}

#[test]
fn test_dot_with_self_is_nonnegative() {
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..10 {
        let v = Matrix::random_uniform(6, 1, &mut rng);
        assert!(v.dot(&v).unwrap() >= 0.0);
    }
    let zero = Matrix::zeros(6, 1);
    assert_eq!(zero.dot(&zero).unwrap(), 0.0);
}

#[test]
fn test_boundary_access_rejected() {
    let m = Matrix::zeros(3, 5);
    assert!(m.get(3, 0).is_err());
    assert!(m.get(0, 5).is_err());
    assert!(m.get(2, 4).is_ok());
}
