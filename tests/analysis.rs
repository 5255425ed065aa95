#![cfg(feature = "spectral")]

use std::collections::BTreeMap;

use symspectra::analysis::*;
use symspectra::{Expr, Number, Symbol, SymMatrix};

fn x() -> Expr {
    Expr::symbol(&Symbol::new("x"))
}

fn half_sqrt2() -> Expr {
    Expr::number(Number::new(1, 2).sqrt().unwrap())
}

/// Orthonormal basis of R³ with irrational entries.
fn rotated_basis() -> Vec<SymMatrix> {
    let h = half_sqrt2();
    vec![
        SymMatrix::from_rows(3, 1, &[h.clone(), h.clone(), Expr::from(0)]),
        SymMatrix::from_rows(3, 1, &[-h.clone(), h, Expr::from(0)]),
        SymMatrix::from_i64(3, 1, &[0, 0, 1]),
    ]
}

/// Multiset of eigenvalues keyed by their display form.
fn multiset(values: &[Expr]) -> BTreeMap<String, usize> {
    let mut m = BTreeMap::new();
    for v in values {
        *m.entry(v.to_string()).or_insert(0) += 1;
    }
    m
}

// ── Shape classifier ────────────────────────────────────────────────

#[test]
fn vector_classification() {
    for rows in 1..5 {
        for cols in 1..5 {
            let m = SymMatrix::zeros(rows, cols);
            assert_eq!(is_vector(&m), rows == 1 || cols == 1);
            assert_eq!(is_row_vector(&m), rows == 1);
            assert_eq!(is_column_vector(&m), cols == 1);
        }
    }
}

// ── Vector normalizer ───────────────────────────────────────────────

#[test]
fn round_trip_law() {
    let row = SymMatrix::from_rows(1, 3, &[x(), Expr::from(2), Expr::pi()]);
    assert_eq!(to_row_vector(&to_column_vector(&row).unwrap()).unwrap(), row);

    let col = SymMatrix::from_i64(4, 1, &[4, 3, 2, 1]);
    assert_eq!(to_column_vector(&to_row_vector(&col).unwrap()).unwrap(), col);
}

#[test]
fn normalizer_rejects_matrices() {
    let m = SymMatrix::eye(2);
    assert!(matches!(to_column_vector(&m), Err(AnalysisError::Shape(_))));
    assert!(matches!(to_row_vector(&m), Err(AnalysisError::Shape(_))));
}

// ── Basis and metric operations ─────────────────────────────────────

#[test]
fn orthogonal_unit_vectors_are_perpendicular() {
    let basis = rotated_basis();
    let angle = calculate_vector_angle(&basis[0], &basis[1]).unwrap();
    assert_eq!(angle, Expr::pi() * Expr::rational(1, 2));
}

#[test]
fn rayleigh_of_identity_is_one() {
    let id = SymMatrix::eye(3);
    for v in [[1, 0, 0], [3, -4, 12], [1, 1, 1]] {
        let col = SymMatrix::from_i64(3, 1, &v);
        assert_eq!(calculate_rayleigh_quotient(&id, &col).unwrap(), 1.0);
        let row = SymMatrix::from_i64(1, 3, &v);
        assert_eq!(calculate_rayleigh_quotient(&id, &row).unwrap(), 1.0);
    }
}

#[test]
fn rayleigh_rejects_symbols() {
    let a = SymMatrix::from_rows(2, 2, &[x(), Expr::from(0), Expr::from(0), Expr::from(1)]);
    let v = SymMatrix::from_i64(2, 1, &[1, 1]);
    assert!(matches!(calculate_rayleigh_quotient(&a, &v), Err(AnalysisError::Matrix(_))));

    let sym_v = SymMatrix::from_rows(2, 1, &[x(), Expr::from(1)]);
    assert!(matches!(
        calculate_rayleigh_quotient(&SymMatrix::eye(2), &sym_v),
        Err(AnalysisError::Matrix(_))
    ));
}

#[test]
fn orthonormal_basis_is_self_dual() {
    let basis = rotated_basis();
    assert_eq!(calculate_contravariant_basis(&basis).unwrap(), basis);
}

#[test]
fn transform_within_orthonormal_basis_is_identity() {
    let basis = rotated_basis();
    assert_eq!(calculate_transform_matrix(&basis, &basis).unwrap(), SymMatrix::eye(3));
}

#[test]
fn transform_cardinality_mismatch() {
    let basis = rotated_basis();
    assert!(matches!(
        calculate_transform_matrix(&basis, &basis[..2]),
        Err(AnalysisError::Value(_))
    ));
}

// ── Spectral operations ─────────────────────────────────────────────

#[test]
fn diagonal_eigenpairs_and_square() {
    let a = SymMatrix::from_i64(2, 2, &[2, 0, 0, 3]);
    let pairs = match spectral_decomposition(&a, None).unwrap() {
        SpectralDecomposition::Eigenpairs(p) => p,
        SpectralDecomposition::Power(_) => panic!("no power was requested"),
    };
    let found: Vec<(Expr, SymMatrix)> = pairs
        .into_iter()
        .map(|p| (p.eigenvalue, p.eigenvector))
        .collect();
    assert!(found.contains(&(Expr::from(2), SymMatrix::from_i64(2, 1, &[1, 0]))));
    assert!(found.contains(&(Expr::from(3), SymMatrix::from_i64(2, 1, &[0, 1]))));

    assert_eq!(
        spectral_decomposition(&a, Some(&Expr::from(2))).unwrap(),
        SpectralDecomposition::Power(SymMatrix::from_i64(2, 2, &[4, 0, 0, 9]))
    );
    assert_eq!(matrix_power_via_spectrum(&a, 2).unwrap(), &a * &a);
}

#[test]
fn non_integer_power_is_a_value_error() {
    let a = SymMatrix::from_i64(2, 2, &[2, 0, 0, 3]);
    for p in [Expr::rational(3, 2), Expr::pi(), x()] {
        assert!(matches!(
            spectral_decomposition(&a, Some(&p)),
            Err(AnalysisError::Value(_))
        ));
    }
}

#[test]
fn sturm_sequence_of_positive_definite() {
    let a = SymMatrix::from_i64(3, 3, &[4, 1, 0, 1, 3, 1, 0, 1, 2]);
    assert!(a.is_positive_definite().unwrap());
    let seq = get_sturm_sequence(&a).unwrap();
    assert_eq!(seq.len(), 3);
    assert_eq!(multiset(&seq[0]), multiset(&a.eigenvals().unwrap()));
    assert_eq!(seq[2], vec![Expr::from(4)]);
}

#[test]
fn sturm_sequence_rejects_semidefinite() {
    // eigenvalues 0 and 2
    let a = SymMatrix::from_i64(2, 2, &[1, -1, -1, 1]);
    assert!(matches!(get_sturm_sequence(&a), Err(AnalysisError::Matrix(_))));
}

#[test]
fn irreducible_characteristic_polynomial() {
    // λ³ - 10λ² + 29λ - 23 has no rational or quadratic factor
    let a = SymMatrix::from_i64(3, 3, &[2, 1, 0, 1, 3, 1, 0, 1, 5]);
    let values = a.eigenvals().unwrap();
    for v in &values {
        let root = v.as_algebraic().unwrap();
        assert_eq!(root.degree(), 3);
    }

    let seq = get_sturm_sequence(&a).unwrap();
    assert_eq!(seq[0], values);

    let pairs = eigenpairs(&a).unwrap();
    for pair in &pairs {
        assert_eq!(&a * &pair.eigenvector, pair.eigenvector.scale(&pair.eigenvalue));
    }
    assert_eq!(
        spectral_decomposition(&a, Some(&Expr::from(-1))).unwrap(),
        SpectralDecomposition::Power(a.inverse().unwrap())
    );
}

#[test]
fn symbolic_symmetric_matrix() {
    let a = Expr::symbol(&Symbol::new("a"));
    let b = Expr::symbol(&Symbol::new("b"));
    let m = SymMatrix::from_rows(2, 2, &[a.clone(), b.clone(), b.clone(), a.clone()]);
    let values = m.eigenvals().unwrap();
    assert_eq!(values, vec![&a - &b, &a + &b]);

    // the eigenvalues rebuild the characteristic polynomial
    let t = Symbol::new("t");
    let te = Expr::symbol(&t);
    let expanded = m
        .characteristic_polynomial()
        .unwrap()
        .iter()
        .rev()
        .fold(Expr::from(0), |acc, c| acc * &te + c);
    assert_eq!(Expr::from_roots(&values, &t), expanded);
    assert_eq!(
        spectral_decomposition(&m, Some(&Expr::from(2))).unwrap(),
        SpectralDecomposition::Power(&m * &m)
    );
    // definiteness of a symbolic matrix is undecidable
    assert!(matches!(
        get_sturm_sequence(&m),
        Err(AnalysisError::Linalg(symspectra::linalg::LinalgError::Symbolic))
    ));
}

#[test]
fn errors_display() {
    let e = AnalysisError::NonSquare { nrows: 2, ncols: 3 };
    assert_eq!(e.to_string(), "matrix must be square, got 2x3");
    let e: AnalysisError = symspectra::linalg::LinalgError::Singular.into();
    assert_eq!(e.to_string(), "matrix is singular");
}
