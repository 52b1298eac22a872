// tests/vector_ops_tests.rs

use ortho_engine::{Error, Scalar, Vector};

const EPS: f64 = 1e-9;

fn complex_vec(entries: &[(f64, f64)]) -> Vector {
    Vector::new(entries.iter().map(|&(re, im)| Scalar::new(re, im)).collect())
}

#[test]
fn squared_norm_of_integer_entries() {
    let v = Vector::from_reals(&[2.0, 7.0, 14.0]);
    assert!((v.squared_norm() - 249.0).abs() < EPS);
}

#[test]
fn squared_norm_of_fractional_entries() {
    let v = Vector::from_reals(&[6.0, 16.0, 3.6, 32.0, 1.85]);
    assert!((v.squared_norm() - 1332.3825).abs() < EPS);
}

#[test]
fn squared_norm_sums_both_components() {
    let v = complex_vec(&[(3.2, 8.6), (-1.1, 0.0), (4.3, 75.0)]);
    assert!((v.squared_norm() - 5728.9).abs() < EPS);
}

#[test]
fn real_dot_product() {
    let a = Vector::from_reals(&[1.0, 3.0, 9.0]);
    let b = Vector::from_reals(&[2.0, 7.0, 14.0]);
    assert!((a.dot(&b).unwrap().re - 149.0).abs() < EPS);
    assert!(a.dot(&b).unwrap().im.abs() < EPS);
}

#[test]
fn real_dot_product_fractional() {
    let a = Vector::from_reals(&[1.1231, 2.0, 9.01, 14.14313, 22.0]);
    let b = Vector::from_reals(&[6.0, 16.0, 3.633, 32.0, 1.8554]);
    assert!((a.dot(&b).unwrap().re - 564.87089).abs() < EPS);
}

#[test]
fn hermitian_dot_product() {
    let a = complex_vec(&[(1.0, 1.0), (2.0, -1.0)]);
    let b = complex_vec(&[(3.0, -2.0), (1.0, 1.0)]);
    assert_eq!(a.dot(&b).unwrap(), Scalar::new(2.0, -2.0));
    // reversed order conjugates
    assert_eq!(b.dot(&a).unwrap(), Scalar::new(2.0, 2.0));
}

#[test]
fn mixed_operands_take_the_hermitian_path() {
    let real = Vector::from_reals(&[1.0, 0.0]);
    let complex = complex_vec(&[(0.0, 1.0), (1.0, 0.0)]);
    assert_eq!(real.dot(&complex).unwrap(), Scalar::new(0.0, 1.0));
    assert_eq!(complex.dot(&real).unwrap(), Scalar::new(0.0, -1.0));
}

#[test]
fn dot_of_mismatched_lengths_fails() {
    let a = Vector::from_reals(&[1.0, 2.0]);
    let b = Vector::from_reals(&[1.0, 2.0, 3.0]);
    assert_eq!(
        a.dot(&b).unwrap_err(),
        Error::DimensionMismatch { expected: 2, got: 3 }
    );
}

#[test]
fn projection_onto_an_axis() {
    let v = Vector::from_reals(&[1.6, 5.2, 3.1]);
    let axis = Vector::from_reals(&[6.0, 5.0, 8.0]);
    let p = v.project_onto(&axis).unwrap();

    let expected = [2.8992, 2.416, 3.8656];
    for (got, want) in p.entries().iter().zip(expected) {
        assert!((got.re - want).abs() < EPS);
        assert!(got.im.abs() < EPS);
    }
}

#[test]
fn projection_with_unit_coefficient_returns_the_axis() {
    let v = Vector::from_reals(&[1.0, 1.0, 3.0]);
    let axis = Vector::from_reals(&[1.0, 2.0, 1.0]);
    assert_eq!(v.project_onto(&axis).unwrap(), axis);
}

#[test]
fn projection_onto_itself_is_identity() {
    let v = Vector::from_reals(&[1.0, 2.0, 3.0]);
    assert_eq!(v.project_onto(&v).unwrap(), v);
}

#[test]
fn scaling_by_a_real_factor() {
    let v = Vector::from_reals(&[1.5, -2.0]);
    assert_eq!(v.scale(2.0), Vector::from_reals(&[3.0, -4.0]));
}

#[test]
fn normalization_produces_unit_norm() {
    let v = complex_vec(&[(3.2, 8.6), (-1.1, 0.0), (4.3, 75.0)]);
    assert!((v.normalized().squared_norm() - 1.0).abs() < EPS);
}

#[test]
fn rounding_is_idempotent() {
    let v = Vector::from_reals(&[0.123456, -9.87654]);
    let once = v.rounded(3);
    assert_eq!(once, Vector::from_reals(&[0.123, -9.877]));
    assert_eq!(once.rounded(3), once);
}

#[test]
fn zero_decimal_places_rounds_to_whole_numbers() {
    let v = Vector::from_reals(&[2.7, -0.4, 1.5]);
    assert_eq!(v.rounded(0), Vector::from_reals(&[3.0, 0.0, 2.0]));
}

#[test]
fn rounding_past_f64_range_is_identity() {
    let v = Vector::from_reals(&[0.5, 1.25]);
    assert_eq!(v.rounded(400), v);

    let z = complex_vec(&[(0.125, -2.5)]);
    assert_eq!(z.rounded(u32::MAX), z);
}
