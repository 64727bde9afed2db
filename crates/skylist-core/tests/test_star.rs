#[allow(dead_code)]
mod common;

use common::{star, test_layout};
use skylist_core::catalog::ColumnLayout;
use skylist_core::error::ParseError;
use skylist_core::star::Star;

#[test]
fn test_parse_valid_row() {
    let s = Star::parse("HIP1\t12.5\t-30.25\t4200.0", &test_layout()).unwrap();
    assert_eq!(s.id, "HIP1");
    assert!((s.ra - 12.5).abs() < 1e-12);
    assert!((s.dec + 30.25).abs() < 1e-12);
    assert!((s.brightness - 4200.0).abs() < 1e-9);
    assert!(s.distance.is_none());
}

#[test]
fn test_parse_too_few_fields() {
    let err = Star::parse("HIP1\t12.5", &test_layout()).unwrap_err();
    assert_eq!(
        err,
        ParseError::MalformedRow {
            found: 2,
            required: 4
        }
    );
}

#[test]
fn test_parse_non_numeric_coordinate() {
    let err = Star::parse("HIP1\tnorth\t-30.25\t4200.0", &test_layout()).unwrap_err();
    assert!(matches!(err, ParseError::InvalidNumber { column: 1, .. }));
}

#[test]
fn test_parse_non_finite_brightness() {
    let layout = test_layout();
    assert!(Star::parse("HIP1\t1.0\t2.0\tinf", &layout).is_err());
    assert!(Star::parse("HIP1\t1.0\t2.0\tNaN", &layout).is_err());
    // Decimal overflow parses to infinity and must be rejected too.
    assert!(Star::parse("HIP1\t1.0\t2.0\t1e999", &layout).is_err());
}

#[test]
fn test_parse_extra_fields_ignored() {
    let s = Star::parse("HIP1\t1.0\t2.0\t3.0\textra\tcolumns", &test_layout()).unwrap();
    assert_eq!(s.id, "HIP1");
    assert!((s.brightness - 3.0).abs() < 1e-12);
}

#[test]
fn test_parse_respects_column_indices() {
    // brightness first, then ra/dec, id last.
    let layout = ColumnLayout {
        delimiter: ',',
        id_column: 3,
        ra_column: 1,
        dec_column: 2,
        brightness_column: 0,
    };
    let s = Star::parse("99.5,10.0,20.0,G123", &layout).unwrap();
    assert_eq!(s.id, "G123");
    assert!((s.ra - 10.0).abs() < 1e-12);
    assert!((s.brightness - 99.5).abs() < 1e-12);
}

#[test]
fn test_to_row_field_order() {
    let mut s = star("HIP1", 12.5, -30.25, 4200.0);
    s.distance = Some(0.5);
    assert_eq!(s.to_row('\t'), "0.5\tHIP1\t12.5\t-30.25\t4200");
}

#[test]
fn test_to_row_without_distance() {
    let s = star("HIP1", 1.0, 2.0, 3.0);
    assert_eq!(s.to_row(','), ",HIP1,1,2,3");
}
