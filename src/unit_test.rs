#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

// =============================================================
// Numbers
// =============================================================

#[test]
fn integer_parses_as_pixels() {
    for n in [0, 1, 7, 640, 1_000_000] {
        assert_eq!(UnitValue::parse(&json!(n)), UnitValue::Px(n));
    }
}

#[test]
fn float_is_floored_to_pixels() {
    assert_eq!(UnitValue::parse(&json!(12.9)), UnitValue::Px(12));
    assert_eq!(UnitValue::parse(&json!(0.4)), UnitValue::Px(0));
}

#[test]
fn negative_float_floors_down() {
    assert_eq!(UnitValue::from_number(-3.5), UnitValue::Px(-4));
}

#[test]
fn out_of_range_number_is_unset() {
    assert_eq!(UnitValue::parse(&json!(1e20)), UnitValue::Unset);
    assert_eq!(UnitValue::parse(&json!(-1e20)), UnitValue::Unset);
    assert_eq!(UnitValue::from_number(2f64.powi(63)), UnitValue::Unset);
}

#[test]
fn large_number_within_range_still_parses() {
    assert_eq!(UnitValue::from_number(1e15), UnitValue::Px(1_000_000_000_000_000));
    assert_eq!(UnitValue::from_number(-(2f64.powi(63))), UnitValue::Px(i64::MIN));
}

#[test]
fn non_finite_number_is_unset() {
    assert_eq!(UnitValue::from_number(f64::NAN), UnitValue::Unset);
    assert_eq!(UnitValue::from_number(f64::INFINITY), UnitValue::Unset);
}

// =============================================================
// Strings
// =============================================================

#[test]
fn bare_digits_are_pixels() {
    assert_eq!(UnitValue::from_text("42"), UnitValue::Px(42));
}

#[test]
fn px_suffix_is_case_insensitive() {
    for s in ["42px", "42PX", "42Px", "42pX"] {
        assert_eq!(UnitValue::from_text(s), UnitValue::Px(42), "input {s}");
    }
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(UnitValue::from_text("  15px\t"), UnitValue::Px(15));
    assert_eq!(UnitValue::from_text(" 20% "), UnitValue::Percent(20.0));
}

#[test]
fn fractional_pixels_string_is_rejected() {
    assert_eq!(UnitValue::from_text("5.5px"), UnitValue::Unset);
    assert_eq!(UnitValue::from_text("5.5"), UnitValue::Unset);
}

#[test]
fn pixel_overflow_is_unset() {
    assert_eq!(UnitValue::from_text("99999999999999999999px"), UnitValue::Unset);
}

#[test]
fn percent_with_and_without_fraction() {
    assert_eq!(UnitValue::from_text("50%"), UnitValue::Percent(50.0));
    assert_eq!(UnitValue::from_text("37.5%"), UnitValue::Percent(37.5));
}

#[test]
fn inch_suffix_is_case_insensitive() {
    assert_eq!(UnitValue::from_text("2in"), UnitValue::Inch(2.0));
    assert_eq!(UnitValue::from_text("1.25IN"), UnitValue::Inch(1.25));
}

#[test]
fn trailing_dot_is_accepted_for_percent_and_inch() {
    assert_eq!(UnitValue::from_text("5.in"), UnitValue::Inch(5.0));
    assert_eq!(UnitValue::from_text("5.%"), UnitValue::Percent(5.0));
}

#[test]
fn malformed_strings_are_unset() {
    for s in ["abc", "%%", "", "   ", "px", "%", ".5%", "-5", "+5px", "5 %", "5em", "1e3", "5,5%", "5..5%"] {
        assert_eq!(UnitValue::from_text(s), UnitValue::Unset, "input {s:?}");
    }
}

#[test]
fn percent_suffix_is_exact() {
    assert_eq!(UnitValue::from_text("50%%"), UnitValue::Unset);
}

// =============================================================
// Object literals
// =============================================================

#[test]
fn measure_without_unit_defaults_to_pixels() {
    assert_eq!(UnitValue::parse(&json!({ "val": 9.7 })), UnitValue::Px(9));
    assert_eq!(UnitValue::parse(&json!({ "val": 9.7, "unit": null })), UnitValue::Px(9));
}

#[test]
fn measure_with_declared_units() {
    assert_eq!(UnitValue::parse(&json!({ "val": 3.5, "unit": "px" })), UnitValue::Px(3));
    assert_eq!(UnitValue::parse(&json!({ "val": 12.5, "unit": "%" })), UnitValue::Percent(12.5));
    assert_eq!(UnitValue::parse(&json!({ "val": 0.5, "unit": "in" })), UnitValue::Inch(0.5));
}

#[test]
fn measure_out_of_range_pixels_is_unset() {
    assert_eq!(UnitValue::parse(&json!({ "val": 1e20 })), UnitValue::Unset);
    assert_eq!(UnitValue::parse(&json!({ "val": 1e20, "unit": "px" })), UnitValue::Unset);
}

#[test]
fn measure_with_unknown_unit_is_unset() {
    assert_eq!(UnitValue::parse(&json!({ "val": 3, "unit": "em" })), UnitValue::Unset);
    assert_eq!(UnitValue::parse(&json!({ "val": 3, "unit": "PX" })), UnitValue::Unset);
    assert_eq!(UnitValue::parse(&json!({ "val": 3, "unit": 5 })), UnitValue::Unset);
}

#[test]
fn measure_with_string_val_reparses_text() {
    assert_eq!(UnitValue::parse(&json!({ "val": "25%" })), UnitValue::Percent(25.0));
    // The declared unit is ignored for string values.
    assert_eq!(UnitValue::parse(&json!({ "val": "3in", "unit": "px" })), UnitValue::Inch(3.0));
}

#[test]
fn other_shapes_are_unset() {
    for v in [json!(null), json!(true), json!([1, 2]), json!({}), json!({ "val": [1] })] {
        assert_eq!(UnitValue::parse(&v), UnitValue::Unset, "input {v}");
    }
}

// =============================================================
// Classification
// =============================================================

#[test]
fn classify_shapes() {
    assert_eq!(UnitInput::from(&json!(4)), UnitInput::Number(4.0));
    assert_eq!(UnitInput::from(&json!("4in")), UnitInput::Text("4in"));
    assert_eq!(
        UnitInput::from(&json!({ "val": 2, "unit": "%" })),
        UnitInput::Measure { val: 2.0, unit: DeclaredUnit::Named("%") }
    );
    assert_eq!(UnitInput::from(&json!(false)), UnitInput::Other);
}

// =============================================================
// Accessors
// =============================================================

#[test]
fn kind_and_magnitude() {
    assert_eq!(UnitValue::Px(5).kind(), Some(UnitKind::Pixel));
    assert_eq!(UnitValue::Percent(5.0).kind(), Some(UnitKind::Percent));
    assert_eq!(UnitValue::Inch(5.0).kind(), Some(UnitKind::Inch));
    assert_eq!(UnitValue::Unset.kind(), None);
    assert_eq!(UnitValue::Px(5).magnitude(), Some(5.0));
    assert_eq!(UnitValue::Unset.magnitude(), None);
}

#[test]
fn default_is_unset() {
    assert!(!UnitValue::default().is_set());
}

#[test]
fn display_formats() {
    assert_eq!(UnitValue::Px(10).to_string(), "10px");
    assert_eq!(UnitValue::Percent(12.5).to_string(), "12.5%");
    assert_eq!(UnitValue::Inch(2.0).to_string(), "2in");
    assert_eq!(UnitValue::Unset.to_string(), "unset");
}

#[test]
fn unit_kind_names_match_declared_units() {
    for kind in [UnitKind::Pixel, UnitKind::Percent, UnitKind::Inch] {
        assert_eq!(UnitKind::from_declared(kind.as_str()), Some(kind));
    }
}

#[test]
fn unit_kind_serde_names() {
    assert_eq!(serde_json::to_string(&UnitKind::Percent).unwrap(), "\"%\"");
    let back: UnitKind = serde_json::from_str("\"in\"").unwrap();
    assert_eq!(back, UnitKind::Inch);
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn pixels_resolve_to_themselves() {
    for reference in [0, 1, 200, -50, 10_000] {
        assert_eq!(UnitValue::Px(37).to_px(reference), Some(37));
    }
}

#[test]
fn percent_resolves_against_reference() {
    assert_eq!(UnitValue::Percent(50.0).to_px(200), Some(100));
    assert_eq!(UnitValue::Percent(50.0).to_px(201), Some(100));
    assert_eq!(UnitValue::Percent(100.0).to_px(640), Some(640));
    assert_eq!(UnitValue::Percent(12.5).to_px(80), Some(10));
}

#[test]
fn inch_resolves_at_72_dpi() {
    for reference in [0, 100, 5000] {
        assert_eq!(UnitValue::Inch(1.0).to_px(reference), Some(72));
    }
    assert_eq!(UnitValue::Inch(0.5).to_px(0), Some(36));
    assert_eq!(UnitValue::Inch(1.01).to_px(0), Some(72));
}

#[test]
fn out_of_range_resolution_does_not_resolve() {
    let percent = UnitValue::parse(&json!({ "val": 1e300, "unit": "%" }));
    assert_eq!(percent, UnitValue::Percent(1e300));
    assert_eq!(percent.to_px(100), None);
    assert_eq!(UnitValue::Inch(1e300).to_px(0), None);
    assert_eq!(UnitValue::Percent(100.0).to_px(i64::MAX), None);
}

#[test]
fn unset_does_not_resolve() {
    assert_eq!(UnitValue::Unset.to_px(100), None);
}

#[test]
fn parsed_string_resolves_end_to_end() {
    assert_eq!(UnitValue::from_text("25%").to_px(400), Some(100));
    assert_eq!(UnitValue::from_text("2in").to_px(400), Some(144));
    assert_eq!(UnitValue::from_text("abc").to_px(400), None);
}
