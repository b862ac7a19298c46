//! Numeric routine tests

use circdesk::numeric::{
    bmi, bmi_report, categorize, even_numbers, even_summary, BmiCategory, Category,
};
use circdesk::AppError;

#[test]
fn even_numbers_filters_in_order() {
    let values: Vec<i64> = (0..10).collect();
    assert_eq!(even_numbers(&values), [0, 2, 4, 6, 8]);
}

#[test]
fn even_summary_totals_and_averages() {
    let values: Vec<i64> = (0..10).collect();
    let summary = even_summary(&values);
    assert_eq!(summary.evens, [0, 2, 4, 6, 8]);
    assert_eq!(summary.total, 20);
    assert_eq!(summary.average, 4.0);
}

#[test]
fn even_summary_without_evens_averages_zero() {
    let summary = even_summary(&[1, 3, 7]);
    assert!(summary.evens.is_empty());
    assert_eq!(summary.total, 0);
    assert_eq!(summary.average, 0.0);
}

#[test]
fn categorize_band_boundaries() {
    let grouped = categorize(&[-5, 0, 1, 10, 11]);
    assert_eq!(grouped[&Category::Low], [-5, 0]);
    assert_eq!(grouped[&Category::Medium], [1, 10]);
    assert_eq!(grouped[&Category::High], [11]);
}

#[test]
fn categorize_keeps_empty_bands() {
    let grouped = categorize(&[]);
    assert_eq!(grouped.len(), 3);
    assert!(grouped[&Category::Low].is_empty());
    assert!(grouped[&Category::Medium].is_empty());
    assert!(grouped[&Category::High].is_empty());
}

#[test]
fn bmi_rejects_non_positive_height() {
    let err = bmi(70.0, 0.0).expect_err("zero height");
    assert!(matches!(err, AppError::Validation(_)));
    let err = bmi(70.0, -1.7).expect_err("negative height");
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn bmi_classification_bands() {
    let (value, category) = bmi(50.0, 1.8).expect("bmi");
    assert!(value < 18.5);
    assert_eq!(category, BmiCategory::Underweight);

    let (_, category) = bmi(68.0, 1.7).expect("bmi");
    assert_eq!(category, BmiCategory::NormalWeight);

    let (_, category) = bmi(80.0, 1.7).expect("bmi");
    assert_eq!(category, BmiCategory::Overweight);

    let (_, category) = bmi(95.0, 1.7).expect("bmi");
    assert_eq!(category, BmiCategory::Obese);
}

#[test]
fn bmi_band_edges_are_contiguous() {
    // weight chosen so bmi is exactly the band edge for a 1 m height
    let (_, category) = bmi(18.5, 1.0).expect("bmi");
    assert_eq!(category, BmiCategory::NormalWeight);
    let (_, category) = bmi(25.0, 1.0).expect("bmi");
    assert_eq!(category, BmiCategory::Overweight);
    let (_, category) = bmi(30.0, 1.0).expect("bmi");
    assert_eq!(category, BmiCategory::Obese);
}

#[test]
fn bmi_report_formats_value_and_category() {
    let report = bmi_report(68.0, 1.7).expect("report");
    assert_eq!(report, "BMI: 23.53, Category: Normal weight");
}
