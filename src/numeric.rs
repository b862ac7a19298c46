//! Standalone numeric routines
//!
//! Small self-contained helpers that ship alongside the tracker:
//! even-number filtering, value categorization and BMI calculation.
//! Not reachable from the circulation menu.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// Evens from `values`, order preserved
pub fn even_numbers(values: &[i64]) -> Vec<i64> {
    values.iter().copied().filter(|n| n % 2 == 0).collect()
}

/// Evens plus their total and average
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvenSummary {
    pub evens: Vec<i64>,
    pub total: i64,
    pub average: f64,
}

/// Filter evens and compute their total and average (0.0 when none)
pub fn even_summary(values: &[i64]) -> EvenSummary {
    let evens = even_numbers(values);
    let total: i64 = evens.iter().sum();
    let average = if evens.is_empty() {
        0.0
    } else {
        total as f64 / evens.len() as f64
    };
    EvenSummary {
        evens,
        total,
        average,
    }
}

// ---------------------------------------------------------------------------
// Categorization
// ---------------------------------------------------------------------------

/// Value band for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Low,
    Medium,
    High,
}

impl Category {
    /// Low is everything at or below zero, Medium is 1..=10, High the rest
    pub fn of(value: i64) -> Self {
        match value {
            v if v <= 0 => Category::Low,
            1..=10 => Category::Medium,
            _ => Category::High,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Category::Low => "Low",
            Category::Medium => "Medium",
            Category::High => "High",
        };
        write!(f, "{}", label)
    }
}

/// Group values into bands; every band is present even when empty
pub fn categorize(values: &[i64]) -> IndexMap<Category, Vec<i64>> {
    let mut categories: IndexMap<Category, Vec<i64>> =
        [Category::Low, Category::Medium, Category::High]
            .into_iter()
            .map(|c| (c, Vec::new()))
            .collect();
    for &value in values {
        if let Some(bucket) = categories.get_mut(&Category::of(value)) {
            bucket.push(value);
        }
    }
    categories
}

// ---------------------------------------------------------------------------
// BMI
// ---------------------------------------------------------------------------

/// BMI classification bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obesity",
        };
        write!(f, "{}", label)
    }
}

/// Body mass index and its classification; height must be positive
pub fn bmi(weight_kg: f64, height_m: f64) -> AppResult<(f64, BmiCategory)> {
    if height_m <= 0.0 {
        return Err(AppError::Validation("Height must be positive".to_string()));
    }
    let value = weight_kg / (height_m * height_m);
    let category = if value < 18.5 {
        BmiCategory::Underweight
    } else if value < 25.0 {
        BmiCategory::NormalWeight
    } else if value < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };
    Ok((value, category))
}

/// Formatted one-line BMI report
pub fn bmi_report(weight_kg: f64, height_m: f64) -> AppResult<String> {
    let (value, category) = bmi(weight_kg, height_m)?;
    Ok(format!("BMI: {:.2}, Category: {}", value, category))
}
