//! Product payload validation.
//!
//! # Responsibilities
//! - Check every field rule of a wire payload before it reaches the store
//! - Report all violations, not just the first
//!
//! # Design Decisions
//! - Pure function: `&ProductDto → Result<(), ValidationErrors>`
//! - Lengths are counted in characters, not bytes
//! - Violations are ordered by field: name, description, price

use serde::Serialize;
use std::fmt;

use crate::product::model::ProductDto;

pub const NAME_MAX_LEN: usize = 50;
pub const DESCRIPTION_MIN_LEN: usize = 20;
pub const DESCRIPTION_MAX_LEN: usize = 200;
pub const PRICE_MIN: f64 = 0.0;

pub const NAME_BLANK: &str = "The product name cannot be blank";
pub const NAME_TOO_LONG: &str = "The product name cannot be longer than 50 characters";
pub const DESCRIPTION_BLANK: &str = "The product description cannot be blank";
pub const DESCRIPTION_LENGTH: &str = "The product description must be between 20 and 200 characters";
pub const PRICE_NULL: &str = "The product price cannot be null";
pub const PRICE_NEGATIVE: &str = "The product price cannot be lower than 0";

/// A single violated field constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldViolation {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Non-empty list of violations for one payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Human-readable summary, one message per violation.
    pub fn message(&self) -> String {
        self.0
            .iter()
            .map(|v| v.message)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Validation failed: ")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Check a wire payload against the product field rules.
pub fn validate_product(dto: &ProductDto) -> Result<(), ValidationErrors> {
    let mut violations = Vec::new();

    if is_blank(&dto.name) {
        violations.push(FieldViolation::new("name", NAME_BLANK));
    }
    if dto.name.chars().count() > NAME_MAX_LEN {
        violations.push(FieldViolation::new("name", NAME_TOO_LONG));
    }

    if is_blank(&dto.description) {
        violations.push(FieldViolation::new("description", DESCRIPTION_BLANK));
    }
    let description_len = dto.description.chars().count();
    if !(DESCRIPTION_MIN_LEN..=DESCRIPTION_MAX_LEN).contains(&description_len) {
        violations.push(FieldViolation::new("description", DESCRIPTION_LENGTH));
    }

    match dto.price {
        None => violations.push(FieldViolation::new("price", PRICE_NULL)),
        Some(price) if price.is_nan() || price < PRICE_MIN => {
            violations.push(FieldViolation::new("price", PRICE_NEGATIVE));
        }
        Some(_) => {}
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(violations))
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTION: &str = "A twenty-plus character description text";

    fn messages(dto: &ProductDto) -> Vec<&'static str> {
        validate_product(dto)
            .unwrap_err()
            .violations()
            .iter()
            .map(|v| v.message)
            .collect()
    }

    #[test]
    fn test_valid_payload() {
        let dto = ProductDto::new("Pen", DESCRIPTION, 1.5);
        assert!(validate_product(&dto).is_ok());
    }

    #[test]
    fn test_boundaries_accepted() {
        let dto = ProductDto::new("n".repeat(50), "d".repeat(20), 0.0);
        assert!(validate_product(&dto).is_ok());

        let dto = ProductDto::new("n", "d".repeat(200), 0.0);
        assert!(validate_product(&dto).is_ok());
    }

    #[test]
    fn test_three_violations() {
        let dto = ProductDto::new("", "short", -1.0);
        let errors = validate_product(&dto).unwrap_err();

        assert_eq!(errors.len(), 3);
        let fields: Vec<_> = errors.violations().iter().map(|v| v.field).collect();
        assert_eq!(fields, vec!["name", "description", "price"]);
        assert_eq!(
            messages(&dto),
            vec![NAME_BLANK, DESCRIPTION_LENGTH, PRICE_NEGATIVE]
        );
    }

    #[test]
    fn test_name_too_long() {
        let dto = ProductDto::new("n".repeat(51), DESCRIPTION, 1.0);
        assert_eq!(messages(&dto), vec![NAME_TOO_LONG]);
    }

    #[test]
    fn test_whitespace_name_is_blank() {
        let dto = ProductDto::new("   ", DESCRIPTION, 1.0);
        assert_eq!(messages(&dto), vec![NAME_BLANK]);
    }

    #[test]
    fn test_description_too_long() {
        let dto = ProductDto::new("Pen", "d".repeat(201), 1.0);
        assert_eq!(messages(&dto), vec![DESCRIPTION_LENGTH]);
    }

    #[test]
    fn test_blank_description_reports_both_rules() {
        let dto = ProductDto::new("Pen", "", 1.0);
        assert_eq!(messages(&dto), vec![DESCRIPTION_BLANK, DESCRIPTION_LENGTH]);
    }

    #[test]
    fn test_missing_price() {
        let dto = ProductDto {
            price: None,
            ..ProductDto::new("Pen", DESCRIPTION, 0.0)
        };
        assert_eq!(messages(&dto), vec![PRICE_NULL]);
    }

    #[test]
    fn test_nan_price_rejected() {
        let dto = ProductDto::new("Pen", DESCRIPTION, f64::NAN);
        assert_eq!(messages(&dto), vec![PRICE_NEGATIVE]);
    }

    #[test]
    fn test_length_counts_characters() {
        // 20 characters, 40 bytes
        let dto = ProductDto::new("Pen", "é".repeat(20), 1.0);
        assert!(validate_product(&dto).is_ok());
    }

    #[test]
    fn test_message_joins_violations() {
        let errors = validate_product(&ProductDto::new("", DESCRIPTION, -2.0)).unwrap_err();
        assert_eq!(errors.message(), format!("{}; {}", NAME_BLANK, PRICE_NEGATIVE));
    }
}
