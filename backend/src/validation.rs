//! Input checks shared by the admin CLI and any client that wants the same
//! rules the dashboard forms apply before submitting.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters long";
pub const PASSWORD_NO_LOWERCASE: &str = "Password must contain at least one lowercase letter";
pub const PASSWORD_NO_NUMBER: &str = "Password must contain at least one number";

pub const MEDICATION_NAME_REQUIRED: &str = "Medication name is required";
pub const DOSAGE_REQUIRED: &str = "Dosage is required";
pub const FREQUENCY_OUT_OF_RANGE: &str = "Frequency must be between 1 and 10 times per day";

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordValidation {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

/// Each failed rule contributes one message, in a fixed order.
pub fn validate_password(password: &str) -> PasswordValidation {
    let mut errors = Vec::new();

    if password.chars().count() < 6 {
        errors.push(PASSWORD_TOO_SHORT);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push(PASSWORD_NO_LOWERCASE);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push(PASSWORD_NO_NUMBER);
    }

    PasswordValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationFormValidation {
    pub is_valid: bool,
    /// Keyed by form field: `name`, `dosage`, `frequency`.
    pub errors: BTreeMap<&'static str, &'static str>,
}

pub fn validate_medication_form(name: &str, dosage: &str, frequency: i64) -> MedicationFormValidation {
    let mut errors = BTreeMap::new();

    if name.trim().is_empty() {
        errors.insert("name", MEDICATION_NAME_REQUIRED);
    }
    if dosage.trim().is_empty() {
        errors.insert("dosage", DOSAGE_REQUIRED);
    }
    if !(1..=10).contains(&frequency) {
        errors.insert("frequency", FREQUENCY_OUT_OF_RANGE);
    }

    MedicationFormValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}
