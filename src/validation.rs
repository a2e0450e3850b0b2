//! Pure field validators for the onboarding forms.
//!
//! Each validator takes one form-data shape and returns a map from field
//! name to a human-readable message; an empty map means valid. No I/O.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::types::{BusinessInfo, PersonalInfo, PreferencesDraft};

/// Field name → error message. Empty means valid.
pub type FieldErrors = HashMap<String, String>;

fn re_email() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Validate wizard step 1 (name + email).
pub fn validate_personal_info(info: &PersonalInfo) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let name = info.name.trim();
    if name.is_empty() {
        errors.insert("name".to_string(), "Name is required".to_string());
    } else if name.chars().count() < 2 {
        errors.insert(
            "name".to_string(),
            "Name must be at least 2 characters".to_string(),
        );
    }

    if info.email.trim().is_empty() {
        errors.insert("email".to_string(), "Email is required".to_string());
    } else if !re_email().is_match(&info.email) {
        errors.insert(
            "email".to_string(),
            "Please enter a valid email address".to_string(),
        );
    }

    errors
}

/// Validate wizard step 2 (company + industry/size selections).
pub fn validate_business_info(info: &BusinessInfo) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let company = info.company.trim();
    if company.is_empty() {
        errors.insert(
            "company".to_string(),
            "Company name is required".to_string(),
        );
    } else if company.chars().count() < 2 {
        errors.insert(
            "company".to_string(),
            "Company name must be at least 2 characters".to_string(),
        );
    }

    if info.industry.is_empty() {
        errors.insert(
            "industry".to_string(),
            "Please select an industry".to_string(),
        );
    }

    if info.size.is_empty() {
        errors.insert("size".to_string(), "Please select company size".to_string());
    }

    errors
}

/// Validate wizard step 3 (theme + layout selections).
pub fn validate_preferences(draft: &PreferencesDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.theme.is_none() {
        errors.insert(
            "theme".to_string(),
            "Please select a theme preference".to_string(),
        );
    }

    if draft.dashboard_layout.is_none() {
        errors.insert(
            "dashboardLayout".to_string(),
            "Please select a dashboard layout".to_string(),
        );
    }

    errors
}
