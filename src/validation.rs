//! Input validation for the registration endpoint.
//!
//! Shape checks only, executed before any persistence call. Uniqueness of
//! email or mobile number is deliberately not checked here (or anywhere):
//! the store carries no unique index, and this layer preserves that.

use std::sync::OnceLock;

use regex::Regex;

use crate::db::models::NewUser;

/// Exactly five digits.
const PIN_PATTERN: &str = r"^\d{5}$";

/// Bangladesh-style mobile number: `01` followed by nine digits.
const MOBILE_PATTERN: &str = r"^01\d{9}$";

fn pin_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(PIN_PATTERN).unwrap())
}

fn mobile_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MOBILE_PATTERN).unwrap())
}

/// Validate a registration payload.
///
/// Requires a non-empty name and email, a PIN of exactly five digits, and a
/// mobile number matching `01` + nine digits. Returns a short reason on the
/// first failed check; the HTTP layer collapses all of them to one generic
/// 400 response.
pub fn validate_registration(new_user: &NewUser) -> Result<(), String> {
    if new_user.name.is_empty() {
        return Err("name is required".to_string());
    }
    if new_user.email.is_empty() {
        return Err("email is required".to_string());
    }
    if !pin_regex().is_match(&new_user.pin) {
        return Err("pin must be exactly 5 digits".to_string());
    }
    if !mobile_regex().is_match(&new_user.mobile_number) {
        return Err("mobileNumber must be 01 followed by 9 digits".to_string());
    }
    Ok(())
}
