//! Shape validation for the contact fields of a submission.
//!
//! Intentionally strict and naive: no trimming, no case folding, no
//! international phone formats. Email is checked before phone; the first
//! failure wins.

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::AppError;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();

fn email_re() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern compiles")
    })
}

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"))
}

/// Fails unless the string matches `local@domain.tld` — alphanumerics and
/// `._%+-` in the local part, dot-separated domain, TLD of 2+ letters.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    if email_re().is_match(email) {
        Ok(())
    } else {
        Err(AppError::InvalidEmail)
    }
}

/// Fails unless the string is exactly 10 decimal digits.
pub fn validate_phone(phone: &str) -> Result<(), AppError> {
    if phone_re().is_match(phone) {
        Ok(())
    } else {
        Err(AppError::InvalidPhone)
    }
}
