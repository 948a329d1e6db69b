// --- File: crates/contactify_ui/src/validate.rs ---
//! Field validation rules for the contact form.
//!
//! All four fields are mandatory; the email must have a standard address
//! shape and the phone number must be decimal digits only. Each rule returns
//! the message shown next to the field, so the same functions back both the
//! inline prompt validators and the submission gate.

use contactify_common::ContactDraft;

pub fn validate_first_name(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Please enter the first name".to_string());
    }
    Ok(())
}

pub fn validate_last_name(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Please enter the last name".to_string());
    }
    Ok(())
}

pub fn validate_email(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Please enter the email address".to_string());
    }
    if !is_email(value) {
        return Err("The email address is invalid".to_string());
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err("Please enter the phone number".to_string());
    }
    // ^[0-9]+$
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err("Please enter a valid phone number".to_string());
    }
    Ok(())
}

/// Check every field of a draft; returns the list of messages for the rules
/// that failed, empty when the draft is submittable.
pub fn validate_draft(draft: &ContactDraft) -> Vec<String> {
    [
        validate_first_name(&draft.first_name),
        validate_last_name(&draft.last_name),
        validate_email(&draft.email),
        validate_phone(&draft.phone),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect()
}

/// Standard address shape: one `@`, non-empty local part, dotted domain,
/// no whitespace anywhere.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
