//! Shape and syntax checks for share requests.
//!
//! Each function inspects one field of the raw JSON body and either
//! returns the typed value or the [`ShareError`] to report.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

use docshare_core::types::SharePermission;

use super::error::ShareError;

/// Check an address against `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// That is: exactly one `@`, no whitespace, a non-empty local part, and a
/// domain with a dot that is neither its first nor its last character.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Return the entries that fail [`is_valid_email`], in request order.
pub fn invalid_emails(emails: &[String]) -> Vec<String> {
    emails
        .iter()
        .filter(|e| !is_valid_email(e))
        .cloned()
        .collect()
}

/// `userEmails` must be a non-empty array of strings.
pub fn parse_user_emails(value: Option<&Value>) -> Result<Vec<String>, ShareError> {
    let invalid = || ShareError::invalid("userEmails must be a non-empty array of email addresses");
    let items = value.and_then(Value::as_array).ok_or_else(invalid)?;
    if items.is_empty() {
        return Err(invalid());
    }
    items
        .iter()
        .map(|v| v.as_str().map(str::to_string).ok_or_else(invalid))
        .collect()
}

/// `permission` must be exactly `READ`, `WRITE`, or `ADMIN`.
pub fn parse_permission(value: Option<&Value>) -> Result<SharePermission, ShareError> {
    value
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| ShareError::invalid("Invalid permission. Must be READ, WRITE, or ADMIN"))
}

/// Parse a timestamp string: RFC 3339, a naive date-time (taken as UTC),
/// or a bare date (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `expiresAt` is optional (`null` counts as absent) and must lie strictly
/// after `now`.
pub fn parse_expires_at(
    value: Option<&Value>,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, ShareError> {
    let raw = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s,
        Some(_) => return Err(ShareError::invalid("Invalid expiration date")),
    };
    let expires_at =
        parse_timestamp(raw).ok_or_else(|| ShareError::invalid("Invalid expiration date"))?;
    if expires_at <= now {
        return Err(ShareError::invalid("Expiration date must be in the future"));
    }
    Ok(Some(expires_at))
}
