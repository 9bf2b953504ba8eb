use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").unwrap()
});

/// Trimmed name must be at least 2 characters.
pub fn validate_name(name: &str) -> bool {
    name.trim().chars().count() >= 2
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Phone is optional; when present it must be all digits and at least 10 long.
pub fn validate_phone(phone: &str) -> bool {
    if phone.is_empty() {
        return true;
    }
    phone.len() >= 10 && phone.chars().all(|c| c.is_ascii_digit())
}
