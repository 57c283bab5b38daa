//! Shared field checks used by the form validators
//!
//! Each check returns the message to show, or `None` when the value passes.

use regex::Regex;
use std::sync::LazyLock;

// Something, `@`, something, `.`, something. Unanchored.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("EMAIL_REGEX: invalid regex pattern")
});

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MIN_MESSAGE_LEN: usize = 10;
pub const MAX_MESSAGE_LEN: usize = 500;

pub const EMAIL_REQUIRED: &str = "Email is required.";
pub const EMAIL_INVALID: &str = "Enter a valid email address.";
pub const EMAIL_INVALID_SHORT: &str = "Enter a valid email.";
pub const PASSWORD_REQUIRED: &str = "Password is required.";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password.";
pub const CONFIRM_MISMATCH: &str = "Passwords do not match.";
pub const MESSAGE_REQUIRED: &str = "Message cannot be empty.";
pub const MESSAGE_TOO_SHORT: &str = "Message must be at least 10 characters.";

/// Permissive email format check
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Required email with a per-form format message
pub fn check_email(email: &str, invalid_message: &'static str) -> Option<&'static str> {
    if email.is_empty() {
        Some(EMAIL_REQUIRED)
    } else if !is_valid_email(email) {
        Some(invalid_message)
    } else {
        None
    }
}

/// Required password of at least six characters
pub fn check_password(password: &str, too_short_message: &'static str) -> Option<&'static str> {
    if password.is_empty() {
        Some(PASSWORD_REQUIRED)
    } else if password.chars().count() < MIN_PASSWORD_LEN {
        Some(too_short_message)
    } else {
        None
    }
}

/// Confirmation must be present and equal the password exactly
pub fn check_confirmation(password: &str, confirm: &str) -> Option<&'static str> {
    if confirm.is_empty() {
        Some(CONFIRM_REQUIRED)
    } else if confirm != password {
        Some(CONFIRM_MISMATCH)
    } else {
        None
    }
}

/// Value must contain something other than whitespace
pub fn check_required_trimmed(value: &str, message: &'static str) -> Option<&'static str> {
    if value.trim().is_empty() {
        Some(message)
    } else {
        None
    }
}

/// Contact message: required, and at least ten characters once trimmed
pub fn check_message(message: &str) -> Option<&'static str> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        Some(MESSAGE_REQUIRED)
    } else if trimmed.chars().count() < MIN_MESSAGE_LEN {
        Some(MESSAGE_TOO_SHORT)
    } else {
        None
    }
}

/// Whether a raw message still fits in the input limit
pub fn fits_message_limit(raw: &str) -> bool {
    raw.chars().count() <= MAX_MESSAGE_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    mod email {
        use super::*;

        #[test]
        fn test_minimal_address_passes() {
            assert!(is_valid_email("a@b.c"));
            assert_eq!(check_email("a@b.c", EMAIL_INVALID), None);
        }

        #[test]
        fn test_missing_at_fails() {
            assert_eq!(
                check_email("not-an-email", EMAIL_INVALID),
                Some("Enter a valid email address.")
            );
            assert_eq!(
                check_email("not-an-email", EMAIL_INVALID_SHORT),
                Some("Enter a valid email.")
            );
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(check_email("", EMAIL_INVALID), Some("Email is required."));
        }

        #[test]
        fn test_pattern_is_permissive() {
            // Unanchored: surrounding junk is tolerated
            assert!(is_valid_email("  x@y.z  "));
            assert!(is_valid_email("a@@b..c"));
            assert!(!is_valid_email("a@b"));
            assert!(!is_valid_email("a @b.c"));
        }

        #[test]
        fn test_whitespace_only_is_invalid_not_missing() {
            assert_eq!(check_email("   ", EMAIL_INVALID), Some(EMAIL_INVALID));
        }
    }

    mod password {
        use super::*;

        const LOGIN_SHORT: &str = "Password must be at least 6 characters.";

        #[test]
        fn test_short_password_fails() {
            assert_eq!(check_password("abc", LOGIN_SHORT), Some(LOGIN_SHORT));
        }

        #[test]
        fn test_six_characters_pass() {
            assert_eq!(check_password("abcdef", LOGIN_SHORT), None);
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(check_password("", LOGIN_SHORT), Some(PASSWORD_REQUIRED));
        }

        #[test]
        fn test_length_counts_characters_not_bytes() {
            assert_eq!(check_password("ééééé", LOGIN_SHORT), Some(LOGIN_SHORT));
            assert_eq!(check_password("éééééé", LOGIN_SHORT), None);
        }
    }

    mod confirmation {
        use super::*;

        #[test]
        fn test_mismatch() {
            assert_eq!(
                check_confirmation("abc123", "abc124"),
                Some("Passwords do not match.")
            );
        }

        #[test]
        fn test_match() {
            assert_eq!(check_confirmation("abc123", "abc123"), None);
        }

        #[test]
        fn test_empty_is_required() {
            assert_eq!(check_confirmation("abc123", ""), Some(CONFIRM_REQUIRED));
        }

        #[test]
        fn test_comparison_is_exact() {
            assert_eq!(
                check_confirmation("abc123", "abc123 "),
                Some(CONFIRM_MISMATCH)
            );
        }
    }

    mod message {
        use super::*;

        #[test]
        fn test_blank_is_required() {
            assert_eq!(check_message("   \n "), Some(MESSAGE_REQUIRED));
        }

        #[test]
        fn test_short_after_trim() {
            assert_eq!(check_message("   too short   "), Some(MESSAGE_TOO_SHORT));
        }

        #[test]
        fn test_ten_characters_pass() {
            assert_eq!(check_message("0123456789"), None);
        }

        #[test]
        fn test_limit() {
            assert!(fits_message_limit(&"x".repeat(500)));
            assert!(!fits_message_limit(&"x".repeat(501)));
        }

        #[test]
        fn test_required_trimmed() {
            assert_eq!(check_required_trimmed("  ", "Needed."), Some("Needed."));
            assert_eq!(check_required_trimmed(" Jane ", "Needed."), None);
        }
    }
}
