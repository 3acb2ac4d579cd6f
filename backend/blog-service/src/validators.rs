/// Input validation for the blog service
///
/// Free functions over raw input plus collectors that turn violations into
/// per-field messages. These run before persistence; the schema carries the
/// same bounds as a backstop.
use validator::ValidateEmail;

use crate::dto::PostDto;
use crate::error::FieldErrors;

pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 16;
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 32;
pub const TITLE_MAX_LEN: usize = 100;
pub const CONTENT_MAX_LEN: usize = 500;
pub const COMMENT_MAX_LEN: usize = 500;

/// Validates email format according to RFC 5322
pub fn validate_email(email: &str) -> bool {
    email.validate_email()
}

/// Validates password strength
/// Requirements:
/// - Between 8 and 16 characters
/// - At least one uppercase letter
/// - At least one lowercase letter
/// - At least one digit
/// - At least one special character
pub fn validate_password(password: &str) -> bool {
    let len = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return false;
    }

    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(|c| c.is_numeric());
    let has_special = password.chars().any(|c| !c.is_alphanumeric());

    has_upper && has_lower && has_digit && has_special
}

/// Validates username format
/// Requirements:
/// - Length between 3 and 32 characters
/// - Only alphanumeric, underscore, and hyphen allowed
/// - Must start with alphanumeric character
pub fn validate_username(username: &str) -> bool {
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return false;
    }

    let first_char_valid = username
        .chars()
        .next()
        .map(|c| c.is_alphanumeric())
        .unwrap_or(false);

    if !first_char_valid {
        return false;
    }

    username
        .chars()
        .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Collect field errors for a registration payload.
pub fn validate_registration(email: &str, username: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !validate_email(email) {
        errors.push("email", "must be a valid email address");
    }
    if !validate_username(username) {
        errors.push(
            "username",
            "must be 3-32 characters, alphanumeric with - or _",
        );
    }
    if !validate_password(password) {
        errors.push(
            "password",
            "must be 8-16 characters with uppercase, lowercase, digit, and special character",
        );
    }

    errors
}

/// Collect field errors for a login payload.
pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !validate_email(email) {
        errors.push("email", "must be a valid email address");
    }
    if password.is_empty() {
        errors.push("password", "must not be empty");
    }

    errors
}

/// Collect field errors for a post payload, nested comments included.
pub fn validate_post(dto: &PostDto) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if dto.title.trim().is_empty() {
        errors.push("title", "must not be empty");
    } else if dto.title.chars().count() > TITLE_MAX_LEN {
        errors.push("title", "must be at most 100 characters");
    }

    if dto.content.trim().is_empty() {
        errors.push("content", "must not be empty");
    } else if dto.content.chars().count() > CONTENT_MAX_LEN {
        errors.push("content", "must be at most 500 characters");
    }

    for (index, comment) in dto.comments.iter().enumerate() {
        if comment.content.trim().is_empty() {
            errors.push(&format!("comments[{}].content", index), "must not be empty");
        } else if comment.content.chars().count() > COMMENT_MAX_LEN {
            errors.push(
                &format!("comments[{}].content", index),
                "must be at most 500 characters",
            );
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::CommentDto;

    #[test]
    fn valid_email_formats() {
        assert!(validate_email("user@example.com"));
        assert!(validate_email("user+tag@example.co.uk"));
        assert!(validate_email("user_name@sub.domain.com"));
    }

    #[test]
    fn invalid_email_formats() {
        assert!(!validate_email("userexample.com"));
        assert!(!validate_email("user@"));
        assert!(!validate_email("@example.com"));
        assert!(!validate_email(""));
    }

    #[test]
    fn password_policy_accepts_all_classes() {
        assert!(validate_password("Secure1!"));
        assert!(validate_password("MyPassw0rd@2024!"));
    }

    #[test]
    fn password_policy_length_boundaries() {
        // 8 and 16 characters are the inclusive bounds
        assert!(validate_password("Abcde1!x"));
        assert!(validate_password("Abcdefghijkl12!X"));
        assert!(!validate_password("Abcd1!x"));
        assert!(!validate_password("Abcdefghijklm12!X"));
    }

    #[test]
    fn password_policy_requires_each_class() {
        assert!(!validate_password("alllower1!"));
        assert!(!validate_password("ALLUPPER1!"));
        assert!(!validate_password("NoDigits!!"));
        assert!(!validate_password("NoSpecial12"));
    }

    #[test]
    fn username_rule_boundaries() {
        assert!(validate_username("abc"));
        assert!(validate_username(&"a".repeat(32)));
        assert!(!validate_username("ab"));
        assert!(!validate_username(&"a".repeat(33)));
        assert!(validate_username("user_name-1"));
        assert!(!validate_username("_leading"));
        assert!(!validate_username("has space"));
    }

    #[test]
    fn registration_collects_all_field_errors() {
        let errors = validate_registration("bad", "x", "weak");
        assert!(errors.contains("email"));
        assert!(errors.contains("username"));
        assert!(errors.contains("password"));
    }

    #[test]
    fn registration_passes_clean_input() {
        let errors = validate_registration("alice@example.com", "alice", "Secure1!pass");
        assert!(errors.is_empty());
    }

    #[test]
    fn post_bounds_checked_including_comments() {
        let dto = PostDto {
            id: 0,
            title: "t".repeat(101),
            content: String::new(),
            user: None,
            comments: vec![CommentDto {
                id: 0,
                content: "c".repeat(501),
                creation_date: None,
                post_id: 0,
            }],
        };

        let errors = validate_post(&dto);
        assert!(errors.contains("title"));
        assert!(errors.contains("content"));
        assert!(errors.contains("comments[0].content"));
    }

    #[test]
    fn post_at_the_bounds_is_valid() {
        let dto = PostDto {
            id: 1,
            title: "t".repeat(100),
            content: "c".repeat(500),
            user: None,
            comments: vec![CommentDto {
                id: 0,
                content: "c".repeat(500),
                creation_date: None,
                post_id: 1,
            }],
        };

        assert!(validate_post(&dto).is_empty());
    }
}
