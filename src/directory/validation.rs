//! Commit-time field validation.
//!
//! Each form field carries a required rule, a character-class pattern, and
//! an optional maximum length. Validation resolves to at most one message
//! per field, chosen by priority: required, then pattern, then max length.

use log::*;
use regex::Regex;

/// Message shown for an empty required field.
const REQUIRED_MESSAGE: &str = "The field is required";

/// Message shown for a name containing anything but letters and spaces.
const NAME_PATTERN_MESSAGE: &str = "It should contain only Alphabets and Space";

/// Message shown for a mobile number containing anything but digits.
const MOBILE_PATTERN_MESSAGE: &str = "It should contain only Numbers";

/// Message shown for a malformed email address.
const EMAIL_PATTERN_MESSAGE: &str = "A valid email address starts with a letter, followed by \
1 to 10 letters, digits or dots,\nthen '@', a domain of 2 to 20 letters, a dot, and an \
ending of 2 to 10 letters.\nEg: john.doe3@gmail.com is a valid email address.";

/// Specifying the three directory form fields.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Mobile,
    Email,
}

impl Field {
    /// Return all fields in form order.
    ///
    pub fn all() -> [Field; 3] {
        [Field::Name, Field::Mobile, Field::Email]
    }

    /// Return the display label for the field.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Mobile => "Mobile",
            Field::Email => "Email",
        }
    }

    /// Return the full-match pattern for the field's character rules.
    ///
    fn pattern(&self) -> &'static str {
        match self {
            Field::Name => r"^[a-zA-Z ]+$",
            Field::Mobile => r"^[0-9]+$",
            Field::Email => r"^[a-zA-Z][a-zA-Z0-9.]{1,10}@[a-zA-Z]{2,20}\.[a-zA-Z]{2,10}$",
        }
    }

    /// Return the configured maximum length, if the field has one. The email
    /// pattern already bounds its own length.
    ///
    fn max_length(&self) -> Option<usize> {
        match self {
            Field::Name => Some(20),
            Field::Mobile => Some(10),
            Field::Email => None,
        }
    }

    /// Return the pattern-mismatch message for the field.
    ///
    fn pattern_message(&self) -> &'static str {
        match self {
            Field::Name => NAME_PATTERN_MESSAGE,
            Field::Mobile => MOBILE_PATTERN_MESSAGE,
            Field::Email => EMAIL_PATTERN_MESSAGE,
        }
    }
}

/// Validate a committed field value. Returns the single most relevant error
/// message, or `None` when the value is acceptable. Required takes precedence
/// over pattern mismatch, which takes precedence over max length, so only one
/// message is ever produced even when several rules fail at once.
///
pub fn validate(field: Field, value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(REQUIRED_MESSAGE.to_string());
    }
    if !pattern_matches(field.pattern(), value) {
        return Some(field.pattern_message().to_string());
    }
    if let Some(max) = field.max_length() {
        if value.chars().count() > max {
            return Some(format!(
                "It should be less than or equal to {} characters in length",
                max
            ));
        }
    }
    None
}

/// Return whether the value matches the given pattern. The patterns are
/// compile-time constants, so a compile failure is treated as a match and
/// logged rather than surfaced.
///
fn pattern_matches(pattern: &str, value: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(value),
        Err(e) => {
            warn!("Failed to compile regex pattern '{}': {}", pattern, e);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_value_is_required_for_all_fields() {
        for field in Field::all() {
            assert_eq!(validate(field, ""), Some(REQUIRED_MESSAGE.to_string()));
        }
    }

    #[test]
    fn test_valid_values_produce_no_error() {
        assert_eq!(validate(Field::Name, "Jane Doe"), None);
        assert_eq!(validate(Field::Mobile, "1234567890"), None);
        assert_eq!(validate(Field::Email, "john.doe3@gmail.com"), None);
    }

    #[test]
    fn test_name_pattern_mismatch() {
        let error = validate(Field::Name, "Jane3");
        assert_eq!(error, Some(NAME_PATTERN_MESSAGE.to_string()));
    }

    #[test]
    fn test_name_pattern_takes_precedence_over_length() {
        // Both pattern and length fail; only the pattern message is produced
        let value = "Jane3 Doe with a very long trailing part";
        let error = validate(Field::Name, value);
        assert_eq!(error, Some(NAME_PATTERN_MESSAGE.to_string()));
    }

    #[test]
    fn test_name_max_length() {
        let value = "Janet Elizabeth Doeson"; // 22 chars, letters and spaces only
        let error = validate(Field::Name, value);
        assert_eq!(
            error,
            Some("It should be less than or equal to 20 characters in length".to_string())
        );
    }

    #[test]
    fn test_mobile_pattern_mismatch() {
        let error = validate(Field::Mobile, "12345abc");
        assert_eq!(error, Some(MOBILE_PATTERN_MESSAGE.to_string()));
    }

    #[test]
    fn test_mobile_max_length() {
        let error = validate(Field::Mobile, "12345678901");
        assert_eq!(
            error,
            Some("It should be less than or equal to 10 characters in length".to_string())
        );
    }

    #[test]
    fn test_email_pattern_mismatch() {
        let cases = [
            "3john@gmail.com",           // must start with a letter
            "john",                      // no domain
            "john@gmail",                // no suffix
            "john@g.com",                // domain shorter than 2 letters
            "j@gmail.com",               // no chars between first letter and '@'
            "john.doe3@gmail.c",         // suffix shorter than 2 letters
            "john doe@gmail.com",        // space not allowed
            "johnjohnjohn@gmail.com",    // local part longer than 11 chars
        ];
        for value in cases {
            let error = validate(Field::Email, value);
            assert_eq!(
                error,
                Some(EMAIL_PATTERN_MESSAGE.to_string()),
                "expected pattern error for '{}'",
                value
            );
        }
    }

    #[test]
    fn test_email_message_ends_with_example() {
        let error = validate(Field::Email, "not-an-email").unwrap();
        assert!(error.contains('\n'));
        assert!(error.ends_with("john.doe3@gmail.com is a valid email address."));
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(Field::Name.label(), "Name");
        assert_eq!(Field::Mobile.label(), "Mobile");
        assert_eq!(Field::Email.label(), "Email");
    }

    #[test]
    fn test_field_order() {
        assert_eq!(Field::all(), [Field::Name, Field::Mobile, Field::Email]);
    }
}
