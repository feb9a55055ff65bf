//! Guardian input validation.
//!
//! A guardian must always carry a non-empty name, email and phone. Input
//! arrives with every field optional so that a missing field and an empty
//! one are rejected the same way, by [`GuardianInput::into_fields`], rather
//! than by the request extractor.

use serde::Deserialize;
use validator::Validate;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Entity name used in `NotFound` errors.
pub const ENTITY_NAME: &str = "Guardian";

/// Message returned when any required field is missing or empty.
pub const REQUIRED_FIELDS_MESSAGE: &str = "name, email and phone are required";

/// Message returned when the email is already taken by another guardian.
pub const DUPLICATE_EMAIL_MESSAGE: &str = "this email is already registered";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Raw guardian fields as submitted by a caller.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct GuardianInput {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
}

/// Guardian fields that passed the required-field check. All non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardianFields {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl GuardianInput {
    pub fn new(name: &str, email: &str, phone: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            phone: Some(phone.to_string()),
        }
    }

    /// Names of the fields that are missing or empty, in declaration order.
    pub fn invalid_fields(&self) -> Vec<&'static str> {
        let errors = match self.validate() {
            Ok(()) => return Vec::new(),
            Err(errors) => errors,
        };
        let failed = errors.field_errors();
        ["name", "email", "phone"]
            .into_iter()
            .filter(|field| failed.contains_key(*field))
            .collect()
    }

    /// Check that name, email and phone are all present and non-empty.
    ///
    /// Whitespace is not trimmed: `" "` counts as a value.
    pub fn into_fields(self) -> Result<GuardianFields, CoreError> {
        if self.validate().is_err() {
            return Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }
        match (self.name, self.email, self.phone) {
            (Some(name), Some(email), Some(phone)) => Ok(GuardianFields { name, email, phone }),
            _ => Err(CoreError::Validation(REQUIRED_FIELDS_MESSAGE.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn complete_input_is_accepted() {
        let fields = GuardianInput::new("Ana", "ana@example.com", "555-0100")
            .into_fields()
            .unwrap();
        assert_eq!(fields.name, "Ana");
        assert_eq!(fields.email, "ana@example.com");
        assert_eq!(fields.phone, "555-0100");
    }

    #[test]
    fn empty_name_is_rejected() {
        let result = GuardianInput::new("", "a@b.com", "123").into_fields();
        assert_matches!(result, Err(CoreError::Validation(msg)) if msg == REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn empty_email_is_rejected() {
        let result = GuardianInput::new("Ana", "", "123").into_fields();
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn empty_phone_is_rejected() {
        let result = GuardianInput::new("Ana", "a@b.com", "").into_fields();
        assert_matches!(result, Err(CoreError::Validation(_)));
    }

    #[test]
    fn absent_fields_are_rejected() {
        let input = GuardianInput {
            name: None,
            email: Some("a@b.com".into()),
            phone: Some("123".into()),
        };
        assert_matches!(input.into_fields(), Err(CoreError::Validation(_)));
        assert_matches!(
            GuardianInput::default().into_fields(),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn whitespace_counts_as_a_value() {
        assert!(GuardianInput::new(" ", "a@b.com", "123").into_fields().is_ok());
    }

    #[test]
    fn invalid_fields_lists_offenders_in_order() {
        let input = GuardianInput {
            name: Some("Ana".into()),
            email: None,
            phone: Some(String::new()),
        };
        assert_eq!(input.invalid_fields(), vec!["email", "phone"]);
        assert!(GuardianInput::new("a", "b", "c").invalid_fields().is_empty());
    }

    #[test]
    fn missing_json_fields_deserialize_as_none() {
        let input: GuardianInput = serde_json::from_str(r#"{"name":"Ana"}"#).unwrap();
        assert_eq!(input.name.as_deref(), Some("Ana"));
        assert!(input.email.is_none());
        assert!(input.phone.is_none());
    }
}
