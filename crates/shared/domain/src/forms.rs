//! Form shapes accepted by the web layer.
//!
//! Each form is deserialized from an urlencoded body and checked with
//! `validator`. `validated()` is the single entry point: it either returns
//! the data the caller may act on, or the per-field messages to show next to
//! the inputs.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

use crate::constants::{
    MSG_FIELD_REQUIRED, MSG_INVALID_EMAIL, MSG_NAME_LENGTH, NAME_MAX_LENGTH, NAME_MIN_LENGTH,
};
use crate::user::NewUser;

/// Error code of the required check; it masks any other error on the field.
const REQUIRED_CODE: &str = "required";

const LENGTH_CODE: &str = "length";
const EMAIL_CODE: &str = "email";

/// Name-only form used by the validation demo page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NameForm {
    #[serde(default)]
    #[validate(
        custom(function = "required"),
        length(min = NAME_MIN_LENGTH, max = NAME_MAX_LENGTH)
    )]
    pub name: String,
}

impl NameForm {
    /// Validate the submission and return the accepted name.
    pub fn validated(&self) -> Result<String, FormErrors> {
        self.validate()
            .map_err(|e| FormErrors::from_validation(&e))?;
        Ok(self.name.clone())
    }
}

/// Name and email form used to register a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserForm {
    #[serde(default)]
    #[validate(custom(function = "required"))]
    pub name: String,

    #[serde(default)]
    #[validate(custom(function = "required"), email)]
    pub email: String,
}

impl UserForm {
    /// Validate the submission and return the user to create.
    pub fn validated(&self) -> Result<NewUser, FormErrors> {
        self.validate()
            .map_err(|e| FormErrors::from_validation(&e))?;
        Ok(NewUser::new(self.name.clone(), self.email.clone()))
    }
}

fn required(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED_CODE));
    }
    Ok(())
}

/// Message shown for a failed check.
fn message_for(field: &str, err: &ValidationError) -> String {
    match err.code.as_ref() {
        REQUIRED_CODE => MSG_FIELD_REQUIRED.to_string(),
        LENGTH_CODE => MSG_NAME_LENGTH.to_string(),
        EMAIL_CODE => MSG_INVALID_EMAIL.to_string(),
        _ => err
            .message
            .as_ref()
            .map(|m| m.to_string())
            .unwrap_or_else(|| format!("{} is invalid", field)),
    }
}

/// Validation messages keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, Vec<String>>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a message for a field
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Messages reported for a field, in the order they were added
    pub fn field(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fold another set of messages into this one
    pub fn merge(&mut self, other: FormErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    /// Convert `validator` output, keeping only the required message for
    /// fields that failed the required check.
    pub fn from_validation(errors: &ValidationErrors) -> Self {
        let mut form_errors = Self::new();

        for (field, errs) in errors.field_errors() {
            let field = field.to_string();
            let blank = errs.iter().any(|e| e.code == REQUIRED_CODE);

            for err in errs.iter() {
                if blank && err.code != REQUIRED_CODE {
                    continue;
                }
                form_errors.add(field.clone(), message_for(&field, err));
            }
        }

        form_errors
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(" ")))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_form(name: &str) -> NameForm {
        NameForm {
            name: name.to_string(),
        }
    }

    #[test]
    fn test_name_form_accepts_bounds() {
        assert_eq!(name_form("Alice").validated().unwrap(), "Alice");
        let twenty = "a".repeat(NAME_MAX_LENGTH as usize);
        assert_eq!(name_form(&twenty).validated().unwrap(), twenty);
    }

    #[test]
    fn test_name_form_rejects_out_of_range() {
        let errors = name_form("Bob").validated().unwrap_err();
        assert_eq!(errors.field("name"), [MSG_NAME_LENGTH.to_string()]);

        let too_long = "a".repeat(NAME_MAX_LENGTH as usize + 1);
        let errors = name_form(&too_long).validated().unwrap_err();
        assert_eq!(errors.field("name"), [MSG_NAME_LENGTH.to_string()]);
    }

    #[test]
    fn test_name_form_counts_characters_not_bytes() {
        assert!(name_form("Zoë B").validated().is_ok());
        assert!(name_form(&"é".repeat(20)).validated().is_ok());
    }

    #[test]
    fn test_blank_name_reports_only_required() {
        for blank in ["", "   "] {
            let errors = name_form(blank).validated().unwrap_err();
            assert_eq!(errors.field("name"), [MSG_FIELD_REQUIRED.to_string()]);
        }
    }

    #[test]
    fn test_user_form_valid() {
        let form = UserForm {
            name: "Al".to_string(),
            email: "al@example.com".to_string(),
        };
        assert_eq!(
            form.validated().unwrap(),
            NewUser::new("Al", "al@example.com")
        );
    }

    #[test]
    fn test_user_form_rejects_bad_email() {
        let form = UserForm {
            name: "Alice".to_string(),
            email: "not-an-email".to_string(),
        };
        let errors = form.validated().unwrap_err();
        assert!(errors.field("name").is_empty());
        assert_eq!(errors.field("email"), [MSG_INVALID_EMAIL.to_string()]);
    }

    #[test]
    fn test_user_form_missing_fields() {
        let errors = UserForm::default().validated().unwrap_err();
        assert_eq!(errors.field("name"), [MSG_FIELD_REQUIRED.to_string()]);
        assert_eq!(errors.field("email"), [MSG_FIELD_REQUIRED.to_string()]);
    }

    #[test]
    fn test_form_errors_merge() {
        let mut errors = FormErrors::new();
        errors.add("csrf_token", "The CSRF token is missing.");

        let mut other = FormErrors::new();
        other.add("name", "This field is required.");
        errors.merge(other);

        assert_eq!(errors.field("csrf_token").len(), 1);
        assert_eq!(errors.field("name").len(), 1);
        assert!(errors.field("email").is_empty());
        assert_eq!(
            errors.to_string(),
            "csrf_token: The CSRF token is missing., name: This field is required."
        );
    }
}
