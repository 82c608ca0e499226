use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    entities::{
        choices::{MaritalStatus, MilitaryStatus},
        option_fields::{OptionField, PatchString},
    },
    utils::markdown::sanitize_rich_text,
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Person {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub summary: String,
    pub marital_status: Option<MaritalStatus>,
    pub military_status: Option<MilitaryStatus>,
    pub expected_salary: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct PersonInsert {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub summary: String,
    pub marital_status: Option<MaritalStatus>,
    pub military_status: Option<MilitaryStatus>,
    pub expected_salary: Option<i64>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewPersonRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name is required"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(
        length(min = 1, max = 20, message = "Phone must be 1-20 characters"),
        custom(function = "validate_not_blank")
    )]
    pub phone: String,

    pub address: Option<String>,

    #[validate(url(message = "Invalid LinkedIn URL"))]
    pub linkedin: Option<String>,

    #[validate(url(message = "Invalid GitHub URL"))]
    pub github: Option<String>,

    #[validate(url(message = "Invalid website URL"))]
    pub website: Option<String>,

    #[serde(default)]
    pub summary: String,

    pub marital_status: Option<MaritalStatus>,
    pub military_status: Option<MilitaryStatus>,

    #[validate(range(min = 0, message = "Expected salary cannot be negative"))]
    pub expected_salary: Option<i64>,
}

impl NewPersonRequest {
    pub fn prepare_for_insert(self) -> PersonInsert {
        PersonInsert {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            phone: self.phone.trim().to_string(),
            address: non_blank(self.address),
            linkedin: non_blank(self.linkedin),
            github: non_blank(self.github),
            website: non_blank(self.website),
            summary: sanitize_rich_text(&self.summary),
            marital_status: self.marital_status,
            military_status: self.military_status,
            expected_salary: self.expected_salary,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdatePersonRequest {
    #[validate(length(min = 1, max = 100), custom(function = "validate_required_text"))]
    pub name: PatchString,

    #[validate(custom(function = "validate_patch_email"))]
    pub email: PatchString,

    #[validate(length(min = 1, max = 20), custom(function = "validate_required_text"))]
    pub phone: PatchString,

    pub address: PatchString,

    #[validate(custom(function = "validate_optional_url"))]
    pub linkedin: PatchString,

    #[validate(custom(function = "validate_optional_url"))]
    pub github: PatchString,

    #[validate(custom(function = "validate_optional_url"))]
    pub website: PatchString,

    pub summary: PatchString,
    pub marital_status: OptionField<MaritalStatus>,
    pub military_status: OptionField<MilitaryStatus>,

    #[validate(custom(function = "validate_optional_amount"))]
    pub expected_salary: OptionField<i64>,
}

impl UpdatePersonRequest {
    /// Sanitizes rich-text fields before they reach the store.
    pub fn sanitized(mut self) -> Self {
        self.summary = self.summary.map_value(|s| sanitize_rich_text(&s));
        self.email = self.email.map_value(|e| e.trim().to_lowercase());
        self
    }

    pub fn apply(&self, person: &mut Person) {
        self.name.apply_required(&mut person.name);
        self.email.apply_required(&mut person.email);
        self.phone.apply_required(&mut person.phone);
        self.address.apply_to(&mut person.address);
        self.linkedin.apply_to(&mut person.linkedin);
        self.github.apply_to(&mut person.github);
        self.website.apply_to(&mut person.website);
        self.summary.apply_or_clear(&mut person.summary);
        self.marital_status.apply_to(&mut person.marital_status);
        self.military_status.apply_to(&mut person.military_status);
        self.expected_salary.apply_to(&mut person.expected_salary);
    }
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PersonCreatedResponse {
    pub id: Uuid,
    pub message: String,
}

// ───── Validation Helpers ───────────────────────────────────────────

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Rejects text that is empty once trimmed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(new_validation_error("blank", "This field cannot be blank"));
    }
    Ok(())
}

/// A required column can be left out of a patch or replaced, never cleared.
pub fn validate_not_null<T>(value: &OptionField<T>) -> Result<(), ValidationError> {
    if value.is_set_to_null() {
        return Err(new_validation_error("null", "This field cannot be null"));
    }
    Ok(())
}

/// Required text in a patch: not null and not blank.
pub fn validate_required_text(value: &PatchString) -> Result<(), ValidationError> {
    validate_not_null(value)?;
    match value.value_ref() {
        Some(text) => validate_not_blank(text),
        None => Ok(()),
    }
}

pub fn validate_patch_email(value: &PatchString) -> Result<(), ValidationError> {
    validate_not_null(value)?;
    if let OptionField::SetToValue(email) = value {
        if !validator::ValidateEmail::validate_email(email) {
            return Err(new_validation_error("invalid_email", "Invalid email address"));
        }
    }
    Ok(())
}

pub fn validate_optional_url(value: &PatchString) -> Result<(), ValidationError> {
    if let OptionField::SetToValue(url) = value {
        validate_url(url)?;
    }
    Ok(())
}

pub fn validate_optional_amount(value: &OptionField<i64>) -> Result<(), ValidationError> {
    if let OptionField::SetToValue(amount) = value {
        if *amount < 0 {
            return Err(new_validation_error("negative_amount", "Amount cannot be negative"));
        }
    }
    Ok(())
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    match url::Url::parse(url) {
        Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => Ok(()),
        Ok(_) => Err(new_validation_error("invalid_url_scheme", "URL must start with http:// or https://")),
        Err(_) => Err(new_validation_error("invalid_url", "Invalid URL format")),
    }
}

pub(crate) fn new_validation_error(code: &'static str, msg: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(msg));
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> NewPersonRequest {
        NewPersonRequest {
            name: "  Sara Ahmadi ".into(),
            email: "Sara@Example.com".into(),
            phone: "09120000000".into(),
            address: Some("   ".into()),
            linkedin: Some("https://linkedin.com/in/sara".into()),
            github: None,
            website: None,
            summary: "<p>Backend developer</p><script>alert(1)</script>".into(),
            marital_status: Some(MaritalStatus::Single),
            military_status: None,
            expected_salary: Some(45_000_000),
        }
    }

    #[test]
    fn prepare_for_insert_normalizes_fields() {
        let insert = request().prepare_for_insert();

        assert_eq!(insert.name, "Sara Ahmadi");
        assert_eq!(insert.email, "sara@example.com");
        assert_eq!(insert.address, None);
        assert!(!insert.summary.contains("script"));
        assert!(insert.summary.contains("Backend developer"));
    }

    #[test]
    fn rejects_invalid_email_and_negative_salary() {
        let mut bad = request();
        bad.email = "not-an-email".into();
        bad.expected_salary = Some(-1);

        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("expected_salary"));
    }

    #[test]
    fn whitespace_name_is_blank() {
        let mut bad = request();
        bad.name = "   ".into();

        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn patch_cannot_null_required_columns() {
        let patch: UpdatePersonRequest = serde_json::from_str(r#"{"name": null, "email": null}"#).unwrap();
        let errors = patch.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));

        let patch: UpdatePersonRequest = serde_json::from_str(r#"{"phone": "  ", "address": null}"#).unwrap();
        let errors = patch.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
        assert!(!errors.field_errors().contains_key("address"));
    }

    #[test]
    fn patch_validation_checks_only_present_fields() {
        let patch: UpdatePersonRequest = serde_json::from_str(r#"{"website": "ftp://files"}"#).unwrap();
        assert!(patch.validate().is_err());

        let patch: UpdatePersonRequest = serde_json::from_str(r#"{"website": null}"#).unwrap();
        assert!(patch.validate().is_ok());
    }
}
