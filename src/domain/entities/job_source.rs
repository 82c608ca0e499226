use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::entities::{
    option_fields::{OptionField, PatchString},
    person::{non_blank, validate_not_blank, validate_not_null, validate_optional_url, validate_required_text},
};

/// Column width of `job_sources.slug`.
pub const SLUG_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobSource {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub website_url: Option<String>,
    pub description: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct JobSourceInsert {
    pub name: String,
    pub slug: String,
    pub website_url: Option<String>,
    pub description: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewJobSourceRequest {
    #[validate(
        length(min = 1, max = 100, message = "Name is required"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(length(max = 100))]
    pub slug: Option<String>,

    #[validate(url(message = "Invalid website URL"))]
    pub website_url: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewJobSourceRequest {
    pub fn prepare_for_insert(self) -> JobSourceInsert {
        let name = self.name.trim().to_string();
        let slug = derive_slug(&name, self.slug.as_deref());

        JobSourceInsert {
            name,
            slug,
            website_url: non_blank(self.website_url),
            description: self.description.trim().to_string(),
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateJobSourceRequest {
    #[validate(length(min = 1, max = 100), custom(function = "validate_required_text"))]
    pub name: PatchString,

    #[validate(length(min = 1, max = 100), custom(function = "validate_required_text"))]
    pub slug: PatchString,

    #[validate(custom(function = "validate_optional_url"))]
    pub website_url: PatchString,

    pub description: PatchString,

    #[validate(custom(function = "validate_not_null"))]
    pub is_active: OptionField<bool>,
}

impl UpdateJobSourceRequest {
    pub fn normalized(mut self) -> Self {
        self.slug = self.slug.map_value(|s| normalize_slug(&s));
        self
    }

    pub fn apply(&self, source: &mut JobSource) {
        self.name.apply_required(&mut source.name);
        self.slug.apply_required(&mut source.slug);
        self.website_url.apply_to(&mut source.website_url);
        self.description.apply_or_clear(&mut source.description);
        self.is_active.apply_required(&mut source.is_active);
    }
}

/// Uses the explicit slug when given, otherwise slugifies the name. Names that
/// slugify to nothing get a random `source-xxxxxxxx` slug.
pub fn derive_slug(name: &str, explicit: Option<&str>) -> String {
    let base = explicit
        .map(normalize_slug)
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| normalize_slug(name));

    if base.is_empty() {
        let id = Uuid::new_v4().simple().to_string();
        format!("source-{}", &id[..8])
    } else {
        base
    }
}

/// Slugifies `raw` and fits it into [`SLUG_MAX_LEN`]. Transliteration can grow
/// the text (`ش` becomes `sh`), so long slugs are cut at the last `-` that fits.
pub fn normalize_slug(raw: &str) -> String {
    let slug = slug::slugify(raw);
    if slug.chars().count() <= SLUG_MAX_LEN {
        return slug;
    }

    let mut cut: String = slug.chars().take(SLUG_MAX_LEN).collect();
    let at_word_end = slug[cut.len()..].starts_with('-');
    if !at_word_end {
        if let Some(index) = cut.rfind('-') {
            cut.truncate(index);
        }
    }
    cut.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_comes_from_name_when_absent() {
        assert_eq!(derive_slug("Jobinja Careers", None), "jobinja-careers");
    }

    #[test]
    fn explicit_slug_is_normalized() {
        assert_eq!(derive_slug("Jobinja", Some("My Source")), "my-source");
    }

    #[test]
    fn empty_slug_falls_back_to_random_source_id() {
        let slug = derive_slug("!!!", Some("   "));
        assert!(slug.starts_with("source-"));
        assert_eq!(slug.len(), "source-".len() + 8);
    }

    #[test]
    fn transliterated_names_fit_the_slug_column() {
        let slug = derive_slug(&"ش".repeat(100), None);
        assert!(!slug.is_empty());
        assert!(slug.chars().count() <= SLUG_MAX_LEN);

        let words = "شغل ".repeat(25);
        let full = slug::slugify(&words);
        let slug = derive_slug(&words, None);
        assert!(slug.chars().count() <= SLUG_MAX_LEN);
        assert!(full.starts_with(&slug));
        assert!(full[slug.len()..].starts_with('-'));
    }

    #[test]
    fn long_explicit_slug_is_shortened_on_a_word_boundary() {
        let explicit = "career ".repeat(16);
        let slug = derive_slug("Jobinja", Some(&explicit));
        assert!(slug.chars().count() <= SLUG_MAX_LEN);
        assert!(slug.split('-').all(|word| word == "career"));

        let patch: UpdateJobSourceRequest = serde_json::from_value(serde_json::json!({ "slug": explicit })).unwrap();
        let slug = patch.normalized().slug.value_ref().cloned().unwrap_or_default();
        assert!(slug.chars().count() <= SLUG_MAX_LEN);
        assert!(slug.starts_with("career-career"));
    }

    #[test]
    fn blank_name_and_null_required_fields_are_rejected() {
        let request: NewJobSourceRequest = serde_json::from_value(serde_json::json!({ "name": "   " })).unwrap();
        assert!(request.validate().is_err());

        let patch: UpdateJobSourceRequest = serde_json::from_str(r#"{"name": null, "is_active": null}"#).unwrap();
        let errors = patch.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("is_active"));
    }
}
