use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    domain::ordering::OrderedEntries,
    entities::{
        choices::{ContractType, JobCategory, Language},
        option_fields::{OptionField, PatchString},
        person::{
            non_blank, validate_not_blank, validate_not_null, validate_optional_amount, validate_optional_url,
            validate_required_text,
        },
    },
    utils::markdown::sanitize_rich_text,
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Resume {
    pub id: Uuid,
    pub person_id: Uuid,
    pub title: String,
    pub company_name: String,
    pub job_title: String,
    pub job_category: JobCategory,
    pub contract_type: ContractType,
    pub language: Language,
    pub custom_summary: String,
    pub target_salary: Option<i64>,
    pub company_match_reason: String,
    pub copied_from: Option<Uuid>,
    pub job_source_id: Option<Uuid>,
    pub job_ad_url: Option<String>,
    pub company_notes: String,
    pub job_ad_full_text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResumeInsert {
    pub person_id: Uuid,
    pub title: String,
    pub company_name: String,
    pub job_title: String,
    pub job_category: JobCategory,
    pub contract_type: ContractType,
    pub language: Language,
    pub custom_summary: String,
    pub target_salary: Option<i64>,
    pub company_match_reason: String,
    pub copied_from: Option<Uuid>,
    pub job_source_id: Option<Uuid>,
    pub job_ad_url: Option<String>,
    pub company_notes: String,
    pub job_ad_full_text: String,
}

/// Snapshot of what a résumé has selected.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResumeSelection {
    pub experiences: OrderedEntries,
    pub educations: OrderedEntries,
    pub skill_ids: Vec<Uuid>,
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewResumeRequest {
    pub person_id: Uuid,

    #[validate(
        length(min = 1, max = 200, message = "Title is required"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(
        length(min = 1, max = 200, message = "Company name is required"),
        custom(function = "validate_not_blank")
    )]
    pub company_name: String,

    #[validate(
        length(min = 1, max = 200, message = "Job title is required"),
        custom(function = "validate_not_blank")
    )]
    pub job_title: String,

    #[serde(default)]
    pub job_category: JobCategory,

    #[serde(default)]
    pub contract_type: ContractType,

    #[serde(default)]
    pub language: Language,

    #[serde(default)]
    pub custom_summary: String,

    #[validate(range(min = 0, message = "Target salary cannot be negative"))]
    pub target_salary: Option<i64>,

    #[serde(default)]
    pub company_match_reason: String,

    pub job_source_id: Option<Uuid>,

    #[validate(url(message = "Invalid job ad URL"))]
    pub job_ad_url: Option<String>,

    #[serde(default)]
    pub company_notes: String,

    #[serde(default)]
    pub job_ad_full_text: String,
}

impl NewResumeRequest {
    pub fn prepare_for_insert(self) -> ResumeInsert {
        ResumeInsert {
            person_id: self.person_id,
            title: self.title.trim().to_string(),
            company_name: self.company_name.trim().to_string(),
            job_title: self.job_title.trim().to_string(),
            job_category: self.job_category,
            contract_type: self.contract_type,
            language: self.language,
            custom_summary: sanitize_rich_text(&self.custom_summary),
            target_salary: self.target_salary,
            company_match_reason: self.company_match_reason.trim().to_string(),
            copied_from: None,
            job_source_id: self.job_source_id,
            job_ad_url: non_blank(self.job_ad_url),
            company_notes: self.company_notes.trim().to_string(),
            job_ad_full_text: sanitize_rich_text(&self.job_ad_full_text),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateResumeRequest {
    #[validate(length(min = 1, max = 200), custom(function = "validate_required_text"))]
    pub title: PatchString,

    #[validate(length(min = 1, max = 200), custom(function = "validate_required_text"))]
    pub company_name: PatchString,

    #[validate(length(min = 1, max = 200), custom(function = "validate_required_text"))]
    pub job_title: PatchString,

    #[validate(custom(function = "validate_not_null"))]
    pub job_category: OptionField<JobCategory>,

    #[validate(custom(function = "validate_not_null"))]
    pub contract_type: OptionField<ContractType>,

    #[validate(custom(function = "validate_not_null"))]
    pub language: OptionField<Language>,

    pub custom_summary: PatchString,

    #[validate(custom(function = "validate_optional_amount"))]
    pub target_salary: OptionField<i64>,

    pub company_match_reason: PatchString,
    pub job_source_id: OptionField<Uuid>,

    #[validate(custom(function = "validate_optional_url"))]
    pub job_ad_url: PatchString,

    pub company_notes: PatchString,
    pub job_ad_full_text: PatchString,
}

impl UpdateResumeRequest {
    pub fn sanitized(mut self) -> Self {
        self.custom_summary = self.custom_summary.map_value(|s| sanitize_rich_text(&s));
        self.job_ad_full_text = self.job_ad_full_text.map_value(|s| sanitize_rich_text(&s));
        self
    }

    pub fn apply(&self, resume: &mut Resume) {
        self.title.apply_required(&mut resume.title);
        self.company_name.apply_required(&mut resume.company_name);
        self.job_title.apply_required(&mut resume.job_title);
        self.job_category.apply_required(&mut resume.job_category);
        self.contract_type.apply_required(&mut resume.contract_type);
        self.language.apply_required(&mut resume.language);
        self.custom_summary.apply_or_clear(&mut resume.custom_summary);
        self.target_salary.apply_to(&mut resume.target_salary);
        self.company_match_reason.apply_or_clear(&mut resume.company_match_reason);
        self.job_source_id.apply_to(&mut resume.job_source_id);
        self.job_ad_url.apply_to(&mut resume.job_ad_url);
        self.company_notes.apply_or_clear(&mut resume.company_notes);
        self.job_ad_full_text.apply_or_clear(&mut resume.job_ad_full_text);
    }
}

/// Parameters for cloning a résumé towards a new company.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CopyResumeRequest {
    #[validate(
        length(min = 1, max = 200, message = "Title is required"),
        custom(function = "validate_not_blank")
    )]
    pub title: String,

    #[validate(
        length(min = 1, max = 200, message = "Company name is required"),
        custom(function = "validate_not_blank")
    )]
    pub company_name: String,

    #[validate(length(max = 200))]
    pub job_title: Option<String>,

    pub job_category: Option<JobCategory>,
    pub contract_type: Option<ContractType>,
}

impl CopyResumeRequest {
    pub fn new(title: impl Into<String>, company_name: impl Into<String>) -> Self {
        CopyResumeRequest {
            title: title.into(),
            company_name: company_name.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Validate)]
pub struct SetPositionRequest {
    #[validate(range(min = 0, message = "Position cannot be negative"))]
    pub position: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetSkillsRequest {
    pub skill_ids: Vec<Uuid>,
}

// ───── Search ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ResumeSearchQuery {
    #[validate(length(max = 200))]
    pub company_search: Option<String>,
    pub job_category: Option<JobCategory>,
    pub contract_type: Option<ContractType>,
    pub language: Option<Language>,
    /// "1", "2", "3", "7", "30" days back, or "custom" to use `date_from`/`date_to`
    pub date_filter: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl ResumeSearchQuery {
    /// Inclusive creation-date window selected by `date_filter`.
    pub fn date_range(&self, today: NaiveDate) -> (Option<NaiveDate>, Option<NaiveDate>) {
        let filter = match self.date_filter.as_deref().map(str::trim) {
            None | Some("") => return (None, None),
            Some(filter) => filter,
        };

        if filter == "custom" {
            return (self.date_from, self.date_to);
        }

        match filter.parse::<i64>() {
            Ok(days) if days >= 0 => (Some(today - Duration::days(days)), Some(today)),
            _ => (None, None),
        }
    }

    pub fn to_filter(&self, today: NaiveDate) -> ResumeFilter {
        let (created_from, created_to) = self.date_range(today);

        ResumeFilter {
            company_search: self
                .company_search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            job_category: self.job_category,
            contract_type: self.contract_type,
            language: self.language,
            created_from,
            created_to,
        }
    }
}

/// Normalized search criteria handed to the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResumeFilter {
    pub company_search: Option<String>,
    pub job_category: Option<JobCategory>,
    pub contract_type: Option<ContractType>,
    pub language: Option<Language>,
    pub created_from: Option<NaiveDate>,
    pub created_to: Option<NaiveDate>,
}

impl ResumeFilter {
    /// `ILIKE` pattern for the company search with wildcards escaped.
    pub fn company_pattern(&self) -> Option<String> {
        self.company_search
            .as_deref()
            .map(|s| format!("%{}%", escape_like(s)))
    }

    pub fn matches(&self, resume: &Resume) -> bool {
        let created = resume.created_at.date_naive();

        self.company_search.as_deref().map_or(true, |needle| {
            let needle = needle.to_lowercase();
            resume.company_name.to_lowercase().contains(&needle) || resume.title.to_lowercase().contains(&needle)
        }) && self.job_category.map_or(true, |c| c == resume.job_category)
            && self.contract_type.map_or(true, |c| c == resume.contract_type)
            && self.language.map_or(true, |l| l == resume.language)
            && self.created_from.map_or(true, |from| created >= from)
            && self.created_to.map_or(true, |to| created <= to)
    }
}

fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

// ───── API Response Models ──────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<Resume>,
    pub total_count: usize,
    pub all_count: i64,
}
