use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    domain::localization::Translatable,
    entities::{
        option_fields::{OptionField, PatchString},
        person::{new_validation_error, validate_not_blank, validate_not_null, validate_required_text},
        translation::ExperienceTranslation,
    },
    utils::markdown::sanitize_rich_text,
};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Experience {
    pub id: Uuid,
    pub person_id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Position,
    Company,
    Description,
}

impl Translatable for Experience {
    type Field = ExperienceField;
    type Translation = ExperienceTranslation;

    fn id(&self) -> Uuid {
        self.id
    }

    fn source_value(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Position => &self.position,
            ExperienceField::Company => &self.company,
            ExperienceField::Description => &self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExperienceInsert {
    pub person_id: Uuid,
    pub company: String,
    pub position: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_experience_dates"))]
pub struct NewExperienceRequest {
    #[validate(
        length(min = 1, max = 200, message = "Company is required"),
        custom(function = "validate_not_blank")
    )]
    pub company: String,

    #[validate(
        length(min = 1, max = 200, message = "Position is required"),
        custom(function = "validate_not_blank")
    )]
    pub position: String,

    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub is_current: bool,

    #[validate(
        length(min = 1, message = "Description cannot be empty"),
        custom(function = "validate_not_blank")
    )]
    pub description: String,
}

impl NewExperienceRequest {
    pub fn prepare_for_insert(self, person_id: Uuid) -> ExperienceInsert {
        ExperienceInsert {
            person_id,
            company: self.company.trim().to_string(),
            position: self.position.trim().to_string(),
            start_date: self.start_date,
            end_date: if self.is_current { None } else { self.end_date },
            is_current: self.is_current,
            description: sanitize_rich_text(&self.description),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateExperienceRequest {
    #[validate(length(min = 1, max = 200), custom(function = "validate_required_text"))]
    pub company: PatchString,

    #[validate(length(min = 1, max = 200), custom(function = "validate_required_text"))]
    pub position: PatchString,

    #[validate(custom(function = "validate_not_null"))]
    pub start_date: OptionField<NaiveDate>,

    pub end_date: OptionField<NaiveDate>,

    #[validate(custom(function = "validate_not_null"))]
    pub is_current: OptionField<bool>,

    #[validate(length(min = 1), custom(function = "validate_required_text"))]
    pub description: PatchString,
}

impl UpdateExperienceRequest {
    pub fn sanitized(mut self) -> Self {
        self.description = self.description.map_value(|d| sanitize_rich_text(&d));
        self
    }

    /// Applies the patch to `experience`. A current job never keeps an end date.
    pub fn apply(&self, experience: &mut Experience) -> Result<(), ValidationError> {
        self.company.apply_required(&mut experience.company);
        self.position.apply_required(&mut experience.position);
        self.start_date.apply_required(&mut experience.start_date);
        self.end_date.apply_to(&mut experience.end_date);
        self.is_current.apply_required(&mut experience.is_current);
        self.description.apply_required(&mut experience.description);

        if experience.is_current {
            experience.end_date = None;
        }
        validate_date_range(experience.start_date, experience.end_date)
    }
}

fn validate_experience_dates(request: &NewExperienceRequest) -> Result<(), ValidationError> {
    validate_date_range(request.start_date, request.end_date)
}

pub(crate) fn validate_date_range(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), ValidationError> {
    match end {
        Some(end) if end < start => Err(new_validation_error(
            "end_before_start",
            "End date cannot be before start date",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> NewExperienceRequest {
        NewExperienceRequest {
            company: " Snapp ".into(),
            position: "Python Developer".into(),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2022, 6, 1).unwrap()),
            is_current: false,
            description: "APIs".into(),
        }
    }

    #[test]
    fn end_date_before_start_is_rejected() {
        let mut bad = request();
        bad.end_date = Some(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
        assert!(bad.validate().is_err());
        assert!(request().validate().is_ok());
    }

    #[test]
    fn current_job_drops_end_date() {
        let mut current = request();
        current.is_current = true;

        let insert = current.prepare_for_insert(Uuid::new_v4());
        assert_eq!(insert.end_date, None);
        assert_eq!(insert.company, "Snapp");
    }

    #[test]
    fn patch_marking_current_clears_end_date() {
        let mut experience = Experience {
            id: Uuid::new_v4(),
            person_id: Uuid::new_v4(),
            company: "Snapp".into(),
            position: "Developer".into(),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()),
            is_current: false,
            description: "APIs".into(),
        };
        let patch: UpdateExperienceRequest =
            serde_json::from_str(r#"{"is_current": true, "position": "Lead"}"#).unwrap();

        patch.apply(&mut experience).unwrap();
        assert!(experience.is_current);
        assert_eq!(experience.end_date, None);
        assert_eq!(experience.position, "Lead");
        assert_eq!(experience.company, "Snapp");
    }

    #[test]
    fn patch_moving_start_after_end_is_rejected() {
        let mut experience = Experience {
            id: Uuid::new_v4(),
            person_id: Uuid::new_v4(),
            company: "Snapp".into(),
            position: "Developer".into(),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap()),
            is_current: false,
            description: "APIs".into(),
        };
        let patch: UpdateExperienceRequest = serde_json::from_str(r#"{"start_date": "2022-01-01"}"#).unwrap();

        assert!(patch.apply(&mut experience).is_err());
    }
}
