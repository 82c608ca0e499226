use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::{
    domain::localization::Translatable,
    entities::{
        experience::validate_date_range,
        option_fields::{OptionField, PatchString},
        person::{new_validation_error, validate_not_blank, validate_not_null, validate_required_text},
        translation::EducationTranslation,
    },
};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Education {
    pub id: Uuid,
    pub person_id: Uuid,
    pub degree: String,
    pub field: String,
    pub university: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Degree,
    Field,
    University,
}

impl Translatable for Education {
    type Field = EducationField;
    type Translation = EducationTranslation;

    fn id(&self) -> Uuid {
        self.id
    }

    fn source_value(&self, field: EducationField) -> &str {
        match field {
            EducationField::Degree => &self.degree,
            EducationField::Field => &self.field,
            EducationField::University => &self.university,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EducationInsert {
    pub person_id: Uuid,
    pub degree: String,
    pub field: String,
    pub university: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub gpa: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_education_dates"))]
pub struct NewEducationRequest {
    #[validate(
        length(min = 1, max = 200, message = "Degree is required"),
        custom(function = "validate_not_blank")
    )]
    pub degree: String,

    #[validate(
        length(min = 1, max = 200, message = "Field of study is required"),
        custom(function = "validate_not_blank")
    )]
    pub field: String,

    #[validate(
        length(min = 1, max = 200, message = "University is required"),
        custom(function = "validate_not_blank")
    )]
    pub university: String,

    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub is_current: bool,

    #[validate(range(min = 0.0, max = 99.99, message = "GPA must be between 0 and 99.99"))]
    pub gpa: Option<f64>,
}

impl NewEducationRequest {
    pub fn prepare_for_insert(self, person_id: Uuid) -> EducationInsert {
        EducationInsert {
            person_id,
            degree: self.degree.trim().to_string(),
            field: self.field.trim().to_string(),
            university: self.university.trim().to_string(),
            start_date: self.start_date,
            end_date: if self.is_current { None } else { self.end_date },
            is_current: self.is_current,
            gpa: self.gpa.map(round_gpa),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateEducationRequest {
    #[validate(length(min = 1, max = 200), custom(function = "validate_required_text"))]
    pub degree: PatchString,

    #[validate(length(min = 1, max = 200), custom(function = "validate_required_text"))]
    pub field: PatchString,

    #[validate(length(min = 1, max = 200), custom(function = "validate_required_text"))]
    pub university: PatchString,

    #[validate(custom(function = "validate_not_null"))]
    pub start_date: OptionField<NaiveDate>,

    pub end_date: OptionField<NaiveDate>,

    #[validate(custom(function = "validate_not_null"))]
    pub is_current: OptionField<bool>,

    #[validate(custom(function = "validate_optional_gpa"))]
    pub gpa: OptionField<f64>,
}

impl UpdateEducationRequest {
    pub fn normalized(mut self) -> Self {
        self.gpa = self.gpa.map_value(round_gpa);
        self
    }

    pub fn apply(&self, education: &mut Education) -> Result<(), ValidationError> {
        self.degree.apply_required(&mut education.degree);
        self.field.apply_required(&mut education.field);
        self.university.apply_required(&mut education.university);
        self.start_date.apply_required(&mut education.start_date);
        self.end_date.apply_to(&mut education.end_date);
        self.is_current.apply_required(&mut education.is_current);
        self.gpa.apply_to(&mut education.gpa);

        if education.is_current {
            education.end_date = None;
        }
        validate_date_range(education.start_date, education.end_date)
    }
}

/// GPA is stored with two decimal places.
fn round_gpa(gpa: f64) -> f64 {
    (gpa * 100.0).round() / 100.0
}

fn validate_education_dates(request: &NewEducationRequest) -> Result<(), ValidationError> {
    validate_date_range(request.start_date, request.end_date)
}

fn validate_optional_gpa(value: &OptionField<f64>) -> Result<(), ValidationError> {
    match value {
        OptionField::SetToValue(gpa) if !(0.0..=99.99).contains(gpa) => Err(new_validation_error(
            "gpa_out_of_range",
            "GPA must be between 0 and 99.99",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpa_is_rounded_to_two_places() {
        let request = NewEducationRequest {
            degree: "کارشناسی ارشد".into(),
            field: "نرم‌افزار".into(),
            university: "شریف".into(),
            start_date: NaiveDate::from_ymd_opt(2018, 9, 1).unwrap(),
            end_date: None,
            is_current: false,
            gpa: Some(18.456),
        };

        let insert = request.prepare_for_insert(Uuid::new_v4());
        assert_eq!(insert.gpa, Some(18.46));
    }

    #[test]
    fn gpa_patch_out_of_range_is_rejected() {
        let patch: UpdateEducationRequest = serde_json::from_str(r#"{"gpa": 120.0}"#).unwrap();
        assert!(patch.validate().is_err());
    }
}
