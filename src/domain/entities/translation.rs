use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    domain::localization::Translation,
    entities::{
        choices::Language,
        education::EducationField,
        experience::ExperienceField,
        person::validate_not_blank,
        skill::SkillField,
    },
    utils::markdown::sanitize_rich_text,
};

// ───── Database Models ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct SkillTranslation {
    pub id: Uuid,
    pub skill_id: Uuid,
    pub language: Language,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ExperienceTranslation {
    pub id: Uuid,
    pub experience_id: Uuid,
    pub language: Language,
    pub position: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct EducationTranslation {
    pub id: Uuid,
    pub education_id: Uuid,
    pub language: Language,
    pub degree: String,
    pub field: String,
    pub university: String,
}

impl Translation for SkillTranslation {
    type Field = SkillField;

    fn parent_id(&self) -> Uuid {
        self.skill_id
    }

    fn language(&self) -> Language {
        self.language
    }

    fn value(&self, field: SkillField) -> &str {
        match field {
            SkillField::Name => &self.name,
        }
    }
}

impl Translation for ExperienceTranslation {
    type Field = ExperienceField;

    fn parent_id(&self) -> Uuid {
        self.experience_id
    }

    fn language(&self) -> Language {
        self.language
    }

    fn value(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Position => &self.position,
            ExperienceField::Company => &self.company,
            ExperienceField::Description => &self.description,
        }
    }
}

impl Translation for EducationTranslation {
    type Field = EducationField;

    fn parent_id(&self) -> Uuid {
        self.education_id
    }

    fn language(&self) -> Language {
        self.language
    }

    fn value(&self, field: EducationField) -> &str {
        match field {
            EducationField::Degree => &self.degree,
            EducationField::Field => &self.field,
            EducationField::University => &self.university,
        }
    }
}

// ───── Input & Validation Requests ──────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSkillTranslationRequest {
    pub language: Language,

    #[validate(
        length(min = 1, max = 100, message = "Translated name is required"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewExperienceTranslationRequest {
    pub language: Language,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub position: String,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub company: String,

    #[serde(default)]
    pub description: String,
}

impl NewExperienceTranslationRequest {
    pub fn sanitized(mut self) -> Self {
        self.position = self.position.trim().to_string();
        self.company = self.company.trim().to_string();
        self.description = sanitize_rich_text(&self.description);
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewEducationTranslationRequest {
    pub language: Language,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub degree: String,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub field: String,

    #[serde(default)]
    #[validate(length(max = 200))]
    pub university: String,
}

impl NewEducationTranslationRequest {
    pub fn trimmed(mut self) -> Self {
        self.degree = self.degree.trim().to_string();
        self.field = self.field.trim().to_string();
        self.university = self.university.trim().to_string();
        self
    }
}
