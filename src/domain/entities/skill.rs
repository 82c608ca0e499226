use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    domain::localization::Translatable,
    entities::{
        choices::SkillCategory,
        option_fields::{OptionField, PatchString},
        person::{validate_not_blank, validate_not_null, validate_required_text},
        translation::SkillTranslation,
    },
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: Uuid,
    pub person_id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub is_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillField {
    Name,
}

impl Translatable for Skill {
    type Field = SkillField;
    type Translation = SkillTranslation;

    fn id(&self) -> Uuid {
        self.id
    }

    fn source_value(&self, field: SkillField) -> &str {
        match field {
            SkillField::Name => &self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SkillInsert {
    pub person_id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSkillRequest {
    #[validate(
        length(min = 1, max = 100, message = "Skill name is required"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[serde(default)]
    pub category: SkillCategory,

    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl NewSkillRequest {
    pub fn prepare_for_insert(self, person_id: Uuid) -> SkillInsert {
        SkillInsert {
            person_id,
            name: self.name.trim().to_string(),
            category: self.category,
            is_active: self.is_active,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct UpdateSkillRequest {
    #[validate(length(min = 1, max = 100), custom(function = "validate_required_text"))]
    pub name: PatchString,

    #[validate(custom(function = "validate_not_null"))]
    pub category: OptionField<SkillCategory>,

    #[validate(custom(function = "validate_not_null"))]
    pub is_active: OptionField<bool>,
}

impl UpdateSkillRequest {
    pub fn apply(&self, skill: &mut Skill) {
        self.name.apply_required(&mut skill.name);
        self.category.apply_required(&mut skill.category);
        self.is_active.apply_required(&mut skill.is_active);
    }
}
