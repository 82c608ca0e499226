use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "language_code", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fa,
    En,
    De,
    Fr,
    Ar,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Fa => "fa",
            Language::En => "en",
            Language::De => "de",
            Language::Fr => "fr",
            Language::Ar => "ar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Fa => "فارسی",
            Language::En => "انگلیسی",
            Language::De => "آلمانی",
            Language::Fr => "فرانسوی",
            Language::Ar => "عربی",
        }
    }

    /// Right-to-left scripts
    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Fa | Language::Ar)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "skill_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    WebFrontend,
    WebBackend,
    Database,
    Mobile,
    Devops,
    Cms,
    Framework,
    Library,
    SoftSkills,
    #[default]
    Other,
}

impl SkillCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "برنامه‌نویسی",
            SkillCategory::WebFrontend => "فرانت‌اند وب",
            SkillCategory::WebBackend => "بک‌اند وب",
            SkillCategory::Database => "پایگاه داده",
            SkillCategory::Mobile => "موبایل",
            SkillCategory::Devops => "DevOps",
            SkillCategory::Cms => "سیستم مدیریت محتوا",
            SkillCategory::Framework => "فریم‌ورک",
            SkillCategory::Library => "کتابخانه",
            SkillCategory::SoftSkills => "مهارت‌های نرم",
            SkillCategory::Other => "سایر",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "job_category", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    PhpLaravel,
    PythonDjango,
    Wordpress,
    Frontend,
    Fullstack,
    Mobile,
    Devops,
    DataScience,
    UiUx,
    ProjectManager,
    #[default]
    Other,
}

impl JobCategory {
    pub fn label(&self) -> &'static str {
        match self {
            JobCategory::PhpLaravel => "PHP / Laravel Developer",
            JobCategory::PythonDjango => "Python / Django Developer",
            JobCategory::Wordpress => "WordPress Developer",
            JobCategory::Frontend => "Frontend Developer",
            JobCategory::Fullstack => "Full-stack Developer",
            JobCategory::Mobile => "Mobile Developer",
            JobCategory::Devops => "DevOps Engineer",
            JobCategory::DataScience => "Data Science",
            JobCategory::UiUx => "UI/UX Designer",
            JobCategory::ProjectManager => "Project Manager",
            JobCategory::Other => "سایر",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "contract_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    #[default]
    FullTime,
    PartTime,
    Remote,
}

impl ContractType {
    pub fn label(&self) -> &'static str {
        match self {
            ContractType::FullTime => "تمام وقت",
            ContractType::PartTime => "پاره وقت",
            ContractType::Remote => "دورکاری",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "marital_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "military_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MilitaryStatus {
    Completed,
    Exempt,
    StudentExempt,
    Postponed,
    Required,
    NotRequired,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enums_use_snake_case_wire_names() {
        assert_eq!(serde_json::to_string(&JobCategory::PhpLaravel).unwrap(), "\"php_laravel\"");
        assert_eq!(serde_json::to_string(&SkillCategory::WebFrontend).unwrap(), "\"web_frontend\"");
        assert_eq!(serde_json::to_string(&ContractType::FullTime).unwrap(), "\"full_time\"");
        assert_eq!(serde_json::to_string(&Language::De).unwrap(), "\"de\"");

        let status: MilitaryStatus = serde_json::from_str("\"student_exempt\"").unwrap();
        assert_eq!(status, MilitaryStatus::StudentExempt);
    }

    #[test]
    fn defaults_match_schema_defaults() {
        assert_eq!(Language::default(), Language::Fa);
        assert_eq!(SkillCategory::default(), SkillCategory::Other);
        assert_eq!(JobCategory::default(), JobCategory::Other);
        assert_eq!(ContractType::default(), ContractType::FullTime);
    }
}
