//! Read model of a résumé ready for rendering: localized to the résumé language,
//! ordered, with rich text turned into sanitized HTML.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    domain::{
        localization::resolve_field,
        relevance::relevant_skills,
    },
    entities::{
        choices::{ContractType, JobCategory, Language, MaritalStatus, MilitaryStatus, SkillCategory},
        education::{Education, EducationField},
        experience::{Experience, ExperienceField},
        person::Person,
        resume::Resume,
        skill::{Skill, SkillField},
        translation::{EducationTranslation, ExperienceTranslation, SkillTranslation},
    },
    utils::{
        markdown::safe_markdown_to_html,
        persian::{days_ago, format_salary, persian_date, DEFAULT_DATE_FORMAT},
    },
};

#[derive(Debug, Serialize)]
pub struct ResumeDocument {
    pub id: Uuid,
    pub title: String,
    pub company_name: String,
    pub job_title: String,
    pub job_category: JobCategory,
    pub job_category_label: &'static str,
    pub contract_type: ContractType,
    pub contract_type_label: &'static str,
    pub language: Language,
    pub is_rtl: bool,
    pub person: DocumentPerson,
    pub summary_html: String,
    pub target_salary: Option<i64>,
    pub formatted_salary: Option<String>,
    pub created_at: DateTime<Utc>,
    pub created_jalali: Option<String>,
    pub created_ago: Option<String>,
    pub experiences: Vec<DocumentExperience>,
    pub educations: Vec<DocumentEducation>,
    pub skills: Vec<DocumentSkill>,
    pub relevant_skills: Vec<DocumentSkill>,
}

#[derive(Debug, Serialize)]
pub struct DocumentPerson {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub marital_status: Option<MaritalStatus>,
    pub military_status: Option<MilitaryStatus>,
}

#[derive(Debug, Serialize)]
pub struct DocumentExperience {
    pub id: Uuid,
    pub position: String,
    pub company: String,
    pub description_html: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub period: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DocumentEducation {
    pub id: Uuid,
    pub degree: String,
    pub field: String,
    pub university: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub gpa: Option<f64>,
    pub period: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DocumentSkill {
    pub id: Uuid,
    pub name: String,
    pub category: SkillCategory,
    pub category_label: &'static str,
}

/// Everything loaded from the store for one document.
#[derive(Debug, Default)]
pub struct DocumentSources {
    pub experiences: Vec<Experience>,
    pub educations: Vec<Education>,
    pub selected_skills: Vec<Skill>,
    pub person_skills: Vec<Skill>,
    pub experience_translations: Vec<ExperienceTranslation>,
    pub education_translations: Vec<EducationTranslation>,
    pub skill_translations: Vec<SkillTranslation>,
}

pub fn build_document(resume: Resume, person: Person, sources: &DocumentSources, today: NaiveDate) -> ResumeDocument {
    let language = resume.language;
    let persian = language == Language::Fa;

    let summary = if resume.custom_summary.trim().is_empty() {
        &person.summary
    } else {
        &resume.custom_summary
    };

    let experiences = sources
        .experiences
        .iter()
        .map(|e| {
            let translations = sources.experience_translations.as_slice();
            DocumentExperience {
                id: e.id,
                position: resolve_field(e, translations, ExperienceField::Position, language).to_string(),
                company: resolve_field(e, translations, ExperienceField::Company, language).to_string(),
                description_html: safe_markdown_to_html(resolve_field(
                    e,
                    translations,
                    ExperienceField::Description,
                    language,
                )),
                start_date: e.start_date,
                end_date: e.end_date,
                is_current: e.is_current,
                period: persian.then(|| jalali_period(e.start_date, e.end_date, e.is_current)),
            }
        })
        .collect();

    let educations = sources
        .educations
        .iter()
        .map(|e| {
            let translations = sources.education_translations.as_slice();
            DocumentEducation {
                id: e.id,
                degree: resolve_field(e, translations, EducationField::Degree, language).to_string(),
                field: resolve_field(e, translations, EducationField::Field, language).to_string(),
                university: resolve_field(e, translations, EducationField::University, language).to_string(),
                start_date: e.start_date,
                end_date: e.end_date,
                is_current: e.is_current,
                gpa: e.gpa,
                period: persian.then(|| jalali_period(e.start_date, e.end_date, e.is_current)),
            }
        })
        .collect();

    let skill_view = |skill: &Skill| DocumentSkill {
        id: skill.id,
        name: resolve_field(skill, &sources.skill_translations, SkillField::Name, language).to_string(),
        category: skill.category,
        category_label: skill.category.label(),
    };

    let skills = sources.selected_skills.iter().map(skill_view).collect();
    let relevant = relevant_skills(&sources.person_skills, resume.job_category)
        .into_iter()
        .map(skill_view)
        .collect();

    let created = resume.created_at.date_naive();

    ResumeDocument {
        id: resume.id,
        job_category_label: resume.job_category.label(),
        contract_type_label: resume.contract_type.label(),
        is_rtl: language.is_rtl(),
        summary_html: safe_markdown_to_html(summary),
        formatted_salary: resume
            .target_salary
            .filter(|_| persian)
            .map(format_salary)
            .filter(|s| !s.is_empty()),
        created_jalali: persian.then(|| persian_date(created, DEFAULT_DATE_FORMAT)),
        created_ago: persian.then(|| days_ago(created, today)),
        person: DocumentPerson {
            name: person.name,
            email: person.email,
            phone: person.phone,
            address: person.address,
            linkedin: person.linkedin,
            github: person.github,
            website: person.website,
            marital_status: person.marital_status,
            military_status: person.military_status,
        },
        title: resume.title,
        company_name: resume.company_name,
        job_title: resume.job_title,
        job_category: resume.job_category,
        contract_type: resume.contract_type,
        language,
        target_salary: resume.target_salary,
        created_at: resume.created_at,
        experiences,
        educations,
        skills,
        relevant_skills: relevant,
    }
}

fn jalali_period(start: NaiveDate, end: Option<NaiveDate>, is_current: bool) -> String {
    let from = persian_date(start, "Y/m");
    match end {
        _ if is_current => format!("{from} - تاکنون"),
        Some(end) => format!("{from} - {}", persian_date(end, "Y/m")),
        None => from,
    }
}
