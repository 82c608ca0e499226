use crate::entities::{
    choices::{JobCategory, SkillCategory},
    skill::Skill,
};

/// Skill categories that matter for each job category. Job categories without an
/// entry consider every active skill relevant.
pub const CATEGORY_RELEVANCE: &[(JobCategory, &[SkillCategory])] = &[
    (
        JobCategory::PhpLaravel,
        &[SkillCategory::Programming, SkillCategory::WebBackend, SkillCategory::Framework, SkillCategory::Database],
    ),
    (
        JobCategory::PythonDjango,
        &[SkillCategory::Programming, SkillCategory::WebBackend, SkillCategory::Framework, SkillCategory::Database],
    ),
    (
        JobCategory::Wordpress,
        &[SkillCategory::Cms, SkillCategory::WebFrontend, SkillCategory::WebBackend, SkillCategory::Programming],
    ),
    (
        JobCategory::Frontend,
        &[SkillCategory::WebFrontend, SkillCategory::Library, SkillCategory::Framework],
    ),
    (
        JobCategory::Fullstack,
        &[SkillCategory::WebFrontend, SkillCategory::WebBackend, SkillCategory::Database, SkillCategory::Framework],
    ),
    (JobCategory::Mobile, &[SkillCategory::Mobile, SkillCategory::Programming]),
    (JobCategory::Devops, &[SkillCategory::Devops, SkillCategory::Database]),
];

pub fn relevant_categories(job_category: JobCategory) -> Option<&'static [SkillCategory]> {
    CATEGORY_RELEVANCE
        .iter()
        .find(|(job, _)| *job == job_category)
        .map(|(_, categories)| *categories)
}

/// Filters `skills` down to the active ones relevant for `job_category`, keeping
/// their input order.
pub fn relevant_skills(skills: &[Skill], job_category: JobCategory) -> Vec<&Skill> {
    let categories = relevant_categories(job_category);

    skills
        .iter()
        .filter(|skill| skill.is_active)
        .filter(|skill| categories.map_or(true, |allowed| allowed.contains(&skill.category)))
        .collect()
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    fn skill(name: &str, category: SkillCategory, is_active: bool) -> Skill {
        Skill {
            id: Uuid::new_v4(),
            person_id: Uuid::nil(),
            name: name.into(),
            category,
            is_active,
        }
    }

    fn sample() -> Vec<Skill> {
        vec![
            skill("Python", SkillCategory::Programming, true),
            skill("React", SkillCategory::Library, true),
            skill("CSS", SkillCategory::WebFrontend, true),
            skill("Django", SkillCategory::Framework, true),
            skill("PostgreSQL", SkillCategory::Database, true),
            skill("Docker", SkillCategory::Devops, true),
            skill("jQuery", SkillCategory::Library, false),
            skill("Teamwork", SkillCategory::SoftSkills, true),
        ]
    }

    fn names(skills: Vec<&Skill>) -> Vec<&str> {
        skills.into_iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn frontend_keeps_frontend_library_and_framework() {
        let skills = sample();
        assert_eq!(names(relevant_skills(&skills, JobCategory::Frontend)), vec!["React", "CSS", "Django"]);
    }

    #[test]
    fn devops_keeps_devops_and_database() {
        let skills = sample();
        assert_eq!(names(relevant_skills(&skills, JobCategory::Devops)), vec!["PostgreSQL", "Docker"]);
    }

    #[test]
    fn unmapped_category_returns_all_active() {
        let skills = sample();
        for job in [JobCategory::DataScience, JobCategory::UiUx, JobCategory::ProjectManager, JobCategory::Other] {
            assert_eq!(relevant_skills(&skills, job).len(), 7, "{job:?}");
        }
    }

    #[test]
    fn every_mapped_category_returns_only_active_members() {
        let skills = sample();
        for (job, allowed) in CATEGORY_RELEVANCE {
            let expected: Vec<&str> = skills
                .iter()
                .filter(|s| s.is_active && allowed.contains(&s.category))
                .map(|s| s.name.as_str())
                .collect();
            assert_eq!(names(relevant_skills(&skills, *job)), expected, "{job:?}");
        }
    }

    #[test]
    fn inactive_skills_are_never_relevant() {
        let skills = sample();
        assert!(relevant_skills(&skills, JobCategory::Other).iter().all(|s| s.is_active));
    }
}
