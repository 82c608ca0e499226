//! Builds a new résumé from an existing one.
//!
//! Planning is pure: the repository takes a consistent snapshot of the source
//! résumé inside a transaction, hands it to [`plan_copy`] and persists the plan
//! before committing.

use uuid::Uuid;

use crate::{
    domain::ordering::OrderedEntries,
    entities::resume::{CopyResumeRequest, Resume, ResumeInsert, ResumeSelection},
};

/// Everything needed to persist a copied résumé.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeCopyPlan {
    pub resume: ResumeInsert,
    pub experiences: OrderedEntries,
    pub educations: OrderedEntries,
    pub skill_ids: Vec<Uuid>,
}

pub fn plan_copy(source: &Resume, selection: &ResumeSelection, request: &CopyResumeRequest) -> ResumeCopyPlan {
    let job_title = request
        .job_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map_or_else(|| source.job_title.clone(), str::to_string);

    let resume = ResumeInsert {
        person_id: source.person_id,
        title: request.title.trim().to_string(),
        company_name: request.company_name.trim().to_string(),
        job_title,
        job_category: request.job_category.unwrap_or(source.job_category),
        contract_type: request.contract_type.unwrap_or(source.contract_type),
        language: source.language,
        custom_summary: source.custom_summary.clone(),
        target_salary: source.target_salary,
        company_match_reason: String::new(),
        copied_from: Some(source.id),
        job_source_id: None,
        job_ad_url: None,
        company_notes: String::new(),
        job_ad_full_text: String::new(),
    };

    let mut skill_ids = selection.skill_ids.clone();
    skill_ids.sort_unstable();
    skill_ids.dedup();

    ResumeCopyPlan {
        resume,
        experiences: selection.experiences.clone(),
        educations: selection.educations.clone(),
        skill_ids,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::{
        domain::ordering::OrderEntry,
        entities::choices::{ContractType, JobCategory, Language},
    };

    fn source() -> Resume {
        Resume {
            id: Uuid::new_v4(),
            person_id: Uuid::new_v4(),
            title: "Backend CV".into(),
            company_name: "Digikala".into(),
            job_title: "Python Developer".into(),
            job_category: JobCategory::PythonDjango,
            contract_type: ContractType::Remote,
            language: Language::En,
            custom_summary: "<p>Builds APIs</p>".into(),
            target_salary: Some(45_000_000),
            company_match_reason: "Great culture".into(),
            copied_from: None,
            job_source_id: Some(Uuid::new_v4()),
            job_ad_url: Some("https://jobinja.ir/ad/1".into()),
            company_notes: "Call on Sunday".into(),
            job_ad_full_text: "Full ad".into(),
            created_at: Utc::now(),
        }
    }

    fn selection() -> ResumeSelection {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        ResumeSelection {
            experiences: OrderedEntries::from_rows(vec![
                OrderEntry { entity_id: a, position: 2, seq: 7 },
                OrderEntry { entity_id: b, position: 0, seq: 9 },
            ]),
            educations: OrderedEntries::new(),
            skill_ids: vec![Uuid::new_v4()],
        }
    }

    #[test]
    fn copies_scalars_and_resets_match_reason() {
        let source = source();
        let plan = plan_copy(&source, &selection(), &CopyResumeRequest::new("Snapp CV", "Snapp"));

        assert_eq!(plan.resume.person_id, source.person_id);
        assert_eq!(plan.resume.title, "Snapp CV");
        assert_eq!(plan.resume.company_name, "Snapp");
        assert_eq!(plan.resume.job_title, source.job_title);
        assert_eq!(plan.resume.job_category, source.job_category);
        assert_eq!(plan.resume.contract_type, source.contract_type);
        assert_eq!(plan.resume.language, source.language);
        assert_eq!(plan.resume.custom_summary, source.custom_summary);
        assert_eq!(plan.resume.target_salary, source.target_salary);
        assert_eq!(plan.resume.company_match_reason, "");
        assert_eq!(plan.resume.copied_from, Some(source.id));
    }

    #[test]
    fn company_specific_fields_are_not_carried_over() {
        let plan = plan_copy(&source(), &selection(), &CopyResumeRequest::new("a", "b"));

        assert_eq!(plan.resume.job_source_id, None);
        assert_eq!(plan.resume.job_ad_url, None);
        assert!(plan.resume.company_notes.is_empty());
        assert!(plan.resume.job_ad_full_text.is_empty());
    }

    #[test]
    fn overrides_win_and_blank_job_title_is_ignored() {
        let source = source();
        let mut request = CopyResumeRequest::new("a", "b");
        request.job_category = Some(JobCategory::Devops);
        request.contract_type = Some(ContractType::PartTime);
        request.job_title = Some("   ".into());

        let plan = plan_copy(&source, &selection(), &request);
        assert_eq!(plan.resume.job_category, JobCategory::Devops);
        assert_eq!(plan.resume.contract_type, ContractType::PartTime);
        assert_eq!(plan.resume.job_title, source.job_title);

        request.job_title = Some("SRE".into());
        assert_eq!(plan_copy(&source, &selection(), &request).resume.job_title, "SRE");
    }

    #[test]
    fn ordering_is_copied_verbatim() {
        let selection = selection();
        let plan = plan_copy(&source(), &selection, &CopyResumeRequest::new("a", "b"));

        assert_eq!(plan.experiences, selection.experiences);
        assert!(plan.educations.is_empty());
        assert_eq!(plan.skill_ids, selection.skill_ids);
    }
}
