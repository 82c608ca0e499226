use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    domain::{
        document::{build_document, DocumentSources, ResumeDocument},
        ordering::{OrderEntry, OrderedSection},
        relevance,
    },
    entities::{
        education::Education,
        experience::Experience,
        resume::{
            CopyResumeRequest, NewResumeRequest, Resume, ResumeListResponse, ResumeSearchQuery,
            SetPositionRequest, SetSkillsRequest, UpdateResumeRequest,
        },
        skill::Skill,
    },
    errors::AppError,
    repositories::{
        education::EducationRepository, experience::ExperienceRepository, person::PersonRepository,
        resume::ResumeRepository, skill::SkillRepository,
    },
    utils::valid_uuid::valid_uuid,
};

/// Résumé variants: CRUD, search, ordering of sections, skill selection,
/// copying and the rendered document.
pub struct ResumeHandler<R, P, X, E, S>
where
    R: ResumeRepository,
    P: PersonRepository,
    X: ExperienceRepository,
    E: EducationRepository,
    S: SkillRepository,
{
    pub resume_repo: R,
    pub person_repo: P,
    pub experience_repo: X,
    pub education_repo: E,
    pub skill_repo: S,
}

impl<R, P, X, E, S> ResumeHandler<R, P, X, E, S>
where
    R: ResumeRepository,
    P: PersonRepository,
    X: ExperienceRepository,
    E: EducationRepository,
    S: SkillRepository,
{
    pub fn new(resume_repo: R, person_repo: P, experience_repo: X, education_repo: E, skill_repo: S) -> Self {
        ResumeHandler {
            resume_repo,
            person_repo,
            experience_repo,
            education_repo,
            skill_repo,
        }
    }

    pub async fn create_resume(&self, request: NewResumeRequest) -> Result<Resume, AppError> {
        request.validate()?;

        let resume = self.resume_repo.create_resume(&request.prepare_for_insert()).await?;

        tracing::info!(resume_id = %resume.id, company = %resume.company_name, "Resume created");
        Ok(resume)
    }

    pub async fn get_resume(&self, id: &str) -> Result<Resume, AppError> {
        let valid_id = valid_uuid(id)?;
        self.resume_repo.get_resume_by_id(&valid_id).await
    }

    /// Lists résumés newest first with the filtered and overall counts
    pub async fn search_resumes(&self, query: ResumeSearchQuery) -> Result<ResumeListResponse, AppError> {
        query.validate()?;

        let filter = query.to_filter(Utc::now().date_naive());
        let resumes = self.resume_repo.search_resumes(&filter).await?;
        let all_count = self.resume_repo.count_resumes().await?;

        Ok(ResumeListResponse {
            total_count: resumes.len(),
            resumes,
            all_count,
        })
    }

    pub async fn update_resume(&self, id: &str, request: UpdateResumeRequest) -> Result<Resume, AppError> {
        request.validate()?;
        let valid_id = valid_uuid(id)?;

        let request = request.sanitized();
        let mut resume = self.resume_repo.get_resume_by_id(&valid_id).await?;
        request.apply(&mut resume);

        self.resume_repo.update_resume(&resume).await
    }

    pub async fn delete_resume(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.resume_repo.delete_resume(&valid_id).await?;

        tracing::info!(resume_id = %valid_id, "Resume deleted");
        Ok(())
    }

    /// Clones a résumé for another company, including section order and skills
    pub async fn copy_resume(&self, id: &str, request: CopyResumeRequest) -> Result<Resume, AppError> {
        request.validate()?;
        let source_id = valid_uuid(id)?;

        let copy = self.resume_repo.copy_resume(&source_id, &request).await?;

        tracing::info!(source_id = %source_id, resume_id = %copy.id, "Resume copied");
        Ok(copy)
    }

    pub async fn set_position(
        &self,
        resume_id: &str,
        section: OrderedSection,
        entity_id: &str,
        request: SetPositionRequest,
    ) -> Result<OrderEntry, AppError> {
        request.validate()?;
        let resume_id = valid_uuid(resume_id)?;
        let entity_id = valid_uuid(entity_id)?;

        self.resume_repo
            .set_order(&resume_id, section, &entity_id, request.position)
            .await
    }

    pub async fn remove_from_order(&self, resume_id: &str, section: OrderedSection, entity_id: &str) -> Result<(), AppError> {
        let resume_id = valid_uuid(resume_id)?;
        let entity_id = valid_uuid(entity_id)?;
        self.resume_repo.remove_from_order(&resume_id, section, &entity_id).await
    }

    pub async fn ordered_experiences(&self, resume_id: &str) -> Result<Vec<Experience>, AppError> {
        let resume = self.get_resume(resume_id).await?;
        self.resume_repo.get_ordered_experiences(&resume.id).await
    }

    pub async fn ordered_educations(&self, resume_id: &str) -> Result<Vec<Education>, AppError> {
        let resume = self.get_resume(resume_id).await?;
        self.resume_repo.get_ordered_educations(&resume.id).await
    }

    pub async fn selected_skills(&self, resume_id: &str) -> Result<Vec<Skill>, AppError> {
        let resume = self.get_resume(resume_id).await?;
        self.resume_repo.get_selected_skills(&resume.id).await
    }

    /// Replaces the skill selection and returns it
    pub async fn set_skills(&self, resume_id: &str, request: SetSkillsRequest) -> Result<Vec<Skill>, AppError> {
        let resume_id = valid_uuid(resume_id)?;

        self.resume_repo.set_selected_skills(&resume_id, &request.skill_ids).await?;
        self.resume_repo.get_selected_skills(&resume_id).await
    }

    /// The person's active skills that matter for the résumé's job category
    pub async fn relevant_skills(&self, resume_id: &str) -> Result<Vec<Skill>, AppError> {
        let resume = self.get_resume(resume_id).await?;
        let skills = self.skill_repo.list_skills(&resume.person_id, true).await?;

        Ok(relevance::relevant_skills(&skills, resume.job_category)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn document(&self, resume_id: &str) -> Result<ResumeDocument, AppError> {
        let resume = self.get_resume(resume_id).await?;
        let person = self.person_repo.get_person_by_id(&resume.person_id).await?;
        let language = resume.language;

        let experiences = self.resume_repo.get_ordered_experiences(&resume.id).await?;
        let educations = self.resume_repo.get_ordered_educations(&resume.id).await?;
        let selected_skills = self.resume_repo.get_selected_skills(&resume.id).await?;
        let person_skills = self.skill_repo.list_skills(&resume.person_id, true).await?;

        let skill_ids: Vec<Uuid> = selected_skills
            .iter()
            .chain(person_skills.iter())
            .map(|s| s.id)
            .collect();

        let experience_translations = self
            .experience_repo
            .get_translations(&ids_of(&experiences, |e| e.id), language)
            .await?;
        let education_translations = self
            .education_repo
            .get_translations(&ids_of(&educations, |e| e.id), language)
            .await?;
        let skill_translations = self.skill_repo.get_translations(&skill_ids, language).await?;

        let sources = DocumentSources {
            experiences,
            educations,
            selected_skills,
            person_skills,
            experience_translations,
            education_translations,
            skill_translations,
        };

        Ok(build_document(resume, person, &sources, Utc::now().date_naive()))
    }
}

fn ids_of<T>(items: &[T], id_of: impl Fn(&T) -> Uuid) -> Vec<Uuid> {
    items.iter().map(id_of).collect()
}
