use crate::repositories::sqlx_repo::{
    SqlxEducationRepo, SqlxExperienceRepo, SqlxJobSourceRepo, SqlxPersonRepo, SqlxResumeRepo, SqlxSkillRepo,
};

#[derive(Clone)]
pub struct SharedRepositories {
    pub person_repo: SqlxPersonRepo,
    pub experience_repo: SqlxExperienceRepo,
    pub education_repo: SqlxEducationRepo,
    pub skill_repo: SqlxSkillRepo,
    pub job_source_repo: SqlxJobSourceRepo,
    pub resume_repo: SqlxResumeRepo,
}

impl SharedRepositories {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SharedRepositories {
            person_repo: SqlxPersonRepo::new(pool.clone()),
            experience_repo: SqlxExperienceRepo::new(pool.clone()),
            education_repo: SqlxEducationRepo::new(pool.clone()),
            skill_repo: SqlxSkillRepo::new(pool.clone()),
            job_source_repo: SqlxJobSourceRepo::new(pool.clone()),
            resume_repo: SqlxResumeRepo::new(pool),
        }
    }
}
