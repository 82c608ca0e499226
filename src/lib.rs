pub mod domain;
pub mod interfaces;
pub mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod shared_repos;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{auth, db, utils};

use auth::jwt::JwtService;
use repositories::sqlx_repo::{
    SqlxEducationRepo, SqlxExperienceRepo, SqlxJobSourceRepo, SqlxPersonRepo, SqlxResumeRepo, SqlxSkillRepo,
};
use shared_repos::SharedRepositories;
use use_cases::{
    auth::AuthHandler, education::EducationHandler, experience::ExperienceHandler, job_source::JobSourceHandler,
    person::PersonHandler, resume::ResumeHandler, skill::SkillHandler,
};

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub person_handler: AppPersonHandler,
    pub experience_handler: AppExperienceHandler,
    pub education_handler: AppEducationHandler,
    pub skill_handler: AppSkillHandler,
    pub job_source_handler: AppJobSourceHandler,
    pub resume_handler: AppResumeHandler,
    pub db_pool: sqlx::PgPool,
}

pub type AppAuthHandler = AuthHandler<JwtService>;
pub type AppPersonHandler = PersonHandler<SqlxPersonRepo>;
pub type AppExperienceHandler = ExperienceHandler<SqlxExperienceRepo>;
pub type AppEducationHandler = EducationHandler<SqlxEducationRepo>;
pub type AppSkillHandler = SkillHandler<SqlxSkillRepo>;
pub type AppJobSourceHandler = JobSourceHandler<SqlxJobSourceRepo>;
pub type AppResumeHandler =
    ResumeHandler<SqlxResumeRepo, SqlxPersonRepo, SqlxExperienceRepo, SqlxEducationRepo, SqlxSkillRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let repos = SharedRepositories::new(pool.clone());

        AppState {
            auth_handler: AuthHandler::new(config, JwtService::new(config)),
            person_handler: PersonHandler::new(repos.person_repo.clone()),
            experience_handler: ExperienceHandler::new(repos.experience_repo.clone()),
            education_handler: EducationHandler::new(repos.education_repo.clone()),
            skill_handler: SkillHandler::new(repos.skill_repo.clone()),
            job_source_handler: JobSourceHandler::new(repos.job_source_repo),
            resume_handler: ResumeHandler::new(
                repos.resume_repo,
                repos.person_repo,
                repos.experience_repo,
                repos.education_repo,
                repos.skill_repo,
            ),
            db_pool: pool,
        }
    }
}
