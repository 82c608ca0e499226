pub mod education;
pub mod experience;
pub mod job_source;
pub mod person;
pub mod resume;
pub mod skill;
pub mod sqlx_repo;
pub mod token;
