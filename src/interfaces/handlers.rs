pub mod auth;
pub mod education;
pub mod experience;
pub mod home;
pub mod job_source;
pub mod person;
pub mod resume;
pub mod skill;
pub mod system;
