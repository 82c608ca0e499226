pub mod choices;
pub mod education;
pub mod experience;
pub mod job_source;
pub mod option_fields;
pub mod person;
pub mod resume;
pub mod skill;
pub mod token;
pub mod translation;
