use actix_web::web;

use crate::handlers::{home::home, system::health_check};

mod auth;
mod educations;
mod experiences;
mod job_sources;
mod json_error;
mod persons;
mod resumes;
mod skills;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(auth::config_routes)
            .configure(persons::config_routes)
            .configure(experiences::config_routes)
            .configure(educations::config_routes)
            .configure(skills::config_routes)
            .configure(job_sources::config_routes)
            .configure(resumes::config_routes)
    );

    cfg.configure(json_error::config_routes);
}
