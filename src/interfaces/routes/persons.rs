use actix_web::web;

use crate::handlers::{education, experience, person, skill};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/persons")
            .service(
                web::resource("")
                    .route(web::post().to(person::create_person))
                    .route(web::get().to(person::list_persons))
            )
            .service(
                web::resource("/{person_id}")
                    .route(web::get().to(person::get_person))
                    .route(web::patch().to(person::update_person))
                    .route(web::delete().to(person::delete_person))
            )
            .service(
                web::resource("/{person_id}/experiences")
                    .route(web::post().to(experience::create_experience))
                    .route(web::get().to(experience::list_experiences))
            )
            .service(
                web::resource("/{person_id}/educations")
                    .route(web::post().to(education::create_education))
                    .route(web::get().to(education::list_educations))
            )
            .service(
                web::resource("/{person_id}/skills")
                    .route(web::post().to(skill::create_skill))
                    .route(web::get().to(skill::list_skills))
            )
    );
}
