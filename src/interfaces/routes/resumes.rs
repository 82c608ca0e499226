use actix_web::web;

use crate::handlers::resume;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/resumes")
            .service(
                web::resource("")
                    .route(web::post().to(resume::create_resume))
                    .route(web::get().to(resume::search_resumes))
            )
            .service(
                web::resource("/{resume_id}")
                    .route(web::get().to(resume::get_resume))
                    .route(web::patch().to(resume::update_resume))
                    .route(web::delete().to(resume::delete_resume))
            )
            .service(
                web::resource("/{resume_id}/copy")
                    .route(web::post().to(resume::copy_resume))
            )
            .service(
                web::resource("/{resume_id}/document")
                    .route(web::get().to(resume::get_document))
            )
            .service(
                web::resource("/{resume_id}/skills")
                    .route(web::get().to(resume::get_skills))
                    .route(web::put().to(resume::set_skills))
            )
            .service(
                web::resource("/{resume_id}/relevant-skills")
                    .route(web::get().to(resume::get_relevant_skills))
            )
            .service(
                web::resource("/{resume_id}/{section:experiences|educations}")
                    .route(web::get().to(resume::get_ordered))
            )
            .service(
                web::resource("/{resume_id}/{section:experiences|educations}/{entity_id}")
                    .route(web::put().to(resume::set_position))
                    .route(web::delete().to(resume::remove_from_order))
            )
    );
}
