use actix_web::web;

use crate::handlers::education;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/educations")
            .service(
                web::resource("/{education_id}")
                    .route(web::get().to(education::get_education))
                    .route(web::patch().to(education::update_education))
                    .route(web::delete().to(education::delete_education))
            )
            .service(
                web::resource("/{education_id}/translations")
                    .route(web::post().to(education::add_translation))
                    .route(web::get().to(education::list_translations))
            )
            .service(
                web::resource("/{education_id}/translations/{language}")
                    .route(web::delete().to(education::delete_translation))
            )
    );
}
