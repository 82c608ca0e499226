use actix_web::web;

use crate::handlers::experience;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/experiences")
            .service(
                web::resource("/{experience_id}")
                    .route(web::get().to(experience::get_experience))
                    .route(web::patch().to(experience::update_experience))
                    .route(web::delete().to(experience::delete_experience))
            )
            .service(
                web::resource("/{experience_id}/translations")
                    .route(web::post().to(experience::add_translation))
                    .route(web::get().to(experience::list_translations))
            )
            .service(
                web::resource("/{experience_id}/translations/{language}")
                    .route(web::delete().to(experience::delete_translation))
            )
    );
}
