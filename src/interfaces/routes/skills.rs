use actix_web::web;

use crate::handlers::skill;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/skills")
            .service(
                web::resource("/{skill_id}")
                    .route(web::get().to(skill::get_skill))
                    .route(web::patch().to(skill::update_skill))
                    .route(web::delete().to(skill::delete_skill))
            )
            .service(
                web::resource("/{skill_id}/translations")
                    .route(web::post().to(skill::add_translation))
                    .route(web::get().to(skill::list_translations))
            )
            .service(
                web::resource("/{skill_id}/translations/{language}")
                    .route(web::delete().to(skill::delete_translation))
            )
    );
}
