use actix_web::web;

use crate::handlers::job_source;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/job-sources")
            .service(
                web::resource("")
                    .route(web::post().to(job_source::create_job_source))
                    .route(web::get().to(job_source::list_job_sources))
            )
            .service(
                web::resource("/{source_id}")
                    .route(web::get().to(job_source::get_job_source))
                    .route(web::patch().to(job_source::update_job_source))
                    .route(web::delete().to(job_source::delete_job_source))
            )
    );
}
