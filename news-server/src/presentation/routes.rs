use actix_web::{error, web};

use crate::presentation::handlers::{health, news};

/// Wires every route. `/news/create/` is registered ahead of
/// `/news/{link}/` so the literal segment is matched first, and a path
/// that fails to parse as an integer link answers 404 rather than 400.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(|err, _req| error::ErrorNotFound(err)))
        .route("/", web::get().to(news::list))
        .route("/news/", web::get().to(news::list))
        .service(
            web::resource("/news/create/")
                .route(web::get().to(news::create_form))
                .route(web::post().to(news::create_submit)),
        )
        .route("/news/{link}/", web::get().to(news::detail))
        .route("/health", web::get().to(health::health));
}
