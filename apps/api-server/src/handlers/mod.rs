//! HTTP handlers and route configuration.

mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list))
                    .route("", web::post().to(posts::create))
                    .route("/{id}/comments", web::post().to(posts::add_comment))
                    .route("/{id}/like", web::post().to(posts::like))
                    .route("/{id}/unlike", web::post().to(posts::unlike)),
            ),
    );
}
