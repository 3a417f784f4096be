//! HTTP handlers and route configuration.

mod health;
mod posts;
mod timeline;
mod users;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/users")
                    .route("", web::post().to(users::create_user))
                    .route("/{username}", web::get().to(users::get_user))
                    .route("/{username}/follow", web::post().to(users::follow_user)),
            )
            .route("/posts", web::post().to(posts::create_post))
            .route("/timeline/{username}", web::get().to(timeline::get_timeline)),
    );
}
