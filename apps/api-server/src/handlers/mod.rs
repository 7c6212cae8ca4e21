//! HTTP handlers and route configuration.

mod announcements;
mod auth;
mod health;

use actix_web::web;

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Missing or malformed query parameters get the same problem-details body
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into());

    cfg.app_data(query_config)
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/announcements")
                .route("", web::get().to(announcements::list_announcements))
                .route("/", web::get().to(announcements::list_announcements))
                .route("", web::post().to(announcements::create_announcement))
                .route("/", web::post().to(announcements::create_announcement))
                .route("/all", web::get().to(announcements::list_all_announcements))
                .route(
                    "/{announcement_id}",
                    web::put().to(announcements::update_announcement),
                )
                .route(
                    "/{announcement_id}",
                    web::delete().to(announcements::delete_announcement),
                ),
        )
        .service(
            web::scope("/auth")
                .route("/login", web::post().to(auth::login))
                .route("/check-session", web::get().to(auth::check_session)),
        );
}
