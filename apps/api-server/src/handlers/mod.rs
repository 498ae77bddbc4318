//! HTTP handlers and route configuration.

mod categories;
mod health;
mod posts;

use actix_web::web;

use crate::middleware::error::{json_config, query_config};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(query_config())
            .app_data(json_config())
            .route("/health", web::get().to(health::health_check))
            // Literal segments must be registered before `/posts/{id}`
            .service(
                web::scope("/posts")
                    .route("/stats", web::get().to(posts::post_stats))
                    .route("/preview-summary", web::post().to(posts::preview_summary))
                    .service(
                        web::resource("")
                            .route(web::get().to(posts::list_posts))
                            .route(web::post().to(posts::create_post)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(posts::get_post))
                            .route(web::put().to(posts::update_post))
                            .route(web::delete().to(posts::delete_post)),
                    )
                    .route(
                        "/{id}/regenerate-summary",
                        web::post().to(posts::regenerate_summary),
                    ),
            )
            .service(
                web::scope("/categories")
                    .route("", web::get().to(categories::list_categories))
                    .route("/{id}", web::get().to(categories::get_category)),
            ),
    );
}
