//! Category handlers.

use actix_web::{HttpResponse, web};

use seeq_core::domain::Category;
use seeq_shared::dto::CategoryResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(category: Category) -> CategoryResponse {
    CategoryResponse::new(category.id, category.name, category.description)
}

/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories: Vec<CategoryResponse> = state
        .blog
        .list_categories()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(categories))
}

/// GET /api/categories/{id}
pub async fn get_category(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let category = state.blog.get_category(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_response(category)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::Value;

    use seeq_infra::NoLatency;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn test_list_categories_with_style() {
        let state = web::Data::new(AppState::in_memory(Arc::new(NoLatency)));
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/categories").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let categories = body.as_array().unwrap();

        assert_eq!(categories.len(), 4);
        assert_eq!(categories[0]["name"], "학습");
        assert_eq!(categories[0]["emoji"], "🎓");
        assert_eq!(categories[1]["color"], "#1976d2");
    }

    #[actix_web::test]
    async fn test_get_category() {
        let state = web::Data::new(AppState::in_memory(Arc::new(NoLatency)));
        let app = test::init_service(App::new().app_data(state).configure(configure_routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/categories/3")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["name"], "일상");

        let req = test::TestRequest::get()
            .uri("/api/categories/30")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
