//! Post handlers.

use actix_web::{HttpResponse, web};

use seeq_core::domain::PostInput;
use seeq_core::query::{paginate, total_pages};
use seeq_core::{PAGE_SIZE, PostFilter, PostStats};
use seeq_shared::PaginatedResponse;
use seeq_shared::dto::{
    CreatePostRequest, ListPostsQuery, PostStatsResponse, PreviewSummaryRequest,
    UpdatePostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const MAX_PAGE_SIZE: usize = 100;
const MAX_TITLE_CHARS: usize = 255;
const MAX_IMAGE_URL_CHARS: usize = 500;

/// GET /api/posts?search=&categoryId=&page=&pageSize=
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let posts = state.blog.list_posts(&filter_from(&query)).await?;

    let page = query.page.unwrap_or(1);
    let page_size = query.page_size.unwrap_or(PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);

    Ok(HttpResponse::Ok().json(PaginatedResponse {
        data: paginate(&posts, page, page_size).to_vec(),
        total: posts.len(),
        page,
        page_size,
        total_pages: total_pages(posts.len(), page_size),
    }))
}

/// GET /api/posts/stats?search=&categoryId=
pub async fn post_stats(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.blog.list_posts(&filter_from(&query)).await?;
    let categories = state.blog.list_categories().await?;

    let stats = PostStats::compute(&posts, &categories, chrono::Utc::now());

    Ok(HttpResponse::Ok().json(PostStatsResponse {
        total_posts: stats.total_posts,
        monthly_posts: stats.monthly_posts,
        categories_count: stats.categories_count,
        total_summaries: stats.total_summaries,
        category_counts: stats.category_counts,
    }))
}

/// GET /api/posts/{id}
pub async fn get_post(state: web::Data<AppState>, path: web::Path<i64>) -> AppResult<HttpResponse> {
    let post = state.blog.get_post(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let image_url = normalize_image_url(req.image_url);
    validate_post_fields(&req.title, &req.content, image_url.as_deref())?;

    let post = state
        .blog
        .create_post(PostInput {
            title: req.title,
            content: req.content,
            category_id: req.category_id,
            image_url,
        })
        .await?;

    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let image_url = normalize_image_url(req.image_url);
    validate_post_fields(&req.title, &req.content, image_url.as_deref())?;

    let post = state
        .blog
        .update_post(
            path.into_inner(),
            PostInput {
                title: req.title,
                content: req.content,
                category_id: req.category_id,
                image_url,
            },
            req.regenerate_summary,
        )
        .await?;

    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    state.blog.delete_post(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// POST /api/posts/{id}/regenerate-summary
pub async fn regenerate_summary(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let summary = state.blog.regenerate_summary(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(summary))
}

/// POST /api/posts/preview-summary
pub async fn preview_summary(
    state: web::Data<AppState>,
    body: web::Json<PreviewSummaryRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate_post_fields(&req.title, &req.content, None)?;

    let draft = state
        .blog
        .preview_summary(&req.title, &req.content, req.category_id)
        .await?;

    Ok(HttpResponse::Ok().json(draft))
}

fn filter_from(query: &ListPostsQuery) -> PostFilter {
    PostFilter {
        search: query.search.clone().filter(|s| !s.is_empty()),
        category_id: query.category_id,
    }
}

fn normalize_image_url(image_url: Option<String>) -> Option<String> {
    image_url.filter(|url| !url.trim().is_empty())
}

fn validate_post_fields(title: &str, content: &str, image_url: Option<&str>) -> AppResult<()> {
    let mut errors = Vec::new();

    if title.trim().is_empty() {
        errors.push("title must not be empty".to_string());
    } else if title.chars().count() > MAX_TITLE_CHARS {
        errors.push(format!("title must be at most {MAX_TITLE_CHARS} characters"));
    }
    if content.trim().is_empty() {
        errors.push("content must not be empty".to_string());
    }
    if image_url.is_some_and(|url| url.chars().count() > MAX_IMAGE_URL_CHARS) {
        errors.push(format!("imageUrl must be at most {MAX_IMAGE_URL_CHARS} characters"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(errors))
    }
}
