//! Post catalog handlers.

use actix_web::{HttpResponse, web};

use board_shared::dto::{CreateCommentRequest, CreatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts - all posts, newest first.
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    let catalog = state.catalog.read().await;
    HttpResponse::Ok().json(catalog.list_all())
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate_author_and_content(&req.author, &req.content)?;

    let mut catalog = state.catalog.write().await;
    let post = catalog.create(&req.author, &req.content, &req.kind).await;

    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/{id}/comments
pub async fn add_comment(
    state: web::Data<AppState>,
    path: web::Path<u64>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = path.into_inner();
    let req = body.into_inner();
    validate_author_and_content(&req.author, &req.content)?;

    let mut catalog = state.catalog.write().await;
    let comment = catalog.add_comment(post_id, &req.author, &req.content).await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// POST /api/posts/{id}/like
pub async fn like(state: web::Data<AppState>, path: web::Path<u64>) -> AppResult<HttpResponse> {
    let mut catalog = state.catalog.write().await;
    let post = catalog.like(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts/{id}/unlike
pub async fn unlike(state: web::Data<AppState>, path: web::Path<u64>) -> AppResult<HttpResponse> {
    let mut catalog = state.catalog.write().await;
    let post = catalog.unlike(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(post))
}

// Non-emptiness is enforced here, not in the catalog.
fn validate_author_and_content(author: &str, content: &str) -> Result<(), AppError> {
    if author.is_empty() || content.is_empty() {
        return Err(AppError::BadRequest(
            "author and content cannot be empty".to_string(),
        ));
    }
    Ok(())
}
