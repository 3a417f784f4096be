//! Post creation handler.

use actix_web::{HttpResponse, web};

use chirp_core::domain::Post;
use chirp_shared::dto::{CreatePostRequest, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(crate) fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        author: post.author,
        content: post.content,
        created_at: post.created_at.to_rfc3339(),
    }
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if state.users.find_by_username(&req.username).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "user {} does not exist",
            req.username
        )));
    }

    // Length and non-emptiness are enforced by the domain constructor
    let post = Post::new(req.username, req.content)?;
    let post = state.posts.save(post).await?;

    Ok(HttpResponse::Created().json(to_response(post)))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    use chirp_core::domain::MAX_CONTENT_LEN;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn oversized_content_is_rejected() {
        let state = AppState::in_memory(Duration::from_secs(30), Duration::from_secs(5));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({"username": "bob", "email": "bob@example.com"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({
                "username": "bob",
                "content": "x".repeat(MAX_CONTENT_LEN + 1),
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn unknown_author_is_404() {
        let state = AppState::in_memory(Duration::from_secs(30), Duration::from_secs(5));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({"username": "ghost", "content": "hello"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
