//! User and follow-graph handlers.

use actix_web::{HttpResponse, web};

use chirp_core::domain::{Follow, User};
use chirp_shared::dto::{CreateUserRequest, FollowRequest, UserResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        username: user.username,
        email: user.email,
        created_at: user.created_at.to_rfc3339(),
    }
}

/// POST /api/users
pub async fn create_user(
    state: web::Data<AppState>,
    body: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    if req.username.is_empty() {
        return Err(AppError::BadRequest("Username is required".to_string()));
    }
    if req.email.is_empty() || !req.email.contains('@') {
        return Err(AppError::BadRequest("Invalid email address".to_string()));
    }

    if state.users.find_by_username(&req.username).await?.is_some() {
        return Err(AppError::Conflict("Username already exists".to_string()));
    }
    if state.users.find_by_email(&req.email).await?.is_some() {
        return Err(AppError::Conflict("Email already exists".to_string()));
    }

    let user = state.users.save(User::new(req.username, req.email)).await?;

    Ok(HttpResponse::Created().json(to_response(user)))
}

/// GET /api/users/{username}
pub async fn get_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let username = path.into_inner();

    let user = state
        .users
        .find_by_username(&username)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("user {} does not exist", username)))?;

    Ok(HttpResponse::Ok().json(to_response(user)))
}

/// POST /api/users/{username}/follow
pub async fn follow_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<FollowRequest>,
) -> AppResult<HttpResponse> {
    let follower = path.into_inner();
    let req = body.into_inner();

    if state.users.find_by_username(&follower).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "follower {} does not exist",
            follower
        )));
    }
    if state.users.find_by_username(&req.followee).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "user to follow {} does not exist",
            req.followee
        )));
    }

    let follow = state
        .follows
        .save(Follow::new(follower, req.followee))
        .await?;

    tracing::debug!(follower = %follow.follower, followee = %follow.followee, "Follow edge created");

    Ok(HttpResponse::Created().json(serde_json::json!({
        "id": follow.id.to_string(),
        "follower": follow.follower,
        "followee": follow.followee,
        "created_at": follow.created_at.to_rfc3339(),
    })))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    #[actix_web::test]
    async fn duplicate_username_is_rejected() {
        let state = AppState::in_memory(Duration::from_secs(30), Duration::from_secs(5));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({"username": "alice", "email": "alice@example.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({"username": "alice", "email": "alice2@example.com"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn following_a_missing_user_is_404() {
        let state = AppState::in_memory(Duration::from_secs(30), Duration::from_secs(5));
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/users")
            .set_json(serde_json::json!({"username": "alice", "email": "alice@example.com"}))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );

        let req = test::TestRequest::post()
            .uri("/api/users/alice/follow")
            .set_json(serde_json::json!({"followee": "ghost"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
