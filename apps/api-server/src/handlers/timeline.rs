//! Timeline read handler - the HTTP boundary of the fan-in pipeline.

use actix_web::{HttpResponse, web};

use chirp_core::domain::Timeline;
use chirp_shared::dto::{PageQuery, TimelineResponse};

use super::posts;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn to_response(timeline: Timeline) -> TimelineResponse {
    TimelineResponse {
        username: timeline.username,
        posts: timeline.posts.into_iter().map(posts::to_response).collect(),
    }
}

/// GET /api/timeline/{username}?offset=&limit=
///
/// Pagination parameters default to offset 0, limit 10 at this boundary.
pub async fn get_timeline(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> AppResult<HttpResponse> {
    let username = path.into_inner();
    let page = query.into_inner();

    let timeline = state
        .timeline
        .get_timeline(&username, page.offset, page.limit)
        .await?;

    Ok(HttpResponse::Ok().json(to_response(timeline)))
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use actix_web::{App, test, web};
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    use chirp_core::domain::{Follow, Post, User};
    use chirp_shared::dto::TimelineResponse;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn post_at(author: &str, content: &str, secs: i64) -> Post {
        Post {
            id: Uuid::new_v4(),
            author: author.to_string(),
            content: content.to_string(),
            created_at: DateTime::<Utc>::from_timestamp(secs, 0).unwrap(),
        }
    }

    async fn seeded_state() -> AppState {
        let state = AppState::in_memory(Duration::from_secs(30), Duration::from_secs(5));

        for name in ["alice", "bob", "carol", "dave"] {
            state
                .users
                .save(User::new(name, format!("{name}@example.com")))
                .await
                .unwrap();
        }
        state.follows.save(Follow::new("alice", "bob")).await.unwrap();
        state.follows.save(Follow::new("alice", "carol")).await.unwrap();

        state.posts.save(post_at("bob", "first", 1)).await.unwrap();
        state.posts.save(post_at("carol", "second", 2)).await.unwrap();
        state.posts.save(post_at("bob", "third", 3)).await.unwrap();

        state
    }

    #[actix_web::test]
    async fn timeline_pages_are_disjoint_and_ordered() {
        let state = seeded_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/timeline/alice?offset=0&limit=2")
            .to_request();
        let page_one: TimelineResponse = test::call_and_read_body_json(&app, req).await;
        let contents: Vec<&str> = page_one.posts.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["third", "second"]);

        let req = test::TestRequest::get()
            .uri("/api/timeline/alice?offset=2&limit=2")
            .to_request();
        let page_two: TimelineResponse = test::call_and_read_body_json(&app, req).await;
        let contents: Vec<&str> = page_two.posts.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(contents, vec!["first"]);
    }

    #[actix_web::test]
    async fn pagination_defaults_to_first_ten() {
        let state = seeded_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/timeline/alice")
            .to_request();
        let page: TimelineResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(page.username, "alice");
        assert_eq!(page.posts.len(), 3);
    }

    #[actix_web::test]
    async fn unknown_user_maps_to_404() {
        let state = seeded_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/timeline/ghost")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn user_following_nobody_gets_empty_timeline() {
        let state = seeded_state().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/timeline/dave?offset=0&limit=10")
            .to_request();
        let page: TimelineResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(page.username, "dave");
        assert!(page.posts.is_empty());
    }
}
