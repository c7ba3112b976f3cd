use actix_web::{post, web, Responder};
use serde::Deserialize;

use super::map_genre_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
struct CreateGenreRequest {
    pub name: String,
}

#[post("/api/genres")]
pub async fn create_genre_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    payload: web::Json<CreateGenreRequest>,
) -> impl Responder {
    match data.genre_service.create(payload.name.clone()).await {
        Ok(genre) => ApiResponse::created(genre),
        Err(err) => map_genre_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::modules::genre::application::domain::Genre;
    use crate::modules::genre::application::ports::incoming::GenreError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{StubGenreUseCase, StubTokenProvider};

    async fn read_json(resp: actix_web::dev::ServiceResponse) -> serde_json::Value {
        let body = test::read_body(resp).await;
        serde_json::from_slice(&body).unwrap()
    }

    fn bearer() -> (&'static str, &'static str) {
        ("Authorization", "Bearer test-token")
    }

    fn token_data(provider: StubTokenProvider) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
        web::Data::new(provider)
    }

    #[actix_web::test]
    async fn admin_creates_genre() {
        let genre = Genre {
            id: Uuid::new_v4(),
            name: "Thriller".into(),
        };

        let state = TestAppStateBuilder::default()
            .with_genre_service(StubGenreUseCase {
                create: Some(Ok(genre)),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::admin(Uuid::new_v4())))
                .service(create_genre_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/genres")
            .insert_header(bearer())
            .set_json(serde_json::json!({ "name": "Thriller" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let json = read_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["name"], "Thriller");
    }

    #[actix_web::test]
    async fn non_admin_is_forbidden() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::user(Uuid::new_v4())))
                .service(create_genre_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/genres")
            .insert_header(bearer())
            .set_json(serde_json::json!({ "name": "Thriller" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "ADMIN_REQUIRED");
    }

    #[actix_web::test]
    async fn missing_token_is_unauthorized() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::admin(Uuid::new_v4())))
                .service(create_genre_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/genres")
            .set_json(serde_json::json!({ "name": "Thriller" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn duplicate_name_returns_conflict() {
        let state = TestAppStateBuilder::default()
            .with_genre_service(StubGenreUseCase {
                create: Some(Err(GenreError::DuplicateName)),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::admin(Uuid::new_v4())))
                .service(create_genre_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/genres")
            .insert_header(bearer())
            .set_json(serde_json::json!({ "name": "drama" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "GENRE_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn empty_name_returns_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_genre_service(StubGenreUseCase {
                create: Some(Err(GenreError::EmptyName)),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::admin(Uuid::new_v4())))
                .service(create_genre_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/genres")
            .insert_header(bearer())
            .set_json(serde_json::json!({ "name": "   " }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json = read_json(resp).await;
        assert_eq!(json["error"]["code"], "EMPTY_NAME");
    }
}
