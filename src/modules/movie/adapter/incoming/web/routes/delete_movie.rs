use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::map_movie_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::domain::Role;
use crate::modules::movie::application::ports::incoming::Actor;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Removes the movie and everything hanging off it: list entries, reports
/// and genre/country associations.
#[delete("/api/movies/{id}")]
pub async fn delete_movie_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let actor = Actor {
        user_id: user.user_id,
        is_admin: user.role == Role::Admin,
    };

    match data.movie_service.delete(path.into_inner(), actor).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_movie_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::modules::movie::application::ports::incoming::MovieError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{StubMovieUseCase, StubTokenProvider};

    fn bearer() -> (&'static str, &'static str) {
        ("Authorization", "Bearer test-token")
    }

    fn token_data(provider: StubTokenProvider) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
        web::Data::new(provider)
    }

    #[actix_web::test]
    async fn creator_deletes_their_movie() {
        let state = TestAppStateBuilder::default()
            .with_movie_service(StubMovieUseCase {
                delete: Some(Ok(())),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::user(Uuid::new_v4())))
                .service(delete_movie_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/movies/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn stranger_is_forbidden() {
        let state = TestAppStateBuilder::default()
            .with_movie_service(StubMovieUseCase {
                delete: Some(Err(MovieError::Forbidden)),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::user(Uuid::new_v4())))
                .service(delete_movie_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/movies/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn unknown_movie_returns_not_found() {
        let state = TestAppStateBuilder::default()
            .with_movie_service(StubMovieUseCase {
                delete: Some(Err(MovieError::NotFound)),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::user(Uuid::new_v4())))
                .service(delete_movie_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/movies/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
