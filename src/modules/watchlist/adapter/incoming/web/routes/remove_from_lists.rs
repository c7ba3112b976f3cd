use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::map_watchlist_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/me/lists/{movie_id}")]
pub async fn remove_from_lists_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data
        .watchlist_service
        .remove(user.user_id, path.into_inner())
        .await
    {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_watchlist_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::modules::watchlist::application::ports::incoming::WatchlistError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{StubTokenProvider, StubWatchlistUseCase};

    fn bearer() -> (&'static str, &'static str) {
        ("Authorization", "Bearer test-token")
    }

    fn token_data(provider: StubTokenProvider) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
        web::Data::new(provider)
    }

    #[actix_web::test]
    async fn removes_an_entry() {
        let state = TestAppStateBuilder::default()
            .with_watchlist_service(StubWatchlistUseCase {
                remove: Some(Ok(())),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::user(Uuid::new_v4())))
                .service(remove_from_lists_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/me/lists/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn missing_entry_returns_not_found() {
        let state = TestAppStateBuilder::default()
            .with_watchlist_service(StubWatchlistUseCase {
                remove: Some(Err(WatchlistError::EntryNotFound)),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::user(Uuid::new_v4())))
                .service(remove_from_lists_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/me/lists/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"]["code"], "ENTRY_NOT_FOUND");
    }
}
