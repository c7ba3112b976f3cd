use actix_web::{get, web, Responder};

use crate::modules::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::auth::application::use_cases::fetch_profile::FetchProfileError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/me")]
pub async fn get_profile_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.fetch_profile_use_case.execute(user.user_id).await {
        Ok(profile) => ApiResponse::success(profile),
        Err(FetchProfileError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(err) => {
            tracing::error!("Profile lookup failed: {err}");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::Utc;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::auth::application::domain::{Role, UserSummary};
    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{StubFetchProfileUseCase, StubTokenProvider};

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
    async fn profile_returns_the_current_user() {
        let user_id = Uuid::new_v4();
        let state = TestAppStateBuilder::default()
            .with_fetch_profile_use_case(StubFetchProfileUseCase {
                result: Some(Ok(UserSummary {
                    id: user_id,
                    username: "alice".into(),
                    email: "alice@example.com".into(),
                    role: Role::User,
                    banned_until: None,
                    created_at: Utc::now(),
                })),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::user(user_id)))
                .service(get_profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/me")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["data"]["username"], "alice");
        assert!(json["data"].get("password_hash").is_none());
    }

    #[actix_web::test]
    async fn anonymous_request_is_unauthorized() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::user(Uuid::new_v4())))
                .service(get_profile_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/me").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }
}
