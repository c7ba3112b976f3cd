use actix_web::{get, web, Responder};
use serde::Deserialize;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

const DEFAULT_PAGE_SIZE: u64 = 9;

#[derive(Debug, Deserialize)]
struct UserListQuery {
    pub search: Option<String>,
    pub banned: Option<bool>,
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

#[get("/api/users")]
pub async fn get_users_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    query: web::Query<UserListQuery>,
) -> impl Responder {
    let page = crate::shared::api::PageQuery {
        page: query.page,
        per_page: query.per_page,
    }
    .resolve(DEFAULT_PAGE_SIZE);

    match data
        .get_users_use_case
        .execute(query.search.as_deref(), query.banned, page)
        .await
    {
        Ok(users) => ApiResponse::success(users),
        Err(err) => {
            tracing::error!("User listing failed: {err}");
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
    use crate::tests::support::stubs::{StubGetUsersUseCase, StubTokenProvider};

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

    fn summary(username: &str) -> UserSummary {
        UserSummary {
            id: Uuid::new_v4(),
            username: username.into(),
            email: format!("{username}@example.com"),
            role: Role::User,
            banned_until: None,
            created_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn admin_lists_users() {
        let state = TestAppStateBuilder::default()
            .with_get_users_use_case(StubGetUsersUseCase {
                result: Some(Ok(vec![summary("alice"), summary("bob")])),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::admin(Uuid::new_v4())))
                .service(get_users_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users?banned=false&page=1")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let json = read_json(resp).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn non_admin_is_forbidden() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::user(Uuid::new_v4())))
                .service(get_users_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/users")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
