use actix_web::{delete, web, Responder};
use uuid::Uuid;

use super::map_country_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/countries/{id}")]
pub async fn delete_country_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.country_service.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_country_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::modules::country::application::ports::incoming::CountryError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{StubCountryUseCase, StubTokenProvider};

    fn bearer() -> (&'static str, &'static str) {
        ("Authorization", "Bearer test-token")
    }

    fn token_data(provider: StubTokenProvider) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
        web::Data::new(provider)
    }

    #[actix_web::test]
    async fn admin_deletes_country() {
        let state = TestAppStateBuilder::default()
            .with_country_service(StubCountryUseCase {
                delete: Some(Ok(())),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::admin(Uuid::new_v4())))
                .service(delete_country_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/countries/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn referenced_country_returns_conflict() {
        let state = TestAppStateBuilder::default()
            .with_country_service(StubCountryUseCase {
                delete: Some(Err(CountryError::InUse)),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::admin(Uuid::new_v4())))
                .service(delete_country_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/countries/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
