use actix_web::{get, web, Responder};

use super::map_report_error;
use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/reports")]
pub async fn get_reports_handler(_admin: AdminUser, data: web::Data<AppState>) -> impl Responder {
    match data.report_service.list_all().await {
        Ok(reports) => ApiResponse::success(reports),
        Err(err) => map_report_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::Utc;
    use std::sync::Arc;
    use uuid::Uuid;

    use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
    use crate::modules::report::application::domain::ReportView;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{StubReportUseCase, StubTokenProvider};

    fn bearer() -> (&'static str, &'static str) {
        ("Authorization", "Bearer test-token")
    }

    fn token_data(provider: StubTokenProvider) -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(provider);
        web::Data::new(provider)
    }

    #[actix_web::test]
    async fn admin_lists_reports_with_movie_titles() {
        let view = ReportView {
            id: Uuid::new_v4(),
            movie_id: Uuid::new_v4(),
            movie_title: "Solaris".into(),
            user_id: Uuid::new_v4(),
            comment: "duplicate entry".into(),
            created_at: Utc::now(),
        };

        let state = TestAppStateBuilder::default()
            .with_report_service(StubReportUseCase {
                list_all: Some(Ok(vec![view])),
                ..Default::default()
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::admin(Uuid::new_v4())))
                .service(get_reports_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/reports")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"][0]["movie_title"], "Solaris");
    }

    #[actix_web::test]
    async fn non_admin_is_forbidden() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_data(StubTokenProvider::user(Uuid::new_v4())))
                .service(get_reports_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/reports")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
