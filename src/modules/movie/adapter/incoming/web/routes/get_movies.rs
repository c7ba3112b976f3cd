use actix_web::{get, web, Responder};
use serde::Deserialize;

use super::map_movie_error;
use crate::shared::api::{ApiResponse, Page};
use crate::AppState;

#[derive(Debug, Deserialize)]
struct GetMoviesQuery {
    pub search: Option<String>,
}

/// The full catalogue, best rated first. Search matches title, director,
/// description, year and associated genre or country names.
#[get("/api/movies")]
pub async fn get_movies_handler(
    data: web::Data<AppState>,
    query: web::Query<GetMoviesQuery>,
) -> impl Responder {
    match data
        .movie_service
        .search(query.search.as_deref(), Page::all())
        .await
    {
        Ok(movies) => ApiResponse::success(movies),
        Err(err) => map_movie_error(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use chrono::Utc;
    use uuid::Uuid;

    use crate::modules::movie::application::domain::Movie;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubMovieUseCase;

    fn movie(title: &str, rating: f64) -> Movie {
        Movie {
            id: Uuid::new_v4(),
            title: title.into(),
            year: Some(1979),
            duration: None,
            director: None,
            description: None,
            cover: None,
            rating,
            created_at: Utc::now(),
        }
    }

    #[actix_web::test]
    async fn lists_the_catalogue() {
        let state = TestAppStateBuilder::default()
            .with_movie_service(StubMovieUseCase {
                search: Some(Ok(vec![movie("Alien", 9.1), movie("Heat", 8.4)])),
                ..Default::default()
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_movies_handler)).await;

        let req = test::TestRequest::get().uri("/api/movies").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"][0]["title"], "Alien");
        assert_eq!(json["data"][1]["title"], "Heat");
    }

    #[actix_web::test]
    async fn search_term_is_forwarded() {
        let state = TestAppStateBuilder::default()
            .with_movie_service(StubMovieUseCase {
                search: Some(Ok(vec![movie("Alien", 9.1)])),
                ..Default::default()
            })
            .build();

        let app =
            test::init_service(App::new().app_data(state).service(get_movies_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/movies?search=alien")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body = test::read_body(resp).await;
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"].as_array().unwrap().len(), 1);
    }
}
