pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use deadpool_redis::{Config, Runtime};
use sea_orm::{ConnectOptions, Database};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::modules::auth::adapter::outgoing::security::Argon2Hasher;
use crate::modules::auth::adapter::outgoing::{RedisTokenRepository, UserRepositoryPostgres};
use crate::modules::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::modules::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::modules::auth::application::services::jwt::{JwtConfig, JwtService};
use crate::modules::auth::application::use_cases::{
    ban_user::{BanUserUseCase, IBanUserUseCase},
    delete_user::{DeleteUserUseCase, IDeleteUserUseCase},
    fetch_profile::{FetchProfileUseCase, IFetchProfileUseCase},
    get_users::{GetUsersUseCase, IGetUsersUseCase},
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUserUseCase, LogoutUserUseCase},
    refresh_token::{IRefreshTokenUseCase, RefreshTokenUseCase},
    register_user::{IRegisterUserUseCase, RegisterUserUseCase},
};
use crate::modules::country::adapter::outgoing::country_repository_postgres::CountryRepositoryPostgres;
use crate::modules::country::application::ports::incoming::CountryUseCase;
use crate::modules::country::application::service::CountryService;
use crate::modules::genre::adapter::outgoing::genre_repository_postgres::GenreRepositoryPostgres;
use crate::modules::genre::application::ports::incoming::GenreUseCase;
use crate::modules::genre::application::service::GenreService;
use crate::modules::movie::adapter::outgoing::movie_repository_postgres::MovieRepositoryPostgres;
use crate::modules::movie::application::ports::incoming::{MovieRatingUpdater, MovieUseCase};
use crate::modules::movie::application::service::MovieService;
use crate::modules::report::adapter::outgoing::report_repository_postgres::ReportRepositoryPostgres;
use crate::modules::report::application::ports::incoming::ReportUseCase;
use crate::modules::report::application::service::ReportService;
use crate::modules::watchlist::adapter::outgoing::watchlist_repository_postgres::WatchlistRepositoryPostgres;
use crate::modules::watchlist::application::ports::incoming::WatchlistUseCase;
use crate::modules::watchlist::application::service::WatchlistService;
use crate::shared::api::custom_json_config;

#[derive(Clone)]
pub struct AppState {
    pub genre_service: Arc<dyn GenreUseCase + Send + Sync>,
    pub country_service: Arc<dyn CountryUseCase + Send + Sync>,
    pub movie_service: Arc<dyn MovieUseCase + Send + Sync>,
    pub watchlist_service: Arc<dyn WatchlistUseCase + Send + Sync>,
    pub report_service: Arc<dyn ReportUseCase + Send + Sync>,
    pub register_use_case: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_use_case: Arc<dyn ILogoutUserUseCase + Send + Sync>,
    pub refresh_token_use_case: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub fetch_profile_use_case: Arc<dyn IFetchProfileUseCase + Send + Sync>,
    pub get_users_use_case: Arc<dyn IGetUsersUseCase + Send + Sync>,
    pub ban_user_use_case: Arc<dyn IBanUserUseCase + Send + Sync>,
    pub delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
}

#[actix_web::main]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // .env.{environment} wins over plain .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let redis_url = env::var("REDIS_URL").expect("REDIS_URL is not set in .env file");

    let server_url = format!("{host}:{port}");

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");
    let db_arc = Arc::new(conn);

    let redis_pool = Config::from_url(&redis_url)
        .create_pool(Some(Runtime::Tokio1))
        .expect("Failed to create Redis pool");
    let redis_arc = Arc::new(redis_pool);

    // Catalogue services
    let genre_service = GenreService::new(GenreRepositoryPostgres::new(Arc::clone(&db_arc)));
    let country_service = CountryService::new(CountryRepositoryPostgres::new(Arc::clone(&db_arc)));

    let movie_service = Arc::new(MovieService::new(MovieRepositoryPostgres::new(Arc::clone(
        &db_arc,
    ))));
    let rating_updater: Arc<dyn MovieRatingUpdater> = movie_service.clone();
    let watchlist_service = WatchlistService::new(
        WatchlistRepositoryPostgres::new(Arc::clone(&db_arc)),
        rating_updater,
    );
    let report_service = ReportService::new(ReportRepositoryPostgres::new(Arc::clone(&db_arc)));

    // Identity
    let jwt_service = JwtService::new(JwtConfig::from_env());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let password_hasher: Arc<dyn PasswordHasher + Send + Sync> =
        Arc::new(Argon2Hasher::from_env());
    let user_repo = UserRepositoryPostgres::new(Arc::clone(&db_arc));
    let token_repo = RedisTokenRepository::new(Arc::clone(&redis_arc));

    let register_use_case = RegisterUserUseCase::new(
        user_repo.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider_arc),
    );
    let login_use_case = LoginUserUseCase::new(
        user_repo.clone(),
        Arc::clone(&password_hasher),
        Arc::clone(&token_provider_arc),
    );
    let logout_use_case =
        LogoutUserUseCase::new(token_repo.clone(), Arc::clone(&token_provider_arc));
    let refresh_token_use_case =
        RefreshTokenUseCase::new(token_repo, Arc::clone(&token_provider_arc));
    let fetch_profile_use_case = FetchProfileUseCase::new(user_repo.clone());
    let get_users_use_case = GetUsersUseCase::new(user_repo.clone());
    let ban_user_use_case = BanUserUseCase::new(user_repo.clone());
    let delete_user_use_case = DeleteUserUseCase::new(user_repo);

    let state = AppState {
        genre_service: Arc::new(genre_service),
        country_service: Arc::new(country_service),
        movie_service,
        watchlist_service: Arc::new(watchlist_service),
        report_service: Arc::new(report_service),
        register_use_case: Arc::new(register_use_case),
        login_use_case: Arc::new(login_use_case),
        logout_use_case: Arc::new(logout_use_case),
        refresh_token_use_case: Arc::new(refresh_token_use_case),
        fetch_profile_use_case: Arc::new(fetch_profile_use_case),
        get_users_use_case: Arc::new(get_users_use_case),
        ban_user_use_case: Arc::new(ban_user_use_case),
        delete_user_use_case: Arc::new(delete_user_use_case),
    };

    info!("Server running on {server_url}");

    let db_for_server = Arc::clone(&db_arc);
    HttpServer::new(move || {
        App::new()
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(web::Data::new(Arc::clone(&redis_arc)))
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Genres
    cfg.service(crate::modules::genre::adapter::incoming::web::routes::get_genres_handler);
    cfg.service(crate::modules::genre::adapter::incoming::web::routes::get_genre_dictionary_handler);
    cfg.service(crate::modules::genre::adapter::incoming::web::routes::create_genre_handler);
    cfg.service(crate::modules::genre::adapter::incoming::web::routes::update_genre_handler);
    cfg.service(crate::modules::genre::adapter::incoming::web::routes::delete_genre_handler);
    // Countries
    cfg.service(crate::modules::country::adapter::incoming::web::routes::get_countries_handler);
    cfg.service(
        crate::modules::country::adapter::incoming::web::routes::get_country_dictionary_handler,
    );
    cfg.service(crate::modules::country::adapter::incoming::web::routes::create_country_handler);
    cfg.service(crate::modules::country::adapter::incoming::web::routes::update_country_handler);
    cfg.service(crate::modules::country::adapter::incoming::web::routes::delete_country_handler);
    // Movies
    cfg.service(crate::modules::movie::adapter::incoming::web::routes::get_movies_handler);
    cfg.service(crate::modules::movie::adapter::incoming::web::routes::get_movie_details_handler);
    cfg.service(crate::modules::movie::adapter::incoming::web::routes::create_movie_handler);
    cfg.service(crate::modules::movie::adapter::incoming::web::routes::update_movie_handler);
    cfg.service(crate::modules::movie::adapter::incoming::web::routes::delete_movie_handler);
    // Personal lists
    cfg.service(crate::modules::watchlist::adapter::incoming::web::routes::add_to_seen_handler);
    cfg.service(
        crate::modules::watchlist::adapter::incoming::web::routes::add_to_watchlist_handler,
    );
    cfg.service(
        crate::modules::watchlist::adapter::incoming::web::routes::remove_from_lists_handler,
    );
    cfg.service(crate::modules::watchlist::adapter::incoming::web::routes::get_seen_handler);
    cfg.service(crate::modules::watchlist::adapter::incoming::web::routes::get_watchlist_handler);
    cfg.service(crate::modules::watchlist::adapter::incoming::web::routes::get_seen_count_handler);
    cfg.service(crate::modules::watchlist::adapter::incoming::web::routes::search_lists_handler);
    cfg.service(crate::modules::watchlist::adapter::incoming::web::routes::get_activity_handler);
    cfg.service(crate::modules::watchlist::adapter::incoming::web::routes::rate_movie_handler);
    // Reports
    cfg.service(crate::modules::report::adapter::incoming::web::routes::create_report_handler);
    cfg.service(crate::modules::report::adapter::incoming::web::routes::get_reports_handler);
    cfg.service(crate::modules::report::adapter::incoming::web::routes::filter_reports_handler);
    cfg.service(crate::modules::report::adapter::incoming::web::routes::delete_report_handler);
    // Auth and users
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::register_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::logout_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::refresh_token_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::get_profile_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::get_users_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::ban_user_handler);
    cfg.service(crate::modules::auth::adapter::incoming::web::routes::delete_user_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
