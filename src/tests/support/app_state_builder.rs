use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::application::use_cases::ban_user::IBanUserUseCase;
use crate::modules::auth::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::modules::auth::application::use_cases::fetch_profile::IFetchProfileUseCase;
use crate::modules::auth::application::use_cases::get_users::IGetUsersUseCase;
use crate::modules::auth::application::use_cases::login_user::ILoginUserUseCase;
use crate::modules::auth::application::use_cases::logout_user::ILogoutUserUseCase;
use crate::modules::auth::application::use_cases::refresh_token::IRefreshTokenUseCase;
use crate::modules::auth::application::use_cases::register_user::IRegisterUserUseCase;
use crate::modules::country::application::ports::incoming::CountryUseCase;
use crate::modules::genre::application::ports::incoming::GenreUseCase;
use crate::modules::movie::application::ports::incoming::MovieUseCase;
use crate::modules::report::application::ports::incoming::ReportUseCase;
use crate::modules::watchlist::application::ports::incoming::WatchlistUseCase;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` where every collaborator defaults to an empty
/// stub. Tests override only the services the route under test touches;
/// anything else panics on use.
#[derive(Default)]
pub struct TestAppStateBuilder {
    genre_service: Option<Arc<dyn GenreUseCase + Send + Sync>>,
    country_service: Option<Arc<dyn CountryUseCase + Send + Sync>>,
    movie_service: Option<Arc<dyn MovieUseCase + Send + Sync>>,
    watchlist_service: Option<Arc<dyn WatchlistUseCase + Send + Sync>>,
    report_service: Option<Arc<dyn ReportUseCase + Send + Sync>>,
    register_use_case: Option<Arc<dyn IRegisterUserUseCase + Send + Sync>>,
    login_use_case: Option<Arc<dyn ILoginUserUseCase + Send + Sync>>,
    logout_use_case: Option<Arc<dyn ILogoutUserUseCase + Send + Sync>>,
    refresh_token_use_case: Option<Arc<dyn IRefreshTokenUseCase + Send + Sync>>,
    fetch_profile_use_case: Option<Arc<dyn IFetchProfileUseCase + Send + Sync>>,
    get_users_use_case: Option<Arc<dyn IGetUsersUseCase + Send + Sync>>,
    ban_user_use_case: Option<Arc<dyn IBanUserUseCase + Send + Sync>>,
    delete_user_use_case: Option<Arc<dyn IDeleteUserUseCase + Send + Sync>>,
}

impl TestAppStateBuilder {
    pub fn with_genre_service(mut self, uc: impl GenreUseCase + Send + Sync + 'static) -> Self {
        self.genre_service = Some(Arc::new(uc));
        self
    }

    pub fn with_country_service(mut self, uc: impl CountryUseCase + Send + Sync + 'static) -> Self {
        self.country_service = Some(Arc::new(uc));
        self
    }

    pub fn with_movie_service(mut self, uc: impl MovieUseCase + Send + Sync + 'static) -> Self {
        self.movie_service = Some(Arc::new(uc));
        self
    }

    pub fn with_watchlist_service(
        mut self,
        uc: impl WatchlistUseCase + Send + Sync + 'static,
    ) -> Self {
        self.watchlist_service = Some(Arc::new(uc));
        self
    }

    pub fn with_report_service(mut self, uc: impl ReportUseCase + Send + Sync + 'static) -> Self {
        self.report_service = Some(Arc::new(uc));
        self
    }

    pub fn with_register_use_case(
        mut self,
        uc: impl IRegisterUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.register_use_case = Some(Arc::new(uc));
        self
    }

    pub fn with_login_use_case(
        mut self,
        uc: impl ILoginUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.login_use_case = Some(Arc::new(uc));
        self
    }

    pub fn with_logout_use_case(
        mut self,
        uc: impl ILogoutUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.logout_use_case = Some(Arc::new(uc));
        self
    }

    pub fn with_refresh_token_use_case(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token_use_case = Some(Arc::new(uc));
        self
    }

    pub fn with_fetch_profile_use_case(
        mut self,
        uc: impl IFetchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.fetch_profile_use_case = Some(Arc::new(uc));
        self
    }

    pub fn with_get_users_use_case(
        mut self,
        uc: impl IGetUsersUseCase + Send + Sync + 'static,
    ) -> Self {
        self.get_users_use_case = Some(Arc::new(uc));
        self
    }

    pub fn with_ban_user_use_case(
        mut self,
        uc: impl IBanUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.ban_user_use_case = Some(Arc::new(uc));
        self
    }

    pub fn with_delete_user_use_case(
        mut self,
        uc: impl IDeleteUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_user_use_case = Some(Arc::new(uc));
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            genre_service: self
                .genre_service
                .unwrap_or_else(|| Arc::new(StubGenreUseCase::default())),
            country_service: self
                .country_service
                .unwrap_or_else(|| Arc::new(StubCountryUseCase::default())),
            movie_service: self
                .movie_service
                .unwrap_or_else(|| Arc::new(StubMovieUseCase::default())),
            watchlist_service: self
                .watchlist_service
                .unwrap_or_else(|| Arc::new(StubWatchlistUseCase::default())),
            report_service: self
                .report_service
                .unwrap_or_else(|| Arc::new(StubReportUseCase::default())),
            register_use_case: self
                .register_use_case
                .unwrap_or_else(|| Arc::new(StubRegisterUseCase::default())),
            login_use_case: self
                .login_use_case
                .unwrap_or_else(|| Arc::new(StubLoginUseCase::default())),
            logout_use_case: self
                .logout_use_case
                .unwrap_or_else(|| Arc::new(StubLogoutUseCase::default())),
            refresh_token_use_case: self
                .refresh_token_use_case
                .unwrap_or_else(|| Arc::new(StubRefreshTokenUseCase::default())),
            fetch_profile_use_case: self
                .fetch_profile_use_case
                .unwrap_or_else(|| Arc::new(StubFetchProfileUseCase::default())),
            get_users_use_case: self
                .get_users_use_case
                .unwrap_or_else(|| Arc::new(StubGetUsersUseCase::default())),
            ban_user_use_case: self
                .ban_user_use_case
                .unwrap_or_else(|| Arc::new(StubBanUserUseCase::default())),
            delete_user_use_case: self
                .delete_user_use_case
                .unwrap_or_else(|| Arc::new(StubDeleteUserUseCase::default())),
        })
    }
}
