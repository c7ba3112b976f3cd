//! Hand-rolled stubs for route tests. Every operation field is an
//! `Option<Result<..>>`; calling an operation that was not stubbed
//! panics, which keeps each test honest about what it exercises.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::auth::application::domain::{Role, UserSummary};
use crate::modules::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};
use crate::modules::auth::application::use_cases::ban_user::{BanUserError, IBanUserUseCase};
use crate::modules::auth::application::use_cases::delete_user::{
    DeleteUserError, IDeleteUserUseCase,
};
use crate::modules::auth::application::use_cases::fetch_profile::{
    FetchProfileError, IFetchProfileUseCase,
};
use crate::modules::auth::application::use_cases::get_users::{GetUsersError, IGetUsersUseCase};
use crate::modules::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginUserResponse,
};
use crate::modules::auth::application::use_cases::logout_user::{ILogoutUserUseCase, LogoutError};
use crate::modules::auth::application::use_cases::refresh_token::{
    IRefreshTokenUseCase, RefreshError, RefreshTokenRequest, RefreshTokenResponse,
};
use crate::modules::auth::application::use_cases::register_user::{
    IRegisterUserUseCase, RegisterError, RegisterRequest, RegisterUserResponse,
};
use crate::modules::country::application::domain::Country;
use crate::modules::country::application::ports::incoming::{CountryError, CountryUseCase};
use crate::modules::genre::application::domain::Genre;
use crate::modules::genre::application::ports::incoming::{GenreError, GenreUseCase};
use crate::modules::movie::application::domain::{Movie, MovieWithRelations};
use crate::modules::movie::application::ports::incoming::{
    Actor, MovieCommand, MovieError, MovieUseCase,
};
use crate::modules::report::application::domain::{Report, ReportView};
use crate::modules::report::application::ports::incoming::{ReportError, ReportUseCase};
use crate::modules::watchlist::application::domain::{ListEntry, ListedMovie};
use crate::modules::watchlist::application::ports::incoming::{WatchlistError, WatchlistUseCase};
use crate::shared::api::Page;

fn stubbed<T: Clone>(slot: &Option<T>, op: &str) -> T {
    slot.clone()
        .unwrap_or_else(|| panic!("operation `{op}` was not stubbed"))
}

/// Deterministic token provider for extractor-gated routes.
#[derive(Debug, Clone)]
pub struct StubTokenProvider {
    user_id: Uuid,
    role: &'static str,
    token_type: &'static str,
}

impl StubTokenProvider {
    pub fn user(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: "user",
            token_type: "access",
        }
    }

    pub fn admin(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: "admin",
            token_type: "access",
        }
    }

    pub fn refresh(user_id: Uuid) -> Self {
        Self {
            user_id,
            role: "user",
            token_type: "refresh",
        }
    }
}

impl TokenProvider for StubTokenProvider {
    fn generate_access_token(&self, _user_id: Uuid, _role: Role) -> Result<String, TokenError> {
        Ok("stub-access-token".to_string())
    }

    fn generate_refresh_token(&self, _user_id: Uuid, _role: Role) -> Result<String, TokenError> {
        Ok("stub-refresh-token".to_string())
    }

    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Ok(TokenClaims {
            sub: self.user_id,
            exp: 9_999_999_999,
            iat: 0,
            token_type: self.token_type.to_string(),
            role: self.role.to_string(),
        })
    }

    fn refresh_access_token(&self, _refresh_token: &str) -> Result<String, TokenError> {
        Ok("stub-refreshed-access-token".to_string())
    }
}

#[derive(Default)]
pub struct StubGenreUseCase {
    pub list: Option<Result<Vec<Genre>, GenreError>>,
    pub get: Option<Result<Genre, GenreError>>,
    pub create: Option<Result<Genre, GenreError>>,
    pub update: Option<Result<Genre, GenreError>>,
    pub delete: Option<Result<(), GenreError>>,
    pub dictionary: Option<Result<HashMap<Uuid, String>, GenreError>>,
    pub search: Option<Result<Vec<Genre>, GenreError>>,
}

#[async_trait]
impl GenreUseCase for StubGenreUseCase {
    async fn list(&self, _page: Page) -> Result<Vec<Genre>, GenreError> {
        stubbed(&self.list, "list")
    }

    async fn get(&self, _id: Uuid) -> Result<Genre, GenreError> {
        stubbed(&self.get, "get")
    }

    async fn create(&self, _name: String) -> Result<Genre, GenreError> {
        stubbed(&self.create, "create")
    }

    async fn update(&self, _id: Uuid, _name: String) -> Result<Genre, GenreError> {
        stubbed(&self.update, "update")
    }

    async fn delete(&self, _id: Uuid) -> Result<(), GenreError> {
        stubbed(&self.delete, "delete")
    }

    async fn dictionary(&self) -> Result<HashMap<Uuid, String>, GenreError> {
        stubbed(&self.dictionary, "dictionary")
    }

    async fn search(&self, _term: Option<&str>, _page: Page) -> Result<Vec<Genre>, GenreError> {
        stubbed(&self.search, "search")
    }
}

#[derive(Default)]
pub struct StubCountryUseCase {
    pub list: Option<Result<Vec<Country>, CountryError>>,
    pub get: Option<Result<Country, CountryError>>,
    pub create: Option<Result<Country, CountryError>>,
    pub update: Option<Result<Country, CountryError>>,
    pub delete: Option<Result<(), CountryError>>,
    pub dictionary: Option<Result<HashMap<Uuid, String>, CountryError>>,
    pub search: Option<Result<Vec<Country>, CountryError>>,
}

#[async_trait]
impl CountryUseCase for StubCountryUseCase {
    async fn list(&self, _page: Page) -> Result<Vec<Country>, CountryError> {
        stubbed(&self.list, "list")
    }

    async fn get(&self, _id: Uuid) -> Result<Country, CountryError> {
        stubbed(&self.get, "get")
    }

    async fn create(&self, _name: String) -> Result<Country, CountryError> {
        stubbed(&self.create, "create")
    }

    async fn update(&self, _id: Uuid, _name: String) -> Result<Country, CountryError> {
        stubbed(&self.update, "update")
    }

    async fn delete(&self, _id: Uuid) -> Result<(), CountryError> {
        stubbed(&self.delete, "delete")
    }

    async fn dictionary(&self) -> Result<HashMap<Uuid, String>, CountryError> {
        stubbed(&self.dictionary, "dictionary")
    }

    async fn search(&self, _term: Option<&str>, _page: Page) -> Result<Vec<Country>, CountryError> {
        stubbed(&self.search, "search")
    }
}

#[derive(Default)]
pub struct StubMovieUseCase {
    pub create: Option<Result<MovieWithRelations, MovieError>>,
    pub get: Option<Result<Movie, MovieError>>,
    pub get_details: Option<Result<MovieWithRelations, MovieError>>,
    pub update: Option<Result<MovieWithRelations, MovieError>>,
    pub delete: Option<Result<(), MovieError>>,
    pub search: Option<Result<Vec<Movie>, MovieError>>,
    pub is_creator: Option<Result<bool, MovieError>>,
    pub creator_of: Option<Result<Option<Uuid>, MovieError>>,
}

#[async_trait]
impl MovieUseCase for StubMovieUseCase {
    async fn create(
        &self,
        _command: MovieCommand,
        _creator_id: Uuid,
    ) -> Result<MovieWithRelations, MovieError> {
        stubbed(&self.create, "create")
    }

    async fn get(&self, _id: Uuid) -> Result<Movie, MovieError> {
        stubbed(&self.get, "get")
    }

    async fn get_details(&self, _id: Uuid) -> Result<MovieWithRelations, MovieError> {
        stubbed(&self.get_details, "get_details")
    }

    async fn update(
        &self,
        _id: Uuid,
        _command: MovieCommand,
        _actor: Actor,
    ) -> Result<MovieWithRelations, MovieError> {
        stubbed(&self.update, "update")
    }

    async fn delete(&self, _id: Uuid, _actor: Actor) -> Result<(), MovieError> {
        stubbed(&self.delete, "delete")
    }

    async fn search(&self, _term: Option<&str>, _page: Page) -> Result<Vec<Movie>, MovieError> {
        stubbed(&self.search, "search")
    }

    async fn is_creator(&self, _movie_id: Uuid, _user_id: Uuid) -> Result<bool, MovieError> {
        stubbed(&self.is_creator, "is_creator")
    }

    async fn creator_of(&self, _movie_id: Uuid) -> Result<Option<Uuid>, MovieError> {
        stubbed(&self.creator_of, "creator_of")
    }
}

#[derive(Default)]
pub struct StubWatchlistUseCase {
    pub add_or_update: Option<Result<ListEntry, WatchlistError>>,
    pub rate: Option<Result<ListEntry, WatchlistError>>,
    pub remove: Option<Result<(), WatchlistError>>,
    pub list: Option<Result<Vec<ListedMovie>, WatchlistError>>,
    pub search_in_list: Option<Result<Vec<ListedMovie>, WatchlistError>>,
    pub count_watched: Option<Result<u64, WatchlistError>>,
    pub activity: Option<Result<Vec<ListedMovie>, WatchlistError>>,
    pub entry: Option<Result<Option<ListEntry>, WatchlistError>>,
}

#[async_trait]
impl WatchlistUseCase for StubWatchlistUseCase {
    async fn add_or_update(
        &self,
        _user_id: Uuid,
        _movie_id: Uuid,
        _is_watched: bool,
        _rating: Option<i16>,
        _watched_at: Option<DateTime<Utc>>,
    ) -> Result<ListEntry, WatchlistError> {
        stubbed(&self.add_or_update, "add_or_update")
    }

    async fn rate(
        &self,
        _user_id: Uuid,
        _movie_id: Uuid,
        _rating: i16,
    ) -> Result<ListEntry, WatchlistError> {
        stubbed(&self.rate, "rate")
    }

    async fn remove(&self, _user_id: Uuid, _movie_id: Uuid) -> Result<(), WatchlistError> {
        stubbed(&self.remove, "remove")
    }

    async fn list(
        &self,
        _user_id: Uuid,
        _is_watched: bool,
        _page: Page,
    ) -> Result<Vec<ListedMovie>, WatchlistError> {
        stubbed(&self.list, "list")
    }

    async fn search_in_list(
        &self,
        _user_id: Uuid,
        _term: Option<&str>,
        _is_watched: Option<bool>,
    ) -> Result<Vec<ListedMovie>, WatchlistError> {
        stubbed(&self.search_in_list, "search_in_list")
    }

    async fn count_watched(&self, _user_id: Uuid) -> Result<u64, WatchlistError> {
        stubbed(&self.count_watched, "count_watched")
    }

    async fn activity(&self, _user_id: Uuid) -> Result<Vec<ListedMovie>, WatchlistError> {
        stubbed(&self.activity, "activity")
    }

    async fn entry(
        &self,
        _user_id: Uuid,
        _movie_id: Uuid,
    ) -> Result<Option<ListEntry>, WatchlistError> {
        stubbed(&self.entry, "entry")
    }
}

#[derive(Default)]
pub struct StubReportUseCase {
    pub create: Option<Result<Report, ReportError>>,
    pub delete: Option<Result<(), ReportError>>,
    pub list_all: Option<Result<Vec<ReportView>, ReportError>>,
    pub for_movie: Option<Result<Vec<Report>, ReportError>>,
    pub filter: Option<Result<Vec<ReportView>, ReportError>>,
}

#[async_trait]
impl ReportUseCase for StubReportUseCase {
    async fn create(
        &self,
        _movie_id: Uuid,
        _user_id: Uuid,
        _comment: &str,
    ) -> Result<Report, ReportError> {
        stubbed(&self.create, "create")
    }

    async fn delete(&self, _id: Uuid) -> Result<(), ReportError> {
        stubbed(&self.delete, "delete")
    }

    async fn list_all(&self) -> Result<Vec<ReportView>, ReportError> {
        stubbed(&self.list_all, "list_all")
    }

    async fn for_movie(&self, _movie_id: Uuid) -> Result<Vec<Report>, ReportError> {
        stubbed(&self.for_movie, "for_movie")
    }

    async fn filter(
        &self,
        _start: Option<chrono::NaiveDate>,
        _end: Option<chrono::NaiveDate>,
    ) -> Result<Vec<ReportView>, ReportError> {
        stubbed(&self.filter, "filter")
    }
}

#[derive(Default)]
pub struct StubRegisterUseCase {
    pub result: Option<Result<RegisterUserResponse, RegisterError>>,
}

#[async_trait]
impl IRegisterUserUseCase for StubRegisterUseCase {
    async fn execute(&self, _request: RegisterRequest) -> Result<RegisterUserResponse, RegisterError> {
        stubbed(&self.result, "register")
    }
}

#[derive(Default)]
pub struct StubLoginUseCase {
    pub result: Option<Result<LoginUserResponse, LoginError>>,
}

#[async_trait]
impl ILoginUserUseCase for StubLoginUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginUserResponse, LoginError> {
        stubbed(&self.result, "login")
    }
}

#[derive(Default)]
pub struct StubLogoutUseCase {
    pub result: Option<Result<(), LogoutError>>,
}

#[async_trait]
impl ILogoutUserUseCase for StubLogoutUseCase {
    async fn execute(&self, _refresh_token: &str) -> Result<(), LogoutError> {
        stubbed(&self.result, "logout")
    }
}

#[derive(Default)]
pub struct StubRefreshTokenUseCase {
    pub result: Option<Result<RefreshTokenResponse, RefreshError>>,
}

#[async_trait]
impl IRefreshTokenUseCase for StubRefreshTokenUseCase {
    async fn execute(
        &self,
        _request: RefreshTokenRequest,
    ) -> Result<RefreshTokenResponse, RefreshError> {
        stubbed(&self.result, "refresh")
    }
}

#[derive(Default)]
pub struct StubFetchProfileUseCase {
    pub result: Option<Result<UserSummary, FetchProfileError>>,
}

#[async_trait]
impl IFetchProfileUseCase for StubFetchProfileUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<UserSummary, FetchProfileError> {
        stubbed(&self.result, "fetch_profile")
    }
}

#[derive(Default)]
pub struct StubGetUsersUseCase {
    pub result: Option<Result<Vec<UserSummary>, GetUsersError>>,
}

#[async_trait]
impl IGetUsersUseCase for StubGetUsersUseCase {
    async fn execute(
        &self,
        _search: Option<&str>,
        _banned: Option<bool>,
        _page: Page,
    ) -> Result<Vec<UserSummary>, GetUsersError> {
        stubbed(&self.result, "get_users")
    }
}

#[derive(Default)]
pub struct StubBanUserUseCase {
    pub result: Option<Result<UserSummary, BanUserError>>,
}

#[async_trait]
impl IBanUserUseCase for StubBanUserUseCase {
    async fn execute(&self, _user_id: Uuid, _hours: Option<i64>) -> Result<UserSummary, BanUserError> {
        stubbed(&self.result, "ban_user")
    }
}

#[derive(Default)]
pub struct StubDeleteUserUseCase {
    pub result: Option<Result<(), DeleteUserError>>,
}

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: Uuid) -> Result<(), DeleteUserError> {
        stubbed(&self.result, "delete_user")
    }
}
