pub mod auth;
pub mod country;
pub mod genre;
pub mod movie;
pub mod report;
pub mod watchlist;
