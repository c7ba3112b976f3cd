pub mod movie_countries;
pub mod movie_creators;
pub mod movie_genres;
pub mod movies;
