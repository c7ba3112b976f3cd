mod ban_user;
mod delete_user;
mod get_profile;
mod get_users;
mod login_user;
mod logout_user;
mod refresh_token;
mod register_user;

pub use ban_user::ban_user_handler;
pub use delete_user::delete_user_handler;
pub use get_profile::get_profile_handler;
pub use get_users::get_users_handler;
pub use login_user::login_user_handler;
pub use logout_user::logout_user_handler;
pub use refresh_token::refresh_token_handler;
pub use register_user::register_user_handler;
