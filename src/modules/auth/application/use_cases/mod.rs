pub mod ban_user;
pub mod delete_user;
pub mod fetch_profile;
pub mod get_users;
pub mod login_user;
pub mod logout_user;
pub mod refresh_token;
pub mod register_user;
