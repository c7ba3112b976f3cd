mod json_config;
mod pagination;
mod response;

pub use json_config::custom_json_config;
pub use pagination::{Page, PageQuery};
pub use response::{ApiError, ApiResponse};
