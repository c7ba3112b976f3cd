use actix_web::{delete, web, Responder};
use uuid::Uuid;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::auth::application::use_cases::delete_user::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/users/{id}")]
pub async fn delete_user_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    match data.delete_user_use_case.execute(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(DeleteUserError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(DeleteUserError::CannotDeleteAdmin) => {
            ApiResponse::forbidden("CANNOT_DELETE_ADMIN", "Admin accounts cannot be deleted")
        }
        Err(err) => {
            tracing::error!("User deletion failed: {err}");
            ApiResponse::internal_error()
        }
    }
}
