use actix_web::{get, web};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::db::role::Gate;
use crate::types::error::AppError;
use crate::types::response::{ApiResponse, ApiResult};
use crate::types::user::SessionInfo;

#[get("")]
async fn session(
    _req: actix_web::HttpRequest,
    auth: BearerAuth,
    db: web::Data<Arc<PostgresService>>,
) -> ApiResult<SessionInfo> {
    let (user, is_admin) = match db.resolve_gate(auth.token()).await? {
        Gate::Unauthenticated => return Err(AppError::Unauthorized),
        Gate::NonAdmin(user) => (user, false),
        Gate::Admin(user) => (user, true),
    };

    Ok(ApiResponse::Ok(SessionInfo {
        user_id: user.id,
        name: user.name,
        email: user.email,
        is_admin,
    }))
}
