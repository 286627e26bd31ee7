use actix_web::{
    dev::ServiceRequest,
    error::{ErrorForbidden, ErrorInternalServerError, ErrorUnauthorized},
    web,
};
use actix_web_httpauth::extractors::bearer::BearerAuth;
use std::sync::Arc;

use crate::db::postgres_service::PostgresService;
use crate::db::role::Gate;

/// Bearer validator for the /admin scope. Runs the full authorization gate
/// before any handler, so a non-admin request never reaches item data.
pub async fn validate_admin(
    req: ServiceRequest,
    credentials: BearerAuth,
) -> Result<ServiceRequest, (actix_web::Error, ServiceRequest)> {
    match gate_for(&req, credentials.token()).await {
        Ok(Gate::Admin(_)) => Ok(req),
        Ok(Gate::NonAdmin(_)) => Err((ErrorForbidden("Admin access required"), req)),
        Ok(Gate::Unauthenticated) => Err((ErrorUnauthorized("Invalid session"), req)),
        Err(e) => Err((e, req)),
    }
}

async fn gate_for(req: &ServiceRequest, token: &str) -> Result<Gate, actix_web::Error> {
    let db = req
        .app_data::<web::Data<Arc<PostgresService>>>()
        .ok_or_else(|| ErrorInternalServerError("PostgresService not configured"))?;
    db.resolve_gate(token).await.map_err(actix_web::Error::from)
}
