use crate::db::postgres_service::PostgresService;
use crate::types::error::AppError;
use crate::utils::token::extract_token_parts;
use entity::user::Model as UserModel;
use entity::user_role::{ActiveModel as RoleActive, Column, Entity as UserRole};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

pub const ADMIN_ROLE: &str = "admin";

/// Outcome of the admin authorization gate. Only `Admin` proceeds; the
/// other two states never touch item data.
#[derive(Debug)]
pub enum Gate {
    Unauthenticated,
    NonAdmin(UserModel),
    Admin(UserModel),
}

impl PostgresService {
    pub async fn user_has_role(&self, user_id: &Uuid, role: &str) -> Result<bool, AppError> {
        Ok(UserRole::find()
            .filter(Column::UserId.eq(*user_id))
            .filter(Column::Role.eq(role))
            .one(&self.db)
            .await?
            .is_some())
    }

    pub async fn assign_role(&self, user_id: Uuid, role: &str) -> Result<(), AppError> {
        let res = UserRole::insert(RoleActive {
            user_id: Set(user_id),
            role: Set(role.to_string()),
        })
        .on_conflict(
            OnConflict::columns([Column::UserId, Column::Role])
                .do_nothing()
                .to_owned(),
        )
        .exec(&self.db)
        .await;

        match res {
            Ok(_) => Ok(()),
            // already assigned
            Err(DbErr::RecordNotInserted) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Evaluate the gate for a raw bearer token: session first, role row
    /// second. Roles are read fresh on every call, never cached.
    pub async fn resolve_gate(&self, bearer: &str) -> Result<Gate, AppError> {
        let Some((user_id, secret)) = extract_token_parts(bearer) else {
            return Ok(Gate::Unauthenticated);
        };
        let Some(user) = self.session_user(&user_id, &secret).await? else {
            return Ok(Gate::Unauthenticated);
        };
        if self.user_has_role(&user.id, ADMIN_ROLE).await? {
            Ok(Gate::Admin(user))
        } else {
            Ok(Gate::NonAdmin(user))
        }
    }
}
