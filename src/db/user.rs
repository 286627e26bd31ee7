use crate::db::postgres_service::PostgresService;
use crate::types::{error::AppError, user::DBUserCreate};
use crate::utils::token::{hash_secret, new_secret, verify_secret};
use chrono::Utc;
use entity::user::{ActiveModel as UserActive, Column, Entity as User, Model as UserModel};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

impl PostgresService {
    pub async fn user_exists_by_email(&self, email: &str) -> Result<bool, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .count(&self.db)
            .await?
            > 0)
    }

    pub async fn get_user_by_id(&self, id: &Uuid) -> Result<UserModel, AppError> {
        Ok(User::find_by_id(*id)
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<UserModel, AppError> {
        Ok(User::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("User does not exist".into()))?)
    }

    pub async fn create_user(&self, payload: DBUserCreate) -> Result<Uuid, AppError> {
        if self.user_exists_by_email(&payload.email).await? {
            return Err(AppError::AlreadyExists);
        }
        let uid = Uuid::new_v4();
        let now = Utc::now();

        User::insert(UserActive {
            id: Set(uid),
            name: Set(payload.name),
            email: Set(payload.email),
            password_hash: Set(payload.password_hash),
            session_hash: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&self.db)
        .await?;

        Ok(uid)
    }

    /// Login: verify the password, rotate the session secret, hand the new
    /// secret back. Any previous session stops validating.
    pub async fn open_session(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(Uuid, String), AppError> {
        let user = match self.get_user_by_email(email).await {
            Ok(u) => u,
            // don't leak which emails exist
            Err(AppError::NotFound) => return Err(AppError::Unauthorized),
            Err(e) => return Err(e),
        };
        if !verify_secret(password, &user.password_hash).unwrap_or(false) {
            return Err(AppError::Unauthorized);
        }

        let secret = new_secret();
        let hashed = hash_secret(&secret)
            .map_err(|_| AppError::Internal("failed to hash session secret".to_string()))?;

        let user_id = user.id;
        let mut am: UserActive = user.into();
        am.session_hash = Set(Some(hashed));
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await?;

        Ok((user_id, secret))
    }

    /// The signOut() analogue: drop the stored hash so the bearer stops
    /// validating immediately.
    pub async fn close_session(&self, user_id: &Uuid) -> Result<(), AppError> {
        let user = self.get_user_by_id(user_id).await?;
        let mut am: UserActive = user.into();
        am.session_hash = Set(None);
        am.updated_at = Set(Utc::now());
        am.update(&self.db).await?;
        Ok(())
    }

    /// The getSession() analogue: Some(user) iff the secret matches the
    /// user's live session.
    pub async fn session_user(
        &self,
        user_id: &Uuid,
        secret: &str,
    ) -> Result<Option<UserModel>, AppError> {
        let user = match self.get_user_by_id(user_id).await {
            Ok(u) => u,
            Err(AppError::NotFound) => return Ok(None),
            Err(e) => return Err(e),
        };
        let Some(hash) = user.session_hash.as_deref() else {
            return Ok(None);
        };
        if verify_secret(secret, hash).unwrap_or(false) {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }
}
