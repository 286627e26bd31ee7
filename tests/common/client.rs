use actix_web::{web, App};
use std::sync::Arc;
use uuid::Uuid;

use campusbin::db::postgres_service::PostgresService;
use campusbin::db::role::ADMIN_ROLE;
use campusbin::storage::ImageStore;
use campusbin::types::user::DBUserCreate;
use campusbin::utils::token::{construct_token, hash_secret};

pub const TEST_PASSWORD: &str = "testpass";
pub const BOUNDARY: &str = "----campusbin-test-boundary";

pub struct TestClient {
    pub db: Arc<PostgresService>,
    pub store: ImageStore,
}

impl TestClient {
    pub fn new(db: Arc<PostgresService>) -> Self {
        let media_root = std::env::temp_dir().join(format!("campusbin-test-{}", Uuid::new_v4()));
        let store = ImageStore::new(media_root, "http://localhost:8080")
            .expect("Failed to create test media dir");
        TestClient { db, store }
    }

    #[allow(dead_code)]
    pub fn with_store(db: Arc<PostgresService>, store: ImageStore) -> Self {
        TestClient { db, store }
    }

    #[allow(dead_code)]
    pub fn create_app(
        &self,
    ) -> actix_web::App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(Arc::clone(&self.db)))
            .app_data(web::Data::new(self.store.clone()))
            .configure(campusbin::routes::configure_routes)
    }

    /// Creates a user with a fresh email, opens a session, returns
    /// (user_id, bearer token).
    #[allow(dead_code)]
    pub async fn create_test_user(&self) -> (Uuid, String) {
        let email = format!("user-{}@test.com", Uuid::new_v4());
        let user_id = self
            .db
            .create_user(DBUserCreate {
                name: "Test User".to_string(),
                email: email.clone(),
                password_hash: hash_secret(TEST_PASSWORD).expect("Failed to hash password"),
            })
            .await
            .expect("Failed to create user");

        let (_, secret) = self
            .db
            .open_session(&email, TEST_PASSWORD)
            .await
            .expect("Failed to open session");

        (user_id, construct_token(&user_id.to_string(), &secret))
    }

    #[allow(dead_code)]
    pub async fn create_test_admin(&self) -> (Uuid, String) {
        let (user_id, token) = self.create_test_user().await;
        self.db
            .assign_role(user_id, ADMIN_ROLE)
            .await
            .expect("Failed to assign admin role");
        (user_id, token)
    }
}

/// Hand-built multipart body for the submission endpoint. `file` is
/// (filename, bytes) for an "image" part.
#[allow(dead_code)]
pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, bytes)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

#[allow(dead_code)]
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

#[allow(dead_code)]
pub fn submission_fields<'a>(name: &'a str) -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", name),
        ("location", "Library 2nd Floor"),
        ("date_found", "2024-01-15"),
        ("contact", "a@b.com"),
    ]
}
