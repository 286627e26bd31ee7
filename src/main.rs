use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use campusbin::config::{EnvConfig, CONFIG};
use campusbin::db::postgres_service::PostgresService;
use campusbin::db::role::ADMIN_ROLE;
use campusbin::routes::configure_routes;
use campusbin::storage::ImageStore;
use campusbin::types::error::AppError;
use campusbin::types::user::DBUserCreate;
use campusbin::utils::token::hash_secret;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    let image_store = ImageStore::new(&config.media_dir, &config.public_url)
        .expect("Failed to initialize media directory");
    let media_root = image_store.root().to_path_buf();

    seed_admin(&postgres_service, &config).await;

    let _ = CONFIG.set(config);

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(web::Data::new(image_store.clone()))
            .configure(configure_routes)
            .service(actix_files::Files::new("/media", media_root.clone()))
    })
    .bind(addr)?
    .run()
    .await
}

/// Idempotent bootstrap: make sure the configured admin account and its
/// role row exist. Without it a fresh deployment has no way into /admin.
async fn seed_admin(db: &PostgresService, config: &EnvConfig) {
    let (email, password) = match (&config.admin_email, &config.admin_password) {
        (Some(e), Some(p)) => (e.clone(), p.clone()),
        _ => return,
    };

    let password_hash = match hash_secret(&password) {
        Ok(h) => h,
        Err(e) => {
            println!("Failed to hash bootstrap admin password: {}", e);
            return;
        }
    };

    let user_id = match db
        .create_user(DBUserCreate {
            name: "Administrator".to_string(),
            email: email.clone(),
            password_hash,
        })
        .await
    {
        Ok(id) => {
            println!("Bootstrap admin created: {}", email);
            id
        }
        Err(AppError::AlreadyExists) => match db.get_user_by_email(&email).await {
            Ok(user) => user.id,
            Err(e) => {
                println!("Failed to look up bootstrap admin: {}", e);
                return;
            }
        },
        Err(e) => {
            println!("Failed to create bootstrap admin: {}", e);
            return;
        }
    };

    if let Err(e) = db.assign_role(user_id, ADMIN_ROLE).await {
        println!("Failed to assign admin role: {}", e);
    }
}
