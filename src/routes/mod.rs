use crate::utils::webutils::validate_admin;
use actix_web::web;

pub mod admin;
pub mod auth;
pub mod health;
pub mod items;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let admin_auth = actix_web_httpauth::middleware::HttpAuthentication::bearer(validate_admin);

    cfg.service(web::scope("/health").service(health::health));
    cfg.service(
        web::scope("/auth")
            .service(web::scope("/login").service(auth::login::login))
            .service(web::scope("/session").service(auth::session::session))
            .service(web::scope("/logout").service(auth::logout::logout)),
    );
    cfg.service(
        web::scope("/items")
            .service(items::list::list)
            .service(items::submit::submit),
    );
    cfg.service(
        web::scope("/admin").wrap(admin_auth).service(
            web::scope("/items")
                .service(admin::items::list)
                .service(admin::items::delete),
        ),
    );
}
