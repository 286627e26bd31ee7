pub mod item;
pub mod postgres_service;
pub mod role;
pub mod user;
