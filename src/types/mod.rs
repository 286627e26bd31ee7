pub mod error;
pub mod item;
pub mod response;
pub mod user;
