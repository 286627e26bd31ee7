// Library exports for integration tests.

pub mod config;
pub mod db;
pub mod routes;
pub mod search;
pub mod storage;
pub mod types;
pub mod utils;
