pub mod config;
pub mod decoder;
pub mod errors;
pub mod extraction;
pub mod routes;
pub mod state;
