//! vitrine library: application logic for the review carousel binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
