pub mod abstract_trait;
pub mod cache;
pub mod config;
pub mod domain;
pub mod errors;
pub mod model;
pub mod utils;
