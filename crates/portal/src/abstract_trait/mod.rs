pub mod account;
pub mod auth;
pub mod gateway;
pub mod navigator;
pub mod profile;
pub mod user;
