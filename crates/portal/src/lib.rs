pub mod abstract_trait;
pub mod di;
pub mod gateway;
pub mod guard;
pub mod navigation;
pub mod service;
pub mod state;
pub mod store;
