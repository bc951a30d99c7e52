//! Document CRUD.

pub mod service;

pub use service::DocumentService;
