//! Library Catalog
//!
//! An in-memory catalog of books and members with checkout and checkin,
//! plus a small word frequency counter.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod wordfreq;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::Library;
