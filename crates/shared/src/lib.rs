//! Shared error categories and configuration for Kairos.
//!
//! This crate provides the pieces every other crate agrees on:
//! - Application-wide error categories
//! - Configuration management

pub mod config;
pub mod error;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
