//! Core types and trait definitions for the rolo contact manager.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod contact;
pub mod draft;
pub mod error;
pub mod store;
pub mod view;

pub use error::{Error, Result};
