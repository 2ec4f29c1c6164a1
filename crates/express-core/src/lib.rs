//! # express-core
//!
//! Core types, traits, and error handling shared by the express sound queue,
//! cache, and block decoder.

pub mod config;
pub mod error;
pub mod save;
pub mod types;

pub use config::{CacheConfig, QueueConfig};
pub use error::{Error, Result};
pub use types::*;
