//! Deployment settings resolver for Railway-hosted web applications.
//!
//! Derives database, static file, middleware, logging and security
//! settings from the process environment and a deployment profile.

pub mod config;
pub mod env;
pub mod output;
pub mod settings;
