pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{CorsConfig, DEFAULT_ALLOWED_ORIGIN, DOMAIN_NAME_ENV};
pub use crate::core::{CorsHeaders, CorsResponder, PreflightResponse};
pub use domain::ports::ConfigProvider;
pub use utils::error::{CorsError, Result};

#[cfg(feature = "lambda")]
pub use crate::core::handler::function_handler;
