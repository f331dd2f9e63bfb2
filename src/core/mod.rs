#[cfg(feature = "lambda")]
pub mod handler;
pub mod responder;

pub use crate::domain::model::{CorsHeaders, PreflightResponse};
pub use crate::domain::ports::ConfigProvider;
pub use responder::CorsResponder;
