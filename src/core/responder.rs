use crate::core::{ConfigProvider, CorsHeaders, PreflightResponse};
use crate::utils::error::Result;

pub const STATUS_OK: u16 = 200;
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const ALLOW_METHODS: &str = "OPTIONS,POST,GET";
pub const GREETING: &str = "Hello from Lambda!";

/// Answers CORS preflight requests with a fixed response.
///
/// The greeting body is JSON-encoded once at construction, so `respond` itself cannot fail.
#[derive(Debug, Clone)]
pub struct CorsResponder<C: ConfigProvider> {
    config: C,
    body: String,
}

impl<C: ConfigProvider> CorsResponder<C> {
    pub fn new(config: C) -> Result<Self> {
        let body = serde_json::to_string(GREETING)?;
        tracing::debug!(
            "CORS responder ready (origin: {})",
            config.allowed_origin()
        );
        Ok(Self { config, body })
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Neither `event` nor `context` is inspected.
    pub fn respond<E, X>(&self, _event: &E, _context: &X) -> PreflightResponse
    where
        E: ?Sized,
        X: ?Sized,
    {
        PreflightResponse {
            status_code: STATUS_OK,
            headers: CorsHeaders {
                allow_headers: ALLOW_HEADERS.to_string(),
                allow_origin: self.config.allowed_origin().to_string(),
                allow_methods: ALLOW_METHODS.to_string(),
            },
            body: self.body.clone(),
        }
    }
}
