use serde::{Deserialize, Serialize};

/// Response record handed back to API Gateway, which turns it into the real HTTP reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreflightResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: CorsHeaders,
    pub body: String,
}

/// The three CORS headers, serialized in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorsHeaders {
    #[serde(rename = "Access-Control-Allow-Headers")]
    pub allow_headers: String,
    #[serde(rename = "Access-Control-Allow-Origin")]
    pub allow_origin: String,
    #[serde(rename = "Access-Control-Allow-Methods")]
    pub allow_methods: String,
}

impl CorsHeaders {
    pub const ALLOW_HEADERS: &'static str = "Access-Control-Allow-Headers";
    pub const ALLOW_ORIGIN: &'static str = "Access-Control-Allow-Origin";
    pub const ALLOW_METHODS: &'static str = "Access-Control-Allow-Methods";

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            (Self::ALLOW_HEADERS, self.allow_headers.as_str()),
            (Self::ALLOW_ORIGIN, self.allow_origin.as_str()),
            (Self::ALLOW_METHODS, self.allow_methods.as_str()),
        ]
        .into_iter()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
