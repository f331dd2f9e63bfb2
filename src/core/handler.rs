use crate::core::{ConfigProvider, CorsResponder, PreflightResponse};
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;

/// Lambda entry point. The payload is left as raw JSON and never looked at.
pub async fn function_handler<C: ConfigProvider>(
    responder: &CorsResponder<C>,
    event: LambdaEvent<Value>,
) -> Result<PreflightResponse, Error> {
    tracing::debug!("Handling preflight request {}", event.context.request_id);

    Ok(responder.respond(&event.payload, &event.context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CorsConfig;
    use lambda_runtime::Context;
    use serde_json::json;

    #[tokio::test]
    async fn test_handler_accepts_null_payload() {
        let responder = CorsResponder::new(CorsConfig::default()).unwrap();
        let event = LambdaEvent::new(json!(null), Context::default());

        let response = function_handler(&responder, event).await.unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers.allow_origin, "https://www.example.com");
    }
}
