use cors_preflight::utils::logger;
use cors_preflight::{function_handler, CorsConfig, CorsResponder};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時讀取一次配置
    let responder = CorsResponder::new(CorsConfig::from_env())?;
    tracing::info!(
        "Starting CORS preflight Lambda (origin: {})",
        responder.config().allowed_origin
    );

    let responder = &responder;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(responder, event).await
    }))
    .await
}
