use customer_bridge::config::lambda::LambdaConfig;
use customer_bridge::utils::{logger, validation::Validate};
use customer_bridge::{LookupAdapter, Target, XmlServiceClient};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;

/// 事件本身就是 request envelope，回傳 response envelope
async fn function_handler<T: Target>(target: &T, event: LambdaEvent<Value>) -> Result<Value, Error> {
    let request = event.payload.to_string();
    tracing::info!("Handling lookup request {}", event.context.request_id);

    let response = target
        .request(&request)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    Ok(serde_json::from_str(&response)?)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env()?;
    config.validate()?;

    let client = XmlServiceClient::new(config.service_base_url.clone(), config.request_timeout())?;
    let adapter = Arc::new(LookupAdapter::new(client));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let adapter = Arc::clone(&adapter);
        async move { function_handler(adapter.as_ref(), event).await }
    }))
    .await
}
