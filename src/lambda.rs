#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use payment_intent_fn::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use payment_intent_fn::{invoke, CallableResponse, FunctionConfig, PaymentIntentService, StripeClient};
#[cfg(feature = "lambda")]
use serde_json::Value;

#[cfg(feature = "lambda")]
async fn function_handler(
    service: &PaymentIntentService<StripeClient>,
    event: LambdaEvent<Value>,
) -> Result<CallableResponse, Error> {
    tracing::info!(request_id = %event.context.request_id, "createPaymentIntent invoked");
    Ok(invoke(service, event.payload).await)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時載入一次，之後的呼叫共用同一份設定與 HTTP 連線池
    let config = FunctionConfig::from_env()?;
    config.validate()?;

    let service = PaymentIntentService::new(StripeClient::new(&config)?);
    let service = &service;

    // 事件以原始 JSON 接收，信封解析錯誤也會回傳結構化的 error
    run(service_fn(move |event: LambdaEvent<Value>| async move {
        function_handler(service, event).await
    }))
    .await
}
