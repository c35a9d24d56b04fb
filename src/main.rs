use clap::Parser;
use payment_intent_fn::utils::{logger, validation::Validate};
use payment_intent_fn::{invoke, CliConfig, FunctionConfig, PaymentIntentService, StripeClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting payment-intent CLI");
    if cli.verbose {
        tracing::debug!("CLI args: {:?}", cli);
    }

    let config = match &cli.config {
        Some(path) => FunctionConfig::from_file(path)?,
        None => FunctionConfig::from_env()?,
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = StripeClient::new(&config)?;
    tracing::debug!("Stripe endpoint: {}", client.endpoint());
    let service = PaymentIntentService::new(client);

    // 沒有 --uid 時以匿名身分呼叫
    let envelope = serde_json::json!({
        "data": { "amount": cli.amount },
        "auth": cli.uid.as_ref().map(|uid| serde_json::json!({ "uid": uid })),
    });

    let response = invoke(&service, envelope).await;
    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_error() {
        std::process::exit(2);
    }

    Ok(())
}
