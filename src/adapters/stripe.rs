use crate::config::FunctionConfig;
use crate::domain::model::{CreatePaymentIntentParams, PaymentIntent};
use crate::domain::ports::PaymentProcessor;
use crate::utils::error::{ConfigError, ProcessorError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Deserialize;
use std::time::Duration;

const PAYMENT_INTENTS_PATH: &str = "/v1/payment_intents";

/// Stripe REST client for the one call this function makes.
///
/// The secret key only lives inside a sensitive default header, so neither the
/// client nor its requests print it through `Debug`.
#[derive(Debug, Clone)]
pub struct StripeClient {
    client: Client,
    endpoint: String,
}

#[derive(Debug, Deserialize)]
struct StripeErrorEnvelope {
    error: StripeErrorBody,
}

#[derive(Debug, Deserialize)]
struct StripeErrorBody {
    #[serde(rename = "type")]
    kind: Option<String>,
    code: Option<String>,
    message: Option<String>,
}

impl StripeClient {
    pub fn new(config: &FunctionConfig) -> Result<Self, ConfigError> {
        let mut auth_value =
            HeaderValue::from_str(&format!("Bearer {}", config.secret_key().expose_secret()))
                .map_err(|_| ConfigError::InvalidConfigValueError {
                    field: "secret_key".to_string(),
                    value: "<redacted>".to_string(),
                    reason: "Key contains characters not allowed in an HTTP header".to_string(),
                })?;
        auth_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth_value);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}{}",
                config.api_base.trim_end_matches('/'),
                PAYMENT_INTENTS_PATH
            ),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PaymentProcessor for StripeClient {
    async fn create_payment_intent(
        &self,
        params: &CreatePaymentIntentParams,
    ) -> Result<PaymentIntent, ProcessorError> {
        tracing::debug!("POST {}", self.endpoint);

        let response = self.client.post(&self.endpoint).form(params).send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!("Stripe response status: {}", status);

        if !status.is_success() {
            return Err(api_error(status.as_u16(), &body));
        }

        let intent: PaymentIntent = serde_json::from_str(&body)?;
        if intent.client_secret.is_none() {
            return Err(ProcessorError::MissingClientSecret { id: intent.id });
        }

        Ok(intent)
    }
}

fn api_error(status: u16, body: &str) -> ProcessorError {
    match serde_json::from_str::<StripeErrorEnvelope>(body) {
        Ok(StripeErrorEnvelope { error }) => ProcessorError::Api {
            status,
            kind: error.kind,
            code: error.code,
            message: error
                .message
                .unwrap_or_else(|| format!("Stripe returned HTTP {}", status)),
        },
        // 非 JSON 的錯誤回應 (例如代理層回傳的 HTML) 原樣保留
        Err(_) => ProcessorError::Api {
            status,
            kind: None,
            code: None,
            message: if body.trim().is_empty() {
                format!("Stripe returned HTTP {}", status)
            } else {
                body.trim().to_string()
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_reads_stripe_envelope() {
        let body = r#"{"error":{"type":"invalid_request_error","code":"parameter_invalid_integer","message":"amount must be positive","param":"amount"}}"#;

        match api_error(400, body) {
            ProcessorError::Api {
                status,
                kind,
                code,
                message,
            } => {
                assert_eq!(status, 400);
                assert_eq!(kind.as_deref(), Some("invalid_request_error"));
                assert_eq!(code.as_deref(), Some("parameter_invalid_integer"));
                assert_eq!(message, "amount must be positive");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = api_error(502, "Bad Gateway");
        assert_eq!(err.to_string(), "Bad Gateway");

        let err = api_error(503, "");
        assert_eq!(err.to_string(), "Stripe returned HTTP 503");
    }
}
