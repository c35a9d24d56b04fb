#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use payment_intent_fn::domain::model::{
    CreatePaymentIntentParams, PaymentIntent, PaymentIntentStatus,
};
use payment_intent_fn::{FunctionConfig, PaymentProcessor, ProcessorError};
use secrecy::SecretString;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub const TEST_KEY: &str = "sk_test_51Fake0Key0For0Tests";

/// 測試用的付款處理器：計算呼叫次數並記錄收到的參數
pub struct FakeProcessor {
    calls: AtomicUsize,
    seen: Mutex<Vec<CreatePaymentIntentParams>>,
    outcome: Outcome,
}

pub enum Outcome {
    /// A fresh intent per call: `pi_<n>_secret_<n>`.
    Issue,
    /// Always the same secret.
    Fixed(String),
    Reject(String),
}

impl FakeProcessor {
    pub fn new(outcome: Outcome) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
            outcome,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<CreatePaymentIntentParams> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentProcessor for FakeProcessor {
    async fn create_payment_intent(
        &self,
        params: &CreatePaymentIntentParams,
    ) -> Result<PaymentIntent, ProcessorError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.seen.lock().unwrap().push(params.clone());

        let client_secret = match &self.outcome {
            Outcome::Issue => format!("pi_{n}_secret_{n}"),
            Outcome::Fixed(secret) => secret.clone(),
            Outcome::Reject(message) => {
                return Err(ProcessorError::Api {
                    status: 400,
                    kind: Some("invalid_request_error".to_string()),
                    code: None,
                    message: message.clone(),
                })
            }
        };

        Ok(PaymentIntent {
            id: format!("pi_{n}"),
            amount: params.amount,
            currency: params.currency.clone(),
            status: PaymentIntentStatus::RequiresPaymentMethod,
            client_secret: Some(client_secret),
            created: Utc::now(),
        })
    }
}

pub fn config_for(api_base: &str) -> FunctionConfig {
    FunctionConfig::new(
        SecretString::from(TEST_KEY.to_string()),
        api_base.to_string(),
        5,
    )
}

pub fn intent_json(id: &str, amount: i64, client_secret: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "object": "payment_intent",
        "amount": amount,
        "currency": "myr",
        "status": "requires_payment_method",
        "client_secret": client_secret,
        "created": 1_735_689_600,
        "livemode": false
    })
}
