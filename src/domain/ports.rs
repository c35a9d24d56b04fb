use crate::domain::model::{CreatePaymentIntentParams, PaymentIntent};
use crate::utils::error::ProcessorError;
use async_trait::async_trait;

/// External payment processor that issues payment intents.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn create_payment_intent(
        &self,
        params: &CreatePaymentIntentParams,
    ) -> Result<PaymentIntent, ProcessorError>;
}
