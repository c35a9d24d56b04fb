use crate::core::{
    AuthContext, CallerIdentity, PaymentIntentRequest, PaymentIntentResult, PaymentProcessor,
};
use crate::domain::model::CreatePaymentIntentParams;
use crate::utils::error::{FunctionError, ProcessorError, Result};

/// Stateless `createPaymentIntent` handler.
///
/// Gate on the caller identity, make one processor call, hand the client
/// secret back untouched. No retries and no idempotency key: two calls with
/// the same amount create two intents.
pub struct PaymentIntentService<P: PaymentProcessor> {
    processor: P,
}

impl<P: PaymentProcessor> PaymentIntentService<P> {
    pub fn new(processor: P) -> Self {
        Self { processor }
    }

    pub fn processor(&self) -> &P {
        &self.processor
    }

    /// The authentication gate. Runs before anything else touches the payload.
    pub fn authenticate<'a>(&self, auth: &'a AuthContext) -> Result<&'a CallerIdentity> {
        auth.require().inspect_err(|_| {
            tracing::error!("User is not authenticated.");
        })
    }

    pub async fn create_payment_intent(
        &self,
        request: PaymentIntentRequest,
        auth: &AuthContext,
    ) -> Result<PaymentIntentResult> {
        let caller = self.authenticate(auth)?;

        tracing::info!(
            uid = %caller.uid,
            "Creating payment intent for amount: {}",
            request.amount
        );

        let params = CreatePaymentIntentParams::new(request.amount);
        let intent = self
            .processor
            .create_payment_intent(&params)
            .await
            .map_err(|e| {
                tracing::error!(uid = %caller.uid, "Stripe Error: {}", e);
                FunctionError::internal(&e)
            })?;

        let client_secret = intent.client_secret.ok_or_else(|| {
            let e = ProcessorError::MissingClientSecret {
                id: intent.id.clone(),
            };
            tracing::error!(uid = %caller.uid, "Stripe Error: {}", e);
            FunctionError::internal(&e)
        })?;

        tracing::debug!(payment_intent = %intent.id, status = ?intent.status, "Payment intent created");

        Ok(PaymentIntentResult { client_secret })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{PaymentIntent, PaymentIntentStatus};
    use async_trait::async_trait;
    use chrono::Utc;

    struct NoSecretProcessor;

    #[async_trait]
    impl PaymentProcessor for NoSecretProcessor {
        async fn create_payment_intent(
            &self,
            params: &CreatePaymentIntentParams,
        ) -> std::result::Result<PaymentIntent, ProcessorError> {
            Ok(PaymentIntent {
                id: "pi_nosecret".to_string(),
                amount: params.amount,
                currency: params.currency.clone(),
                status: PaymentIntentStatus::RequiresPaymentMethod,
                client_secret: None,
                created: Utc::now(),
            })
        }
    }

    #[test]
    fn test_missing_client_secret_becomes_internal() {
        let service = PaymentIntentService::new(NoSecretProcessor);
        let auth = AuthContext::authenticated("user-1");

        let result = tokio_test::block_on(
            service.create_payment_intent(PaymentIntentRequest { amount: 1000 }, &auth),
        );

        match result {
            Err(FunctionError::Internal { details }) => assert!(details.contains("pi_nosecret")),
            other => panic!("expected internal error, got {other:?}"),
        }
    }
}
