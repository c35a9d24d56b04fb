//! Callable-function wire protocol.
//!
//! An invocation arrives as `{ "data": ..., "auth": { "uid": ... } }` and is
//! answered with either `{ "result": ... }` or `{ "error": { "status", "message", "details"? } }`.
//! Raw errors never cross this boundary.

use crate::core::service::PaymentIntentService;
use crate::core::{AuthContext, CallerIdentity, PaymentIntentRequest, PaymentProcessor};
use crate::utils::error::{ErrorStatus, FunctionError};
use serde::Serialize;
use serde_json::Value;

/// Envelope pulled apart leniently: a missing or malformed `auth` counts as
/// anonymous and a missing `data` is `null`.
#[derive(Debug, Clone, PartialEq)]
pub struct CallableRequest {
    pub data: Value,
    pub auth: Option<CallerIdentity>,
}

impl CallableRequest {
    pub fn from_envelope(mut envelope: Value) -> Self {
        let data = envelope.get_mut("data").map(Value::take).unwrap_or(Value::Null);
        let auth = match envelope.get_mut("auth").map(Value::take) {
            None | Some(Value::Null) => None,
            Some(raw) => serde_json::from_value(raw)
                .inspect_err(|e| tracing::warn!("Ignoring malformed auth context: {}", e))
                .ok(),
        };

        Self { data, auth }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CallableResponse {
    Result(Value),
    Error(CallableError),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallableError {
    pub status: ErrorStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<&FunctionError> for CallableError {
    fn from(err: &FunctionError) -> Self {
        Self {
            status: err.status(),
            message: err.to_string(),
            details: err.details().map(str::to_string),
        }
    }
}

impl From<FunctionError> for CallableResponse {
    fn from(err: FunctionError) -> Self {
        CallableResponse::Error(CallableError::from(&err))
    }
}

impl CallableResponse {
    pub fn is_error(&self) -> bool {
        matches!(self, CallableResponse::Error(_))
    }
}

/// Decode the envelope, run the handler and encode its outcome.
///
/// The auth gate runs before `data` is looked at. A payload that does not
/// decode into a request is reported as `INTERNAL` with the decode error as
/// details, the same status a processor rejection gets.
pub async fn invoke<P: PaymentProcessor>(
    service: &PaymentIntentService<P>,
    envelope: Value,
) -> CallableResponse {
    let request = CallableRequest::from_envelope(envelope);
    let auth = AuthContext::from(request.auth);

    if let Err(err) = service.authenticate(&auth) {
        return err.into();
    }

    let payload: PaymentIntentRequest = match serde_json::from_value(request.data) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Malformed payment intent payload: {}", e);
            return FunctionError::Internal {
                details: e.to_string(),
            }
            .into();
        }
    };

    match service.create_payment_intent(payload, &auth).await {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(value) => CallableResponse::Result(value),
            Err(e) => {
                tracing::error!("Failed to encode result: {}", e);
                FunctionError::Internal {
                    details: e.to_string(),
                }
                .into()
            }
        },
        Err(err) => err.into(),
    }
}
