use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 所有付款意圖固定使用的幣別 (馬來西亞令吉)
pub const CURRENCY: &str = "myr";

/// Payload of a `createPaymentIntent` invocation.
///
/// `amount` is in the currency's minor unit. It is signed so that a
/// non-positive value still reaches the processor, which owns range checks.
/// Any JSON number holding a whole value is accepted, so `1000.0` is `1000`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntentRequest {
    #[serde(deserialize_with = "whole_number")]
    pub amount: i64,
}

fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct WholeNumber;

    impl Visitor<'_> for WholeNumber {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number with no fractional part")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::custom(format!("amount {} is out of range", v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
            if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::custom(format!("amount {} is not a whole number", v)))
            }
        }
    }

    deserializer.deserialize_any(WholeNumber)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResult {
    pub client_secret: String,
}

/// What the service asks the processor to create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatePaymentIntentParams {
    pub amount: i64,
    pub currency: String,
}

impl CreatePaymentIntentParams {
    pub fn new(amount: i64) -> Self {
        Self {
            amount,
            currency: CURRENCY.to_string(),
        }
    }
}

/// The processor's record of a payment intent, trimmed to the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub status: PaymentIntentStatus,
    pub client_secret: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub created: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Succeeded,
    Canceled,
    #[serde(other)]
    Unknown,
}
