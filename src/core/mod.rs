pub mod callable;
pub mod service;

pub use crate::domain::auth::{AuthContext, CallerIdentity};
pub use crate::domain::model::{PaymentIntentRequest, PaymentIntentResult};
pub use crate::domain::ports::PaymentProcessor;
pub use crate::utils::error::Result;
