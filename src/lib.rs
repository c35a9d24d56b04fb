pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::StripeClient;
pub use config::FunctionConfig;
pub use crate::core::{
    callable::{invoke, CallableRequest, CallableResponse},
    service::PaymentIntentService,
    AuthContext, CallerIdentity, PaymentIntentRequest, PaymentIntentResult, PaymentProcessor,
};
pub use utils::error::{ConfigError, FunctionError, ProcessorError, Result};
