// Domain layer: request/response models, the auth gate and the processor port.

pub mod auth;
pub mod model;
pub mod ports;
