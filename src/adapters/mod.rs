// Adapters layer: concrete implementations of the domain ports.

pub mod stripe;

pub use stripe::StripeClient;
