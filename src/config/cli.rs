use clap::Parser;
use std::path::PathBuf;

/// Invoke `createPaymentIntent` locally against the configured Stripe account.
#[derive(Debug, Clone, Parser)]
#[command(name = "payment-intent")]
#[command(about = "Create a Stripe payment intent through the callable handler")]
pub struct CliConfig {
    #[arg(long, allow_negative_numbers = true, help = "Amount in the currency's minor unit")]
    pub amount: i64,

    #[arg(long, help = "Caller uid; omit to invoke anonymously")]
    pub uid: Option<String>,

    #[arg(long, help = "Optional TOML settings file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_negative_amount_and_uid() {
        let config =
            CliConfig::try_parse_from(["payment-intent", "--amount", "-5", "--uid", "u1"]).unwrap();
        assert_eq!(config.amount, -5);
        assert_eq!(config.uid.as_deref(), Some("u1"));
        assert!(config.config.is_none());
    }

    #[test]
    fn test_amount_is_required() {
        assert!(CliConfig::try_parse_from(["payment-intent"]).is_err());
    }
}
