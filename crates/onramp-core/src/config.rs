//! # Sandbox Configuration
//!
//! All mock values live here as defaults: the KYC approval delay, the
//! partner session/redirect URLs, and the quote schedule. These are the
//! stand-ins for real provider integrations — swapping in a real KYC
//! vendor or payment partner means replacing what sits behind this
//! config boundary, not touching handler logic.

use chrono::Duration;

use crate::quote::QuoteConfig;

/// Sandbox behavior configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SandboxConfig {
    /// How long a user stays `pending` before a status read observes
    /// `approved`.
    pub approval_delay: Duration,
    /// Mock KYC session URL returned by `POST /kyc/start`.
    pub kyc_session_url: String,
    /// Mock payment redirect URL returned by `POST /fiat/onramp/start`.
    pub onramp_redirect_url: String,
    /// FX rate and fee schedule for quoting.
    pub quote: QuoteConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            approval_delay: Duration::seconds(3),
            kyc_session_url: "https://sandbox-kyc.example/start".to_string(),
            onramp_redirect_url: "https://sandbox-pay.example/redirect".to_string(),
            quote: QuoteConfig::default(),
        }
    }
}
