//! # API Route Modules
//!
//! Route modules for the onramp sandbox API surface:
//!
//! - `kyc` — KYC verification lifecycle: start a mock verification
//!   session, poll status (the poll applies the lazy auto-approval).
//! - `onramp` — fiat onramp operations: FX quoting and intent creation
//!   gated on KYC approval.
//! - `webhooks` — partner webhook receiver. Accepts anything, validates
//!   nothing, acknowledges everything.

pub mod kyc;
pub mod onramp;
pub mod webhooks;
