#![deny(missing_docs)]

//! # onramp-core — Domain Types for the Fiat Onramp Sandbox
//!
//! This crate defines the domain logic the API layer delegates to. It has
//! no HTTP concerns and no internal crate dependencies — only `serde` and
//! `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A [`UserId`] is a distinct
//!    type, not a bare `String` threaded through handler signatures.
//!
//! 2. **The KYC transition is a pure function of `(status, started_at, now)`.**
//!    [`KycRecord::observed_status`] computes the lazy auto-approval without
//!    touching a wall clock or spawning a timer. Callers supply `now`, which
//!    makes every timing behavior testable with fixed timestamps.
//!
//! 3. **Sandbox mock values live behind [`SandboxConfig`].** The approval
//!    delay, FX rate, fee schedule, and partner URLs are configuration
//!    defaults — the boundary a real KYC/payment provider integration
//!    would replace.

pub mod config;
pub mod identity;
pub mod intent;
pub mod kyc;
pub mod quote;

// Re-export primary types at crate root for ergonomic imports.
pub use config::SandboxConfig;
pub use identity::UserId;
pub use intent::intent_id;
pub use kyc::{KycRecord, KycStatus};
pub use quote::{Quote, QuoteConfig};
