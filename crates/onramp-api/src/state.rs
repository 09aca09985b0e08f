//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.
//!
//! ## Architecture
//!
//! The only state the sandbox owns is the **user ledger**: a process-wide
//! mapping from user identifier to KYC record. It is created lazily,
//! never persisted, and lost on process restart — by design. Quotes and
//! onramp intents are ephemeral and have no store at all.
//!
//! Handlers only touch the ledger through its method surface
//! ([`UserLedger::get`], [`UserLedger::start_kyc`],
//! [`UserLedger::refresh_status`], [`UserLedger::kyc_status`]), so a
//! persistent backend could replace the in-memory map without touching
//! handler logic.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use onramp_core::{KycRecord, KycStatus, SandboxConfig, UserId};
use parking_lot::RwLock;

// -- User Ledger --------------------------------------------------------------

/// Thread-safe, cloneable in-memory user ledger.
///
/// All operations are synchronous (the RwLock is `parking_lot`, not
/// `tokio::sync`) because the lock is never held across `.await` points.
/// `parking_lot::RwLock` is non-poisonable — a panicking writer does not
/// permanently corrupt the ledger.
#[derive(Debug, Clone, Default)]
pub struct UserLedger {
    data: Arc<RwLock<HashMap<UserId, KycRecord>>>,
}

impl UserLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Retrieve the record for `id`, if one exists.
    pub fn get(&self, id: &UserId) -> Option<KycRecord> {
        self.data.read().get(id).cloned()
    }

    /// Start (or restart) KYC verification for `id` at `now`.
    ///
    /// Creates the record if the user has never been seen, then moves it
    /// to `pending` and stamps the start time. Returns the updated record.
    pub fn start_kyc(&self, id: &UserId, now: DateTime<Utc>) -> KycRecord {
        let mut guard = self.data.write();
        let record = guard.entry(id.clone()).or_default();
        record.start(now);
        record.clone()
    }

    /// Observe the status for `id` at `now`, applying the lazy
    /// auto-approval as a side effect of the read.
    ///
    /// The read-modify-write runs under a single write lock, so two
    /// concurrent status checks cannot interleave mid-transition. Unknown
    /// users report `none` without an error and without creating a record.
    pub fn refresh_status(&self, id: &UserId, now: DateTime<Utc>, delay: Duration) -> KycStatus {
        let mut guard = self.data.write();
        match guard.get_mut(id) {
            Some(record) => {
                let before = record.status;
                let after = record.refresh(now, delay);
                if before != after {
                    tracing::info!(user = %id, "kyc auto-approved");
                }
                after
            }
            None => KycStatus::None,
        }
    }

    /// The *stored* status for `id`, without applying the lazy flip.
    ///
    /// This is what the onramp gate consults: only a `kyc/status` read
    /// advances the state. Unknown users report `none`.
    pub fn kyc_status(&self, id: &UserId) -> KycStatus {
        self.data
            .read()
            .get(id)
            .map(|record| record.status)
            .unwrap_or(KycStatus::None)
    }

    /// Return the number of known users.
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the ledger has seen no users yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// -- Application State --------------------------------------------------------

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to. Only consulted by the binary.
    pub port: u16,
    /// Sandbox mock values: approval delay, partner URLs, quote schedule.
    pub sandbox: SandboxConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            sandbox: SandboxConfig::default(),
        }
    }
}

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly via the `Arc` inside [`UserLedger`]; the configuration
/// is small and cloned along with it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The process-wide user ledger.
    pub users: UserLedger,
    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Create application state with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create application state with the given configuration.
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            users: UserLedger::new(),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
