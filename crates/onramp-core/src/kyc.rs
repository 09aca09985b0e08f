//! # KYC Status Lifecycle
//!
//! The one piece of real state-machine logic in the sandbox: the per-user
//! KYC status and its time-based auto-approval.
//!
//! ## Transitions
//!
//! ```text
//! NONE ─start()──▶ PENDING ─(approval delay elapses)──▶ APPROVED
//!                     │ ▲
//!                     └─┘ start() again restarts the timer
//! ```
//!
//! Transitions only move forward. There is no rejection or expiry path —
//! this is a sandbox, and `APPROVED` is terminal.
//!
//! ## Lazy Auto-Approval
//!
//! The `PENDING → APPROVED` transition is not driven by a timer task. It is
//! a pure function of `(status, started_at, now)`: [`KycRecord::observed_status`]
//! reports `Approved` once the configured delay has elapsed, and
//! [`KycRecord::refresh`] writes that observation back into the record.
//! Correctness only requires that any status check after the delay observes
//! `Approved`, not that the transition happens at exactly `started_at + delay`.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The KYC verification status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KycStatus {
    /// No verification has been requested. Initial state.
    None,
    /// Verification started; awaiting the sandbox approval delay.
    Pending,
    /// Verification approved. Terminal state.
    Approved,
}

impl KycStatus {
    /// Return the wire representation of this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pending => "pending",
            Self::Approved => "approved",
        }
    }
}

impl std::fmt::Display for KycStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The per-user KYC record held in the user ledger.
///
/// Invariant: `started_at` is `Some` iff the status is or was `Pending`.
/// Records are created implicitly in the `None` state on first lookup,
/// mutated in place, and never deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KycRecord {
    /// Current verification status.
    pub status: KycStatus,
    /// When verification was last started. Reset on every `start`.
    pub started_at: Option<DateTime<Utc>>,
}

impl KycRecord {
    /// Create a record in the initial `None` state.
    pub fn new() -> Self {
        Self {
            status: KycStatus::None,
            started_at: None,
        }
    }

    /// Start (or restart) verification at `now`.
    ///
    /// Moves the record to `Pending` and stamps `started_at`, restarting
    /// the approval timer if verification was already pending. A record
    /// that has already reached `Approved` also returns to `Pending` —
    /// the caller asked for a fresh verification session.
    pub fn start(&mut self, now: DateTime<Utc>) {
        self.status = KycStatus::Pending;
        self.started_at = Some(now);
    }

    /// The status an observer at `now` should see — the pure transition
    /// function underlying lazy auto-approval.
    ///
    /// Returns `Approved` when the record is `Pending` and more than
    /// `delay` has elapsed since `started_at`; otherwise returns the
    /// stored status unchanged. Does not mutate the record.
    pub fn observed_status(&self, now: DateTime<Utc>, delay: Duration) -> KycStatus {
        match (self.status, self.started_at) {
            (KycStatus::Pending, Some(started_at)) if now - started_at > delay => {
                KycStatus::Approved
            }
            (status, _) => status,
        }
    }

    /// Apply the observation at `now` to the record and return the
    /// resulting status.
    ///
    /// This is the read-side effect of a status check: once any observer
    /// has seen `Approved`, the record stores `Approved`.
    pub fn refresh(&mut self, now: DateTime<Utc>, delay: Duration) -> KycStatus {
        self.status = self.observed_status(now, delay);
        self.status
    }
}

impl Default for KycRecord {
    fn default() -> Self {
        Self::new()
    }
}
