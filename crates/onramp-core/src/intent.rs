//! # Onramp Intent Synthesis
//!
//! An onramp intent is ephemeral: the identifier is returned to the caller
//! but never recorded, so it cannot later be looked up, confirmed, or
//! reconciled. Nothing about it needs to be unique beyond what a demo
//! requires — two intents created within the same second share an id.

use chrono::{DateTime, Utc};

/// Synthesize an intent identifier from the integer Unix timestamp at `now`.
pub fn intent_id(now: DateTime<Utc>) -> String {
    format!("intent_{}", now.timestamp())
}
