//! # FX Quote Engine
//!
//! Pure quote computation over a fixed sandbox rate and fee schedule.
//! A quote has no identity and is never stored — it is recomputed on
//! every request from the configured schedule.

use serde::{Deserialize, Serialize};

/// The sandbox FX rate and fee schedule.
///
/// Defaults model 1 BTC ≈ 5,000,000 units of source currency with a 1%
/// fee floored at 10 currency units. A real implementation would replace
/// this with a rate provider; the sandbox keeps it a config default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteConfig {
    /// Units of BTC per unit of source currency.
    pub btc_rate: f64,
    /// Fee fraction applied to the source amount.
    pub fee_rate: f64,
    /// Minimum fee in source currency units.
    pub min_fee: f64,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            btc_rate: 1.0 / 5_000_000.0,
            fee_rate: 0.01,
            min_fee: 10.0,
        }
    }
}

/// A computed quote. Ephemeral — returned to the caller, never recorded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// The rate used for the conversion.
    pub rate: f64,
    /// BTC output for the requested source amount.
    pub btc_out: f64,
    /// Fee in source currency units.
    pub fees: f64,
}

impl QuoteConfig {
    /// Compute a quote for `amount` of source currency.
    ///
    /// No validation is performed on the amount: the sandbox accepts any
    /// input (negative, zero, non-finite) and computes a best-effort
    /// result, matching the rest of the API's accept-everything posture.
    pub fn quote(&self, amount: f64) -> Quote {
        Quote {
            rate: self.btc_rate,
            btc_out: amount * self.btc_rate,
            fees: f64::max(self.min_fee, self.fee_rate * amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rate_is_one_five_millionth() {
        let config = QuoteConfig::default();
        assert_eq!(config.btc_rate, 1.0 / 5_000_000.0);
    }

    #[test]
    fn quote_for_1000_units() {
        let q = QuoteConfig::default().quote(1000.0);
        assert_eq!(q.rate, 1.0 / 5_000_000.0);
        // Bit-exact against the same computation; ~0.0002 BTC.
        assert_eq!(q.btc_out, 1000.0 * (1.0 / 5_000_000.0));
        assert!((q.btc_out - 0.0002).abs() < 1e-12);
        assert_eq!(q.fees, 10.0);
    }

    #[test]
    fn fee_floor_applies_to_small_amounts() {
        // 1% of 500 is 5, below the 10-unit floor.
        assert_eq!(QuoteConfig::default().quote(500.0).fees, 10.0);
        assert_eq!(QuoteConfig::default().quote(0.0).fees, 10.0);
    }

    #[test]
    fn percentage_fee_applies_above_the_floor() {
        // 1% of 5000 is 50.
        assert_eq!(QuoteConfig::default().quote(5000.0).fees, 50.0);
        // The crossover point: 1% of 1000 equals the floor exactly.
        assert_eq!(QuoteConfig::default().quote(1000.0).fees, 10.0);
    }

    #[test]
    fn negative_amounts_are_computed_not_rejected() {
        let q = QuoteConfig::default().quote(-100.0);
        assert_eq!(q.btc_out, -100.0 * (1.0 / 5_000_000.0));
        // 1% of -100 is -1; the floor wins.
        assert_eq!(q.fees, 10.0);
    }

    #[test]
    fn custom_schedule_is_honored() {
        let config = QuoteConfig {
            btc_rate: 0.5,
            fee_rate: 0.1,
            min_fee: 1.0,
        };
        let q = config.quote(100.0);
        assert_eq!(q.btc_out, 50.0);
        assert_eq!(q.fees, 10.0);
    }
}
