//! CoinGecko response types.
//!
//! `/simple/price?ids=ethereum&vs_currencies=usd` answers
//! `{"ethereum":{"usd":3521.4}}`; unknown ids are simply absent.

use std::collections::HashMap;

/// Coin id → (currency → price).
pub type SimplePriceResponse = HashMap<String, HashMap<String, f64>>;

/// Look up one coin's price in one currency.
#[must_use]
pub fn price_of(response: &SimplePriceResponse, coin_id: &str, currency: &str) -> Option<f64> {
    response.get(coin_id)?.get(currency).copied()
}
