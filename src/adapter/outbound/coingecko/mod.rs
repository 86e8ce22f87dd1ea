//! CoinGecko price adapter over the `/simple/price` endpoint.

pub mod client;
pub mod dto;
pub mod settings;
