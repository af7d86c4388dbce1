//! Time-series utilities over measured revisions.
//!
//! Modules include:
//! - `bucket`: map timestamps to UTC day / ISO week / month keys
//! - `candles`: summarize components as OHLC candles
/// Calendar bucket keys.
pub mod bucket;
/// OHLC aggregation of components.
pub mod candles;
