//! Adapters to systems outside the process.

pub mod api;
