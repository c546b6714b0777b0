//! Read-only administration views over the freight backend: orders,
//! distribution rules, logists and platforms.

pub mod app;
pub mod config;
pub mod domain;
pub mod infra;
pub mod ui;
pub mod util;
