//! Records served by the freight backend and the logic derived from them.

pub mod entities;
pub mod list_state;
pub mod pricing;

pub use entities::{ContactId, DistributionRule, Logist, Order, Platform, RecordId};
pub use list_state::ListState;
pub use pricing::{format_price, price_excluding_tax};
