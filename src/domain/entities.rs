use std::fmt;

use serde::{Deserialize, Deserializer};

/// Identifier assigned by the backend to every record.
pub type RecordId = i64;

/// Freight order as published to the load board.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Order {
    pub id: RecordId,
    pub external_no: String,
    pub platform: String,
    /// Price including VAT. The backend column is nullable.
    #[serde(default)]
    pub ati_price: Option<f64>,
}

/// Routing rule deciding which logist handles an order and how it is published.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DistributionRule {
    pub id: RecordId,
    #[serde(default)]
    pub platform: Option<String>,
    /// `None` means the rule applies to any loading city.
    #[serde(default)]
    pub loading_city: Option<String>,
    #[serde(default)]
    pub unloading_city: Option<String>,
    pub logistician: String,
    #[serde(default)]
    pub margin_percent: Option<f64>,
    #[serde(default)]
    pub auction_margin_percent: Option<f64>,
    #[serde(default, deserialize_with = "flag_or_null")]
    pub auto_publish: bool,
    #[serde(default, deserialize_with = "flag_or_null")]
    pub auto_publish_auction: bool,
    /// Minutes to wait before publishing.
    #[serde(default)]
    pub publish_delay: Option<i64>,
    #[serde(default)]
    pub payment_days: Option<i64>,
    #[serde(default)]
    pub cargo_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Logist {
    pub id: RecordId,
    pub name: String,
    pub contact_id: ContactId,
}

/// Contact identifiers come back as integers from the database but as strings
/// from some upstream syncs.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ContactId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactId::Number(value) => write!(f, "{value}"),
            ContactId::Text(value) => f.write_str(value),
        }
    }
}

/// Load board the orders are published to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Platform {
    pub id: RecordId,
    pub name: String,
    #[serde(default, deserialize_with = "flag_or_null")]
    pub enabled: bool,
}

fn flag_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
