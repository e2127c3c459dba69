//! KYT v4 types: per-strategy exposure, hops and entity breakdown.
//!
//! v4 endpoints take the same request structs as their v2/v3 counterparts.

use serde::{Deserialize, Serialize};

use crate::types::{null_as_default, ApiResponse, Exposure, RiskLevel};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct V4EntityDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub entity_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub hops: i64,
    /// Purification amount in USD.
    #[serde(deserialize_with = "null_as_default")]
    pub purification_amount_u: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub purification_rate: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct V4Risk {
    #[serde(deserialize_with = "null_as_default")]
    pub risk_strategy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exposure: Exposure,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_level: RiskLevel,
    /// Shortest hop count to a risk entity.
    #[serde(deserialize_with = "null_as_default")]
    pub hops: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub entity_details: Vec<V4EntityDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct V4TransactionRiskData {
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_level: RiskLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub risks: Vec<V4Risk>,
}

impl V4TransactionRiskData {
    /// Risks whose counterparty is directly connected.
    pub fn direct_risks(&self) -> impl Iterator<Item = &V4Risk> {
        self.risks.iter().filter(|r| r.exposure == Exposure::Direct)
    }
}

pub type V4TransactionRiskResponse = ApiResponse<V4TransactionRiskData>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct V4StrategyDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub strategy_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exposure: Exposure,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_level: RiskLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub hops: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub entity_details: Vec<V4EntityDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct V4AddressRiskData {
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_level: RiskLevel,

    #[serde(deserialize_with = "null_as_default")]
    pub incoming_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub incoming_level: RiskLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub incoming_detail: Vec<V4StrategyDetail>,

    #[serde(deserialize_with = "null_as_default")]
    pub outgoing_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub outgoing_level: RiskLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub outgoing_detail: Vec<V4StrategyDetail>,

    #[serde(deserialize_with = "null_as_default")]
    pub risk_tag_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_tag_level: RiskLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_tag_details: Vec<String>,
}

pub type V4AddressRiskResponse = ApiResponse<V4AddressRiskData>;
