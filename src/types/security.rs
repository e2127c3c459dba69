//! Black-address screening types.

use serde::{Deserialize, Serialize};

use crate::types::{null_as_default, ApiResponse};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackScreeningRequest {
    /// Platform short name, e.g. `bsc`, `eth`.
    pub platform: String,
    pub address: String,
}

/// One flag per screening category. `true` means the address is listed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlackScreeningData {
    /// Global sanctions.
    #[serde(deserialize_with = "null_as_default")]
    pub sanction: bool,
    /// Fraud, phishing, Ponzi schemes.
    #[serde(deserialize_with = "null_as_default")]
    pub scam: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub gambling: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub darknet: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub theft: bool,
    /// Mixing services.
    #[serde(deserialize_with = "null_as_default")]
    pub mixing: bool,
    /// Smart contract exploits.
    #[serde(deserialize_with = "null_as_default")]
    pub hacker: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub ransomware: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub trojan: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub child_abuse_material: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub terrorist: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub drug: bool,
    /// Global judicial network.
    #[serde(deserialize_with = "null_as_default")]
    pub lawsuit: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub business_black_list: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub piracy: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub fraud_shop: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub underground_bank: bool,
    /// Money laundering intermediary.
    #[serde(deserialize_with = "null_as_default")]
    pub money_mule: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub protocol_piracy: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub illicit_actor_organization: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub high_risk_exchange: bool,
    #[serde(rename = "highRiskJurisdictionFATF", deserialize_with = "null_as_default")]
    pub high_risk_jurisdiction_fatf: bool,
    #[serde(rename = "greyListFATF", deserialize_with = "null_as_default")]
    pub grey_list_fatf: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub official_freeze: bool,
}

impl BlackScreeningData {
    /// Every category as `(wire name, flag)`.
    pub fn flags(&self) -> [(&'static str, bool); 24] {
        [
            ("sanction", self.sanction),
            ("scam", self.scam),
            ("gambling", self.gambling),
            ("darknet", self.darknet),
            ("theft", self.theft),
            ("mixing", self.mixing),
            ("hacker", self.hacker),
            ("ransomware", self.ransomware),
            ("trojan", self.trojan),
            ("childAbuseMaterial", self.child_abuse_material),
            ("terrorist", self.terrorist),
            ("drug", self.drug),
            ("lawsuit", self.lawsuit),
            ("businessBlackList", self.business_black_list),
            ("piracy", self.piracy),
            ("fraudShop", self.fraud_shop),
            ("undergroundBank", self.underground_bank),
            ("moneyMule", self.money_mule),
            ("protocolPiracy", self.protocol_piracy),
            ("illicitActorOrganization", self.illicit_actor_organization),
            ("highRiskExchange", self.high_risk_exchange),
            ("highRiskJurisdictionFATF", self.high_risk_jurisdiction_fatf),
            ("greyListFATF", self.grey_list_fatf),
            ("officialFreeze", self.official_freeze),
        ]
    }

    /// Names of the categories that are set.
    pub fn risk_categories(&self) -> Vec<&'static str> {
        self.flags()
            .into_iter()
            .filter_map(|(name, set)| set.then_some(name))
            .collect()
    }

    pub fn has_any_risk(&self) -> bool {
        self.flags().iter().any(|(_, set)| *set)
    }
}

pub type BlackScreeningResponse = ApiResponse<BlackScreeningData>;
