//! KYT transaction and address assessment types (v2 / v3 endpoints).

use serde::{Deserialize, Serialize};

use crate::types::{null_as_default, ApiResponse, RiskLevel};

/// Deposit transaction to assess.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRequest {
    pub chain_id: String,
    /// Transaction hash.
    pub hash: String,
    /// Token contract address. `None` assesses the native token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// Withdrawal transaction to assess.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub chain_id: String,
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// EOA address to assess.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRiskRequest {
    pub chain_id: String,
    pub address: String,
    /// Defaults to the native token when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaliciousAddressRequest {
    pub chain_id: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaspRequest {
    pub chain_id: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub risk_name: String,
    /// Share of funds, four decimal places.
    #[serde(deserialize_with = "null_as_default")]
    pub rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Risk {
    #[serde(deserialize_with = "null_as_default")]
    pub risk_strategy: String,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_details: Vec<RiskDetail>,
}

/// Result of a deposit or withdrawal assessment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionRiskData {
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_level: RiskLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub risks: Vec<Risk>,
}

pub type TransactionRiskResponse = ApiResponse<TransactionRiskData>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StrategyRiskDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub strategy_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_details: Vec<RiskDetail>,
}

/// Address assessment split by direction of funds plus tag-based score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddressRiskData {
    /// Overall score, 0-100.
    #[serde(deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_level: RiskLevel,

    #[serde(deserialize_with = "null_as_default")]
    pub incoming_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub incoming_level: RiskLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub incoming_detail: Vec<StrategyRiskDetail>,

    #[serde(deserialize_with = "null_as_default")]
    pub outgoing_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub outgoing_level: RiskLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub outgoing_detail: Vec<StrategyRiskDetail>,

    #[serde(deserialize_with = "null_as_default")]
    pub risk_tag_score: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_tag_level: RiskLevel,
    #[serde(deserialize_with = "null_as_default")]
    pub risk_tag_details: Vec<String>,
}

pub type AddressRiskResponse = ApiResponse<AddressRiskData>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaliceTag {
    #[serde(deserialize_with = "null_as_default")]
    pub tag_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaliceDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub malice_tags: Vec<MaliceTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SanctionDetail {
    /// Sanction list, e.g. OFAC.
    #[serde(deserialize_with = "null_as_default")]
    pub standard: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tag: String,
    #[serde(deserialize_with = "null_as_default")]
    pub entity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    /// Source URL.
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MaliciousAddressData {
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_malicious: bool,
    pub malice_detail: Option<MaliceDetail>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_sanction: bool,
    pub sanction_detail: Option<SanctionDetail>,
    #[serde(deserialize_with = "null_as_default")]
    pub is_in_customer_black_list: bool,
}

pub type MaliciousAddressResponse = ApiResponse<MaliciousAddressData>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VaspData {
    #[serde(deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_vasp: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub vasp_tags: Vec<String>,
}

pub type VaspResponse = ApiResponse<VaspData>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_transaction_risk() {
        let body = r#"{
            "code": 200,
            "msg": "success",
            "data": {
                "score": 85.5,
                "riskLevel": "High",
                "risks": [
                    {"riskStrategy": "Sanctions", "riskDetails": [{"riskName": "OFAC", "rate": 0.1234, "amount": 1000.5}]},
                    {"riskStrategy": "Mixer", "riskDetails": null}
                ]
            }
        }"#;
        let resp: TransactionRiskResponse = serde_json::from_str(body).unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data.score, 85.5);
        assert_eq!(data.risk_level, RiskLevel::High);
        assert_eq!(data.risks.len(), 2);
        assert_eq!(data.risks[0].risk_details[0].risk_name, "OFAC");
        assert_eq!(data.risks[0].risk_details[0].rate, 0.1234);
        assert!(data.risks[1].risk_details.is_empty());
    }

    #[test]
    fn test_decode_address_risk_sparse() {
        let body = r#"{"code":200,"msg":"ok","data":{"score":10,"riskLevel":"Low","incomingDetail":null,"riskTagDetails":["Gambling"]}}"#;
        let resp: AddressRiskResponse = serde_json::from_str(body).unwrap();
        let data = resp.data.unwrap();
        assert_eq!(data.risk_level, RiskLevel::Low);
        assert!(data.incoming_detail.is_empty());
        assert_eq!(data.outgoing_level, RiskLevel::Unknown);
        assert_eq!(data.risk_tag_details, vec!["Gambling".to_string()]);
    }

    #[test]
    fn test_decode_malicious_address() {
        let body = r#"{
            "code": 200,
            "msg": "ok",
            "data": {
                "address": "0x901bb9583b24d97e995513c6778dc6888ab6870e",
                "isMalicious": true,
                "maliceDetail": {"source": "Beosin", "maliceTags": [{"tagType": "Hacker", "tag": "Exploit"}]},
                "isSanction": true,
                "sanctionDetail": {"standard": "OFAC", "tag": "SDN", "entity": "Lazarus", "country": "KP", "source": "https://ofac.treasury.gov"},
                "isInCustomerBlackList": false
            }
        }"#;
        let resp: MaliciousAddressResponse = serde_json::from_str(body).unwrap();
        let data = resp.data.unwrap();
        assert!(data.is_malicious);
        assert_eq!(data.malice_detail.unwrap().malice_tags[0].tag_type, "Hacker");
        assert_eq!(data.sanction_detail.unwrap().standard, "OFAC");
        assert!(!data.is_in_customer_black_list);
    }

    #[test]
    fn test_decode_vasp() {
        let body = r#"{"code":200,"msg":"ok","data":{"address":"0xec6a","isVasp":true,"vaspTags":["Binance"]}}"#;
        let resp: VaspResponse = serde_json::from_str(body).unwrap();
        let data = resp.data.unwrap();
        assert!(data.is_vasp);
        assert_eq!(data.vasp_tags, vec!["Binance".to_string()]);
    }

    #[test]
    fn test_null_scalars_take_defaults() {
        let body = r#"{"code":200,"msg":"ok","data":{"address":null,"isVasp":false,"vaspTags":null}}"#;
        let data = serde_json::from_str::<VaspResponse>(body).unwrap().data.unwrap();
        assert_eq!(data.address, "");
        assert!(data.vasp_tags.is_empty());

        let body = r#"{"code":200,"msg":"ok","data":{"score":null,"riskLevel":null,"risks":[
            {"riskStrategy":null,"riskDetails":[{"riskName":null,"rate":null,"amount":1.5}]}
        ]}}"#;
        let data = serde_json::from_str::<TransactionRiskResponse>(body).unwrap().data.unwrap();
        assert_eq!(data.score, 0.0);
        assert_eq!(data.risk_level, RiskLevel::Unknown);
        assert_eq!(data.risks[0].risk_strategy, "");
        assert_eq!(data.risks[0].risk_details[0].rate, 0.0);
        assert_eq!(data.risks[0].risk_details[0].amount, 1.5);

        let body = r#"{"code":200,"msg":"ok","data":{
            "address":"0x1","isMalicious":null,"isSanction":true,
            "maliceDetail":{"source":null,"maliceTags":[{"tagType":null,"tag":"Phishing"}]},
            "sanctionDetail":{"standard":"OFAC","tag":null,"entity":null,"country":null,"source":null},
            "isInCustomerBlackList":null
        }}"#;
        let data = serde_json::from_str::<MaliciousAddressResponse>(body).unwrap().data.unwrap();
        assert!(!data.is_malicious);
        assert!(data.is_sanction);
        let malice = data.malice_detail.unwrap();
        assert_eq!(malice.source, "");
        assert_eq!(malice.malice_tags[0].tag, "Phishing");
        assert_eq!(data.sanction_detail.unwrap().entity, "");
    }

    #[test]
    fn test_request_serializes_wire_names() {
        let req = DepositRequest {
            chain_id: "1".into(),
            hash: "0xabc".into(),
            token: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({"chainId": "1", "hash": "0xabc"}));
    }
}
