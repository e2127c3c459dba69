//! Wire types for requests and responses.
//!
//! Response structs are lenient: a missing field or an explicit JSON `null`
//! takes the field's default, so a sparse payload never turns into a decode
//! error.

pub mod basic;
pub mod compliance;
pub mod compliance_v4;
pub mod security;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

pub use basic::*;
pub use compliance::*;
pub use compliance_v4::*;
pub use security::*;

/// Envelope code that marks success.
pub const SUCCESS_CODE: i64 = 200;

/// Minimal envelope shared by every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Envelope {
    #[serde(deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub msg: String,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }
}

/// Full response: envelope plus endpoint-specific `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Risk level attached to scores and strategies.
///
/// Levels the client does not know are kept verbatim in `Other`, so a
/// decoded value always re-encodes to the string the server sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    Severe,
    High,
    Medium,
    Low,
    /// Empty or absent.
    #[default]
    Unknown,
    Other(String),
}

impl RiskLevel {
    /// Severe or High.
    pub fn is_high_or_above(&self) -> bool {
        matches!(self, RiskLevel::Severe | RiskLevel::High)
    }

    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Severe => "Severe",
            RiskLevel::High => "High",
            RiskLevel::Medium => "Medium",
            RiskLevel::Low => "Low",
            RiskLevel::Unknown => "",
            RiskLevel::Other(raw) => raw,
        }
    }
}

impl From<String> for RiskLevel {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Severe" => RiskLevel::Severe,
            "High" => RiskLevel::High,
            "Medium" => RiskLevel::Medium,
            "Low" => RiskLevel::Low,
            "" => RiskLevel::Unknown,
            _ => RiskLevel::Other(raw),
        }
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        match level {
            RiskLevel::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a flagged counterparty is reached directly or through hops (v4).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Exposure {
    Direct,
    Indirect,
    #[default]
    Unknown,
    Other(String),
}

impl Exposure {
    pub fn as_str(&self) -> &str {
        match self {
            Exposure::Direct => "Direct",
            Exposure::Indirect => "Indirect",
            Exposure::Unknown => "",
            Exposure::Other(raw) => raw,
        }
    }
}

impl From<String> for Exposure {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Direct" => Exposure::Direct,
            "Indirect" => Exposure::Indirect,
            "" => Exposure::Unknown,
            _ => Exposure::Other(raw),
        }
    }
}

impl From<Exposure> for String {
    fn from(exposure: Exposure) -> Self {
        match exposure {
            Exposure::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Exposure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Treat JSON `null` as the type's default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let env: Envelope = serde_json::from_str(r#"{"code":200,"msg":"ok","data":{"x":1}}"#).unwrap();
        assert!(env.is_success());

        let env: Envelope = serde_json::from_str(r#"{"code":41038,"msg":"Task is executing"}"#).unwrap();
        assert!(!env.is_success());
        assert_eq!(env.msg, "Task is executing");
    }

    #[test]
    fn test_missing_data_is_none() {
        let resp: ApiResponse<AccountBalanceData> = serde_json::from_str(r#"{"code":200,"msg":"ok"}"#).unwrap();
        assert!(resp.is_success());
        assert!(resp.data.is_none());

        let resp: ApiResponse<AccountBalanceData> =
            serde_json::from_str(r#"{"code":200,"msg":"ok","data":null}"#).unwrap();
        assert!(resp.into_data().is_none());
    }

    #[test]
    fn test_risk_level_parsing() {
        let level: RiskLevel = serde_json::from_str(r#""Severe""#).unwrap();
        assert_eq!(level, RiskLevel::Severe);
        assert!(level.is_high_or_above());

        let level: RiskLevel = serde_json::from_str(r#""""#).unwrap();
        assert_eq!(level, RiskLevel::Unknown);

        let level: RiskLevel = serde_json::from_str(r#""Low""#).unwrap();
        assert!(!level.is_high_or_above());
    }

    #[test]
    fn test_exposure_parsing() {
        let e: Exposure = serde_json::from_str(r#""Indirect""#).unwrap();
        assert_eq!(e, Exposure::Indirect);
        let e: Exposure = serde_json::from_str(r#""Sideways""#).unwrap();
        assert_eq!(e, Exposure::Other("Sideways".into()));
    }

    #[test]
    fn test_envelope_null_fields() {
        let env: Envelope = serde_json::from_str(r#"{"code":41038,"msg":null}"#).unwrap();
        assert_eq!(env.code, 41038);
        assert_eq!(env.msg, "");

        let env: Envelope = serde_json::from_str(r#"{"code":null,"msg":null}"#).unwrap();
        assert_eq!(env, Envelope::default());

        let resp: ApiResponse<AccountBalanceData> =
            serde_json::from_str(r#"{"code":200,"msg":null,"data":null}"#).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.msg, "");
    }

    #[test]
    fn test_unrecognised_levels_keep_raw_text() {
        let body = r#"{"score":10.0,"riskLevel":"Critical","risks":[]}"#;
        let data: TransactionRiskData = serde_json::from_str(body).unwrap();
        assert_eq!(data.risk_level, RiskLevel::Other("Critical".into()));
        assert!(!data.risk_level.is_high_or_above());
        assert_eq!(serde_json::to_string(&data).unwrap(), body);

        let level: RiskLevel = serde_json::from_str(r#""high""#).unwrap();
        assert_eq!(level.to_string(), "high");
        assert_eq!(serde_json::to_value(&level).unwrap(), "high");
    }

    #[test]
    fn test_known_levels_round_trip() {
        for raw in ["Severe", "High", "Medium", "Low", ""] {
            let level = RiskLevel::from(raw.to_string());
            assert!(!matches!(level, RiskLevel::Other(_)), "{}", raw);
            assert_eq!(String::from(level), raw);
        }
        let body = r#"{"riskStrategy":"Mixer","exposure":"Sideways","riskLevel":"","hops":0,"rate":0.0,"amount":0.0,"entityDetails":[]}"#;
        let risk: V4Risk = serde_json::from_str(body).unwrap();
        assert_eq!(risk.risk_level, RiskLevel::Unknown);
        assert_eq!(serde_json::to_string(&risk).unwrap(), body);
    }
}
