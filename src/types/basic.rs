//! Account package types.

use serde::{Deserialize, Serialize};

use crate::types::{null_as_default, ApiResponse};

/// Remaining credits and the validity window of the current package.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountBalanceData {
    /// Remaining credits.
    #[serde(deserialize_with = "null_as_default")]
    pub surplus_integral: i64,
    /// Unix timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub equity_start_date: i64,
    /// Unix timestamp.
    #[serde(deserialize_with = "null_as_default")]
    pub equity_end_date: i64,
}

pub type AccountBalanceResponse = ApiResponse<AccountBalanceData>;
