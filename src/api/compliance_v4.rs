//! KYT v4 endpoints.

use crate::client::pipeline::build_query_params;
use crate::client::Client;
use crate::error::Result;
use crate::types::{
    AddressRiskRequest, DepositRequest, V4AddressRiskResponse, V4TransactionRiskResponse, WithdrawalRequest,
};

pub const ENDPOINT_V4_ADDRESS_RISK: &str = "/api/v4/kyt/address/risk";
pub const ENDPOINT_V4_DEPOSIT: &str = "/api/v4/kyt/tx/deposit";
pub const ENDPOINT_V4_WITHDRAW: &str = "/api/v4/kyt/tx/withdraw";

impl Client {
    pub async fn v4_eoa_address_risk_assessment(&self, req: &AddressRiskRequest) -> Result<V4AddressRiskResponse> {
        let params = build_query_params(&[
            ("chainId", req.chain_id.as_str()),
            ("address", req.address.as_str()),
            ("token", req.token.as_deref().unwrap_or_default()),
        ]);
        self.do_request(ENDPOINT_V4_ADDRESS_RISK, &params).await
    }

    pub async fn v4_deposit_transaction_assessment(
        &self,
        req: &DepositRequest,
    ) -> Result<V4TransactionRiskResponse> {
        let params = build_query_params(&[
            ("chainId", req.chain_id.as_str()),
            ("hash", req.hash.as_str()),
            ("token", req.token.as_deref().unwrap_or_default()),
        ]);
        self.do_request(ENDPOINT_V4_DEPOSIT, &params).await
    }

    pub async fn v4_withdrawal_transaction_assessment(
        &self,
        req: &WithdrawalRequest,
    ) -> Result<V4TransactionRiskResponse> {
        let params = build_query_params(&[
            ("chainId", req.chain_id.as_str()),
            ("hash", req.hash.as_str()),
            ("token", req.token.as_deref().unwrap_or_default()),
        ]);
        self.do_request(ENDPOINT_V4_WITHDRAW, &params).await
    }
}
