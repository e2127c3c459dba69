//! KYT v2/v3: transaction assessment, address risk, tag lookups.

use crate::client::pipeline::build_query_params;
use crate::client::Client;
use crate::error::Result;
use crate::types::{
    AddressRiskRequest, AddressRiskResponse, DepositRequest, MaliciousAddressRequest, MaliciousAddressResponse,
    TransactionRiskResponse, VaspRequest, VaspResponse, WithdrawalRequest,
};

pub const ENDPOINT_DEPOSIT: &str = "/api/v2/kyt/tx/deposit";
pub const ENDPOINT_WITHDRAW: &str = "/api/v2/kyt/tx/withdraw";
pub const ENDPOINT_ADDRESS_RISK: &str = "/api/v3/kyt/address/risk";
pub const ENDPOINT_MALICIOUS_ADDRESS: &str = "/api/v2/kyt/tag/malicious";
pub const ENDPOINT_VASP: &str = "/api/v2/kyt/tag/vasp";

impl Client {
    /// Risk assessment of an incoming transaction.
    ///
    /// May fail with task-executing while the server computes the score.
    pub async fn deposit_transaction_assessment(&self, req: &DepositRequest) -> Result<TransactionRiskResponse> {
        let params = build_query_params(&[
            ("chainId", req.chain_id.as_str()),
            ("hash", req.hash.as_str()),
            ("token", req.token.as_deref().unwrap_or_default()),
        ]);
        self.do_request(ENDPOINT_DEPOSIT, &params).await
    }

    /// Risk assessment of an outgoing transaction.
    pub async fn withdrawal_transaction_assessment(
        &self,
        req: &WithdrawalRequest,
    ) -> Result<TransactionRiskResponse> {
        let params = build_query_params(&[
            ("chainId", req.chain_id.as_str()),
            ("hash", req.hash.as_str()),
            ("token", req.token.as_deref().unwrap_or_default()),
        ]);
        self.do_request(ENDPOINT_WITHDRAW, &params).await
    }

    /// Risk assessment of an externally owned account.
    pub async fn eoa_address_risk_assessment(&self, req: &AddressRiskRequest) -> Result<AddressRiskResponse> {
        let params = build_query_params(&[
            ("chainId", req.chain_id.as_str()),
            ("address", req.address.as_str()),
            ("token", req.token.as_deref().unwrap_or_default()),
        ]);
        self.do_request(ENDPOINT_ADDRESS_RISK, &params).await
    }

    pub async fn malicious_address_query(&self, req: &MaliciousAddressRequest) -> Result<MaliciousAddressResponse> {
        let params = build_query_params(&[("chainId", req.chain_id.as_str()), ("address", req.address.as_str())]);
        self.do_request(ENDPOINT_MALICIOUS_ADDRESS, &params).await
    }

    /// Whether the address belongs to a virtual asset service provider.
    pub async fn vasp_query(&self, req: &VaspRequest) -> Result<VaspResponse> {
        let params = build_query_params(&[("chainId", req.chain_id.as_str()), ("address", req.address.as_str())]);
        self.do_request(ENDPOINT_VASP, &params).await
    }
}
