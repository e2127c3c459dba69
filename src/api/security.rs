use crate::client::pipeline::build_query_params;
use crate::client::Client;
use crate::error::Result;
use crate::types::{BlackScreeningRequest, BlackScreeningResponse};

pub const ENDPOINT_BLACK_SCREENING: &str = "/api/v1/tag/black/screening";

impl Client {
    /// Screen an address against sanction and black lists.
    pub async fn black_address_screening(&self, req: &BlackScreeningRequest) -> Result<BlackScreeningResponse> {
        let params = build_query_params(&[("platform", req.platform.as_str()), ("address", req.address.as_str())]);
        self.do_request(ENDPOINT_BLACK_SCREENING, &params).await
    }
}
