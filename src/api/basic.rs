use crate::client::pipeline::QueryParams;
use crate::client::Client;
use crate::error::Result;
use crate::types::AccountBalanceResponse;

pub const ENDPOINT_ACCOUNT_BALANCE: &str = "/api/v1/package/info";

impl Client {
    /// Remaining credits and package validity.
    pub async fn get_account_balance(&self) -> Result<AccountBalanceResponse> {
        self.do_request(ENDPOINT_ACCOUNT_BALANCE, &QueryParams::new()).await
    }
}
