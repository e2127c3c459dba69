//! Every endpoint method hits its fixed path with the exact wire parameter names.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use beosin::client::{HttpRequest, HttpResponse};
use beosin::{
    api, chain, AddressRiskRequest, BlackScreeningRequest, Client, DepositRequest, MaliciousAddressRequest,
    Transport, TransportError, VaspRequest, WithdrawalRequest,
};

/// Records each request URL and answers with an empty success envelope.
#[derive(Debug, Default)]
struct RecordingTransport {
    urls: Mutex<Vec<String>>,
}

impl RecordingTransport {
    fn last_url(&self) -> String {
        self.urls.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.urls.lock().unwrap().push(request.url);
        Ok(HttpResponse {
            status: 200,
            body: br#"{"code":200,"msg":"ok","data":{}}"#.to_vec(),
        })
    }
}

fn setup() -> (Client, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let client = Client::builder("id", "secret")
        .base_url("https://api.beosin.test")
        .transport(transport.clone())
        .build()
        .unwrap();
    (client, transport)
}

fn url(path: &str, query: &str) -> String {
    if query.is_empty() {
        format!("https://api.beosin.test{}", path)
    } else {
        format!("https://api.beosin.test{}?{}", path, query)
    }
}

#[tokio::test]
async fn test_account_balance() {
    let (client, transport) = setup();
    let resp = client.get_account_balance().await.unwrap();
    assert!(resp.data.is_some());
    assert_eq!(transport.last_url(), url(api::ENDPOINT_ACCOUNT_BALANCE, ""));
    assert_eq!(api::ENDPOINT_ACCOUNT_BALANCE, "/api/v1/package/info");
}

#[tokio::test]
async fn test_transaction_assessments() {
    let (client, transport) = setup();
    let deposit = DepositRequest {
        chain_id: chain::POLYGON.into(),
        hash: "0xa738".into(),
        token: Some("0x8f3c".into()),
    };
    let withdrawal = WithdrawalRequest {
        chain_id: chain::AVALANCHE.into(),
        hash: "0x1e6c".into(),
        token: None,
    };

    client.deposit_transaction_assessment(&deposit).await.unwrap();
    assert_eq!(
        transport.last_url(),
        url("/api/v2/kyt/tx/deposit", "chainId=137&hash=0xa738&token=0x8f3c")
    );

    client.withdrawal_transaction_assessment(&withdrawal).await.unwrap();
    assert_eq!(transport.last_url(), url("/api/v2/kyt/tx/withdraw", "chainId=43114&hash=0x1e6c"));

    client.v4_deposit_transaction_assessment(&deposit).await.unwrap();
    assert_eq!(
        transport.last_url(),
        url("/api/v4/kyt/tx/deposit", "chainId=137&hash=0xa738&token=0x8f3c")
    );

    client.v4_withdrawal_transaction_assessment(&withdrawal).await.unwrap();
    assert_eq!(transport.last_url(), url("/api/v4/kyt/tx/withdraw", "chainId=43114&hash=0x1e6c"));
}

#[tokio::test]
async fn test_address_risk() {
    let (client, transport) = setup();
    let req = AddressRiskRequest {
        chain_id: chain::ETH.into(),
        address: "0x013b".into(),
        token: Some("0xdac1".into()),
    };

    client.eoa_address_risk_assessment(&req).await.unwrap();
    assert_eq!(
        transport.last_url(),
        url("/api/v3/kyt/address/risk", "address=0x013b&chainId=1&token=0xdac1")
    );

    client.v4_eoa_address_risk_assessment(&req).await.unwrap();
    assert_eq!(
        transport.last_url(),
        url("/api/v4/kyt/address/risk", "address=0x013b&chainId=1&token=0xdac1")
    );
}

#[tokio::test]
async fn test_tag_queries() {
    let (client, transport) = setup();

    let resp = client
        .malicious_address_query(&MaliciousAddressRequest {
            chain_id: chain::ETH.into(),
            address: "0x901b".into(),
        })
        .await
        .unwrap();
    assert!(!resp.data.unwrap().is_malicious);
    assert_eq!(transport.last_url(), url("/api/v2/kyt/tag/malicious", "address=0x901b&chainId=1"));

    client
        .vasp_query(&VaspRequest {
            chain_id: chain::TRON.into(),
            address: "TXyz".into(),
        })
        .await
        .unwrap();
    assert_eq!(transport.last_url(), url("/api/v2/kyt/tag/vasp", "address=TXyz&chainId=79"));
}

#[tokio::test]
async fn test_black_screening() {
    let (client, transport) = setup();
    let resp = client
        .black_address_screening(&BlackScreeningRequest {
            platform: "bsc".into(),
            address: "0x3cff".into(),
        })
        .await
        .unwrap();
    assert!(!resp.data.unwrap().has_any_risk());
    assert_eq!(
        transport.last_url(),
        url("/api/v1/tag/black/screening", "address=0x3cff&platform=bsc")
    );
}
