//! Endpoint methods on [`Client`](crate::Client).
//!
//! Each method maps its request struct to wire parameter names, calls the
//! shared pipeline with a fixed path and returns the result untouched.

pub mod basic;
pub mod compliance;
pub mod compliance_v4;
pub mod security;

pub use basic::ENDPOINT_ACCOUNT_BALANCE;
pub use compliance::{
    ENDPOINT_ADDRESS_RISK, ENDPOINT_DEPOSIT, ENDPOINT_MALICIOUS_ADDRESS, ENDPOINT_VASP, ENDPOINT_WITHDRAW,
};
pub use compliance_v4::{ENDPOINT_V4_ADDRESS_RISK, ENDPOINT_V4_DEPOSIT, ENDPOINT_V4_WITHDRAW};
pub use security::ENDPOINT_BLACK_SCREENING;
