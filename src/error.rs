//! Error types returned by the client.
//!
//! Every call fails with exactly one of three kinds:
//! - [`Error::Transport`]: connection failure, timeout or non-200 HTTP status
//! - [`Error::Decode`]: body is not JSON or does not match the expected shape
//! - [`Error::Api`]: well-formed envelope whose `code` is not 200
//!
//! Only [`ApiError`] is meant to be branched on programmatically, via its
//! named predicates.

use thiserror::Error;

pub use crate::client::transport::TransportError;

/// Invalid request parameters.
pub const ERR_CODE_PARAMETER_ERROR: i64 = 40001;
/// Platform or chain not supported.
pub const ERR_CODE_PLATFORM_NOT_SUPPORTED: i64 = 40021;
/// Malformed address.
pub const ERR_CODE_ADDRESS_ERROR: i64 = 40022;
/// Malformed transaction hash.
pub const ERR_CODE_TX_HASH_ERROR: i64 = 40023;
/// Transaction hash not found on chain.
pub const ERR_CODE_TX_HASH_NOT_EXIST: i64 = 41023;
/// Token standard other than ERC20 is not supported.
pub const ERR_CODE_NON_ERC20_NOT_SUPPORTED: i64 = 41024;
/// Contract address is not supported.
pub const ERR_CODE_CONTRACT_NOT_SUPPORTED: i64 = 41026;
/// Token is not part of the supported basket.
pub const ERR_CODE_TOKEN_NOT_IN_BASKET: i64 = 41035;
/// Risk computation is still running server side; poll again later.
pub const ERR_CODE_TASK_EXECUTING: i64 = 41038;

/// Well-known API failure codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    ParameterError,
    PlatformNotSupported,
    AddressError,
    TxHashError,
    TxHashNotExist,
    NonErc20NotSupported,
    ContractNotSupported,
    TokenNotInBasket,
    TaskExecuting,
    /// Any code not listed above. Inspect `code` and `message` directly.
    Other,
}

impl ApiErrorKind {
    /// Classify a raw envelope code.
    pub fn from_code(code: i64) -> Self {
        match code {
            ERR_CODE_PARAMETER_ERROR => Self::ParameterError,
            ERR_CODE_PLATFORM_NOT_SUPPORTED => Self::PlatformNotSupported,
            ERR_CODE_ADDRESS_ERROR => Self::AddressError,
            ERR_CODE_TX_HASH_ERROR => Self::TxHashError,
            ERR_CODE_TX_HASH_NOT_EXIST => Self::TxHashNotExist,
            ERR_CODE_NON_ERC20_NOT_SUPPORTED => Self::NonErc20NotSupported,
            ERR_CODE_CONTRACT_NOT_SUPPORTED => Self::ContractNotSupported,
            ERR_CODE_TOKEN_NOT_IN_BASKET => Self::TokenNotInBasket,
            ERR_CODE_TASK_EXECUTING => Self::TaskExecuting,
            _ => Self::Other,
        }
    }
}

/// Error reported by the API inside a successful HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("beosin api error: code={code}, message={message}")]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

impl ApiError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ApiErrorKind {
        ApiErrorKind::from_code(self.code)
    }

    pub fn is_parameter_error(&self) -> bool {
        self.kind() == ApiErrorKind::ParameterError
    }

    pub fn is_platform_not_supported(&self) -> bool {
        self.kind() == ApiErrorKind::PlatformNotSupported
    }

    pub fn is_address_error(&self) -> bool {
        self.kind() == ApiErrorKind::AddressError
    }

    pub fn is_tx_hash_error(&self) -> bool {
        self.kind() == ApiErrorKind::TxHashError
    }

    pub fn is_tx_hash_not_exist(&self) -> bool {
        self.kind() == ApiErrorKind::TxHashNotExist
    }

    pub fn is_non_erc20_not_supported(&self) -> bool {
        self.kind() == ApiErrorKind::NonErc20NotSupported
    }

    pub fn is_contract_not_supported(&self) -> bool {
        self.kind() == ApiErrorKind::ContractNotSupported
    }

    pub fn is_token_not_in_basket(&self) -> bool {
        self.kind() == ApiErrorKind::TokenNotInBasket
    }

    /// The remote assessment is asynchronous and has not finished yet.
    ///
    /// The client never retries on its own; polling policy belongs to the caller.
    pub fn is_task_executing(&self) -> bool {
        self.kind() == ApiErrorKind::TaskExecuting
    }
}

/// Errors that can occur while calling the API.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure or non-200 HTTP status.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Response body did not match the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API answered with a non-200 envelope code.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Client could not be constructed from the given options.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// The API error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_task_executing(&self) -> bool {
        self.api_error().is_some_and(ApiError::is_task_executing)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;
