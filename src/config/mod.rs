//! Configuration for building a client from a file.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ClientConfig::into_builder()
//!     → Client (immutable)
//! ```
//!
//! The library itself never reads files or environment variables; this
//! module exists for binaries and tests.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, read_config, ConfigError};
pub use schema::ClientConfig;
pub use validation::{validate_config, ValidationError};
