//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! client pipeline produces:
//!     → metrics.rs (request counters, latency histogram)
//!     → tracing events (debug-mode request/response lines)
//!
//! binaries consume:
//!     → logging.rs (subscriber installation)
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber or a metrics recorder
//! - Without a recorder every metric call is a no-op

pub mod logging;
pub mod metrics;
