//! Infrastructure layer: concrete implementations of the domain ports.
//!
//! The in-memory adapters record everything they are handed and are the
//! backbone of the test suites. The logging adapters stand in for real
//! side effects in local runs. The HTTP gateway is compiled in behind the
//! `gateway-http` feature.

#[cfg(feature = "gateway-http")]
pub mod http;
pub mod in_memory;
pub mod logging;
