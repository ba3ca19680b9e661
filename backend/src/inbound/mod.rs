//! Inbound adapters that translate external requests into domain port calls.
//!
//! The HTTP adapter in [`http`] is the only transport.

pub mod http;
