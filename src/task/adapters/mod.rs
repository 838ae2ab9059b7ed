//! Adapter implementations for task ports and transports.

pub mod http;
pub mod memory;
