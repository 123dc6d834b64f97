//! Messenger-agnostic update model and outbound port.

pub mod port;
pub mod types;
