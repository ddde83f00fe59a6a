// src/services/mod.rs
//
// Network services used by the form module

pub mod request;

#[cfg(test)]
pub(crate) mod mock;


// Re-export commonly used types for convenience
pub use request::{Dispatcher, RequestOutcome, ReqwestTransport, Transport};
