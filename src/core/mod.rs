//! Core plumbing for the prediction league client
//!
//! - `config`: where the service lives and how to authenticate to it
//! - `http`: the transport seam and its reqwest implementation

pub mod config;
pub mod http;

// Re-export commonly used items for convenience
pub use config::{config_path, ClientConfig};
pub use http::{
    BasicAuth, FailureResponse, HttpMethod, HttpRequest, HttpResponse, ReqwestTransport,
    Transport, TransportFailure,
};
