//! Network plumbing: request descriptors, errors, wire types, transports.

pub mod error;
pub mod request;
pub mod transport;
pub mod types;

#[cfg(feature = "hydrate")]
pub mod fetch;
#[cfg(feature = "native")]
pub mod http;
