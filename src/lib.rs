//! # coursehub
//!
//! Client-side layer for the CourseHub teaching platform: typed REST endpoint
//! wrappers, the session store shared by every caller, and the route table
//! with its authentication guard.
//!
//! ARCHITECTURE
//! ============
//! - `net`: request descriptors and the `Transport` seam that actually sends
//!   them (`reqwest` natively, `gloo-net` in the browser).
//! - `api`: one method per backend endpoint, grouped by resource.
//! - `state`: the session snapshot and its persisted storage backends.
//! - `router`: static route table plus the pre-navigation guard.
//!
//! The session is an owned value injected into both `api::ApiClient` and
//! `router::Router` callers; there is no global singleton.

pub mod api;
pub mod config;
pub mod net;
pub mod router;
pub mod state;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use net::error::ClientError;
pub use state::session::{Session, SessionStore, SharedSession};
