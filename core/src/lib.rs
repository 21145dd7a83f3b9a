//! Synchronous client for the CodeBoard board-sharing API.
//!
//! # Overview
//! Wraps the four remote operations — `ping`, `teapot`, `fetch`, `save` —
//! behind a single [`BoardClient`], handling request construction,
//! authorization headers, local validation of save bodies, and URL
//! derivation on the results. The actual HTTP round-trip is performed by a
//! caller-supplied [`Transport`], so the crate itself never touches the
//! network and every operation is testable with a closure.
//!
//! # Design
//! - `BoardClient` is immutable after construction — an API key and a base
//!   URL, nothing else. Operations take `&self` and run independently.
//! - Each operation is split into `build_*` (produces a request) and
//!   `parse_*` (consumes a response), with a composed method driving the
//!   transport between the two.
//! - Every failure funnels into [`BoardError`], tagged with the name of the
//!   operation that raised it.
//! - No retries, caching, or timeouts; timeout policy belongs to the
//!   transport.

pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use client::{BoardClient, DEFAULT_BASE_URL};
pub use error::BoardError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, TransportError};
pub use types::{BoardFile, FetchResult, Fork, SaveRequest, SaveResult};
