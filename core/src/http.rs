//! HTTP transport types and the external-transport seam.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The core
//! crate builds `HttpRequest` values and interprets `HttpResponse` values
//! without ever opening a socket — the actual round-trip belongs to a
//! caller-supplied [`Transport`]. This keeps the client deterministic and
//! lets tests stand in a transport with a single closure.
//!
//! All fields use owned types (`String`, `Vec`) so requests and responses
//! can be moved freely between threads.

use std::fmt;

/// HTTP method for a request. The CodeBoard API only uses these two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An HTTP request described as plain data.
///
/// Built by `BoardClient::build_*` methods. The transport is responsible for
/// executing this request against the network and returning the
/// corresponding `HttpResponse`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// A network-level failure reported by a [`Transport`].
///
/// Covers DNS, connect and read errors — anything that prevented a response
/// from coming back at all. A response with a non-2xx status is NOT a
/// transport error; it is returned as data and interpreted by the client.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transport failure: {}", self.message)
    }
}

impl std::error::Error for TransportError {}

/// The external collaborator that performs HTTP round-trips.
///
/// The crate never implements this itself; integration tests back it with
/// ureq and unit tests with closures.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Any plain function from request to response is a transport.
impl<F> Transport for F
where
    F: Fn(HttpRequest) -> Result<HttpResponse, TransportError>,
{
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self(request)
    }
}
