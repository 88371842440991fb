//! Plain-data HTTP types shared by the request executor and transports.
//!
//! # Design
//! Requests and responses are described as owned values. The executor builds
//! an `HttpRequest`, hands it to a `Transport`, and classifies the
//! `HttpResponse` it gets back. Keeping these as data means the build and
//! classify halves can be tested without a socket, and the raw response can
//! travel inside an `ApiError` for callers that need status introspection.

use std::fmt::{self, Write as _};

use serde::de::DeserializeOwned;

/// Replacement text for the Authorization header value in debug dumps.
pub const MASKED_AUTHORIZATION: &str = "********";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute: endpoint, resolved path and encoded query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value matching `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Decode the body as JSON into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// Render a request the way it would appear on the wire.
///
/// When `mask_authorization` is set the Authorization header value is
/// replaced by [`MASKED_AUTHORIZATION`].
pub fn dump_request(request: &HttpRequest, mask_authorization: bool) -> String {
    let mut out = String::new();
    let _ = write!(out, "{} {} HTTP/1.1\r\n", request.method, request.url);
    for (key, value) in &request.headers {
        let value = if mask_authorization && key.eq_ignore_ascii_case("authorization") {
            MASKED_AUTHORIZATION
        } else {
            value.as_str()
        };
        let _ = write!(out, "{key}: {value}\r\n");
    }
    out.push_str("\r\n");
    if let Some(body) = &request.body {
        out.push_str(body);
    }
    out
}

/// Render a response status line, headers and body.
pub fn dump_response(response: &HttpResponse) -> String {
    let mut out = String::new();
    let _ = write!(out, "HTTP/1.1 {}\r\n", response.status);
    for (key, value) in &response.headers {
        let _ = write!(out, "{key}: {value}\r\n");
    }
    out.push_str("\r\n");
    out.push_str(&response.body);
    out
}
