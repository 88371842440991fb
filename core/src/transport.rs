//! The seam between request execution and the network.
//!
//! # Design
//! `Transport` takes a fully built `HttpRequest` and returns whatever the
//! server answered, non-2xx included. Status interpretation stays in the
//! request executor. Each configuration owns its transport; nothing here
//! touches process-wide TLS state.

use crate::error::BoxError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes one HTTP round trip.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError>;
}

/// Blocking transport backed by a ureq agent.
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Build an agent that returns 4xx/5xx responses as data.
    ///
    /// `verify_tls = false` accepts any server certificate.
    pub fn new(verify_tls: bool) -> Self {
        let tls = ureq::tls::TlsConfig::builder()
            .disable_verification(!verify_tls)
            .build();
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .tls_config(tls)
            .build()
            .new_agent();
        Self { agent }
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (key, value) in headers {
        builder = builder.header(key.as_str(), value.as_str());
    }
    builder
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, BoxError> {
        let url = request.url.as_str();
        let headers = request.headers.as_slice();

        let mut response = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, _) => with_headers(self.agent.get(url), headers).call(),
            (HttpMethod::Delete, _) => with_headers(self.agent.delete(url), headers).call(),
            (HttpMethod::Post, Some(body)) => {
                with_headers(self.agent.post(url), headers).send(body.as_bytes())
            }
            (HttpMethod::Post, None) => with_headers(self.agent.post(url), headers).send_empty(),
            (HttpMethod::Put, Some(body)) => {
                with_headers(self.agent.put(url), headers).send(body.as_bytes())
            }
            (HttpMethod::Put, None) => with_headers(self.agent.put(url), headers).send_empty(),
        }?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    String::from_utf8_lossy(v.as_bytes()).into_owned(),
                )
            })
            .collect();
        // Unbounded; ureq otherwise stops at 10 MiB.
        let body = response
            .body_mut()
            .with_config()
            .limit(u64::MAX)
            .read_to_string()?;

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
