//! One REST call: build, send, classify, decode.
//!
//! # Design
//! A `Request` is created by `Client::new_request`, optionally given a JSON
//! body, and then consumed by `send` or `execute`. Consuming it means each
//! `Request` performs exactly one round trip.
//!
//! Classification is split out into `classify` and `decode` so it can be
//! exercised against canned `HttpResponse` values without a transport.

use std::marker::PhantomData;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::client::ClientInfo;
use crate::config::Config;
use crate::error::ApiError;
use crate::http::{dump_request, dump_response, HttpRequest, HttpResponse};
use crate::operation::Operation;
use crate::transport::Transport;

/// Successful result: the decoded body together with the raw response.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<O> {
    pub output: O,
    pub http_response: HttpResponse,
}

/// A single call to one operation, decoding a 2xx body into `O`.
pub struct Request<O> {
    config: Arc<Config>,
    info: ClientInfo,
    transport: Arc<dyn Transport>,
    operation: Operation,
    http_request: HttpRequest,
    _output: PhantomData<fn() -> O>,
}

impl<O> Request<O> {
    pub(crate) fn new(
        config: Arc<Config>,
        info: ClientInfo,
        transport: Arc<dyn Transport>,
        operation: Operation,
    ) -> Self {
        let http_request = HttpRequest {
            method: operation.method,
            url: format!("{}{}", config.endpoint, operation.path_and_query()),
            headers: base_headers(&config),
            body: None,
        };
        Self {
            config,
            info,
            transport,
            operation,
            http_request,
            _output: PhantomData,
        }
    }

    /// Serialize `input` as the JSON request body.
    pub fn with_json<I: Serialize + ?Sized>(mut self, input: &I) -> Result<Self, ApiError> {
        let body = serde_json::to_string(input).map_err(ApiError::Serialization)?;
        self.http_request
            .headers
            .push(("Content-Type".to_string(), "application/json".to_string()));
        self.http_request.body = Some(body);
        Ok(self)
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn http_request(&self) -> &HttpRequest {
        &self.http_request
    }

    /// Send without an output slot; the raw response is returned on 2xx.
    pub fn execute(self) -> Result<HttpResponse, ApiError> {
        let Request {
            config,
            info,
            transport,
            operation,
            http_request,
            ..
        } = self;

        if config.debug {
            debug!(
                service = %info.service_name,
                operation = %operation.name,
                api_version = %info.api_version,
                "request:\n{}",
                dump_request(&http_request, config.mask_authorization)
            );
        }

        let response = transport
            .execute(&http_request)
            .map_err(|source| ApiError::Transport {
                operation: operation.name.clone(),
                source,
            })?;

        if config.debug {
            debug!(
                service = %info.service_name,
                operation = %operation.name,
                status = response.status,
                "response:\n{}",
                dump_response(&response)
            );
        }

        classify(&operation.name, response)
    }
}

impl<O: DeserializeOwned> Request<O> {
    /// Send and decode a 2xx body into `O`.
    pub fn send(self) -> Result<Response<O>, ApiError> {
        let name = self.operation.name.clone();
        let response = self.execute()?;
        decode(&name, response)
    }
}

fn base_headers(config: &Config) -> Vec<(String, String)> {
    let credentials = format!("{}:{}", config.username, config.password.expose_secret());
    vec![
        ("Accept".to_string(), "application/json".to_string()),
        ("X-Xsrf-Header".to_string(), "PingAccess".to_string()),
        ("User-Agent".to_string(), config.user_agent.clone()),
        (
            "Authorization".to_string(),
            format!("Basic {}", STANDARD.encode(credentials)),
        ),
    ]
}

/// Pass 2xx responses through; turn anything else into `ApiError::Status`.
pub fn classify(operation: &str, response: HttpResponse) -> Result<HttpResponse, ApiError> {
    if response.is_success() {
        return Ok(response);
    }
    Err(ApiError::Status {
        operation: operation.to_string(),
        response,
    })
}

/// Decode an already-classified 2xx response into `O`.
pub fn decode<O: DeserializeOwned>(
    operation: &str,
    response: HttpResponse,
) -> Result<Response<O>, ApiError> {
    match serde_json::from_str(&response.body) {
        Ok(output) => Ok(Response {
            output,
            http_response: response,
        }),
        Err(source) => Err(ApiError::Decode {
            operation: operation.to_string(),
            source,
            response,
        }),
    }
}
