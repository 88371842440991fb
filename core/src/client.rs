//! Per-service client handle.
//!
//! # Design
//! A `Client` pairs the shared `Config` with metadata naming the logical
//! service ("License", "Users", ...) so log lines say which facade issued a
//! call. It is cheap to clone and only ever reads its configuration, so one
//! instance can serve concurrent callers.

use std::sync::Arc;

use crate::config::Config;
use crate::operation::Operation;
use crate::request::Request;
use crate::transport::Transport;

/// Administrative API version this crate targets.
pub const API_VERSION: &str = "v3";

/// Metadata describing which service a client talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    pub service_name: String,
    pub endpoint: String,
    pub api_version: String,
}

/// Handle for one named service over a shared configuration and transport.
#[derive(Clone)]
pub struct Client {
    config: Arc<Config>,
    info: ClientInfo,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Client for `service_name` using the configuration's transport.
    pub fn new(config: Arc<Config>, service_name: &str) -> Self {
        let transport = config.transport();
        Self::with_transport(config, service_name, transport)
    }

    /// Client sharing an already-resolved transport.
    pub fn with_transport(
        config: Arc<Config>,
        service_name: &str,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let info = ClientInfo {
            service_name: service_name.to_string(),
            endpoint: config.endpoint().to_string(),
            api_version: API_VERSION.to_string(),
        };
        Self {
            config,
            info,
            transport,
        }
    }

    pub fn info(&self) -> &ClientInfo {
        &self.info
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Start a request for `operation` whose 2xx body decodes into `O`.
    pub fn new_request<O>(&self, operation: Operation) -> Request<O> {
        Request::new(
            Arc::clone(&self.config),
            self.info.clone(),
            Arc::clone(&self.transport),
            operation,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoxError;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};
    use crate::operation::OperationSpec;

    struct Unreachable;

    impl Transport for Unreachable {
        fn execute(&self, _request: &HttpRequest) -> Result<HttpResponse, BoxError> {
            Err("unreachable".into())
        }
    }

    #[test]
    fn info_carries_service_endpoint_and_version() {
        let config = Arc::new(Config::new().with_endpoint("https://host:9000/pa-admin-api/v3"));
        let client = Client::with_transport(config, "Users", Arc::new(Unreachable));
        assert_eq!(
            client.info(),
            &ClientInfo {
                service_name: "Users".to_string(),
                endpoint: "https://host:9000/pa-admin-api/v3".to_string(),
                api_version: "v3".to_string(),
            }
        );
    }

    #[test]
    fn client_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }

    #[test]
    fn new_request_targets_endpoint_plus_path() {
        let config = Arc::new(Config::new().with_endpoint("https://host:9000/pa-admin-api/v3"));
        let client = Client::with_transport(config, "Version", Arc::new(Unreachable));
        let op = OperationSpec::new("VersionCommand", HttpMethod::Get, "/version").operation();
        let req = client.new_request::<()>(op);
        assert_eq!(
            req.http_request().url,
            "https://host:9000/pa-admin-api/v3/version"
        );
    }
}
