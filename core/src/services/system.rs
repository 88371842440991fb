use crate::client::Client;
use crate::error::ApiError;
use crate::request::Response;
use crate::services::catalog::{EXPORT_CONFIG, GET_VERSION};
use crate::types::VersionView;

#[derive(Clone)]
pub struct VersionService {
    client: Client,
}

impl VersionService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn get_version(&self) -> Result<Response<VersionView>, ApiError> {
        self.client.new_request(GET_VERSION.operation()).send()
    }
}

/// Backup of the whole administrative configuration.
#[derive(Clone)]
pub struct ConfigService {
    client: Client,
}

impl ConfigService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Export the configuration as an opaque JSON document.
    pub fn export(&self) -> Result<Response<serde_json::Value>, ApiError> {
        self.client.new_request(EXPORT_CONFIG.operation()).send()
    }
}
