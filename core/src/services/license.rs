use crate::client::Client;
use crate::error::ApiError;
use crate::request::Response;
use crate::services::catalog::GET_LICENSE;
use crate::types::LicenseView;

#[derive(Clone)]
pub struct LicenseService {
    client: Client,
}

impl LicenseService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// The currently installed license.
    pub fn get_license(&self) -> Result<Response<LicenseView>, ApiError> {
        self.client.new_request(GET_LICENSE.operation()).send()
    }
}
