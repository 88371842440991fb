//! Administrator accounts. PingAccess does not allow creating or deleting
//! users through the API, only reading and updating them.

use crate::client::Client;
use crate::error::ApiError;
use crate::operation::ListParams;
use crate::request::Response;
use crate::services::catalog::{GET_USER, GET_USERS, UPDATE_USER};
use crate::types::{ItemsView, UserView};

#[derive(Clone)]
pub struct UsersService {
    client: Client,
}

impl UsersService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn get_users(&self, params: &ListParams) -> Result<Response<ItemsView<UserView>>, ApiError> {
        let operation = GET_USERS.operation().with_list_params(params);
        self.client.new_request(operation).send()
    }

    pub fn get_user(&self, id: &str) -> Result<Response<UserView>, ApiError> {
        self.client.new_request(GET_USER.bind(&[("id", id)])).send()
    }

    pub fn update_user(&self, id: &str, input: &UserView) -> Result<Response<UserView>, ApiError> {
        self.client
            .new_request(UPDATE_USER.bind(&[("id", id)]))
            .with_json(input)?
            .send()
    }
}
