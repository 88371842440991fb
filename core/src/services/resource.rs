//! Generic CRUD facade shared by every collection resource.
//!
//! The per-resource facades differ only in path and model, so a single
//! `ResourceService<T>` driven by a `ResourceOperations` table entry covers
//! applications, sites and virtual hosts.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::Client;
use crate::error::ApiError;
use crate::http::HttpResponse;
use crate::operation::ListParams;
use crate::request::Response;
use crate::services::catalog::ResourceOperations;
use crate::types::ItemsView;

pub struct ResourceService<T> {
    client: Client,
    operations: ResourceOperations,
    _model: PhantomData<fn() -> T>,
}

impl<T> Clone for ResourceService<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            operations: self.operations,
            _model: PhantomData,
        }
    }
}

impl<T> ResourceService<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(client: Client, operations: ResourceOperations) -> Self {
        Self {
            client,
            operations,
            _model: PhantomData,
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Fetch one page of the collection.
    pub fn list(&self, params: &ListParams) -> Result<Response<ItemsView<T>>, ApiError> {
        let operation = self.operations.list.operation().with_list_params(params);
        self.client.new_request(operation).send()
    }

    pub fn get(&self, id: &str) -> Result<Response<T>, ApiError> {
        let operation = self.operations.get.bind(&[("id", id)]);
        self.client.new_request(operation).send()
    }

    pub fn create(&self, input: &T) -> Result<Response<T>, ApiError> {
        let operation = self.operations.create.operation();
        self.client.new_request(operation).with_json(input)?.send()
    }

    pub fn update(&self, id: &str, input: &T) -> Result<Response<T>, ApiError> {
        let operation = self.operations.update.bind(&[("id", id)]);
        self.client.new_request(operation).with_json(input)?.send()
    }

    pub fn delete(&self, id: &str) -> Result<HttpResponse, ApiError> {
        let operation = self.operations.delete.bind(&[("id", id)]);
        self.client.new_request::<()>(operation).execute()
    }
}
