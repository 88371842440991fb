//! Operation descriptors: which REST call to make and with what parameters.
//!
//! An `OperationSpec` is a static catalog entry with a path template such as
//! `/users/{id}`. Binding it produces an `Operation` whose path is fully
//! resolved. Query parameters are kept sorted so the encoded URL is stable.

use std::collections::BTreeMap;

use crate::http::HttpMethod;

/// Static description of one REST endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    pub name: &'static str,
    pub method: HttpMethod,
    pub path_template: &'static str,
}

impl OperationSpec {
    pub const fn new(name: &'static str, method: HttpMethod, path_template: &'static str) -> Self {
        Self {
            name,
            method,
            path_template,
        }
    }

    /// Substitute `{key}` placeholders with the given values.
    ///
    /// Replacement is literal: values are not escaped and no other
    /// characters of the template change.
    pub fn bind(&self, params: &[(&str, &str)]) -> Operation {
        let mut path = self.path_template.to_string();
        for (key, value) in params {
            path = path.replace(&format!("{{{key}}}"), value);
        }
        Operation {
            name: self.name.to_string(),
            method: self.method,
            path,
            query: BTreeMap::new(),
        }
    }

    /// Bind a template with no placeholders.
    pub fn operation(&self) -> Operation {
        self.bind(&[])
    }
}

/// A resolved REST call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub method: HttpMethod,
    pub path: String,
    pub query: BTreeMap<String, String>,
}

impl Operation {
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    pub fn with_list_params(mut self, params: &ListParams) -> Self {
        for (key, value) in params.to_query() {
            self.query.insert(key.to_string(), value);
        }
        self
    }

    /// Path plus percent-encoded query string.
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{query}", self.path)
    }
}

/// Paging, filtering and sorting parameters accepted by list endpoints.
///
/// Only one page is requested per call; callers iterate themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub page: Option<u32>,
    pub number_per_page: Option<u32>,
    pub filter: Option<String>,
    pub name: Option<String>,
    pub sort_key: Option<String>,
    pub order: Option<SortOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl ListParams {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(n) = self.number_per_page {
            query.push(("numberPerPage", n.to_string()));
        }
        if let Some(filter) = &self.filter {
            query.push(("filter", filter.clone()));
        }
        if let Some(name) = &self.name {
            query.push(("name", name.clone()));
        }
        if let Some(sort_key) = &self.sort_key {
            query.push(("sortKey", sort_key.clone()));
        }
        if let Some(order) = self.order {
            query.push(("order", order.as_str().to_string()));
        }
        query
    }
}
