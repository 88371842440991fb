//! Typed client core for the PingAccess administrative REST API.
//!
//! # Overview
//! Every call goes through the same path: a service facade picks an
//! `OperationSpec` from the catalog, binds path parameters into an
//! `Operation`, and hands it to a `Request`. The request attaches Basic
//! credentials, sends exactly one HTTP exchange through a `Transport`, and
//! either decodes the 2xx JSON body or returns a classified `ApiError` that
//! still carries the raw response.
//!
//! # Design
//! - `Config` is built once and shared read-only behind an `Arc`.
//! - TLS verification is on by default and scoped to the transport the
//!   configuration builds; it is never changed process-wide.
//! - No retries, no pagination loops, no caching. Callers see every failure.
//! - Debug dumps go through `tracing` and mask the Authorization header
//!   unless masking is explicitly turned off.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod operation;
pub mod request;
pub mod services;
pub mod transport;
pub mod types;

pub use client::{Client, ClientInfo, API_VERSION};
pub use config::Config;
pub use error::{ApiError, BoxError, ConfigError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use operation::{ListParams, Operation, OperationSpec, SortOrder};
pub use request::{Request, Response};
pub use services::PingAccess;
pub use transport::{Transport, UreqTransport};
pub use types::{
    ApiErrorView, Application, ItemsView, LicenseView, Site, UserView, VersionView, VirtualHost,
};
