//! Typed facades over the administrative API.
//!
//! # Design
//! Each facade is a thin wrapper that picks a descriptor from `catalog`,
//! binds path parameters, and delegates to the request executor. Collection
//! resources share `ResourceService<T>`. `PingAccess` builds every facade
//! over a single transport so they share one connection pool.

pub mod catalog;
mod license;
mod resource;
mod system;
mod users;

use std::sync::Arc;

pub use license::LicenseService;
pub use resource::ResourceService;
pub use system::{ConfigService, VersionService};
pub use users::UsersService;

use crate::client::Client;
use crate::config::Config;
use crate::types::{Application, Site, VirtualHost};

/// Entry point bundling every service facade.
#[derive(Clone)]
pub struct PingAccess {
    pub license: LicenseService,
    pub version: VersionService,
    pub config: ConfigService,
    pub users: UsersService,
    pub applications: ResourceService<Application>,
    pub sites: ResourceService<Site>,
    pub virtual_hosts: ResourceService<VirtualHost>,
}

impl PingAccess {
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let transport = config.transport();
        let client = |service: &str| {
            Client::with_transport(Arc::clone(&config), service, Arc::clone(&transport))
        };

        Self {
            license: LicenseService::new(client("License")),
            version: VersionService::new(client("Version")),
            config: ConfigService::new(client("Config")),
            users: UsersService::new(client("Users")),
            applications: ResourceService::new(client("Applications"), catalog::APPLICATIONS),
            sites: ResourceService::new(client("Sites"), catalog::SITES),
            virtual_hosts: ResourceService::new(client("Virtualhosts"), catalog::VIRTUAL_HOSTS),
        }
    }
}
