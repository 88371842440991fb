//! Every REST endpoint the facades call, as static descriptors.

use crate::http::HttpMethod;
use crate::operation::OperationSpec;

pub const GET_LICENSE: OperationSpec =
    OperationSpec::new("GetLicenseCommand", HttpMethod::Get, "/license");

pub const GET_VERSION: OperationSpec =
    OperationSpec::new("VersionCommand", HttpMethod::Get, "/version");

pub const EXPORT_CONFIG: OperationSpec =
    OperationSpec::new("ConfigExportCommand", HttpMethod::Get, "/config/export");

pub const GET_USERS: OperationSpec =
    OperationSpec::new("GetUsersCommand", HttpMethod::Get, "/users");
pub const GET_USER: OperationSpec =
    OperationSpec::new("GetUserCommand", HttpMethod::Get, "/users/{id}");
pub const UPDATE_USER: OperationSpec =
    OperationSpec::new("UpdateUserCommand", HttpMethod::Put, "/users/{id}");

/// CRUD descriptors for a collection resource such as `/sites`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceOperations {
    pub list: OperationSpec,
    pub get: OperationSpec,
    pub create: OperationSpec,
    pub update: OperationSpec,
    pub delete: OperationSpec,
}

macro_rules! resource_operations {
    ($name:ident, $plural:literal, $singular:literal, $path:literal) => {
        pub const $name: ResourceOperations = ResourceOperations {
            list: OperationSpec::new(concat!("Get", $plural, "Command"), HttpMethod::Get, $path),
            get: OperationSpec::new(
                concat!("Get", $singular, "Command"),
                HttpMethod::Get,
                concat!($path, "/{id}"),
            ),
            create: OperationSpec::new(
                concat!("Add", $singular, "Command"),
                HttpMethod::Post,
                $path,
            ),
            update: OperationSpec::new(
                concat!("Update", $singular, "Command"),
                HttpMethod::Put,
                concat!($path, "/{id}"),
            ),
            delete: OperationSpec::new(
                concat!("Delete", $singular, "Command"),
                HttpMethod::Delete,
                concat!($path, "/{id}"),
            ),
        };
    };
}

resource_operations!(APPLICATIONS, "Applications", "Application", "/applications");
resource_operations!(SITES, "Sites", "Site", "/sites");
resource_operations!(VIRTUAL_HOSTS, "VirtualHosts", "VirtualHost", "/virtualhosts");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_table_expands_paths_and_names() {
        assert_eq!(SITES.list.path_template, "/sites");
        assert_eq!(SITES.get.path_template, "/sites/{id}");
        assert_eq!(SITES.create.method, HttpMethod::Post);
        assert_eq!(SITES.delete.name, "DeleteSiteCommand");
        assert_eq!(VIRTUAL_HOSTS.update.name, "UpdateVirtualHostCommand");
        assert_eq!(APPLICATIONS.list.name, "GetApplicationsCommand");
    }
}
