//! Connection settings for the PingAccess administrative API.
//!
//! # Design
//! `Config` is assembled with chained `with_*` setters and then shared
//! read-only behind an `Arc`. Setters never validate: an empty endpoint or
//! bad credentials surface later as a transport error or a 401.
//!
//! TLS verification is on unless `with_insecure_skip_verify(true)` is called,
//! which logs one warning at that point. The setting only affects the
//! transports this configuration builds.

use std::fmt;
use std::sync::Arc;

use secrecy::SecretString;

use crate::error::ConfigError;
use crate::transport::{Transport, UreqTransport};

/// Default administrative API context appended to `PINGACCESS_BASEURL`.
pub const DEFAULT_CONTEXT: &str = "/pa-admin-api/v3";

pub const DEFAULT_USER_AGENT: &str = concat!("pingaccess-core/", env!("CARGO_PKG_VERSION"));

pub struct Config {
    pub(crate) endpoint: String,
    pub(crate) username: String,
    pub(crate) password: SecretString,
    pub(crate) debug: bool,
    pub(crate) mask_authorization: bool,
    pub(crate) verify_tls: bool,
    pub(crate) user_agent: String,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            username: String::new(),
            password: SecretString::from(String::new()),
            debug: false,
            mask_authorization: true,
            verify_tls: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            transport: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &self.password)
            .field("debug", &self.debug)
            .field("mask_authorization", &self.mask_authorization)
            .field("verify_tls", &self.verify_tls)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish()
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL including the API context, e.g. `https://host:9000/pa-admin-api/v3`.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = SecretString::from(password.into());
        self
    }

    /// Log every request and response at `DEBUG` level.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Redact the Authorization header in debug logs. On by default.
    pub fn with_mask_authorization(mut self, mask: bool) -> Self {
        self.mask_authorization = mask;
        self
    }

    /// Accept any server certificate. Off by default.
    pub fn with_insecure_skip_verify(mut self, skip: bool) -> Self {
        if skip {
            tracing::warn!("TLS certificate verification is disabled for the PingAccess admin API");
        }
        self.verify_tls = !skip;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Use a caller-supplied transport instead of the default ureq agent.
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Read settings from `PINGACCESS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`] but with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("PINGACCESS_BASEURL")
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::Missing("PINGACCESS_BASEURL"))?;
        let context = lookup("PINGACCESS_CONTEXT").unwrap_or_else(|| DEFAULT_CONTEXT.to_string());
        let endpoint = format!(
            "{}/{}",
            base_url.trim_end_matches('/'),
            context.trim_start_matches('/')
        );

        let mut config = Config::new()
            .with_endpoint(endpoint)
            .with_username(lookup("PINGACCESS_USERNAME").unwrap_or_default())
            .with_password(lookup("PINGACCESS_PASSWORD").unwrap_or_default());

        if let Some(debug) = lookup_bool(&lookup, "PINGACCESS_DEBUG")? {
            config = config.with_debug(debug);
        }
        if let Some(mask) = lookup_bool(&lookup, "PINGACCESS_MASK_AUTHORIZATION")? {
            config = config.with_mask_authorization(mask);
        }
        if let Some(skip) = lookup_bool(&lookup, "PINGACCESS_INSECURE_SKIP_VERIFY")? {
            config = config.with_insecure_skip_verify(skip);
        }
        Ok(config)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    pub fn mask_authorization(&self) -> bool {
        self.mask_authorization
    }

    pub fn verify_tls(&self) -> bool {
        self.verify_tls
    }

    /// The configured transport, or a new ureq transport honouring the TLS setting.
    pub fn transport(&self) -> Arc<dyn Transport> {
        if let Some(transport) = &self.transport {
            return Arc::clone(transport);
        }
        Arc::new(UreqTransport::new(self.verify_tls))
    }
}

fn lookup_bool<F>(lookup: &F, name: &'static str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else {
        return Ok(None);
    };
    match raw.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidBool { name, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use secrecy::ExposeSecret;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    /// Run `f` and return everything logged at WARN or above.
    fn capture_warnings(f: impl FnOnce()) -> String {
        let buf = Arc::new(std::sync::Mutex::new(Vec::new()));
        let sink = Arc::clone(&buf);
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_ansi(false)
            .with_writer(move || Sink(Arc::clone(&sink)))
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.lock().unwrap();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    struct Sink(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn insecure_tls_warns_once_not_per_transport() {
        let logs = capture_warnings(|| {
            let config = Config::new()
                .with_endpoint("https://host:9000/pa-admin-api/v3")
                .with_insecure_skip_verify(true);
            let _first = config.transport();
            let _second = config.transport();
        });
        assert_eq!(logs.matches("TLS certificate verification is disabled").count(), 1, "{logs}");
    }

    #[test]
    fn verified_tls_does_not_warn() {
        let logs = capture_warnings(|| {
            let config = Config::new().with_insecure_skip_verify(false);
            let _transport = config.transport();
        });
        assert!(logs.is_empty(), "{logs}");
    }

    #[test]
    fn defaults_mask_and_verify() {
        let config = Config::new();
        assert!(config.mask_authorization());
        assert!(config.verify_tls());
        assert!(!config.debug());
        assert_eq!(config.endpoint(), "");
    }

    #[test]
    fn setters_chain() {
        let config = Config::new()
            .with_endpoint("https://host:9000/pa-admin-api/v3/")
            .with_username("Administrator")
            .with_password("2Access")
            .with_debug(true)
            .with_mask_authorization(false)
            .with_insecure_skip_verify(true);
        assert_eq!(config.endpoint(), "https://host:9000/pa-admin-api/v3");
        assert_eq!(config.username(), "Administrator");
        assert_eq!(config.password.expose_secret(), "2Access");
        assert!(config.debug());
        assert!(!config.mask_authorization());
        assert!(!config.verify_tls());
    }

    #[test]
    fn debug_output_hides_password() {
        let config = Config::new().with_password("2Access");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("2Access"), "{rendered}");
    }

    #[test]
    fn from_lookup_joins_base_url_and_default_context() {
        let config = Config::from_lookup(lookup(&[
            ("PINGACCESS_BASEURL", "https://host:9000/"),
            ("PINGACCESS_USERNAME", "Administrator"),
            ("PINGACCESS_PASSWORD", "2Access"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint(), "https://host:9000/pa-admin-api/v3");
        assert_eq!(config.username(), "Administrator");
        assert!(config.mask_authorization());
    }

    #[test]
    fn from_lookup_honours_context_and_flags() {
        let config = Config::from_lookup(lookup(&[
            ("PINGACCESS_BASEURL", "https://host:9000"),
            ("PINGACCESS_CONTEXT", "/custom/v3"),
            ("PINGACCESS_DEBUG", "TRUE"),
            ("PINGACCESS_MASK_AUTHORIZATION", "0"),
            ("PINGACCESS_INSECURE_SKIP_VERIFY", "yes"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint(), "https://host:9000/custom/v3");
        assert!(config.debug());
        assert!(!config.mask_authorization());
        assert!(!config.verify_tls());
    }

    #[test]
    fn from_lookup_requires_base_url() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("PINGACCESS_BASEURL"));
    }

    #[test]
    fn from_lookup_rejects_bad_bool() {
        let err = Config::from_lookup(lookup(&[
            ("PINGACCESS_BASEURL", "https://host:9000"),
            ("PINGACCESS_DEBUG", "sometimes"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidBool {
                name: "PINGACCESS_DEBUG",
                value: "sometimes".to_string()
            }
        );
    }
}
