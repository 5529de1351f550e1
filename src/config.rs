use serde::Deserialize;

fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_shutdown_timeout() -> u64 {
    30u64
}

fn default_catalog_endpoint() -> String {
    store_catalog::DEFAULT_ENDPOINT.to_string()
}

fn default_request_timeout() -> u64 {
    15u64
}

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Config {
    #[serde(default = "default_bind_address")]
    pub(crate) bind_address: String,
    #[serde(default = "default_shutdown_timeout")]
    pub(crate) shutdown_timeout: u64,
    #[serde(default = "default_catalog_endpoint")]
    pub(crate) catalog_endpoint: String,
    /// Seconds before an outbound catalog request is abandoned.
    #[serde(default = "default_request_timeout")]
    pub(crate) request_timeout: u64,
}

impl Config {
    pub(crate) fn from_env() -> Self {
        match envy::from_env::<Self>() {
            Ok(config) => config,
            Err(error) => panic!("Invalid environment variable: {:#?}", error),
        }
    }
}
