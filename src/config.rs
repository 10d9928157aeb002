//! Configuration constants and utilities for executor
//!
//! There is no configuration file; the only tunable is the IP-lookup
//! endpoint, overridable through an environment variable (useful in tests).

/// Default endpoint queried by the `ip` command
pub const DEFAULT_IP_ENDPOINT: &str = "https://api.myip.com";

/// Environment variable name for overriding the IP-lookup endpoint
pub const IP_ENDPOINT_ENV_VAR: &str = "EXECUTOR_IP_ENDPOINT";

/// Get the IP-lookup endpoint, checking the environment variable first, then falling back to default
pub fn get_ip_endpoint() -> String {
    std::env::var_os(IP_ENDPOINT_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_IP_ENDPOINT.to_string())
}
