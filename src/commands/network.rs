//! The `ip` command: one blocking GET against an IP-geolocation endpoint.

use anyhow::Result;
use serde::Deserialize;

use crate::config;
use crate::error::CommandError;
use crate::output::CommandOutput;

/// Placeholder used when the response omits a field.
const FIELD_MISSING: &str = "not found";

/// Response body of the lookup endpoint. The wire format is a third-party
/// contract, so both fields are optional and extras are ignored.
#[derive(Debug, Deserialize)]
struct IpLookup {
    ip: Option<String>,
    country: Option<String>,
}

/// `ip()`: fetch the caller's public IP and country, formatted as
/// `"IP: <ip>, <country>"`.
///
/// Swallow-and-report: any transport or decoding failure is caught and its
/// description returned as the text result. No retry, no timeout override,
/// no caching; the call blocks until the transport resolves it.
pub fn ip(_args: &[&str]) -> Result<CommandOutput, CommandError> {
    let text = match fetch_ip_info() {
        Ok(formatted) => formatted,
        Err(e) => {
            tracing::warn!("ip lookup failed: {e:#}");
            e.to_string()
        }
    };
    Ok(CommandOutput::Text(text))
}

fn fetch_ip_info() -> Result<String> {
    let endpoint = config::get_ip_endpoint();
    tracing::debug!("requesting ip info from {endpoint}");

    let body = reqwest::blocking::get(&endpoint)?
        .error_for_status()?
        .text()?;
    let lookup: IpLookup = serde_json::from_str(&body)?;

    let ip = lookup.ip.unwrap_or_else(|| FIELD_MISSING.to_string());
    let country = lookup.country.unwrap_or_else(|| FIELD_MISSING.to_string());
    Ok(format!("IP: {ip}, {country}"))
}
