/// Geolocation lookup client
use serde::Deserialize;

use super::client;
use crate::error::TrackerError;
use crate::models::ip_record::{IpRecord, NOT_AVAILABLE};

/// Wire shape of the lookup service's payload. Everything except `status`
/// is optional; reserved or invalid addresses come back as
/// `status: "fail"` with a `message` instead of data.
#[derive(Debug, Clone, Deserialize)]
struct GeoResponse {
    status: String,
    message: Option<String>,
    query: Option<String>,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    country: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    isp: Option<String>,
    timezone: Option<String>,
}

impl GeoResponse {
    fn into_record(self) -> IpRecord {
        let na = || NOT_AVAILABLE.to_string();
        IpRecord {
            ip: self.query.unwrap_or_else(na),
            city: self.city.unwrap_or_else(na),
            region: self.region_name.unwrap_or_else(na),
            country: self.country.unwrap_or_else(na),
            latitude: self.lat,
            longitude: self.lon,
            isp: self.isp.unwrap_or_else(na),
            timezone: self.timezone.unwrap_or_else(na),
        }
    }
}

/// The service URL for a specific address, or for the caller's own address
/// when `ip` is absent or blank.
pub fn lookup_url(base_url: &str, ip: Option<&str>) -> String {
    match ip {
        Some(addr) if !addr.trim().is_empty() => format!("{}/json/{}", base_url, addr.trim()),
        _ => format!("{}/json/", base_url),
    }
}

/// Fetch details for a specific IP, or for the caller's IP when none is
/// given. One GET, no retries; the store is never touched here.
///
/// # Errors
///
/// `Transport` for connection failures, non-2xx statuses, and bodies that
/// are not the expected JSON — "could not ask", never "no data".
/// `Lookup` when the service itself refuses the query, carrying its
/// message verbatim.
pub async fn fetch_ip_details(
    client: &reqwest::Client,
    base_url: &str,
    ip: Option<&str>,
) -> Result<IpRecord, TrackerError> {
    let url = lookup_url(base_url, ip);
    client::log_request(&url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| TrackerError::Transport(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        client::log_response(&error_text);
        return Err(TrackerError::Transport(format!("HTTP {}: {}", status, error_text)));
    }

    let text = response
        .text()
        .await
        .map_err(|e| TrackerError::Transport(e.to_string()))?;
    client::log_response(&text);

    let record = parse_lookup_response(&text)?;
    tracing::info!(ip = %record.ip, country = %record.country, "lookup succeeded");
    Ok(record)
}

/// Decode a lookup payload into a normalized record, separating the
/// service's own refusals from malformed bodies.
pub fn parse_lookup_response(text: &str) -> Result<IpRecord, TrackerError> {
    let payload: GeoResponse = serde_json::from_str(text)
        .map_err(|e| TrackerError::Transport(format!("Failed to parse response: {}", e)))?;

    if payload.status != "success" {
        let message = payload.message.unwrap_or_else(|| "Unknown Error".to_string());
        tracing::warn!(%message, "lookup service refused the query");
        return Err(TrackerError::Lookup(message));
    }

    Ok(payload.into_record())
}
