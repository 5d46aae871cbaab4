//! HEAD request probing.

use chrono::DateTime;
use log::debug;
use reqwest::header::{HeaderMap, CONTENT_LENGTH, LAST_MODIFIED, LOCATION, SERVER};

use crate::error_handling::ReachabilityError;
use crate::reachability::types::ReachabilityResult;
use crate::security::normalize_url;

fn header_string(headers: &HeaderMap, name: reqwest::header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

async fn send_head(
    client: &reqwest::Client,
    url: &str,
) -> Result<ReachabilityResult, ReachabilityError> {
    let parsed = normalize_url(url).map_err(|e| ReachabilityError::InvalidUrl(e.to_string()))?;
    let resp = client.head(parsed.as_str()).send().await?;

    let status = resp.status().as_u16() as i32;
    let headers = resp.headers();

    let content_length = header_string(headers, CONTENT_LENGTH)
        .and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(-1);
    let last_modified = header_string(headers, LAST_MODIFIED)
        .and_then(|v| DateTime::parse_from_rfc2822(v.trim()).ok())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0);

    Ok(ReachabilityResult {
        is_reachable: (200..=399).contains(&status),
        response_code: status,
        content_length,
        last_modified,
        server_info: header_string(headers, SERVER),
        redirect_location: header_string(headers, LOCATION),
        is_redirect: (300..=399).contains(&status),
        error: None,
    })
}

/// Probes a URL with a single HEAD request.
///
/// The client is expected to have redirects disabled (see
/// `initialization::init_probe_client`) so 3xx responses are reported with
/// their `Location` instead of being followed. Failures never propagate: they
/// are folded into the result's `error` field with `response_code == -1`.
///
/// # Arguments
///
/// * `client` - HTTP client with redirects disabled and short timeouts
/// * `url` - URL to probe; a missing scheme defaults to `http://`
pub async fn check_reachability(client: &reqwest::Client, url: &str) -> ReachabilityResult {
    match send_head(client, url).await {
        Ok(result) => {
            debug!("Probed {url}: HTTP {}", result.response_code);
            result
        }
        Err(e) => {
            debug!("Probe failed for {url}: {e}");
            ReachabilityResult::failed(e.to_string())
        }
    }
}
