//! Absolute origin (`scheme://host[:port]`) of an incoming request.

use crate::AppError;
use crate::state::LinkSettings;
use axum::http::{HeaderMap, header};

const X_FORWARDED_HOST: &str = "x-forwarded-host";
const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Determines the origin that absolute links for this request should use.
///
/// Resolution order:
/// 1. `public_base_url` from configuration, when set
/// 2. `X-Forwarded-Proto` / `X-Forwarded-Host`, only when `behind_proxy`
/// 3. `http` and the `Host` header (port kept)
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no usable host header is present or
/// the host contains characters that cannot appear in an authority.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "localhost:8000".parse().unwrap());
///
/// let origin = request_origin(&headers, &LinkSettings::default()).unwrap();
/// assert_eq!(origin, "http://localhost:8000");
/// ```
pub fn request_origin(headers: &HeaderMap, settings: &LinkSettings) -> Result<String, AppError> {
    if let Some(base) = &settings.public_base_url {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let forwarded_host = settings
        .behind_proxy
        .then(|| first_header_value(headers, X_FORWARDED_HOST))
        .flatten();

    let host = match forwarded_host {
        Some(host) => host,
        None => headers
            .get(header::HOST)
            .ok_or_else(|| AppError::bad_request("Missing Host header", serde_json::json!({})))?
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", serde_json::json!({})))?
            .trim(),
    };

    if host.is_empty()
        || host
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '/' | '\\' | '@' | '?' | '#'))
    {
        return Err(AppError::bad_request(
            "Invalid Host header",
            serde_json::json!({ "host": host }),
        ));
    }

    let scheme = settings
        .behind_proxy
        .then(|| first_header_value(headers, X_FORWARDED_PROTO))
        .flatten()
        .filter(|proto| proto.eq_ignore_ascii_case("https"))
        .map_or("http", |_| "https");

    Ok(format!("{}://{}", scheme, host))
}

/// Returns the first entry of a comma-separated header, as proxies append.
fn first_header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)?
        .to_str()
        .ok()?
        .split(',')
        .next()
        .map(str::trim)
        .filter(|v| !v.is_empty())
}
